//! Core orchestration — scroll offset in, derived layout state out.
//!
//! Nothing in this module depends on any TUI or rendering crate.  All of it is
//! synchronous and runs to completion inside whichever input handler called it.

pub mod band;
pub mod capacity;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod governor;
pub mod hysteresis;
pub mod stage;
