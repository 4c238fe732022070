//! Application orchestration — state management, event loop, and input handling.

pub mod event;
pub mod handler;
pub mod page;
pub mod state;
pub mod timer_runtime;
