//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* snapshot and turns it into cells on the
//! terminal.  It never writes state back.

pub mod content;
pub mod damping_indicator;
pub mod hero;
pub mod layout;
pub mod nav;
pub mod path_trace;
pub mod theme;
