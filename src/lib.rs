//! tv-remote: a television state machine and its remote control.

pub mod assets;
pub mod report;
pub mod television;
pub mod tui;
pub mod types;
