//! Terminal remote control.
//!
//! - `state`: the App model, actions and transitions
//! - `update`: applies actions to the television
//! - `view`: pure rendering
//! - `run`: effects (terminal, key reader, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
