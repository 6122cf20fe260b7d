//! TUI state algebra: the model, actions and transitions.
//!
//! The App owns the television and the screen art. It does not wrap or
//! extend the television; the update function drives it from outside
//! and the view reads it back through its accessors.

use crossterm::event::KeyEvent;

use crate::assets::AssetLibrary;
use crate::television::Television;
use crate::types::Button;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// Terminal resized; redraw only.
    Resize,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// The television being controlled.
    pub tv: Television,

    /// Art shown on the screen panel.
    pub assets: AssetLibrary,

    /// Most recent button pressed, shown in the status line.
    pub last_button: Option<Button>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Fresh television (off) with the given art.
    pub fn new(assets: AssetLibrary) -> Self {
        App {
            tv: Television::new(),
            assets,
            last_button: None,
            should_quit: false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AssetLibrary::builtin())
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Press a remote button.
    Press(Button),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running and redraw.
    Continue,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================
