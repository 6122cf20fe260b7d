//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Green: powered on, audible
//! - Red: muted, powered off
//! - Cyan: interactive elements (keybinding hints)
//! - Dim: de-emphasized (hints, inactive presets)

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Powered on / audible — green.
pub const STYLE_ON: Style = Style::new().fg(Color::Green);

/// Powered off / muted — red.
pub const STYLE_OFF: Style = Style::new().fg(Color::Red);

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized metadata — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text — bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Picture on the screen panel.
pub const STYLE_SCREEN: Style = Style::new().fg(Color::White).bg(Color::Black);

/// Current channel among the presets.
pub const STYLE_CURRENT: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// MUTE badge.
pub const STYLE_MUTE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Red)
    .add_modifier(Modifier::BOLD);

/// Volume gauge fill.
pub const STYLE_VOLUME: Style = Style::new().fg(Color::Cyan);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
