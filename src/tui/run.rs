//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! A key reader thread forwards crossterm events into an mpsc channel;
//! the event loop owns the App (and so the television) and is the only
//! code that mutates it.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info, warn};

use crate::assets::AssetLibrary;
use crate::types::{Button, RemoteConfig};

use super::state::{Action, App, AppEvent, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let button = match key.code {
        KeyCode::Char('p') | KeyCode::Char('P') => Button::Power,
        KeyCode::Char('m') | KeyCode::Char('M') => Button::Mute,

        // Channel
        KeyCode::Up | KeyCode::Char('k') | KeyCode::PageUp => Button::ChannelUp,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::PageDown => Button::ChannelDown,

        // Volume
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') | KeyCode::Char('=') => {
            Button::VolumeUp
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => Button::VolumeDown,

        // Direct entry; the television ignores numbers outside its range
        KeyCode::Char(c @ '0'..='9') => Button::Channel(c as u8 - b'0'),

        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),

        _ => return None,
    };

    Some(Action::Press(button))
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let app_event = match event::read() {
                // Windows reports releases too; act on presses only
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Resize(..)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(_) => break,
            };
            if tx.send(app_event).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the remote until the user quits.
pub fn run(config: RemoteConfig) -> io::Result<()> {
    let assets = AssetLibrary::from_dir(config.asset_dir.as_deref());
    let mut app = App::new(assets);

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    info!(asset_dir = ?config.asset_dir, "remote started");

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx);

    let result = event_loop(&mut terminal, &mut app, &rx);

    // Restore even after a loop error; the loop error takes precedence
    let restored = restore_terminal();
    if let Err(error) = &restored {
        warn!(%error, "failed to restore terminal");
    }
    info!(state = %app.tv, "remote stopped");
    finish(result, restored)
}

/// Combine the event loop outcome with terminal restoration, preferring
/// the loop's error when both fail.
fn finish(result: io::Result<()>, restored: io::Result<()>) -> io::Result<()> {
    result.and(restored)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rx: &mpsc::Receiver<AppEvent>,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Block on next event
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => return Ok(()), // reader thread gone
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key) {
                    if update(app, action) == Transition::Quit {
                        debug!("quit requested");
                    }
                }
            }
            AppEvent::Resize => {}
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
