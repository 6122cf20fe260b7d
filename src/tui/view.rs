//! Pure rendering: map App state to ratatui widget trees.
//!
//! The view only reads the television through its accessors, after the
//! update has run. Visibility rules:
//! - off: blank screen, no channel label, no volume gauge, no MUTE badge
//! - on: channel art, channel label, volume gauge, MUTE badge while muted

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, Paragraph};
use ratatui::Frame;

use crate::assets::ScreenAsset;
use crate::television::{MAX_CHANNEL, MAX_VOLUME, MIN_CHANNEL, Television};

use super::state::App;
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the remote to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(&app.tv), chunks[0]);
    frame.render_widget(render_help(), chunks[2]);

    let content = Layout::vertical([
        Constraint::Min(3),    // screen
        Constraint::Length(1), // channel label + mute badge
        Constraint::Length(1), // volume gauge
        Constraint::Length(1), // presets
        Constraint::Length(1), // last button
    ])
    .split(chunks[1]);

    render_screen(app, frame, content[0]);
    frame.render_widget(render_channel_line(&app.tv), content[1]);
    render_volume(&app.tv, frame, content[2]);
    frame.render_widget(render_presets(&app.tv), content[3]);
    frame.render_widget(render_status(app), content[4]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title(tv: &Television) -> Paragraph<'static> {
    let (power_text, power_style) = if tv.status() {
        ("● ON", theme::STYLE_ON)
    } else {
        ("○ OFF", theme::STYLE_OFF)
    };

    Paragraph::new(Line::from(vec![
        Span::styled("tv-remote  ", theme::STYLE_TITLE),
        Span::styled(power_text, power_style),
    ]))
}

fn render_help() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        "[p] power  [m] mute  [↑/↓] channel  [+/-] volume  [1-6] preset  [q] quit",
        theme::STYLE_HELP,
    )))
}

// ============================================================================
// SCREEN PANEL
// ============================================================================

fn render_screen(app: &App, frame: &mut Frame, area: Rect) {
    let asset = ScreenAsset::for_state(&app.tv.snapshot());
    let art = app.assets.art(asset);

    let block = Block::bordered()
        .title(Span::styled(format!(" {} ", asset.name()), theme::STYLE_DIM))
        .style(theme::STYLE_SCREEN);

    let lines: Vec<Line> = art.lines().map(|l| Line::from(l.to_string())).collect();
    let picture = Paragraph::new(lines)
        .block(block)
        .centered()
        .style(theme::STYLE_SCREEN);

    frame.render_widget(picture, area);
}

// ============================================================================
// STATUS ROWS
// ============================================================================

fn render_channel_line(tv: &Television) -> Paragraph<'static> {
    if !tv.status() {
        return Paragraph::new("");
    }

    let mut spans = vec![Span::styled(
        format!("  Channel {}", tv.channel()),
        theme::STYLE_IMPORTANT,
    )];
    if tv.muted() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(" MUTE ", theme::STYLE_MUTE));
    }

    Paragraph::new(Line::from(spans))
}

fn render_volume(tv: &Television, frame: &mut Frame, area: Rect) {
    if !tv.status() {
        return;
    }

    let volume = tv.volume();
    let gauge = Gauge::default()
        .gauge_style(if tv.muted() {
            theme::STYLE_OFF
        } else {
            theme::STYLE_VOLUME
        })
        .ratio(f64::from(volume) / f64::from(MAX_VOLUME))
        .label(format!("Volume {}", volume));

    frame.render_widget(gauge, area);
}

fn render_presets(tv: &Television) -> Paragraph<'static> {
    let mut spans = vec![Span::styled("  ", theme::STYLE_DIM)];
    for n in MIN_CHANNEL..=MAX_CHANNEL {
        let style = if tv.status() && tv.channel() == n {
            theme::STYLE_CURRENT
        } else if tv.status() {
            theme::STYLE_INTERACTIVE
        } else {
            theme::STYLE_DIM
        };
        spans.push(Span::styled(format!("[{}]", n), style));
        spans.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(spans))
}

fn render_status(app: &App) -> Paragraph<'static> {
    let mut spans = Vec::new();
    if let Some(button) = app.last_button {
        spans.push(Span::styled(format!("  last: {}", button), theme::STYLE_DIM));
    }
    let fallbacks = app.assets.fallbacks().len();
    if fallbacks > 0 {
        spans.push(Span::styled(
            format!("  ({} screen asset{} using built-in art)", fallbacks, if fallbacks == 1 { "" } else { "s" }),
            theme::STYLE_DIM,
        ));
    }
    Paragraph::new(Line::from(spans))
}

// ============================================================================
// TESTS
// ============================================================================
