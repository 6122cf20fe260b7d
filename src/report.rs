//! Report formatting for television state.
//!
//! Pure functions — (TelevisionState, OutputFormat) → String.
//! No I/O, no side effects.

use crate::assets::ScreenAsset;
use crate::television::MAX_VOLUME;
use crate::types::{OutputFormat, TelevisionState};

/// Format a state snapshot for output.
pub fn format_state(state: &TelevisionState, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(state),
        OutputFormat::Json => format_json(state),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(state: &TelevisionState) -> String {
    let mut out = String::new();

    out.push_str("=== Television ===\n");
    out.push_str(&format!(
        "Power:    {}\n",
        if state.power { "On" } else { "Off" }
    ));
    out.push_str(&format!("Channel:  {}\n", state.channel));
    out.push_str(&format!("Volume:   {}/{}\n", state.volume, MAX_VOLUME));
    out.push_str(&format!(
        "Muted:    {}\n",
        if state.muted { "yes" } else { "no" }
    ));
    if let Some(saved) = state.saved_volume {
        out.push_str(&format!("Restores: {}\n", saved));
    }
    out.push_str(&format!(
        "Screen:   {}\n",
        ScreenAsset::for_state(state).name()
    ));

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(state: &TelevisionState) -> String {
    let mut out = serde_json::to_string_pretty(state).unwrap_or_else(|e| {
        // Plain struct of bools and integers; serialization cannot fail
        panic!("Failed to serialize state to JSON: {}", e)
    });
    // Both formats end in a newline so callers can `print!` either one
    out.push('\n');
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn muted_on_channel_3() -> TelevisionState {
        TelevisionState {
            power: true,
            channel: 3,
            volume: 0,
            muted: true,
            saved_volume: Some(40),
        }
    }

    #[test]
    fn human_format_lists_every_field() {
        let out = format_state(&muted_on_channel_3(), OutputFormat::Human);
        assert!(out.contains("Power:    On"));
        assert!(out.contains("Channel:  3"));
        assert!(out.contains("Volume:   0/100"));
        assert!(out.contains("Muted:    yes"));
        assert!(out.contains("Restores: 40"));
        assert!(out.contains("Screen:   channel_3"));
    }

    #[test]
    fn human_format_off_shows_blank_and_no_restore_line() {
        let out = format_state(&TelevisionState::default(), OutputFormat::Human);
        assert!(out.contains("Power:    Off"));
        assert!(out.contains("Screen:   black_screen"));
        assert!(!out.contains("Restores"));
    }

    #[test]
    fn json_format_is_parseable_snapshot() {
        let state = muted_on_channel_3();
        let out = format_state(&state, OutputFormat::Json);
        let parsed: TelevisionState = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, state);

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["channel"], 3);
        assert_eq!(value["saved_volume"], 40);
    }

    #[test]
    fn both_formats_end_with_newline() {
        let state = muted_on_channel_3();
        let json = format_state(&state, OutputFormat::Json);
        assert!(json.ends_with("}\n"));
        assert!(!json.ends_with("\n\n"));
        assert!(format_state(&state, OutputFormat::Human).ends_with('\n'));
    }

    #[test]
    fn json_absent_saved_volume_is_null() {
        let out = format_state(&TelevisionState::default(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["saved_volume"].is_null());
    }
}
