//! Domain types for tv-remote.
//!
//! Plain data shared by the television, the report formatter and the
//! terminal remote. No behavior beyond parsing and defaults.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::television::{MIN_CHANNEL, MIN_VOLUME};

// ============================================================================
// STATE
// ============================================================================

/// Point-in-time copy of a television's state.
///
/// Carries no invariants of its own; `Television::from_state` clamps
/// anything out of range when turning a snapshot back into a television.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelevisionState {
    /// On/off.
    pub power: bool,
    /// Current channel.
    pub channel: u8,
    /// Current audible volume (0 while muted).
    pub volume: u8,
    /// Whether audio is suppressed.
    pub muted: bool,
    /// Volume to restore on unmute. Absent until the first mute.
    pub saved_volume: Option<u8>,
}

impl Default for TelevisionState {
    fn default() -> Self {
        Self {
            power: false,
            channel: MIN_CHANNEL,
            volume: MIN_VOLUME,
            muted: false,
            saved_volume: None,
        }
    }
}

// ============================================================================
// BUTTONS
// ============================================================================

/// A physical button on the remote.
///
/// Each press maps to exactly one television operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Power,
    Mute,
    ChannelUp,
    ChannelDown,
    VolumeUp,
    VolumeDown,
    /// Direct channel entry. Out-of-range values are accepted here and
    /// ignored by the television.
    Channel(u8),
}

/// A token on the command line that names no button.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown button '{token}' (expected power, mute, ch+, ch-, vol+, vol-, or a channel number)")]
pub struct ButtonParseError {
    pub token: String,
}

impl FromStr for Button {
    type Err = ButtonParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        let button = match token.as_str() {
            "power" | "pwr" => Button::Power,
            "mute" => Button::Mute,
            "ch+" | "channel-up" => Button::ChannelUp,
            "ch-" | "channel-down" => Button::ChannelDown,
            "vol+" | "volume-up" => Button::VolumeUp,
            "vol-" | "volume-down" => Button::VolumeDown,
            other => {
                let digits = other.strip_prefix("ch=").unwrap_or(other);
                let n = digits.parse::<u8>().map_err(|_| ButtonParseError {
                    token: s.to_string(),
                })?;
                Button::Channel(n)
            }
        };
        Ok(button)
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Button::Power => write!(f, "power"),
            Button::Mute => write!(f, "mute"),
            Button::ChannelUp => write!(f, "ch+"),
            Button::ChannelDown => write!(f, "ch-"),
            Button::VolumeUp => write!(f, "vol+"),
            Button::VolumeDown => write!(f, "vol-"),
            Button::Channel(n) => write!(f, "ch={}", n),
        }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for state reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Environment variable naming the screen-asset directory.
pub const ASSET_DIR_ENV: &str = "TV_REMOTE_ASSETS";

/// Configuration for a remote session.
#[derive(Debug, Clone, Default)]
pub struct RemoteConfig {
    /// Directory holding `channel_<n>.txt` / `black_screen.txt` art.
    /// None = built-in art only.
    pub asset_dir: Option<PathBuf>,
}

impl RemoteConfig {
    /// Resolve the asset directory: explicit path, then `TV_REMOTE_ASSETS`,
    /// then `<data dir>/tv-remote/images` if it exists.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let from_env = std::env::var_os(ASSET_DIR_ENV).map(PathBuf::from);
        Self::resolve_from(explicit, from_env, default_asset_dir())
    }

    /// Resolution with every source supplied by the caller.
    pub fn resolve_from(
        explicit: Option<PathBuf>,
        from_env: Option<PathBuf>,
        default_dir: Option<PathBuf>,
    ) -> Self {
        let asset_dir = explicit
            .or(from_env)
            .or_else(|| default_dir.filter(|d| d.is_dir()));
        RemoteConfig { asset_dir }
    }
}

/// `<data dir>/tv-remote/images`, e.g. `~/.local/share/tv-remote/images`.
pub fn default_asset_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("tv-remote").join("images"))
}

// ============================================================================
// TESTS
// ============================================================================
