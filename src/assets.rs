//! Screen assets: what the television shows for a given state.
//!
//! Naming convention: `channel_<n>` while powered on, `black_screen`
//! while off. Art is plain text (one file per asset, `<name>.txt`).
//! Loading never fails as a whole: any asset that cannot be read falls
//! back to built-in art and is logged.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::television::{MAX_CHANNEL, MIN_CHANNEL};
use crate::types::TelevisionState;

/// Name of the asset shown while powered off.
pub const BLANK_ASSET: &str = "black_screen";

/// Extension of asset files inside the asset directory.
pub const ASSET_EXTENSION: &str = "txt";

// ============================================================================
// ASSET IDENTITY
// ============================================================================

/// Which picture belongs on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScreenAsset {
    Blank,
    Channel(u8),
}

impl ScreenAsset {
    /// Blank when off, the current channel's picture when on.
    pub fn for_state(state: &TelevisionState) -> Self {
        if state.power {
            ScreenAsset::Channel(state.channel)
        } else {
            ScreenAsset::Blank
        }
    }

    /// Conventional file stem: `black_screen` or `channel_<n>`.
    pub fn name(&self) -> String {
        match self {
            ScreenAsset::Blank => BLANK_ASSET.to_string(),
            ScreenAsset::Channel(n) => format!("channel_{}", n),
        }
    }

    /// Every asset the remote can ask for.
    pub fn all() -> impl Iterator<Item = ScreenAsset> {
        std::iter::once(ScreenAsset::Blank)
            .chain((MIN_CHANNEL..=MAX_CHANNEL).map(ScreenAsset::Channel))
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Why a single asset could not be loaded.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read asset {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// ============================================================================
// LIBRARY
// ============================================================================

/// Art for every screen asset.
#[derive(Debug, Clone)]
pub struct AssetLibrary {
    art: BTreeMap<ScreenAsset, String>,
    /// Assets that fell back to built-in art during `load`.
    fallbacks: Vec<ScreenAsset>,
}

impl AssetLibrary {
    /// Generated test cards, no filesystem access.
    pub fn builtin() -> Self {
        let art = ScreenAsset::all()
            .map(|asset| (asset, builtin_art(asset)))
            .collect();
        AssetLibrary {
            art,
            fallbacks: Vec::new(),
        }
    }

    /// Load `<name>.txt` for every asset from `dir`.
    ///
    /// Missing or unreadable files keep the built-in art. Each fallback
    /// is logged and recorded in [`AssetLibrary::fallbacks`].
    pub fn load(dir: &Path) -> Self {
        let mut library = Self::builtin();

        for asset in ScreenAsset::all() {
            match read_asset(dir, asset) {
                Ok(text) => {
                    debug!(asset = %asset.name(), "loaded screen asset");
                    library.art.insert(asset, text);
                }
                Err(error) => {
                    warn!(asset = %asset.name(), %error, "using built-in screen art");
                    library.fallbacks.push(asset);
                }
            }
        }

        library
    }

    /// `load` when a directory is configured, `builtin` otherwise.
    pub fn from_dir(dir: Option<&Path>) -> Self {
        match dir {
            Some(dir) => Self::load(dir),
            None => Self::builtin(),
        }
    }

    /// Art for `asset`. Unknown channels show the blank screen.
    pub fn art(&self, asset: ScreenAsset) -> &str {
        self.art
            .get(&asset)
            .or_else(|| self.art.get(&ScreenAsset::Blank))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn fallbacks(&self) -> &[ScreenAsset] {
        &self.fallbacks
    }
}

impl Default for AssetLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Path of `asset` inside `dir`.
pub fn asset_path(dir: &Path, asset: ScreenAsset) -> PathBuf {
    dir.join(format!("{}.{}", asset.name(), ASSET_EXTENSION))
}

fn read_asset(dir: &Path, asset: ScreenAsset) -> Result<String, AssetError> {
    let path = asset_path(dir, asset);
    std::fs::read_to_string(&path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            AssetError::NotFound { path }
        } else {
            AssetError::Unreadable { path, source }
        }
    })
}

/// A small framed test card with the channel number in the middle.
fn builtin_art(asset: ScreenAsset) -> String {
    match asset {
        ScreenAsset::Blank => String::new(),
        ScreenAsset::Channel(n) => {
            // Bar pattern shifts per channel so adjacent channels look different.
            let bars = "█▓▒░ ░▒▓";
            let shift = usize::from(n) % 4;
            let row: String = bars.chars().cycle().skip(shift).take(24).collect();
            [
                row.clone(),
                String::new(),
                format!("{:^24}", format!("CH {}", n)),
                String::new(),
                row,
            ]
            .join("\n")
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
