/// Stereo compositing modes.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// How the two eye views share the stereo band.
///
/// Only affects viewport routing; camera poses never depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// Left half / right half, opaque
    #[default]
    #[serde(rename = "SBS")]
    SideBySide,
    /// Both eyes full band, tinted cyan/red, additive
    #[serde(rename = "OVERLAY")]
    Overlay,
    /// Both eyes full band, red/cyan channel separation for glasses
    #[serde(rename = "ANAGLYPH")]
    Anaglyph,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::SideBySide, ViewMode::Overlay, ViewMode::Anaglyph];

    /// Both eye views are stacked on the same region.
    pub fn is_stacked(&self) -> bool {
        !matches!(self, ViewMode::SideBySide)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::SideBySide => "SBS",
            ViewMode::Overlay => "OVERLAY",
            ViewMode::Anaglyph => "ANAGLYPH",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown view mode identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseViewModeError(pub String);

impl fmt::Display for ParseViewModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown view mode '{}' (expected SBS, OVERLAY or ANAGLYPH)", self.0)
    }
}

impl std::error::Error for ParseViewModeError {}

impl FromStr for ViewMode {
    type Err = ParseViewModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sbs" | "side-by-side" | "side_by_side" => Ok(ViewMode::SideBySide),
            "overlay" => Ok(ViewMode::Overlay),
            "anaglyph" => Ok(ViewMode::Anaglyph),
            _ => Err(ParseViewModeError(s.to_string())),
        }
    }
}
