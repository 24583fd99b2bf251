//! Tunable engine constants with TOML preset support.
//!
//! The tint colors, opacities and observer placement are visual choices,
//! not physical constraints, so they live here instead of being hard-coded.
//! All sub-structs use `#[serde(default)]`; a partial TOML file only
//! overrides what it names.

mod animation;
mod compositing;
mod rig;

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::engine_bail;

pub use animation::AnimationOptions;
pub use compositing::{CompositingOptions, StackedModeOptions};
pub use rig::RigOptions;

/// Top-level options container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Observer placement and camera projection.
    pub rig: RigOptions,
    /// Viewport layout, tints and blending.
    pub compositing: CompositingOptions,
    /// Subject rotation speed.
    pub animation: AnimationOptions,
}

impl EngineOptions {
    /// Parse options from a TOML string and validate them.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: EngineOptions = match toml::from_str(content) {
            Ok(options) => options,
            Err(e) => engine_bail!("binocular::Options", InvalidOptions, "TOML parse error: {}", e),
        };
        options.validate()?;
        Ok(options)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        match toml::to_string_pretty(self) {
            Ok(content) => Ok(content),
            Err(e) => engine_bail!("binocular::Options", InvalidOptions, "TOML serialize error: {}", e),
        }
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the router or rig cannot use.
    pub fn validate(&self) -> Result<()> {
        self.rig.validate()?;
        self.compositing.validate()
    }
}

/// Shared range check for option fields.
pub(crate) fn check_range(name: &str, value: f32, min: f32, max: f32) -> Result<()> {
    if !value.is_finite() || value < min || value > max {
        engine_bail!(
            "binocular::Options",
            InvalidOptions,
            "{} = {} is outside [{}, {}]",
            name,
            value,
            min,
            max
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
