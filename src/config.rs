//! vortexmath configuration
//!
//! All tunable parameters in one place. Loaded from TOML at startup,
//! falls back to defaults if no config file exists.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vortexmath_core::{ColorMode, DigitPolicy, FrequencyMode};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VortexConfig {
    /// How raw integers become digits.
    pub input: InputConfig,
    /// HSL rendering.
    pub color: ColorConfig,
    /// Frequency formula.
    pub frequency: FrequencyConfig,
    /// Output formatting.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// "wrap" keeps the last decimal digit, "reject" errors on anything outside 0-9.
    pub policy: DigitPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// "clamped" caps saturation/lightness at 100, "legacy" does not.
    pub mode: ColorMode,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyConfig {
    /// "standard", "digital_root" or "ninth".
    pub mode: FrequencyMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit JSON instead of text.
    pub json: bool,
    /// Include the vortex flow sequence in text output.
    pub show_sequence: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            show_sequence: true,
        }
    }
}

// ============================================================
// Loading
// ============================================================

impl VortexConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::debug!("No config at {} - using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Strict variant of `load`: a missing or malformed file is an error.
    pub fn load_strict(path: &Path) -> vortexmath_core::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| vortexmath_core::Error::config(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| vortexmath_core::Error::config(format!("{}: {}", path.display(), e)))
    }

    /// Write the current config as TOML (for generating a default config file).
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// `~/.vortexmath/vortexmath.toml`
    pub fn default_path() -> PathBuf {
        expand_tilde("~/.vortexmath/vortexmath.toml")
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}
