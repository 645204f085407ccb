//! Configuration for flowkit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, stored by default in the platform config directory.
//!
//! Configuration is organized into sections:
//! - Geometry thresholds (minimum resize extent, rotation threshold)
//! - Outline settings for activity shapes

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use flowkit_activity::OutlineConfig;
use flowkit_core::{GeometryConfig, RectGeometry};

use crate::error::{SettingsError, SettingsResult};

/// File name of the default configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Complete flowkit configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hit-test and resize thresholds
    pub geometry: GeometryConfig,
    /// Activity shape outline settings
    pub outline: OutlineConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<platform config dir>/flowkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("flowkit").join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the config at `path`, falling back to defaults if the file does
    /// not exist.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if let Err(err) = self.geometry.validate() {
            warn!("Rejecting geometry settings: {}", err);
            return Err(err.into());
        }

        let ratio = self.outline.inner_radius_ratio;
        if !(0.0..=1.0).contains(&ratio) {
            return Err(SettingsError::InvalidSetting {
                key: "outline.inner_radius_ratio".to_string(),
                reason: format!("must be between 0 and 1, got {}", ratio),
            });
        }
        Ok(())
    }

    /// Geometry engine configured with these thresholds
    pub fn rect_geometry(&self) -> RectGeometry {
        RectGeometry::new(self.geometry)
    }
}
