//! flowkit Settings Crate
//!
//! Handles configuration files: the geometry thresholds used by the hit
//! tests and resizes, and the outline settings of activity shapes.

pub mod config;
pub mod error;

pub use config::{Config, CONFIG_FILE_NAME};
pub use error::{SettingsError, SettingsResult};
