//! # flowkit
//!
//! Geometry and shape outlines for a browser-style diagram editor:
//! - Hit-testing of plain and rotated rects, point-in-polygon tests
//! - Union bounds of a selection of pens
//! - Translate, anchored resize and scale transforms
//! - Normalized coordinates for children of a container
//! - UML activity-final node outlines as `lyon` paths or SVG path data
//!
//! ## Architecture
//!
//! flowkit is organized as a workspace with multiple crates:
//!
//! 1. **flowkit-core** - Points, rects, pens, geometry operations, errors
//! 2. **flowkit-activity** - Activity-diagram outlines and SVG export
//! 3. **flowkit-settings** - Configuration files and validation
//! 4. **flowkit** - Re-exports, logging setup and the `flowkit` inspector

use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

pub use flowkit_activity as activity;
pub use flowkit_core as geometry;
pub use flowkit_settings as settings;

pub use flowkit_activity::{activity_final, path_to_svg, ActivityFinal, ActivityShape};
pub use flowkit_core::{
    get_rect, point_in_rect, Error, GeometryConfig, GeometryError, Pen, PenData, Point, Rect,
    RectGeometry, ResizeHandle, Result,
};
pub use flowkit_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("FLOWKIT_BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Reads a JSON array of pens exported by the editor.
pub fn load_pens(path: &Path) -> Result<Vec<PenData>> {
    let content = std::fs::read_to_string(path)?;
    let pens: Vec<PenData> = serde_json::from_str(&content)
        .map_err(|e| Error::other(format!("Invalid diagram file {}: {}", path.display(), e)))?;
    debug!("Loaded {} pens from {}", pens.len(), path.display());
    Ok(pens)
}

/// Outline of one pen that has a registered activity shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PenOutline {
    pub id: String,
    pub name: String,
    /// SVG path data
    pub path: String,
}

/// Summary of a diagram: its union bounds and the outlines of its
/// activity shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramReport {
    pub pen_count: usize,
    /// `None` when no pen has a world rect
    pub bounds: Option<Rect>,
    pub outlines: Vec<PenOutline>,
}

/// Measures `pens` and builds outlines for the ones with a registered
/// activity shape.
pub fn inspect(pens: &[PenData], config: &Config) -> DiagramReport {
    let bounds = pens
        .iter()
        .any(|pen| pen.world_rect().is_some())
        .then(|| get_rect(pens));

    let outlines: Vec<PenOutline> = pens
        .iter()
        .filter_map(|pen| {
            let rect = pen.world_rect()?;
            let shape = ActivityShape::from_name_with(&pen.name, config.outline)?;
            Some(PenOutline {
                id: pen.id.clone(),
                name: shape.name().to_string(),
                path: path_to_svg(&shape.build_path(rect)),
            })
        })
        .collect();

    info!(
        "Inspected {} pens, {} with activity outlines",
        pens.len(),
        outlines.len()
    );
    DiagramReport {
        pen_count: pens.len(),
        bounds,
        outlines,
    }
}
