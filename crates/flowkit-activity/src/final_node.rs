use lyon::math::{point, vector, Angle};
use lyon::path::{Path, Winding};
use serde::{Deserialize, Serialize};
use tracing::debug;

use flowkit_core::Rect;

/// Default inner/outer radius ratio of the activity-final bullseye.
pub const DEFAULT_INNER_RADIUS_RATIO: f64 = 0.5;

/// Outline settings shared by the activity shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Inner ellipse radii as a fraction of the outer radii
    pub inner_radius_ratio: f64,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            inner_radius_ratio: DEFAULT_INNER_RADIUS_RATIO,
        }
    }
}

/// The activity-final node: a bullseye of two concentric ellipses filling
/// the pen's rect.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActivityFinal {
    config: OutlineConfig,
}

impl ActivityFinal {
    pub fn new(config: OutlineConfig) -> Self {
        Self { config }
    }

    /// Builds both ellipses into one path. Rotation is ignored; zero-sized
    /// rects give a degenerate path collapsed onto the center.
    pub fn build(&self, rect: &Rect) -> Path {
        let cx = rect.x + rect.width / 2.0;
        let cy = rect.y + rect.height / 2.0;
        let rx = rect.width / 2.0;
        let ry = rect.height / 2.0;
        let ratio = self.config.inner_radius_ratio;
        debug!(
            "Building activity-final outline at ({}, {}) with radii {}x{}",
            cx, cy, rx, ry
        );

        let mut builder = Path::builder();
        for (radius_x, radius_y) in [(rx, ry), (rx * ratio, ry * ratio)] {
            builder.add_ellipse(
                point(cx as f32, cy as f32),
                vector(radius_x as f32, radius_y as f32),
                Angle::radians(0.0),
                Winding::Positive,
            );
        }
        builder.build()
    }
}

/// Outline of an activity-final node with the default inner radius
/// (a quarter of the rect's width and height).
pub fn activity_final(rect: &Rect) -> Path {
    ActivityFinal::default().build(rect)
}
