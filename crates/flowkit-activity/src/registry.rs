//! Lookup of activity shapes by the pen name the editor stores.

use lyon::path::Path;
use tracing::warn;

use flowkit_core::Rect;

use crate::final_node::{ActivityFinal, OutlineConfig};

/// Activity-diagram shapes that have a path outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivityShape {
    Final(ActivityFinal),
}

impl ActivityShape {
    /// Pen names understood by [`ActivityShape::from_name`].
    pub const NAMES: [&'static str; 1] = ["activityFinal"];

    /// Resolves a pen name to its shape, using default outline settings.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_name_with(name, OutlineConfig::default())
    }

    /// Resolves a pen name to its shape with explicit outline settings.
    pub fn from_name_with(name: &str, config: OutlineConfig) -> Option<Self> {
        match name {
            "activityFinal" => Some(Self::Final(ActivityFinal::new(config))),
            unknown => {
                warn!("No activity outline registered for pen name {}", unknown);
                None
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Final(_) => "activityFinal",
        }
    }

    pub fn build_path(&self, rect: &Rect) -> Path {
        match self {
            Self::Final(shape) => shape.build(rect),
        }
    }
}
