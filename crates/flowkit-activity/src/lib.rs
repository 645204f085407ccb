//! # flowkit Activity
//!
//! Outlines for UML activity-diagram nodes. Each shape turns the world rect
//! of its pen into a `lyon` path that a rendering backend can stroke or fill
//! directly, or export as SVG path data.

pub mod final_node;
pub mod registry;
pub mod svg;

pub use final_node::{activity_final, ActivityFinal, OutlineConfig};
pub use registry::ActivityShape;
pub use svg::path_to_svg;
