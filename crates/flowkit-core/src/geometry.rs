//! Configurable rectangle hit-testing and resizing.
//!
//! The size thresholds that decide when rotation is ignored and how small a
//! rect may be resized live in [`GeometryConfig`], so the same engine works
//! for editors drawing at very different visual scales.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::GeometryError;
use crate::point::{rotate_point, Point};
use crate::rect::{point_in_vertices, Rect};

/// Default smallest width/height a resize may produce.
pub const DEFAULT_MIN_RESIZE_EXTENT: f64 = 5.0;

/// Default size below which a rect's rotation is ignored by hit tests.
pub const DEFAULT_ROTATION_THRESHOLD: f64 = 20.0;

/// Tunable thresholds for [`RectGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Resizes producing a width or height below this are rejected
    pub min_resize_extent: f64,
    /// Rects thinner than this in either dimension are hit-tested unrotated
    pub rotation_threshold: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            min_resize_extent: DEFAULT_MIN_RESIZE_EXTENT,
            rotation_threshold: DEFAULT_ROTATION_THRESHOLD,
        }
    }
}

impl GeometryConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), GeometryError> {
        let checks = [
            ("min_resize_extent", self.min_resize_extent),
            ("rotation_threshold", self.rotation_threshold),
        ];
        for (key, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(GeometryError::InvalidConfig {
                    key: key.to_string(),
                    reason: format!("must be a finite value >= 0, got {}", value),
                });
            }
        }
        Ok(())
    }
}

/// One of the eight drag handles around a selected rect.
///
/// Corners come first, clockwise from the top-left, then the edge
/// midpoints clockwise from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeHandle {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    Top,
    Right,
    Bottom,
    Left,
}

impl ResizeHandle {
    /// All handles in index order.
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::TopLeft,
        ResizeHandle::TopRight,
        ResizeHandle::BottomRight,
        ResizeHandle::BottomLeft,
        ResizeHandle::Top,
        ResizeHandle::Right,
        ResizeHandle::Bottom,
        ResizeHandle::Left,
    ];

    /// The numeric handle index (0..=7).
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ResizeHandle {
    type Error = GeometryError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(GeometryError::InvalidResizeHandle(index))
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopLeft => write!(f, "top-left"),
            Self::TopRight => write!(f, "top-right"),
            Self::BottomRight => write!(f, "bottom-right"),
            Self::BottomLeft => write!(f, "bottom-left"),
            Self::Top => write!(f, "top"),
            Self::Right => write!(f, "right"),
            Self::Bottom => write!(f, "bottom"),
            Self::Left => write!(f, "left"),
        }
    }
}

/// Rect operations that depend on [`GeometryConfig`] thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RectGeometry {
    config: GeometryConfig,
}

impl RectGeometry {
    pub fn new(config: GeometryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// Tests whether `pt` lies strictly inside `rect`, honouring rotation.
    ///
    /// Returns `None` when there is no rect to test against. Rotation is
    /// ignored for whole turns and for rects thinner than the rotation
    /// threshold; points on the boundary are outside.
    pub fn point_in_rect(&self, pt: &Point, rect: Option<&Rect>) -> Option<bool> {
        let rect = rect?;
        let threshold = self.config.rotation_threshold;
        if rect.rotate == 0.0
            || rect.width < threshold
            || rect.height < threshold
            || rect.rotate % 360.0 == 0.0
        {
            return Some(pt.x > rect.x && pt.x < rect.ex && pt.y > rect.y && pt.y < rect.ey);
        }

        let center = rect.center_point();
        let mut corners = [
            Point::new(rect.x, rect.y),
            Point::new(rect.ex, rect.y),
            Point::new(rect.ex, rect.ey),
            Point::new(rect.x, rect.ey),
        ];
        for corner in corners.iter_mut() {
            rotate_point(corner, rect.rotate, &center);
        }
        Some(point_in_vertices(pt, &corners))
    }

    /// Resizes `rect` by dragging `handle` by `(offset_x, offset_y)`.
    ///
    /// The edge or corner opposite the handle stays put. If the result would
    /// be narrower or shorter than the minimum extent, nothing is modified
    /// and [`GeometryError::BelowMinimumExtent`] is returned.
    pub fn resize_rect(
        &self,
        rect: &mut Rect,
        offset_x: f64,
        offset_y: f64,
        handle: ResizeHandle,
    ) -> Result<(), GeometryError> {
        let min = self.config.min_resize_extent;
        let (width, height) = match handle {
            ResizeHandle::TopLeft => (rect.width - offset_x, rect.height - offset_y),
            ResizeHandle::TopRight => (rect.width + offset_x, rect.height - offset_y),
            ResizeHandle::BottomRight => (rect.width + offset_x, rect.height + offset_y),
            ResizeHandle::BottomLeft => (rect.width - offset_x, rect.height + offset_y),
            ResizeHandle::Top => (rect.width, rect.height - offset_y),
            ResizeHandle::Right => (rect.width + offset_x, rect.height),
            ResizeHandle::Bottom => (rect.width, rect.height + offset_y),
            ResizeHandle::Left => (rect.width - offset_x, rect.height),
        };

        // Edge handles only check the dimension they move.
        let too_small = match handle {
            ResizeHandle::Top | ResizeHandle::Bottom => height < min,
            ResizeHandle::Left | ResizeHandle::Right => width < min,
            _ => width < min || height < min,
        };
        if too_small {
            debug!(
                "Rejecting {} resize to {}x{} (minimum {})",
                handle, width, height, min
            );
            return Err(GeometryError::BelowMinimumExtent { width, height, min });
        }

        match handle {
            ResizeHandle::TopLeft => {
                rect.x += offset_x;
                rect.y += offset_y;
            }
            ResizeHandle::TopRight => {
                rect.ex += offset_x;
                rect.y += offset_y;
            }
            ResizeHandle::BottomRight => {
                rect.ex += offset_x;
                rect.ey += offset_y;
            }
            ResizeHandle::BottomLeft => {
                rect.x += offset_x;
                rect.ey += offset_y;
            }
            ResizeHandle::Top => rect.y += offset_y,
            ResizeHandle::Right => rect.ex += offset_x,
            ResizeHandle::Bottom => rect.ey += offset_y,
            ResizeHandle::Left => rect.x += offset_x,
        }
        rect.width = width;
        rect.height = height;

        if rect.center.is_some() {
            rect.calc_center();
        }
        Ok(())
    }
}
