//! Points and the rotate/scale/translate helpers that move them.
//!
//! A [`Point`] carries optional routing metadata used by connectors
//! (owning pen, connection target, anchor) and optional Bezier control
//! handles in `prev` / `next`. The helpers here mutate in place and move
//! the control handles together with the point.

use serde::{Deserialize, Serialize};

/// How the two Bezier control handles of a point relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrevNextType {
    /// Handles are mirrored in angle and length
    Mirror,
    /// Handles share an angle but not a length
    Bilateral,
    /// Handles move independently
    Free,
}

/// Represents a 2D point with X and Y coordinates plus routing metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pen_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_next_type: Option<PrevNextType>,
    /// Incoming Bezier control handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<Box<Point>>,
    /// Outgoing Bezier control handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Box<Point>>,
}

impl Point {
    /// Creates a bare point with no metadata.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Returns the bare coordinates, dropping metadata and handles.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn handles_mut(&mut self) -> impl Iterator<Item = &mut Point> {
        self.prev
            .iter_mut()
            .chain(self.next.iter_mut())
            .map(|handle| handle.as_mut())
    }
}

/// Rotates `pt` (and its control handles) by `angle` degrees around `center`.
///
/// Angles of zero or whole turns leave the point untouched, so repeated
/// full rotations never accumulate floating point drift.
pub fn rotate_point(pt: &mut Point, angle: f64, center: &Point) {
    if angle == 0.0 || angle % 360.0 == 0.0 {
        return;
    }
    let (sin_a, cos_a) = angle.to_radians().sin_cos();
    rotate_xy(pt, sin_a, cos_a, center);
    for handle in pt.handles_mut() {
        rotate_xy(handle, sin_a, cos_a, center);
    }
}

fn rotate_xy(pt: &mut Point, sin_a: f64, cos_a: f64, center: &Point) {
    let dx = pt.x - center.x;
    let dy = pt.y - center.y;
    pt.x = center.x + dx * cos_a - dy * sin_a;
    pt.y = center.y + dx * sin_a + dy * cos_a;
}

/// Scales `pt` (and its control handles) by `scale` relative to `center`.
pub fn scale_point(pt: &mut Point, scale: f64, center: &Point) {
    scale_xy(pt, scale, center);
    for handle in pt.handles_mut() {
        scale_xy(handle, scale, center);
    }
}

fn scale_xy(pt: &mut Point, scale: f64, center: &Point) {
    pt.x = center.x + (pt.x - center.x) * scale;
    pt.y = center.y + (pt.y - center.y) * scale;
}

/// Shifts `pt` (and its control handles) by `(dx, dy)`.
pub fn translate_point(pt: &mut Point, dx: f64, dy: f64) {
    pt.x += dx;
    pt.y += dy;
    for handle in pt.handles_mut() {
        handle.x += dx;
        handle.y += dy;
    }
}
