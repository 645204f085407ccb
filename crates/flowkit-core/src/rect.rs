//! Rectangle geometry: hit tests, bounds, transforms and normalized
//! coordinates.
//!
//! A [`Rect`] stores both its origin/size and its far corner (`ex`, `ey`).
//! The far corner is always established when the rect is built or
//! deserialized, so the hit tests below never need to patch their input.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::GeometryError;
use crate::geometry::{RectGeometry, ResizeHandle};
use crate::pen::Pen;
use crate::point::{rotate_point, scale_point, Point};

/// An axis-aligned rectangle with an optional rotation about its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RectRepr")]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub ex: f64,
    pub ey: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation angle in degrees
    pub rotate: f64,
    /// Cached center, kept in sync by translate/scale/resize once present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Point>,
}

/// Wire form of a rect, where the far corner and rotation may be missing.
#[derive(Deserialize)]
struct RectRepr {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    ex: Option<f64>,
    ey: Option<f64>,
    #[serde(default)]
    width: f64,
    #[serde(default)]
    height: f64,
    #[serde(default)]
    rotate: f64,
    center: Option<Point>,
}

impl From<RectRepr> for Rect {
    fn from(raw: RectRepr) -> Self {
        Self {
            x: raw.x,
            y: raw.y,
            ex: raw.ex.unwrap_or(raw.x + raw.width),
            ey: raw.ey.unwrap_or(raw.y + raw.height),
            width: raw.width,
            height: raw.height,
            rotate: raw.rotate,
            center: raw.center,
        }
    }
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            ex: x + width,
            ey: y + height,
            width,
            height,
            rotate: 0.0,
            center: None,
        }
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotate = degrees;
        self
    }

    /// Recomputes `ex`/`ey` from the origin and size.
    pub fn calc_extents(&mut self) {
        self.ex = self.x + self.width;
        self.ey = self.y + self.height;
    }

    /// Recomputes the cached center from the origin and size.
    pub fn calc_center(&mut self) {
        self.center = Some(self.computed_center());
    }

    /// The cached center if present, otherwise the center derived from the
    /// origin and size. Never touches the cache.
    pub fn center_point(&self) -> Point {
        match &self.center {
            Some(center) => center.position(),
            None => self.computed_center(),
        }
    }

    fn computed_center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Tests whether `pt` lies strictly inside `rect` using the default
/// thresholds. See [`RectGeometry::point_in_rect`].
pub fn point_in_rect(pt: &Point, rect: Option<&Rect>) -> Option<bool> {
    RectGeometry::default().point_in_rect(pt, rect)
}

/// Inclusive, rotation-unaware containment test with a tolerance of `r` on
/// every side.
pub fn point_in_simple_rect(pt: &Point, rect: &Rect, r: f64) -> bool {
    pt.x >= rect.x - r && pt.x <= rect.ex + r && pt.y >= rect.y - r && pt.y <= rect.ey + r
}

/// Sets `rect.center` from the rect's origin and size.
pub fn calc_center(rect: &mut Rect) {
    rect.calc_center();
}

/// Even-odd ray casting test of `point` against a closed polygon.
///
/// Polygons with fewer than three vertices contain nothing. Points on an
/// edge count as outside.
pub fn point_in_vertices(point: &Point, vertices: &[Point]) -> bool {
    let Some(mut last) = vertices.last() else {
        return false;
    };
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    for item in vertices {
        if on_segment(point, last, item) {
            return false;
        }
        // The XOR guarantees last.y != item.y, so the division is safe.
        if (last.y > point.y) != (item.y > point.y) {
            let cross_x = item.x + (point.y - item.y) * (last.x - item.x) / (last.y - item.y);
            if cross_x > point.x {
                inside = !inside;
            }
        }
        last = item;
    }
    inside
}

fn on_segment(pt: &Point, a: &Point, b: &Point) -> bool {
    let cross = (b.x - a.x) * (pt.y - a.y) - (b.y - a.y) * (pt.x - a.x);
    cross == 0.0
        && pt.x >= a.x.min(b.x)
        && pt.x <= a.x.max(b.x)
        && pt.y >= a.y.min(b.y)
        && pt.y <= a.y.max(b.y)
}

/// Union bounding box of the world rects of `pens`, rotation included.
///
/// Pens without a world rect are skipped. With nothing to measure the
/// result has infinite, inverted bounds.
pub fn get_rect<'a, P>(pens: impl IntoIterator<Item = &'a P>) -> Rect
where
    P: Pen + ?Sized + 'a,
{
    let points: Vec<Point> = pens
        .into_iter()
        .filter_map(|pen| pen.world_rect())
        .flat_map(rect_to_points)
        .collect();
    if points.is_empty() {
        warn!("Computing bounds of an empty pen set");
    }

    let mut rect = get_rect_of_points(&points);
    rect.calc_center();
    rect
}

/// The four corners of `rect`: top-left, top-right, bottom-right,
/// bottom-left, rotated about the center when the rect is rotated.
pub fn rect_to_points(rect: &Rect) -> [Point; 4] {
    let mut pts = [
        Point::new(rect.x, rect.y),
        Point::new(rect.ex, rect.y),
        Point::new(rect.ex, rect.ey),
        Point::new(rect.x, rect.ey),
    ];
    if rect.rotate != 0.0 {
        let center = rect.center_point();
        for pt in pts.iter_mut() {
            rotate_point(pt, rect.rotate, &center);
        }
    }
    pts
}

/// Axis-aligned bounds of a set of points. Empty input gives infinite,
/// inverted bounds.
pub fn get_rect_of_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Rect {
    let mut x = f64::INFINITY;
    let mut y = f64::INFINITY;
    let mut ex = f64::NEG_INFINITY;
    let mut ey = f64::NEG_INFINITY;

    for item in points {
        x = x.min(item.x);
        y = y.min(item.y);
        ex = ex.max(item.x);
        ey = ey.max(item.y);
    }

    Rect {
        x,
        y,
        ex,
        ey,
        width: ex - x,
        height: ey - y,
        rotate: 0.0,
        center: None,
    }
}

/// Overlap test (touching edges overlap), or with `all_in` a strict
/// containment test of `source` inside `target`.
pub fn rect_in_rect(source: &Rect, target: &Rect, all_in: bool) -> bool {
    if all_in {
        return source.x > target.x
            && source.ex < target.ex
            && source.y > target.y
            && source.ey < target.ey;
    }
    !(source.x > target.ex || source.ex < target.x || source.ey < target.y || source.y > target.ey)
}

/// Shifts `rect` and its cached center by `(x, y)`.
pub fn translate_rect(rect: &mut Rect, x: f64, y: f64) {
    rect.x += x;
    rect.y += y;
    rect.ex += x;
    rect.ey += y;

    if let Some(center) = rect.center.as_mut() {
        center.x += x;
        center.y += y;
    }
}

/// Resizes `rect` from handle `resize_index` (0..=7) with the default
/// minimum extent. See [`RectGeometry::resize_rect`].
pub fn resize_rect(
    rect: &mut Rect,
    offset_x: f64,
    offset_y: f64,
    resize_index: u8,
) -> Result<(), GeometryError> {
    let handle = ResizeHandle::try_from(resize_index)?;
    RectGeometry::default().resize_rect(rect, offset_x, offset_y, handle)
}

/// Scales `rect` by `scale` about `center`, refreshing the far corner and
/// the cached center. Does nothing without a rect.
pub fn scale_rect(rect: Option<&mut Rect>, scale: f64, center: &Point) {
    let Some(rect) = rect else {
        return;
    };
    rect.width *= scale;
    rect.height *= scale;

    let mut origin = Point::new(rect.x, rect.y);
    scale_point(&mut origin, scale, center);
    rect.x = origin.x;
    rect.y = origin.y;

    rect.calc_extents();
    rect.calc_center();
}

/// `value / extent`, or 0 when the extent is zero or undefined.
fn ratio(value: f64, extent: f64) -> f64 {
    if extent == 0.0 || extent.is_nan() {
        0.0
    } else {
        value / extent
    }
}

/// Expresses `rect` as fractions of `world_rect`'s origin and extent.
///
/// A zero world width or height maps the matching coordinates to 0.
pub fn calc_relative_rect(rect: &Rect, world_rect: &Rect) -> Rect {
    let mut rel = Rect::new(
        ratio(rect.x - world_rect.x, world_rect.width),
        ratio(rect.y - world_rect.y, world_rect.height),
        ratio(rect.width, world_rect.width),
        ratio(rect.height, world_rect.height),
    );
    rel.calc_extents();
    rel
}

/// Expands a rect produced by [`calc_relative_rect`] back into world space.
pub fn calc_world_rect(rel: &Rect, world_rect: &Rect) -> Rect {
    Rect::new(
        world_rect.x + rel.x * world_rect.width,
        world_rect.y + rel.y * world_rect.height,
        rel.width * world_rect.width,
        rel.height * world_rect.height,
    )
}

/// Expresses `pt` as fractions of `world_rect`, keeping its routing
/// metadata. Control handles are normalized too and inherit the point's
/// pen and connection.
pub fn calc_relative_point(pt: &Point, world_rect: &Rect) -> Point {
    let relative = |x: f64, y: f64| {
        (
            ratio(x - world_rect.x, world_rect.width),
            ratio(y - world_rect.y, world_rect.height),
        )
    };
    map_point(pt, relative)
}

/// Expands a point produced by [`calc_relative_point`] back into world space.
pub fn calc_world_point(rel: &Point, world_rect: &Rect) -> Point {
    let world = |x: f64, y: f64| {
        (
            world_rect.x + x * world_rect.width,
            world_rect.y + y * world_rect.height,
        )
    };
    map_point(rel, world)
}

fn map_point(pt: &Point, f: impl Fn(f64, f64) -> (f64, f64)) -> Point {
    let (x, y) = f(pt.x, pt.y);
    let handle = |h: &Point| {
        let (hx, hy) = f(h.x, h.y);
        Box::new(Point {
            pen_id: pt.pen_id.clone(),
            connect_to: pt.connect_to.clone(),
            ..Point::new(hx, hy)
        })
    };
    Point {
        x,
        y,
        id: pt.id.clone(),
        pen_id: pt.pen_id.clone(),
        connect_to: pt.connect_to.clone(),
        anchor_id: pt.anchor_id.clone(),
        prev_next_type: pt.prev_next_type,
        prev: pt.prev.as_deref().map(&handle),
        next: pt.next.as_deref().map(&handle),
    }
}
