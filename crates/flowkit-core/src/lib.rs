//! # flowkit Core
//!
//! Geometry primitives for the flowkit diagram editor.
//!
//! ## Core Components
//!
//! - **Point**: coordinates plus connector routing metadata and Bezier handles
//! - **Rect**: axis-aligned box with an optional rotation about its center
//! - **RectGeometry**: hit tests and resizes driven by [`GeometryConfig`]
//! - **Pen**: anything that owns a world rect
//!
//! Every operation is synchronous and allocation-light; transforms mutate
//! the rect they are given and report rejected resizes through
//! [`GeometryError`].
//!
//! ## Usage
//!
//! ```
//! use flowkit_core::{point_in_rect, translate_rect, Point, Rect};
//!
//! let mut rect = Rect::new(0.0, 0.0, 100.0, 50.0);
//! translate_rect(&mut rect, 10.0, 10.0);
//! assert_eq!(point_in_rect(&Point::new(50.0, 30.0), Some(&rect)), Some(true));
//! ```

pub mod error;
pub mod geometry;
pub mod pen;
pub mod point;
pub mod rect;

pub use error::{Error, GeometryError, Result};
pub use geometry::{
    GeometryConfig, RectGeometry, ResizeHandle, DEFAULT_MIN_RESIZE_EXTENT,
    DEFAULT_ROTATION_THRESHOLD,
};
pub use pen::{Pen, PenData};
pub use point::{rotate_point, scale_point, translate_point, Point, PrevNextType};
pub use rect::{
    calc_center, calc_relative_point, calc_relative_rect, calc_world_point, calc_world_rect,
    get_rect, get_rect_of_points, point_in_rect, point_in_simple_rect, point_in_vertices,
    rect_in_rect, rect_to_points, resize_rect, scale_rect, translate_rect, Rect,
};
