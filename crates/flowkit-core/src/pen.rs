//! The shape ("pen") side of the geometry API.

use serde::{Deserialize, Serialize};

use crate::rect::Rect;

/// A drawable shape that owns a rect in canvas coordinates.
pub trait Pen {
    /// The pen's rect in world space, if it has been laid out.
    fn world_rect(&self) -> Option<&Rect>;
}

impl Pen for Rect {
    fn world_rect(&self) -> Option<&Rect> {
        Some(self)
    }
}

impl<T: Pen + ?Sized> Pen for Box<T> {
    fn world_rect(&self) -> Option<&Rect> {
        (**self).world_rect()
    }
}

/// Plain pen record as exchanged with the editor front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenData {
    pub id: String,
    /// Shape name, e.g. `activityFinal`
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_rect: Option<Rect>,
}

impl PenData {
    pub fn new(id: impl Into<String>, name: impl Into<String>, world_rect: Rect) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            world_rect: Some(world_rect),
        }
    }
}

impl Pen for PenData {
    fn world_rect(&self) -> Option<&Rect> {
        self.world_rect.as_ref()
    }
}
