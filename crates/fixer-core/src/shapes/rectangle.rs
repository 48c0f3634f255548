//! Rectangle shape.

use super::{ShapeError, ShapeTrait, check_finite, check_size};
use crate::geometry::{rect_contains_inclusive, rect_from_corners};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Top-left corner.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Normalise a drag from `p1` to `p2` in any direction.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        Self::from_rect(rect_from_corners(p1, p2))
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(Point::new(rect.x0, rect.y0), rect.width(), rect.height())
    }

    /// Outline as a kurbo rect (x0,y0 at the origin).
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + self.height,
        )
    }
}

impl ShapeTrait for Rectangle {
    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn hit_test(&self, point: Point, _tolerance: f64) -> bool {
        rect_contains_inclusive(self.as_rect(), point)
    }

    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }

    fn validate(&self) -> Result<(), ShapeError> {
        check_finite("rectangle", &[self.origin])?;
        check_size("rectangle", self.width, self.height)
    }
}
