//! Circle shape.

use super::{ShapeError, ShapeTrait, check_finite};
use kurbo::{BezPath, Circle as KurboCircle, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A circle, drawn from its center outward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius in pixels.
    pub radius: f64,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Get as a kurbo Circle.
    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(self.center, self.radius)
    }
}

impl ShapeTrait for Circle {
    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        // Filled disc semantics: anywhere inside counts, plus the slack ring.
        self.center.distance(point) <= self.radius + tolerance
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }

    fn validate(&self) -> Result<(), ShapeError> {
        check_finite("circle", &[self.center])?;
        if self.radius.is_finite() && self.radius > 0.0 {
            Ok(())
        } else {
            Err(ShapeError::NonPositiveRadius(self.radius))
        }
    }
}
