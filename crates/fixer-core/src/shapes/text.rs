//! Text box shape.

use super::{ShapeError, ShapeTrait, check_finite, check_size};
use crate::geometry::rect_contains_inclusive;
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A text note placed in a box dragged out on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBox {
    /// Top-left corner of the box.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    /// The text content. May span several lines.
    pub text: String,
}

impl TextBox {
    /// Create a new text box.
    pub fn new(origin: Point, width: f64, height: f64, text: String) -> Self {
        Self {
            origin,
            width,
            height,
            text,
        }
    }

    /// Create a text box filling a kurbo Rect.
    pub fn from_rect(rect: Rect, text: String) -> Self {
        Self::new(Point::new(rect.x0, rect.y0), rect.width(), rect.height(), text)
    }

    /// Get the box as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + self.height,
        )
    }

    /// Lines of text, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

impl ShapeTrait for TextBox {
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
        check_finite("text", &[self.origin])?;
        check_size("text", self.width, self.height)?;
        if self.text.trim().is_empty() {
            return Err(ShapeError::EmptyText);
        }
        Ok(())
    }
}
