//! Shape definitions for the drawing board.

mod circle;
mod freehand;
mod line;
mod rectangle;
mod text;

pub use circle::Circle;
pub use freehand::Freehand;
pub use line::Line;
pub use rectangle::Rectangle;
pub use text::TextBox;

use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Construction invariant violations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
    #[error("circle radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    #[error("{kind} size must be positive, got {width}x{height}")]
    NonPositiveSize {
        kind: &'static str,
        width: f64,
        height: f64,
    },
    #[error("line endpoints coincide")]
    DegenerateLine,
    #[error("freehand stroke needs at least 2 points, got {0}")]
    TooFewPoints(usize),
    #[error("text box content is empty")]
    EmptyText,
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the bounding box in canvas coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point (in canvas coordinates) hits this shape.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Get the path representation for rendering.
    fn to_path(&self) -> BezPath;

    /// Check the construction invariants.
    fn validate(&self) -> Result<(), ShapeError>;
}

/// Enum wrapper for all shape kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Line(Line),
    Freehand(Freehand),
    Text(TextBox),
}

impl Shape {
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Circle(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::Freehand(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Shape::Circle(s) => s.hit_test(point, tolerance),
            Shape::Rectangle(s) => s.hit_test(point, tolerance),
            Shape::Line(s) => s.hit_test(point, tolerance),
            Shape::Freehand(s) => s.hit_test(point, tolerance),
            Shape::Text(s) => s.hit_test(point, tolerance),
        }
    }

    pub fn to_path(&self) -> BezPath {
        match self {
            Shape::Circle(s) => s.to_path(),
            Shape::Rectangle(s) => s.to_path(),
            Shape::Line(s) => s.to_path(),
            Shape::Freehand(s) => s.to_path(),
            Shape::Text(s) => s.to_path(),
        }
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Shape::Circle(s) => s.validate(),
            Shape::Rectangle(s) => s.validate(),
            Shape::Line(s) => s.validate(),
            Shape::Freehand(s) => s.validate(),
            Shape::Text(s) => s.validate(),
        }
    }

    /// Short lowercase name, used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "circle",
            Shape::Rectangle(_) => "rectangle",
            Shape::Line(_) => "line",
            Shape::Freehand(_) => "freehand",
            Shape::Text(_) => "text",
        }
    }

    /// Get the text box if this shape is one.
    pub fn as_text(&self) -> Option<&TextBox> {
        match self {
            Shape::Text(t) => Some(t),
            _ => None,
        }
    }
}

fn check_finite(kind: &'static str, points: &[Point]) -> Result<(), ShapeError> {
    if points.iter().all(|p| p.is_finite()) {
        Ok(())
    } else {
        Err(ShapeError::NonFinite(kind))
    }
}

fn check_size(kind: &'static str, width: f64, height: f64) -> Result<(), ShapeError> {
    if !width.is_finite() || !height.is_finite() {
        return Err(ShapeError::NonFinite(kind));
    }
    if width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(ShapeError::NonPositiveSize {
            kind,
            width,
            height,
        })
    }
}
