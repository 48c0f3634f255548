//! The board: ordered collection of committed shapes.

use crate::shapes::{Shape, ShapeError};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Committed shapes in z-order (back to front).
///
/// Insertion order is paint order; later shapes sit on top and win hit-tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    shapes: Vec<Shape>,
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from shapes, checking every shape's invariants.
    pub fn from_shapes(shapes: Vec<Shape>) -> Result<Self, ShapeError> {
        for shape in &shapes {
            shape.validate()?;
        }
        Ok(Self { shapes })
    }

    /// Add a shape on top of the z-order.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Remove the shape at `index`. Out-of-range indices leave the board untouched.
    pub fn remove_shape_at(&mut self, index: usize) -> Option<Shape> {
        if index < self.shapes.len() {
            Some(self.shapes.remove(index))
        } else {
            None
        }
    }

    /// Index of the topmost shape hit at `point`, scanning front to back.
    pub fn find_topmost_hit(&self, point: Point, tolerance: f64) -> Option<usize> {
        self.shapes
            .iter()
            .rposition(|shape| shape.hit_test(point, tolerance))
    }

    /// Remove all shapes.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Get a shape by position.
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Shapes in paint order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Union of all shape bounds.
    pub fn bounds(&self) -> Option<Rect> {
        self.shapes
            .iter()
            .map(Shape::bounds)
            .reduce(|acc, b| acc.union(b))
    }

    /// Check every shape's invariants.
    pub fn validate(&self) -> Result<(), ShapeError> {
        self.shapes.iter().try_for_each(Shape::validate)
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Serialize the board to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a board from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
