//! Straight line segment.

use super::{ShapeError, ShapeTrait, check_finite};
use crate::geometry::point_to_segment_dist;
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// A straight line from `start` to `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    /// Create a new line.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Length of the segment.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

impl ShapeTrait for Line {
    fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        point_to_segment_dist(point, self.start, self.end) <= tolerance
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        path.line_to(self.end);
        path
    }

    fn validate(&self) -> Result<(), ShapeError> {
        check_finite("line", &[self.start, self.end])?;
        if self.start == self.end {
            Err(ShapeError::DegenerateLine)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(line.hit_test(Point::new(50.0, 6.0), 6.0));
        assert!(!line.hit_test(Point::new(50.0, 7.0), 6.0));
        assert!(!line.hit_test(Point::new(110.0, 0.0), 6.0));
    }

    #[test]
    fn test_bounds_normalized() {
        let line = Line::new(Point::new(30.0, 5.0), Point::new(10.0, 25.0));
        assert_eq!(line.bounds(), Rect::new(10.0, 5.0, 30.0, 25.0));
    }

    #[test]
    fn test_degenerate_rejected() {
        let p = Point::new(3.0, 3.0);
        assert_eq!(Line::new(p, p).validate(), Err(ShapeError::DegenerateLine));
    }
}
