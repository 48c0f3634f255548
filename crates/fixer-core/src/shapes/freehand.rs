//! Freehand drawing shape.

use super::{ShapeError, ShapeTrait, check_finite};
use crate::geometry::point_to_segment_dist;
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// A freehand stroke (polyline through the recorded pointer positions).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Freehand {
    /// Pointer samples in drawing order.
    pub points: Vec<Point>,
}

impl Freehand {
    /// Start an empty stroke.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stroke from recorded samples.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Append a pointer sample.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl ShapeTrait for Freehand {
    fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::ZERO;
        };
        self.points
            .iter()
            .fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p))
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.points
            .windows(2)
            .any(|w| point_to_segment_dist(point, w[0], w[1]) <= tolerance)
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some((first, rest)) = self.points.split_first() else {
            return path;
        };
        path.move_to(*first);
        for point in rest {
            path.line_to(*point);
        }
        path
    }

    fn validate(&self) -> Result<(), ShapeError> {
        check_finite("freehand", &self.points)?;
        if self.points.len() < 2 {
            return Err(ShapeError::TooFewPoints(self.points.len()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An L-shaped stroke, like tracing a path through a grid.
    fn corner_stroke() -> Freehand {
        let mut stroke = Freehand::new();
        for p in [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)] {
            stroke.add_point(Point::new(p.0, p.1));
        }
        stroke
    }

    #[test]
    fn test_stroke_grows_point_by_point() {
        let stroke = corner_stroke();
        assert_eq!(stroke.len(), 3);
        assert!(!stroke.is_empty());
        assert!(stroke.validate().is_ok());
    }

    #[test]
    fn test_bounds_cover_every_sample() {
        let mut stroke = corner_stroke();
        stroke.add_point(Point::new(-20.0, 130.0));
        assert_eq!(stroke.bounds(), Rect::new(-20.0, 0.0, 100.0, 130.0));
    }

    #[test]
    fn test_hit_test_any_segment() {
        let stroke = corner_stroke();
        assert!(stroke.hit_test(Point::new(50.0, 3.0), 6.0));
        assert!(stroke.hit_test(Point::new(104.0, 60.0), 6.0));
        // Inside the corner but away from both segments.
        assert!(!stroke.hit_test(Point::new(50.0, 50.0), 6.0));
    }

    #[test]
    fn test_single_point_never_hits() {
        let stroke = Freehand::from_points(vec![Point::new(5.0, 5.0)]);
        assert!(!stroke.hit_test(Point::new(5.0, 5.0), 6.0));
        assert_eq!(stroke.validate(), Err(ShapeError::TooFewPoints(1)));
    }
}
