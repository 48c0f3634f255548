//! Geometry helpers shared by hit-testing and gesture handling.

use kurbo::{Point, Rect, Vec2};

/// Distance from a point to a line segment (a→b).
///
/// The projection parameter is clamped to `[0, 1]`, so points beyond either
/// end measure to that endpoint. A degenerate segment (`a == b`) measures to `a`.
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = Vec2::new(b.x - a.x, b.y - a.y);
    let pv = Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    (point - proj).hypot()
}

/// Minimum distance from a point to a polyline (sequence of connected segments).
///
/// Returns `f64::INFINITY` when there are fewer than two points.
pub fn point_to_polyline_dist(point: Point, points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|w| point_to_segment_dist(point, w[0], w[1]))
        .fold(f64::INFINITY, f64::min)
}

/// Rectangle containment with inclusive bounds on every edge.
///
/// `kurbo::Rect::contains` excludes the right and bottom edges; clicks that land
/// exactly on a drawn border must still count.
pub fn rect_contains_inclusive(rect: Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Normalized rectangle spanned by two drag corners, whatever the drag direction.
pub fn rect_from_corners(p1: Point, p2: Point) -> Rect {
    Rect::new(
        p1.x.min(p2.x),
        p1.y.min(p2.y),
        p1.x.max(p2.x),
        p1.y.max(p2.y),
    )
}
