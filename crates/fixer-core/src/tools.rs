//! Drawing tools and their commit policies.

use crate::config::SessionConfig;
use crate::geometry::rect_from_corners;
use crate::shapes::{Circle, Freehand, Line, Rectangle, Shape, TextBox};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    Circle,
    Rectangle,
    Line,
    Freehand,
    Text,
}

impl ToolKind {
    /// Get all tools in toolbar order.
    pub fn all() -> &'static [ToolKind] {
        &[
            ToolKind::Circle,
            ToolKind::Rectangle,
            ToolKind::Line,
            ToolKind::Freehand,
            ToolKind::Text,
        ]
    }

    /// Get display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            ToolKind::Circle => "Vertex",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Line => "Edge",
            ToolKind::Freehand => "Freehand",
            ToolKind::Text => "Text",
        }
    }
}

/// What a finished drag produces.
#[derive(Debug, Clone, PartialEq)]
pub enum Release {
    /// A shape ready to be added to the board.
    Commit(Shape),
    /// A text box area; the content still has to be asked for.
    TextArea(Rect),
    /// Nothing worth keeping.
    Discard,
}

/// Preview for an in-progress drag. Never enters the board.
pub fn preview_shape(tool: ToolKind, anchor: Point, current: Point, points: &[Point]) -> Shape {
    match tool {
        ToolKind::Circle => Shape::Circle(Circle::new(anchor, anchor.distance(current))),
        ToolKind::Rectangle => Shape::Rectangle(Rectangle::from_corners(anchor, current)),
        // Content is asked for on release; until then only the box is shown.
        ToolKind::Text => Shape::Text(TextBox::from_rect(
            rect_from_corners(anchor, current),
            String::new(),
        )),
        ToolKind::Line => Shape::Line(Line::new(anchor, current)),
        ToolKind::Freehand => Shape::Freehand(Freehand::from_points(points.to_vec())),
    }
}

/// Apply the tool's commit policy to a finished drag.
pub fn release_shape(
    tool: ToolKind,
    anchor: Point,
    end: Point,
    points: Vec<Point>,
    config: &SessionConfig,
) -> Release {
    let threshold = config.drag_threshold;
    match tool {
        ToolKind::Circle => {
            let drag = anchor.distance(end);
            let radius = if drag > threshold {
                drag
            } else {
                config.default_circle_radius
            };
            Release::Commit(Shape::Circle(Circle::new(anchor, radius)))
        }
        ToolKind::Rectangle => {
            let rect = rect_from_corners(anchor, end);
            if rect.width() > threshold && rect.height() > threshold {
                Release::Commit(Shape::Rectangle(Rectangle::from_rect(rect)))
            } else {
                Release::Discard
            }
        }
        ToolKind::Line => {
            if anchor.distance(end) > threshold {
                Release::Commit(Shape::Line(Line::new(anchor, end)))
            } else {
                Release::Discard
            }
        }
        ToolKind::Freehand => {
            if points.len() > 1 {
                Release::Commit(Shape::Freehand(Freehand::from_points(points)))
            } else {
                Release::Discard
            }
        }
        ToolKind::Text => {
            let rect = rect_from_corners(anchor, end);
            if rect.width() > threshold && rect.height() > threshold {
                Release::TextArea(rect)
            } else {
                let (w, h) = config.default_text_size;
                Release::TextArea(Rect::new(anchor.x, anchor.y, anchor.x + w, anchor.y + h))
            }
        }
    }
}
