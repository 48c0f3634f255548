//! Display list commands and paint styles.

use kurbo::{BezPath, Point, Stroke};
use peniko::Color;

/// A single drawing operation, replayed in order by the host surface.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Clear the whole surface.
    Clear,
    /// Paint the whole surface with a solid color.
    FillBackground(Color),
    /// Stroke an outline.
    Stroke {
        path: BezPath,
        stroke: Stroke,
        color: Color,
    },
    /// Left-aligned lines of text; `position` is the first baseline's start.
    Text {
        position: Point,
        lines: Vec<String>,
        font_size: f64,
        line_height: f64,
        color: Color,
    },
}

/// Colors and widths for committed shapes and previews.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    /// Surface background.
    pub background_color: Color,
    /// Committed shape stroke color.
    pub stroke_color: Color,
    pub stroke_width: f64,
    /// Preview stroke color.
    pub preview_color: Color,
    pub preview_width: f64,
    /// Dash pattern for the text box preview outline.
    pub preview_dash: [f64; 2],
    pub font_size: f64,
    pub line_height: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background_color: Color::from_rgba8(255, 255, 255, 255),
            stroke_color: Color::from_rgba8(0, 0, 0, 255),
            stroke_width: 2.0,
            preview_color: Color::from_rgba8(136, 136, 136, 255),
            preview_width: 1.0,
            preview_dash: [4.0, 4.0],
            font_size: 16.0,
            line_height: 20.0,
        }
    }
}

impl RenderStyle {
    /// Stroke for committed shapes.
    pub fn committed_stroke(&self) -> Stroke {
        Stroke::new(self.stroke_width)
    }

    /// Stroke for preview shapes.
    pub fn preview_stroke(&self) -> Stroke {
        Stroke::new(self.preview_width)
    }

    /// Dashed stroke for text box previews.
    pub fn text_preview_stroke(&self) -> Stroke {
        Stroke::new(self.preview_width).with_dashes(0.0, self.preview_dash)
    }
}
