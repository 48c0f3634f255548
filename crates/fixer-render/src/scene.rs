//! Display list builder.

use crate::renderer::{DrawCommand, RenderStyle};
use fixer_core::render::{Frame, RenderSink};
use fixer_core::shapes::{Shape, TextBox};
use kurbo::Point;

/// Render sink that rebuilds a display list on every frame.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    style: RenderStyle,
    commands: Vec<DrawCommand>,
    frames: usize,
}

impl SceneBuilder {
    /// Create a builder with the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with a custom style.
    pub fn with_style(style: RenderStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Commands of the most recent frame.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames rendered so far.
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    fn push_shape(&mut self, shape: &Shape, preview: bool) {
        let style = &self.style;
        let command = match shape {
            Shape::Text(_) if preview => DrawCommand::Stroke {
                path: shape.to_path(),
                stroke: style.text_preview_stroke(),
                color: style.preview_color,
            },
            Shape::Text(text) => self.text_command(text),
            _ if preview => DrawCommand::Stroke {
                path: shape.to_path(),
                stroke: style.preview_stroke(),
                color: style.preview_color,
            },
            _ => DrawCommand::Stroke {
                path: shape.to_path(),
                stroke: style.committed_stroke(),
                color: style.stroke_color,
            },
        };
        self.commands.push(command);
    }

    fn text_command(&self, text: &TextBox) -> DrawCommand {
        DrawCommand::Text {
            position: Point::new(text.origin.x, text.origin.y + self.style.font_size),
            lines: text.lines().map(str::to_string).collect(),
            font_size: self.style.font_size,
            line_height: self.style.line_height,
            color: self.style.stroke_color,
        }
    }
}

impl RenderSink for SceneBuilder {
    fn render(&mut self, frame: Frame<'_>) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.commands
            .push(DrawCommand::FillBackground(self.style.background_color));
        for shape in frame.board.iter() {
            self.push_shape(shape, false);
        }
        if let Some(preview) = frame.preview {
            self.push_shape(preview, true);
        }
        self.frames += 1;
        log::trace!("Frame {}: {} commands", self.frames, self.commands.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixer_core::Board;
    use fixer_core::shapes::{Circle, Line};

    fn board() -> Board {
        let mut board = Board::new();
        board.add_shape(Shape::Circle(Circle::new(Point::new(10.0, 10.0), 5.0)));
        board.add_shape(Shape::Text(TextBox::new(
            Point::new(0.0, 0.0),
            120.0,
            40.0,
            "i < n\nj--".into(),
        )));
        board
    }

    #[test]
    fn test_frame_order() {
        let mut scene = SceneBuilder::new();
        let board = board();
        let preview = Shape::Line(Line::new(Point::ZERO, Point::new(5.0, 5.0)));
        scene.render(Frame::new(&board, Some(&preview)));

        let cmds = scene.commands();
        assert_eq!(cmds.len(), 5);
        assert!(matches!(cmds[0], DrawCommand::Clear));
        assert!(matches!(cmds[1], DrawCommand::FillBackground(_)));
        assert!(matches!(&cmds[2], DrawCommand::Stroke { stroke, .. } if stroke.width == 2.0));
        match &cmds[3] {
            DrawCommand::Text { lines, position, .. } => {
                assert_eq!(lines, &vec!["i < n".to_string(), "j--".to_string()]);
                assert_eq!(*position, Point::new(0.0, 16.0));
            }
            other => panic!("expected text, got {:?}", other),
        }
        assert!(matches!(&cmds[4], DrawCommand::Stroke { stroke, .. } if stroke.width == 1.0));
    }

    #[test]
    fn test_text_preview_is_dashed_box() {
        let mut scene = SceneBuilder::new();
        let board = Board::new();
        let preview = Shape::Text(TextBox::new(Point::ZERO, 120.0, 40.0, String::new()));
        scene.render(Frame::new(&board, Some(&preview)));

        match scene.commands().last() {
            Some(DrawCommand::Stroke { stroke, color, .. }) => {
                assert!(!stroke.dash_pattern.is_empty());
                assert_eq!(color.to_rgba8().r, 136);
            }
            other => panic!("expected dashed stroke, got {:?}", other),
        }
    }

    #[test]
    fn test_each_render_replaces_list() {
        let mut scene = SceneBuilder::new();
        let board = board();
        scene.render(Frame::new(&board, None));
        scene.render(Frame::new(&Board::new(), None));
        assert_eq!(scene.commands().len(), 2);
        assert_eq!(scene.frame_count(), 2);
    }
}
