//! Drawing session: the pointer-driven interaction controller.
//!
//! A [`DrawingSession`] owns one board, its undo/redo history, the selected
//! tool and the gesture state machine. Hosts feed it pointer events and it
//! repaints through its [`RenderSink`] after every visible change.

use crate::board::Board;
use crate::config::SessionConfig;
use crate::history::History;
use crate::input::{PointerButton, PointerEvent};
use crate::render::{Frame, RenderSink};
use crate::shapes::{Shape, TextBox};
use crate::tools::{Release, ToolKind, preview_shape, release_shape};
use kurbo::{Point, Rect};
use uuid::Uuid;

/// Source of text box content, typically a modal input dialog.
pub trait TextPrompt {
    /// Ask for the content of a text box covering `area`.
    /// `None` means the user cancelled.
    fn prompt(&mut self, area: Rect) -> Option<String>;
}

impl<F> TextPrompt for F
where
    F: FnMut(Rect) -> Option<String>,
{
    fn prompt(&mut self, area: Rect) -> Option<String> {
        self(area)
    }
}

/// State of the gesture state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    /// Waiting for a primary press.
    #[default]
    Idle,
    /// Primary button held; a shape is being dragged out.
    Dragging {
        /// Tool captured at press time.
        tool: ToolKind,
        /// Press position.
        anchor: Point,
        /// Last known pointer position.
        last: Point,
        /// Accumulated freehand samples (empty for other tools).
        points: Vec<Point>,
    },
    /// A text box area was released; waiting for its content.
    AwaitingText {
        area: Rect,
    },
}

/// One drawing board and everything that edits it.
pub struct DrawingSession<S: RenderSink> {
    id: Uuid,
    config: SessionConfig,
    tool: ToolKind,
    state: GestureState,
    board: Board,
    history: History,
    sink: S,
}

impl<S: RenderSink> DrawingSession<S> {
    /// Create a session with an empty board and default thresholds.
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, SessionConfig::default())
    }

    /// Create a session with an empty board.
    pub fn with_config(sink: S, config: SessionConfig) -> Self {
        Self::with_board(sink, config, Board::new())
    }

    /// Create a session starting from an existing board.
    ///
    /// The board becomes the history floor: undo never goes below it.
    pub fn with_board(sink: S, config: SessionConfig, board: Board) -> Self {
        let history = History::with_initial(board.clone()).with_limit(config.max_history);
        Self {
            id: Uuid::new_v4(),
            config,
            tool: ToolKind::default(),
            state: GestureState::Idle,
            board,
            history,
            sink,
        }
    }

    /// Unique session identifier (default storage key).
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Currently selected tool.
    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Select the tool for subsequent drags. A drag in progress keeps the
    /// tool it started with.
    pub fn set_tool(&mut self, tool: ToolKind) {
        log::debug!("Tool changed to {:?}", tool);
        self.tool = tool;
    }

    /// Check if a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Check if the session is waiting for text box content.
    pub fn is_awaiting_text(&self) -> bool {
        matches!(self.state, GestureState::AwaitingText { .. })
    }

    /// Check if undo is available (drives the undo button).
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available (drives the redo button).
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Dispatch a pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position, button } => self.pointer_down(position, button),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position } => self.pointer_up(position),
            PointerEvent::Leave => self.pointer_leave(),
            PointerEvent::SecondaryClick { position } => {
                self.secondary_click(position);
            }
        }
    }

    /// Begin a drag with the current tool. Only the primary button draws.
    pub fn pointer_down(&mut self, position: Point, button: PointerButton) {
        if button != PointerButton::Primary || self.state != GestureState::Idle {
            return;
        }
        let points = if self.tool == ToolKind::Freehand {
            vec![position]
        } else {
            Vec::new()
        };
        self.state = GestureState::Dragging {
            tool: self.tool,
            anchor: position,
            last: position,
            points,
        };
    }

    /// Update the drag and repaint with the preview.
    pub fn pointer_move(&mut self, position: Point) {
        let GestureState::Dragging {
            tool, last, points, ..
        } = &mut self.state
        else {
            return;
        };
        *last = position;
        if *tool == ToolKind::Freehand {
            points.push(position);
        }
        self.redraw();
    }

    /// Finish the drag at `position` and apply the tool's commit policy.
    pub fn pointer_up(&mut self, position: Point) {
        if !self.is_dragging() {
            return;
        }
        let GestureState::Dragging {
            tool,
            anchor,
            points,
            ..
        } = std::mem::take(&mut self.state)
        else {
            return;
        };

        match release_shape(tool, anchor, position, points, &self.config) {
            Release::Commit(shape) => self.commit_shape(shape),
            Release::TextArea(area) => {
                log::debug!("Text area released at {:?}, awaiting content", area);
                self.state = GestureState::AwaitingText { area };
                self.redraw();
            }
            Release::Discard => {
                log::debug!("Discarded {:?} gesture below threshold", tool);
                self.redraw();
            }
        }
    }

    /// The pointer left the surface: finish the drag at the last known point.
    pub fn pointer_leave(&mut self) {
        if let GestureState::Dragging { last, .. } = self.state {
            self.pointer_up(last);
        }
    }

    /// Delete the topmost shape under `position`.
    ///
    /// Returns true if a shape was removed.
    pub fn secondary_click(&mut self, position: Point) -> bool {
        if self.state != GestureState::Idle {
            return false;
        }
        let Some(index) = self.board.find_topmost_hit(position, self.config.hit_tolerance) else {
            return false;
        };
        if let Some(removed) = self.board.remove_shape_at(index) {
            log::debug!("Deleted {} at index {}", removed.kind_name(), index);
            self.history.commit(&self.board);
            self.redraw();
        }
        true
    }

    /// Provide content for the pending text box.
    ///
    /// Blank or whitespace-only content discards the box. Returns true if a
    /// text box was committed.
    pub fn submit_text(&mut self, text: &str) -> bool {
        let GestureState::AwaitingText { area } = self.state else {
            return false;
        };
        self.state = GestureState::Idle;
        let text = text.trim();
        if text.is_empty() {
            log::debug!("Empty text submitted, discarding text box");
            self.redraw();
            return false;
        }
        self.commit_shape(Shape::Text(TextBox::from_rect(area, text.to_string())));
        true
    }

    /// Drop the pending text box without touching the board.
    pub fn cancel_text(&mut self) {
        if self.is_awaiting_text() {
            log::debug!("Text input cancelled");
            self.state = GestureState::Idle;
            self.redraw();
        }
    }

    /// Ask `prompt` once for the pending text box content and apply the answer.
    ///
    /// Returns true if a text box was committed.
    pub fn resolve_text(&mut self, prompt: &mut impl TextPrompt) -> bool {
        let GestureState::AwaitingText { area } = self.state else {
            return false;
        };
        match prompt.prompt(area) {
            Some(text) => self.submit_text(&text),
            None => {
                self.cancel_text();
                false
            }
        }
    }

    /// Abort a drag without committing anything.
    pub fn cancel_gesture(&mut self) {
        if self.is_dragging() {
            self.state = GestureState::Idle;
            self.redraw();
        }
    }

    /// Undo the last change. Returns true if undo was performed.
    pub fn undo(&mut self) -> bool {
        if self.is_awaiting_text() {
            return false;
        }
        match self.history.undo() {
            Some(board) => {
                self.board = board;
                log::debug!("Undo: board has {} shapes", self.board.len());
                self.redraw();
                true
            }
            None => false,
        }
    }

    /// Redo the last undone change. Returns true if redo was performed.
    pub fn redo(&mut self) -> bool {
        if self.is_awaiting_text() {
            return false;
        }
        match self.history.redo() {
            Some(board) => {
                self.board = board;
                log::debug!("Redo: board has {} shapes", self.board.len());
                self.redraw();
                true
            }
            None => false,
        }
    }

    /// Remove every shape. Recorded as a single undoable change.
    pub fn clear_board(&mut self) {
        if self.is_awaiting_text() {
            return;
        }
        self.board.clear();
        self.history.commit(&self.board);
        log::debug!("Board cleared");
        self.redraw();
    }

    /// Preview for the current gesture, if any.
    pub fn preview(&self) -> Option<Shape> {
        match &self.state {
            GestureState::Idle => None,
            GestureState::Dragging {
                tool,
                anchor,
                last,
                points,
            } => Some(preview_shape(*tool, *anchor, *last, points)),
            GestureState::AwaitingText { area } => {
                Some(Shape::Text(TextBox::from_rect(*area, String::new())))
            }
        }
    }

    /// Repaint the board and any preview.
    pub fn redraw(&mut self) {
        let preview = self.preview();
        self.sink.render(Frame::new(&self.board, preview.as_ref()));
    }

    fn commit_shape(&mut self, shape: Shape) {
        log::debug!("Committed {}", shape.kind_name());
        self.board.add_shape(shape);
        self.history.commit(&self.board);
        self.redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Rectangle};

    /// Records (shape count, preview) per frame.
    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<(usize, Option<Shape>)>,
    }

    impl RenderSink for RecordingSink {
        fn render(&mut self, frame: Frame<'_>) {
            self.frames.push((frame.board.len(), frame.preview.cloned()));
        }
    }

    fn session() -> DrawingSession<RecordingSink> {
        DrawingSession::new(RecordingSink::default())
    }

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn drag(s: &mut DrawingSession<RecordingSink>, from: Point, to: Point) {
        s.pointer_down(from, PointerButton::Primary);
        s.pointer_move(to);
        s.pointer_up(to);
    }

    #[test]
    fn test_rectangle_commit_thresholds() {
        let mut s = session();
        s.set_tool(ToolKind::Rectangle);

        drag(&mut s, pt(10.0, 10.0), pt(11.0, 11.0));
        assert!(s.board().is_empty());
        assert!(!s.can_undo());

        drag(&mut s, pt(10.0, 10.0), pt(20.0, 30.0));
        assert_eq!(
            s.board().shapes(),
            &[Shape::Rectangle(Rectangle::new(pt(10.0, 10.0), 10.0, 20.0))]
        );
        assert!(s.can_undo());
    }

    #[test]
    fn test_circle_click_vs_drag() {
        let mut s = session();
        s.pointer_down(pt(50.0, 50.0), PointerButton::Primary);
        s.pointer_up(pt(50.0, 50.0));
        drag(&mut s, pt(50.0, 50.0), pt(50.0, 80.0));

        assert_eq!(
            s.board().shapes(),
            &[
                Shape::Circle(Circle::new(pt(50.0, 50.0), 24.0)),
                Shape::Circle(Circle::new(pt(50.0, 50.0), 30.0)),
            ]
        );
    }

    #[test]
    fn test_freehand_single_point_not_committed() {
        let mut s = session();
        s.set_tool(ToolKind::Freehand);
        s.pointer_down(pt(5.0, 5.0), PointerButton::Primary);
        s.pointer_up(pt(5.0, 5.0));
        assert!(s.board().is_empty());

        s.pointer_down(pt(5.0, 5.0), PointerButton::Primary);
        s.pointer_move(pt(6.0, 7.0));
        s.pointer_move(pt(9.0, 9.0));
        s.pointer_up(pt(9.0, 9.0));
        match s.board().get(0) {
            Some(Shape::Freehand(f)) => assert_eq!(f.len(), 3),
            other => panic!("expected freehand, got {:?}", other),
        }
    }

    #[test]
    fn test_move_renders_preview_without_mutating_board() {
        let mut s = session();
        s.set_tool(ToolKind::Line);
        s.pointer_down(pt(0.0, 0.0), PointerButton::Primary);
        s.pointer_move(pt(40.0, 0.0));

        let (count, preview) = s.sink().frames.last().cloned().unwrap();
        assert_eq!(count, 0);
        assert!(matches!(preview, Some(Shape::Line(_))));
        assert!(s.board().is_empty());
    }

    #[test]
    fn test_circle_preview_tracks_radius() {
        let mut s = session();
        s.pointer_down(pt(50.0, 50.0), PointerButton::Primary);
        s.pointer_move(pt(50.0, 80.0));

        assert_eq!(s.preview(), Some(Shape::Circle(Circle::new(pt(50.0, 50.0), 30.0))));
        assert_eq!(s.sink().frames.last().cloned().unwrap().1, s.preview());
        assert!(s.board().is_empty());
    }

    #[test]
    fn test_rectangle_preview_normalised() {
        let mut s = session();
        s.set_tool(ToolKind::Rectangle);
        s.pointer_down(pt(20.0, 30.0), PointerButton::Primary);
        s.pointer_move(pt(10.0, 10.0));

        assert_eq!(
            s.preview(),
            Some(Shape::Rectangle(Rectangle::new(pt(10.0, 10.0), 10.0, 20.0)))
        );
        assert!(s.board().is_empty());
    }

    #[test]
    fn test_freehand_preview_grows_per_move() {
        let mut s = session();
        s.set_tool(ToolKind::Freehand);
        s.pointer_down(pt(0.0, 0.0), PointerButton::Primary);

        for (i, x) in [4.0, 8.0, 12.0].into_iter().enumerate() {
            s.pointer_move(pt(x, x / 2.0));
            match s.preview() {
                Some(Shape::Freehand(stroke)) => {
                    assert_eq!(stroke.len(), i + 2);
                    assert_eq!(stroke.points.last(), Some(&pt(x, x / 2.0)));
                }
                other => panic!("expected freehand preview, got {:?}", other),
            }
            assert!(s.board().is_empty());
        }
    }

    #[test]
    fn test_leave_while_idle_is_noop() {
        let mut s = session();
        s.handle_pointer(PointerEvent::Leave);
        assert_eq!(*s.state(), GestureState::Idle);
        assert!(s.board().is_empty());
        assert!(s.sink().frames.is_empty());
    }

    #[test]
    fn test_leave_while_awaiting_text_is_noop() {
        let mut s = session();
        s.set_tool(ToolKind::Text);
        drag(&mut s, pt(0.0, 0.0), pt(60.0, 30.0));
        let pending = s.state().clone();
        let frames = s.sink().frames.len();

        s.handle_pointer(PointerEvent::Leave);
        assert_eq!(*s.state(), pending);
        assert!(s.is_awaiting_text());
        assert!(s.board().is_empty());
        assert_eq!(s.sink().frames.len(), frames);
    }

    #[test]
    fn test_secondary_button_never_drags() {
        let mut s = session();
        s.pointer_down(pt(10.0, 10.0), PointerButton::Secondary);
        assert!(!s.is_dragging());
        s.pointer_up(pt(10.0, 10.0));
        assert!(s.board().is_empty());
    }

    #[test]
    fn test_pointer_leave_finalizes_drag() {
        let mut s = session();
        s.set_tool(ToolKind::Rectangle);
        s.pointer_down(pt(0.0, 0.0), PointerButton::Primary);
        s.pointer_move(pt(30.0, 40.0));
        s.handle_pointer(PointerEvent::Leave);

        assert_eq!(*s.state(), GestureState::Idle);
        assert_eq!(
            s.board().shapes(),
            &[Shape::Rectangle(Rectangle::new(pt(0.0, 0.0), 30.0, 40.0))]
        );
    }

    #[test]
    fn test_secondary_click_deletes_topmost() {
        let mut s = session();
        s.set_tool(ToolKind::Rectangle);
        drag(&mut s, pt(0.0, 0.0), pt(100.0, 100.0));
        drag(&mut s, pt(50.0, 50.0), pt(150.0, 150.0));

        assert!(s.secondary_click(pt(75.0, 75.0)));
        assert_eq!(
            s.board().shapes(),
            &[Shape::Rectangle(Rectangle::new(pt(0.0, 0.0), 100.0, 100.0))]
        );
        assert!(!s.secondary_click(pt(400.0, 400.0)));

        assert!(s.undo());
        assert_eq!(s.board().len(), 2);
    }

    #[test]
    fn test_undo_redo_inverse() {
        let mut s = session();
        let mut states = vec![s.board().clone()];
        for i in 0..3 {
            let c = pt(100.0 * i as f64, 0.0);
            drag(&mut s, c, pt(c.x, 40.0));
            states.push(s.board().clone());
        }

        for expected in states.iter().rev().skip(1) {
            let before = s.board().clone();
            assert!(s.undo());
            assert!(s.redo());
            assert_eq!(s.board(), &before);
            assert!(s.undo());
            assert_eq!(s.board(), expected);
        }
        assert!(s.board().is_empty());
        assert!(!s.undo());
    }

    #[test]
    fn test_new_commit_invalidates_redo() {
        let mut s = session();
        drag(&mut s, pt(0.0, 0.0), pt(0.0, 40.0));
        assert!(s.undo());
        assert!(s.can_redo());

        s.set_tool(ToolKind::Line);
        drag(&mut s, pt(0.0, 0.0), pt(40.0, 0.0));
        assert!(!s.can_redo());
        assert!(!s.redo());
        assert!(matches!(s.board().get(0), Some(Shape::Line(_))));
    }

    #[test]
    fn test_clear_board_is_undoable() {
        let mut s = session();
        drag(&mut s, pt(0.0, 0.0), pt(0.0, 40.0));
        s.clear_board();
        assert!(s.board().is_empty());
        assert!(s.undo());
        assert_eq!(s.board().len(), 1);
    }

    #[test]
    fn test_text_commit_and_cancel() {
        let mut s = session();
        s.set_tool(ToolKind::Text);

        s.pointer_down(pt(10.0, 10.0), PointerButton::Primary);
        s.pointer_up(pt(10.0, 10.0));
        assert_eq!(
            *s.state(),
            GestureState::AwaitingText {
                area: Rect::new(10.0, 10.0, 130.0, 50.0)
            }
        );
        // Pipeline is suspended while the prompt is open.
        s.pointer_down(pt(0.0, 0.0), PointerButton::Primary);
        assert!(s.is_awaiting_text());
        assert!(!s.submit_text("   \n"));
        assert!(s.board().is_empty());
        assert!(!s.can_undo());

        drag(&mut s, pt(0.0, 0.0), pt(60.0, 30.0));
        s.cancel_text();
        assert!(s.board().is_empty());
        assert!(!s.can_undo());

        drag(&mut s, pt(0.0, 0.0), pt(60.0, 30.0));
        assert!(s.submit_text("  two pointers  "));
        assert_eq!(
            s.board().shapes(),
            &[Shape::Text(TextBox::new(pt(0.0, 0.0), 60.0, 30.0, "two pointers".into()))]
        );
        assert!(s.can_undo());
    }

    #[test]
    fn test_resolve_text_invokes_prompt_once() {
        let mut s = session();
        s.set_tool(ToolKind::Text);
        drag(&mut s, pt(0.0, 0.0), pt(50.0, 50.0));

        let mut calls = 0;
        let mut prompt = |area: Rect| {
            calls += 1;
            assert_eq!(area, Rect::new(0.0, 0.0, 50.0, 50.0));
            Some("BFS".to_string())
        };
        assert!(s.resolve_text(&mut prompt));
        assert!(!s.resolve_text(&mut prompt));
        assert_eq!(calls, 1);
        assert_eq!(s.board().len(), 1);
    }

    #[test]
    fn test_tool_switch_mid_drag_keeps_drag_tool() {
        let mut s = session();
        s.set_tool(ToolKind::Rectangle);
        s.pointer_down(pt(0.0, 0.0), PointerButton::Primary);
        s.set_tool(ToolKind::Line);
        s.pointer_up(pt(20.0, 20.0));
        assert!(matches!(s.board().get(0), Some(Shape::Rectangle(_))));
        assert_eq!(s.tool(), ToolKind::Line);
    }

    #[test]
    fn test_discard_repaints_without_preview() {
        let mut s = session();
        s.set_tool(ToolKind::Line);
        s.pointer_down(pt(0.0, 0.0), PointerButton::Primary);
        s.pointer_move(pt(1.0, 0.0));
        s.pointer_up(pt(1.0, 0.0));
        assert_eq!(s.sink().frames.last(), Some(&(0, None)));
    }

    #[test]
    fn test_history_floor_from_stored_board() {
        let mut board = Board::new();
        board.add_shape(Shape::Circle(Circle::new(pt(1.0, 1.0), 3.0)));
        let mut s = DrawingSession::with_board(RecordingSink::default(), SessionConfig::default(), board.clone());
        assert!(!s.undo());
        assert_eq!(s.board(), &board);
    }
}
