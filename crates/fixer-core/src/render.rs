//! Render sink abstraction.

use crate::board::Board;
use crate::shapes::Shape;

/// Everything needed to repaint the board once.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Committed shapes, painted in order.
    pub board: &'a Board,
    /// Transient shape painted last in the preview style.
    pub preview: Option<&'a Shape>,
}

impl<'a> Frame<'a> {
    pub fn new(board: &'a Board, preview: Option<&'a Shape>) -> Self {
        Self { board, preview }
    }
}

/// Trait for drawing surfaces.
///
/// Each call is a full repaint: implementations clear, paint the background,
/// then the board, then the preview.
pub trait RenderSink {
    fn render(&mut self, frame: Frame<'_>);
}

impl<R: RenderSink + ?Sized> RenderSink for &mut R {
    fn render(&mut self, frame: Frame<'_>) {
        (**self).render(frame);
    }
}

impl<R: RenderSink + ?Sized> RenderSink for Box<R> {
    fn render(&mut self, frame: Frame<'_>) {
        (**self).render(frame);
    }
}
