//! Snapshot-based undo/redo history.

use crate::board::Board;

/// Undo/redo stacks of board snapshots.
///
/// `past` is never empty and its top always equals the live board. Snapshots
/// are independent clones: nothing done to the live board reaches them.
#[derive(Debug, Clone)]
pub struct History {
    past: Vec<Board>,
    future: Vec<Board>,
    /// Maximum number of snapshots kept in `past` (None = unbounded).
    limit: Option<usize>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Start a history whose floor is the empty board.
    pub fn new() -> Self {
        Self::with_initial(Board::new())
    }

    /// Start a history whose floor is `board` (used when a stored board is opened).
    pub fn with_initial(board: Board) -> Self {
        Self {
            past: vec![board],
            future: Vec::new(),
            limit: None,
        }
    }

    /// Cap the number of retained snapshots. Values below 1 are treated as 1.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit.map(|l| l.max(1));
        self.trim();
        self
    }

    /// Record `board` as the newest state. Invalidates redo.
    pub fn commit(&mut self, board: &Board) {
        self.past.push(board.clone());
        self.future.clear();
        self.trim();
    }

    /// Step back one snapshot, returning the board to make live.
    ///
    /// Returns `None` at the floor, leaving both stacks untouched.
    pub fn undo(&mut self) -> Option<Board> {
        if self.past.len() <= 1 {
            return None;
        }
        let current = self.past.pop()?;
        self.future.push(current);
        self.past.last().cloned()
    }

    /// Re-apply the most recently undone snapshot.
    pub fn redo(&mut self) -> Option<Board> {
        let next = self.future.pop()?;
        let live = next.clone();
        self.past.push(next);
        Some(live)
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.past.len() > 1
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// The snapshot matching the live board.
    pub fn current(&self) -> &Board {
        // `past` is non-empty by construction.
        &self.past[self.past.len() - 1]
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len() - 1
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    fn trim(&mut self) {
        if let Some(limit) = self.limit {
            if self.past.len() > limit {
                let excess = self.past.len() - limit;
                self.past.drain(..excess);
            }
        }
    }
}
