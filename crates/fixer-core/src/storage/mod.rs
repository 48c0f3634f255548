//! Storage abstraction for board persistence.
//!
//! The board is handed to an opaque key-value store as JSON; nothing about the
//! layout is shared with other parts of the application.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

use crate::board::Board;
use crate::shapes::ShapeError;
use thiserror::Error;

/// Failures at the board store boundary.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no board stored under {0:?}")]
    NotFound(String),
    #[error("board JSON error: {0}")]
    Serialization(String),
    #[error("stored board is invalid: {0}")]
    Invalid(#[from] ShapeError),
    #[error("storage I/O failed: {0}")]
    Io(String),
    #[error("storage backend error: {0}")]
    Other(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// An opaque key-value store for boards.
pub trait Storage {
    /// Save a board under `key`, replacing any previous value.
    fn save(&self, key: &str, board: &Board) -> StorageResult<()>;

    /// Load a board. Every shape is validated before it is returned.
    fn load(&self, key: &str) -> StorageResult<Board>;

    /// Delete a board. Missing keys are not an error.
    fn delete(&self, key: &str) -> StorageResult<()>;

    /// List all stored keys.
    fn list(&self) -> StorageResult<Vec<String>>;

    /// Check if a board exists.
    fn exists(&self, key: &str) -> StorageResult<bool>;
}

fn encode(board: &Board) -> StorageResult<String> {
    board
        .to_json()
        .map_err(|e| StorageError::Serialization(e.to_string()))
}

fn decode(json: &str) -> StorageResult<Board> {
    let board = Board::from_json(json).map_err(|e| StorageError::Serialization(e.to_string()))?;
    board.validate()?;
    Ok(board)
}
