//! In-memory storage implementation.

use super::{Storage, StorageError, StorageResult, decode, encode};
use crate::board::Board;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory board store, for tests and hosts without a filesystem.
///
/// Boards are kept serialized so loads go through the same validation as any
/// other backend.
#[derive(Default)]
pub struct MemoryStorage {
    boards: RwLock<HashMap<String, String>>,
}

type Boards = HashMap<String, String>;

fn poisoned<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::Other(format!("board map lock poisoned: {}", e))
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw JSON under `key` without checking it.
    pub fn insert_raw(&self, key: &str, json: String) -> StorageResult<()> {
        self.write()?.insert(key.to_string(), json);
        Ok(())
    }

    fn read(&self) -> StorageResult<RwLockReadGuard<'_, Boards>> {
        self.boards.read().map_err(poisoned)
    }

    fn write(&self) -> StorageResult<RwLockWriteGuard<'_, Boards>> {
        self.boards.write().map_err(poisoned)
    }
}

impl Storage for MemoryStorage {
    fn save(&self, key: &str, board: &Board) -> StorageResult<()> {
        self.insert_raw(key, encode(board)?)
    }

    fn load(&self, key: &str) -> StorageResult<Board> {
        let boards = self.read()?;
        let json = boards
            .get(key)
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?;
        decode(json)
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        self.write()?.remove(key);
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let mut keys: Vec<String> = self.read()?.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    fn exists(&self, key: &str) -> StorageResult<bool> {
        Ok(self.read()?.contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Line, Shape};
    use kurbo::Point;

    fn sample() -> Board {
        let mut board = Board::new();
        board.add_shape(Shape::Line(Line::new(Point::new(0.0, 0.0), Point::new(5.0, 5.0))));
        board
    }

    #[test]
    fn test_save_and_load() {
        let storage = MemoryStorage::new();
        storage.save("two-sum", &sample()).unwrap();
        assert_eq!(storage.load("two-sum").unwrap(), sample());
    }

    #[test]
    fn test_not_found() {
        let storage = MemoryStorage::new();
        let result = storage.load("nonexistent");
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_exists_and_delete() {
        let storage = MemoryStorage::new();
        assert!(!storage.exists("two-sum").unwrap());
        storage.save("two-sum", &sample()).unwrap();
        assert!(storage.exists("two-sum").unwrap());
        storage.delete("two-sum").unwrap();
        assert!(!storage.exists("two-sum").unwrap());
    }

    #[test]
    fn test_list() {
        let storage = MemoryStorage::new();
        storage.save("dijkstra", &Board::new()).unwrap();
        storage.save("union-find", &Board::new()).unwrap();

        let list = storage.list().unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains(&"dijkstra".to_string()));
        assert!(list.contains(&"union-find".to_string()));
    }

    #[test]
    fn test_load_rejects_invalid_shape() {
        let storage = MemoryStorage::new();
        let json = r#"{ "shapes": [ { "Circle": { "center": { "x": 0.0, "y": 0.0 }, "radius": 0.0 } } ] }"#;
        storage.insert_raw("bad", json.to_string()).unwrap();
        assert!(matches!(storage.load("bad"), Err(StorageError::Invalid(_))));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let storage = MemoryStorage::new();
        storage.insert_raw("junk", "not json".to_string()).unwrap();
        assert!(matches!(storage.load("junk"), Err(StorageError::Serialization(_))));
    }
}
