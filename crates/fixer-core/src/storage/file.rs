//! Boards on disk, one JSON file per key.

use super::{Storage, StorageError, StorageResult, decode, encode};
use crate::board::Board;
use std::fs;
use std::path::{Path, PathBuf};

const EXTENSION: &str = "json";

fn io_error(action: &str, path: &Path, err: std::io::Error) -> StorageError {
    StorageError::Io(format!("{} {}: {}", action, path.display(), err))
}

/// Directory-backed board store.
///
/// Keys map to `<dir>/<key>.json`. Characters outside `[A-Za-z0-9_-]` are
/// replaced by `_`, so distinct keys may collide after sanitising. Empty keys
/// are rejected.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn new(dir: PathBuf) -> StorageResult<Self> {
        fs::create_dir_all(&dir).map_err(|e| io_error("Cannot create", &dir, e))?;
        Ok(Self { dir })
    }

    /// Store under the platform data directory, e.g.
    /// `~/.local/share/fixer/boards` on Linux.
    pub fn default_location() -> StorageResult<Self> {
        let root = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Other("No data or home directory available".into()))?;
        Self::new(root.join("fixer").join("boards"))
    }

    pub fn base_path(&self) -> &Path {
        &self.dir
    }

    fn board_path(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty() {
            return Err(StorageError::Other("board key must not be empty".into()));
        }
        let name: String = key
            .chars()
            .map(|c| match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
                _ => '_',
            })
            .collect();
        Ok(self.dir.join(format!("{}.{}", name, EXTENSION)))
    }
}

impl Storage for FileStorage {
    fn save(&self, key: &str, board: &Board) -> StorageResult<()> {
        let path = self.board_path(key)?;
        fs::write(&path, encode(board)?).map_err(|e| io_error("Cannot write", &path, e))
    }

    fn load(&self, key: &str) -> StorageResult<Board> {
        let path = self.board_path(key)?;
        match fs::read_to_string(&path) {
            Ok(json) => decode(&json),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(key.to_string()))
            }
            Err(e) => Err(io_error("Cannot read", &path, e)),
        }
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        let path = self.board_path(key)?;
        match fs::remove_file(&path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                Err(io_error("Cannot delete", &path, e))
            }
            _ => Ok(()),
        }
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| io_error("Cannot list", &self.dir, e))?;
        let mut keys: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == EXTENSION))
            .filter_map(|path| path.file_stem()?.to_str().map(str::to_string))
            .collect();
        keys.sort();
        Ok(keys)
    }

    fn exists(&self, key: &str) -> StorageResult<bool> {
        Ok(self.board_path(key)?.is_file())
    }
}
