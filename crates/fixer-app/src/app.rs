//! Scripted board shell.

use crate::script::{Script, ScriptStep};
use crate::shortcuts::{ShortcutAction, ShortcutRegistry};
use fixer_core::storage::{FileStorage, MemoryStorage, Storage, StorageError};
use fixer_core::{ConfigError, DrawingSession, SessionConfig};
use fixer_render::{SceneBuilder, to_svg};
use kurbo::{Rect, Size};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid script: {0}")]
    Script(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("{0}")]
    Usage(String),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Gesture thresholds handed to the session.
    pub session: SessionConfig,
    /// Directory for saved boards. In-memory storage is used when unset.
    pub storage_dir: Option<PathBuf>,
    pub width: f64,
    pub height: f64,
    /// Where to write the final frame as SVG, if anywhere.
    pub svg_output: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            storage_dir: None,
            width: 1280.0,
            height: 800.0,
            svg_output: None,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// A drawing session wired to a display list and a board store.
pub struct App {
    config: AppConfig,
    session: DrawingSession<SceneBuilder>,
    storage: Box<dyn Storage>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let storage: Box<dyn Storage> = match &config.storage_dir {
            Some(dir) => Box::new(FileStorage::new(dir.clone())?),
            None => Box::new(MemoryStorage::new()),
        };
        let mut session = DrawingSession::with_config(SceneBuilder::new(), config.session.clone());
        session.redraw();
        log::info!("Session {} ready", session.id());
        Ok(Self {
            config,
            session,
            storage,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &DrawingSession<SceneBuilder> {
        &self.session
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Replay every step of a script in order.
    pub fn run(&mut self, script: &Script) -> Result<(), AppError> {
        for step in &script.steps {
            self.step(step)?;
        }
        log::info!(
            "Script finished: {} steps, {} shapes on board",
            script.steps.len(),
            self.session.board().len()
        );
        Ok(())
    }

    /// Apply a single host event.
    pub fn step(&mut self, step: &ScriptStep) -> Result<(), AppError> {
        if let Some(event) = step.pointer_event() {
            self.session.handle_pointer(event);
            return Ok(());
        }
        match step {
            ScriptStep::Tool { tool } => self.session.set_tool(*tool),
            ScriptStep::Text { text } => {
                if !self.session.is_awaiting_text() {
                    log::warn!("Text step with no pending text box, ignoring");
                    return Ok(());
                }
                let mut answer = text.clone();
                let mut prompt = move |_: Rect| answer.take();
                self.session.resolve_text(&mut prompt);
            }
            ScriptStep::Undo => {
                self.session.undo();
            }
            ScriptStep::Redo => {
                self.session.redo();
            }
            ScriptStep::Clear => self.session.clear_board(),
            ScriptStep::Key { key, ctrl, shift } => {
                match ShortcutRegistry::lookup(key, *ctrl, *shift) {
                    Some(action) => self.apply_shortcut(action),
                    None => log::warn!("No shortcut bound to {:?}", key),
                }
            }
            ScriptStep::Save { key } => {
                self.storage.save(key, self.session.board())?;
                log::info!("Saved board as {:?}", key);
            }
            ScriptStep::Load { key } => self.load_board(key)?,
            ScriptStep::Down { .. }
            | ScriptStep::Move { .. }
            | ScriptStep::Up { .. }
            | ScriptStep::Leave
            | ScriptStep::RightClick { .. } => {}
        }
        Ok(())
    }

    /// Run the action bound to a keyboard shortcut.
    pub fn apply_shortcut(&mut self, action: ShortcutAction) {
        match action {
            ShortcutAction::Undo => {
                self.session.undo();
            }
            ShortcutAction::Redo => {
                self.session.redo();
            }
            ShortcutAction::ClearBoard => self.session.clear_board(),
            ShortcutAction::CancelGesture => {
                self.session.cancel_gesture();
                self.session.cancel_text();
            }
            ShortcutAction::SelectTool(tool) => self.session.set_tool(tool),
        }
    }

    /// Replace the session with one starting from a stored board.
    fn load_board(&mut self, key: &str) -> Result<(), AppError> {
        let board = self.storage.load(key)?;
        let tool = self.session.tool();
        let sink = SceneBuilder::with_style(self.session.sink().style().clone());
        self.session = DrawingSession::with_board(sink, self.config.session.clone(), board);
        self.session.set_tool(tool);
        self.session.redraw();
        log::info!("Loaded board {:?} ({} shapes)", key, self.session.board().len());
        Ok(())
    }

    /// The most recent frame as an SVG document.
    pub fn svg(&self) -> String {
        to_svg(
            self.session.sink().commands(),
            Size::new(self.config.width, self.config.height),
        )
    }

    /// Board contents as pretty JSON.
    pub fn board_json(&self) -> Result<String, AppError> {
        Ok(self.session.board().to_json()?)
    }
}
