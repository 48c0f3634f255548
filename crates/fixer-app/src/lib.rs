//! FIXER board shell.
//!
//! Drives a [`fixer_core::DrawingSession`] from a recorded script of host
//! events, rendering every frame into a display list that can be exported as
//! SVG.

mod app;
pub mod script;
pub mod shortcuts;

pub use app::{App, AppConfig, AppError};
pub use script::{Script, ScriptStep};
pub use shortcuts::{KeyChord, Shortcut, ShortcutAction, ShortcutRegistry};
