//! FIXER Board Core Library
//!
//! Platform-agnostic shape model, undo/redo history and pointer interaction
//! controller for the FIXER problem-solving sketch board.

pub mod board;
pub mod config;
pub mod geometry;
pub mod history;
pub mod input;
pub mod render;
pub mod session;
pub mod shapes;
pub mod storage;
pub mod tools;

pub use board::Board;
pub use config::{ConfigError, SessionConfig};
pub use history::History;
pub use input::{PointerButton, PointerEvent};
pub use render::{Frame, RenderSink};
pub use session::{DrawingSession, GestureState, TextPrompt};
pub use shapes::{Shape, ShapeError};
pub use tools::ToolKind;
