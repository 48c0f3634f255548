//! Scripted input sessions.
//!
//! A script is a JSON document listing host events in order:
//!
//! ```json
//! { "steps": [
//!     { "action": "tool", "tool": "rectangle" },
//!     { "action": "down", "x": 10, "y": 10 },
//!     { "action": "move", "x": 40, "y": 30 },
//!     { "action": "up", "x": 40, "y": 30 },
//!     { "action": "text", "text": "visited[]" },
//!     { "action": "key", "key": "z", "ctrl": true }
//! ] }
//! ```

use fixer_core::{PointerButton, PointerEvent, ToolKind};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// One host event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    Tool {
        tool: ToolKind,
    },
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        button: PointerButton,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up {
        x: f64,
        y: f64,
    },
    Leave,
    RightClick {
        x: f64,
        y: f64,
    },
    /// Answer to the text prompt; `null` cancels it.
    Text {
        text: Option<String>,
    },
    Undo,
    Redo,
    Clear,
    Key {
        key: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        shift: bool,
    },
    Save {
        key: String,
    },
    Load {
        key: String,
    },
}

impl ScriptStep {
    /// The pointer event this step stands for, if it is one.
    pub fn pointer_event(&self) -> Option<PointerEvent> {
        match *self {
            ScriptStep::Down { x, y, button } => Some(PointerEvent::Down {
                position: Point::new(x, y),
                button,
            }),
            ScriptStep::Move { x, y } => Some(PointerEvent::Move {
                position: Point::new(x, y),
            }),
            ScriptStep::Up { x, y } => Some(PointerEvent::Up {
                position: Point::new(x, y),
            }),
            ScriptStep::Leave => Some(PointerEvent::Leave),
            ScriptStep::RightClick { x, y } => Some(PointerEvent::SecondaryClick {
                position: Point::new(x, y),
            }),
            _ => None,
        }
    }
}

/// A full scripted session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
