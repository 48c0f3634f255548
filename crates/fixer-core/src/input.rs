//! Pointer events delivered by the host canvas.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    /// Drawing button.
    #[default]
    Primary,
    /// Context button; deletes instead of drawing.
    Secondary,
    Middle,
}

/// Pointer event in canvas coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down {
        position: Point,
        #[serde(default)]
        button: PointerButton,
    },
    Move {
        position: Point,
    },
    Up {
        position: Point,
    },
    /// Pointer left the drawing surface.
    Leave,
    /// Context-menu click.
    SecondaryClick {
        position: Point,
    },
}

impl PointerEvent {
    /// Position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position }
            | PointerEvent::SecondaryClick { position } => Some(*position),
            PointerEvent::Leave => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_down_defaults_to_primary() {
        let event: PointerEvent =
            serde_json::from_str(r#"{ "type": "down", "position": { "x": 1.0, "y": 2.0 } }"#).unwrap();
        assert_eq!(
            event,
            PointerEvent::Down {
                position: Point::new(1.0, 2.0),
                button: PointerButton::Primary
            }
        );
    }

    #[test]
    fn test_leave_has_no_position() {
        assert_eq!(PointerEvent::Leave.position(), None);
    }
}
