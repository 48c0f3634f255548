//! Keyboard shortcuts for the board.

use fixer_core::ToolKind;
use std::fmt;

/// What a shortcut does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Undo,
    Redo,
    ClearBoard,
    /// Abort the drag or pending text box.
    CancelGesture,
    SelectTool(ToolKind),
}

/// A key plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyChord {
    pub const fn plain(key: &'static str) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    pub const fn ctrl(key: &'static str) -> Self {
        Self {
            key,
            ctrl: true,
            shift: false,
        }
    }

    pub const fn ctrl_shift(key: &'static str) -> Self {
        Self {
            key,
            ctrl: true,
            shift: true,
        }
    }

    fn matches(&self, key: &str, ctrl: bool, shift: bool) -> bool {
        self.key.eq_ignore_ascii_case(key) && self.ctrl == ctrl && self.shift == shift
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.shift {
            f.write_str("Shift+")?;
        }
        f.write_str(self.key)
    }
}

/// A bound key chord.
#[derive(Debug, Clone, Copy)]
pub struct Shortcut {
    pub chord: KeyChord,
    pub action: ShortcutAction,
    pub description: &'static str,
}

const SHORTCUTS: &[Shortcut] = &[
    bind(KeyChord::ctrl("Z"), ShortcutAction::Undo, "Undo"),
    bind(KeyChord::ctrl_shift("Z"), ShortcutAction::Redo, "Redo"),
    bind(KeyChord::ctrl("Y"), ShortcutAction::Redo, "Redo"),
    bind(KeyChord::ctrl_shift("Delete"), ShortcutAction::ClearBoard, "Clear board"),
    bind(KeyChord::plain("Escape"), ShortcutAction::CancelGesture, "Cancel drag or text"),
    bind(KeyChord::plain("C"), ShortcutAction::SelectTool(ToolKind::Circle), "Vertex tool"),
    bind(KeyChord::plain("R"), ShortcutAction::SelectTool(ToolKind::Rectangle), "Rectangle tool"),
    bind(KeyChord::plain("L"), ShortcutAction::SelectTool(ToolKind::Line), "Edge tool"),
    bind(KeyChord::plain("P"), ShortcutAction::SelectTool(ToolKind::Freehand), "Freehand tool"),
    bind(KeyChord::plain("T"), ShortcutAction::SelectTool(ToolKind::Text), "Text tool"),
];

const fn bind(chord: KeyChord, action: ShortcutAction, description: &'static str) -> Shortcut {
    Shortcut {
        chord,
        action,
        description,
    }
}

/// The fixed shortcut table.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    pub fn all() -> &'static [Shortcut] {
        SHORTCUTS
    }

    /// Action bound to a key combination. Keys match case-insensitively.
    pub fn lookup(key: &str, ctrl: bool, shift: bool) -> Option<ShortcutAction> {
        SHORTCUTS
            .iter()
            .find(|s| s.chord.matches(key, ctrl, shift))
            .map(|s| s.action)
    }

    /// Print the table to stdout.
    pub fn print_all() {
        println!("Keyboard shortcuts:");
        for shortcut in SHORTCUTS {
            println!("  {:<18} {}", shortcut.chord.to_string(), shortcut.description);
        }
    }
}
