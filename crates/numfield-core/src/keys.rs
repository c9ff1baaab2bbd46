//! Keyboard routing for the keydown handler.

/// Navigation and editing keys that never reach the admission filter.
pub const SPECIAL_KEYS: &[&str] = &[
    "Backspace",
    "Tab",
    "End",
    "Home",
    "ArrowLeft",
    "ArrowRight",
    "ArrowUp",
    "ArrowDown",
    "Delete",
    "Insert",
    "PageUp",
    "PageDown",
    "Enter",
    "Escape",
    "Shift",
    "Control",
    "Alt",
    "Meta",
    "CapsLock",
    "F1",
    "F2",
    "F3",
    "F4",
    "F5",
    "F6",
    "F7",
    "F8",
    "F9",
    "F10",
    "F11",
    "F12",
];

/// Letters that are shortcuts when combined with Ctrl/Cmd.
pub const CTRL_KEYS: &[&str] = &["A", "C", "V", "X", "Y", "Z"];

/// Key name hosts send for the numeric keypad decimal key.
pub const DECIMAL_KEY: &str = "Decimal";

/// A keydown as reported by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

/// Where a keydown is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRoute {
    /// Let the host apply it untouched.
    PassThrough,
    /// Clipboard paste; the host follows up with a paste event.
    Paste,
    /// Check the key against the grammar.
    Filter,
}

pub fn route(key: &KeyPress) -> KeyRoute {
    let upper = key.key.to_uppercase();
    let shortcut = key.ctrl || key.meta;
    if shortcut && upper == "V" {
        return KeyRoute::Paste;
    }
    if key.key.is_empty() || SPECIAL_KEYS.contains(&key.key.as_str()) {
        return KeyRoute::PassThrough;
    }
    if shortcut && CTRL_KEYS.contains(&upper.as_str()) {
        return KeyRoute::PassThrough;
    }
    KeyRoute::Filter
}
