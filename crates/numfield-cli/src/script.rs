//! Scripted field sessions for `numfield replay`.
//!
//! A script is a JSON document:
//!
//! ```json
//! {
//!   "initialText": "",
//!   "events": [
//!     { "event": "focus" },
//!     { "event": "key", "key": "1" },
//!     { "event": "key", "key": "Decimal" },
//!     { "event": "paste", "text": "25" },
//!     { "event": "blur" }
//!   ]
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Script {
    /// Host id reported as the change event target. Defaults to the field name.
    pub target: Option<String>,
    pub initial_text: String,
    pub events: Vec<ScriptEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ScriptEvent {
    Focus,
    Key {
        key: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        meta: bool,
    },
    Paste {
        text: String,
    },
    Select {
        start: usize,
        end: usize,
    },
    Caret {
        position: usize,
    },
    /// Host-side deletion; never filtered.
    Backspace,
    Blur,
}

impl fmt::Display for ScriptEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptEvent::Focus => f.write_str("focus"),
            ScriptEvent::Key { key, ctrl, meta } => {
                if *ctrl {
                    f.write_str("ctrl+")?;
                }
                if *meta {
                    f.write_str("meta+")?;
                }
                write!(f, "key {key}")
            }
            ScriptEvent::Paste { .. } => f.write_str("paste"),
            ScriptEvent::Select { start, end } => write!(f, "select {start}..{end}"),
            ScriptEvent::Caret { position } => write!(f, "caret {position}"),
            ScriptEvent::Backspace => f.write_str("backspace"),
            ScriptEvent::Blur => f.write_str("blur"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_tagged() {
        let script: Script = serde_json::from_str(
            r#"{
                "initialText": "1",
                "events": [
                    {"event": "focus"},
                    {"event": "key", "key": "v", "ctrl": true},
                    {"event": "select", "start": 0, "end": 1},
                    {"event": "blur"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(script.initial_text, "1");
        assert_eq!(script.target, None);
        assert_eq!(
            script.events[1],
            ScriptEvent::Key {
                key: "v".to_string(),
                ctrl: true,
                meta: false,
            }
        );
        assert_eq!(script.events[1].to_string(), "ctrl+key v");
        assert_eq!(script.events[3], ScriptEvent::Blur);
    }
}
