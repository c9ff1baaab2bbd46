//! Acceptance grammar construction.
//!
//! The grammar decides whether a candidate text is a valid value *or* a
//! valid prefix of one, so it must accept every intermediate state a user
//! passes through while typing (`""`, `"-"`, `"12,"`).
//!
//! Shape:
//!
//! ```text
//! ^(-?[0-9]{0,N}([.,][0-9]{0,D})?%?$)|^(?i:t(?:o(?:k)?)?)$|...
//! ```
//!
//! Verbatim tokens are matched as whole tokens, case-insensitively, and
//! every non-empty prefix of a token is accepted so it can be typed one
//! character at a time.

use numfield_model::FieldConfig;
use regex::Regex;
use tracing::debug;

use crate::error::{FieldError, Result};

/// Compiled acceptance grammar. Built once per field and never mutated.
#[derive(Debug, Clone)]
pub struct Grammar {
    regex: Regex,
}

impl Grammar {
    /// Build the grammar for a field configuration.
    pub fn build(config: &FieldConfig) -> Result<Self> {
        let pattern = grammar_pattern(config);
        let regex = Regex::new(&pattern).map_err(|source| FieldError::Grammar {
            pattern: pattern.clone(),
            source,
        })?;
        debug!(field = %config.name, pattern = %pattern, "acceptance grammar built");
        Ok(Self { regex })
    }

    /// Source text of the compiled pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// True when `text` is a valid value or a valid prefix of one.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Render the acceptance pattern for a configuration.
pub fn grammar_pattern(config: &FieldConfig) -> String {
    let sign = if config.with_negatives { "-?" } else { "" };
    let int_digits = match config.int_digits() {
        Some(count) => format!("{{0,{count}}}"),
        None => "*".to_string(),
    };
    let decimal = match config.decimal_places() {
        Some(count) => format!("([.,][0-9]{{0,{count}}})?"),
        None => String::new(),
    };
    let percent = if config.with_percentage { "%?" } else { "" };

    let mut pattern = format!("^({sign}[0-9]{int_digits}{decimal}{percent}$)");
    if let Some(tokens) = &config.other_characters {
        for token in tokens.tokens() {
            if let Some(chain) = token_prefix_chain(token) {
                pattern.push_str(&format!("|^(?i:{chain})$"));
            }
        }
    }
    pattern
}

/// `"na"` → `n(?:a)?`: the first character is required, each later one
/// only if everything before it is present.
fn token_prefix_chain(token: &str) -> Option<String> {
    let chars: Vec<char> = token.trim().chars().collect();
    let (last, rest) = chars.split_last()?;
    let mut chain = regex::escape(&last.to_string());
    for ch in rest.iter().rev() {
        chain = format!("{}(?:{chain})?", regex::escape(&ch.to_string()));
    }
    Some(chain)
}
