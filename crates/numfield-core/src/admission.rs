//! Keystroke and paste admission.
//!
//! An edit is admitted when the text it would produce still matches the
//! acceptance grammar. The one exception is a full-selection replace: with
//! the whole text selected, a proposal that is valid on its own is let
//! through even if inserting it at the caret would not be.

use numfield_model::{DiagnosticTag, FieldConfig};

use crate::grammar::Grammar;
use crate::host::{Selection, byte_offset};
use crate::keys::DECIMAL_KEY;

/// A proposed edit against the current field state.
#[derive(Debug, Clone, Copy)]
pub struct Edit<'a> {
    pub text: &'a str,
    pub selection: Selection,
    /// Key text or pasted text.
    pub proposal: &'a str,
}

impl<'a> Edit<'a> {
    pub fn new(text: &'a str, selection: Selection, proposal: &'a str) -> Self {
        Self {
            text,
            selection,
            proposal,
        }
    }

    /// Proposal with the keypad decimal key translated to a period.
    pub fn proposed_text(&self) -> &'a str {
        if self.proposal == DECIMAL_KEY {
            "."
        } else {
            self.proposal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Allow,
    /// The host must cancel the edit.
    Suppress { diagnostic: Option<DiagnosticTag> },
}

impl Admission {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Admission::Allow)
    }
}

/// Text the field would hold after inserting `proposal` at `caret`.
pub fn virtual_insert(text: &str, caret: usize, proposal: &str) -> String {
    let offset = byte_offset(text, caret);
    let mut next = String::with_capacity(text.len() + proposal.len());
    next.push_str(&text[..offset]);
    next.push_str(proposal);
    next.push_str(&text[offset..]);
    next
}

/// Decide whether `edit` keeps the field text inside the grammar.
///
/// ```
/// use numfield_core::{Edit, Grammar, Selection, admit};
/// use numfield_model::FieldConfig;
///
/// let config = FieldConfig::new("qty").with_count_int(2);
/// let grammar = Grammar::build(&config).unwrap();
/// assert!(admit(&grammar, &config, &Edit::new("1", Selection::caret(1), "2")).is_allowed());
/// assert!(!admit(&grammar, &config, &Edit::new("12", Selection::caret(2), "3")).is_allowed());
/// ```
pub fn admit(grammar: &Grammar, config: &FieldConfig, edit: &Edit<'_>) -> Admission {
    let next = virtual_insert(edit.text, edit.selection.start, edit.proposed_text());
    if next.is_empty() || grammar.is_match(&next) || replaces_full_selection(grammar, edit) {
        return Admission::Allow;
    }

    let diagnostic = (config.with_messages && decimal_limit_reached(config, edit))
        .then_some(DiagnosticTag::DecimalLimit);
    Admission::Suppress { diagnostic }
}

fn replaces_full_selection(grammar: &Grammar, edit: &Edit<'_>) -> bool {
    let len = edit.text.chars().count();
    edit.selection.spans_all(len) && grammar.is_match(edit.proposed_text())
}

/// True when the user tries to add another decimal digit to a full decimal part.
///
/// Only applies with the caret after the separator; typing in the integer
/// part is a different limit.
pub fn decimal_limit_reached(config: &FieldConfig, edit: &Edit<'_>) -> bool {
    let Some(places) = config.decimal_places() else {
        return false;
    };
    if !starts_with_integer(edit.proposal) {
        return false;
    }
    let Some(separator_at) = edit.text.chars().position(|c| c == ',' || c == '.') else {
        return false;
    };
    if edit.selection.start <= separator_at {
        return false;
    }
    let separator = if edit.text.contains(',') { ',' } else { '.' };
    let decimals = edit.text.split(separator).nth(1).unwrap_or_default();
    decimals.chars().filter(char::is_ascii_digit).count() == places as usize
}

/// Leading-integer test: optional whitespace and sign, then a digit.
fn starts_with_integer(text: &str) -> bool {
    let text = text.trim_start();
    let unsigned = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);
    unsigned.starts_with(|c: char| c.is_ascii_digit())
}
