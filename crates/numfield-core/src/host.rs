//! Host text field abstraction.
//!
//! Positions are counted in characters, not bytes.

use numfield_model::FieldHandle;

/// Selection bounds inside the field text. `start == end` is a caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    pub fn caret(position: usize) -> Self {
        Self::new(position, position)
    }

    /// True when the selection covers the whole text of `len` characters.
    pub fn spans_all(&self, len: usize) -> bool {
        self.start == 0 && self.end == len
    }
}

/// The element a numeric field is attached to.
pub trait HostField {
    fn text(&self) -> &str;
    fn selection(&self) -> Selection;
    fn set_text(&mut self, text: &str);
    fn handle(&self) -> FieldHandle;
}

/// In-memory text input used by the CLI and tests.
///
/// Applies edits the way a browser input does: the proposal replaces the
/// selection and the caret lands after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    id: String,
    text: String,
    selection: Selection,
}

impl TextBuffer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Replace the text and park the caret at the end.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self.selection = Selection::caret(self.len());
        self
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.len();
        self.selection = Selection::new(start.min(len), end.min(len));
    }

    pub fn select_all(&mut self) {
        self.selection = Selection::new(0, self.len());
    }

    pub fn set_caret(&mut self, position: usize) {
        self.select(position, position);
    }

    /// Replace the selection with `proposal`.
    pub fn insert(&mut self, proposal: &str) {
        let start = byte_offset(&self.text, self.selection.start);
        let end = byte_offset(&self.text, self.selection.end);
        self.text.replace_range(start..end, proposal);
        self.set_caret(self.selection.start + proposal.chars().count());
    }

    /// Delete the selection, or the character before the caret.
    pub fn backspace(&mut self) {
        let Selection { start, end } = self.selection;
        if start == end && start == 0 {
            return;
        }
        let from = if start == end { start - 1 } else { start };
        let from_byte = byte_offset(&self.text, from);
        let to_byte = byte_offset(&self.text, end);
        self.text.replace_range(from_byte..to_byte, "");
        self.set_caret(from);
    }
}

impl HostField for TextBuffer {
    fn text(&self) -> &str {
        &self.text
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.selection = Selection::caret(self.len());
    }

    fn handle(&self) -> FieldHandle {
        FieldHandle::new(self.id.clone())
    }
}

/// Byte offset of the `position`-th character, clamped to the end.
pub(crate) fn byte_offset(text: &str, position: usize) -> usize {
    text.char_indices()
        .nth(position)
        .map_or(text.len(), |(offset, _)| offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_selection() {
        let mut buffer = TextBuffer::new("f").with_text("1234");
        buffer.select(1, 3);
        buffer.insert("9");
        assert_eq!(buffer.text(), "194");
        assert_eq!(buffer.selection(), Selection::caret(2));
    }

    #[test]
    fn backspace_removes_previous_char() {
        let mut buffer = TextBuffer::new("f").with_text("12,5");
        buffer.backspace();
        assert_eq!(buffer.text(), "12,");
        buffer.set_caret(0);
        buffer.backspace();
        assert_eq!(buffer.text(), "12,");
    }

    #[test]
    fn positions_are_characters() {
        let mut buffer = TextBuffer::new("f").with_text("ñ1");
        buffer.set_caret(1);
        buffer.insert("2");
        assert_eq!(buffer.text(), "ñ21");
    }

    #[test]
    fn selection_is_clamped_and_ordered() {
        let mut buffer = TextBuffer::new("f").with_text("12");
        buffer.select(9, 1);
        assert_eq!(buffer.selection(), Selection::new(1, 2));
        assert!(!buffer.selection().spans_all(buffer.len()));
        buffer.select_all();
        assert!(buffer.selection().spans_all(buffer.len()));
    }
}
