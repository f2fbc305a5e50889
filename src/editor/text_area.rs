//! Editable Text Area
//!
//! Live text with a cursor and an optional selection. Positions are counted
//! in chars, not bytes.

use std::ops::Range;

use super::clipboard::Clipboard;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextArea {
    text: String,
    cursor: usize,
    selection: Option<Range<usize>>,
}

impl TextArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Replace everything, leaving the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.char_len();
        self.selection = None;
    }

    /// Type `text` at the cursor, replacing the selection if there is one
    pub fn insert(&mut self, text: &str) {
        if let Some(range) = self.selection.take() {
            self.delete_range(range);
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, text);
        self.cursor += text.chars().count();
    }

    /// Select `start..end`, clamped to the text. An empty range clears the
    /// selection and moves the cursor there.
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.char_len();
        let (start, end) = (start.min(end).min(len), start.max(end).min(len));
        self.cursor = end;
        self.selection = (start < end).then_some(start..end);
    }

    pub fn select_all(&mut self) {
        self.select(0, self.char_len());
    }

    pub fn selected_text(&self) -> Option<&str> {
        let range = self.selection.as_ref()?;
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end);
        Some(&self.text[start..end])
    }

    /// Move the selection to the clipboard. Returns false if nothing was
    /// selected.
    pub fn cut(&mut self, clipboard: &mut Clipboard) -> bool {
        if !self.copy(clipboard) {
            return false;
        }
        if let Some(range) = self.selection.take() {
            self.delete_range(range);
        }
        true
    }

    /// Copy the selection to the clipboard. Returns false if nothing was
    /// selected.
    pub fn copy(&self, clipboard: &mut Clipboard) -> bool {
        match self.selected_text() {
            Some(selected) => {
                clipboard.set(selected);
                true
            }
            None => false,
        }
    }

    /// Insert the clipboard contents. Returns false if the clipboard is empty.
    pub fn paste(&mut self, clipboard: &Clipboard) -> bool {
        match clipboard.get() {
            Some(contents) => {
                self.insert(contents);
                true
            }
            None => false,
        }
    }

    fn delete_range(&mut self, range: Range<usize>) {
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end);
        self.text.replace_range(start..end, "");
        self.cursor = range.start;
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}
