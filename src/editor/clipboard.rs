//! Clipboard
//!
//! Holds the text most recently cut or copied from the text area.

/// In-process clipboard shared by cut, copy and paste
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clipboard {
    contents: Option<String>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, text: &str) {
        self.contents = Some(text.to_string());
    }

    pub fn get(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}
