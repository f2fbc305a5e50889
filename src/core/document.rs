//! Document State
//!
//! The in-memory text buffer and the file it is bound to.

use std::path::{Path, PathBuf};

/// Application name shown in window titles
pub const APP_NAME: &str = "BillyPad";

/// Label used for a document that has no file yet
pub const UNTITLED: &str = "Untitled";

/// File name suggested when an untitled document is saved
pub const UNTITLED_FILE_NAME: &str = "Untitled.txt";

/// A text buffer and its optional file location.
///
/// `path` is `None` until the document is opened from or saved to a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub path: Option<PathBuf>,
    pub content: String,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_untitled(&self) -> bool {
        self.path.is_none()
    }

    /// Name to suggest in a save dialog
    pub fn suggested_file_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED_FILE_NAME.to_string())
    }

    pub fn title(&self, app_name: &str) -> String {
        window_title(self.path.as_deref(), app_name)
    }
}

/// Window title for a document bound to `path`
pub fn window_title(path: Option<&Path>, app_name: &str) -> String {
    let name = path
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| UNTITLED.to_string());
    format!("{} - {}", name, app_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_untitled() {
        let doc = Document::new();
        assert!(doc.is_untitled());
        assert!(doc.content.is_empty());
        assert_eq!(doc.title(APP_NAME), "Untitled - BillyPad");
    }

    #[test]
    fn test_title_uses_basename() {
        let doc = Document {
            path: Some(PathBuf::from("notes/drafts/todo.txt")),
            content: String::new(),
        };
        assert_eq!(doc.title(APP_NAME), "todo.txt - BillyPad");
    }

    #[test]
    fn test_suggested_file_name() {
        let mut doc = Document::new();
        assert_eq!(doc.suggested_file_name(), "Untitled.txt");

        doc.path = Some(PathBuf::from("/tmp/letter.md"));
        assert_eq!(doc.suggested_file_name(), "letter.md");
    }
}
