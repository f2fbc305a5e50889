//! Document Controller
//!
//! Turns File menu intents (New, Open, Save, Save As) into document state
//! transitions and file I/O, and reports every successful transition to an
//! observer so the presentation can keep its title in sync.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::document::{APP_NAME, Document};
use super::storage;

/// Dialogs the controller needs from the presentation layer
pub trait Dialogs {
    /// Ask for a file to open. `None` means the user cancelled.
    fn prompt_open_path(&mut self) -> Option<PathBuf>;

    /// Ask for a destination, pre-filled with `suggested_name`. `None` means
    /// the user cancelled.
    fn prompt_save_path(&mut self, suggested_name: &str) -> Option<PathBuf>;

    /// Non-fatal error notification
    fn show_error(&mut self, title: &str, message: &str);

    /// Informational popup with static text
    fn show_info(&mut self, title: &str, message: &str);
}

/// Kind of state transition that happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Reset,
    Opened,
    Saved,
    SavedAs,
}

/// Notification sent after a successful transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEvent {
    pub change: Change,
    pub path: Option<PathBuf>,
    pub title: String,
}

/// Receives document state changes
pub trait DocumentObserver {
    fn document_changed(&mut self, event: &DocumentEvent);
}

impl<F: FnMut(&DocumentEvent)> DocumentObserver for F {
    fn document_changed(&mut self, event: &DocumentEvent) {
        self(event)
    }
}

/// Result of a dialog-driven operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Cancelled,
    /// An I/O error was reported to the user; the document is unchanged.
    Failed,
}

/// Owns the document and performs the File menu operations
#[derive(Debug)]
pub struct DocumentController<O> {
    document: Document,
    app_name: String,
    observer: O,
}

impl<O: DocumentObserver> DocumentController<O> {
    pub fn new(observer: O) -> Self {
        Self::with_app_name(APP_NAME, observer)
    }

    pub fn with_app_name(app_name: impl Into<String>, observer: O) -> Self {
        Self {
            document: Document::new(),
            app_name: app_name.into(),
            observer,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn path(&self) -> Option<&Path> {
        self.document.path.as_deref()
    }

    pub fn content(&self) -> &str {
        &self.document.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.document.content = content.into();
    }

    pub fn is_untitled(&self) -> bool {
        self.document.is_untitled()
    }

    pub fn title(&self) -> String {
        self.document.title(&self.app_name)
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Discard the current document and start an untitled one.
    ///
    /// Unsaved content is dropped without asking.
    pub fn new_document(&mut self) {
        self.document = Document::new();
        log::info!("Started new untitled document");
        self.notify(Change::Reset);
    }

    /// Prompt for a file and load it
    pub fn open(&mut self, dialogs: &mut impl Dialogs) -> Outcome {
        let Some(path) = dialogs.prompt_open_path() else {
            log::debug!("Open cancelled");
            return Outcome::Cancelled;
        };

        match self.open_path(&path) {
            Ok(()) => Outcome::Completed,
            Err(e) => self.report_failure(dialogs, "Open failed", e),
        }
    }

    /// Save to the bound file, or ask for one when the document is untitled
    pub fn save(&mut self, dialogs: &mut impl Dialogs) -> Outcome {
        let Some(path) = self.document.path.clone() else {
            return self.save_as(dialogs);
        };

        match storage::write_text(&path, &self.document.content) {
            Ok(()) => {
                log::info!("Saved {}", path.display());
                self.notify(Change::Saved);
                Outcome::Completed
            }
            Err(e) => self.report_failure(dialogs, "Save failed", e),
        }
    }

    /// Prompt for a destination, write there and rebind the document to it
    pub fn save_as(&mut self, dialogs: &mut impl Dialogs) -> Outcome {
        let suggested = self.document.suggested_file_name();
        let Some(path) = dialogs.prompt_save_path(&suggested) else {
            log::debug!("Save As cancelled");
            return Outcome::Cancelled;
        };

        match self.write_to(&path) {
            Ok(()) => Outcome::Completed,
            Err(e) => self.report_failure(dialogs, "Save As failed", e),
        }
    }

    /// Load `path` into the document. On error the document is unchanged.
    pub fn open_path(&mut self, path: &Path) -> Result<()> {
        let content = storage::read_text(path)?;

        self.document = Document {
            path: Some(path.to_path_buf()),
            content,
        };
        log::info!("Opened {}", path.display());
        self.notify(Change::Opened);
        Ok(())
    }

    /// Write the document to `path` and bind it there. On error the document
    /// is unchanged.
    pub fn write_to(&mut self, path: &Path) -> Result<()> {
        storage::write_text(path, &self.document.content)?;

        self.document.path = Some(path.to_path_buf());
        log::info!("Saved as {}", path.display());
        self.notify(Change::SavedAs);
        Ok(())
    }

    fn report_failure(
        &self,
        dialogs: &mut impl Dialogs,
        title: &str,
        error: anyhow::Error,
    ) -> Outcome {
        let message = format!("{:#}", error);
        log::error!("{}: {}", title, message);
        dialogs.show_error(title, &message);
        Outcome::Failed
    }

    fn notify(&mut self, change: Change) {
        let event = DocumentEvent {
            change,
            path: self.document.path.clone(),
            title: self.title(),
        };
        self.observer.document_changed(&event);
    }
}
