//! Editor Window
//!
//! Title, size and icon of the main window. The window follows document
//! changes as an observer.

use std::path::{Path, PathBuf};

use crate::config::WindowSize;
use crate::core::document::{APP_NAME, window_title};
use crate::core::{DocumentEvent, DocumentObserver};

/// Icon the window shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    Default,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Window {
    title: String,
    size: WindowSize,
    icon: Icon,
    title_changed: bool,
}

impl Window {
    pub fn new(size: WindowSize) -> Self {
        Self {
            title: window_title(None, APP_NAME),
            size,
            icon: Icon::Default,
            title_changed: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> WindowSize {
        self.size
    }

    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    /// Use the icon at `path`, keeping the default one if it is missing
    pub fn load_icon(&mut self, path: &Path) {
        if path.is_file() {
            log::debug!("Using window icon {}", path.display());
            self.icon = Icon::File(path.to_path_buf());
        } else {
            log::warn!(
                "Icon file not found, maybe deleted or moved: {}",
                path.display()
            );
            self.icon = Icon::Default;
        }
    }

    /// Whether the title changed since the last call
    pub fn take_title_change(&mut self) -> bool {
        std::mem::take(&mut self.title_changed)
    }
}

impl DocumentObserver for Window {
    fn document_changed(&mut self, event: &DocumentEvent) {
        if self.title != event.title {
            log::debug!("Window title: {}", event.title);
            self.title = event.title.clone();
            self.title_changed = true;
        }
    }
}
