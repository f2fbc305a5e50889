//! BillyPad
//!
//! A small plain-text editor.
//!
//! This library provides:
//! - Document state and the New/Open/Save/Save As controller
//! - A text area with cut, copy and paste
//! - A console front-end standing in for the window and dialogs
//! - Configuration management

pub mod config;
pub mod core;
pub mod editor;
pub mod shell;

pub use config::Config;
pub use crate::core::{APP_NAME, Dialogs, Document, DocumentController, DocumentObserver, Outcome};
pub use editor::{Clipboard, TextArea};
