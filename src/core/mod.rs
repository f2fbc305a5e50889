//! Core Document Logic
//!
//! Document state, file storage and the controller for the File menu.

pub mod controller;
pub mod document;
pub mod storage;

pub use controller::{Change, Dialogs, DocumentController, DocumentEvent, DocumentObserver, Outcome};
pub use document::{APP_NAME, Document};
