//! Text Editing Widget
//!
//! The text area that holds live edits and the clipboard behind the Edit menu.

pub mod clipboard;
pub mod text_area;

pub use clipboard::Clipboard;
pub use text_area::TextArea;
