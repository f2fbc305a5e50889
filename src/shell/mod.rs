//! Console Front-End
//!
//! The window, menus and dialogs, driven by line input.

pub mod console;
pub mod help;
pub mod menu;
pub mod session;
pub mod window;

pub use console::Console;
pub use menu::Command;
pub use session::{Flow, Session, run};
pub use window::Window;
