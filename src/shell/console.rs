//! Console Dialogs
//!
//! Line-based stand-ins for the file pickers and message boxes.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::Dialogs;

/// File types offered by the open and save prompts, default first
pub const FILE_TYPES: &[(&str, &str)] = &[("Text Documents", "*.txt"), ("All Files", "*.*")];

/// Extension appended to save paths typed without one
pub const DEFAULT_EXTENSION: &str = "txt";

/// Reads answers from `input` and writes prompts and messages to `output`
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Next input line without its line ending, or `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut bytes)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }

        let mut line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => {
                log::warn!("Input line is not valid UTF-8, replacing invalid bytes");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn print(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .context("Failed to write output")
    }

    pub fn println(&mut self, text: &str) -> Result<()> {
        self.print(text)?;
        self.print("\n")
    }

    fn ask(&mut self, prompt: &str) -> Option<String> {
        if let Err(e) = self.print(prompt) {
            log::warn!("{:#}", e);
        }
        match self.read_line() {
            Ok(Some(answer)) => {
                let answer = answer.trim();
                (!answer.is_empty()).then(|| answer.to_string())
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("{:#}", e);
                None
            }
        }
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self.println(text) {
            log::warn!("{:#}", e);
        }
    }
}

fn file_types_label() -> String {
    FILE_TYPES
        .iter()
        .map(|(name, pattern)| format!("{} ({})", name, pattern))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Turn a save answer into a file path, appending the default extension when
/// the answer names a file without one. Directories are rejected.
pub fn save_target(answer: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(answer);
    if answer.ends_with(std::path::is_separator) || path.is_dir() {
        return Err(format!("'{}' is a directory, not a file name", answer));
    }
    if path.extension().is_some() {
        Ok(path)
    } else {
        Ok(path.with_extension(DEFAULT_EXTENSION))
    }
}

impl<R: BufRead, W: Write> Dialogs for Console<R, W> {
    fn prompt_open_path(&mut self) -> Option<PathBuf> {
        let prompt = format!("Open [{}]: ", file_types_label());
        self.ask(&prompt).map(PathBuf::from)
    }

    fn prompt_save_path(&mut self, suggested_name: &str) -> Option<PathBuf> {
        let prompt = format!(
            "Save As [{}] (suggested: {}): ",
            file_types_label(),
            suggested_name
        );
        let answer = self.ask(&prompt)?;
        match save_target(&answer) {
            Ok(path) => Some(path),
            Err(message) => {
                self.show_error("Save As", &message);
                None
            }
        }
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.emit(&format!("error: {}: {}", title, message));
    }

    fn show_info(&mut self, title: &str, message: &str) {
        self.emit(&format!("== {} ==\n{}", title, message));
    }
}
