use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::config::Config;
use crate::core::{Dialogs, DocumentController, Outcome};
use crate::editor::{Clipboard, TextArea};
use crate::shell::console::Console;
use crate::shell::help;
use crate::shell::menu::{self, Command, Input};
use crate::shell::window::Window;

/// Whether the session keeps reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One editor window driven by console input
pub struct Session<R, W> {
    controller: DocumentController<Window>,
    text_area: TextArea,
    clipboard: Clipboard,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: &Config, console: Console<R, W>) -> Self {
        let mut window = Window::new(config.window);
        if let Some(icon) = &config.icon {
            window.load_icon(icon);
        }

        Self {
            controller: DocumentController::new(window),
            text_area: TextArea::new(),
            clipboard: Clipboard::new(),
            console,
        }
    }

    pub fn controller(&self) -> &DocumentController<Window> {
        &self.controller
    }

    pub fn text_area(&self) -> &TextArea {
        &self.text_area
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn window(&self) -> &Window {
        self.controller.observer()
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Read and handle lines until Exit or end of input
    pub fn run(&mut self) -> Result<()> {
        let size = self.window().size();
        let banner = format!(
            "{} {}x{} - type :menu for commands",
            crate::APP_NAME,
            size.width,
            size.height
        );
        self.console.println(&banner)?;
        self.show_title()?;

        while let Some(line) = self.console.read_line()? {
            if self.handle_line(&line)? == Flow::Exit {
                break;
            }
        }

        log::info!("Session ended");
        Ok(())
    }

    /// Handle one line of input: a command or typed text
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        match menu::parse_input(line) {
            Ok(Input::Text(text)) => {
                self.text_area.insert(&text);
                self.text_area.insert("\n");
                Ok(Flow::Continue)
            }
            Ok(Input::Command(command)) => self.execute(command),
            Err(message) => {
                self.console.println(&format!("error: {}", message))?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::New => {
                self.controller.new_document();
                self.text_area.set_text(self.controller.content());
            }
            Command::Open => {
                if self.controller.open(&mut self.console) == Outcome::Completed {
                    self.text_area.set_text(self.controller.content());
                }
            }
            Command::Save => {
                self.sync_and(|controller, console| controller.save(console));
            }
            Command::SaveAs => {
                self.sync_and(|controller, console| controller.save_as(console));
            }
            Command::Exit => return Ok(Flow::Exit),
            Command::Cut => {
                if !self.text_area.cut(&mut self.clipboard) {
                    self.console.println("(nothing selected)")?;
                }
            }
            Command::Copy => {
                if !self.text_area.copy(&mut self.clipboard) {
                    self.console.println("(nothing selected)")?;
                }
            }
            Command::Paste => {
                if !self.text_area.paste(&self.clipboard) {
                    self.console.println("(clipboard is empty)")?;
                }
            }
            Command::Select { start, end } => {
                self.text_area.select(start, end);
                self.report_selection()?;
            }
            Command::SelectAll => {
                self.text_area.select_all();
                self.report_selection()?;
            }
            Command::Print => {
                let text = self.text_area.text().to_string();
                self.console.print(&text)?;
                if !text.is_empty() && !text.ends_with('\n') {
                    self.console.print("\n")?;
                }
            }
            Command::Documentation => self
                .console
                .show_info(help::DOCUMENTATION_TITLE, help::DOCUMENTATION_TEXT),
            Command::About => self.console.show_info(help::ABOUT_TITLE, help::ABOUT_TEXT),
            Command::ShowMenu => self.console.print(&menu::render_menu_bar())?,
        }

        if self.controller.observer_mut().take_title_change() {
            self.show_title()?;
        }
        Ok(Flow::Continue)
    }

    /// Push the text area into the document, then save. The document content
    /// is rolled back if nothing was written.
    fn sync_and<F>(&mut self, save: F)
    where
        F: FnOnce(&mut DocumentController<Window>, &mut Console<R, W>) -> Outcome,
    {
        let previous = self.controller.content().to_string();
        self.controller.set_content(self.text_area.text());

        if save(&mut self.controller, &mut self.console) != Outcome::Completed {
            self.controller.set_content(previous);
        }
    }

    fn report_selection(&mut self) -> Result<()> {
        let message = match self.text_area.selection() {
            Some(range) => format!("(selected {} chars)", range.len()),
            None => "(selection cleared)".to_string(),
        };
        self.console.println(&message)
    }

    fn show_title(&mut self) -> Result<()> {
        let title = format!("[{}]", self.window().title());
        self.console.println(&title)
    }
}

/// Run an editor session on stdin/stdout
pub fn run(config: Config) -> Result<()> {
    if let Some(path) = &config.settings_path {
        log::info!("Loaded settings from {}", path.display());
    }

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut session = Session::new(&config, console);
    session.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

    fn session(input: &str) -> TestSession {
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        Session::new(&Config::default(), console)
    }

    fn output(session: TestSession) -> String {
        String::from_utf8(session.into_console().into_output()).expect("utf8")
    }

    #[test]
    fn test_typed_lines_go_to_text_area() {
        let mut session = session("");
        session.handle_line("hello").unwrap();
        session.handle_line("::colon").unwrap();
        assert_eq!(session.text_area().text(), "hello\n:colon\n");
        assert_eq!(session.controller().content(), "");
    }

    #[test]
    fn test_invalid_utf8_input_does_not_end_session() {
        let input = b"keep this\n\xff\xfe\n:print\n".to_vec();
        let console = Console::new(Cursor::new(input), Vec::new());
        let mut session = Session::new(&Config::default(), console);

        session.run().expect("session keeps running");

        assert_eq!(session.text_area().text(), "keep this\n\u{FFFD}\u{FFFD}\n");
        assert!(output(session).contains("keep this\n\u{FFFD}\u{FFFD}\n"));
    }

    #[test]
    fn test_exit_stops_session() {
        let mut session = session("");
        assert_eq!(session.handle_line(":exit").unwrap(), Flow::Exit);
        assert_eq!(session.handle_line(":quit").unwrap(), Flow::Exit);
    }

    #[test]
    fn test_cancelled_save_as_rolls_back_content() {
        let mut session = session("\n");
        session.handle_line("unsaved").unwrap();
        session.handle_line(":saveas").unwrap();

        assert!(session.controller().is_untitled());
        assert_eq!(session.controller().content(), "");
        assert_eq!(session.text_area().text(), "unsaved\n");
    }

    #[test]
    fn test_save_then_title_updates() {
        let dir = tempdir().expect("tempdir");
        let target = dir.path().join("memo");
        let mut session = session(&format!("{}\n", target.display()));

        session.handle_line("remember the milk").unwrap();
        session.handle_line(":save").unwrap();

        let saved = dir.path().join("memo.txt");
        assert_eq!(
            std::fs::read_to_string(&saved).expect("read"),
            "remember the milk\n"
        );
        assert_eq!(session.window().title(), "memo.txt - BillyPad");
        assert!(output(session).contains("[memo.txt - BillyPad]"));
    }

    #[test]
    fn test_unknown_command_reports_error() {
        let mut session = session("");
        assert_eq!(session.handle_line(":bogus").unwrap(), Flow::Continue);
        assert!(output(session).contains("error: Unknown command ':bogus'"));
    }

    #[test]
    fn test_edit_menu_round_trip() {
        let mut session = session("");
        session.handle_line("abc").unwrap();
        session.handle_line(":select 0 1").unwrap();
        session.handle_line(":cut").unwrap();
        session.handle_line(":select 3 3").unwrap();
        session.handle_line(":paste").unwrap();
        assert_eq!(session.text_area().text(), "bc\na");
        assert_eq!(session.clipboard().get(), Some("a"));
    }

    #[test]
    fn test_about_and_docs() {
        let mut session = session("");
        session.handle_line(":about").unwrap();
        session.handle_line(":docs").unwrap();
        let out = output(session);
        assert!(out.contains("About BillyPad"));
        assert!(out.contains("Paste    - Paste text from clipboard."));
    }
}
