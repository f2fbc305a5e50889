//! Menu Bar
//!
//! Menu definitions and parsing of typed `:command` lines.

use std::fmt::Write;

/// Everything the user can ask the editor to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    Open,
    Save,
    SaveAs,
    Exit,
    Cut,
    Copy,
    Paste,
    Select { start: usize, end: usize },
    SelectAll,
    Print,
    Documentation,
    About,
    ShowMenu,
}

/// A single entry in a menu
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub label: &'static str,
    pub keyword: &'static str,
    pub command: Command,
}

/// A top-level menu and its entries
#[derive(Debug, Clone)]
pub struct Menu {
    pub label: &'static str,
    pub items: &'static [MenuItem],
}

pub const MENU_BAR: &[Menu] = &[
    Menu {
        label: "File",
        items: &[
            MenuItem { label: "New", keyword: "new", command: Command::New },
            MenuItem { label: "Open", keyword: "open", command: Command::Open },
            MenuItem { label: "Save", keyword: "save", command: Command::Save },
            MenuItem { label: "Save As...", keyword: "saveas", command: Command::SaveAs },
            MenuItem { label: "Exit", keyword: "exit", command: Command::Exit },
        ],
    },
    Menu {
        label: "Edit",
        items: &[
            MenuItem { label: "Cut", keyword: "cut", command: Command::Cut },
            MenuItem { label: "Copy", keyword: "copy", command: Command::Copy },
            MenuItem { label: "Paste", keyword: "paste", command: Command::Paste },
        ],
    },
    Menu {
        label: "Help",
        items: &[
            MenuItem {
                label: "Documentation",
                keyword: "docs",
                command: Command::Documentation,
            },
            MenuItem { label: "About", keyword: "about", command: Command::About },
        ],
    },
];

/// What a typed line means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Text to type into the text area
    Text(String),
    Command(Command),
}

/// Interpret one input line.
///
/// Lines starting with `:` are commands; `::` escapes a literal leading colon.
pub fn parse_input(line: &str) -> Result<Input, String> {
    if let Some(rest) = line.strip_prefix("::") {
        return Ok(Input::Text(format!(":{}", rest)));
    }
    match line.strip_prefix(':') {
        Some(rest) => parse_command(rest).map(Input::Command),
        None => Ok(Input::Text(line.to_string())),
    }
}

fn parse_command(text: &str) -> Result<Command, String> {
    let mut words = text.split_whitespace();
    let keyword = words.next().unwrap_or("").to_lowercase();

    let command = match keyword.as_str() {
        "quit" => Command::Exit,
        "select" => {
            let start = parse_position(words.next())?;
            let end = parse_position(words.next())?;
            Command::Select { start, end }
        }
        "selectall" => Command::SelectAll,
        "print" => Command::Print,
        "menu" | "help" => Command::ShowMenu,
        other => MENU_BAR
            .iter()
            .flat_map(|menu| menu.items)
            .find(|item| item.keyword == other)
            .map(|item| item.command.clone())
            .ok_or_else(|| format!("Unknown command ':{}'", other))?,
    };

    if let Some(extra) = words.next() {
        return Err(format!("Unexpected argument '{}'", extra));
    }
    Ok(command)
}

fn parse_position(word: Option<&str>) -> Result<usize, String> {
    let word = word.ok_or_else(|| ":select expects <from> <to>".to_string())?;
    word.parse()
        .map_err(|_| format!("Invalid position '{}'", word))
}

/// Text shown for `:menu`
pub fn render_menu_bar() -> String {
    let mut out = String::new();
    for menu in MENU_BAR {
        let _ = writeln!(out, "{}", menu.label);
        for item in menu.items {
            let _ = writeln!(out, "  {:<14} :{}", item.label, item.keyword);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(parse_input("hello"), Ok(Input::Text("hello".to_string())));
        assert_eq!(parse_input(""), Ok(Input::Text(String::new())));
    }

    #[test]
    fn test_escaped_colon() {
        assert_eq!(
            parse_input("::not a command"),
            Ok(Input::Text(":not a command".to_string()))
        );
    }

    #[test]
    fn test_menu_keywords() {
        assert_eq!(parse_input(":new"), Ok(Input::Command(Command::New)));
        assert_eq!(parse_input(":saveas"), Ok(Input::Command(Command::SaveAs)));
        assert_eq!(parse_input(":Paste"), Ok(Input::Command(Command::Paste)));
        assert_eq!(parse_input(":quit"), Ok(Input::Command(Command::Exit)));
        assert_eq!(parse_input(":docs"), Ok(Input::Command(Command::Documentation)));
    }

    #[test]
    fn test_select_arguments() {
        assert_eq!(
            parse_input(":select 2 7"),
            Ok(Input::Command(Command::Select { start: 2, end: 7 }))
        );
        assert!(parse_input(":select 2").is_err());
        assert!(parse_input(":select a b").is_err());
    }

    #[test]
    fn test_unknown_and_extra_arguments() {
        assert!(parse_input(":frobnicate").unwrap_err().contains("frobnicate"));
        assert!(parse_input(":save now").is_err());
    }

    #[test]
    fn test_menu_bar_lists_every_entry() {
        let rendered = render_menu_bar();
        for label in ["File", "Edit", "Help", "Save As...", "Documentation", "Exit"] {
            assert!(rendered.contains(label), "missing {}", label);
        }
    }
}
