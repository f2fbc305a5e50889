//! Help menu texts

pub const ABOUT_TITLE: &str = "About BillyPad";

pub const ABOUT_TEXT: &str = "A sophisticated text editor.";

pub const DOCUMENTATION_TITLE: &str = "Documentation";

pub const DOCUMENTATION_TEXT: &str = "\
File
-----
New      - Creates a new file.
Open     - Opens an existing file.
Save     - Saves the current file.
Save As  - Saves file as a new file.
Exit     - Quit the application.
-----------------------------------
Edit
-----
Copy     - Copy selected text.
Cut      - Cut selected text.
Paste    - Paste text from clipboard.
-----------------------------------
Typing
-----
Lines that do not start with ':' are typed into the document.
Start a line with '::' to type a leading ':'.
:select <from> <to> and :selectall choose text for Cut and Copy.
:print shows the document, :menu lists every command.";
