//! Presentation layer.
//!
//! The core never prints; everything the user sees goes through a [`View`].

pub mod console;

pub use console::ConsoleView;

use crate::models::Record;
use std::io;

/// One line per supported command, shown by `help`.
pub const COMMAND_HELP: &[&str] = &[
    "hello - Greet the user",
    "add <name> <phone> - Add a new contact",
    "remove <name> - Remove a contact",
    "change <name> <new_phone> - Change a contact's number",
    "phone <name> - Show contact's phone",
    "all - Show all contacts",
    "add-birthday <name> <birthday> - Add a birthday (DD.MM.YYYY) to an existing contact",
    "birthday <name> - Show a contact's birthday",
    "upcoming - Show upcoming birthdays for the next 7 days",
    "random - Show a random number and birthday",
    "close - Exit the program",
    "help - Show all valid commands",
];

/// Rendering capability used by the session.
pub trait View {
    /// Render a listing of contacts.
    fn display_contacts<'a>(
        &mut self,
        records: &mut dyn Iterator<Item = &'a Record>,
    ) -> io::Result<()>;

    /// Render a single message.
    fn display_message(&mut self, message: &str) -> io::Result<()>;

    /// Render the static list of commands.
    fn display_commands(&mut self) -> io::Result<()>;
}
