//! Command dispatch.
//!
//! Turns a line of user input into a [`Reply`]. Every failure is converted
//! into a message at this boundary; only `exit`/`close` end the session.

pub mod command;
pub mod handlers;

pub use command::{Command, Invocation, UnknownCommand};

use crate::error::BookResult;
use crate::models::AddressBook;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

/// What the session should show after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show a single message.
    Message(String),
    /// Show every contact in the book.
    Contacts,
    /// Show the command listing.
    Commands,
    /// Show a farewell message and end the session.
    Exit(String),
}

/// Routes commands to their handlers.
pub struct Dispatcher<R = StdRng> {
    rng: R,
}

impl Dispatcher<StdRng> {
    /// Create a dispatcher seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for Dispatcher<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Dispatcher<R> {
    /// Create a dispatcher drawing `random` samples from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Run one line of input. Returns `None` for a blank line.
    pub fn dispatch(
        &mut self,
        line: &str,
        book: &mut AddressBook,
        today: NaiveDate,
    ) -> Option<Reply> {
        let invocation = Invocation::parse(line)?;

        let command = match invocation.command {
            Ok(command) => command,
            Err(unknown) => {
                debug!(input = %unknown.0, "Unknown command");
                return Some(Reply::Message("Invalid command".to_string()));
            }
        };
        debug!(?command, args = invocation.args.len(), "Dispatching command");

        let args = invocation.args.as_slice();
        let reply = match command {
            Command::Hello => Reply::Message("How can I help you?".to_string()),
            Command::Help => Reply::Commands,
            Command::Exit => Reply::Exit("Good bye!".to_string()),
            Command::Secret => Reply::Message("Shh! It's a secret :)".to_string()),
            Command::All if book.is_empty() => {
                Reply::Message("No contacts are available.".to_string())
            }
            Command::All => Reply::Contacts,
            Command::Upcoming => Reply::Message(handlers::upcoming(book, today)),
            Command::Random => Reply::Message(handlers::random_sample(&mut self.rng, today)),
            Command::Add => Self::guarded(command, handlers::add_contact(args, book)),
            Command::Remove => Self::guarded(command, handlers::remove_contact(args, book)),
            Command::Change => Self::guarded(command, handlers::change_contact(args, book)),
            Command::Phone => Self::guarded(command, handlers::show_phone(args, book)),
            Command::AddBirthday => Self::guarded(command, handlers::add_birthday(args, book)),
            Command::Birthday => Self::guarded(command, handlers::show_birthday(args, book)),
        };
        Some(reply)
    }

    fn guarded(command: Command, result: BookResult<String>) -> Reply {
        match result {
            Ok(message) => Reply::Message(message),
            Err(e) => {
                warn!(?command, error = %e, "Command failed");
                Reply::Message(handlers::error_message(&e))
            }
        }
    }
}
