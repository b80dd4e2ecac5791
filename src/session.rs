//! Interactive session: the read-eval loop around the address book.
//!
//! The book is loaded when the session opens and saved exactly once when
//! it ends. If the loop is left early, by an I/O error or a panic, the
//! session's `Drop` performs the save instead.

use crate::commands::{Dispatcher, Reply};
use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::repositories::BookRepository;
use crate::view::View;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{error, info};

/// Greeting shown when the session starts.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Prompt written before each line is read.
pub const PROMPT: &str = "Enter a command: ";

/// An open address book that is saved back when the session ends.
pub struct Session<'r, P: BookRepository> {
    repository: &'r P,
    book: AddressBook,
    saved: bool,
    clock: fn() -> NaiveDate,
}

impl<'r, P: BookRepository> Session<'r, P> {
    /// Load the book from `repository`.
    pub fn open(repository: &'r P) -> StorageResult<Self> {
        let book = repository.load()?;
        Ok(Self {
            repository,
            book,
            saved: false,
            clock: || Local::now().date_naive(),
        })
    }

    /// Use `clock` instead of the local date for birthday reminders.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Read commands from `input` until `exit`/`close` or end of input.
    ///
    /// The prompt goes to `prompt`; every reply goes through `view`. The
    /// book is saved before returning.
    pub fn run<R, I, W, V>(
        mut self,
        input: I,
        mut prompt: W,
        view: &mut V,
        dispatcher: &mut Dispatcher<R>,
    ) -> Result<()>
    where
        R: Rng,
        I: BufRead,
        W: Write,
        V: View,
    {
        view.display_message(WELCOME)?;

        let mut lines = input.lines();
        loop {
            write!(prompt, "{}", PROMPT)?;
            prompt.flush()?;

            let Some(line) = lines.next() else {
                info!("End of input, closing session");
                break;
            };
            let line = line?;

            let today = (self.clock)();
            match dispatcher.dispatch(&line, &mut self.book, today) {
                None => continue,
                Some(Reply::Message(message)) => view.display_message(&message)?,
                Some(Reply::Contacts) => view.display_contacts(&mut self.book.all())?,
                Some(Reply::Commands) => view.display_commands()?,
                Some(Reply::Exit(message)) => {
                    view.display_message(&message)?;
                    break;
                }
            }
        }

        self.close()?;
        Ok(())
    }

    /// Save the book now. Later calls and the drop guard do nothing.
    pub fn close(&mut self) -> StorageResult<()> {
        if self.saved {
            return Ok(());
        }
        self.saved = true;
        self.repository.save(&self.book)?;
        info!(contacts = self.book.len(), "Address book saved");
        Ok(())
    }
}

impl<P: BookRepository> Drop for Session<'_, P> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            error!("Failed to save address book: {}", e);
        }
    }
}
