//! Plain-text renderer for a terminal or any other byte sink.

use super::{View, COMMAND_HELP};
use crate::domain::PhoneNumber;
use crate::models::Record;
use std::io::{self, Write};

/// Writes everything as plain lines to `out`.
#[derive(Debug)]
pub struct ConsoleView<W: Write> {
    out: W,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> View for ConsoleView<W> {
    fn display_contacts<'a>(
        &mut self,
        records: &mut dyn Iterator<Item = &'a Record>,
    ) -> io::Result<()> {
        writeln!(self.out, "*****")?;
        for record in records {
            let phones: Vec<&str> = record.phones().iter().map(PhoneNumber::as_str).collect();
            let birthday = record
                .birthday()
                .map(ToString::to_string)
                .unwrap_or_else(|| "No birthday".to_string());

            writeln!(
                self.out,
                "Name: {} | Phone: {} | Birthday: {}",
                record.name(),
                phones.join("; "),
                birthday
            )?;
            writeln!(self.out, "=====")?;
        }
        self.out.flush()
    }

    fn display_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()
    }

    fn display_commands(&mut self) -> io::Result<()> {
        for line in COMMAND_HELP {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }
}
