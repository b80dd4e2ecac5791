//! Command words understood by the assistant.

use std::fmt;
use std::str::FromStr;

/// A recognised command verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add,
    Remove,
    Change,
    Phone,
    All,
    AddBirthday,
    Birthday,
    Upcoming,
    Random,
    Secret,
    Exit,
}

/// The first token did not name any command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown command: {}", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" | "hi" => Ok(Command::Hello),
            "help" | "commands" => Ok(Command::Help),
            "add" => Ok(Command::Add),
            "remove" => Ok(Command::Remove),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "birthday" => Ok(Command::Birthday),
            "upcoming" => Ok(Command::Upcoming),
            "random" => Ok(Command::Random),
            "secret" => Ok(Command::Secret),
            "exit" | "close" => Ok(Command::Exit),
            _ => Err(UnknownCommand(s.to_string())),
        }
    }
}

/// A line of user input split into its command word and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub command: Result<Command, UnknownCommand>,
    pub args: Vec<&'a str>,
}

impl<'a> Invocation<'a> {
    /// Split `line` on whitespace. Returns `None` for a blank line.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let command = tokens.next()?.parse();
        Some(Self {
            command,
            args: tokens.collect(),
        })
    }
}
