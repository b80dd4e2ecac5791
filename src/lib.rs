//! ConsolHelper - a console assistant for a personal address book.
//!
//! Contacts (a name, phone numbers and a birthday) are managed through a
//! line-based command loop, and the assistant can list whose birthday is
//! coming up in the next week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone number, birthday, name)
//! - **models**: Contact records and the address book
//! - **scheduler**: Upcoming-birthday computation
//! - **commands**: Command parsing and dispatch
//! - **repositories**: Loading and saving the address book
//! - **view**: Rendering replies for the user
//! - **session**: The interactive loop tying everything together
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod scheduler;
pub mod session;
pub mod view;

pub use commands::{Command, Dispatcher, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, ConfigError, StorageError};
pub use models::{AddressBook, Record};
pub use repositories::{BookRepository, JsonFileRepository};
pub use scheduler::{upcoming_birthdays, UpcomingBirthday};
pub use session::Session;
pub use view::{ConsoleView, View};
