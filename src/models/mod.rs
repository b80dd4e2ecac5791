//! Data models for the address book.
//!
//! A [`Record`] holds one contact's name, phones and birthday; the
//! [`AddressBook`] owns every record keyed by name.

pub mod book;
pub mod record;

pub use book::AddressBook;
pub use record::Record;
