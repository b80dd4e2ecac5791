use consol_helper::error::{StorageError, StorageResult};
use consol_helper::models::AddressBook;
use consol_helper::repositories::BookRepository;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

/// Mock address book repository for testing.
///
/// Keeps the "saved" book in memory and tracks method calls for
/// verification. Can be told to fail saves.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockBookRepository {
    stored: RefCell<Option<AddressBook>>,
    call_counts: RefCell<HashMap<String, usize>>,
    fail_saves: bool,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a repository with nothing saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        Self {
            stored: RefCell::new(Some(book)),
            ..Self::default()
        }
    }

    /// Create a repository whose saves always fail.
    pub fn failing_saves() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// The last book passed to `save`, if any.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.borrow().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl BookRepository for MockBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");
        Ok(self.stored.borrow().clone().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");
        if self.fail_saves {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only storage",
            )));
        }
        *self.stored.borrow_mut() = Some(book.clone());
        Ok(())
    }
}
