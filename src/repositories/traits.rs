use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for the address book snapshot.
///
/// Provides abstraction over where the book is kept between sessions,
/// enabling different implementations (JSON file, in-memory mock).
pub trait BookRepository {
    /// Load the saved book, or an empty book if nothing was saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Persist the whole book, replacing the previous snapshot.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
