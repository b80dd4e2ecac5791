//! AddressBook model: every record, keyed by contact name.

use crate::domain::ContactName;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use crate::scheduler::{upcoming_birthdays, UpcomingBirthday};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// A collection of records with one record per name.
///
/// Iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<ContactName, Record>,
    order: Vec<ContactName>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name.
    ///
    /// An existing record with the same name is overwritten in place. Use
    /// [`AddressBook::find`] first when a duplicate should be refused.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().clone();
        if self.records.insert(name.clone(), record).is_none() {
            self.order.push(name);
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record called `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if there is no such record.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        self.order.retain(|key| key.as_str() != name);
        Ok(record)
    }

    /// All records in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Birthdays to congratulate within the coming week, in book order.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(self.all(), today)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

/// On-disk shape of the book: records as an ordered list.
#[derive(Serialize)]
struct SnapshotRef<'a> {
    records: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct Snapshot {
    #[serde(default)]
    records: Vec<Record>,
}

impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SnapshotRef {
            records: self.all().collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let snapshot = Snapshot::deserialize(deserializer)?;
        Ok(snapshot.records.into_iter().collect())
    }
}
