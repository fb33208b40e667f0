//! In-memory address book.
//!
//! A name-keyed collection of [`Record`]s. Records iterate in insertion
//! order, which keeps listings and birthday reminders deterministic.

use crate::error::{BookError, BookResult};
use crate::models::Record;
use crate::services::{self, UpcomingBirthday};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Name-keyed store of contact records.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }

    /// Insert a record under its name.
    ///
    /// An existing record with the same name is replaced in place and
    /// returned; its phones and birthday are not merged.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name().as_str()) {
            Some(index) => {
                warn!(name = %record.name(), "Overwriting existing contact");
                Some(std::mem::replace(&mut self.records[index], record))
            }
            None => {
                debug!(name = %record.name(), "Adding contact");
                self.records.push(record);
                None
            }
        }
    }

    /// Exact, case-sensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|index| &self.records[index])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let index = self.position(name)?;
        Some(&mut self.records[index])
    }

    /// Remove the record stored under `name` and return it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if no record has that name.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let index = self
            .position(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        debug!(name, "Deleting contact");
        Ok(self.records.remove(index))
    }

    /// Contacts to congratulate within `window_days` of `today`.
    ///
    /// See [`services::upcoming_birthdays`] for the date rules.
    pub fn get_upcoming_birthdays(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        services::upcoming_birthdays(&self.records, today, window_days)
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Iterate record names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name().as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
