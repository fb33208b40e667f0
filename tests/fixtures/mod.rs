//! Shared fixtures for integration tests.
//!
//! Builders for records and books used across test files.

#![allow(dead_code)]

use chrono::NaiveDate;
use contact_assistant::{AddressBook, Record};

/// Shorthand for a calendar date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// A record with the given phones and optional birthday.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::named(name).expect("valid fixture name");
    for phone in phones {
        record.add_phone(phone).expect("valid fixture phone");
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).expect("valid fixture birthday");
    }
    record
}

/// A record with a birthday and no phones.
pub fn birthday_record(name: &str, birthday: &str) -> Record {
    sample_record(name, &[], Some(birthday))
}

/// Book built from records, in the given order.
pub fn book_of(records: impl IntoIterator<Item = Record>) -> AddressBook {
    let mut book = AddressBook::new();
    for record in records {
        book.add_record(record);
    }
    book
}
