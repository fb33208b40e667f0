//! Integration tests for records and the address book.
//!
//! These tests validate:
//! - Phone and birthday validation at the record boundary
//! - Edit and remove semantics on phone lists
//! - Name-keyed add, find and delete on the book

use contact_assistant::{AddressBook, BookError, Phone, Record, ValidationError};

mod fixtures;
use fixtures::*;

fn phones(record: &Record) -> Vec<&str> {
    record.phones().iter().map(Phone::as_str).collect()
}

#[test]
fn test_every_ten_digit_string_is_a_phone() {
    for raw in ["0000000000", "9999999999", "0123456789", "5005550006"] {
        assert_eq!(Phone::new(raw).unwrap().as_str(), raw);
    }
}

#[test]
fn test_non_ten_digit_strings_are_rejected() {
    for raw in [
        "",
        "1",
        "123456789",
        "12345678901",
        "12345 6789",
        "12345678a0",
        "-123456789",
    ] {
        assert_eq!(
            Phone::new(raw),
            Err(ValidationError::InvalidPhone(raw.to_string())),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn test_edit_phone_touches_only_the_match() {
    let mut record = sample_record(
        "John",
        &["1111111111", "2222222222", "3333333333", "2222222222"],
        None,
    );

    record.edit_phone("2222222222", "4444444444").unwrap();

    assert_eq!(
        phones(&record),
        vec!["1111111111", "4444444444", "3333333333", "2222222222"]
    );
}

#[test]
fn test_remove_absent_phone_is_not_found() {
    let mut record = sample_record("John", &["1111111111"], Some("12.01.1990"));
    let before = record.clone();

    assert_eq!(
        record.remove_phone("2222222222"),
        Err(BookError::PhoneNotFound("2222222222".to_string()))
    );
    assert_eq!(record, before);
}

#[test]
fn test_render_is_idempotent() {
    let record = sample_record("John", &["1111111111", "2222222222"], Some("12.01.1990"));
    let first = record.to_string();
    let second = record.to_string();

    assert_eq!(first, second);
    assert_eq!(first, "Contact name: John, phones: 1111111111; 2222222222");
}

#[test]
fn test_book_lifecycle() {
    let mut book = AddressBook::new();
    book.add_record(sample_record("John", &["1234567890", "5555555555"], None));
    book.add_record(sample_record("Jane", &["9876543210"], None));

    let john = book.find_mut("John").unwrap();
    john.edit_phone("1234567890", "1112223333").unwrap();
    assert_eq!(
        john.find_phone("5555555555").map(Phone::as_str),
        Some("5555555555")
    );

    assert_eq!(
        book.find("John").unwrap().to_string(),
        "Contact name: John, phones: 1112223333; 5555555555"
    );

    book.delete("Jane").unwrap();
    assert!(book.find("Jane").is_none());
    assert_eq!(
        book.delete("Jane"),
        Err(BookError::ContactNotFound("Jane".to_string()))
    );
    assert_eq!(book.len(), 1);
}

#[test]
fn test_re_adding_a_name_replaces_the_record() {
    let mut book = book_of([sample_record("John", &["1111111111"], Some("12.01.1990"))]);

    let previous = book.add_record(Record::named("John").unwrap()).unwrap();

    assert_eq!(phones(&previous), vec!["1111111111"]);
    let current = book.find("John").unwrap();
    assert!(current.phones().is_empty());
    assert!(current.birthday().is_none());
}
