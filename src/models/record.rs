//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact: one name, any number of phones and an optional birthday.
///
/// The name is fixed for the record's lifetime. Phones keep insertion order
/// and may contain duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record from a raw name string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for an empty name.
    pub fn named(name: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(Name::new(name)?))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        let phone = Phone::new(phone)?;
        debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Find the first phone whose digits exactly equal `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    fn position_of(&self, phone: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))
    }

    /// Remove the first matching phone and return it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` and leaves the record untouched
    /// when no phone matches.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<Phone> {
        let index = self.position_of(phone)?;
        debug!(name = %self.name, phone, "Removing phone");
        Ok(self.phones.remove(index))
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// The old phone is looked up before `new` is validated. On any error the
    /// record is unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self.position_of(old)?;
        let replacement = Phone::new(new)?;
        debug!(name = %self.name, old, new, "Editing phone");
        self.phones[index] = replacement;
        Ok(())
    }

    /// Set the birthday, overwriting any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> BookResult<()> {
        let birthday = Birthday::parse(birthday)?;
        debug!(name = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Phones joined with `"; "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_phones(phones: &[&str]) -> Record {
        let mut record = Record::named("John").unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    fn phone_strings(record: &Record) -> Vec<&str> {
        record.phones().iter().map(Phone::as_str).collect()
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = Record::named("John").unwrap();
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_named_rejects_empty() {
        assert_eq!(Record::named(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let record = record_with_phones(&["1234567890", "1234567890"]);
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_add_phone_invalid_leaves_record_unchanged() {
        let mut record = record_with_phones(&["1234567890"]);
        let err = record.add_phone("123").unwrap_err();
        assert_eq!(
            err,
            BookError::Validation(ValidationError::InvalidPhone("123".to_string()))
        );
        assert_eq!(phone_strings(&record), vec!["1234567890"]);
    }

    #[test]
    fn test_find_phone() {
        let record = record_with_phones(&["1234567890", "5555555555"]);
        assert_eq!(
            record.find_phone("5555555555").map(Phone::as_str),
            Some("5555555555")
        );
        assert!(record.find_phone("0000000000").is_none());
        assert!(record.find_phone("555555555").is_none());
    }

    #[test]
    fn test_remove_phone_removes_first_match_only() {
        let mut record = record_with_phones(&["1111111111", "2222222222", "1111111111"]);
        let removed = record.remove_phone("1111111111").unwrap();
        assert_eq!(removed.as_str(), "1111111111");
        assert_eq!(phone_strings(&record), vec!["2222222222", "1111111111"]);
    }

    #[test]
    fn test_remove_missing_phone_fails_without_mutation() {
        let mut record = record_with_phones(&["1111111111", "2222222222"]);
        let before = record.clone();
        assert_eq!(
            record.remove_phone("3333333333"),
            Err(BookError::PhoneNotFound("3333333333".to_string()))
        );
        assert_eq!(record, before);
    }

    #[test]
    fn test_edit_phone_keeps_position() {
        let mut record = record_with_phones(&["1111111111", "2222222222", "3333333333"]);
        record.edit_phone("2222222222", "9999999999").unwrap();
        assert_eq!(
            phone_strings(&record),
            vec!["1111111111", "9999999999", "3333333333"]
        );
    }

    #[test]
    fn test_edit_phone_missing_old() {
        let mut record = record_with_phones(&["1111111111"]);
        assert_eq!(
            record.edit_phone("2222222222", "9999999999"),
            Err(BookError::PhoneNotFound("2222222222".to_string()))
        );
        assert_eq!(phone_strings(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_edit_phone_invalid_new() {
        let mut record = record_with_phones(&["1111111111"]);
        let err = record.edit_phone("1111111111", "12ab").unwrap_err();
        assert!(matches!(
            err,
            BookError::Validation(ValidationError::InvalidPhone(_))
        ));
        assert_eq!(phone_strings(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = Record::named("John").unwrap();
        record.add_birthday("12.01.1990").unwrap();
        record.add_birthday("13.02.1991").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "13.02.1991");
    }

    #[test]
    fn test_add_birthday_invalid_keeps_previous() {
        let mut record = Record::named("John").unwrap();
        record.add_birthday("12.01.1990").unwrap();
        assert!(record.add_birthday("31.04.1990").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "12.01.1990");
    }

    #[test]
    fn test_display() {
        let record = record_with_phones(&["1234567890", "5555555555"]);
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555"
        );
        // Rendering does not change the record
        assert_eq!(record.to_string(), record.to_string());
    }

    #[test]
    fn test_display_without_phones() {
        let record = Record::named("Jane").unwrap();
        assert_eq!(record.to_string(), "Contact name: Jane, phones: ");
    }

    #[test]
    fn test_record_serialization() {
        let mut record = record_with_phones(&["1234567890"]);
        record.add_birthday("12.01.1990").unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "John",
                "phones": ["1234567890"],
                "birthday": "12.01.1990"
            })
        );
    }

    #[test]
    fn test_record_deserialization_validates_fields() {
        let result: Result<Record, _> =
            serde_json::from_str(r#"{"name": "John", "phones": ["123"]}"#);
        assert!(result.is_err());

        let record: Record = serde_json::from_str(r#"{"name": "John"}"#).unwrap();
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }
}
