//! Phone value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits a phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// A validated phone number.
///
/// The stored string is always exactly ten ASCII digits. A phone is never
/// mutated after construction; edits build a new `Phone` and drop the old one.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Phone;
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(Phone::new("050-123-45").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Exactly 10 characters
    /// - Every character is a decimal digit (no sign, separators or whitespace)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    fn is_valid(phone: &str) -> bool {
        phone.len() == PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Deserialization goes through the validating constructor
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::new("1234567890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
        assert_eq!(phone.into_inner(), "1234567890");
    }

    #[test]
    fn test_phone_rejects_wrong_length() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("123").is_err());
        assert!(Phone::new("123456789").is_err());
        assert!(Phone::new("12345678901").is_err());
    }

    #[test]
    fn test_phone_rejects_non_digits() {
        assert!(Phone::new("12345abcde").is_err());
        assert!(Phone::new("+123456789").is_err());
        assert!(Phone::new("123-456-78").is_err());
        assert!(Phone::new(" 123456789").is_err());
        assert!(Phone::new("123456789 ").is_err());
        // Non-ASCII digits are not decimal digits here
        assert!(Phone::new("١٢٣٤٥٦٧٨٩٠").is_err());
    }

    #[test]
    fn test_phone_error_carries_input() {
        assert_eq!(
            Phone::new("123"),
            Err(ValidationError::InvalidPhone("123".to_string()))
        );
    }

    #[test]
    fn test_phone_display() {
        let phone = Phone::new("0987654321").unwrap();
        assert_eq!(format!("{}", phone), "0987654321");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = Phone::new("0987654321").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"0987654321\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("\"12345\"");
        assert!(result.is_err());
    }
}
