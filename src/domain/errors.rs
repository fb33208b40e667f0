//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday is not a valid `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number (expected 10 digits): {}", phone)
            }
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid birthday (expected DD.MM.YYYY): {}", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
