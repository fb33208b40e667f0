//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The core raises typed errors; only the command layer turns them into user text.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record is stored under this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The record holds no such phone number
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),
}

/// Errors raised while executing a user command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Too few tokens for the command's required arguments
    #[error("Missing arguments for '{command}', usage: {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// An optional argument could not be interpreted
    #[error("Invalid argument for '{command}': {value}")]
    InvalidArgument {
        command: &'static str,
        value: String,
    },

    /// The core rejected the operation
    #[error(transparent)]
    Book(#[from] BookError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Book(BookError::Validation(err))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
