//! Contact Assistant - an interactive command-line contact book.
//!
//! Stores names, phone numbers and birthdays in memory, validates every
//! field on the way in, and lists whom to congratulate in the coming days.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (name, phone, birthday)
//! - **models**: The contact record
//! - **book**: The in-memory address book
//! - **services**: Birthday reminder computation
//! - **matching**: Fuzzy name suggestions and search
//! - **commands**: Input parsing, dispatch and user-facing messages
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use book::AddressBook;
pub use commands::{Assistant, Command, Reply};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use matching::{MatchResult, NameMatcher};
pub use models::Record;
pub use services::{UpcomingBirthday, DEFAULT_REMINDER_WINDOW_DAYS};
