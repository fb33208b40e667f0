//! User-facing text.
//!
//! Errors are turned into text here and nowhere else. Each error kind gets
//! its own message so a failed lookup never reads like a bad phone number.

use super::parser::Command;
use crate::domain::ValidationError;
use crate::error::{BookError, CommandError};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const GOODBYE: &str = "Good bye!";
pub const GREETING: &str = "How can I help you?";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// What to tell the user when `command` fails with `err`.
pub fn user_message(command: Command, err: &CommandError) -> String {
    match err {
        CommandError::MissingArguments { .. } => missing_arguments(command),
        CommandError::InvalidArgument { value, .. } => match command {
            Command::Birthdays => format!(
                "Number of days must be a whole number from 0 to 366, got '{}'.",
                value
            ),
            _ => format!("Invalid argument '{}'. Usage: {}", value, command.usage()),
        },
        CommandError::Book(err) => book_error(command, err),
    }
}

fn missing_arguments(command: Command) -> String {
    match command {
        Command::Add => "Provide name and phone number.".to_string(),
        Command::Change => "Provide name, old phone and new phone.".to_string(),
        Command::Phone => "Provide name to show the phone.".to_string(),
        Command::AddBirthday => "Provide name and birthday (DD.MM.YYYY).".to_string(),
        Command::ShowBirthday => "Provide name to show the birthday.".to_string(),
        Command::RemovePhone => "Provide name and phone to remove.".to_string(),
        Command::Delete => "Provide name to delete.".to_string(),
        Command::Search => "Provide a name or phone to search for.".to_string(),
        other => format!("Usage: {}", other.usage()),
    }
}

fn book_error(command: Command, err: &BookError) -> String {
    match err {
        BookError::Validation(ValidationError::EmptyName) => "Name cannot be empty.".to_string(),
        BookError::Validation(ValidationError::InvalidPhone(phone)) => format!(
            "Phone number must contain exactly 10 digits, got '{}'.",
            phone
        ),
        BookError::Validation(ValidationError::InvalidBirthday(date)) => {
            format!("Invalid date '{}'. Use DD.MM.YYYY.", date)
        }
        BookError::ContactNotFound(name) => format!("Contact '{}' is not found.", name),
        BookError::PhoneNotFound(phone) => match command {
            Command::Change => format!("Old phone {} is not found.", phone),
            _ => format!("Phone {} is not found.", phone),
        },
    }
}

/// Listing for the `help` command.
pub fn help_text() -> String {
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(Command::ALL.iter().map(|c| format!("  {}", c.usage())));
    lines.join("\n")
}
