//! Command handlers for the interactive assistant.
//!
//! Each handler validates its arguments, calls into the address book and
//! returns the text to print. Errors are typed until [`Assistant::handle`]
//! turns them into messages.

use super::messages::{self, user_message, GOODBYE, GREETING, INVALID_COMMAND};
use super::parser::{parse_input, Command};
use crate::book::AddressBook;
use crate::config::Config;
use crate::error::{BookError, CommandError, CommandResult};
use crate::matching::NameMatcher;
use crate::models::Record;
use chrono::NaiveDate;
use tracing::debug;

/// Outcome of one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this and keep going
    Message(String),

    /// Nothing to print (blank line)
    Silent,

    /// Print this and end the session
    Exit(String),
}

/// The interactive assistant: an address book plus the command dispatch.
#[derive(Debug, Clone)]
pub struct Assistant {
    book: AddressBook,
    config: Config,
    matcher: NameMatcher,
}

impl Assistant {
    /// Create an assistant with an empty address book.
    pub fn new(config: Config) -> Self {
        Self::with_book(AddressBook::new(), config)
    }

    pub fn with_book(book: AddressBook, config: Config) -> Self {
        Self {
            book,
            config,
            matcher: NameMatcher::new(),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handle one line of input. `today` anchors the birthday window.
    pub fn handle(&mut self, line: &str, today: NaiveDate) -> Reply {
        let Some((token, args)) = parse_input(line) else {
            return Reply::Silent;
        };

        let command = match token.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Rejected input");
                return Reply::Message(INVALID_COMMAND.to_string());
            }
        };

        match self.execute(command, &args, today) {
            Ok(reply) => reply,
            Err(err) => {
                debug!(command = %command, error = %err, "Command failed");
                Reply::Message(self.describe_error(command, &err))
            }
        }
    }

    fn execute(
        &mut self,
        command: Command,
        args: &[String],
        today: NaiveDate,
    ) -> CommandResult<Reply> {
        let args = Self::require_args(command, args)?;

        let message = match command {
            Command::Exit => return Ok(Reply::Exit(GOODBYE.to_string())),
            Command::Hello => GREETING.to_string(),
            Command::Add => self.add_contact(&args[0], &args[1])?,
            Command::Change => self.change_contact(&args[0], &args[1], &args[2])?,
            Command::Phone => self.show_phone(&args[0])?,
            Command::All => self.show_all(),
            Command::AddBirthday => self.add_birthday(&args[0], &args[1])?,
            Command::ShowBirthday => self.show_birthday(&args[0])?,
            Command::Birthdays => self.birthdays(args.first().map(String::as_str), today)?,
            Command::RemovePhone => self.remove_phone(&args[0], &args[1])?,
            Command::Delete => self.delete_contact(&args[0])?,
            Command::Search => self.search(&args.join(" ")),
            Command::Help => messages::help_text(),
        };
        Ok(Reply::Message(message))
    }

    fn require_args(command: Command, args: &[String]) -> CommandResult<&[String]> {
        if args.len() < command.required_args() {
            return Err(CommandError::MissingArguments {
                command: command.name(),
                usage: command.usage(),
            });
        }
        Ok(args)
    }

    fn record(&self, name: &str) -> CommandResult<&Record> {
        self.book
            .find(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()).into())
    }

    fn record_mut(&mut self, name: &str) -> CommandResult<&mut Record> {
        self.book
            .find_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()).into())
    }

    /// Append to an existing contact, or create it. A bad phone creates nothing.
    fn add_contact(&mut self, name: &str, phone: &str) -> CommandResult<String> {
        if let Some(record) = self.book.find_mut(name) {
            record.add_phone(phone)?;
            return Ok("Contact updated.".to_string());
        }

        let mut record = Record::named(name)?;
        record.add_phone(phone)?;
        self.book.add_record(record);
        Ok("Contact added.".to_string())
    }

    fn change_contact(&mut self, name: &str, old: &str, new: &str) -> CommandResult<String> {
        self.record_mut(name)?.edit_phone(old, new)?;
        Ok("Phone number updated.".to_string())
    }

    fn show_phone(&self, name: &str) -> CommandResult<String> {
        let record = self.record(name)?;
        if record.phones().is_empty() {
            return Ok("No phone numbers.".to_string());
        }
        Ok(record.phones_display())
    }

    fn show_all(&self) -> String {
        if self.book.is_empty() {
            return "Address book is empty.".to_string();
        }

        self.book
            .iter()
            .map(|record| {
                let phones = match record.phones_display() {
                    phones if phones.is_empty() => "N/A".to_string(),
                    phones => phones,
                };
                let birthday = record
                    .birthday()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "N/A".to_string());
                format!(
                    "Name: {}, Phones: {}, Birthday: {}",
                    record.name(),
                    phones,
                    birthday
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn add_birthday(&mut self, name: &str, birthday: &str) -> CommandResult<String> {
        self.record_mut(name)?.add_birthday(birthday)?;
        Ok("Birthday added.".to_string())
    }

    fn show_birthday(&self, name: &str) -> CommandResult<String> {
        Ok(self
            .record(name)?
            .birthday()
            .map(ToString::to_string)
            .unwrap_or_else(|| "Birthday not set.".to_string()))
    }

    fn birthdays(&self, days: Option<&str>, today: NaiveDate) -> CommandResult<String> {
        let window = match days {
            Some(raw) => Self::parse_window(raw)?,
            None => self.config.reminder_window_days,
        };

        let upcoming = self.book.get_upcoming_birthdays(today, window);
        if upcoming.is_empty() {
            return Ok(match window {
                7 => "No birthdays in the next week.".to_string(),
                0 => "No birthdays today.".to_string(),
                1 => "No birthdays in the next day.".to_string(),
                n => format!("No birthdays in the next {} days.", n),
            });
        }

        Ok(upcoming
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn parse_window(raw: &str) -> CommandResult<u32> {
        raw.parse::<u32>()
            .ok()
            .filter(|days| *days <= Config::MAX_REMINDER_WINDOW_DAYS)
            .ok_or_else(|| CommandError::InvalidArgument {
                command: Command::Birthdays.name(),
                value: raw.to_string(),
            })
    }

    fn remove_phone(&mut self, name: &str, phone: &str) -> CommandResult<String> {
        self.record_mut(name)?.remove_phone(phone)?;
        Ok("Phone number removed.".to_string())
    }

    fn delete_contact(&mut self, name: &str) -> CommandResult<String> {
        self.book.delete(name)?;
        Ok("Contact deleted.".to_string())
    }

    fn search(&self, query: &str) -> String {
        let results = self.matcher.search(
            &self.book,
            query,
            usize::MAX,
            self.config.match_confidence_threshold,
        );
        if results.is_empty() {
            return format!("No contacts match '{}'.", query);
        }

        results
            .iter()
            .map(|hit| hit.record.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Error text, with name suggestions when a contact was not found.
    fn describe_error(&self, command: Command, err: &CommandError) -> String {
        let message = user_message(command, err);

        let CommandError::Book(BookError::ContactNotFound(name)) = err else {
            return message;
        };

        let suggestions = self.matcher.suggest(
            name,
            self.book.names(),
            self.config.max_name_suggestions,
            self.config.match_confidence_threshold,
        );
        if suggestions.is_empty() {
            return message;
        }

        let names: Vec<&str> = suggestions.iter().map(|s| s.name.as_str()).collect();
        format!("{} Did you mean: {}?", message, names.join(", "))
    }
}
