//! Application services.
//!
//! Business logic that works across records, kept apart from the store and
//! from the command layer.

mod birthday_reminders;

pub use birthday_reminders::{
    adjust_for_weekend, congratulation_date, next_occurrence, upcoming_birthdays,
    UpcomingBirthday, DEFAULT_REMINDER_WINDOW_DAYS,
};
