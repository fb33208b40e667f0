//! Birthday reminder computation.
//!
//! Maps a stored birthday to the date the contact should be congratulated:
//! the next occurrence of the birthday on or after today, moved to Monday
//! when it lands on a weekend.

use crate::domain::{Birthday, BIRTHDAY_FORMAT};
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::warn;

/// Window used when the caller does not pick one.
pub const DEFAULT_REMINDER_WINDOW_DAYS: u32 = 7;

/// A contact whose congratulation date falls inside the reminder window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Birthday in the upcoming year, shifted off weekends
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(BIRTHDAY_FORMAT))
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format(BIRTHDAY_FORMAT)
        )
    }
}

/// Put the birthday's month and day onto `year`.
///
/// 29 February becomes 28 February in non-leap years.
fn project_onto_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day() - 1))
}

/// Next occurrence of the birthday on or after `today`.
///
/// Projects onto this year and, if that is already past, onto next year.
/// Returns `None` only at the edge of the representable calendar.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = project_onto_year(birthday, today.year())?;
    if this_year < today {
        project_onto_year(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move Saturday and Sunday to the following Monday.
pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// The weekday on which to congratulate, relative to `today`.
pub fn congratulation_date(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    next_occurrence(birthday.date(), today).map(adjust_for_weekend)
}

/// Records whose congratulation date is within `window_days` of `today`.
///
/// Both ends of the window are inclusive. Records without a birthday are
/// skipped, and the output keeps the iteration order of `records`.
pub fn upcoming_birthdays<'a, I>(
    records: I,
    today: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    let window = i64::from(window_days);

    records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let Some(date) = congratulation_date(birthday, today) else {
                warn!(name = %record.name(), birthday = %birthday, "Cannot project birthday");
                return None;
            };

            let days_until = (date - today).num_days();
            (0..=window)
                .contains(&days_until)
                .then(|| UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: date,
                })
        })
        .collect()
}
