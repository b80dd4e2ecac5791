//! Upcoming birthdays within the reminder horizon.
//!
//! A birthday is upcoming when its next occurrence (this year, or next year
//! if this year's has already passed) lies within `HORIZON_DAYS` days
//! starting today. Weekend birthdays are congratulated on the following
//! Monday, but the horizon test uses the real occurrence.

use crate::domain::ContactName;
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Number of days, today included, that the reminder looks ahead.
pub const HORIZON_DAYS: i64 = 7;

/// A contact to congratulate and the day to do it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: ContactName,
    pub congratulation_date: NaiveDate,
}

/// Collect the birthdays falling in `[today, today + HORIZON_DAYS - 1]`.
///
/// Entries are returned in the order of `records`. Records without a
/// birthday are skipped.
pub fn upcoming_birthdays<'a, I>(records: I, today: NaiveDate) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;

            let mut occurrence = birthday.in_year(today.year());
            if occurrence < today {
                occurrence = birthday.in_year(today.year() + 1);
            }

            let days_until = (occurrence - today).num_days();
            if days_until >= HORIZON_DAYS {
                return None;
            }

            Some(UpcomingBirthday {
                name: record.name().clone(),
                congratulation_date: shift_off_weekend(occurrence),
            })
        })
        .collect()
}

/// Move Saturday and Sunday forward to the next Monday.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
