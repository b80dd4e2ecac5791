//! Birthday reminder scheduling.

pub mod upcoming;

pub use upcoming::{upcoming_birthdays, UpcomingBirthday, HORIZON_DAYS};
