//! Command handlers.
//!
//! Each handler performs one command against the address book and returns
//! the text to show. Failures are returned as [`BookError`] and turned into
//! a message by the dispatcher, so no command can end the session.

use crate::domain::birthday::BIRTHDAY_FORMAT;
use crate::domain::{ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Record};
use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

/// Reply for any phone or birthday that fails validation.
pub const INVALID_FORMAT_MESSAGE: &str =
    "Give me name and phone or birthday in correct formats.";

/// Prefixes the `random` command picks from.
const SAMPLE_PHONE_PREFIXES: &[&str] = &["063", "+38097", "095", "+38099"];

/// Earliest year the `random` command generates.
const SAMPLE_FIRST_YEAR: i32 = 1900;

fn arg<'a>(args: &[&'a str], index: usize) -> BookResult<&'a str> {
    args.get(index).copied().ok_or(BookError::MissingArgument)
}

fn find_mut<'b>(book: &'b mut AddressBook, name: &str) -> BookResult<&'b mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::NotFound(name.to_string()))
}

/// `add <name> <phone>`
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    if book.find(name).is_some() {
        return Err(BookError::DuplicateContact(name.to_string()));
    }

    let mut record = Record::new(ContactName::new(name)?);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `remove <name>`
pub fn remove_contact(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    book.delete(arg(args, 0)?)?;
    Ok("Contact removed.".to_string())
}

/// `change <name> <new_phone>`
///
/// Replaces the contact's first phone. A contact without phones is left
/// as it is, though the new number is still validated.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let record = find_mut(book, arg(args, 0)?)?;
    let Some(&new_phone) = args.get(1) else {
        return Ok("Enter the new phone number.".to_string());
    };

    let new_phone = PhoneNumber::new(new_phone)?;
    if let Some(current) = record.phones().first().cloned() {
        record.edit_phone(current.as_str(), new_phone.as_str())?;
    }
    Ok("Contact updated.".to_string())
}

/// `phone <name>`
pub fn show_phone(args: &[&str], book: &AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    book.find(name)
        .map(ToString::to_string)
        .ok_or_else(|| BookError::NotFound(name.to_string()))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    let birthday = arg(args, 1)?;

    find_mut(book, name)?.set_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    Ok(match book.find(name).and_then(Record::birthday) {
        Some(birthday) => format!("{} - {}", name, birthday),
        None => "Birthday not found.".to_string(),
    })
}

/// `upcoming`
pub fn upcoming(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }

    upcoming
        .iter()
        .map(|entry| {
            format!(
                "{} - {}",
                entry.name,
                entry.congratulation_date.format(BIRTHDAY_FORMAT)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `random`: a sample phone and birthday, both accepted by the validators.
pub fn random_sample<R: Rng>(rng: &mut R, today: NaiveDate) -> String {
    let prefix = SAMPLE_PHONE_PREFIXES
        .choose(rng)
        .copied()
        .unwrap_or(SAMPLE_PHONE_PREFIXES[0]);
    let subscriber: u32 = rng.gen_range(1_000_000..=9_999_999);

    let first_day = NaiveDate::from_ymd_opt(SAMPLE_FIRST_YEAR, 1, 1).unwrap_or(today);
    let span = (today - first_day).num_days().max(0);
    let birthday = first_day + Duration::days(rng.gen_range(0..=span));

    format!(
        "{}{} | {}",
        prefix,
        subscriber,
        birthday.format(BIRTHDAY_FORMAT)
    )
}

/// User-facing text for a failed command.
pub fn error_message(err: &BookError) -> String {
    match err {
        BookError::InvalidFormat(_) => INVALID_FORMAT_MESSAGE.to_string(),
        BookError::NotFound(_) => "Contact not found.".to_string(),
        BookError::DuplicateContact(_) => "This contact already exists.".to_string(),
        BookError::MissingArgument => "Enter the arguments for the command.".to_string(),
    }
}
