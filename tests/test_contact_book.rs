//! Behaviour of the contact book through the public API.

use chrono::NaiveDate;
use consol_helper::domain::{Birthday, PhoneNumber};
use consol_helper::error::BookError;
use consol_helper::models::{AddressBook, Record};
use consol_helper::{ContactName, Dispatcher, Reply, UpcomingBirthday};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn record(name: &str) -> Record {
    Record::new(ContactName::new(name).unwrap())
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_phone_scenarios() {
    assert!(PhoneNumber::new("+380501234567").is_ok());
    assert!(PhoneNumber::new("0501234567").is_ok());
    assert!(PhoneNumber::new("12345").is_err());
}

#[test]
fn test_valid_phones_keep_exact_input() {
    for raw in ["0501234567", "+0501234567", "380501234567", "+380931112233"] {
        assert_eq!(PhoneNumber::new(raw).unwrap().as_str(), raw);
    }
}

#[test]
fn test_birthday_parsing() {
    assert_eq!(Birthday::new("13.06.2024").unwrap().date(), date(2024, 6, 13));
    for raw in ["31.02.2024", "2024.06.13", "13-06-2024", "", "13.6.2024"] {
        assert!(Birthday::new(raw).is_err(), "{} should be rejected", raw);
    }
}

#[test]
fn test_added_record_is_found_empty() {
    let mut book = AddressBook::new();
    book.add_record(record("Alice"));

    let found = book.find("Alice").unwrap();
    assert_eq!(found.name().as_str(), "Alice");
    assert!(found.phones().is_empty());
    assert!(found.birthday().is_none());
}

#[test]
fn test_delete_semantics() {
    let mut book = AddressBook::new();
    assert!(matches!(book.delete("Alice"), Err(BookError::NotFound(_))));

    book.add_record(record("Alice"));
    book.delete("Alice").unwrap();
    assert!(book.find("Alice").is_none());
}

#[test]
fn test_edit_phone_scenario() {
    let mut alice = record("Alice");
    alice.add_phone("0501234567").unwrap();

    alice.edit_phone("0501234567", "0671234567").unwrap();
    let phones: Vec<&str> = alice.phones().iter().map(PhoneNumber::as_str).collect();
    assert_eq!(phones, vec!["0671234567"]);

    alice.edit_phone("0000000000", "0931234567").unwrap();
    let phones: Vec<&str> = alice.phones().iter().map(PhoneNumber::as_str).collect();
    assert_eq!(phones, vec!["0671234567"]);
}

#[test]
fn test_upcoming_scenario() {
    let mut a = record("A");
    a.set_birthday("13.06.1980").unwrap();
    let mut b = record("B");
    b.set_birthday("15.06.1980").unwrap();
    let mut c = record("C");
    c.set_birthday("20.06.1980").unwrap();
    let d = record("D");
    let book: AddressBook = vec![a, b, c, d].into_iter().collect();

    assert_eq!(
        book.upcoming_birthdays(date(2024, 6, 10)),
        vec![
            UpcomingBirthday {
                name: ContactName::new("A").unwrap(),
                congratulation_date: date(2024, 6, 13),
            },
            UpcomingBirthday {
                name: ContactName::new("B").unwrap(),
                congratulation_date: date(2024, 6, 17),
            },
        ]
    );
}

#[test]
fn test_dispatcher_conversation() {
    let mut dispatcher = Dispatcher::with_rng(StdRng::seed_from_u64(9));
    let mut book = AddressBook::new();
    let today = date(2024, 6, 10);

    let mut say = |line: &str, book: &mut AddressBook| dispatcher.dispatch(line, book, today);
    let msg = |text: &str| Some(Reply::Message(text.to_string()));

    assert_eq!(say("add Alice 0501234567", &mut book), msg("Contact added."));
    assert_eq!(say("change Alice 0671234567", &mut book), msg("Contact updated."));
    assert_eq!(say("phone Alice", &mut book), msg("Alice - 0671234567"));
    assert_eq!(say("change Alice", &mut book), msg("Enter the new phone number."));
    assert_eq!(say("change Alice bad", &mut book), msg("Give me name and phone or birthday in correct formats."));
    assert_eq!(say("add-birthday Alice 16.06.1990", &mut book), msg("Birthday added."));
    assert_eq!(say("add-birthday Alice 1990-06-16", &mut book), msg("Give me name and phone or birthday in correct formats."));
    assert_eq!(say("birthday Alice", &mut book), msg("Alice - 16.06.1990"));
    assert_eq!(say("birthday Bob", &mut book), msg("Birthday not found."));
    assert_eq!(say("upcoming", &mut book), msg("Alice - 17.06.2024"));
    assert_eq!(say("secret", &mut book), msg("Shh! It's a secret :)"));
    assert_eq!(say("add Bob 0501112233", &mut book), msg("Contact added."));
    assert_eq!(say("add-birthday Bob 31.02.2024", &mut book), msg("Give me name and phone or birthday in correct formats."));
    assert_eq!(say("remove Alice", &mut book), msg("Contact removed."));
    assert_eq!(say("upcoming", &mut book), msg("No upcoming birthdays."));
    assert_eq!(say("phone", &mut book), msg("Enter the arguments for the command."));
}

#[test]
fn test_random_reply_is_pasteable() {
    let mut dispatcher = Dispatcher::with_rng(StdRng::seed_from_u64(11));
    let mut book = AddressBook::new();

    let Some(Reply::Message(sample)) = dispatcher.dispatch("random", &mut book, date(2024, 6, 10))
    else {
        panic!("random should reply with a message");
    };
    let (phone, birthday) = sample.split_once(" | ").unwrap();

    let reply = dispatcher.dispatch(&format!("add Sam {}", phone), &mut book, date(2024, 6, 10));
    assert_eq!(reply, Some(Reply::Message("Contact added.".to_string())));
    let reply = dispatcher.dispatch(
        &format!("add-birthday Sam {}", birthday),
        &mut book,
        date(2024, 6, 10),
    );
    assert_eq!(reply, Some(Reply::Message("Birthday added.".to_string())));
}
