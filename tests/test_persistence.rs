//! JSON snapshot persistence tests against real files in temp directories.

use consol_helper::error::StorageError;
use consol_helper::models::{AddressBook, Record};
use consol_helper::repositories::{BookRepository, JsonFileRepository};
use consol_helper::{ConsoleView, ContactName, Dispatcher, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::io::{self, Cursor};

fn sample_book() -> AddressBook {
    let mut alice = Record::new(ContactName::new("Alice").unwrap());
    alice.add_phone("0501234567").unwrap();
    alice.add_phone("+380671234567").unwrap();
    alice.set_birthday("13.06.1990").unwrap();

    let bob = Record::new(ContactName::new("Bob").unwrap());

    vec![bob, alice].into_iter().collect()
}

#[test]
fn test_load_missing_file_is_empty_book() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let repo = JsonFileRepository::new(temp_dir.path().join("addressbook.json"));

    let book = repo.load().unwrap();
    assert!(book.is_empty());
}

#[test]
fn test_save_then_load_preserves_records_and_order() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let repo = JsonFileRepository::new(temp_dir.path().join("addressbook.json"));
    let book = sample_book();

    repo.save(&book).unwrap();
    let loaded = repo.load().unwrap();

    assert_eq!(loaded, book);
    let names: Vec<&str> = loaded.all().map(|r| r.name().as_str()).collect();
    assert_eq!(names, vec!["Bob", "Alice"]);
}

#[test]
fn test_save_creates_parent_directories() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("dir").join("book.json");
    let repo = JsonFileRepository::new(&path);

    repo.save(&sample_book()).unwrap();
    assert!(path.exists());
}

#[test]
fn test_snapshot_format() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let repo = JsonFileRepository::new(temp_dir.path().join("addressbook.json"));
    repo.save(&sample_book()).unwrap();

    let text = fs::read_to_string(repo.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "records": [
                { "name": "Bob", "phones": [] },
                {
                    "name": "Alice",
                    "phones": ["0501234567", "+380671234567"],
                    "birthday": "13.06.1990"
                }
            ]
        })
    );
}

#[test]
fn test_load_rejects_invalid_phone_in_snapshot() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("addressbook.json");
    fs::write(
        &path,
        r#"{"records":[{"name":"Alice","phones":["12345"]}]}"#,
    )
    .unwrap();

    let result = JsonFileRepository::new(&path).load();
    assert!(matches!(result, Err(StorageError::Json(_))));
}

#[test]
fn test_load_rejects_corrupt_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("addressbook.json");
    fs::write(&path, "not json at all").unwrap();

    assert!(JsonFileRepository::new(&path).load().is_err());
}

#[test]
fn test_session_changes_survive_restart() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let repo = JsonFileRepository::new(temp_dir.path().join("addressbook.json"));
    let mut dispatcher = Dispatcher::with_rng(StdRng::seed_from_u64(3));

    let mut view = ConsoleView::new(Vec::new());
    Session::open(&repo)
        .unwrap()
        .run(
            Cursor::new("add Alice 0501234567\nadd-birthday Alice 13.06.1990\nexit\n"),
            io::sink(),
            &mut view,
            &mut dispatcher,
        )
        .unwrap();

    let mut view = ConsoleView::new(Vec::new());
    Session::open(&repo)
        .unwrap()
        .run(
            Cursor::new("birthday Alice\nremove Alice\nphone Alice\n"),
            io::sink(),
            &mut view,
            &mut dispatcher,
        )
        .unwrap();
    let output = String::from_utf8(view.into_inner()).unwrap();
    assert!(output.contains("Alice - 13.06.1990\nContact removed.\nContact not found.\n"));

    assert!(repo.load().unwrap().is_empty());
}
