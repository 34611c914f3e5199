//! Integration tests driving the prompt loop end to end.

mod fixtures;

use contact_book::{Config, Interpreter};
use fixtures::*;

/// Feed `input` through a fresh prompt session and return what it printed.
fn run_session(interpreter: &mut Interpreter, input: &str) -> Vec<String> {
    let mut output = Vec::new();
    interpreter
        .run(input.as_bytes(), &mut output, "")
        .expect("in-memory I/O should not fail");
    String::from_utf8(output)
        .expect("output should be UTF-8")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_full_session() {
    let mut interpreter = Interpreter::new(&Config::default());
    let lines = run_session(
        &mut interpreter,
        "Hello\n\
         add Alice 123-456-7890\n\
         add Bob 0987654321\n\
         change alice 555 555 5555\n\
         phone ALICE\n\
         show all\n\
         phone Carol\n\
         add Carol\n\
         phone\n\
         close\n\
         add Dave 1111111111\n",
    );

    assert_eq!(
        lines,
        vec![
            "How can I help you?",
            "Contact Alice added",
            "Contact Bob added",
            "Phone number for Alice changed",
            "Phone number for Alice: 5555555555",
            "Contacts:",
            "Alice: 5555555555",
            "Bob: 0987654321",
            "Contact not found",
            "Enter name and phone number separated by a space",
            "Enter a contact name",
            "Good bye!",
        ]
    );

    let book = interpreter.into_book();
    assert_eq!(names(book.records()), vec!["Alice", "Bob"]);
}

#[test]
fn test_session_over_existing_book_with_pages() {
    let mut interpreter = Interpreter::with_book(numbered_book(3), 2);
    let lines = run_session(&mut interpreter, "show all\nfind Contact1\nexit\n");

    assert_eq!(
        lines,
        vec![
            "Contacts:",
            "Page 1:",
            "Contact0: 0000000000",
            "Contact1: 0000000001",
            "Page 2:",
            "Contact2: 0000000002",
            "Found 1 contact(s):",
            "Contact1: 0000000001",
            "Good bye!",
        ]
    );
}

#[test]
fn test_overwriting_add_keeps_one_entry() {
    let mut interpreter = Interpreter::new(&Config::default());
    let lines = run_session(
        &mut interpreter,
        "add Alice 1234567890\nadd alice 0987654321\nshow all\n",
    );

    assert_eq!(
        lines,
        vec![
            "Contact Alice added",
            "Contact alice added",
            "Contacts:",
            "alice: 0987654321",
        ]
    );
    assert_eq!(interpreter.book().len(), 1);
}

#[test]
fn test_validation_errors_are_reported_not_fatal() {
    let mut interpreter = Interpreter::new(&Config::default());
    let lines = run_session(
        &mut interpreter,
        "add Alice 12345\nadd Alice Smith 1234567890\nadd Alice 1234567890\nbirthday Alice 2000-01-01\nbirthday Alice 29.02.2000\ngood bye\n",
    );

    assert_eq!(
        lines,
        vec![
            "Enter name and phone number separated by a space",
            "Enter name and phone number separated by a space",
            "Contact Alice added",
            "Invalid date format",
            "Birthday for Alice set to 29.02.2000",
            "Good bye!",
        ]
    );
    assert_eq!(names(interpreter.book().records()), vec!["Alice"]);
}
