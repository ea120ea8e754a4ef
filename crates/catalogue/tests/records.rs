//! Unit tests for the Book and User records.
//!
//! These tests pin the exact rendering formats, verbatim field storage, and
//! the plain-field-tuple serialisation contract.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use catalogue::{Book, User};
use rstest::rstest;
use serde_json::json;

#[test]
fn book_displays_in_catalogue_form() {
    let book = Book::new("Dune", "Frank Herbert", "0441013597");
    assert_eq!(book.to_string(), "'Dune' by Frank Herbert (ISBN: 0441013597)");
}

#[test]
fn book_debug_reconstructs_a_constructor_expression() {
    let book = Book::new("Dune", "Frank Herbert", "0441013597");
    assert_eq!(
        format!("{book:?}"),
        "Book(title='Dune', author='Frank Herbert', isbn='0441013597')"
    );
}

#[test]
fn user_displays_in_labelled_form() {
    let patron = User::new("U1", "Ada Lovelace", "ada@example.com");
    assert_eq!(
        patron.to_string(),
        "User ID: U1, Name: Ada Lovelace, Email: ada@example.com"
    );
}

#[test]
fn user_debug_reconstructs_a_constructor_expression() {
    let patron = User::new("U1", "Ada Lovelace", "ada@example.com");
    assert_eq!(
        format!("{patron:?}"),
        "User(user_id='U1', name='Ada Lovelace', email='ada@example.com')"
    );
}

/// Direct construction performs no validation, unlike the cataloguing
/// operation: every input is stored verbatim, empty strings included.
#[rstest]
#[case::all_empty("", "", "")]
#[case::whitespace_only(" ", "\t", "  ")]
#[case::partially_empty("Dune", "", "0441013597")]
#[case::complete("Dune", "Frank Herbert", "0441013597")]
fn book_construction_never_validates(#[case] title: &str, #[case] author: &str, #[case] isbn: &str) {
    let book = Book::new(title, author, isbn);
    assert_eq!(book.title(), title);
    assert_eq!(book.author(), author);
    assert_eq!(book.isbn(), isbn);
}

#[test]
fn user_fields_are_stored_without_format_checks() {
    let patron = User::new("", "Ada Lovelace", "not-an-email");
    assert_eq!(patron.user_id(), "");
    assert_eq!(patron.name(), "Ada Lovelace");
    assert_eq!(patron.email(), "not-an-email");
}

#[test]
fn book_serialises_as_a_plain_field_tuple() {
    let book = Book::new("Dune", "Frank Herbert", "0441013597");
    let value = serde_json::to_value(&book).expect("book serialises");
    assert_eq!(
        value,
        json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "isbn": "0441013597",
        })
    );

    let restored: Book = serde_json::from_value(value).expect("book deserialises");
    assert_eq!(restored, book);
}

#[test]
fn user_serialises_as_a_plain_field_tuple() {
    let patron = User::new("U1", "Ada Lovelace", "ada@example.com");
    let value = serde_json::to_value(&patron).expect("user serialises");
    assert_eq!(
        value,
        json!({
            "userId": "U1",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
        })
    );
}
