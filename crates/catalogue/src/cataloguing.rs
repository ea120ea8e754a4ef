//! Validated book creation.
//!
//! The only behaviour in this crate beyond plain data storage: check that a
//! prospective book's three fields are present and non-empty, then construct
//! the record. Failure is reported as a notice on the tracing channel and a
//! `None` return; it is never escalated as a panic, so callers that need a
//! hard failure inspect the `None` themselves.

use crate::book::Book;
use crate::error::{CataloguingError, RequiredField};

/// Checks that a prospective book's fields are present and non-empty.
///
/// Fields are checked in title, author, ISBN order and the first failure is
/// reported. An absent (`None`) value and an empty string both fail. No
/// trimming is applied, so whitespace-only values pass.
///
/// # Errors
///
/// Returns [`CataloguingError::MissingField`] naming the first absent or
/// empty field.
///
/// # Examples
///
/// ```
/// use catalogue::{CataloguingError, RequiredField, validate_new_book};
///
/// assert!(validate_new_book(Some("Dune"), Some("Frank Herbert"), Some("0441013597")).is_ok());
/// assert_eq!(
///     validate_new_book(Some("Dune"), None, Some("0441013597")),
///     Err(CataloguingError::MissingField {
///         field: RequiredField::Author,
///     }),
/// );
/// ```
pub fn validate_new_book(
    title: Option<&str>,
    author: Option<&str>,
    isbn: Option<&str>,
) -> Result<(), CataloguingError> {
    require(RequiredField::Title, title)?;
    require(RequiredField::Author, author)?;
    require(RequiredField::Isbn, isbn)?;
    Ok(())
}

/// Validates the three fields and constructs a [`Book`] from them.
///
/// On success, emits an informational notice naming the created title and
/// returns the record. On validation failure, emits an error notice and
/// returns `None` without constructing anything. The notices land on
/// whatever tracing subscriber the surrounding application installs; they
/// are observable side effects, not part of the return contract.
///
/// Each call is independent: identical inputs produce independent, equal
/// instances. There is no catalogue to deduplicate against.
///
/// # Examples
///
/// ```
/// use catalogue::add_book;
///
/// let book = add_book(Some("Dune"), Some("Frank Herbert"), Some("0441013597"))
///     .expect("all fields present");
/// assert_eq!(book.title(), "Dune");
///
/// assert!(add_book(None, Some("Frank Herbert"), Some("0441013597")).is_none());
/// ```
#[must_use]
pub fn add_book(title: Option<&str>, author: Option<&str>, isbn: Option<&str>) -> Option<Book> {
    let book = match checked_book(title, author, isbn) {
        Ok(book) => book,
        Err(error) => {
            tracing::error!(%error, "rejected new book");
            return None;
        }
    };

    tracing::info!(title = book.title(), "created new book");
    Some(book)
}

fn checked_book(
    title: Option<&str>,
    author: Option<&str>,
    isbn: Option<&str>,
) -> Result<Book, CataloguingError> {
    let title = require(RequiredField::Title, title)?;
    let author = require(RequiredField::Author, author)?;
    let isbn = require(RequiredField::Isbn, isbn)?;
    Ok(Book::new(title, author, isbn))
}

fn require(field: RequiredField, value: Option<&str>) -> Result<&str, CataloguingError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(CataloguingError::MissingField { field }),
    }
}
