//! Book record for the library catalogue.
//!
//! A [`Book`] is a plain data holder: three text fields stored verbatim with
//! no validation of its own. Required-field enforcement belongs to callers
//! that go through [`crate::add_book`] instead of direct construction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A catalogue item identified by title, author, and ISBN.
///
/// All three fields are opaque text. The ISBN carries no checksum or format
/// validation. Construction always succeeds, empty fields included; the
/// record enforces no invariants of its own.
///
/// The serialised form is the plain field tuple `(title, author, isbn)` with
/// no derived or hidden state, so surrounding systems can persist and restore
/// records verbatim.
///
/// # Examples
///
/// ```
/// use catalogue::Book;
///
/// let book = Book::new("Dune", "Frank Herbert", "0441013597");
/// assert_eq!(book.to_string(), "'Dune' by Frank Herbert (ISBN: 0441013597)");
/// assert_eq!(
///     format!("{book:?}"),
///     "Book(title='Dune', author='Frank Herbert', isbn='0441013597')",
/// );
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    title: String,
    author: String,
    isbn: String,
}

impl Book {
    /// Builds a [`Book`] storing all three values verbatim.
    ///
    /// No trimming, normalisation, or defaulting is applied, and no value is
    /// rejected. Callers that need required-field enforcement use
    /// [`crate::add_book`] instead.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }

    /// Title exactly as supplied at construction.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author exactly as supplied at construction.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// ISBN exactly as supplied at construction, treated as an opaque string.
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' by {} (ISBN: {})",
            self.title, self.author, self.isbn
        )
    }
}

impl fmt::Debug for Book {
    /// Constructor-like form. The single quotes are static punctuation;
    /// field values are substituted literally without escaping.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book(title='{}', author='{}', isbn='{}')",
            self.title, self.author, self.isbn
        )
    }
}
