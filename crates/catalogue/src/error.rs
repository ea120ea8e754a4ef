//! Error types for the catalogue crate.
//!
//! The taxonomy is deliberately small: cataloguing can fail in exactly one
//! way, a required book field being absent or empty. The error is surfaced
//! through [`crate::validate_new_book`]; [`crate::add_book`] converts it into
//! a log notice plus a `None` return and never escalates it.

use std::fmt;

use thiserror::Error;

/// Field of a prospective book that cataloguing requires to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    /// The book's title.
    Title,
    /// The book's author.
    Author,
    /// The book's ISBN.
    Isbn,
}

impl RequiredField {
    /// Field name as it appears in notices.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Isbn => "ISBN",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors reported by the cataloguing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CataloguingError {
    /// A required field was absent or an empty string. Values are checked
    /// without trimming, so whitespace-only input does not trigger this.
    #[error("{field} is required and must not be empty")]
    MissingField {
        /// Which field failed the presence check.
        field: RequiredField,
    },
}
