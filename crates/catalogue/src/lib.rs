//! Minimal library-catalogue data layer.
//!
//! This crate holds the catalogue's record types and its single piece of
//! behaviour: validated book creation. There is no persistence, no search,
//! no lending workflow, and no shared catalogue state; each record is owned
//! exclusively by whichever caller constructed it.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - [`Book`]: a catalogue item stored as three verbatim text fields
//! - [`User`]: a library patron stored as three verbatim text fields
//! - [`add_book`]: the validating factory that checks required fields before
//!   constructing a [`Book`], reporting failure as `None`
//! - [`validate_new_book`]: the presence check on its own, for callers that
//!   want the [`CataloguingError`] naming the offending field
//!
//! Direct construction via [`Book::new`] and [`User::new`] never fails and
//! performs no validation at all; required-field enforcement happens only at
//! the [`add_book`] boundary.
//!
//! # Example
//!
//! ```
//! use catalogue::{User, add_book};
//!
//! let book = add_book(Some("Dune"), Some("Frank Herbert"), Some("0441013597"))
//!     .expect("all fields present");
//! assert_eq!(book.to_string(), "'Dune' by Frank Herbert (ISBN: 0441013597)");
//!
//! assert!(add_book(Some("Dune"), Some(""), Some("0441013597")).is_none());
//!
//! let patron = User::new("U1", "Ada Lovelace", "ada@example.com");
//! assert_eq!(
//!     patron.to_string(),
//!     "User ID: U1, Name: Ada Lovelace, Email: ada@example.com",
//! );
//! ```

mod book;
mod cataloguing;
mod error;
mod user;

pub use book::Book;
pub use cataloguing::{add_book, validate_new_book};
pub use error::{CataloguingError, RequiredField};
pub use user::User;
