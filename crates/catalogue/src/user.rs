//! User record for the library catalogue.
//!
//! A [`User`] is a plain data holder for a library patron. Unlike [`Book`],
//! no validating factory exists for users anywhere in this crate; direct
//! construction is the only way to build one.
//!
//! [`Book`]: crate::Book

use std::fmt;

use serde::{Deserialize, Serialize};

/// A library patron identified by an opaque user id, a name, and an email.
///
/// No field is validated: the id is opaque, the email undergoes no format
/// check, and no uniqueness is enforced. Construction always succeeds.
///
/// The serialised form is the plain field tuple `(user_id, name, email)`
/// with no derived or hidden state.
///
/// # Examples
///
/// ```
/// use catalogue::User;
///
/// let patron = User::new("U1", "Ada Lovelace", "ada@example.com");
/// assert_eq!(
///     patron.to_string(),
///     "User ID: U1, Name: Ada Lovelace, Email: ada@example.com",
/// );
/// assert_eq!(
///     format!("{patron:?}"),
///     "User(user_id='U1', name='Ada Lovelace', email='ada@example.com')",
/// );
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct User {
    user_id: String,
    name: String,
    email: String,
}

impl User {
    /// Builds a [`User`] storing all three values verbatim.
    ///
    /// No validation, trimming, or defaulting is applied to any field.
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Opaque identifier exactly as supplied at construction.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Name exactly as supplied at construction.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email exactly as supplied at construction, format unchecked.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User ID: {}, Name: {}, Email: {}",
            self.user_id, self.name, self.email
        )
    }
}

impl fmt::Debug for User {
    /// Constructor-like form mirroring [`Book`](crate::Book)'s debug output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User(user_id='{}', name='{}', email='{}')",
            self.user_id, self.name, self.email
        )
    }
}
