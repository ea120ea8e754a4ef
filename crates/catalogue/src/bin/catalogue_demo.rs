//! Runnable walkthrough of the catalogue core.
//!
//! Installs a fmt tracing subscriber so the cataloguing notices are visible,
//! then adds a valid and an invalid book and renders a patron. Run with
//! `RUST_LOG=info` to see the notice channel.

use std::io::{self, Write};

use tracing_subscriber::{EnvFilter, fmt};

use catalogue::{Book, User, add_book};

fn main() -> io::Result<()> {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        tracing::warn!(%error, "tracing init failed");
    }

    let mut out = io::stdout().lock();

    if let Some(book) = add_book(Some("Dune"), Some("Frank Herbert"), Some("0441013597")) {
        writeln!(out, "{book}")?;
        writeln!(out, "{book:?}")?;
    }

    // Missing author: reported on the notice channel, nothing constructed.
    if add_book(Some("Dune"), None, Some("0441013597")).is_none() {
        writeln!(out, "no book created for the incomplete request")?;
    }

    let patron = User::new("U1", "Ada Lovelace", "ada@example.com");
    writeln!(out, "{patron}")?;

    // Direct construction skips validation entirely.
    let unchecked = Book::new("", "", "");
    writeln!(out, "{unchecked:?}")?;

    Ok(())
}
