use std::fmt;

use serde::Serialize;

use crate::{book::Genre, error::LendingError, service::LendingService};

/// Catalog row as shown to users
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookView {
    /// Catalog key
    pub isbn: String,
    /// Title as printed
    pub title: String,
    /// Author as printed
    pub author: String,
    /// Year of publication
    pub year: i32,
    /// Shelving genre
    pub genre: Genre,
    /// Whether the book is currently lent out
    pub checked_out: bool,
}

/// Read-only picture of a lending service at one moment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Library name from the seed config
    pub library: String,
    /// Every catalogued book, in insertion order
    pub books: Vec<BookView>,
    /// Usernames of patrons with a positive balance
    pub patrons_owing_fees: Vec<String>,
    /// Transaction descriptions, oldest first
    pub transactions: Vec<String>,
    /// Structured errors; rendered as their messages in text form
    pub errors: Vec<LendingError>,
}

impl Report {
    /// Capture the current state of `service`
    #[must_use]
    pub fn capture(library: &str, service: &LendingService) -> Self {
        Self {
            library: library.to_string(),
            books: service
                .list_books()
                .iter()
                .map(|book| BookView {
                    isbn: book.isbn().to_string(),
                    title: book.title().to_string(),
                    author: book.author().to_string(),
                    year: book.year(),
                    genre: book.genre(),
                    checked_out: book.is_checked_out(),
                })
                .collect(),
            patrons_owing_fees: service
                .list_patrons_owing_fees()
                .into_iter()
                .map(str::to_string)
                .collect(),
            transactions: service.list_transactions(),
            errors: service.errors().list().iter().map(|entry| entry.error().clone()).collect(),
        }
    }

    /// Serialize the report as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.library)?;

        writeln!(f, "\nBooks in Library:")?;
        for book in &self.books {
            let status = if book.checked_out { "checked out" } else { "available" };
            writeln!(
                f,
                "  {} | {} | {} | {} | {} | {status}",
                book.isbn, book.title, book.author, book.year, book.genre
            )?;
        }

        writeln!(f, "\nPatrons who owe fees:")?;
        if self.patrons_owing_fees.is_empty() {
            writeln!(f, "  No patrons owe fees.")?;
        }
        for name in &self.patrons_owing_fees {
            writeln!(f, "  {name}")?;
        }

        writeln!(f, "\nList of Transactions:")?;
        for transaction in &self.transactions {
            writeln!(f, "  {transaction}")?;
        }

        writeln!(f, "\nFailed Transactions (Errors):")?;
        if self.errors.is_empty() {
            writeln!(f, "  No errors recorded.")?;
        }
        for error in &self.errors {
            writeln!(f, "  {error}")?;
        }
        Ok(())
    }
}
