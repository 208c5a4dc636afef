use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{book::Book, patron::Patron};

/// Kind of lending activity recorded in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Activity {
    /// A book left the library with a patron
    CheckOut,
    /// A book came back
    CheckIn,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CheckOut => f.write_str("Check Out"),
            Self::CheckIn => f.write_str("Check In"),
        }
    }
}

/// A completed lending activity.
///
/// Holds copies of the book and patron as they were when the activity
/// happened, so later edits to the live records leave history alone.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Transaction {
    /// Book as it was at the time
    book: Book,
    /// Patron as they were at the time
    patron: Patron,
    /// What happened
    activity: Activity,
    /// Caller-supplied date
    date: String,
}

impl Transaction {
    /// Record an activity from copies of the book and patron involved
    #[must_use]
    pub fn new(book: Book, patron: Patron, activity: Activity, date: impl Into<String>) -> Self {
        Self { book, patron, activity, date: date.into() }
    }

    /// Get the book as it was at the time
    #[must_use]
    pub const fn book(&self) -> &Book {
        &self.book
    }

    /// Get the patron as they were at the time
    #[must_use]
    pub const fn patron(&self) -> &Patron {
        &self.patron
    }

    /// Get the kind of activity
    #[must_use]
    pub const fn activity(&self) -> Activity {
        self.activity
    }

    /// Get the date supplied by the caller
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// One-line description for listings
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transaction: {} | Book: {} ({}) | Patron: {} ({}) | Date: {}",
            self.activity,
            self.book.title(),
            self.book.isbn(),
            self.patron.user_name(),
            self.patron.card_number(),
            self.date
        )
    }
}

/// Append-only record of completed lending activity
#[derive(Debug, Default, Clone)]
pub struct TransactionLog {
    /// Transactions in the order they happened
    entries: Vec<Transaction>,
}

impl TransactionLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transaction to the end of the log
    pub fn append(&mut self, transaction: Transaction) {
        self.entries.push(transaction);
    }

    /// Get all transactions in the order they happened
    #[must_use]
    pub fn list(&self) -> &[Transaction] {
        &self.entries
    }

    /// Get the most recent transaction
    #[must_use]
    pub fn last(&self) -> Option<&Transaction> {
        self.entries.last()
    }

    /// Get the one-line description of every transaction, oldest first
    #[must_use]
    pub fn descriptions(&self) -> Vec<String> {
        self.entries.iter().map(Transaction::description).collect()
    }

    /// Get the number of recorded transactions
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
