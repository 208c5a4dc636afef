use serde::{Deserialize, Serialize};

use crate::error::LendingError;

/// One rejected operation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorEntry {
    /// Why the operation was rejected
    error: LendingError,
}

impl ErrorEntry {
    /// Wrap a refusal for the log
    #[must_use]
    pub const fn new(error: LendingError) -> Self {
        Self { error }
    }

    /// Get the structured reason
    #[must_use]
    pub const fn error(&self) -> &LendingError {
        &self.error
    }

    /// Get the human-readable reason
    #[must_use]
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// Append-only record of rejected operations
#[derive(Debug, Default, Clone)]
pub struct ErrorLog {
    /// Entries in the order the rejections happened
    entries: Vec<ErrorEntry>,
}

impl ErrorLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to the end of the log
    pub fn append(&mut self, entry: ErrorEntry) {
        self.entries.push(entry);
    }

    /// Get all entries in the order they happened
    #[must_use]
    pub fn list(&self) -> &[ErrorEntry] {
        &self.entries
    }

    /// Get every entry's message, oldest first
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ErrorEntry::message).collect()
    }

    /// Get the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether nothing has been refused
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
