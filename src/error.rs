use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons the lending core rejects an operation.
///
/// Every variant carries the identifiers involved so the error log stays
/// machine-inspectable, while `Display` renders the message shown to patrons
/// and librarians.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Deserialize, Serialize)]
pub enum LendingError {
    /// No catalog entry has the given ISBN
    #[error("Error: Book with ISBN {isbn} not found.")]
    BookNotFound {
        /// The ISBN that was looked up
        isbn: String,
    },
    /// No registered patron has the given card number
    #[error("Error: Patron with card number {card_number} not found.")]
    PatronNotFound {
        /// The card number that was looked up
        card_number: String,
    },
    /// The patron has outstanding fees and may not borrow
    #[error("Error: Patron owes fees.")]
    PatronOwesFees {
        /// Card number of the patron
        card_number: String,
        /// Amount owed at the time of the attempt
        owed_fees: u32,
    },
    /// The book is already out with another patron
    #[error("Error: Book is already checked out.")]
    BookAlreadyCheckedOut {
        /// ISBN of the book
        isbn: String,
    },
    /// A return was attempted for a book that is on the shelf
    #[error("Error: Book is not checked out.")]
    BookNotCheckedOut {
        /// ISBN of the book
        isbn: String,
    },
    /// A book with this ISBN is already in the catalog
    #[error("Error: Book with ISBN {isbn} already exists.")]
    DuplicateBook {
        /// The conflicting ISBN
        isbn: String,
    },
    /// A patron with this card number is already registered
    #[error("Error: Patron with card number {card_number} already exists.")]
    DuplicatePatron {
        /// The conflicting card number
        card_number: String,
    },
}

impl LendingError {
    /// Short machine-friendly name of the variant
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::BookNotFound { .. } => "BookNotFound",
            Self::PatronNotFound { .. } => "PatronNotFound",
            Self::PatronOwesFees { .. } => "PatronOwesFees",
            Self::BookAlreadyCheckedOut { .. } => "BookAlreadyCheckedOut",
            Self::BookNotCheckedOut { .. } => "BookNotCheckedOut",
            Self::DuplicateBook { .. } => "DuplicateBook",
            Self::DuplicatePatron { .. } => "DuplicatePatron",
        }
    }
}

/// Malformed console input. Raised and handled at the console boundary only;
/// it never reaches the lending service or its error log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Blank line
    #[error("Invalid input. Please enter a command (try `help`).")]
    Empty,
    /// First word is not a known command
    #[error("Invalid choice `{0}`. Please try again.")]
    UnknownCommand(String),
    /// Wrong number of arguments for a command
    #[error("Usage: {usage}")]
    Usage {
        /// Expected form of the command
        usage: &'static str,
    },
    /// A numeric argument did not parse
    #[error("Invalid {field} `{value}`: expected a non-negative number")]
    InvalidNumber {
        /// Which argument was being parsed
        field: &'static str,
        /// The raw text
        value: String,
    },
    /// Genre menu index outside 0..=4
    #[error("Invalid genre choice {0}. Book not added.")]
    GenreIndex(usize),
    /// Genre given by a name that is not in the enumeration
    #[error("Unknown genre `{0}`. Book not added.")]
    UnknownGenre(String),
    /// Unbalanced quotes or a dangling escape
    #[error("Invalid quoting in input: {0}")]
    Quoting(String),
}

/// Failure while loading seed configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that was opened
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// The file is not valid seed JSON
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
