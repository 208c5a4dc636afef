use serde::{Deserialize, Serialize};

use crate::error::LendingError;

/// Outcomes published by the lending service to its observers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum LendingEvent {
    /// A book was added to the catalog
    BookAdded {
        /// ISBN of the new book
        isbn: String,
    },
    /// A patron was registered
    PatronRegistered {
        /// Card number of the new patron
        card_number: String,
    },
    /// A patron's balance was changed
    FeesSet {
        /// Card number of the patron
        card_number: String,
        /// New balance
        owed_fees: u32,
    },
    /// A book was lent to a patron
    CheckedOut {
        /// ISBN of the book
        isbn: String,
        /// Card number of the borrower
        card_number: String,
        /// Date of the checkout
        date: String,
    },
    /// A book was returned
    CheckedIn {
        /// ISBN of the book
        isbn: String,
        /// Card number of the patron returning it
        card_number: String,
        /// Date of the return
        date: String,
    },
    /// An operation was refused and logged
    Rejected(LendingError),
}
