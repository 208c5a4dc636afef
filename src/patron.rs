use serde::{Deserialize, Serialize};

/// A registered library user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Patron {
    /// Display name
    user_name: String,
    /// Registry key printed on the library card
    card_number: String,
    /// Outstanding fees in whole currency units
    #[serde(default)]
    owed_fees: u32,
}

impl Patron {
    /// Register details for a new patron
    #[must_use]
    pub fn new(
        user_name: impl Into<String>,
        card_number: impl Into<String>,
        owed_fees: u32,
    ) -> Self {
        Self { user_name: user_name.into(), card_number: card_number.into(), owed_fees }
    }

    /// Get the display name
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Get the card number, the registry key
    #[must_use]
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// Get the outstanding balance
    #[must_use]
    pub const fn owed_fees(&self) -> u32 {
        self.owed_fees
    }

    /// Whether the patron is barred from borrowing
    #[must_use]
    pub const fn owes_fees(&self) -> bool {
        self.owed_fees > 0
    }

    /// Replace the outstanding balance
    pub(crate) fn set_fees(&mut self, fees: u32) {
        self.owed_fees = fees;
    }
}
