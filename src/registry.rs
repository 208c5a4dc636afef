use std::collections::HashMap;

use crate::{error::LendingError, patron::Patron};

/// Registered patrons, keyed by card number and kept in insertion order
#[derive(Debug, Default, Clone)]
pub struct PatronRegistry {
    /// Patrons in registration order
    patrons: Vec<Patron>,
    /// Card number to position in `patrons`
    index: HashMap<String, usize>,
}

impl PatronRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a patron
    ///
    /// # Errors
    ///
    /// Returns `LendingError::DuplicatePatron` if the card number is taken.
    pub fn add(&mut self, patron: Patron) -> Result<(), LendingError> {
        if self.index.contains_key(patron.card_number()) {
            return Err(LendingError::DuplicatePatron {
                card_number: patron.card_number().to_string(),
            });
        }
        self.index.insert(patron.card_number().to_string(), self.patrons.len());
        self.patrons.push(patron);
        Ok(())
    }

    /// Get the patron holding a card number
    #[must_use]
    pub fn find(&self, card_number: &str) -> Option<&Patron> {
        self.index.get(card_number).and_then(|&pos| self.patrons.get(pos))
    }

    /// Get a mutable handle on a registered patron
    pub fn find_mut(&mut self, card_number: &str) -> Option<&mut Patron> {
        let pos = *self.index.get(card_number)?;
        self.patrons.get_mut(pos)
    }

    /// Usernames of every patron with a positive balance, in registration order
    #[must_use]
    pub fn list_owing_fees(&self) -> Vec<&str> {
        self.patrons.iter().filter(|p| p.owes_fees()).map(Patron::user_name).collect()
    }

    /// Get all patrons in registration order
    #[must_use]
    pub fn list(&self) -> &[Patron] {
        &self.patrons
    }

    /// Get the number of registered patrons
    #[must_use]
    pub fn len(&self) -> usize {
        self.patrons.len()
    }

    /// Check whether no patron is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patrons.is_empty()
    }
}
