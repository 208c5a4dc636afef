use std::fmt;

use crate::{
    book::Book,
    catalog::Catalog,
    config::LibraryConfig,
    error::LendingError,
    error_log::{ErrorEntry, ErrorLog},
    events::LendingEvent,
    observers::LendingObserver,
    patron::Patron,
    registry::PatronRegistry,
    transaction::{Activity, Transaction, TransactionLog},
};

/// Lending desk: owns the catalog, the patron registry and both logs, and
/// is the only place a book's checked-out flag changes.
///
/// Every refused operation is appended to the error log exactly once and
/// leaves every store otherwise untouched.
pub struct LendingService {
    /// Books held by the library
    catalog: Catalog,
    /// Registered patrons
    patrons: PatronRegistry,
    /// Completed checkouts and returns
    transactions: TransactionLog,
    /// Refused operations
    errors: ErrorLog,
    /// Registered lending observers
    observers: Vec<Box<dyn LendingObserver>>,
}

// Manual implementation of Debug for LendingService
impl fmt::Debug for LendingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LendingService")
            .field("catalog", &self.catalog)
            .field("patrons", &self.patrons)
            .field("transactions", &self.transactions)
            .field("errors", &self.errors)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Default for LendingService {
    fn default() -> Self {
        Self::new()
    }
}

impl LendingService {
    /// Create an empty library
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            patrons: PatronRegistry::new(),
            transactions: TransactionLog::new(),
            errors: ErrorLog::new(),
            observers: Vec::new(),
        }
    }

    /// Create a library loaded with the given seed data
    #[must_use]
    pub fn from_config(config: &LibraryConfig) -> Self {
        let mut service = Self::new();
        service.seed(config);
        service
    }

    /// Load books, patrons and replayed checkouts.
    ///
    /// Seed entries go through the normal operations, so duplicates and
    /// refused checkouts land in the error log like any other attempt.
    pub fn seed(&mut self, config: &LibraryConfig) {
        tracing::debug!(
            name = %config.name,
            books = config.books.len(),
            patrons = config.patrons.len(),
            checkouts = config.checkouts.len(),
            "seeding library"
        );
        for book in &config.books {
            drop(self.add_book(Book::from(book.clone())));
        }
        for patron in &config.patrons {
            drop(self.add_patron(patron.clone()));
        }
        for request in &config.checkouts {
            drop(self.check_out(&request.isbn, &request.card_number, &request.date));
        }
    }

    /// Register an observer to be notified of lending activity
    pub fn register_observer(&mut self, observer: Box<dyn LendingObserver>) {
        self.observers.push(observer);
    }

    /// Add a book to the catalog
    ///
    /// # Errors
    ///
    /// Returns `LendingError::DuplicateBook` (and logs it) if the ISBN is
    /// already catalogued.
    pub fn add_book(&mut self, book: Book) -> Result<(), LendingError> {
        let isbn = book.isbn().to_string();
        match self.catalog.add(book) {
            Ok(()) => {
                self.notify(&LendingEvent::BookAdded { isbn });
                Ok(())
            }
            Err(error) => Err(self.reject(error)),
        }
    }

    /// Register a patron
    ///
    /// # Errors
    ///
    /// Returns `LendingError::DuplicatePatron` (and logs it) if the card
    /// number is taken.
    pub fn add_patron(&mut self, patron: Patron) -> Result<(), LendingError> {
        let card_number = patron.card_number().to_string();
        match self.patrons.add(patron) {
            Ok(()) => {
                self.notify(&LendingEvent::PatronRegistered { card_number });
                Ok(())
            }
            Err(error) => Err(self.reject(error)),
        }
    }

    /// Replace a patron's outstanding balance
    ///
    /// # Errors
    ///
    /// Returns `LendingError::PatronNotFound` (and logs it) for an unknown
    /// card number.
    pub fn set_patron_fees(
        &mut self,
        card_number: &str,
        owed_fees: u32,
    ) -> Result<(), LendingError> {
        let Some(patron) = self.patrons.find_mut(card_number) else {
            return Err(
                self.reject(LendingError::PatronNotFound { card_number: card_number.to_string() })
            );
        };
        patron.set_fees(owed_fees);
        self.notify(&LendingEvent::FeesSet { card_number: card_number.to_string(), owed_fees });
        Ok(())
    }

    /// Lend a book to a patron.
    ///
    /// Checks run in order and stop at the first failure: the book must
    /// exist, the patron must exist, the patron must owe nothing, and the
    /// book must be on the shelf. On success the book is flagged as checked
    /// out and a `Check Out` snapshot is appended to the transaction log.
    ///
    /// # Errors
    ///
    /// Returns `BookNotFound`, `PatronNotFound`, `PatronOwesFees` or
    /// `BookAlreadyCheckedOut`; the same error is appended to the error log.
    pub fn check_out(
        &mut self,
        isbn: &str,
        card_number: &str,
        date: &str,
    ) -> Result<(), LendingError> {
        match self.try_check_out(isbn, card_number, date) {
            Ok(transaction) => {
                self.transactions.append(transaction);
                self.notify(&LendingEvent::CheckedOut {
                    isbn: isbn.to_string(),
                    card_number: card_number.to_string(),
                    date: date.to_string(),
                });
                Ok(())
            }
            Err(error) => Err(self.reject(error)),
        }
    }

    /// Validate a checkout and, only once every check has passed, flip the flag
    fn try_check_out(
        &mut self,
        isbn: &str,
        card_number: &str,
        date: &str,
    ) -> Result<Transaction, LendingError> {
        let book = self
            .catalog
            .find_mut(isbn)
            .ok_or_else(|| LendingError::BookNotFound { isbn: isbn.to_string() })?;
        let patron = self
            .patrons
            .find(card_number)
            .ok_or_else(|| LendingError::PatronNotFound { card_number: card_number.to_string() })?;

        if patron.owes_fees() {
            return Err(LendingError::PatronOwesFees {
                card_number: card_number.to_string(),
                owed_fees: patron.owed_fees(),
            });
        }
        if book.is_checked_out() {
            return Err(LendingError::BookAlreadyCheckedOut { isbn: isbn.to_string() });
        }

        book.check_out();
        Ok(Transaction::new(book.clone(), patron.clone(), Activity::CheckOut, date))
    }

    /// Take a book back from a patron.
    ///
    /// Outstanding fees do not block a return.
    ///
    /// # Errors
    ///
    /// Returns `BookNotFound`, `PatronNotFound` or `BookNotCheckedOut`; the
    /// same error is appended to the error log.
    pub fn check_in(
        &mut self,
        isbn: &str,
        card_number: &str,
        date: &str,
    ) -> Result<(), LendingError> {
        match self.try_check_in(isbn, card_number, date) {
            Ok(transaction) => {
                self.transactions.append(transaction);
                self.notify(&LendingEvent::CheckedIn {
                    isbn: isbn.to_string(),
                    card_number: card_number.to_string(),
                    date: date.to_string(),
                });
                Ok(())
            }
            Err(error) => Err(self.reject(error)),
        }
    }

    /// Validate a return and clear the flag
    fn try_check_in(
        &mut self,
        isbn: &str,
        card_number: &str,
        date: &str,
    ) -> Result<Transaction, LendingError> {
        let book = self
            .catalog
            .find_mut(isbn)
            .ok_or_else(|| LendingError::BookNotFound { isbn: isbn.to_string() })?;
        let patron = self
            .patrons
            .find(card_number)
            .ok_or_else(|| LendingError::PatronNotFound { card_number: card_number.to_string() })?;

        if !book.is_checked_out() {
            return Err(LendingError::BookNotCheckedOut { isbn: isbn.to_string() });
        }

        book.check_in();
        Ok(Transaction::new(book.clone(), patron.clone(), Activity::CheckIn, date))
    }

    /// Log a refusal, tell the observers, and hand the error back
    fn reject(&mut self, error: LendingError) -> LendingError {
        tracing::debug!(kind = error.kind(), "operation rejected");
        self.errors.append(ErrorEntry::new(error.clone()));
        self.notify(&LendingEvent::Rejected(error.clone()));
        error
    }

    /// Deliver an event to every observer
    fn notify(&self, event: &LendingEvent) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }

    /// All books in insertion order
    #[must_use]
    pub fn list_books(&self) -> &[Book] {
        self.catalog.list()
    }

    /// Usernames of patrons with a positive balance
    #[must_use]
    pub fn list_patrons_owing_fees(&self) -> Vec<&str> {
        self.patrons.list_owing_fees()
    }

    /// Transaction descriptions in the order they happened
    #[must_use]
    pub fn list_transactions(&self) -> Vec<String> {
        self.transactions.descriptions()
    }

    /// Error messages in the order they happened
    #[must_use]
    pub fn list_errors(&self) -> Vec<String> {
        self.errors.messages()
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn patrons(&self) -> &PatronRegistry {
        &self.patrons
    }

    #[must_use]
    pub const fn transactions(&self) -> &TransactionLog {
        &self.transactions
    }

    #[must_use]
    pub const fn errors(&self) -> &ErrorLog {
        &self.errors
    }
}

// Include tests module
#[cfg(test)]
mod tests;
