use std::{cell::RefCell, rc::Rc};

use crate::{
    book::{Book, Genre},
    error::LendingError,
    events::LendingEvent,
    observers::LendingObserver,
    patron::Patron,
    service::LendingService,
    transaction::{Activity, Transaction},
};

/// Helper function to set up a library with two books and two patrons
fn setup_test_service() -> LendingService {
    let mut service = LendingService::new();
    drop(service.add_book(Book::new(
        "123",
        "C++ Programming",
        "Bjarne Stroustrup",
        2013,
        Genre::Nonfiction,
    )));
    drop(service.add_book(Book::new("456", "Harry Potter", "J.K. Rowling", 1997, Genre::Fiction)));
    drop(service.add_patron(Patron::new("Alice", "P001", 0)));
    drop(service.add_patron(Patron::new("Bob", "P002", 10)));
    service
}

/// Observer that remembers everything it was told
#[derive(Debug, Default)]
struct RecordingObserver {
    /// Events seen so far
    events: Rc<RefCell<Vec<LendingEvent>>>,
}

impl LendingObserver for RecordingObserver {
    fn on_event(&self, event: &LendingEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Checked-out flag of a catalogued book
fn is_checked_out(service: &LendingService, isbn: &str) -> Option<bool> {
    service.catalog().find(isbn).map(Book::is_checked_out)
}

#[test]
fn test_successful_checkout() {
    let mut service = setup_test_service();

    let result = service.check_out("123", "P001", "2024-11-27");
    assert_eq!(result, Ok(()));

    let transactions = service.list_transactions();
    assert_eq!(transactions.len(), 1);
    assert!(transactions.iter().all(|t| t.contains("123") && t.contains("P001")));
    assert_eq!(is_checked_out(&service, "123"), Some(true));
    assert!(service.list_errors().is_empty());
}

#[test]
fn test_patron_owing_fees_is_refused() {
    let mut service = setup_test_service();

    let result = service.check_out("123", "P002", "2024-11-27");
    assert_eq!(
        result,
        Err(LendingError::PatronOwesFees { card_number: "P002".to_string(), owed_fees: 10 })
    );
    assert_eq!(service.list_errors(), ["Error: Patron owes fees."]);
    assert!(service.transactions().is_empty());
    assert_eq!(is_checked_out(&service, "123"), Some(false));
}

#[test]
fn test_unknown_book_is_refused() {
    let mut service = setup_test_service();

    let result = service.check_out("999", "P001", "2024-11-27");
    assert_eq!(result, Err(LendingError::BookNotFound { isbn: "999".to_string() }));
    assert_eq!(service.list_errors(), ["Error: Book with ISBN 999 not found."]);
}

#[test]
fn test_unknown_patron_is_refused() {
    let mut service = setup_test_service();

    let result = service.check_out("123", "P404", "2024-11-27");
    assert_eq!(result, Err(LendingError::PatronNotFound { card_number: "P404".to_string() }));
    assert_eq!(service.list_errors(), ["Error: Patron with card number P404 not found."]);
    assert_eq!(is_checked_out(&service, "123"), Some(false));
}

#[test]
fn test_second_checkout_is_refused_every_time() {
    let mut service = setup_test_service();
    assert!(service.check_out("123", "P001", "2024-11-27").is_ok());

    for _ in 0..2 {
        let result = service.check_out("123", "P001", "2024-11-28");
        assert_eq!(result, Err(LendingError::BookAlreadyCheckedOut { isbn: "123".to_string() }));
    }

    assert_eq!(service.transactions().len(), 1);
    assert_eq!(
        service.list_errors(),
        ["Error: Book is already checked out.", "Error: Book is already checked out."]
    );
}

#[test]
fn test_checks_run_in_order() {
    let mut service = setup_test_service();
    assert!(service.check_out("123", "P001", "2024-11-27").is_ok());

    // Unknown book wins over unknown patron
    let result = service.check_out("999", "P404", "2024-11-27");
    assert!(matches!(result, Err(LendingError::BookNotFound { .. })));

    // Fees are checked before availability
    let result = service.check_out("123", "P002", "2024-11-27");
    assert!(matches!(result, Err(LendingError::PatronOwesFees { .. })));

    assert_eq!(service.errors().len(), 2);
}

#[test]
#[allow(clippy::unreachable)]
fn test_transaction_is_a_snapshot() {
    let mut service = setup_test_service();
    assert!(service.check_out("123", "P001", "2024-11-27").is_ok());
    assert!(service.set_patron_fees("P001", 25).is_ok());
    assert!(service.check_in("123", "P001", "2024-12-01").is_ok());

    let first = service.transactions().list().first().cloned();
    let Some(first) = first else {
        unreachable!("checkout should have been recorded");
    };
    assert_eq!(first.activity(), Activity::CheckOut);
    assert_eq!(first.patron().owed_fees(), 0);
    assert!(first.book().is_checked_out());
    assert_eq!(is_checked_out(&service, "123"), Some(false));
}

#[test]
fn test_check_in_returns_book_to_shelf() {
    let mut service = setup_test_service();
    assert!(service.check_out("456", "P001", "2024-11-27").is_ok());

    assert!(service.check_in("456", "P001", "2024-12-01").is_ok());
    assert_eq!(is_checked_out(&service, "456"), Some(false));
    assert_eq!(service.transactions().last().map(Transaction::activity), Some(Activity::CheckIn));

    // The book can go out again
    assert!(service.check_out("456", "P001", "2024-12-02").is_ok());
    assert_eq!(service.transactions().len(), 3);
}

#[test]
fn test_check_in_of_shelved_book_is_refused() {
    let mut service = setup_test_service();

    let result = service.check_in("456", "P002", "2024-12-01");
    assert_eq!(result, Err(LendingError::BookNotCheckedOut { isbn: "456".to_string() }));
    assert_eq!(service.list_errors(), ["Error: Book is not checked out."]);
    assert!(service.transactions().is_empty());
}

#[test]
fn test_duplicates_are_rejected_and_logged() {
    let mut service = setup_test_service();

    let book = service.add_book(Book::new("123", "Other", "Someone", 2000, Genre::Children));
    let patron = service.add_patron(Patron::new("Mallory", "P001", 0));

    assert_eq!(book, Err(LendingError::DuplicateBook { isbn: "123".to_string() }));
    assert_eq!(patron, Err(LendingError::DuplicatePatron { card_number: "P001".to_string() }));
    assert_eq!(service.errors().len(), 2);
    assert_eq!(service.list_books().len(), 2);
    assert_eq!(service.catalog().find("123").map(Book::title), Some("C++ Programming"));
}

#[test]
fn test_fee_changes_affect_eligibility() {
    let mut service = setup_test_service();
    assert_eq!(service.list_patrons_owing_fees(), ["Bob"]);

    assert!(service.set_patron_fees("P002", 0).is_ok());
    assert!(service.check_out("123", "P002", "2024-11-27").is_ok());
    assert!(service.list_patrons_owing_fees().is_empty());

    let result = service.set_patron_fees("P404", 5);
    assert_eq!(result, Err(LendingError::PatronNotFound { card_number: "P404".to_string() }));
    assert_eq!(service.errors().len(), 1);
}

#[test]
fn test_observers_see_every_outcome() {
    let mut service = setup_test_service();
    let events = Rc::new(RefCell::new(Vec::new()));
    service.register_observer(Box::new(RecordingObserver { events: Rc::clone(&events) }));

    drop(service.check_out("123", "P001", "2024-11-27"));
    drop(service.check_out("123", "P001", "2024-11-27"));

    assert_eq!(
        *events.borrow(),
        [
            LendingEvent::CheckedOut {
                isbn: "123".to_string(),
                card_number: "P001".to_string(),
                date: "2024-11-27".to_string(),
            },
            LendingEvent::Rejected(LendingError::BookAlreadyCheckedOut { isbn: "123".to_string() }),
        ]
    );
}

#[test]
fn test_seeding_replays_sample_checkouts() {
    let service = LendingService::from_config(&crate::config::LibraryConfig::default());

    assert_eq!(service.list_books().len(), 3);
    assert_eq!(service.transactions().len(), 2);
    assert_eq!(is_checked_out(&service, "123"), Some(true));
    assert_eq!(is_checked_out(&service, "124"), Some(true));
    assert_eq!(is_checked_out(&service, "456"), Some(false));
    assert_eq!(service.list_patrons_owing_fees(), ["Bob"]);
    assert!(service.errors().is_empty());
}
