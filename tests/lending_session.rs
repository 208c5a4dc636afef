//! Drives the library through console commands the way the binary does.

use library_lending::{
    Command, InputError, LendingError, LendingService, LibraryConfig, Outcome, Report,
};

/// Parse and run one line against the service
fn run(service: &mut LendingService, line: &str) -> Result<Outcome, InputError> {
    Command::parse(line).map(|command| command.execute(service, "Test Library", "2024-11-27"))
}

#[test]
fn scripted_session_matches_expected_history() {
    let mut service = LendingService::new();
    let script = [
        r#"add-book 123 "C++ Programming" "Bjarne Stroustrup" 2013 Nonfiction"#,
        r#"add-book 456 "Harry Potter" "J.K. Rowling" 1997 0"#,
        "add-patron Alice P001",
        "add-patron Bob P002 10",
        "checkout 123 P001 2024-11-27",
        "checkout 123 P002 2024-11-27",
        "checkout 999 P001",
        "checkout 123 P001",
    ];
    for line in script {
        assert!(run(&mut service, line).is_ok(), "line should parse: {line}");
    }

    assert_eq!(
        service.list_transactions(),
        ["Transaction: Check Out | Book: C++ Programming (123) | \
          Patron: Alice (P001) | Date: 2024-11-27"]
    );
    assert_eq!(
        service.list_errors(),
        [
            "Error: Patron owes fees.",
            "Error: Book with ISBN 999 not found.",
            "Error: Book is already checked out.",
        ]
    );
    assert_eq!(service.list_patrons_owing_fees(), ["Bob"]);
}

#[test]
fn owing_listing_reflects_fee_updates() {
    let mut service = LendingService::from_config(&LibraryConfig::default());

    assert!(run(&mut service, "fees P001 4").is_ok());
    let outcome = run(&mut service, "owing");
    assert_eq!(
        outcome,
        Ok(Outcome::Listing {
            heading: "Patrons who owe fees:",
            items: vec!["Alice".to_string(), "Bob".to_string()],
            empty: "No patrons owe fees.",
        })
    );

    let outcome = run(&mut service, "checkout 456 P001");
    assert_eq!(
        outcome,
        Ok(Outcome::Refused(LendingError::PatronOwesFees {
            card_number: "P001".to_string(),
            owed_fees: 4,
        }))
    );
}

#[test]
fn return_then_lend_again() {
    let mut service = LendingService::from_config(&LibraryConfig::default());

    assert_eq!(
        run(&mut service, "checkin 123 P001 2024-12-01"),
        Ok(Outcome::Accepted("Book checked in.".to_string()))
    );
    assert_eq!(
        run(&mut service, "checkout 123 P001 2024-12-02"),
        Ok(Outcome::Accepted("Book checked out.".to_string()))
    );

    let report = Report::capture("Test Library", &service);
    assert_eq!(report.transactions.len(), 4);
    assert!(report.errors.is_empty());
}
