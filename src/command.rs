//! Console commands.
//!
//! A thin adapter between a line-oriented console and [`LendingService`]:
//! lines are tokenized with shell-style quoting, validated into a
//! [`Command`], and executed into an [`Outcome`] for the caller to render.
//! Malformed input stops here as an [`InputError`].

use crate::{
    book::{Book, Genre},
    error::{InputError, LendingError},
    patron::Patron,
    report::Report,
    service::LendingService,
};

/// Usage text printed by `help`
pub const HELP: &str = "\
Commands:
  books                                          list all books
  owing                                          list patrons who owe fees
  transactions                                   list all transactions
  errors                                         list all errors in transactions
  add-book <isbn> <title> <author> <year> <genre>  add a new book (genre 0-4 or name)
  add-patron <name> <card> [fees]                add a new patron
  fees <card> <amount>                           set a patron's owed fees
  checkout <isbn> <card> [date]                  check a book out
  checkin <isbn> <card> [date]                   check a book in
  report                                         print everything
  help                                           show this text
  exit                                           leave";

/// A validated console request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Books,
    Owing,
    Transactions,
    Errors,
    Report,
    AddBook(Book),
    AddPatron(Patron),
    SetFees { card_number: String, owed_fees: u32 },
    CheckOut { isbn: String, card_number: String, date: Option<String> },
    CheckIn { isbn: String, card_number: String, date: Option<String> },
    Help,
    Exit,
}

/// What the console should show after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A titled list, with a fallback line when there is nothing to show
    Listing { heading: &'static str, items: Vec<String>, empty: &'static str },
    /// The operation succeeded
    Accepted(String),
    /// The service refused the operation
    Refused(LendingError),
    /// Free-form text (help, reports)
    Text(String),
    /// The session should end
    Exit,
}

impl Command {
    /// Parse one console line
    ///
    /// # Errors
    ///
    /// Returns an `InputError` for blank lines, bad quoting, unknown
    /// commands, wrong argument counts, and unparsable numbers or genres.
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let tokens = shell_words::split(line).map_err(|e| InputError::Quoting(e.to_string()))?;
        let Some((name, args)) = tokens.split_first() else {
            return Err(InputError::Empty);
        };

        match (name.to_ascii_lowercase().as_str(), args) {
            ("books" | "1", []) => Ok(Self::Books),
            ("owing" | "2", []) => Ok(Self::Owing),
            ("transactions" | "3", []) => Ok(Self::Transactions),
            ("errors" | "4", []) => Ok(Self::Errors),
            ("add-book" | "5", [isbn, title, author, year, genre]) => {
                let year = year.parse::<i32>().map_err(|_| InputError::InvalidNumber {
                    field: "year",
                    value: year.clone(),
                })?;
                let genre = genre.parse::<Genre>()?;
                Ok(Self::AddBook(Book::new(
                    isbn.as_str(),
                    title.as_str(),
                    author.as_str(),
                    year,
                    genre,
                )))
            }
            ("add-book" | "5", _) => {
                Err(InputError::Usage { usage: "add-book <isbn> <title> <author> <year> <genre>" })
            }
            ("add-patron" | "6", [user_name, card_number]) => {
                Ok(Self::AddPatron(Patron::new(user_name.as_str(), card_number.as_str(), 0)))
            }
            ("add-patron" | "6", [user_name, card_number, fees]) => {
                let fees = parse_fees(fees)?;
                Ok(Self::AddPatron(Patron::new(user_name.as_str(), card_number.as_str(), fees)))
            }
            ("add-patron" | "6", _) => {
                Err(InputError::Usage { usage: "add-patron <name> <card> [fees]" })
            }
            ("checkout" | "7", [isbn, card_number]) => Ok(Self::CheckOut {
                isbn: isbn.clone(),
                card_number: card_number.clone(),
                date: None,
            }),
            ("checkout" | "7", [isbn, card_number, date]) => Ok(Self::CheckOut {
                isbn: isbn.clone(),
                card_number: card_number.clone(),
                date: Some(date.clone()),
            }),
            ("checkout" | "7", _) => {
                Err(InputError::Usage { usage: "checkout <isbn> <card> [date]" })
            }
            ("checkin", [isbn, card_number]) => Ok(Self::CheckIn {
                isbn: isbn.clone(),
                card_number: card_number.clone(),
                date: None,
            }),
            ("checkin", [isbn, card_number, date]) => Ok(Self::CheckIn {
                isbn: isbn.clone(),
                card_number: card_number.clone(),
                date: Some(date.clone()),
            }),
            ("checkin", _) => Err(InputError::Usage { usage: "checkin <isbn> <card> [date]" }),
            ("fees", [card_number, amount]) => {
                let owed_fees = parse_fees(amount)?;
                Ok(Self::SetFees { card_number: card_number.clone(), owed_fees })
            }
            ("fees", _) => Err(InputError::Usage { usage: "fees <card> <amount>" }),
            ("report", []) => Ok(Self::Report),
            ("help" | "?", _) => Ok(Self::Help),
            ("exit" | "quit" | "8", []) => Ok(Self::Exit),
            (other, _) => Err(InputError::UnknownCommand(other.to_string())),
        }
    }

    /// Run the command against `service`.
    ///
    /// `today` is used for checkouts and returns that did not name a date.
    pub fn execute(self, service: &mut LendingService, library: &str, today: &str) -> Outcome {
        match self {
            Self::Books => Outcome::Listing {
                heading: "Books in Library:",
                items: service.list_books().iter().map(ToString::to_string).collect(),
                empty: "No books in the catalog.",
            },
            Self::Owing => Outcome::Listing {
                heading: "Patrons who owe fees:",
                items: service.list_patrons_owing_fees().into_iter().map(str::to_string).collect(),
                empty: "No patrons owe fees.",
            },
            Self::Transactions => Outcome::Listing {
                heading: "List of Transactions:",
                items: service.list_transactions(),
                empty: "No transactions recorded.",
            },
            Self::Errors => Outcome::Listing {
                heading: "Failed Transactions (Errors):",
                items: service.list_errors(),
                empty: "No errors recorded.",
            },
            Self::Report => Outcome::Text(Report::capture(library, service).to_string()),
            Self::AddBook(book) => {
                settle(service.add_book(book), "Book added successfully!")
            }
            Self::AddPatron(patron) => {
                settle(service.add_patron(patron), "Patron added successfully!")
            }
            Self::SetFees { card_number, owed_fees } => {
                settle(service.set_patron_fees(&card_number, owed_fees), "Fees updated.")
            }
            Self::CheckOut { isbn, card_number, date } => {
                let date = date.as_deref().unwrap_or(today);
                settle(service.check_out(&isbn, &card_number, date), "Book checked out.")
            }
            Self::CheckIn { isbn, card_number, date } => {
                let date = date.as_deref().unwrap_or(today);
                settle(service.check_in(&isbn, &card_number, date), "Book checked in.")
            }
            Self::Help => Outcome::Text(HELP.to_string()),
            Self::Exit => Outcome::Exit,
        }
    }
}

/// Parse a fee amount argument
fn parse_fees(raw: &str) -> Result<u32, InputError> {
    raw.parse::<u32>()
        .map_err(|_| InputError::InvalidNumber { field: "fees", value: raw.to_string() })
}

/// Turn a service result into an outcome
fn settle(result: Result<(), LendingError>, message: &str) -> Outcome {
    match result {
        Ok(()) => Outcome::Accepted(message.to_string()),
        Err(error) => Outcome::Refused(error),
    }
}
