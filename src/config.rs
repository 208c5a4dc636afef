use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    book::{Book, Genre},
    error::ConfigError,
    patron::Patron,
};

/// A book to catalogue while seeding. Seeded books always start on the
/// shelf; a checked-out flag can only come from a replayed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BookSeed {
    /// Catalog key
    pub isbn: String,
    /// Title as printed
    pub title: String,
    /// Author as printed
    pub author: String,
    /// Year of publication
    pub year: i32,
    /// Shelving genre
    pub genre: Genre,
}

impl BookSeed {
    /// Create seed details for one book
    #[must_use]
    pub fn new(isbn: &str, title: &str, author: &str, year: i32, genre: Genre) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            year,
            genre,
        }
    }
}

impl From<BookSeed> for Book {
    fn from(seed: BookSeed) -> Self {
        Self::new(seed.isbn, seed.title, seed.author, seed.year, seed.genre)
    }
}

/// A checkout to replay while seeding the library
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CheckoutRequest {
    /// ISBN of the book to lend
    pub isbn: String,
    /// Card number of the borrower
    pub card_number: String,
    /// Date recorded on the transaction
    pub date: String,
}

/// Seed data for a library session.
///
/// Loaded from JSON. Every list is optional, so `{}` is an empty library:
///
/// ```json
/// {
///   "name": "Branch 2",
///   "books": [{ "isbn": "123", "title": "C++ Programming",
///               "author": "Bjarne Stroustrup", "year": 2013, "genre": "Nonfiction" }],
///   "patrons": [{ "user_name": "Alice", "card_number": "P001", "owed_fees": 0 }],
///   "checkouts": [{ "isbn": "123", "card_number": "P001", "date": "2024-11-27" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LibraryConfig {
    /// Name shown in reports
    #[serde(default = "default_name")]
    pub name: String,
    /// Books to catalogue, in order
    #[serde(default)]
    pub books: Vec<BookSeed>,
    /// Patrons to register, in order
    #[serde(default)]
    pub patrons: Vec<Patron>,
    /// Checkouts replayed after books and patrons are loaded
    #[serde(default)]
    pub checkouts: Vec<CheckoutRequest>,
}

/// Name used when the config does not give one
fn default_name() -> String {
    "Library".to_string()
}

impl LibraryConfig {
    /// A library with no books, patrons or history
    #[must_use]
    pub fn empty() -> Self {
        Self {
            name: default_name(),
            books: Vec::new(),
            patrons: Vec::new(),
            checkouts: Vec::new(),
        }
    }

    /// Parse seed data from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the text is not valid seed JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read seed data from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read and
    /// `ConfigError::Parse` if its contents are not valid seed JSON.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_json_str(&contents)
    }
}

/// The demonstration library: three books, two patrons, two checkouts
impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            books: vec![
                BookSeed::new(
                    "123",
                    "C++ Programming",
                    "Bjarne Stroustrup",
                    2013,
                    Genre::Nonfiction,
                ),
                BookSeed::new("124", "Python", "Bjarne Stroustrup", 2013, Genre::Nonfiction),
                BookSeed::new("456", "Harry Potter", "J.K. Rowling", 1997, Genre::Fiction),
            ],
            patrons: vec![Patron::new("Alice", "P001", 0), Patron::new("Bob", "P002", 10)],
            checkouts: vec![
                CheckoutRequest {
                    isbn: "123".to_string(),
                    card_number: "P001".to_string(),
                    date: "2024-11-27".to_string(),
                },
                CheckoutRequest {
                    isbn: "124".to_string(),
                    card_number: "P001".to_string(),
                    date: "2024-11-27".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_an_empty_library() {
        let config = LibraryConfig::from_json_str("{}");
        assert!(matches!(config, Ok(ref c) if *c == LibraryConfig::empty()));
    }

    #[test]
    #[allow(clippy::unreachable)]
    fn parses_books_patrons_and_checkouts() {
        let json = r#"{
            "name": "Branch 2",
            "books": [{
                "isbn": "9", "title": "Dune", "author": "Frank Herbert",
                "year": 1965, "genre": "Fiction"
            }],
            "patrons": [{"user_name": "Carol", "card_number": "P009"}],
            "checkouts": [{"isbn": "9", "card_number": "P009", "date": "2025-01-02"}]
        }"#;

        let Ok(config) = LibraryConfig::from_json_str(json) else {
            unreachable!("seed JSON should parse");
        };
        assert_eq!(config.name, "Branch 2");
        assert_eq!(config.books.first().map(|book| book.title.as_str()), Some("Dune"));
        assert_eq!(config.patrons.first().map(Patron::owed_fees), Some(0));
        assert_eq!(config.checkouts.len(), 1);
    }

    #[test]
    fn unknown_genre_is_a_parse_error() {
        let json = r#"{"books": [
            {"isbn": "9", "title": "T", "author": "A", "year": 1, "genre": "Poetry"}
        ]}"#;
        assert!(matches!(LibraryConfig::from_json_str(json), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn seeded_books_start_on_the_shelf() {
        let json = r#"{"books": [
            {"isbn": "1", "title": "T", "author": "A", "year": 2000, "genre": "Children",
             "checked_out": true}
        ]}"#;

        let books: Vec<Book> = LibraryConfig::from_json_str(json)
            .map(|config| config.books.into_iter().map(Book::from).collect())
            .unwrap_or_default();
        assert_eq!(books.len(), 1);
        assert!(books.iter().all(|book| !book.is_checked_out()));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = LibraryConfig::from_path(Path::new("/nonexistent/library-seed.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
