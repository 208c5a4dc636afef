use std::collections::HashMap;

use crate::{book::Book, error::LendingError};

/// The library's books, keyed by ISBN and kept in insertion order
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    /// Books in the order they were added
    books: Vec<Book>,
    /// ISBN to position in `books`
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book to the catalog
    ///
    /// # Errors
    ///
    /// Returns `LendingError::DuplicateBook` if the ISBN is already
    /// catalogued; the existing record is left untouched.
    pub fn add(&mut self, book: Book) -> Result<(), LendingError> {
        if self.index.contains_key(book.isbn()) {
            return Err(LendingError::DuplicateBook { isbn: book.isbn().to_string() });
        }
        self.index.insert(book.isbn().to_string(), self.books.len());
        self.books.push(book);
        Ok(())
    }

    /// Get the book with an ISBN
    #[must_use]
    pub fn find(&self, isbn: &str) -> Option<&Book> {
        self.index.get(isbn).and_then(|&pos| self.books.get(pos))
    }

    /// Mutable handle on a catalogued book
    pub fn find_mut(&mut self, isbn: &str) -> Option<&mut Book> {
        let pos = *self.index.get(isbn)?;
        self.books.get_mut(pos)
    }

    /// All books in insertion order
    #[must_use]
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// Get the number of catalogued books
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check whether the catalog holds no books
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
