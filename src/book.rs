use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// The fixed set of shelving genres
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Genre {
    /// Novels and stories
    #[default]
    Fiction,
    /// Factual works
    Nonfiction,
    /// Magazines and journals
    Periodical,
    /// Life stories
    Biography,
    /// Children's books
    Children,
}

impl Genre {
    /// All genres in menu order
    pub const ALL: [Self; 5] =
        [Self::Fiction, Self::Nonfiction, Self::Periodical, Self::Biography, Self::Children];

    /// Select a genre by its menu index (0 = Fiction .. 4 = Children)
    ///
    /// # Errors
    ///
    /// Returns `InputError::GenreIndex` when the index is out of range.
    pub fn from_index(index: usize) -> Result<Self, InputError> {
        Self::ALL.get(index).copied().ok_or(InputError::GenreIndex(index))
    }

    /// Display name of the genre
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::Nonfiction => "Nonfiction",
            Self::Periodical => "Periodical",
            Self::Biography => "Biography",
            Self::Children => "Children",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts either the menu index or the genre name, ignoring case
impl FromStr for Genre {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index);
        }
        Self::ALL
            .into_iter()
            .find(|genre| genre.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InputError::UnknownGenre(s.to_string()))
    }
}

/// A book held by the library
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Book {
    /// Catalog key
    isbn: String,
    /// Title as printed
    title: String,
    /// Author as printed
    author: String,
    /// Year of publication
    year: i32,
    /// Shelving genre
    genre: Genre,
    /// Whether the book is currently lent out
    #[serde(default)]
    checked_out: bool,
}

impl Book {
    /// Create a book that is on the shelf
    #[must_use]
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: Genre,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            year,
            genre,
            checked_out: false,
        }
    }

    /// Get the ISBN, the catalog key
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Get the title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the author
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Get the year of publication
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Get the shelving genre
    #[must_use]
    pub const fn genre(&self) -> Genre {
        self.genre
    }

    /// Check whether the book is currently lent out
    #[must_use]
    pub const fn is_checked_out(&self) -> bool {
        self.checked_out
    }

    /// Mark the book as lent out. Only the lending service flips this flag.
    pub(crate) fn check_out(&mut self) {
        self.checked_out = true;
    }

    /// Mark the book as back on the shelf
    pub(crate) fn check_in(&mut self) {
        self.checked_out = false;
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "ISBN: {}", self.isbn)?;
        writeln!(f, "Year: {}", self.year)?;
        write!(f, "Genre: {}", self.genre)
    }
}
