//! The in-memory catalog of books, authors and genres.

use super::book::{Author, Book, Genre};

/// Fallback shown when a book refers to an author id that is not in the catalog.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// A fixed, in-memory dataset.
///
/// Authors and genres keep the order they were loaded in, since that order is
/// used to populate the search form selects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub books: Vec<Book>,
    pub authors: Vec<Author>,
    pub genres: Vec<Genre>,
}

impl Catalog {
    #[must_use]
    pub fn new(books: Vec<Book>, authors: Vec<Author>, genres: Vec<Genre>) -> Self {
        Self {
            books,
            authors,
            genres,
        }
    }

    /// Looks up the display name for an author id.
    #[must_use]
    pub fn author_name(&self, author_id: &str) -> &str {
        self.authors
            .iter()
            .find(|a| a.id == author_id)
            .map_or(UNKNOWN_AUTHOR, |a| a.name.as_str())
    }

    #[must_use]
    pub fn genre_name(&self, genre_id: &str) -> Option<&str> {
        self.genres
            .iter()
            .find(|g| g.id == genre_id)
            .map(|g| g.name.as_str())
    }

    /// Finds a book by id.
    #[must_use]
    pub fn find(&self, book_id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == book_id)
    }

    /// Formats the preview subtitle, `"{author} ({year})"`.
    ///
    /// The year is left out when the publication date cannot be parsed.
    #[must_use]
    pub fn subtitle(&self, book: &Book) -> String {
        let author = self.author_name(&book.author);
        book.published_year()
            .map_or_else(|| author.to_string(), |year| format!("{author} ({year})"))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
