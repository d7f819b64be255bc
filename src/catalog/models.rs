//! On-disk catalog document format.
//!
//! A catalog file is a single JSON object:
//!
//! ```json
//! {
//!   "authors": [{ "id": "austen", "name": "Jane Austen" }],
//!   "genres":  [{ "id": "romance", "name": "Romance" }],
//!   "books": [{
//!     "id": "pride-and-prejudice",
//!     "title": "Pride and Prejudice",
//!     "author": "austen",
//!     "genres": ["romance"],
//!     "image": "https://example.org/covers/pride.jpg",
//!     "published": "1813-01-28T00:00:00.000Z",
//!     "description": "..."
//!   }]
//! }
//! ```

use crate::domain::error::{Result, ShelfieError};
use crate::domain::{Author, Book, Catalog, Genre};
use serde::Deserialize;
use std::collections::HashSet;

/// Root of the catalog JSON document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub books: Vec<Book>,
}

impl CatalogDocument {
    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfieError::Catalog`] if the text is not a valid document.
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ShelfieError::Catalog(format!("failed to parse JSON: {e}")))
    }

    /// Converts the document into a [`Catalog`].
    ///
    /// Only simple checks are applied: book ids must be non-empty and unique.
    /// Dangling author or genre references are kept as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfieError::Catalog`] on an empty or duplicate book id.
    pub fn into_catalog(self) -> Result<Catalog> {
        let mut seen = HashSet::with_capacity(self.books.len());
        for book in &self.books {
            if book.id.trim().is_empty() {
                return Err(ShelfieError::Catalog(format!(
                    "book '{}' has an empty id",
                    book.title
                )));
            }
            if !seen.insert(book.id.as_str()) {
                return Err(ShelfieError::Catalog(format!("duplicate book id: {}", book.id)));
            }
        }

        let dangling = self
            .books
            .iter()
            .filter(|b| !self.authors.iter().any(|a| a.id == b.author))
            .count();
        if dangling > 0 {
            tracing::warn!(count = dangling, "books reference unknown authors");
        }

        Ok(Catalog::new(self.books, self.authors, self.genres))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_document() {
        let doc = CatalogDocument::parse(
            r#"{
                "authors": [{"id": "a1", "name": "Mary Shelley"}],
                "genres": [{"id": "g1", "name": "Horror"}],
                "books": [{"id": "b1", "title": "Frankenstein", "author": "a1"}]
            }"#,
        )
        .unwrap();

        let catalog = doc.into_catalog().unwrap();
        assert_eq!(catalog.books.len(), 1);
        assert!(catalog.books[0].genres.is_empty());
        assert_eq!(catalog.author_name("a1"), "Mary Shelley");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = CatalogDocument::parse("{ \"books\": [").unwrap_err();
        assert!(matches!(err, ShelfieError::Catalog(_)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let doc = CatalogDocument::parse(
            r#"{"books": [
                {"id": "b1", "title": "One", "author": "a"},
                {"id": "b1", "title": "Two", "author": "a"}
            ]}"#,
        )
        .unwrap();

        let err = doc.into_catalog().unwrap_err();
        assert_eq!(err.to_string(), "Catalog error: duplicate book id: b1");
    }

    #[test]
    fn rejects_blank_ids() {
        let doc = CatalogDocument::parse(r#"{"books": [{"id": " ", "title": "Blank", "author": "a"}]}"#)
            .unwrap();
        assert!(doc.into_catalog().is_err());
    }
}
