//! Book, author and genre records.
//!
//! These are the plain data records the catalog is made of. Books refer to
//! their author and genres by id; the names live in the [`Catalog`](super::Catalog).

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single book in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    /// Author id, resolved through [`Catalog::author_name`](super::Catalog::author_name).
    pub author: String,
    /// Genre ids.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Cover image reference (URL or path).
    #[serde(default)]
    pub image: String,
    /// Publication timestamp as stored in the dataset (ISO-8601).
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub description: String,
}

impl Book {
    /// Returns the year the book was published.
    ///
    /// Accepts full RFC 3339 timestamps as well as plain `YYYY-MM-DD`,
    /// `YYYY-MM` and `YYYY` dates.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfie::Book;
    ///
    /// let book = Book {
    ///     id: "b1".to_string(),
    ///     title: "Emma".to_string(),
    ///     author: "austen".to_string(),
    ///     genres: vec![],
    ///     image: String::new(),
    ///     published: "1815-12-23T00:00:00.000Z".to_string(),
    ///     description: String::new(),
    /// };
    /// assert_eq!(book.published_year(), Some(1815));
    /// ```
    #[must_use]
    pub fn published_year(&self) -> Option<i32> {
        let raw = self.published.trim();
        if raw.is_empty() {
            return None;
        }

        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.year())
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(|d| d.year()))
            .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").map(|d| d.year()))
            .ok()
            .or_else(|| {
                (raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()))
                    .then(|| raw.parse().ok())
                    .flatten()
            })
    }

    /// Whether the book is tagged with the given genre id.
    #[must_use]
    pub fn has_genre(&self, genre_id: &str) -> bool {
        self.genres.iter().any(|g| g == genre_id)
    }
}

/// An author entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
}

/// A genre entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    pub name: String,
}
