//! Search filters and the matching predicate.
//!
//! A search combines three criteria that must all hold:
//!
//! - **title**: case-insensitive substring match; a blank query matches everything
//! - **author**: `Any`, or the book's author id equals the chosen id
//! - **genre**: `Any`, or the chosen id is among the book's genre ids
//!
//! Filtering is a linear pass over the catalog that yields indices into
//! `Catalog::books`, preserving catalog order.

use crate::domain::Book;
use std::fmt;

/// Sentinel used by forms and configuration for "no restriction".
pub const ANY: &str = "any";

/// A select value: either unrestricted or a specific id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Choice {
    #[default]
    Any,
    Only(String),
}

impl Choice {
    /// Builds a choice from a form value, treating `"any"` and blanks as [`Choice::Any`].
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfie::app::filter::Choice;
    ///
    /// assert_eq!(Choice::from_value("any"), Choice::Any);
    /// assert_eq!(Choice::from_value("austen"), Choice::Only("austen".to_string()));
    /// ```
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ANY {
            Self::Any
        } else {
            Self::Only(value.to_string())
        }
    }

    #[must_use]
    pub fn as_value(&self) -> &str {
        match self {
            Self::Any => ANY,
            Self::Only(id) => id,
        }
    }

    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// The criteria of the last submitted search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Title query as typed. Only its trimmed form decides whether it is blank.
    pub title: String,
    pub author: Choice,
    pub genre: Choice,
}

impl SearchFilters {
    #[must_use]
    pub fn new(title: impl Into<String>, author: Choice, genre: Choice) -> Self {
        Self {
            title: title.into(),
            author,
            genre,
        }
    }

    /// Whether the filters restrict nothing.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.title.trim().is_empty() && self.author.is_any() && self.genre.is_any()
    }

    /// Returns `true` if `book` satisfies all three criteria.
    #[must_use]
    pub fn matches(&self, book: &Book) -> bool {
        self.title_matches(book) && self.author_matches(book) && self.genre_matches(book)
    }

    fn title_matches(&self, book: &Book) -> bool {
        self.title.trim().is_empty()
            || book
                .title
                .to_lowercase()
                .contains(&self.title.to_lowercase())
    }

    fn author_matches(&self, book: &Book) -> bool {
        match &self.author {
            Choice::Any => true,
            Choice::Only(id) => book.author == *id,
        }
    }

    fn genre_matches(&self, book: &Book) -> bool {
        match &self.genre {
            Choice::Any => true,
            Choice::Only(id) => book.has_genre(id),
        }
    }

    /// Computes the indices of every matching book, in catalog order.
    #[must_use]
    pub fn apply(&self, books: &[Book]) -> Vec<usize> {
        let _span = tracing::debug_span!(
            "apply_filters",
            total_books = books.len(),
            title_len = self.title.len(),
            author = %self.author,
            genre = %self.genre
        )
        .entered();

        let matches: Vec<usize> = books
            .iter()
            .enumerate()
            .filter(|(_, book)| self.matches(book))
            .map(|(idx, _)| idx)
            .collect();

        tracing::debug!(match_count = matches.len(), "filters applied");
        matches
    }
}

/// Finds the character range of the title query inside `title`.
///
/// Returns `(start, end)` in character indices, or `None` when the query is
/// blank, does not occur, or lowercasing changes the title's character count
/// (in which case indices would not line up).
#[must_use]
pub fn title_match_range(title: &str, query: &str) -> Option<(usize, usize)> {
    if query.trim().is_empty() {
        return None;
    }

    let title_lower = title.to_lowercase();
    if title_lower.chars().count() != title.chars().count() {
        return None;
    }

    let byte_start = title_lower.find(&query.to_lowercase())?;
    let start = title_lower[..byte_start].chars().count();
    let end = start + query.to_lowercase().chars().count();
    Some((start, end))
}
