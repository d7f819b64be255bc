//! Search form draft state.
//!
//! The form is edited in place while the search overlay is open and only
//! turned into [`SearchFilters`] on submit. Cancelling restores it from the
//! filters that were last applied.

use super::filter::{Choice, SearchFilters, ANY};
use super::modes::FormField;
use crate::domain::Catalog;

/// One entry of a select field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value (`"any"` or an id).
    pub value: String,
    /// Text shown to the user.
    pub label: String,
}

/// Builds select options with a leading "any" entry.
///
/// Entries keep their input order.
pub fn populate_options<'a, I>(entries: I, default_label: &str) -> Vec<SelectOption>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    std::iter::once(SelectOption {
        value: ANY.to_string(),
        label: default_label.to_string(),
    })
    .chain(entries.into_iter().map(|(id, name)| SelectOption {
        value: id.to_string(),
        label: name.to_string(),
    }))
    .collect()
}

/// Editable search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub title: String,
    pub authors: Vec<SelectOption>,
    pub genres: Vec<SelectOption>,
    pub author_index: usize,
    pub genre_index: usize,
    pub focus: FormField,
}

impl SearchForm {
    /// Creates an empty form with selects populated from the catalog.
    #[must_use]
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let authors = populate_options(
            catalog.authors.iter().map(|a| (a.id.as_str(), a.name.as_str())),
            "All Authors",
        );
        let genres = populate_options(
            catalog.genres.iter().map(|g| (g.id.as_str(), g.name.as_str())),
            "All Genres",
        );

        Self {
            title: String::new(),
            authors,
            genres,
            author_index: 0,
            genre_index: 0,
            focus: FormField::Title,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Types a character into the title field. Ignored on select fields.
    pub fn input(&mut self, c: char) -> bool {
        if self.focus != FormField::Title {
            return false;
        }
        self.title.push(c);
        true
    }

    /// Deletes the last title character. Ignored on select fields.
    pub fn backspace(&mut self) -> bool {
        if self.focus != FormField::Title {
            return false;
        }
        self.title.pop().is_some()
    }

    /// Moves the focused select to its next option, wrapping around.
    pub fn select_next(&mut self) -> bool {
        match self.focus {
            FormField::Title => false,
            FormField::Author => {
                self.author_index = (self.author_index + 1) % self.authors.len().max(1);
                true
            }
            FormField::Genre => {
                self.genre_index = (self.genre_index + 1) % self.genres.len().max(1);
                true
            }
        }
    }

    /// Moves the focused select to its previous option, wrapping around.
    pub fn select_prev(&mut self) -> bool {
        fn step_back(idx: usize, len: usize) -> usize {
            if idx == 0 {
                len.saturating_sub(1)
            } else {
                idx - 1
            }
        }

        match self.focus {
            FormField::Title => false,
            FormField::Author => {
                self.author_index = step_back(self.author_index, self.authors.len());
                true
            }
            FormField::Genre => {
                self.genre_index = step_back(self.genre_index, self.genres.len());
                true
            }
        }
    }

    #[must_use]
    pub fn author_label(&self) -> &str {
        self.authors
            .get(self.author_index)
            .map_or("", |o| o.label.as_str())
    }

    #[must_use]
    pub fn genre_label(&self) -> &str {
        self.genres
            .get(self.genre_index)
            .map_or("", |o| o.label.as_str())
    }

    /// Snapshot of the form as filters.
    #[must_use]
    pub fn filters(&self) -> SearchFilters {
        let value = |options: &[SelectOption], idx: usize| {
            options
                .get(idx)
                .map_or(Choice::Any, |o| Choice::from_value(&o.value))
        };

        SearchFilters::new(
            self.title.clone(),
            value(&self.authors, self.author_index),
            value(&self.genres, self.genre_index),
        )
    }

    /// Restores the form from previously applied filters.
    ///
    /// Ids that are no longer offered fall back to the "any" option. Focus
    /// returns to the title field.
    pub fn load(&mut self, filters: &SearchFilters) {
        let position = |options: &[SelectOption], choice: &Choice| {
            options
                .iter()
                .position(|o| o.value == choice.as_value())
                .unwrap_or(0)
        };

        self.title.clone_from(&filters.title);
        self.author_index = position(&self.authors, &filters.author);
        self.genre_index = position(&self.genres, &filters.genre);
        self.focus = FormField::Title;
    }
}
