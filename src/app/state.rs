//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the browser: the catalog,
//! the filters that were last applied, the resulting match list, how many
//! pages of it are revealed, the selection, the open overlay and the theme.
//!
//! # State Components
//!
//! - **Catalog**: Fixed dataset, replaced only when a catalog file is loaded
//! - **Matches**: Indices into `catalog.books` that satisfy the filters
//! - **Paginator**: How many pages of matches are revealed
//! - **Selection**: Cursor position within the revealed matches
//! - **Overlay**: Search form, settings, book preview, or none
//! - **Theme**: Active day/night mode plus the settings draft
//!
//! # Control Flow
//!
//! Submitting a search replaces the filters, recomputes matches, resets the
//! paginator to page 1 and moves the selection to the first row. The view
//! model is then derived from that snapshot.

use super::filter::{title_match_range, SearchFilters};
use super::form::SearchForm;
use super::modes::{FormField, Overlay};
use super::paging::Paginator;
use crate::domain::{Book, Catalog};
use crate::ui::helpers::{title_column_width, truncate};
use crate::ui::theme::{Theme, ThemeMode, ThemeSet};
use crate::ui::viewmodel::{
    DetailInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchFormInfo, SettingsInfo,
    ShowMoreInfo, UIViewModel,
};

/// Message shown when a search matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No results found. Your filters might be too narrow.";

/// Rows taken by everything except the list: blank line, header, border,
/// column headers, show-more line, border, footer, trailing line.
const CHROME_ROWS: usize = 8;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The full dataset.
    pub catalog: Catalog,

    /// Filters of the last submitted search.
    pub filters: SearchFilters,

    /// Indices into `catalog.books` matching `filters`, in catalog order.
    pub matches: Vec<usize>,

    /// Reveal bookkeeping over `matches`.
    pub paginator: Paginator,

    /// Zero-based cursor within the revealed matches.
    pub selected_index: usize,

    /// Panel currently owning input.
    pub overlay: Overlay,

    /// Draft of the search form.
    pub search_form: SearchForm,

    /// Day and night palettes.
    pub themes: ThemeSet,

    /// Applied theme preference.
    pub theme_mode: ThemeMode,

    /// Mode chosen in the open settings panel, applied on save.
    pub settings_draft: ThemeMode,

    /// Catalog file to load once filesystem permissions are granted.
    pub catalog_file: Option<String>,
}

impl AppState {
    /// Creates a state showing the first page of the whole catalog.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shelfie::app::AppState;
    /// use shelfie::domain::Catalog;
    /// use shelfie::ui::theme::{ThemeMode, ThemeSet};
    ///
    /// let state = AppState::new(Catalog::default(), ThemeSet::default(), ThemeMode::Night, 36);
    /// assert_eq!(state.selected_index, 0);
    /// assert!(state.matches.is_empty());
    /// ```
    #[must_use]
    pub fn new(catalog: Catalog, themes: ThemeSet, theme_mode: ThemeMode, page_size: usize) -> Self {
        let filters = SearchFilters::default();
        let matches = filters.apply(&catalog.books);
        let search_form = SearchForm::for_catalog(&catalog);

        Self {
            catalog,
            filters,
            matches,
            paginator: Paginator::new(page_size),
            selected_index: 0,
            overlay: Overlay::List,
            search_form,
            themes,
            theme_mode,
            settings_draft: theme_mode,
            catalog_file: None,
        }
    }

    /// Palette for the applied theme mode.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        self.themes.get(self.theme_mode)
    }

    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        tracing::debug!(from = %self.theme_mode, to = %mode, "theme mode changed");
        self.theme_mode = mode;
        self.settings_draft = mode;
    }

    /// Number of matches currently revealed.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.paginator.revealed(self.matches.len())
    }

    /// Revealed books paired with their catalog index.
    pub fn revealed_books(&self) -> impl Iterator<Item = (usize, &Book)> + '_ {
        self.matches[..self.revealed_count()]
            .iter()
            .filter_map(|&idx| self.catalog.books.get(idx).map(|book| (idx, book)))
    }

    /// Whether the "no results" message is showing.
    #[must_use]
    pub fn shows_no_results(&self) -> bool {
        self.matches.is_empty()
    }

    /// Runs the filter engine and resets paging and selection.
    pub fn apply_filters(&mut self, filters: SearchFilters) {
        self.matches = filters.apply(&self.catalog.books);
        self.filters = filters;
        self.paginator.reset();
        self.selected_index = 0;

        tracing::debug!(
            match_count = self.matches.len(),
            revealed = self.revealed_count(),
            "search results updated"
        );
    }

    /// Reveals the next page of matches.
    ///
    /// The selection jumps to the first newly revealed book. Returns `false`
    /// when every match is already visible.
    pub fn show_more(&mut self) -> bool {
        match self.paginator.show_more(self.matches.len()) {
            Some(range) => {
                tracing::debug!(
                    start = range.start,
                    end = range.end,
                    page = self.paginator.page(),
                    "revealed next page"
                );
                self.selected_index = range.start;
                true
            }
            None => {
                tracing::debug!("no more matches to reveal");
                false
            }
        }
    }

    /// Replaces the dataset and starts over with empty filters.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        tracing::debug!(books = catalog.books.len(), "replacing catalog");
        self.search_form = SearchForm::for_catalog(&catalog);
        self.catalog = catalog;
        self.overlay = Overlay::List;
        self.apply_filters(SearchFilters::default());
    }

    /// Moves selection down one row, wrapping to the top of the revealed list.
    pub fn move_selection_down(&mut self) {
        let revealed = self.revealed_count();
        if revealed == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % revealed;
    }

    /// Moves selection up one row, wrapping to the bottom of the revealed list.
    pub fn move_selection_up(&mut self) {
        let revealed = self.revealed_count();
        if revealed == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = revealed - 1;
        } else {
            self.selected_index = (self.selected_index - 1).min(revealed - 1);
        }
    }

    /// The selected book and its catalog index, if any row is revealed.
    #[must_use]
    pub fn selected_book(&self) -> Option<(usize, &Book)> {
        if self.selected_index >= self.revealed_count() {
            return None;
        }
        let idx = *self.matches.get(self.selected_index)?;
        self.catalog.books.get(idx).map(|book| (idx, book))
    }

    /// Computes a renderable view model for a terminal of `rows` x `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let revealed = self.revealed_count();
        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(revealed);
        if visible_end - visible_start.min(visible_end) < available_rows && revealed >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }
        let visible_start = visible_start.min(visible_end);

        let title_width = title_column_width(cols);
        let author_width = cols.saturating_sub(title_width + 2);

        let display_items = self.matches[visible_start..visible_end]
            .iter()
            .enumerate()
            .filter_map(|(relative_idx, &book_idx)| {
                let book = self.catalog.books.get(book_idx)?;
                Some(self.compute_display_item(
                    book,
                    visible_start + relative_idx == self.selected_index,
                    title_width,
                    author_width,
                ))
            })
            .collect();

        UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_header(),
            footer: self.compute_footer(),
            show_more: ShowMoreInfo {
                label: self.paginator.label(self.matches.len()),
                enabled: self.paginator.has_more(self.matches.len()),
            },
            empty_state: self.shows_no_results().then(|| EmptyState {
                message: NO_RESULTS_MESSAGE.to_string(),
                subtitle: "Press / to adjust the search".to_string(),
            }),
            search_form: self.compute_search_form(),
            settings: matches!(self.overlay, Overlay::Settings).then_some(SettingsInfo {
                selected: self.settings_draft,
            }),
            detail: self.compute_detail(),
        }
    }

    fn compute_display_item(
        &self,
        book: &Book,
        is_selected: bool,
        title_width: usize,
        author_width: usize,
    ) -> DisplayItem {
        let title = truncate(&book.title, title_width);
        let shortened = book.title.chars().count() > title_width;

        // Characters of the real title still on screen, excluding the "..." tail.
        let kept_chars = if shortened && title_width > 3 {
            title_width - 3
        } else {
            title.chars().count()
        };

        let highlight_ranges = title_match_range(&book.title, &self.filters.title)
            .filter(|&(start, _)| start < kept_chars)
            .map(|(start, end)| vec![(start, end.min(kept_chars))])
            .unwrap_or_default();

        DisplayItem {
            title,
            author: truncate(self.catalog.author_name(&book.author), author_width),
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(
                " Book Connect ({}/{}) ",
                self.revealed_count(),
                self.matches.len()
            ),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.overlay {
            Overlay::List => "j/k: navigate  Enter: open  m: show more  /: search  t: theme  q: quit",
            Overlay::Search => match self.search_form.focus {
                FormField::Title => "Type to edit title  Tab: next field  Enter: search  Esc: cancel",
                FormField::Author | FormField::Genre => {
                    "h/l or ←/→: change  Tab: next field  Enter: search  Esc: cancel"
                }
            },
            Overlay::Settings => "h/l or ←/→: day/night  Enter: save  Esc: cancel",
            Overlay::Detail { .. } => "Esc/Enter/q: close",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_form(&self) -> Option<SearchFormInfo> {
        if self.overlay != Overlay::Search {
            return None;
        }

        Some(SearchFormInfo {
            title: self.search_form.title.clone(),
            author: self.search_form.author_label().to_string(),
            genre: self.search_form.genre_label().to_string(),
            focus: self.search_form.focus,
        })
    }

    fn compute_detail(&self) -> Option<DetailInfo> {
        let Overlay::Detail { book } = self.overlay else {
            return None;
        };
        let book = self.catalog.books.get(book)?;

        let genres = book
            .genres
            .iter()
            .filter_map(|g| self.catalog.genre_name(g))
            .collect::<Vec<_>>()
            .join(", ");

        Some(DetailInfo {
            title: book.title.clone(),
            subtitle: self.catalog.subtitle(book),
            genres,
            description: book.description.clone(),
            image: book.image.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filter::Choice;
    use crate::domain::Author;

    fn numbered_catalog(count: usize) -> Catalog {
        let books = (0..count)
            .map(|i| Book {
                id: format!("b{i}"),
                title: format!("Volume {i}"),
                author: if i % 2 == 0 { "even" } else { "odd" }.to_string(),
                genres: vec![],
                image: String::new(),
                published: "1900-01-01".to_string(),
                description: String::new(),
            })
            .collect();
        let authors = vec![
            Author { id: "even".into(), name: "Even Author".into() },
            Author { id: "odd".into(), name: "Odd Author".into() },
        ];
        Catalog::new(books, authors, vec![])
    }

    fn state(count: usize, page_size: usize) -> AppState {
        AppState::new(numbered_catalog(count), ThemeSet::default(), ThemeMode::Night, page_size)
    }

    #[test]
    fn starts_with_first_page_of_everything() {
        let state = state(25, 10);
        assert_eq!(state.matches.len(), 25);
        assert_eq!(state.revealed_count(), 10);
        assert_eq!(state.revealed_books().count(), 10);
        assert!(!state.shows_no_results());
    }

    #[test]
    fn applying_filters_resets_page_and_selection() {
        let mut state = state(25, 10);
        state.show_more();
        state.move_selection_down();
        assert_eq!(state.paginator.page(), 2);

        state.apply_filters(SearchFilters::new("", Choice::Only("odd".into()), Choice::Any));
        assert_eq!(state.paginator.page(), 1);
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.matches.len(), 12);
        assert_eq!(state.revealed_count(), 10);
    }

    #[test]
    fn show_more_moves_selection_to_new_rows() {
        let mut state = state(25, 10);
        assert!(state.show_more());
        assert_eq!(state.selected_index, 10);
        assert!(state.show_more());
        assert_eq!(state.selected_index, 20);
        assert!(!state.show_more());
        assert_eq!(state.revealed_count(), 25);
    }

    #[test]
    fn selection_wraps_within_revealed_rows() {
        let mut state = state(25, 10);
        state.move_selection_up();
        assert_eq!(state.selected_index, 9);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);

        let (idx, book) = state.selected_book().unwrap();
        assert_eq!(idx, 0);
        assert_eq!(book.id, "b0");
    }

    #[test]
    fn empty_results_show_message() {
        let mut state = state(5, 10);
        state.apply_filters(SearchFilters::new("nothing like this", Choice::Any, Choice::Any));

        assert!(state.shows_no_results());
        assert!(state.selected_book().is_none());
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.display_items.is_empty());
        assert_eq!(vm.empty_state.unwrap().message, NO_RESULTS_MESSAGE);
        assert_eq!(vm.show_more.label, "Show more (0)");
        assert!(!vm.show_more.enabled);
    }

    #[test]
    fn viewmodel_windows_around_selection() {
        let mut state = state(40, 40);
        state.selected_index = 30;

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items.len(), 16);
        assert!(vm.display_items[vm.selected_index].is_selected);
        assert_eq!(vm.display_items[vm.selected_index].title, "Volume 30");
        assert_eq!(vm.header.title, " Book Connect (40/40) ");
    }

    #[test]
    fn viewmodel_window_sticks_to_end() {
        let mut state = state(40, 40);
        state.selected_index = 39;

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items.len(), 16);
        assert_eq!(vm.display_items.last().unwrap().title, "Volume 39");
        assert_eq!(vm.selected_index, 15);
    }

    #[test]
    fn viewmodel_highlights_title_query() {
        let mut state = state(12, 36);
        state.apply_filters(SearchFilters::new("ume 1", Choice::Any, Choice::Any));

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items.len(), 3);
        assert_eq!(vm.display_items[0].title, "Volume 1");
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(3, 8)]);
        assert_eq!(vm.display_items[0].author, "Odd Author");
        assert_eq!(vm.show_more.label, "Show more (0)");
    }

    fn single_title_state(title: &str) -> AppState {
        let book = Book {
            id: "huck".into(),
            title: title.into(),
            author: "twain".into(),
            genres: vec![],
            image: String::new(),
            published: String::new(),
            description: String::new(),
        };
        let catalog = Catalog::new(
            vec![book],
            vec![Author { id: "twain".into(), name: "Mark Twain".into() }],
            vec![],
        );
        AppState::new(catalog, ThemeSet::default(), ThemeMode::Night, 36)
    }

    #[test]
    fn highlight_skips_match_hidden_by_truncation() {
        let mut state = single_title_state("Adventures of Huckleberry Finn");
        state.apply_filters(SearchFilters::new("s of h", Choice::Any, Choice::Any));

        let vm = state.compute_viewmodel(24, 10);
        assert_eq!(vm.display_items[0].title, "Adventure...");
        assert!(vm.display_items[0].highlight_ranges.is_empty());
    }

    #[test]
    fn highlight_stops_before_ellipsis() {
        let mut state = single_title_state("Adventures of Huckleberry Finn");

        state.apply_filters(SearchFilters::new("ures", Choice::Any, Choice::Any));
        let vm = state.compute_viewmodel(24, 10);
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(6, 9)]);

        state.apply_filters(SearchFilters::new("vent", Choice::Any, Choice::Any));
        let vm = state.compute_viewmodel(24, 10);
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(2, 6)]);
    }

    #[test]
    fn detail_panel_uses_subtitle() {
        let mut state = state(3, 36);
        state.overlay = Overlay::Detail { book: 2 };

        let detail = state.compute_viewmodel(24, 80).detail.unwrap();
        assert_eq!(detail.title, "Volume 2");
        assert_eq!(detail.subtitle, "Even Author (1900)");
        assert!(detail.genres.is_empty());
    }

    #[test]
    fn replace_catalog_starts_over() {
        let mut state = state(3, 36);
        state.apply_filters(SearchFilters::new("2", Choice::Any, Choice::Any));
        state.overlay = Overlay::Search;

        state.replace_catalog(numbered_catalog(50));
        assert_eq!(state.overlay, Overlay::List);
        assert!(state.filters.is_unrestricted());
        assert_eq!(state.matches.len(), 50);
        assert_eq!(state.search_form.authors.len(), 3);
    }

    #[test]
    fn theme_follows_mode() {
        let mut state = state(1, 36);
        assert_eq!(state.theme().name, "night");
        state.set_theme_mode(ThemeMode::Day);
        assert_eq!(state.theme().name, "day");
        assert_eq!(state.settings_draft, ThemeMode::Day);
    }
}
