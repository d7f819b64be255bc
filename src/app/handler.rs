//! Event handling and state transition logic.
//!
//! Every user gesture and host notification arrives as an [`Event`].
//! [`handle_event`] routes it according to the open overlay, mutates
//! [`AppState`] and reports whether a redraw is needed along with any
//! [`Action`]s for the runtime.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `ShowMore`
//! - **Overlays**: `OpenPreview`, `OpenSearch`, `OpenSettings`, `Submit`, `Cancel`
//! - **Form input**: `NextField`, `PrevField`, `OptionNext`, `OptionPrev`, `Char`, `Backspace`
//! - **System**: `CloseFocus`, `PermissionsResult`, `CatalogLoaded`, `CatalogFailed`
//!
//! # Example
//!
//! ```rust
//! use shelfie::{handle_event, initialize, Config, Event, Overlay};
//!
//! let mut state = initialize(&Config::default());
//! let (render, actions) = handle_event(&mut state, &Event::OpenSearch)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! assert_eq!(state.overlay, Overlay::Search);
//! # Ok::<(), shelfie::ShelfieError>(())
//! ```

use super::modes::Overlay;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Catalog;
use crate::infrastructure::expand_tilde;
use std::path::PathBuf;

/// Events triggered by user input or the plugin host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the list selection down by one row (wraps to top).
    KeyDown,
    /// Moves the list selection up by one row (wraps to bottom).
    KeyUp,
    /// Reveals the next page of matches.
    ShowMore,
    /// Opens the preview of the selected book.
    OpenPreview,
    /// Opens the search form, pre-filled with the applied filters.
    OpenSearch,
    /// Opens the theme picker.
    OpenSettings,
    /// Confirms the open overlay: runs the search, saves the theme, or
    /// closes the preview.
    Submit,
    /// Dismisses the open overlay, discarding drafts.
    Cancel,
    /// Focuses the next search form field.
    NextField,
    /// Focuses the previous search form field.
    PrevField,
    /// Cycles the focused select (or the theme picker) forward.
    OptionNext,
    /// Cycles the focused select (or the theme picker) backward.
    OptionPrev,
    /// Types a character into the title field.
    Char(char),
    /// Deletes the last character of the title field.
    Backspace,
    /// Hides the plugin.
    CloseFocus,

    /// Outcome of the permission request made at load time.
    PermissionsResult {
        /// Whether the user granted filesystem access.
        granted: bool,
    },

    /// A catalog file was read and parsed.
    CatalogLoaded(Catalog),

    /// A catalog file could not be read or parsed.
    ///
    /// Logged; the built-in dataset stays in place.
    CatalogFailed {
        /// Error message describing the failure.
        error: String,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`. Events that do not apply to the open
/// overlay are ignored and report `false`.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the runtime's error path in place
/// for handlers that touch the filesystem.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, overlay = ?state.overlay).entered();

    match event {
        Event::KeyDown if state.overlay.is_list() => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp if state.overlay.is_list() => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::ShowMore if state.overlay.is_list() => Ok((state.show_more(), vec![])),
        Event::OpenPreview if state.overlay.is_list() => {
            let Some((book_idx, book)) = state.selected_book() else {
                tracing::debug!("no book selected");
                return Ok((false, vec![]));
            };
            tracing::debug!(book_id = %book.id, "opening preview");
            state.overlay = Overlay::Detail { book: book_idx };
            Ok((true, vec![]))
        }
        Event::OpenSearch if state.overlay.is_list() => {
            let filters = state.filters.clone();
            state.search_form.load(&filters);
            state.overlay = Overlay::Search;
            Ok((true, vec![]))
        }
        Event::OpenSettings if state.overlay.is_list() => {
            state.settings_draft = state.theme_mode;
            state.overlay = Overlay::Settings;
            Ok((true, vec![]))
        }
        Event::Submit => Ok((submit(state), vec![])),
        Event::Cancel => Ok((cancel(state), vec![])),
        Event::NextField if state.overlay == Overlay::Search => {
            state.search_form.focus_next();
            Ok((true, vec![]))
        }
        Event::PrevField if state.overlay == Overlay::Search => {
            state.search_form.focus_prev();
            Ok((true, vec![]))
        }
        Event::OptionNext | Event::OptionPrev => {
            let forward = matches!(event, Event::OptionNext);
            let changed = match state.overlay {
                Overlay::Search if forward => state.search_form.select_next(),
                Overlay::Search => state.search_form.select_prev(),
                Overlay::Settings => {
                    state.settings_draft = state.settings_draft.toggled();
                    true
                }
                Overlay::List | Overlay::Detail { .. } => false,
            };
            Ok((changed, vec![]))
        }
        Event::Char(c) if state.overlay == Overlay::Search => {
            let changed = state.search_form.input(*c);
            tracing::trace!(title = %state.search_form.title, "title draft updated");
            Ok((changed, vec![]))
        }
        Event::Backspace if state.overlay == Overlay::Search => {
            Ok((state.search_form.backspace(), vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::PermissionsResult { granted } => {
            if !granted {
                tracing::warn!("permissions denied - using the built-in catalog");
                return Ok((false, vec![]));
            }
            let actions = state
                .catalog_file
                .as_deref()
                .map(|file| Action::LoadCatalog {
                    path: PathBuf::from(expand_tilde(file)),
                })
                .into_iter()
                .collect();
            Ok((false, actions))
        }
        Event::CatalogLoaded(catalog) => {
            tracing::info!(
                books = catalog.books.len(),
                authors = catalog.authors.len(),
                genres = catalog.genres.len(),
                "catalog file loaded"
            );
            state.replace_catalog(catalog.clone());
            Ok((true, vec![]))
        }
        Event::CatalogFailed { error } => {
            tracing::warn!(error = %error, "failed to load catalog file, keeping built-in catalog");
            Ok((false, vec![]))
        }
        _ => {
            tracing::trace!("event ignored in current overlay");
            Ok((false, vec![]))
        }
    }
}

/// Confirms the open overlay. Returns whether anything changed.
fn submit(state: &mut AppState) -> bool {
    match state.overlay {
        Overlay::List => false,
        Overlay::Search => {
            let filters = state.search_form.filters();
            tracing::debug!(
                title = %filters.title,
                author = %filters.author,
                genre = %filters.genre,
                "search submitted"
            );
            state.apply_filters(filters);
            state.overlay = Overlay::List;
            true
        }
        Overlay::Settings => {
            let mode = state.settings_draft;
            state.set_theme_mode(mode);
            state.overlay = Overlay::List;
            true
        }
        Overlay::Detail { .. } => {
            state.overlay = Overlay::List;
            true
        }
    }
}

/// Dismisses the open overlay without applying drafts.
fn cancel(state: &mut AppState) -> bool {
    match state.overlay {
        Overlay::List => false,
        Overlay::Search => {
            let filters = state.filters.clone();
            state.search_form.load(&filters);
            state.overlay = Overlay::List;
            true
        }
        Overlay::Settings => {
            state.settings_draft = state.theme_mode;
            state.overlay = Overlay::List;
            true
        }
        Overlay::Detail { .. } => {
            state.overlay = Overlay::List;
            true
        }
    }
}
