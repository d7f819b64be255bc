//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: truncated text, highlight
//! ranges, labels and flags.

use crate::app::modes::FormField;
use crate::ui::theme::ThemeMode;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Book rows inside the visible window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,
    pub footer: FooterInfo,

    /// The "Show more (N)" control under the list.
    pub show_more: ShowMoreInfo,

    /// "No results" message, present when the last search matched nothing.
    pub empty_state: Option<EmptyState>,

    /// Search form panel, present while the search overlay is open.
    pub search_form: Option<SearchFormInfo>,

    /// Theme picker panel, present while the settings overlay is open.
    pub settings: Option<SettingsInfo>,

    /// Book preview panel, present while a book is open.
    pub detail: Option<DetailInfo>,
}

/// One row of the book list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: String,
    pub author: String,
    pub is_selected: bool,

    /// Character ranges of the title to highlight, `(start, end)` exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the active overlay.
    pub keybindings: String,
}

/// "Show more" control state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowMoreInfo {
    /// `Show more (N)` where N is the number of hidden matches.
    pub label: String,
    /// Disabled once every match is revealed.
    pub enabled: bool,
}

/// Message shown in place of the list when nothing matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search form panel contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFormInfo {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub focus: FormField,
}

/// Theme picker panel contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsInfo {
    /// Mode currently chosen in the picker (not yet applied).
    pub selected: ThemeMode,
}

/// Book preview panel contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailInfo {
    pub title: String,
    /// `"{author} ({year})"`.
    pub subtitle: String,
    /// Comma-separated genre names.
    pub genres: String,
    pub description: String,
    /// Cover image reference.
    pub image: String,
}
