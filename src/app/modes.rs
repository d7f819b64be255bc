//! Overlay and focus state types.
//!
//! The browser always shows the book list; at most one overlay is drawn on
//! top of it. The overlay decides which keybindings are active.
//!
//! - **List**: no overlay, navigating the revealed books
//! - **Search**: the search form, with one focused field
//! - **Settings**: the theme picker
//! - **Detail**: the preview of one book

/// Which panel currently owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    /// No overlay; the list has focus.
    #[default]
    List,

    /// Search form is open.
    Search,

    /// Theme settings are open.
    Settings,

    /// Book preview is open.
    Detail {
        /// Index into `Catalog::books`.
        book: usize,
    },
}

impl Overlay {
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::List)
    }
}

/// Focused field in the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Free-text title input.
    #[default]
    Title,
    /// Author select.
    Author,
    /// Genre select.
    Genre,
}

impl FormField {
    /// Next field, wrapping from Genre to Title.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Genre,
            Self::Genre => Self::Title,
        }
    }

    /// Previous field, wrapping from Title to Genre.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Genre,
            Self::Author => Self::Title,
            Self::Genre => Self::Author,
        }
    }
}
