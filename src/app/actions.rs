//! Side effects requested by the event handler.
//!
//! [`handle_event`](super::handle_event) mutates [`AppState`](super::AppState)
//! directly and returns the work it cannot do itself as a `Vec<Action>`. The
//! plugin runtime executes them in order.

use std::path::PathBuf;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user presses `q` on the book list.
    CloseFocus,

    /// Reads a catalog file and feeds the result back as
    /// [`Event::CatalogLoaded`](super::Event::CatalogLoaded) or
    /// [`Event::CatalogFailed`](super::Event::CatalogFailed).
    LoadCatalog {
        /// Sandbox path of the JSON dataset.
        path: PathBuf,
    },
}
