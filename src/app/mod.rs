//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain and UI layers:
//!
//! ```text
//! Key → keys::map_key → Event → handle_event → AppState mutations → Actions
//!                                    ↑                                 ↓
//!                                    └──── CatalogLoaded / Failed ─────┘
//! ```
//!
//! # Modules
//!
//! - [`filter`]: Title/author/genre predicate over the catalog
//! - [`paging`]: "Show more" page bookkeeping
//! - [`form`]: Search form draft and its select options
//! - [`modes`]: Overlay and form focus types
//! - [`state`]: Central application state and view model computation
//! - [`handler`]: Event processing and state transitions
//! - [`actions`]: Side effects for the runtime
//! - [`keys`]: Key-to-event mapping

pub mod actions;
pub mod filter;
pub mod form;
pub mod handler;
pub mod keys;
pub mod modes;
pub mod paging;
pub mod state;

pub use actions::Action;
pub use filter::{Choice, SearchFilters};
pub use handler::{handle_event, Event};
pub use keys::map_key;
pub use modes::{FormField, Overlay};
pub use paging::Paginator;
pub use state::AppState;
