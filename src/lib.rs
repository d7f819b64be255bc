//! Shelfie: a Zellij plugin for browsing a book catalog.
//!
//! Shelfie shows a fixed catalog of books and lets the user:
//! - Filter by title text, author and genre
//! - Reveal results page by page ("Show more")
//! - Preview a book's description and cover reference
//! - Switch between a day and a night palette

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Key mapping and event handling                   │
//! │  - Filter engine and paginator                      │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                   │
//! ┌───────────────┐                   ┌───────────────┐
//! │ UI Layer      │                   │ Catalog Layer │
//! │ (ui/)         │                   │ (catalog/)    │
//! │ - Rendering   │                   │ - Embedded    │
//! │ - Theming     │                   │ - JSON file   │
//! │ - Components  │                   │               │
//! └───────────────┘                   └───────────────┘
//!         │                                   │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Book, Author, Genre, Catalog (domain/)           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing-subscriber fmt layer                     │
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/shelfie.wasm" {
//!         theme "day"
//!         page_size "20"
//!         catalog_file "~/books/catalog.json"
//!         night_theme_file "~/.config/shelfie/night.toml"
//!         trace_level "shelfie=debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use shelfie::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! assert_eq!(state.revealed_count(), 36);
//!
//! handle_event(&mut state, &Event::ShowMore)?;
//! assert_eq!(state.revealed_count(), state.matches.len());
//! # Ok::<(), shelfie::ShelfieError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, map_key, Action, AppState, Event, FormField, Overlay};
pub use domain::{Author, Book, Catalog, Genre, Result, ShelfieError};
pub use ui::{Theme, ThemeMode};

use app::paging::DEFAULT_PAGE_SIZE;
use catalog::{CatalogSource, EmbeddedCatalog};
use std::collections::BTreeMap;
use ui::ThemeSet;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Theme applied at startup. Default: night.
    pub theme: ThemeMode,

    /// Path to a TOML palette replacing the built-in day theme.
    pub day_theme_file: Option<String>,

    /// Path to a TOML palette replacing the built-in night theme.
    pub night_theme_file: Option<String>,

    /// JSON dataset loaded in place of the built-in catalog once filesystem
    /// access is granted.
    pub catalog_file: Option<String>,

    /// Books revealed per "Show more" step. Default: 36
    pub page_size: usize,

    /// `EnvFilter` directive for the log file. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            day_theme_file: None,
            night_theme_file: None,
            catalog_file: None,
            page_size: DEFAULT_PAGE_SIZE,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `theme`: `day`/`light` or `night`/`dark` (falls back to night)
    /// - `page_size`: positive integer (falls back to 36 on `0` or parse error)
    /// - `*_file`: kept as given, blank values ignored
    /// - `trace_level`: any `EnvFilter` directive
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use shelfie::{Config, ThemeMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "day".to_string());
    /// map.insert("page_size".to_string(), "12".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme, ThemeMode::Day);
    /// assert_eq!(config.page_size, 12);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let path = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let theme = config
            .get("theme")
            .and_then(|s| s.parse::<ThemeMode>().ok())
            .unwrap_or_default();

        let page_size = config
            .get("page_size")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            theme,
            day_theme_file: path("day_theme_file"),
            night_theme_file: path("night_theme_file"),
            catalog_file: path("catalog_file"),
            page_size,
            trace_level: config
                .get("trace_level")
                .cloned()
                .unwrap_or_else(|| "info".to_string()),
        }
    }
}

/// Initializes the application state from configuration.
///
/// Loads both palettes (custom files fall back to the built-in ones) and the
/// embedded catalog. A configured `catalog_file` is only remembered here; it
/// is read after the host grants filesystem access.
///
/// # Example
///
/// ```rust
/// use shelfie::{initialize, Config, Overlay};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.overlay, Overlay::List);
/// assert_eq!(state.theme().name, "night");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing shelfie plugin");

    let themes = ThemeSet::load(
        config.day_theme_file.as_deref(),
        config.night_theme_file.as_deref(),
    );

    let catalog = EmbeddedCatalog.load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load built-in catalog, starting empty");
        Catalog::default()
    });

    let mut state = AppState::new(catalog, themes, config.theme, config.page_size);
    state.catalog_file.clone_from(&config.catalog_file);
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("theme", "sepia"),
            ("page_size", "0"),
            ("catalog_file", "   "),
        ]));
        assert_eq!(config.theme, ThemeMode::Night);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.catalog_file, None);

        let config = Config::from_zellij(&map(&[("page_size", "lots")]));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn parses_every_key() {
        let config = Config::from_zellij(&map(&[
            ("theme", "Light"),
            ("day_theme_file", "~/day.toml"),
            ("night_theme_file", "/tmp/night.toml"),
            ("catalog_file", "~/books.json"),
            ("page_size", " 10 "),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.theme, ThemeMode::Day);
        assert_eq!(config.day_theme_file.as_deref(), Some("~/day.toml"));
        assert_eq!(config.night_theme_file.as_deref(), Some("/tmp/night.toml"));
        assert_eq!(config.catalog_file.as_deref(), Some("~/books.json"));
        assert_eq!(config.page_size, 10);
        assert_eq!(config.trace_level, "debug");
    }

    #[test]
    fn initialize_applies_config() {
        let config = Config {
            theme: ThemeMode::Day,
            page_size: 5,
            catalog_file: Some("~/books.json".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.theme_mode, ThemeMode::Day);
        assert_eq!(state.revealed_count(), 5);
        assert_eq!(state.matches.len(), state.catalog.len());
        assert_eq!(state.catalog_file.as_deref(), Some("~/books.json"));
    }
}
