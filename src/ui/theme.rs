//! Theme management and ANSI escape sequence generation.
//!
//! The browser has two colour modes, day and night. Each mode is backed by a
//! [`Theme`] palette; the built-in palettes swap the same dark
//! (`#0a0a14`) and light (`#ffffff`) base colours between foreground and
//! background. Either palette can be replaced by a custom TOML file.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-night"
//!
//! [colors]
//! background = "#0a0a14"
//! header_fg = "#ffffff"
//! selection_fg = "#0a0a14"
//! selection_bg = "#ffffff"
//! text_normal = "#ffffff"
//! text_dim = "#8b8b99"
//! border = "#3a3a4a"
//! panel_border = "#ffffff"
//! match_highlight_fg = "#0a0a14"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! accent = "#89b4fa"
//! ```

use crate::domain::error::{Result, ShelfieError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// The binary theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ThemeMode {
    Day,
    #[default]
    Night,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ShelfieError;

    /// Parses `day`/`light` or `night`/`dark`, ignoring case.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "light" => Ok(Self::Day),
            "night" | "dark" => Ok(Self::Night),
            other => Err(ShelfieError::Config(format!("unknown theme mode: {other}"))),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour palette for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Colours for all UI elements.
    pub colors: ThemeColors,
}

/// Colour definitions for all UI elements, as hex strings (e.g. `"#0a0a14"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Canvas colour painted behind everything.
    pub background: String,

    /// Header text colour.
    pub header_fg: String,
    /// Optional header background colour.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground colour.
    pub selection_fg: String,
    /// Selected row background colour.
    pub selection_bg: String,

    /// Normal text colour.
    pub text_normal: String,
    /// Dimmed text colour (footer, secondary info).
    pub text_dim: String,

    /// Separator line colour.
    pub border: String,
    /// Overlay panel frame colour.
    pub panel_border: String,

    /// Title match highlight foreground.
    pub match_highlight_fg: String,
    /// Title match highlight background.
    pub match_highlight_bg: String,

    /// "No results" message colour.
    pub empty_state_fg: String,

    /// Enabled "show more" control and focused form fields.
    pub accent: String,
}

impl Theme {
    /// Loads a built-in theme by name (`day` or `night`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use shelfie::Theme;
    ///
    /// let theme = Theme::from_name("day").unwrap();
    /// assert_eq!(theme.colors.background, "#ffffff");
    /// assert!(Theme::from_name("sepia").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "day" => include_str!("../../themes/day.toml"),
            "night" => include_str!("../../themes/night.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Built-in palette for a mode.
    #[must_use]
    pub fn builtin(mode: ThemeMode) -> Self {
        Self::from_name(mode.as_str()).unwrap_or_else(|| Self::fallback(mode))
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfieError::Io`] if the file cannot be read and
    /// [`ShelfieError::Theme`] if its contents do not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| ShelfieError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Hard-coded palette used only if a bundled TOML file fails to parse.
    fn fallback(mode: ThemeMode) -> Self {
        let (dark, light) = ("#0a0a14", "#ffffff");
        let (fg, bg) = match mode {
            ThemeMode::Night => (light, dark),
            ThemeMode::Day => (dark, light),
        };

        Self {
            name: mode.as_str().to_string(),
            colors: ThemeColors {
                background: bg.to_string(),
                header_fg: fg.to_string(),
                header_bg: None,
                selection_fg: bg.to_string(),
                selection_bg: fg.to_string(),
                text_normal: fg.to_string(),
                text_dim: fg.to_string(),
                border: fg.to_string(),
                panel_border: fg.to_string(),
                match_highlight_fg: bg.to_string(),
                match_highlight_bg: fg.to_string(),
                empty_state_fg: fg.to_string(),
                accent: fg.to_string(),
            },
        }
    }

    /// Converts a hex colour to an RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for a hex colour (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex colour (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Resets styling and re-applies the canvas colours.
    ///
    /// Components use this instead of a bare reset so the theme background
    /// survives between styled runs.
    #[must_use]
    pub fn restore(&self) -> String {
        format!(
            "{}{}{}",
            Self::reset(),
            Self::bg(&self.colors.background),
            Self::fg(&self.colors.text_normal)
        )
    }
}

impl Default for Theme {
    /// The built-in night palette.
    fn default() -> Self {
        Self::builtin(ThemeMode::Night)
    }
}

/// The pair of palettes the theme toggle switches between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSet {
    pub day: Theme,
    pub night: Theme,
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self {
            day: Theme::builtin(ThemeMode::Day),
            night: Theme::builtin(ThemeMode::Night),
        }
    }
}

impl ThemeSet {
    /// Builds the set, replacing either side with a custom file when given.
    ///
    /// A file that fails to load is logged and the built-in palette is kept.
    #[must_use]
    pub fn load(day_file: Option<&str>, night_file: Option<&str>) -> Self {
        fn load_side(mode: ThemeMode, file: Option<&str>) -> Theme {
            file.map_or_else(
                || Theme::builtin(mode),
                |path| {
                    let resolved = crate::infrastructure::expand_tilde(path);
                    Theme::from_file(&resolved).unwrap_or_else(|e| {
                        tracing::warn!(
                            mode = %mode,
                            theme_file = %resolved,
                            error = %e,
                            "failed to load theme from file, using built-in"
                        );
                        Theme::builtin(mode)
                    })
                },
            )
        }

        Self {
            day: load_side(ThemeMode::Day, day_file),
            night: load_side(ThemeMode::Night, night_file),
        }
    }

    #[must_use]
    pub const fn get(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Day => &self.day,
            ThemeMode::Night => &self.night,
        }
    }
}
