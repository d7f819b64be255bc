//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (truncation, wrapping, highlighting)
//! - [`theme`]: Day/night palettes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Theme, ThemeMode, ThemeSet};
pub use viewmodel::{
    DetailInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchFormInfo, SettingsInfo,
    ShowMoreInfo, UIViewModel,
};
