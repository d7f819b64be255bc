//! The static book dataset.
//!
//! The catalog is loaded once and never written back. By default the plugin
//! uses the dataset compiled into the binary; a `catalog_file` in the plugin
//! configuration replaces it with a user-supplied JSON document of the same
//! shape (see [`models`]).
//!
//! # Modules
//!
//! - [`backend`]: The [`CatalogSource`] trait
//! - [`json`]: Embedded and file-based JSON sources
//! - [`models`]: The JSON document format

pub mod backend;
pub mod json;
pub mod models;

pub use backend::CatalogSource;
pub use json::{EmbeddedCatalog, JsonFileCatalog};
pub use models::CatalogDocument;
