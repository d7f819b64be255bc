//! Catalog source abstraction.
//!
//! The dataset is fixed for the lifetime of a session, so a source only needs
//! to produce a [`Catalog`] once. Implementations differ in where the JSON
//! comes from.

use crate::domain::error::Result;
use crate::domain::Catalog;

/// Something that can produce the book catalog.
///
/// # Implementations
///
/// - [`EmbeddedCatalog`](super::EmbeddedCatalog): dataset compiled into the plugin
/// - [`JsonFileCatalog`](super::JsonFileCatalog): dataset read from a JSON file
pub trait CatalogSource {
    /// Loads the full catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be read or parsed.
    fn load(&self) -> Result<Catalog>;
}
