//! JSON-backed catalog sources.

use super::backend::CatalogSource;
use super::models::CatalogDocument;
use crate::domain::error::Result;
use crate::domain::Catalog;
use std::path::PathBuf;

/// The built-in dataset shipped with the plugin.
const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Catalog compiled into the plugin binary.
///
/// # Examples
///
/// ```
/// use shelfie::catalog::{CatalogSource, EmbeddedCatalog};
///
/// let catalog = EmbeddedCatalog.load()?;
/// assert!(!catalog.is_empty());
/// # Ok::<(), shelfie::ShelfieError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl CatalogSource for EmbeddedCatalog {
    fn load(&self) -> Result<Catalog> {
        let _span = tracing::debug_span!("embedded_catalog_load").entered();

        let catalog = CatalogDocument::parse(EMBEDDED_CATALOG)?.into_catalog()?;

        tracing::debug!(
            books = catalog.books.len(),
            authors = catalog.authors.len(),
            genres = catalog.genres.len(),
            "loaded built-in catalog"
        );
        Ok(catalog)
    }
}

/// Catalog read from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    file_path: PathBuf,
}

impl JsonFileCatalog {
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> Result<Catalog> {
        let _span = tracing::debug_span!("json_catalog_load", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        let catalog = CatalogDocument::parse(&contents)?.into_catalog()?;

        tracing::debug!(books = catalog.books.len(), "loaded catalog file");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShelfieError;
    use std::io::Write;

    #[test]
    fn embedded_catalog_is_consistent() {
        let catalog = EmbeddedCatalog.load().unwrap();

        assert!(catalog.books.len() > 36, "built-in data should span more than one page");
        for book in &catalog.books {
            assert!(
                catalog.authors.iter().any(|a| a.id == book.author),
                "unknown author on {}",
                book.id
            );
            for genre in &book.genres {
                assert!(catalog.genre_name(genre).is_some(), "unknown genre {genre} on {}", book.id);
            }
            assert!(book.published_year().is_some(), "bad date on {}", book.id);
        }
    }

    #[test]
    fn loads_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"authors": [{{"id": "a", "name": "Anon"}}], "books": [{{"id": "x", "title": "X", "author": "a"}}]}}"#
        )
        .unwrap();

        let catalog = JsonFileCatalog::new(file.path()).load().unwrap();
        assert_eq!(catalog.books[0].title, "X");
        assert!(catalog.genres.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileCatalog::new(dir.path().join("nope.json")).load().unwrap_err();
        assert!(matches!(err, ShelfieError::Io(_)));
    }
}
