//! Domain layer: book records, the catalog container and error types.
//!
//! Nothing in here knows about Zellij or rendering.
//!
//! - [`error`]: Error types and result alias
//! - [`book`]: Book, author and genre records
//! - [`catalog`]: The in-memory dataset with name lookups

pub mod book;
pub mod catalog;
pub mod error;

pub use book::{Author, Book, Genre};
pub use catalog::Catalog;
pub use error::{Result, ShelfieError};
