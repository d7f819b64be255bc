//! Infrastructure layer for filesystem and environment interactions.
//!
//! Covers the Zellij sandbox path conventions used when resolving user
//! supplied files (catalog, themes) and the log directory.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
