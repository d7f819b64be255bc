//! Path utilities for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which
//! usually resolves to the directory Zellij was started from (typically the
//! user's home).

use std::path::PathBuf;

/// Returns the directory shelfie writes its log file to.
///
/// Resolves to `/host/.local/share/zellij/shelfie` in the sandbox, i.e.
/// `~/.local/share/zellij/shelfie` when Zellij was started from home.
///
/// # Examples
///
/// ```
/// use shelfie::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/shelfie"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("shelfie")
}

/// Expands tilde paths to the `/host` mount.
///
/// # Examples
///
/// ```
/// use shelfie::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/books.json"), "/host/books.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
