//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the plugin data directory.
pub const LOG_FILE_NAME: &str = "shelfie.log";

/// Initializes the tracing subscriber with a rotating log file.
///
/// Installs a registry with an [`EnvFilter`] built from `config.trace_level`
/// and a plain-text `fmt` layer writing to `shelfie.log` in the plugin data
/// directory (`~/.local/share/zellij/shelfie` through the `/host` mount).
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently returns if directory creation fails (logging is optional)
/// - Idempotent: only the first call installs a subscriber
/// - An invalid filter directive falls back to `info`
pub fn init_tracing(config: &Config) {
    init_tracing_in(&crate::infrastructure::paths::get_data_dir(), config);
}

/// Same as [`init_tracing`], logging into `dir` instead of the data directory.
pub fn init_tracing_in(dir: &Path, config: &Config) {
    if std::fs::create_dir_all(dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let writer = FileWriter::new(dir.join(LOG_FILE_NAME));

    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn writes_log_file_and_tolerates_repeat_init() {
        let dir = TempDir::new().unwrap();
        let log_dir = dir.path().join("logs");
        let config = Config::default();

        init_tracing_in(&log_dir, &config);
        tracing::info!("tracing initialized for test");

        let contents = std::fs::read_to_string(log_dir.join(LOG_FILE_NAME)).unwrap();
        assert!(contents.contains("tracing initialized for test"));

        init_tracing_in(&log_dir, &config);
        tracing::info!("second init is a no-op");
        let contents = std::fs::read_to_string(log_dir.join(LOG_FILE_NAME)).unwrap();
        assert!(contents.contains("second init is a no-op"));
    }

    #[test]
    fn uncreatable_directory_is_skipped() {
        let file = NamedTempFile::new().unwrap();
        let bogus_dir = file.path().join("nested");

        init_tracing_in(&bogus_dir, &Config::default());

        assert!(!bogus_dir.exists());
        assert!(!bogus_dir.join(LOG_FILE_NAME).exists());
    }
}
