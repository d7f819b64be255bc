//! Structured logging to a rotating file.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → <data dir>/shelfie.log
//! ```
//!
//! # Configuration
//!
//! The filter directive comes from the `trace_level` plugin option
//! (default `"info"`), e.g. `"shelfie=debug"`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, init_tracing_in, LOG_FILE_NAME};
