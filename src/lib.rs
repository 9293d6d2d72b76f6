//! Library exports for integration tests.
//!
//! Exposes the option-merging engine and the CLI argument structures so
//! external tests can exercise merging without spawning the binary.

use thiserror::Error;

pub mod cli_args;
pub mod environment;
pub mod opts;

pub use opts::families::PATH_SEPARATOR;
pub use opts::{OptionMerger, Style};

/// Errors returned by the command-line driver.
///
/// The merging core itself never fails; these cover the surrounding I/O
/// and configuration surface only.
#[derive(Error, Debug)]
pub enum JoptsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unrecognised style '{0}' (expected 'legacy' or 'modern')")]
    InvalidStyle(String),
}
