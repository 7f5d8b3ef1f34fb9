//! Error types for gridcalc core.

use thiserror::Error;

/// Errors that can occur while loading a table. Cell-level problems (bad
/// addresses, malformed operands) are handled inside the engine and never
/// surface here; the only fatal error is an unreadable input file.
#[derive(Error, Debug)]
pub enum GridcalcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GridcalcError>;
