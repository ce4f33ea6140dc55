use thiserror::Error;

/// Errors produced while preparing a search.
///
/// Scanning and navigation cannot fail; the only failure point is
/// compiling a user-supplied pattern in regex mode.
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
