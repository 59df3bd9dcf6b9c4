use std::error::Error;
use std::fmt;

/// Errors produced by the library itself.
///
/// Operators never fail on their own: a chain only fails when a caller
/// supplied callback does, and that failure belongs to the caller. The
/// variants here cover the configuration surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LazyError {
    /// A sort algorithm name that is neither heap nor quick
    UnknownSortAlgorithm(String),
}

impl fmt::Display for LazyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LazyError::UnknownSortAlgorithm(name) => write!(
                f,
                "Unknown sort algorithm '{}': expected 'heap' or 'quick'",
                name
            ),
        }
    }
}

impl Error for LazyError {}
