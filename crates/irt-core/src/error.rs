//! IRT Error Types
//!
//! Defines all error conditions produced by the Interpolation Runtime.
//! Formatting and assembly are total for well-formed input; the variants
//! below are the only ways a call can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IrtError {
    // Assembly errors
    /// The assembled text could not be allocated, either because the
    /// allocator refused the reservation or because the configured output
    /// ceiling would be exceeded.
    #[error("allocation failure: {requested} bytes requested{}", limit_suffix(.limit))]
    AllocationFailure {
        requested: usize,
        limit: Option<usize>,
    },

    // Formatting errors
    /// A NaN or infinite float reached a formatter configured to reject it.
    #[error("undefined numeric input: {0}")]
    UndefinedNumericInput(f64),

    // Collaborator boundary
    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn limit_suffix(limit: &Option<usize>) -> String {
    match limit {
        Some(limit) => format!(" (limit {limit})"),
        None => String::new(),
    }
}

impl From<toml::de::Error> for IrtError {
    fn from(err: toml::de::Error) -> Self {
        IrtError::Config(err.to_string())
    }
}

pub type IrtResult<T> = Result<T, IrtError>;
