//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent failures of the pattern implementations themselves.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("render failed at node '{node}': {source}")]
    Render {
        node: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown provider: {0}")]
    UnknownProvider(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
