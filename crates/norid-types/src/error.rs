use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("unknown identity kind code: {0}")]
    UnknownKindCode(String),

    #[error("unknown sex code: {0}")]
    UnknownSexCode(String),
}
