use norid_ident::IdentError;
use thiserror::Error;

/// Errors produced by the generators.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// The pattern is empty, has the wrong length, contains illegal
    /// characters, or has no wildcard.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// The requested date range is outside the supported bounds or reversed.
    #[error("invalid date range: {0}")]
    InvalidRange(String),

    /// The range generator gave up after too many rejected candidates.
    #[error("no valid number found after {attempts} rejected candidates")]
    Exhausted { attempts: u32 },

    /// A generated candidate failed validation.
    #[error(transparent)]
    Ident(#[from] IdentError),
}

impl GenerateError {
    /// Returns `true` for precondition failures on the caller's arguments.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::InvalidPattern(_) | Self::InvalidRange(_))
    }
}

pub type GenerateResult<T> = Result<T, GenerateError>;
