use norid_types::IdentityKind;
use thiserror::Error;

/// Errors produced when constructing or decoding identity numbers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentError {
    /// The text is not a valid identifier of the requested kind.
    #[error("invalid {kind_name} format: {reason}", kind_name = .kind.name())]
    Format { kind: IdentityKind, reason: String },
}

impl IdentError {
    /// Create a format error for a kind with a reason.
    pub fn format(kind: IdentityKind, reason: impl Into<String>) -> Self {
        Self::Format {
            kind,
            reason: reason.into(),
        }
    }

    /// The kind the failed operation was targeting.
    pub fn kind(&self) -> IdentityKind {
        match self {
            Self::Format { kind, .. } => *kind,
        }
    }
}

pub type IdentResult<T> = Result<T, IdentError>;
