use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Sex encoded by an information-bearing identity number.
///
/// The third digit of the individual number (position 8) carries it:
/// even for female, odd for male.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Sex for a single decimal digit by parity.
    pub fn from_digit(digit: u8) -> Self {
        if digit % 2 == 0 {
            Self::Female
        } else {
            Self::Male
        }
    }

    /// Norwegian single-letter code: `K` (kvinne) or `M` (mann).
    pub fn code(&self) -> char {
        match self {
            Self::Female => 'K',
            Self::Male => 'M',
        }
    }

    /// Parse a single-letter code.
    pub fn from_code(code: &str) -> Result<Self, TypeError> {
        match code.trim() {
            "K" | "k" => Ok(Self::Female),
            "M" | "m" => Ok(Self::Male),
            other => Err(TypeError::UnknownSexCode(other.to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Female => write!(f, "female"),
            Self::Male => write!(f, "male"),
        }
    }
}
