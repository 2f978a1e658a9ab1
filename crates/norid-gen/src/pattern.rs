use std::fmt;
use std::str::FromStr;

use crate::error::{GenerateError, GenerateResult};

/// Marker for a position the generator may fill freely.
pub const WILDCARD: char = '?';

/// Number of positions in a birth number pattern.
pub const PATTERN_LENGTH: usize = 11;

/// Positions holding the `ddMMyy` birthdate.
pub const DATE_POSITIONS: std::ops::Range<usize> = 0..6;

/// Positions holding the individual number.
pub const INDIVIDUAL_POSITIONS: std::ops::Range<usize> = 6..9;

/// Position of the first check digit.
pub const FIRST_CHECK_POSITION: usize = 9;

/// Position of the second check digit.
pub const SECOND_CHECK_POSITION: usize = 10;

/// One position of a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Any digit.
    Wildcard,
    /// A fixed ASCII digit.
    Digit(u8),
}

impl Slot {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }
}

/// A validated 11-position pattern such as `"??12???????"`.
///
/// Every position is either a literal digit or [`WILDCARD`], and at least one
/// position is a wildcard.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: [Slot; PATTERN_LENGTH],
}

impl Pattern {
    /// Parse and validate a pattern.
    pub fn parse(text: &str) -> GenerateResult<Self> {
        if text.is_empty() {
            return Err(GenerateError::InvalidPattern("pattern is missing".into()));
        }
        let count = text.chars().count();
        if count != PATTERN_LENGTH {
            return Err(GenerateError::InvalidPattern(format!(
                "pattern '{text}' must be exactly {PATTERN_LENGTH} characters, got {count}"
            )));
        }

        let mut slots = [Slot::Wildcard; PATTERN_LENGTH];
        for (slot, ch) in slots.iter_mut().zip(text.chars()) {
            *slot = match ch {
                WILDCARD => Slot::Wildcard,
                '0'..='9' => Slot::Digit(ch as u8),
                _ => {
                    return Err(GenerateError::InvalidPattern(format!(
                        "pattern '{text}' may only contain digits 0-9 and the wildcard ({WILDCARD})"
                    )))
                }
            };
        }

        if !slots.iter().any(Slot::is_wildcard) {
            return Err(GenerateError::InvalidPattern(format!(
                "pattern '{text}' contains no wildcard ({WILDCARD})"
            )));
        }
        Ok(Self { slots })
    }

    /// The all-wildcard pattern.
    pub fn any() -> Self {
        Self {
            slots: [Slot::Wildcard; PATTERN_LENGTH],
        }
    }

    /// The slot at `position`.
    pub fn slot(&self, position: usize) -> Slot {
        self.slots.get(position).copied().unwrap_or(Slot::Wildcard)
    }

    /// Returns `true` if the whole birthdate is left to the generator.
    pub fn date_is_open(&self) -> bool {
        self.slots[DATE_POSITIONS].iter().all(Slot::is_wildcard)
    }

    /// Returns `true` if every literal digit of the pattern appears at the
    /// same position in `number`.
    pub fn matches(&self, number: &str) -> bool {
        let bytes = number.as_bytes();
        bytes.len() == PATTERN_LENGTH
            && self.slots.iter().zip(bytes).all(|(slot, &b)| match slot {
                Slot::Wildcard => b.is_ascii_digit(),
                Slot::Digit(d) => *d == b,
            })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Slot::Wildcard => write!(f, "{WILDCARD}")?,
                Slot::Digit(d) => write!(f, "{}", *d as char)?,
            }
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
