/// A weighted modulo-11 check digit calculator.
///
/// Each instance carries a fixed weight vector. The check digit is
/// `11 - (Σ digit[i] * weight[i]) mod 11`, with 11 mapped to 0. A result
/// of 10 has no single-digit representation and is reported as `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mod11 {
    weights: &'static [u32],
}

impl Mod11 {
    /// Weights for the first check digit (position 10).
    pub const FIRST: Self = Self {
        weights: &[3, 7, 6, 1, 8, 9, 4, 5, 2],
    };
    /// Weights for the second check digit (position 11).
    pub const SECOND: Self = Self {
        weights: &[5, 4, 3, 2, 7, 6, 5, 4, 3, 2],
    };

    /// Create a calculator with a custom weight vector.
    pub const fn new(weights: &'static [u32]) -> Self {
        Self { weights }
    }

    /// Number of leading digits this calculator consumes.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if the weight vector is empty.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weighted digit sum over the leading `self.len()` ASCII digits.
    ///
    /// `None` if there are too few characters or one of them is not a digit.
    pub fn weighted_sum(&self, digits: &[u8]) -> Option<u32> {
        if digits.len() < self.weights.len() {
            return None;
        }
        digits
            .iter()
            .zip(self.weights)
            .try_fold(0u32, |sum, (&ch, &weight)| {
                ch.is_ascii_digit()
                    .then(|| sum + u32::from(ch - b'0') * weight)
            })
    }

    /// Compute the check digit (0–9) for the leading digits of `digits`.
    ///
    /// Returns `None` when the remainder yields 10 (no valid check digit) or
    /// when the input is too short or not numeric.
    pub fn check_digit(&self, digits: &[u8]) -> Option<u8> {
        let sum = self.weighted_sum(digits)?;
        match 11 - sum % 11 {
            11 => Some(0),
            10 => None,
            digit => Some(digit as u8),
        }
    }

    /// Same as [`Mod11::check_digit`] but returns the ASCII character.
    pub fn check_char(&self, digits: &[u8]) -> Option<u8> {
        self.check_digit(digits).map(|d| b'0' + d)
    }

    /// Returns `true` if the digit following the weighted span equals the
    /// computed check digit.
    pub fn verify(&self, digits: &[u8]) -> bool {
        match (self.check_char(digits), digits.get(self.weights.len())) {
            (Some(expected), Some(&actual)) => expected == actual,
            _ => false,
        }
    }
}

/// Returns `true` if both trailing check digits of an 11-digit number are valid.
pub fn has_valid_check_digits(number: &str) -> bool {
    let bytes = number.as_bytes();
    bytes.len() == 11 && Mod11::FIRST.verify(bytes) && Mod11::SECOND.verify(bytes)
}
