//! Modulo-11 check digits for Norwegian identity numbers.
//!
//! Every 11-digit Norwegian identifier ends in two check digits. The first is
//! computed over digits 1–9 with [`Mod11::FIRST`], the second over digits
//! 1–10 (including the first check digit) with [`Mod11::SECOND`]. Some
//! weighted sums have no single-digit check value; those candidates are not
//! valid numbers and must be rejected, never coerced.

pub mod mod11;

pub use mod11::{has_valid_check_digits, Mod11};
