//! Birthdate and sex decoding for information-bearing numbers.
//!
//! D- and H-numbers hide the birthdate behind a +4 offset on one digit.
//! Once that offset is removed, all three kinds share the same `ddMMyy`
//! layout and the same century table keyed on the individual number.

use chrono::NaiveDate;
use norid_types::{IdentityKind, Sex};

use crate::error::{IdentError, IdentResult};

/// Offset added to one birthdate digit by D- and H-numbers.
pub const DIGIT_OFFSET: u8 = 4;

/// Position of the digit carrying the sex.
pub const SEX_POSITION: usize = 8;

/// Position of the offset digit for a kind, if it has one.
pub fn offset_position(kind: IdentityKind) -> Option<usize> {
    match kind {
        IdentityKind::DNumber => Some(0),
        IdentityKind::HNumber => Some(2),
        _ => None,
    }
}

/// The six `ddMMyy` digits of the birthdate with any kind-specific offset removed.
///
/// Returns `None` for kinds that carry no birthdate, for short or non-numeric
/// input, and when the offset digit is outside `4..=7`.
pub fn raw_birth_digits(kind: IdentityKind, digits: &str) -> Option<String> {
    if !kind.is_information_bearing() {
        return None;
    }
    let bytes = digits.as_bytes();
    if bytes.len() < 6 || !bytes[..6].iter().all(u8::is_ascii_digit) {
        return None;
    }

    let mut raw = [0u8; 6];
    raw.copy_from_slice(&bytes[..6]);
    if let Some(pos) = offset_position(kind) {
        raw[pos] = raw[pos]
            .checked_sub(DIGIT_OFFSET)
            .filter(|ch| (b'0'..=b'3').contains(ch))?;
    }
    String::from_utf8(raw.to_vec()).ok()
}

/// Split six `ddMMyy` digits into day, month and two-digit year.
fn day_month_year(raw: &str) -> Option<(u32, u32, u32)> {
    if raw.len() != 6 {
        return None;
    }
    let day = raw.get(0..2)?.parse().ok()?;
    let month = raw.get(2..4)?.parse().ok()?;
    let year = raw.get(4..6)?.parse().ok()?;
    Some((day, month, year))
}

/// The three-digit individual number (positions 6–8).
pub fn individual_number(digits: &str) -> Option<u16> {
    let part = digits.get(6..9)?;
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Four-digit birth year from the individual number and a two-digit year.
///
/// | individual | two-digit year | century |
/// |---|---|---|
/// | 000–499 | any | 1900 |
/// | 500–749 | > 54 | 1800 |
/// | 500–749 | ≤ 54 | 2000 |
/// | 750–899 | any | 2000 |
/// | 900–999 | > 39 | 1900 |
/// | 900–999 | ≤ 39 | 2000 |
pub fn resolve_century(individual: u16, two_digit_year: u32) -> i32 {
    let century = match individual {
        0..=499 => 1900,
        500..=749 if two_digit_year > 54 => 1800,
        500..=749 => 2000,
        750..=899 => 2000,
        900.. if two_digit_year > 39 => 1900,
        900.. => 2000,
    };
    century + two_digit_year as i32
}

/// Sex from the parity of the digit at [`SEX_POSITION`].
pub fn sex(digits: &str) -> Option<Sex> {
    digits
        .as_bytes()
        .get(SEX_POSITION)
        .filter(|b| b.is_ascii_digit())
        .map(|b| Sex::from_digit(b - b'0'))
}

/// Decode the full birthdate of an information-bearing number.
pub fn birthdate(kind: IdentityKind, digits: &str) -> IdentResult<NaiveDate> {
    let raw = raw_birth_digits(kind, digits)
        .ok_or_else(|| IdentError::format(kind, "no birthdate digits"))?;
    let (day, month, yy) = day_month_year(&raw)
        .ok_or_else(|| IdentError::format(kind, "malformed birthdate digits"))?;
    let individual = individual_number(digits)
        .ok_or_else(|| IdentError::format(kind, "malformed individual number"))?;
    let year = resolve_century(individual, yy);

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        IdentError::format(kind, format!("{day:02}.{month:02}.{year} is not a calendar date"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn birth_number_digits_are_identity() {
        assert_eq!(
            raw_birth_digits(IdentityKind::BirthNumber, "17054026641").as_deref(),
            Some("170540")
        );
    }

    #[test]
    fn d_number_offsets_first_digit() {
        assert_eq!(
            raw_birth_digits(IdentityKind::DNumber, "51106297510").as_deref(),
            Some("111062")
        );
    }

    #[test]
    fn h_number_offsets_third_digit() {
        assert_eq!(
            raw_birth_digits(IdentityKind::HNumber, "22495314442").as_deref(),
            Some("220953")
        );
    }

    #[test]
    fn offset_digit_must_be_four_to_seven() {
        assert!(raw_birth_digits(IdentityKind::DNumber, "31106297510").is_none());
        assert!(raw_birth_digits(IdentityKind::DNumber, "81106297510").is_none());
        assert!(raw_birth_digits(IdentityKind::HNumber, "22895314442").is_none());
        assert!(raw_birth_digits(IdentityKind::DNumber, "71106297510").is_some());
    }

    #[test]
    fn non_bearing_kinds_have_no_birth_digits() {
        assert!(raw_birth_digits(IdentityKind::CommonAidNumber, "81212121223").is_none());
        assert!(raw_birth_digits(IdentityKind::AlienRegistryNumber, "200816832910").is_none());
        assert!(raw_birth_digits(IdentityKind::Other, "17054026641").is_none());
    }

    #[test]
    fn century_table_boundaries() {
        assert_eq!(resolve_century(0, 99), 1999);
        assert_eq!(resolve_century(499, 5), 1905);
        assert_eq!(resolve_century(500, 55), 1855);
        assert_eq!(resolve_century(500, 54), 2054);
        assert_eq!(resolve_century(749, 99), 1899);
        assert_eq!(resolve_century(750, 99), 2099);
        assert_eq!(resolve_century(899, 0), 2000);
        assert_eq!(resolve_century(900, 40), 1940);
        assert_eq!(resolve_century(900, 39), 2039);
        assert_eq!(resolve_century(999, 0), 2000);
    }

    #[test]
    fn decodes_known_numbers() {
        assert_eq!(birthdate(IdentityKind::BirthNumber, "17054026641").unwrap(), date(1940, 5, 17));
        assert_eq!(birthdate(IdentityKind::DNumber, "51106297510").unwrap(), date(1962, 10, 11));
        assert_eq!(birthdate(IdentityKind::HNumber, "22495314442").unwrap(), date(1953, 9, 22));
    }

    #[test]
    fn century_examples() {
        let cases = [
            ("01030599744", date(2005, 3, 1)),
            ("01030550532", date(2005, 3, 1)),
            ("01035697523", date(1956, 3, 1)),
            ("01035650756", date(1856, 3, 1)),
            ("01032078210", date(2020, 3, 1)),
        ];
        for (number, expected) in cases {
            assert_eq!(birthdate(IdentityKind::BirthNumber, number).unwrap(), expected, "{number}");
        }
    }

    #[test]
    fn leap_day_in_nineteen_hundred_fails() {
        let err = birthdate(IdentityKind::BirthNumber, "29020012345").unwrap_err();
        assert_eq!(err.kind(), IdentityKind::BirthNumber);
        assert!(err.to_string().contains("1900"));
    }

    #[test]
    fn sex_from_ninth_digit() {
        assert_eq!(sex("17054026641"), Some(Sex::Female));
        assert_eq!(sex("51106297510"), Some(Sex::Male));
        assert_eq!(sex("1705402"), None);
    }

    #[test]
    fn individual_number_positions() {
        assert_eq!(individual_number("01035650756"), Some(507));
        assert_eq!(individual_number("0103565"), None);
    }
}
