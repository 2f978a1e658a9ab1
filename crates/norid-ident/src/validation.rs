//! Per-kind validation.
//!
//! Each kind runs a short fail-fast sequence of checks: structure (length and
//! digits), a kind-specific range or date check, and the modulo-11 check
//! digits. The first failing check produces an [`IdentError::Format`] naming
//! the reason.

use norid_checksum::has_valid_check_digits;
use norid_types::{parse_norwegian_date, to_int_or_default, IdentityKind};

use crate::decode::{offset_position, raw_birth_digits};
use crate::error::{IdentError, IdentResult};

/// Lowest nine-digit prefix of an FH-number.
pub const FH_RANGE_START: i64 = 800_000_000;
/// Highest nine-digit prefix of an FH-number.
pub const FH_RANGE_END: i64 = 999_999_999;

/// Validate `text` as an identifier of `kind`.
pub fn validate(kind: IdentityKind, text: &str) -> IdentResult<()> {
    match kind {
        IdentityKind::BirthNumber | IdentityKind::DNumber => {
            check_structure(kind, text)?;
            check_embedded_date(kind, text)?;
            check_digits(kind, text)
        }
        // H-numbers in circulation do not reliably carry valid check digits.
        IdentityKind::HNumber => {
            check_structure(kind, text)?;
            check_embedded_date(kind, text)
        }
        IdentityKind::CommonAidNumber => {
            check_structure(kind, text)?;
            check_fh_range(text)?;
            check_digits(kind, text)
        }
        // DUF check digits are not validated; structure only.
        IdentityKind::AlienRegistryNumber => check_structure(kind, text),
        IdentityKind::Other => Err(IdentError::format(kind, "not a supported identifier kind")),
    }
}

/// Returns `true` if `text` is a valid identifier of `kind`.
pub fn is_valid(kind: IdentityKind, text: &str) -> bool {
    validate(kind, text).is_ok()
}

pub fn is_valid_birth_number(text: &str) -> bool {
    is_valid(IdentityKind::BirthNumber, text)
}

pub fn is_valid_d_number(text: &str) -> bool {
    is_valid(IdentityKind::DNumber, text)
}

pub fn is_valid_h_number(text: &str) -> bool {
    is_valid(IdentityKind::HNumber, text)
}

pub fn is_valid_fh_number(text: &str) -> bool {
    is_valid(IdentityKind::CommonAidNumber, text)
}

pub fn is_valid_duf_number(text: &str) -> bool {
    is_valid(IdentityKind::AlienRegistryNumber, text)
}

fn check_structure(kind: IdentityKind, text: &str) -> IdentResult<()> {
    let expected = kind
        .digit_count()
        .ok_or_else(|| IdentError::format(kind, "kind has no digit layout"))?;
    if text.len() != expected {
        return Err(IdentError::format(
            kind,
            format!("expected {expected} digits, got {} characters", text.chars().count()),
        ));
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdentError::format(kind, "contains non-digit characters"));
    }
    Ok(())
}

fn check_embedded_date(kind: IdentityKind, text: &str) -> IdentResult<()> {
    let raw = raw_birth_digits(kind, text).ok_or_else(|| match offset_position(kind) {
        Some(pos) => IdentError::format(kind, format!("digit {} must be between 4 and 7", pos + 1)),
        None => IdentError::format(kind, "missing birthdate digits"),
    })?;
    let dotted = format!("{}.{}.{}", &raw[0..2], &raw[2..4], &raw[4..6]);
    parse_norwegian_date(&dotted)
        .map(|_| ())
        .map_err(|_| IdentError::format(kind, format!("{dotted} is not a valid date")))
}

fn check_fh_range(text: &str) -> IdentResult<()> {
    let prefix = to_int_or_default(text.get(0..9).unwrap_or_default(), 0);
    if (FH_RANGE_START..=FH_RANGE_END).contains(&prefix) {
        Ok(())
    } else {
        Err(IdentError::format(
            IdentityKind::CommonAidNumber,
            "first nine digits must lie in 800000000..=999999999",
        ))
    }
}

fn check_digits(kind: IdentityKind, text: &str) -> IdentResult<()> {
    if has_valid_check_digits(text) {
        Ok(())
    } else {
        Err(IdentError::format(kind, "check digits do not match"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_numbers() {
        assert!(is_valid_birth_number("17054026641"));
        assert!(is_valid_d_number("51106297510"));
        assert!(is_valid_h_number("22495314442"));
        assert!(is_valid_fh_number("81212121223"));
        assert!(is_valid_duf_number("200816832910"));
    }

    #[test]
    fn structure_rejects_wrong_length() {
        let err = validate(IdentityKind::BirthNumber, "1705402664").unwrap_err();
        assert!(err.to_string().contains("expected 11 digits"));
        assert!(!is_valid_duf_number("20081683291"));
    }

    #[test]
    fn structure_rejects_letters() {
        let err = validate(IdentityKind::BirthNumber, "1705402664a").unwrap_err();
        assert!(err.to_string().contains("non-digit"));
        assert!(!is_valid_duf_number("20081683291x"));
    }

    #[test]
    fn notvalid_is_rejected_by_every_kind() {
        for kind in IdentityKind::ALL {
            assert!(!is_valid(kind, "notvalid"), "{kind}");
        }
    }

    #[test]
    fn birth_number_rejects_bad_date() {
        // Month 13
        assert!(!is_valid_birth_number("01130012345"));
        let err = validate(IdentityKind::BirthNumber, "22495314442").unwrap_err();
        assert!(err.to_string().contains("not a valid date"));
    }

    #[test]
    fn birth_number_rejects_bad_check_digits() {
        let err = validate(IdentityKind::BirthNumber, "17054026642").unwrap_err();
        assert!(err.to_string().contains("check digits"));
    }

    #[test]
    fn d_number_requires_offset_first_digit() {
        let err = validate(IdentityKind::DNumber, "17054026641").unwrap_err();
        assert!(err.to_string().contains("digit 1 must be between 4 and 7"));
    }

    #[test]
    fn h_number_requires_offset_third_digit() {
        let err = validate(IdentityKind::HNumber, "17054026641").unwrap_err();
        assert!(err.to_string().contains("digit 3 must be between 4 and 7"));
    }

    #[test]
    fn h_number_skips_check_digits() {
        // Valid date 22.09.53 with arbitrary trailing digits.
        assert!(is_valid_h_number("22495314400"));
    }

    #[test]
    fn fh_number_range() {
        assert!(!is_valid_fh_number("71212121223"));
        let err = validate(IdentityKind::CommonAidNumber, "01030599744").unwrap_err();
        assert!(err.to_string().contains("800000000"));
    }

    #[test]
    fn fh_number_checks_digits() {
        assert!(!is_valid_fh_number("81212121224"));
    }

    #[test]
    fn other_never_validates() {
        assert!(!is_valid(IdentityKind::Other, "17054026641"));
    }
}
