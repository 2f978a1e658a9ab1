//! Text helpers the identity-number validators are built on.
//!
//! Three capabilities only: a meaningful-content check, integer parsing
//! with a fallback, and parsing of Norwegian `dd.MM.yy` dates.

use chrono::NaiveDate;

use crate::error::TypeError;

/// Two-digit years up to and including this value map to 20xx, later ones to 19xx.
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 29;

/// Returns `true` if the text is non-empty and not only whitespace.
pub fn has_content(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Parse the text as an integer, or return `default` if it is not one.
pub fn to_int_or_default(text: &str, default: i64) -> i64 {
    if !has_content(text) {
        return default;
    }
    text.trim().parse().unwrap_or(default)
}

/// Parse a Norwegian `dd.MM.yy` (or `dd.MM.yyyy`) date.
///
/// Two-digit years are expanded around [`TWO_DIGIT_YEAR_PIVOT`]. Fails with
/// [`TypeError::InvalidDate`] if the text is not a real calendar date.
pub fn parse_norwegian_date(text: &str) -> Result<NaiveDate, TypeError> {
    let invalid = || TypeError::InvalidDate(text.to_string());

    let parts: Vec<&str> = text.trim().split('.').collect();
    let [day, month, year] = parts[..] else {
        return Err(invalid());
    };

    let field = |s: &str, widths: &[usize]| -> Option<u32> {
        if widths.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit()) {
            s.parse().ok()
        } else {
            None
        }
    };

    let day = field(day, &[1, 2]).ok_or_else(invalid)?;
    let month = field(month, &[1, 2]).ok_or_else(invalid)?;
    let year = match year.len() {
        2 => {
            let yy = field(year, &[2]).ok_or_else(invalid)? as i32;
            if yy <= TWO_DIGIT_YEAR_PIVOT {
                2000 + yy
            } else {
                1900 + yy
            }
        }
        4 => field(year, &[4]).ok_or_else(invalid)? as i32,
        _ => return Err(invalid()),
    };

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn content_check() {
        assert!(has_content("x"));
        assert!(has_content(" 1 "));
        assert!(!has_content(""));
        assert!(!has_content(" \t\n"));
    }

    #[test]
    fn int_or_default() {
        assert_eq!(to_int_or_default("812121212", 0), 812_121_212);
        assert_eq!(to_int_or_default(" 42 ", 0), 42);
        assert_eq!(to_int_or_default("-7", 0), -7);
        assert_eq!(to_int_or_default("4x", 0), 0);
        assert_eq!(to_int_or_default("", 5), 5);
    }

    #[test]
    fn parses_two_digit_years_around_pivot() {
        assert_eq!(
            parse_norwegian_date("17.05.40").unwrap(),
            NaiveDate::from_ymd_opt(1940, 5, 17).unwrap()
        );
        assert_eq!(
            parse_norwegian_date("01.03.20").unwrap(),
            NaiveDate::from_ymd_opt(2020, 3, 1).unwrap()
        );
        assert_eq!(parse_norwegian_date("31.12.29").unwrap().year(), 2029);
        assert_eq!(parse_norwegian_date("01.01.30").unwrap().year(), 1930);
    }

    #[test]
    fn parses_four_digit_years() {
        assert_eq!(
            parse_norwegian_date("1.3.1856").unwrap(),
            NaiveDate::from_ymd_opt(1856, 3, 1).unwrap()
        );
    }

    #[test]
    fn leap_day_in_year_two_thousand() {
        assert!(parse_norwegian_date("29.02.00").is_ok());
        assert!(parse_norwegian_date("29.02.01").is_err());
    }

    #[test]
    fn rejects_non_dates() {
        for text in ["", "22.49.53", "32.01.80", "00.01.80", "aa.bb.cc", "01.01", "01-01-80", "01.01.980"] {
            assert_eq!(
                parse_norwegian_date(text),
                Err(TypeError::InvalidDate(text.to_string())),
                "{text}"
            );
        }
    }
}
