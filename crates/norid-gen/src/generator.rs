//! Constrained random search for valid birth numbers.
//!
//! Two entry points share one candidate layout (`ddMMyy` + individual number
//! + two check digits):
//!
//! - [`BirthNumberGenerator::generate`] fills the wildcards of a [`Pattern`]
//!   and gives up quietly after a bounded number of attempts.
//! - [`BirthNumberGenerator::generate_in_range`] draws a date from a range
//!   and an individual number matching a [`SexFilter`], retrying until the
//!   check digits resolve or the rejection cap is reached.
//!
//! Randomness is always supplied by the caller.

use chrono::{Duration, NaiveDate};
use norid_checksum::Mod11;
use norid_ident::BirthNumber;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::GeneratorConfig;
use crate::error::{GenerateError, GenerateResult};
use crate::pattern::{
    Pattern, Slot, DATE_POSITIONS, FIRST_CHECK_POSITION, INDIVIDUAL_POSITIONS,
    SECOND_CHECK_POSITION,
};

/// Earliest birthdate the generators will produce.
pub const EARLIEST_DATE: NaiveDate = ymd(1854, 1, 1);

/// Latest birthdate the generators will produce.
pub const LATEST_DATE: NaiveDate = ymd(2039, 12, 31);

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid date literal"),
    }
}

/// Restriction on the sex encoded by a generated number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SexFilter {
    #[default]
    Any,
    Female,
    Male,
}

impl SexFilter {
    /// Draw an individual number in `0..=999` whose parity matches the filter.
    pub fn draw_individual<R: Rng + ?Sized>(self, rng: &mut R) -> u16 {
        match self {
            Self::Any => rng.gen_range(0..1000u16),
            Self::Female => 2 * rng.gen_range(0..500u16),
            Self::Male => 2 * rng.gen_range(0..500u16) + 1,
        }
    }
}

/// Generates synthetic birth numbers.
#[derive(Clone, Debug, Default)]
pub struct BirthNumberGenerator {
    config: GeneratorConfig,
}

impl BirthNumberGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a number matching `pattern` using the configured attempt count.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        pattern: &str,
    ) -> GenerateResult<Option<BirthNumber>> {
        self.generate_with_attempts(rng, pattern, self.config.max_attempts)
    }

    /// Generate a number matching `pattern`, trying at most `max_attempts`
    /// candidates.
    ///
    /// A malformed pattern is an error. Running out of attempts, or a
    /// non-positive `max_attempts`, yields `Ok(None)`.
    pub fn generate_with_attempts<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        pattern: &str,
        max_attempts: i64,
    ) -> GenerateResult<Option<BirthNumber>> {
        let pattern = Pattern::parse(pattern)?;
        Ok(self.generate_matching(rng, &pattern, max_attempts))
    }

    /// Generate any valid birth number.
    pub fn generate_any<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        max_attempts: i64,
    ) -> Option<BirthNumber> {
        self.generate_matching(rng, &Pattern::any(), max_attempts)
    }

    /// Search for a number matching an already validated pattern.
    pub fn generate_matching<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        pattern: &Pattern,
        max_attempts: i64,
    ) -> Option<BirthNumber> {
        for attempt in 1..=max_attempts.max(0) {
            let Some(candidate) = fill_pattern(rng, pattern) else {
                trace!(attempt, "check digit undefined");
                continue;
            };
            match BirthNumber::new(candidate) {
                Ok(number) => {
                    debug!(%pattern, attempt, "generated birth number");
                    return Some(number);
                }
                Err(e) => trace!(attempt, error = %e, "candidate rejected"),
            }
        }
        debug!(%pattern, max_attempts, "no birth number found");
        None
    }

    /// Generate a number born within `from..=to` whose sex matches `sex`.
    ///
    /// Both bounds must lie in [`EARLIEST_DATE`]`..=`[`LATEST_DATE`] and
    /// `from` must not be after `to`. When the first check digit is undefined
    /// the individual number is redrawn; when the second is undefined the
    /// search starts over with a fresh date. After
    /// [`GeneratorConfig::max_range_attempts`] rejected candidates the search
    /// stops with [`GenerateError::Exhausted`].
    pub fn generate_in_range<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        from: NaiveDate,
        to: NaiveDate,
        sex: SexFilter,
    ) -> GenerateResult<BirthNumber> {
        check_range(from, to)?;

        let cap = self.config.max_range_attempts;
        let mut rejected: u32 = 0;
        let mut reject = |stage: &str| {
            rejected += 1;
            trace!(rejected, stage, "check digit undefined");
            if rejected > cap {
                debug!(%from, %to, ?sex, cap, "range search exhausted");
                Err(GenerateError::Exhausted { attempts: cap })
            } else {
                Ok(())
            }
        };

        loop {
            let prefix = random_date(rng, from, to).format("%d%m%y").to_string();

            let mut digits = loop {
                let mut digits = format!("{prefix}{:03}", sex.draw_individual(rng)).into_bytes();
                match Mod11::FIRST.check_char(&digits) {
                    Some(first) => {
                        digits.push(first);
                        break digits;
                    }
                    None => reject("first")?,
                }
            };

            let Some(second) = Mod11::SECOND.check_char(&digits) else {
                reject("second")?;
                continue;
            };
            digits.push(second);

            let number = BirthNumber::new(String::from_utf8_lossy(&digits).into_owned())?;
            debug!(%number, ?sex, "generated birth number in range");
            return Ok(number);
        }
    }
}

fn check_range(from: NaiveDate, to: NaiveDate) -> GenerateResult<()> {
    if from < EARLIEST_DATE {
        return Err(GenerateError::InvalidRange(format!(
            "from date {from} is before {EARLIEST_DATE}"
        )));
    }
    if to > LATEST_DATE {
        return Err(GenerateError::InvalidRange(format!(
            "to date {to} is after {LATEST_DATE}"
        )));
    }
    if from > to {
        return Err(GenerateError::InvalidRange(format!(
            "from date {from} is after to date {to}"
        )));
    }
    Ok(())
}

/// Uniform date in `from..=to`. Callers guarantee `from <= to`.
fn random_date<R: Rng + ?Sized>(rng: &mut R, from: NaiveDate, to: NaiveDate) -> NaiveDate {
    let span = (to - from).num_days();
    from + Duration::days(rng.gen_range(0..=span))
}

fn random_digit<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    b'0' + rng.gen_range(0..10u8)
}

fn fill_slot<R: Rng + ?Sized>(rng: &mut R, slot: Slot) -> u8 {
    match slot {
        Slot::Wildcard => random_digit(rng),
        Slot::Digit(d) => d,
    }
}

/// One candidate for `pattern`, or `None` if a computed check digit is undefined.
///
/// An all-wildcard date is drawn as a real calendar date; a partly fixed date
/// is filled digit by digit and may not be a date at all.
fn fill_pattern<R: Rng + ?Sized>(rng: &mut R, pattern: &Pattern) -> Option<String> {
    let mut digits = Vec::with_capacity(SECOND_CHECK_POSITION + 1);

    if pattern.date_is_open() {
        let date = random_date(rng, EARLIEST_DATE, LATEST_DATE);
        digits.extend_from_slice(date.format("%d%m%y").to_string().as_bytes());
    } else {
        for pos in DATE_POSITIONS {
            digits.push(fill_slot(rng, pattern.slot(pos)));
        }
    }
    for pos in INDIVIDUAL_POSITIONS {
        digits.push(fill_slot(rng, pattern.slot(pos)));
    }

    for (pos, mod11) in [
        (FIRST_CHECK_POSITION, Mod11::FIRST),
        (SECOND_CHECK_POSITION, Mod11::SECOND),
    ] {
        let digit = match pattern.slot(pos) {
            Slot::Digit(d) => d,
            Slot::Wildcard => mod11.check_char(&digits)?,
        };
        digits.push(digit);
    }

    String::from_utf8(digits).ok()
}
