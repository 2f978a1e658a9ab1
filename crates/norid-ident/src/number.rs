use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use norid_types::{IdentityKind, Sex};
use serde::{Deserialize, Serialize};

use crate::classify::classify;
use crate::decode;
use crate::error::{IdentError, IdentResult};
use crate::validation::validate;

/// Capabilities shared by every Norwegian identity number.
pub trait NationalIdentityNumber {
    /// The validated digit string.
    fn digits(&self) -> &str;

    /// The kind of identifier.
    fn kind(&self) -> IdentityKind;

    /// Three-letter code of the kind.
    fn code(&self) -> &'static str {
        self.kind().code()
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Numbers that encode a birthdate and sex (birth, D- and H-numbers).
///
/// All derived values are computed from the digits on request. The decoding
/// is a pure function of kind and digits; see [`crate::decode`].
///
/// The trait is sealed: only validated numbers of this crate implement it.
///
/// ```compile_fail
/// use norid_ident::{InformationBearing, NationalIdentityNumber};
/// use norid_types::IdentityKind;
///
/// struct Short;
///
/// impl NationalIdentityNumber for Short {
///     fn digits(&self) -> &str { "1" }
///     fn kind(&self) -> IdentityKind { IdentityKind::BirthNumber }
/// }
///
/// impl InformationBearing for Short {}
/// ```
pub trait InformationBearing: NationalIdentityNumber + sealed::Sealed {
    /// Sex from the parity of the ninth digit.
    fn sex(&self) -> Sex {
        Sex::from_digit(self.digits().as_bytes()[decode::SEX_POSITION] - b'0')
    }

    /// The three-digit individual number (positions 7–9).
    fn individual_number(&self) -> u16 {
        decode::individual_number(self.digits()).unwrap_or_default()
    }

    /// Birthdate with the century resolved from the individual number.
    ///
    /// Fails only for leap days the two-digit year check cannot catch, such
    /// as `290200` with an individual number placing it in 1900.
    fn birthdate(&self) -> IdentResult<NaiveDate> {
        decode::birthdate(self.kind(), self.digits())
    }
}

macro_rules! identity_number {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name {
            digits: String,
        }

        impl $name {
            /// The kind every value of this type has.
            pub const KIND: IdentityKind = $kind;

            /// Validate and wrap a digit string.
            pub fn new(text: impl Into<String>) -> IdentResult<Self> {
                let digits = text.into();
                validate(Self::KIND, &digits)?;
                Ok(Self { digits })
            }

            /// The validated digit string.
            pub fn as_str(&self) -> &str {
                &self.digits
            }

            /// Consume and return the digit string.
            pub fn into_string(self) -> String {
                self.digits
            }
        }

        impl NationalIdentityNumber for $name {
            fn digits(&self) -> &str {
                &self.digits
            }

            fn kind(&self) -> IdentityKind {
                Self::KIND
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.digits)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.digits)
            }
        }

        impl FromStr for $name {
            type Err = IdentError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdentError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = IdentError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.digits
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.digits
            }
        }
    };
}

identity_number!(
    /// Fødselsnummer: the 11-digit number assigned to every resident.
    BirthNumber,
    IdentityKind::BirthNumber
);

identity_number!(
    /// D-number: a birth number for temporary residents, with 4 added to
    /// the first digit (born 1 January 1980 gives `410180`).
    DNumber,
    IdentityKind::DNumber
);

identity_number!(
    /// H-number: an auxiliary number with 4 added to the third digit
    /// (born 1 January 1980 gives `014180`).
    HNumber,
    IdentityKind::HNumber
);

identity_number!(
    /// Felles hjelpenummer: a non-information-bearing number whose first nine
    /// digits are a random value in `800000000..=999999999`, followed by two
    /// check digits.
    CommonAidNumber,
    IdentityKind::CommonAidNumber
);

identity_number!(
    /// DUF-number: the 12-digit application number from the alien and
    /// refugee case register. Starts with the application year.
    AlienRegistryNumber,
    IdentityKind::AlienRegistryNumber
);

impl sealed::Sealed for BirthNumber {}
impl sealed::Sealed for DNumber {}
impl sealed::Sealed for HNumber {}

impl InformationBearing for BirthNumber {}
impl InformationBearing for DNumber {}
impl InformationBearing for HNumber {}

impl AlienRegistryNumber {
    /// The year the application was registered (first four digits).
    pub fn application_year(&self) -> u16 {
        self.digits
            .get(0..4)
            .and_then(|year| year.parse().ok())
            .unwrap_or_default()
    }
}

pub type Fnr = BirthNumber;
pub type Dnr = DNumber;
pub type Hnr = HNumber;
pub type Fhn = CommonAidNumber;
pub type Duf = AlienRegistryNumber;

/// Any supported identity number, tagged by kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IdentityNumber {
    Birth(BirthNumber),
    D(DNumber),
    H(HNumber),
    CommonAid(CommonAidNumber),
    AlienRegistry(AlienRegistryNumber),
}

impl IdentityNumber {
    /// Classify `text` and construct the matching typed value.
    pub fn parse(text: &str) -> IdentResult<Self> {
        match classify(text) {
            IdentityKind::Other => Err(IdentError::format(
                IdentityKind::Other,
                "not a recognised Norwegian identity number",
            )),
            kind => Self::parse_as(kind, text),
        }
    }

    /// Construct a value of a specific kind.
    pub fn parse_as(kind: IdentityKind, text: &str) -> IdentResult<Self> {
        Ok(match kind {
            IdentityKind::BirthNumber => Self::Birth(BirthNumber::new(text)?),
            IdentityKind::DNumber => Self::D(DNumber::new(text)?),
            IdentityKind::HNumber => Self::H(HNumber::new(text)?),
            IdentityKind::CommonAidNumber => Self::CommonAid(CommonAidNumber::new(text)?),
            IdentityKind::AlienRegistryNumber => {
                Self::AlienRegistry(AlienRegistryNumber::new(text)?)
            }
            IdentityKind::Other => {
                return Err(IdentError::format(kind, "cannot construct an unknown identifier"))
            }
        })
    }

    /// Sex, for information-bearing kinds.
    pub fn sex(&self) -> Option<Sex> {
        match self {
            Self::Birth(n) => Some(n.sex()),
            Self::D(n) => Some(n.sex()),
            Self::H(n) => Some(n.sex()),
            Self::CommonAid(_) | Self::AlienRegistry(_) => None,
        }
    }

    /// Birthdate, for information-bearing kinds.
    pub fn birthdate(&self) -> IdentResult<Option<NaiveDate>> {
        match self {
            Self::Birth(n) => n.birthdate().map(Some),
            Self::D(n) => n.birthdate().map(Some),
            Self::H(n) => n.birthdate().map(Some),
            Self::CommonAid(_) | Self::AlienRegistry(_) => Ok(None),
        }
    }

    /// Application year, for DUF-numbers.
    pub fn application_year(&self) -> Option<u16> {
        match self {
            Self::AlienRegistry(n) => Some(n.application_year()),
            _ => None,
        }
    }
}

impl NationalIdentityNumber for IdentityNumber {
    fn digits(&self) -> &str {
        match self {
            Self::Birth(n) => n.digits(),
            Self::D(n) => n.digits(),
            Self::H(n) => n.digits(),
            Self::CommonAid(n) => n.digits(),
            Self::AlienRegistry(n) => n.digits(),
        }
    }

    fn kind(&self) -> IdentityKind {
        match self {
            Self::Birth(_) => IdentityKind::BirthNumber,
            Self::D(_) => IdentityKind::DNumber,
            Self::H(_) => IdentityKind::HNumber,
            Self::CommonAid(_) => IdentityKind::CommonAidNumber,
            Self::AlienRegistry(_) => IdentityKind::AlienRegistryNumber,
        }
    }
}

impl fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.digits())
    }
}

impl FromStr for IdentityNumber {
    type Err = IdentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for IdentityNumber {
    type Error = IdentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IdentityNumber> for String {
    fn from(value: IdentityNumber) -> Self {
        value.digits().to_string()
    }
}

impl From<BirthNumber> for IdentityNumber {
    fn from(value: BirthNumber) -> Self {
        Self::Birth(value)
    }
}
