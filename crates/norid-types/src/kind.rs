use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The closed set of Norwegian identifier kinds.
///
/// Short codes follow the "ID-type for personer" code list (OID 8116).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IdentityKind {
    /// Fødselsnummer: the ordinary 11-digit birth number.
    BirthNumber,
    /// D-number: birth number with +4 on the first digit.
    DNumber,
    /// H-number: birth number with +4 on the third digit.
    HNumber,
    /// Felles hjelpenummer: non-information-bearing aid number (800000000..=999999999 prefix).
    CommonAidNumber,
    /// DUF-number: 12-digit alien registry application number.
    AlienRegistryNumber,
    /// Anything that matches none of the above.
    Other,
}

impl IdentityKind {
    /// Every kind, in declaration order.
    pub const ALL: [IdentityKind; 6] = [
        Self::BirthNumber,
        Self::DNumber,
        Self::HNumber,
        Self::CommonAidNumber,
        Self::AlienRegistryNumber,
        Self::Other,
    ];

    /// Priority order used when classifying free text. The first kind whose
    /// validator accepts the text wins.
    pub const CLASSIFICATION_ORDER: [IdentityKind; 5] = [
        Self::BirthNumber,
        Self::DNumber,
        Self::HNumber,
        Self::AlienRegistryNumber,
        Self::CommonAidNumber,
    ];

    /// Three-letter code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BirthNumber => "FNR",
            Self::DNumber => "DNR",
            Self::HNumber => "HNR",
            Self::CommonAidNumber => "FHN",
            Self::AlienRegistryNumber => "DUF",
            Self::Other => "XXX",
        }
    }

    /// Parse a three-letter code back into a kind.
    pub fn from_code(code: &str) -> Result<Self, TypeError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code().eq_ignore_ascii_case(code.trim()))
            .ok_or_else(|| TypeError::UnknownKindCode(code.to_string()))
    }

    /// Number of digits an identifier of this kind carries.
    /// `None` for [`IdentityKind::Other`].
    pub fn digit_count(&self) -> Option<usize> {
        match self {
            Self::BirthNumber | Self::DNumber | Self::HNumber | Self::CommonAidNumber => Some(11),
            Self::AlienRegistryNumber => Some(12),
            Self::Other => None,
        }
    }

    /// Returns `true` if numbers of this kind encode a birthdate and sex.
    pub fn is_information_bearing(&self) -> bool {
        matches!(self, Self::BirthNumber | Self::DNumber | Self::HNumber)
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BirthNumber => "birth number",
            Self::DNumber => "D-number",
            Self::HNumber => "H-number",
            Self::CommonAidNumber => "FH-number",
            Self::AlienRegistryNumber => "DUF-number",
            Self::Other => "unknown identifier",
        }
    }
}

impl fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for IdentityKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_code_list() {
        assert_eq!(IdentityKind::BirthNumber.code(), "FNR");
        assert_eq!(IdentityKind::DNumber.code(), "DNR");
        assert_eq!(IdentityKind::HNumber.code(), "HNR");
        assert_eq!(IdentityKind::CommonAidNumber.code(), "FHN");
        assert_eq!(IdentityKind::AlienRegistryNumber.code(), "DUF");
        assert_eq!(IdentityKind::Other.code(), "XXX");
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<_> = IdentityKind::ALL.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), IdentityKind::ALL.len());
    }

    #[test]
    fn from_code_roundtrip() {
        for kind in IdentityKind::ALL {
            assert_eq!(IdentityKind::from_code(kind.code()).unwrap(), kind);
        }
    }

    #[test]
    fn from_code_is_case_insensitive() {
        assert_eq!("dnr".parse::<IdentityKind>().unwrap(), IdentityKind::DNumber);
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(
            IdentityKind::from_code("ABC"),
            Err(TypeError::UnknownKindCode("ABC".into()))
        );
    }

    #[test]
    fn classification_order_puts_duf_before_fh() {
        let order = IdentityKind::CLASSIFICATION_ORDER;
        assert_eq!(order[0], IdentityKind::BirthNumber);
        assert_eq!(order[3], IdentityKind::AlienRegistryNumber);
        assert_eq!(order[4], IdentityKind::CommonAidNumber);
        assert!(!order.contains(&IdentityKind::Other));
    }

    #[test]
    fn digit_counts() {
        assert_eq!(IdentityKind::BirthNumber.digit_count(), Some(11));
        assert_eq!(IdentityKind::AlienRegistryNumber.digit_count(), Some(12));
        assert_eq!(IdentityKind::Other.digit_count(), None);
    }

    #[test]
    fn display_uses_code() {
        assert_eq!(format!("{}", IdentityKind::HNumber), "HNR");
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&IdentityKind::CommonAidNumber).unwrap();
        let parsed: IdentityKind = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, IdentityKind::CommonAidNumber);
    }
}
