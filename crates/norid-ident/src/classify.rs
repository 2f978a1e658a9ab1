use norid_types::IdentityKind;
use tracing::trace;

use crate::validation::is_valid;

/// Determine which kind of identifier `text` is.
///
/// Kinds are tried in [`IdentityKind::CLASSIFICATION_ORDER`]; the first whose
/// validator accepts the text wins. DUF-numbers are matched on structure
/// alone. Text no validator accepts is [`IdentityKind::Other`].
pub fn classify(text: &str) -> IdentityKind {
    let kind = IdentityKind::CLASSIFICATION_ORDER
        .into_iter()
        .find(|&kind| is_valid(kind, text))
        .unwrap_or(IdentityKind::Other);
    trace!(kind = %kind, len = text.len(), "classified identifier");
    kind
}

/// Short code for a kind (`FNR`, `DNR`, `HNR`, `FHN`, `DUF`, `XXX`).
pub fn code_for(kind: IdentityKind) -> &'static str {
    kind.code()
}

/// Short code for whatever kind `text` classifies as.
pub fn code_for_text(text: &str) -> &'static str {
    code_for(classify(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_codes() {
        assert_eq!(code_for(IdentityKind::Other), "XXX");
        assert_eq!(code_for(IdentityKind::DNumber), "DNR");
    }

    #[test]
    fn classifies_each_kind() {
        assert_eq!(code_for_text("17054026641"), "FNR");
        assert_eq!(code_for_text("51106297510"), "DNR");
        assert_eq!(code_for_text("22495314442"), "HNR");
        assert_eq!(code_for_text("81212121223"), "FHN");
        assert_eq!(code_for_text("200816832910"), "DUF");
        assert_eq!(code_for_text("nothing"), "XXX");
    }

    #[test]
    fn empty_and_whitespace_are_other() {
        assert_eq!(classify(""), IdentityKind::Other);
        assert_eq!(classify("           "), IdentityKind::Other);
    }

    #[test]
    fn any_twelve_digits_are_duf() {
        assert_eq!(classify("000000000000"), IdentityKind::AlienRegistryNumber);
    }

    #[test]
    fn d_number_is_not_a_birth_number() {
        // Day 51 only makes sense with the D-number offset.
        assert_eq!(classify("51106297510"), IdentityKind::DNumber);
        assert_eq!(classify("01030599744"), IdentityKind::BirthNumber);
    }
}
