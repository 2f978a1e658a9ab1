//! Norwegian identity numbers.
//!
//! Typed values for the five supported identifier kinds, per-kind validation,
//! classification of free text, and decoding of birthdate and sex from the
//! information-bearing kinds.
//!
//! # Quick Start
//!
//! ```rust
//! use norid_ident::{classify, BirthNumber, InformationBearing};
//! use norid_types::{IdentityKind, Sex};
//!
//! let fnr = BirthNumber::new("17054026641").unwrap();
//! assert_eq!(fnr.sex(), Sex::Female);
//! assert_eq!(fnr.birthdate().unwrap().to_string(), "1940-05-17");
//! assert_eq!(classify("17054026641"), IdentityKind::BirthNumber);
//! ```

pub mod classify;
pub mod decode;
pub mod error;
pub mod number;
pub mod validation;

pub use classify::{classify, code_for, code_for_text};
pub use error::{IdentError, IdentResult};
pub use number::{
    AlienRegistryNumber, BirthNumber, CommonAidNumber, DNumber, Dnr, Duf, Fhn, Fnr, HNumber, Hnr,
    IdentityNumber, InformationBearing, NationalIdentityNumber,
};
pub use validation::{is_valid, validate};
