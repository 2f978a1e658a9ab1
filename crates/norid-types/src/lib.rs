//! Foundation types for Norwegian identity numbers.
//!
//! This crate provides the small, dependency-light vocabulary shared by the
//! other `norid` crates: the closed set of identifier kinds and their short
//! codes, the sex encoded in information-bearing numbers, and the text and
//! date helpers the validators are built on.
//!
//! # Key Types
//!
//! - [`IdentityKind`] — Birth number, D-number, H-number, FH-number, DUF-number or other
//! - [`Sex`] — Female/male as encoded by the parity of the ninth digit
//! - [`text`] — Content checks, lenient integer parsing, Norwegian date parsing

pub mod error;
pub mod kind;
pub mod sex;
pub mod text;

pub use error::TypeError;
pub use kind::IdentityKind;
pub use sex::Sex;
pub use text::{has_content, parse_norwegian_date, to_int_or_default};
