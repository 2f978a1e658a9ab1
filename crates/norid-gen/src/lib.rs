//! Synthetic Norwegian birth numbers.
//!
//! Numbers are produced either from a wildcard [`Pattern`] with a bounded
//! number of attempts, or from a birthdate range plus a [`SexFilter`]. The
//! random source is always passed in by the caller, so a seeded RNG gives
//! reproducible output.
//!
//! ```rust
//! use norid_gen::{BirthNumberGenerator, SexFilter, EARLIEST_DATE, LATEST_DATE};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let generator = BirthNumberGenerator::default();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let number = generator.generate(&mut rng, "??12???????").unwrap();
//! assert!(number.is_some_and(|n| &n.as_str()[2..4] == "12"));
//!
//! let number = generator
//!     .generate_in_range(&mut rng, EARLIEST_DATE, LATEST_DATE, SexFilter::Female)
//!     .unwrap();
//! assert_eq!(number.as_str().as_bytes()[8] % 2, 0);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod pattern;

pub use config::{GeneratorConfig, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_RANGE_ATTEMPTS};
pub use error::{GenerateError, GenerateResult};
pub use generator::{BirthNumberGenerator, SexFilter, EARLIEST_DATE, LATEST_DATE};
pub use pattern::{Pattern, Slot, WILDCARD};
