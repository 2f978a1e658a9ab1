use serde::{Deserialize, Serialize};

/// Default number of attempts for pattern-based generation.
pub const DEFAULT_MAX_ATTEMPTS: i64 = 1000;

/// Default cap on rejected candidates for range-based generation.
pub const DEFAULT_MAX_RANGE_ATTEMPTS: u32 = 10_000;

/// Configuration for the birth number generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Attempts used by pattern generation when the caller does not pass a
    /// count. Zero or negative means no attempts are made.
    pub max_attempts: i64,
    /// How many rejected candidates range generation tolerates before it
    /// reports [`crate::GenerateError::Exhausted`].
    pub max_range_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_range_attempts: DEFAULT_MAX_RANGE_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    /// Override the pattern attempt count.
    pub fn with_max_attempts(mut self, max_attempts: i64) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Override the range rejection cap.
    pub fn with_max_range_attempts(mut self, max_range_attempts: u32) -> Self {
        self.max_range_attempts = max_range_attempts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = GeneratorConfig::default();
        assert_eq!(c.max_attempts, 1000);
        assert_eq!(c.max_range_attempts, 10_000);
    }

    #[test]
    fn builders() {
        let c = GeneratorConfig::default()
            .with_max_attempts(5)
            .with_max_range_attempts(7);
        assert_eq!(c.max_attempts, 5);
        assert_eq!(c.max_range_attempts, 7);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let c: GeneratorConfig = toml::from_str("max_attempts = 50").unwrap();
        assert_eq!(c.max_attempts, 50);
        assert_eq!(c.max_range_attempts, DEFAULT_MAX_RANGE_ATTEMPTS);
    }

    #[test]
    fn empty_toml_is_default() {
        let c: GeneratorConfig = toml::from_str("").unwrap();
        assert_eq!(c, GeneratorConfig::default());
    }
}
