//! Error types for the Monte Carlo engine configuration.

use std::fmt;

use pricer_core::types::PricingError;

/// Configuration error for Monte Carlo pricer.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Worker count must be at least 1.
    InvalidWorkerCount(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWorkerCount(count) => {
                write!(f, "Invalid worker count {}: must be at least 1", count)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidConfig(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidWorkerCount(0);
        assert_eq!(err.to_string(), "Invalid worker count 0: must be at least 1");
    }

    #[test]
    fn test_config_error_into_pricing_error() {
        let err: PricingError = ConfigError::InvalidWorkerCount(0).into();
        assert!(matches!(err, PricingError::InvalidConfig(ref msg) if msg.contains("worker")));
    }
}
