//! CLI error types

use pricer_core::types::PricingError;
use pricer_models::analytical::AnalyticalError;
use pricer_pricing::mc::ConfigError;
use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Engine configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Monte Carlo pricing error, including parameter validation
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Closed-form pricing error
    #[error("Analytical pricing error: {0}")]
    Analytical(#[from] AnalyticalError),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Output serialisation error
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::ValidationError;

    #[test]
    fn test_validation_message_names_field() {
        let err = CliError::from(PricingError::from(ValidationError::NegativeVolatility(-0.1)));
        let msg = err.to_string();
        assert!(msg.starts_with("Pricing error: "));
        assert!(msg.contains("volatility"));
    }

    #[test]
    fn test_engine_config_error() {
        let err = CliError::from(ConfigError::InvalidWorkerCount(0));
        assert!(err.to_string().contains("worker count"));
    }
}
