//! CLI configuration loading
//!
//! Loads defaults for `mcprice` from a TOML file:
//!
//! ```toml
//! [general]
//! log_level = "info"
//!
//! [pricing]
//! default_num_paths = 1000000
//! default_steps = 252
//! num_threads = 8
//! antithetic = false
//! seed = 42
//! ```
//!
//! Every key is optional; a missing file means all defaults.

use serde::Deserialize;
use std::path::Path;

use crate::{CliError, Result};

/// CLI configuration
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct CliConfig {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Pricing settings
    #[serde(default)]
    pub pricing: PricingConfig,
}

/// General CLI settings
#[derive(Debug, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Pricing configuration
#[derive(Debug, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Default number of Monte Carlo paths
    #[serde(default = "default_num_paths")]
    pub default_num_paths: usize,

    /// Default number of time steps
    #[serde(default = "default_steps")]
    pub default_steps: usize,

    /// Number of worker streams for parallel pricing
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,

    /// Use antithetic sampling unless overridden
    #[serde(default)]
    pub antithetic: bool,

    /// Base seed; unset means a fresh seed per run
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_num_paths: default_num_paths(),
            default_steps: default_steps(),
            num_threads: default_num_threads(),
            antithetic: false,
            seed: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_num_paths() -> usize {
    1_000_000
}

fn default_steps() -> usize {
    252
}

fn default_num_threads() -> usize {
    num_cpus::get()
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            // Return default config if file doesn't exist
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CliError::Parse(format!("Failed to parse config: {}", e)))
    }
}
