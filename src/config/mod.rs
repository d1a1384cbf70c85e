// src/config/mod.rs

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Factorizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorizerConfig {
    /// Number of worker threads for the parallel scan (None: CPU count)
    #[serde(default)]
    pub threads: Option<usize>,

    /// Minimum number of candidates per worker chunk
    #[serde(default = "default_min_chunk_size")]
    pub min_chunk_size: u64,

    /// Logging level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_min_chunk_size() -> u64 {
    4096
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for FactorizerConfig {
    fn default() -> Self {
        FactorizerConfig {
            threads: None, // Use the CPU count
            min_chunk_size: default_min_chunk_size(),
            log_level: default_log_level(),
        }
    }
}

impl FactorizerConfig {
    /// Load configuration with precedence: defaults → config file → env vars
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("min_chunk_size", 4096)?
            .set_default("log_level", "info")?;

        if Path::new("factor.toml").exists() {
            builder = builder.add_source(File::with_name("factor.toml"));
        }

        // Override with environment variables (prefix: FACTOR_)
        builder = builder.add_source(Environment::with_prefix("FACTOR").try_parsing(true));

        let config = builder.build()?;
        config.try_deserialize()
    }
}
