//! Solver configuration for combopt
//!
//! Configuration is plain TOML with optional `[graph]` and `[knapsack]`
//! tables; every key falls back to its default when omitted.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::Result;

pub use types::{GraphConfig, KnapsackConfig, SolverConfig};

impl SolverConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            validate_weights = config.graph.validate_weights,
            max_combinations = ?config.knapsack.max_combinations,
            "loaded solver config"
        );
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
