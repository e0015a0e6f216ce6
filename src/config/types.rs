//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Solver configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Graph routine configuration
    #[serde(default)]
    pub graph: GraphConfig,

    /// Knapsack routine configuration
    #[serde(default)]
    pub knapsack: KnapsackConfig,
}

/// Configuration for graph traversal and shortest paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Reject negative edge weights before running Dijkstra
    #[serde(default = "default_validate_weights")]
    pub validate_weights: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            validate_weights: default_validate_weights(),
        }
    }
}

/// Configuration for the knapsack engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnapsackConfig {
    /// Maximum number of combinations held at any single capacity
    /// by the enumeration variants (unbounded when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_combinations: Option<usize>,
}

fn default_validate_weights() -> bool {
    true
}
