//! Error types for combopt
//!
//! Every fault surfaced by the library is a violated precondition or a
//! malformed argument, reported instead of panicking:
//! - Precondition: out-of-range node ids, negative weights, cycles, path
//!   costs leaving the `Weight` range
//! - InvalidArgument: malformed knapsack items or values too large to sum
//! - Resource: enumeration tables growing past a configured cap
//! - Config: failures loading or saving a `SolverConfig`

mod macros;

use crate::graph::types::{NodeId, Weight};
use thiserror::Error;

/// Broad classification of a `CombOptError`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input violates a documented precondition of the algorithm
    Precondition,
    /// An argument is malformed (zero weight item, etc.)
    InvalidArgument,
    /// A configured resource bound was exceeded
    Resource,
    /// Configuration could not be read or written
    Config,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Precondition => "precondition",
            ErrorCategory::InvalidArgument => "invalid_argument",
            ErrorCategory::Resource => "resource",
            ErrorCategory::Config => "config",
        }
    }
}

/// Errors that can occur during combopt operations
#[derive(Error, Debug)]
pub enum CombOptError {
    // Precondition violations
    #[error("node {node} out of range (graph has {node_count} nodes)")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    #[error("negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: Weight,
    },

    #[error("cycle detected through node {node}")]
    CycleDetected { node: NodeId },

    #[error("path cost to node {node} overflows the weight range")]
    DistanceOverflow { node: NodeId },

    // Malformed arguments
    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("total value at capacity {capacity} overflows")]
    ValueOverflow { capacity: usize },

    // Resource bounds
    #[error("enumeration at capacity {capacity} exceeded {limit} combinations")]
    EnumerationLimit { capacity: usize, limit: usize },

    // Configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl CombOptError {
    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        CombOptError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a node id outside `0..node_count`
    pub fn node_out_of_range(node: NodeId, node_count: usize) -> Self {
        CombOptError::NodeOutOfRange { node, node_count }
    }

    /// Get the category of this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            CombOptError::NodeOutOfRange { .. }
            | CombOptError::NegativeWeight { .. }
            | CombOptError::CycleDetected { .. }
            | CombOptError::DistanceOverflow { .. } => ErrorCategory::Precondition,

            CombOptError::InvalidValue { .. } | CombOptError::ValueOverflow { .. } => {
                ErrorCategory::InvalidArgument
            }

            CombOptError::EnumerationLimit { .. } => ErrorCategory::Resource,

            CombOptError::Io(_) | CombOptError::Toml(_) | CombOptError::TomlSerialize(_) => {
                ErrorCategory::Config
            }
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            CombOptError::NodeOutOfRange { .. } => "node_out_of_range",
            CombOptError::NegativeWeight { .. } => "negative_weight",
            CombOptError::CycleDetected { .. } => "cycle_detected",
            CombOptError::DistanceOverflow { .. } => "distance_overflow",
            CombOptError::InvalidValue { .. } => "invalid_value",
            CombOptError::ValueOverflow { .. } => "value_overflow",
            CombOptError::EnumerationLimit { .. } => "enumeration_limit",
            CombOptError::Io(_) => "io_error",
            CombOptError::Toml(_) => "toml_error",
            CombOptError::TomlSerialize(_) => "toml_serialize_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "category": self.category().as_str(),
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for combopt operations
pub type Result<T> = std::result::Result<T, CombOptError>;
