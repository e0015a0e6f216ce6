//! Combopt Library
//!
//! Classical graph and combinatorial-optimization algorithms over in-memory
//! inputs: BFS, DFS with topological ordering, DAG relaxation, Dijkstra,
//! Kruskal spanning forests, and 0/1 and unbounded knapsack programs.

pub mod config;
pub mod error;
pub mod graph;
pub mod knapsack;
pub mod logging;
pub mod mst;

pub use config::{GraphConfig, KnapsackConfig, SolverConfig};
pub use error::{CombOptError, ErrorCategory, Result};
