//! Graph traversal and shortest-path operations
//!
//! Provides graph algorithms over a dense-id adjacency structure:
//! - BFS and DFS traversal producing predecessor arrays
//! - Topological relaxation for shortest paths on DAGs
//! - Dijkstra for non-negative weighted shortest paths
//! - Adjacency provider trait for pluggable graph storage

pub mod adjacency;
pub mod algos;
pub mod path;
pub mod traversal;
pub mod types;

pub use adjacency::AdjacencyList;
pub use algos::{
    bfs_traverse, dag_shortest_paths, dfs_topological_order, dfs_traverse, dijkstra_traverse,
};
pub use path::reconstruct_path;
pub use traversal::Adjacency;
pub use types::{BfsResult, DfsResult, NodeId, NodeState, ShortestPaths, Weight, WeightedEdge};
