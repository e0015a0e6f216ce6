//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first traversal with hop counts
//! - `dfs`: Depth-first traversal and topological ordering
//! - `dag`: Shortest paths on acyclic graphs by topological relaxation
//! - `dijkstra`: Shortest paths with a priority frontier
//! - `shared`: Common validation and bookkeeping used by multiple algorithms

pub mod bfs;
pub mod dag;
pub mod dfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::bfs_traverse;
pub use dag::dag_shortest_paths;
pub use dfs::{dfs_topological_order, dfs_traverse};
pub use dijkstra::dijkstra_traverse;
