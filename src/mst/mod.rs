//! Minimum spanning forests
//!
//! - `disjoint_set`: union-find with path halving and union by size
//! - `kruskal`: Kruskal's algorithm over a flat edge list

pub mod disjoint_set;
pub mod kruskal;

pub use disjoint_set::DisjointSet;
pub use kruskal::{kruskal_forest, SpanningForest, SpanningTree};
