//! Owned adjacency-list graph
//!
//! A convenience container for callers that hold a flat edge list. The
//! traversal routines only depend on the `Adjacency` trait.

use crate::bail_out_of_range;
use crate::error::Result;
use crate::graph::traversal::Adjacency;
use crate::graph::types::{NodeId, Weight, WeightedEdge};

/// Directed graph stored as one ordered neighbor list per node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    lists: Vec<Vec<(NodeId, Weight)>>,
}

impl AdjacencyList {
    /// Create a graph with `node_count` isolated nodes
    pub fn new(node_count: usize) -> Self {
        Self {
            lists: vec![Vec::new(); node_count],
        }
    }

    /// Append a directed edge; neighbors keep insertion order
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<()> {
        let node_count = self.lists.len();
        if from >= node_count {
            bail_out_of_range!(from, node_count);
        }
        if to >= node_count {
            bail_out_of_range!(to, node_count);
        }
        self.lists[from].push((to, weight));
        Ok(())
    }

    /// Build from `(from, to, weight)` triples
    pub fn from_edges(node_count: usize, edges: &[(NodeId, NodeId, Weight)]) -> Result<Self> {
        let mut graph = Self::new(node_count);
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Build from `(from, to)` pairs, each with unit weight
    pub fn from_unweighted_edges(node_count: usize, edges: &[(NodeId, NodeId)]) -> Result<Self> {
        let mut graph = Self::new(node_count);
        for &(from, to) in edges {
            graph.add_edge(from, to, 1)?;
        }
        Ok(graph)
    }

    pub fn edge_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    /// Flatten into edges, ordered by source node then neighbor order
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.lists.iter().enumerate().flat_map(|(from, neighbors)| {
            neighbors
                .iter()
                .map(move |&(to, weight)| WeightedEdge::new(from, to, weight))
        })
    }
}

impl Adjacency for AdjacencyList {
    fn node_count(&self) -> usize {
        self.lists.len()
    }

    fn neighbors(&self, node: NodeId) -> &[(NodeId, Weight)] {
        &self.lists[node]
    }
}

impl From<Vec<Vec<(NodeId, Weight)>>> for AdjacencyList {
    fn from(lists: Vec<Vec<(NodeId, Weight)>>) -> Self {
        Self { lists }
    }
}
