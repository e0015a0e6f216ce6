use crate::bail_out_of_range;
use crate::error::Result;
use crate::graph::types::{NodeId, Weight, WeightedEdge};
use crate::mst::disjoint_set::DisjointSet;
use crate::trace_time;
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Instant;

/// One tree of a spanning forest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    /// Member nodes in merge order
    pub nodes: Vec<NodeId>,
    /// Selected edges in merge order, with their input orientation
    /// (see `destination_first` for the absorbing-side view)
    pub edges: Vec<WeightedEdge>,
}

impl SpanningTree {
    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|edge| edge.weight).sum()
    }

    /// Selected edges as `(to, from, weight)` triples, in merge order:
    /// the endpoint in the absorbing tree first
    pub fn destination_first(&self) -> Vec<(NodeId, NodeId, Weight)> {
        self.edges
            .iter()
            .map(|edge| (edge.to, edge.from, edge.weight))
            .collect()
    }
}

/// Minimum spanning forest: one tree per connected component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpanningForest {
    pub trees: Vec<SpanningTree>,
}

impl SpanningForest {
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.trees.iter().map(|tree| tree.edges.len()).sum()
    }

    pub fn total_weight(&self) -> Weight {
        self.trees.iter().map(SpanningTree::total_weight).sum()
    }
}

/// A tree under construction
///
/// `slot` is the output position inherited from the tree that absorbed
/// the others; deques let either side of a merge be the one that grows.
#[derive(Debug, Default)]
struct TreeBuilder {
    slot: usize,
    nodes: VecDeque<NodeId>,
    edges: VecDeque<WeightedEdge>,
}

impl TreeBuilder {
    fn singleton(node: NodeId) -> Self {
        Self {
            slot: node,
            nodes: VecDeque::from([node]),
            edges: VecDeque::new(),
        }
    }

    /// Merge `other` behind `self`, joined by `edge`:
    /// nodes = self ++ other, edges = self ++ [edge] ++ other
    fn absorb(self, edge: WeightedEdge, other: TreeBuilder) -> Self {
        let mut edges = self.edges;
        edges.push_back(edge);
        Self {
            slot: self.slot,
            nodes: concat(self.nodes, other.nodes),
            edges: concat(edges, other.edges),
        }
    }

    fn build(self) -> SpanningTree {
        SpanningTree {
            nodes: self.nodes.into(),
            edges: self.edges.into(),
        }
    }
}

/// Concatenate two deques, moving only the shorter one
fn concat<T>(mut front: VecDeque<T>, mut back: VecDeque<T>) -> VecDeque<T> {
    if front.len() >= back.len() {
        front.extend(back);
        front
    } else {
        while let Some(item) = front.pop_back() {
            back.push_front(item);
        }
        back
    }
}

/// Kruskal's minimum spanning forest over `0..node_count`
///
/// Edges are taken in ascending weight; equal weights keep edge-list order.
/// An edge whose endpoints already share a tree is discarded. Otherwise the
/// tree holding the edge's destination absorbs the tree holding its source
/// and keeps its output position. Stops once a single tree remains or the
/// edges run out; isolated nodes come back as single-node trees.
#[tracing::instrument(skip(edges), fields(edges = edges.len()))]
pub fn kruskal_forest(node_count: usize, edges: &[WeightedEdge]) -> Result<SpanningForest> {
    for edge in edges {
        if edge.from >= node_count {
            bail_out_of_range!(edge.from, node_count);
        }
        if edge.to >= node_count {
            bail_out_of_range!(edge.to, node_count);
        }
    }
    let timer = Instant::now();

    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by_key(|&index| edges[index].weight);

    let mut sets = DisjointSet::new(node_count);
    let mut trees: Vec<TreeBuilder> = (0..node_count).map(TreeBuilder::singleton).collect();
    let mut discarded = 0usize;

    for index in order {
        if sets.components() <= 1 {
            break;
        }

        let edge = edges[index];
        let dest_root = sets.find(edge.to);
        let source_root = sets.find(edge.from);
        let Some(root) = sets.union(dest_root, source_root) else {
            discarded += 1;
            tracing::trace!(from = edge.from, to = edge.to, "edge closes a cycle");
            continue;
        };

        let dest_tree = std::mem::take(&mut trees[dest_root]);
        let source_tree = std::mem::take(&mut trees[source_root]);
        trees[root] = dest_tree.absorb(edge, source_tree);
    }

    let mut survivors: Vec<TreeBuilder> = (0..node_count)
        .filter(|&node| sets.find(node) == node)
        .map(|root| std::mem::take(&mut trees[root]))
        .collect();
    survivors.sort_by_key(|tree| tree.slot);

    let forest = SpanningForest {
        trees: survivors.into_iter().map(TreeBuilder::build).collect(),
    };

    tracing::debug!(
        trees = forest.len(),
        selected = forest.edge_count(),
        discarded,
        total_weight = forest.total_weight(),
        "kruskal complete"
    );
    trace_time!(timer, "kruskal_forest", trees = forest.len());

    Ok(forest)
}
