use crate::config::GraphConfig;
use crate::error::{CombOptError, Result};
use crate::graph::algos::shared::{
    check_non_negative, fresh_arrays, is_empty_graph, reached_count, validate_traversal,
};
use crate::graph::traversal::Adjacency;
use crate::graph::types::{NodeId, NodeState, ShortestPaths, Weight};
use crate::trace_time;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Instant;

/// Wrapper for BinaryHeap to use as min-heap (ordered by distance, then node id)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub node: NodeId,
    pub distance: Weight,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// State tracked during Dijkstra traversal
struct DijkstraState {
    states: Vec<NodeState>,
    predecessors: Vec<Option<NodeId>>,
    distances: Vec<Option<Weight>>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    stale_pops: usize,
}

impl DijkstraState {
    fn new(node_count: usize) -> Self {
        let (states, predecessors, distances) = fresh_arrays(node_count);
        Self {
            states,
            predecessors,
            distances,
            heap: BinaryHeap::new(),
            stale_pops: 0,
        }
    }

    fn push(&mut self, node: NodeId, distance: Weight) {
        self.states[node] = NodeState::Frontier;
        self.heap.push(Reverse(HeapEntry { node, distance }));
    }

    /// Pop the closest frontier node, skipping entries left behind by later
    /// improvements to the same node
    fn pop(&mut self) -> Option<HeapEntry> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            let current = self.distances[entry.node];
            if self.states[entry.node] == NodeState::Done || current != Some(entry.distance) {
                self.stale_pops += 1;
                continue;
            }
            return Some(entry);
        }
        None
    }

    /// Relax edge `from -> to`, pushing `to` again when it improves
    fn relax(&mut self, from: NodeId, base: Weight, to: NodeId, weight: Weight) -> Result<()> {
        if self.states[to] == NodeState::Done {
            return Ok(());
        }
        let candidate = base
            .checked_add(weight)
            .ok_or(CombOptError::DistanceOverflow { node: to })?;
        if self.distances[to].is_none_or(|current| current > candidate) {
            self.distances[to] = Some(candidate);
            self.predecessors[to] = Some(from);
            self.push(to, candidate);
            tracing::trace!(from, to, distance = candidate, "relaxed");
        }
        Ok(())
    }
}

/// Single-source shortest paths for non-negative edge weights
///
/// Uses a min-priority frontier keyed on the best known distance. Each node
/// is finalized on its first valid extraction and never revisited; an
/// improvement pushes a fresh entry and the superseded one is dropped when
/// popped. With `validate_weights` on, a negative weight fails fast with
/// `NegativeWeight`; with it off, the result is unspecified for such graphs.
/// Path costs past `Weight::MAX` fail with `DistanceOverflow`.
#[tracing::instrument(
    skip(graph, opts),
    fields(nodes = graph.node_count(), validate = opts.validate_weights)
)]
pub fn dijkstra_traverse(
    graph: &dyn Adjacency,
    start: NodeId,
    opts: &GraphConfig,
) -> Result<ShortestPaths> {
    if is_empty_graph(graph) {
        return Ok(ShortestPaths::empty(start));
    }
    validate_traversal(graph, start)?;
    if opts.validate_weights {
        check_non_negative(graph)?;
    }
    let timer = Instant::now();

    let mut state = DijkstraState::new(graph.node_count());
    state.distances[start] = Some(0);
    state.push(start, 0);

    while let Some(HeapEntry { node, distance }) = state.pop() {
        state.states[node] = NodeState::Done;

        for &(neighbor, weight) in graph.neighbors(node) {
            state.relax(node, distance, neighbor, weight)?;
        }
    }

    let reached = reached_count(&state.distances);
    tracing::debug!(reached, stale_pops = state.stale_pops, "dijkstra complete");
    trace_time!(timer, "dijkstra_traverse", reached = reached);

    Ok(ShortestPaths {
        start,
        predecessors: state.predecessors,
        distances: state.distances,
    })
}
