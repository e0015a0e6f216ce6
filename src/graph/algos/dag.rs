use crate::error::{CombOptError, Result};
use crate::graph::algos::dfs::dfs_topological_order;
use crate::graph::algos::shared::{is_empty_graph, reached_count};
use crate::graph::traversal::Adjacency;
use crate::graph::types::{NodeId, ShortestPaths, Weight};
use crate::trace_time;
use std::time::Instant;

/// Single-source shortest paths on a DAG, negative weights allowed
///
/// Relaxes the outgoing edges of each reachable node exactly once, in
/// topological order, so a node's distance is final by the time it is
/// processed. Edge `(u, v, w)` updates `v` when `v` is unreached or
/// `distance[u] + w < distance[v]`; ties keep the earlier predecessor.
/// A cycle reachable from `start` fails with `CycleDetected`, and a path
/// cost outside the `Weight` range fails with `DistanceOverflow`.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn dag_shortest_paths(graph: &dyn Adjacency, start: NodeId) -> Result<ShortestPaths> {
    if is_empty_graph(graph) {
        return Ok(ShortestPaths::empty(start));
    }
    let order = dfs_topological_order(graph, start)?;
    let timer = Instant::now();

    let node_count = graph.node_count();
    let mut predecessors = vec![None; node_count];
    let mut distances: Vec<Option<Weight>> = vec![None; node_count];
    distances[start] = Some(0);

    for &node in &order {
        // Every node in the order is reachable through earlier nodes
        let Some(base) = distances[node] else {
            continue;
        };

        for &(neighbor, weight) in graph.neighbors(node) {
            let candidate = base
                .checked_add(weight)
                .ok_or(CombOptError::DistanceOverflow { node: neighbor })?;
            if distances[neighbor].is_none_or(|current| candidate < current) {
                distances[neighbor] = Some(candidate);
                predecessors[neighbor] = Some(node);
            }
        }
    }

    let reached = reached_count(&distances);
    tracing::debug!(reached, "dag relaxation complete");
    trace_time!(timer, "dag_shortest_paths", reached = reached);

    Ok(ShortestPaths {
        start,
        predecessors,
        distances,
    })
}
