use crate::error::Result;
use crate::graph::algos::shared::{
    fresh_arrays, is_empty_graph, reached_count, validate_traversal,
};
use crate::graph::traversal::Adjacency;
use crate::graph::types::{BfsResult, NodeId, NodeState};
use crate::trace_time;
use std::collections::VecDeque;
use std::time::Instant;

/// Breadth-first traversal from `start`
///
/// Visits reachable nodes in non-decreasing hop count, ignoring edge
/// weights. A neighbor is enqueued only while `Unvisited`, so each node
/// joins the frontier once and keeps the predecessor that discovered it
/// first. Hop counts are only shortest-path distances when every edge
/// costs the same; use Dijkstra otherwise. A graph with no nodes yields an
/// empty result.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn bfs_traverse(graph: &dyn Adjacency, start: NodeId) -> Result<BfsResult> {
    if is_empty_graph(graph) {
        return Ok(BfsResult::empty(start));
    }
    validate_traversal(graph, start)?;
    let timer = Instant::now();

    let (mut states, mut predecessors, mut distances) = fresh_arrays::<u32>(graph.node_count());
    let mut queue = VecDeque::new();

    states[start] = NodeState::Frontier;
    distances[start] = Some(0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let hops = distances[current].unwrap_or_default() + 1;

        for &(neighbor, _) in graph.neighbors(current) {
            if states[neighbor] == NodeState::Unvisited {
                states[neighbor] = NodeState::Frontier;
                predecessors[neighbor] = Some(current);
                distances[neighbor] = Some(hops);
                queue.push_back(neighbor);
            }
        }

        states[current] = NodeState::Done;
    }

    let reached = reached_count(&distances);
    tracing::debug!(reached, "bfs complete");
    trace_time!(timer, "bfs_traverse", reached = reached);

    Ok(BfsResult {
        start,
        predecessors,
        distances,
    })
}
