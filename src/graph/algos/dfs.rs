use crate::error::{CombOptError, Result};
use crate::graph::algos::shared::{fresh_arrays, is_empty_graph, validate_traversal};
use crate::graph::traversal::Adjacency;
use crate::graph::types::{DfsResult, NodeId, NodeState};
use crate::trace_time;
use std::time::Instant;

/// Depth-first traversal from `start` with a LIFO frontier
///
/// Neighbors are pushed in reverse adjacency order so they pop in original
/// order. A node is pushed only while `Unvisited`, so it sits on the stack
/// at most once and keeps the predecessor that pushed it. `visit_order`
/// records nodes as they are popped and finalized. Weights are ignored.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn dfs_traverse(graph: &dyn Adjacency, start: NodeId) -> Result<DfsResult> {
    if is_empty_graph(graph) {
        return Ok(DfsResult::empty(start));
    }
    validate_traversal(graph, start)?;
    let timer = Instant::now();

    let (mut states, mut predecessors, _) = fresh_arrays::<()>(graph.node_count());
    let mut visit_order = Vec::new();
    let mut stack = vec![start];
    states[start] = NodeState::Frontier;

    while let Some(current) = stack.pop() {
        for &(neighbor, _) in graph.neighbors(current).iter().rev() {
            if states[neighbor] == NodeState::Unvisited {
                states[neighbor] = NodeState::Frontier;
                predecessors[neighbor] = Some(current);
                stack.push(neighbor);
            }
        }

        states[current] = NodeState::Done;
        visit_order.push(current);
    }

    tracing::debug!(reached = visit_order.len(), "dfs complete");
    trace_time!(timer, "dfs_traverse", reached = visit_order.len());

    Ok(DfsResult {
        start,
        predecessors,
        visit_order,
    })
}

/// Topological order of the nodes reachable from `start`
///
/// Reverse post-order of a depth-first walk that explores neighbors in
/// adjacency order: every edge between reachable nodes points from an
/// earlier to a later entry. Fails with `CycleDetected` on a back edge.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn dfs_topological_order(graph: &dyn Adjacency, start: NodeId) -> Result<Vec<NodeId>> {
    if is_empty_graph(graph) {
        return Ok(Vec::new());
    }
    validate_traversal(graph, start)?;

    // Frontier marks nodes on the current walk; Done marks finished subtrees
    let mut states = vec![NodeState::Unvisited; graph.node_count()];
    let mut post_order = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = vec![(start, 0)];
    states[start] = NodeState::Frontier;

    while let Some((node, next)) = stack.last_mut() {
        let node = *node;
        match graph.neighbors(node).get(*next) {
            Some(&(neighbor, _)) => {
                *next += 1;
                match states[neighbor] {
                    NodeState::Unvisited => {
                        states[neighbor] = NodeState::Frontier;
                        stack.push((neighbor, 0));
                    }
                    NodeState::Frontier => {
                        tracing::debug!(node = neighbor, "back edge found");
                        return Err(CombOptError::CycleDetected { node: neighbor });
                    }
                    NodeState::Done => {}
                }
            }
            None => {
                states[node] = NodeState::Done;
                post_order.push(node);
                stack.pop();
            }
        }
    }

    post_order.reverse();
    Ok(post_order)
}
