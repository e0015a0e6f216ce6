use crate::bail_out_of_range;
use crate::error::{CombOptError, Result};
use crate::graph::traversal::Adjacency;
use crate::graph::types::{NodeId, NodeState};

/// Whether the graph has no nodes, which every traversal answers with an
/// empty result before looking at `start`
pub fn is_empty_graph(graph: &dyn Adjacency) -> bool {
    graph.node_count() == 0
}

/// Check that `start` names a node of the graph
pub fn check_start(graph: &dyn Adjacency, start: NodeId) -> Result<()> {
    let node_count = graph.node_count();
    if start >= node_count {
        bail_out_of_range!(start, node_count);
    }
    Ok(())
}

/// Check that every neighbor id lies inside the graph
pub fn check_neighbors(graph: &dyn Adjacency) -> Result<()> {
    let node_count = graph.node_count();
    for node in 0..node_count {
        if let Some(&(neighbor, _)) = graph
            .neighbors(node)
            .iter()
            .find(|(neighbor, _)| *neighbor >= node_count)
        {
            bail_out_of_range!(neighbor, node_count);
        }
    }
    Ok(())
}

/// Validate the start node and adjacency before a traversal
pub fn validate_traversal(graph: &dyn Adjacency, start: NodeId) -> Result<()> {
    check_start(graph, start)?;
    check_neighbors(graph)
}

/// Reject the first negative edge weight found, in adjacency order
pub fn check_non_negative(graph: &dyn Adjacency) -> Result<()> {
    for from in 0..graph.node_count() {
        for &(to, weight) in graph.neighbors(from) {
            if weight < 0 {
                return Err(CombOptError::NegativeWeight { from, to, weight });
            }
        }
    }
    Ok(())
}

/// Node states, predecessors, and one value slot per node
pub type TraversalArrays<T> = (Vec<NodeState>, Vec<Option<NodeId>>, Vec<Option<T>>);

/// Fresh per-call traversal arrays
pub fn fresh_arrays<T: Clone>(node_count: usize) -> TraversalArrays<T> {
    (
        vec![NodeState::Unvisited; node_count],
        vec![None; node_count],
        vec![None; node_count],
    )
}

/// Count nodes that carry a value
pub fn reached_count<T>(values: &[Option<T>]) -> usize {
    values.iter().filter(|value| value.is_some()).count()
}
