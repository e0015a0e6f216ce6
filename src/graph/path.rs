//! Path reconstruction from predecessor arrays

use crate::graph::types::NodeId;

/// Walk predecessor links back from `target` to `start`.
///
/// Returns the node sequence `start ..= target`, or `None` when `target`
/// is out of range or was never reached. The walk is bounded by the array
/// length so a corrupted array cannot loop forever.
pub fn reconstruct_path(
    predecessors: &[Option<NodeId>],
    start: NodeId,
    target: NodeId,
) -> Option<Vec<NodeId>> {
    if target >= predecessors.len() {
        return None;
    }

    let mut path = vec![target];
    let mut current = target;

    while current != start {
        if path.len() > predecessors.len() {
            return None;
        }
        current = predecessors[current]?;
        path.push(current);
    }

    path.reverse();
    Some(path)
}
