use crate::graph::types::{NodeId, Weight};

/// Trait for providing graph adjacency to the traversal routines
///
/// Node ids are dense in `0..node_count()`. Neighbor order is significant:
/// it fixes DFS visit order and BFS tie-breaking.
pub trait Adjacency {
    fn node_count(&self) -> usize;
    fn neighbors(&self, node: NodeId) -> &[(NodeId, Weight)];
}

impl Adjacency for Vec<Vec<(NodeId, Weight)>> {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn neighbors(&self, node: NodeId) -> &[(NodeId, Weight)] {
        &self[node]
    }
}
