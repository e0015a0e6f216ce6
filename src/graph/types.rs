use crate::graph::path::reconstruct_path;
use serde::Serialize;

/// Dense node identifier in `0..node_count`
pub type NodeId = usize;

/// Signed edge weight
pub type Weight = i64;

/// A directed, weighted edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeightedEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(from: NodeId, to: NodeId, weight: Weight) -> Self {
        Self { from, to, weight }
    }
}

impl From<(NodeId, NodeId, Weight)> for WeightedEdge {
    fn from((from, to, weight): (NodeId, NodeId, Weight)) -> Self {
        Self::new(from, to, weight)
    }
}

/// Per-node traversal state
///
/// A node enters `Frontier` at most once per discovery and reaches `Done`
/// exactly once; its predecessor and distance are final from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeState {
    #[default]
    Unvisited,
    Frontier,
    Done,
}

/// Render an optional-valued array with -1 standing in for `None`
fn to_sentinels<T: Copy + Into<i64>>(values: &[Option<T>]) -> Vec<i64> {
    values
        .iter()
        .map(|value| value.map_or(-1, Into::into))
        .collect()
}

fn node_sentinels(values: &[Option<NodeId>]) -> Vec<i64> {
    values
        .iter()
        .map(|value| value.map_or(-1, |node| node as i64))
        .collect()
}

/// Output of a breadth-first traversal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BfsResult {
    pub start: NodeId,
    /// Predecessor on the BFS tree; `None` for the start and unreached nodes
    pub predecessors: Vec<Option<NodeId>>,
    /// Hop count from the start; `None` for unreached nodes
    pub distances: Vec<Option<u32>>,
}

impl BfsResult {
    /// Result over a graph with no nodes
    pub fn empty(start: NodeId) -> Self {
        Self {
            start,
            predecessors: Vec::new(),
            distances: Vec::new(),
        }
    }

    pub fn is_reached(&self, node: NodeId) -> bool {
        self.distances.get(node).is_some_and(Option::is_some)
    }

    /// Node sequence from the start to `target`, if reached
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        reconstruct_path(&self.predecessors, self.start, target)
    }

    pub fn predecessor_sentinels(&self) -> Vec<i64> {
        node_sentinels(&self.predecessors)
    }

    pub fn distance_sentinels(&self) -> Vec<i64> {
        to_sentinels(&self.distances)
    }
}

/// Output of a depth-first traversal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DfsResult {
    pub start: NodeId,
    pub predecessors: Vec<Option<NodeId>>,
    /// Nodes in the order they were finalized (popped off the stack)
    pub visit_order: Vec<NodeId>,
}

impl DfsResult {
    pub fn empty(start: NodeId) -> Self {
        Self {
            start,
            predecessors: Vec::new(),
            visit_order: Vec::new(),
        }
    }

    pub fn is_reached(&self, node: NodeId) -> bool {
        node == self.start || self.predecessors.get(node).is_some_and(Option::is_some)
    }

    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        reconstruct_path(&self.predecessors, self.start, target)
    }

    pub fn predecessor_sentinels(&self) -> Vec<i64> {
        node_sentinels(&self.predecessors)
    }

    /// Visit order padded to the node count with -1 for unfilled ranks
    pub fn visit_order_sentinels(&self) -> Vec<i64> {
        let mut ranks: Vec<i64> = self.visit_order.iter().map(|&node| node as i64).collect();
        ranks.resize(self.predecessors.len(), -1);
        ranks
    }
}

/// Single-source shortest path output (DAG relaxation and Dijkstra)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub start: NodeId,
    pub predecessors: Vec<Option<NodeId>>,
    /// Accumulated path cost; `None` for unreached nodes
    pub distances: Vec<Option<Weight>>,
}

impl ShortestPaths {
    pub fn empty(start: NodeId) -> Self {
        Self {
            start,
            predecessors: Vec::new(),
            distances: Vec::new(),
        }
    }

    pub fn is_reached(&self, node: NodeId) -> bool {
        self.distances.get(node).is_some_and(Option::is_some)
    }

    pub fn distance_to(&self, node: NodeId) -> Option<Weight> {
        self.distances.get(node).copied().flatten()
    }

    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        reconstruct_path(&self.predecessors, self.start, target)
    }

    pub fn predecessor_sentinels(&self) -> Vec<i64> {
        node_sentinels(&self.predecessors)
    }

    pub fn distance_sentinels(&self) -> Vec<i64> {
        to_sentinels(&self.distances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_state_default() {
        assert_eq!(NodeState::default(), NodeState::Unvisited);
    }

    #[test]
    fn test_edge_from_tuple() {
        let edge = WeightedEdge::from((2, 5, -3));
        assert_eq!(edge, WeightedEdge::new(2, 5, -3));
    }

    #[test]
    fn test_shortest_paths_sentinels() {
        let paths = ShortestPaths {
            start: 0,
            predecessors: vec![None, Some(0), None],
            distances: vec![Some(0), Some(-4), None],
        };
        assert_eq!(paths.predecessor_sentinels(), vec![-1, 0, -1]);
        assert_eq!(paths.distance_sentinels(), vec![0, -4, -1]);
        assert_eq!(paths.distance_to(1), Some(-4));
        assert_eq!(paths.distance_to(2), None);
        assert_eq!(paths.distance_to(9), None);
        assert!(!paths.is_reached(2));
    }

    #[test]
    fn test_visit_order_sentinels_padding() {
        let result = DfsResult {
            start: 1,
            predecessors: vec![None, None, Some(1), None],
            visit_order: vec![1, 2],
        };
        assert_eq!(result.visit_order_sentinels(), vec![1, 2, -1, -1]);
        assert!(result.is_reached(1));
        assert!(result.is_reached(2));
        assert!(!result.is_reached(3));
    }

    #[test]
    fn test_empty_results_have_no_entries() {
        let bfs = BfsResult::empty(0);
        assert!(bfs.distance_sentinels().is_empty());
        assert!(!bfs.is_reached(0));
        assert_eq!(bfs.path_to(0), None);

        let dfs = DfsResult::empty(0);
        assert!(dfs.visit_order_sentinels().is_empty());

        let paths = ShortestPaths::empty(3);
        assert_eq!(paths.distance_to(3), None);
        assert!(paths.predecessor_sentinels().is_empty());
    }

    #[test]
    fn test_results_serialize() {
        let result = BfsResult {
            start: 0,
            predecessors: vec![None, Some(0)],
            distances: vec![Some(0), Some(1)],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["predecessors"], serde_json::json!([null, 0]));
        assert_eq!(json["distances"], serde_json::json!([0, 1]));
    }
}
