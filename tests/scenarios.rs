//! Reference scenarios through the public API

use combopt::graph::{
    bfs_traverse, dag_shortest_paths, dfs_traverse, dijkstra_traverse, AdjacencyList,
};
use combopt::knapsack::fill_multi_use;
use combopt::mst::kruskal_forest;
use combopt::{GraphConfig, SolverConfig};

#[test]
fn test_bfs_scenario() {
    let graph = AdjacencyList::from_unweighted_edges(6, &[(0, 1), (1, 2), (2, 3), (0, 4)]).unwrap();
    let result = bfs_traverse(&graph, 0).unwrap();

    assert_eq!(result.predecessor_sentinels(), vec![-1, 0, 1, 2, 0, -1]);
    assert_eq!(result.distance_sentinels(), vec![0, 1, 2, 3, 1, -1]);
}

#[test]
fn test_dijkstra_scenario() {
    let graph = AdjacencyList::from_edges(
        10,
        &[
            (0, 1, 85),
            (0, 2, 217),
            (7, 3, 183),
            (0, 4, 173),
            (1, 5, 80),
            (2, 6, 186),
            (2, 7, 103),
            (5, 8, 250),
            (4, 9, 502),
            (7, 9, 167),
            (8, 9, 84),
        ],
    )
    .unwrap();
    let config = SolverConfig::default();
    let result = dijkstra_traverse(&graph, 0, &config.graph).unwrap();

    assert_eq!(
        result.distance_sentinels(),
        vec![0, 85, 217, 503, 173, 165, 403, 320, 415, 487]
    );
}

#[test]
fn test_kruskal_scenario() {
    let graph = AdjacencyList::from_edges(
        4,
        &[(0, 1, 5), (0, 2, 3), (3, 0, 6), (1, 3, 7), (2, 1, 4), (2, 3, 5)],
    )
    .unwrap();
    let edges: Vec<_> = graph.edges().collect();
    let forest = kruskal_forest(4, &edges).unwrap();

    assert_eq!(forest.len(), 1);
    assert_eq!(forest.total_weight(), 12);
    assert_eq!(forest.edge_count(), 3);
    assert_eq!(
        forest.trees[0].destination_first(),
        vec![(3, 2, 5), (1, 2, 4), (2, 0, 3)]
    );
}

#[test]
fn test_knapsack_multi_use_scenario() {
    let table = fill_multi_use(10, &[2, 4, 7, 12]).unwrap();
    let bits: Vec<u8> = table.into_iter().map(u8::from).collect();
    assert_eq!(bits, vec![1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1]);
}

#[test]
fn test_dfs_then_dag_on_same_graph() {
    let graph =
        AdjacencyList::from_edges(5, &[(0, 1, 2), (0, 2, 6), (1, 2, 3), (2, 3, -4), (1, 3, 9)])
            .unwrap();

    let dfs = dfs_traverse(&graph, 0).unwrap();
    assert_eq!(dfs.visit_order_sentinels(), vec![0, 1, 3, 2, -1]);

    let dag = dag_shortest_paths(&graph, 0).unwrap();
    assert_eq!(dag.distance_sentinels(), vec![0, 2, 5, 1, -1]);
    assert_eq!(dag.path_to(3), Some(vec![0, 1, 2, 3]));
}

#[test]
fn test_empty_graph_inputs() {
    let graph = AdjacencyList::new(0);

    let bfs = bfs_traverse(&graph, 0).unwrap();
    assert!(bfs.predecessors.is_empty());
    assert!(bfs.distances.is_empty());

    let dfs = dfs_traverse(&graph, 0).unwrap();
    assert!(dfs.visit_order.is_empty());
    assert!(dfs.visit_order_sentinels().is_empty());

    let dag = dag_shortest_paths(&graph, 0).unwrap();
    assert!(dag.distances.is_empty());

    let dijkstra = dijkstra_traverse(&graph, 0, &GraphConfig::default()).unwrap();
    assert!(dijkstra.distances.is_empty());
    assert!(dijkstra.predecessors.is_empty());

    assert!(kruskal_forest(0, &[]).unwrap().is_empty());
}

#[test]
fn test_results_serialize_to_json() {
    let graph = AdjacencyList::from_edges(3, &[(0, 1, 4), (1, 2, 1)]).unwrap();
    let result = dijkstra_traverse(&graph, 0, &GraphConfig::default()).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["distances"], serde_json::json!([0, 4, 5]));
    assert_eq!(json["predecessors"], serde_json::json!([null, 0, 1]));

    let edges: Vec<_> = graph.edges().collect();
    let forest = kruskal_forest(3, &edges).unwrap();
    let json = serde_json::to_value(&forest).unwrap();
    assert_eq!(json["trees"][0]["edges"][0]["weight"], 1);
}
