//! Public-API tests for the topology constructors.

use rstest::rstest;

use trellis_core::{
    BuildError, BuildErrorCode, Graph, binary_tree, clique_ring, complete_graph, cycle_digraph,
    cycle_graph, double_binary_tree, grid_graph, path_graph, roach_graph, star_graph, wheel_graph,
};

fn degree_sequence(graph: &Graph) -> Vec<usize> {
    graph
        .vertices()
        .map(|vertex| graph.degree(vertex).expect("vertex is in range"))
        .collect()
}

#[test]
fn complete_four_is_three_regular_with_six_edges() {
    let graph = complete_graph(4).expect("count fits");
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(degree_sequence(&graph), vec![3, 3, 3, 3]);
}

#[test]
fn star_five_has_one_hub_and_four_leaves() {
    let graph = star_graph(5).expect("count fits");
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(degree_sequence(&graph), vec![4, 1, 1, 1, 1]);
}

#[rstest]
#[case::single_vertex(1, 1, 0)]
#[case::no_vertices(0, 0, 0)]
fn path_boundary_orders(
    #[case] n: usize,
    #[case] expected_vertices: usize,
    #[case] expected_edges: usize,
) {
    let graph = path_graph(n).expect("count fits");
    assert_eq!(graph.vertex_count(), expected_vertices);
    assert_eq!(graph.edge_count(), expected_edges);
}

#[test]
fn cycle_three_is_a_triangle() {
    let graph = cycle_graph(3).expect("count fits");
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(degree_sequence(&graph), vec![2, 2, 2]);
    assert!(graph.has_edge(1, 2));
    assert!(graph.has_edge(2, 3));
    assert!(graph.has_edge(3, 1));
}

#[test]
fn wheel_five_matches_the_published_shape() {
    let graph = wheel_graph(5).expect("count fits");
    assert_eq!(graph.edge_count(), 8);
    assert_eq!(degree_sequence(&graph), vec![4, 3, 3, 3, 3]);
}

#[test]
fn grid_two_by_three_has_six_vertices_and_seven_edges() {
    let graph = grid_graph(&[2, 3], false).expect("counts fit");
    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 7);
}

#[test]
fn generated_graphs_report_consistent_structure() {
    let graphs = [
        complete_graph(8).expect("count fits"),
        wheel_graph(9).expect("count fits"),
        binary_tree(5).expect("count fits"),
        clique_ring(4, 5).expect("counts fit"),
        grid_graph(&[3, 3, 2], true).expect("counts fit"),
        double_binary_tree(4).expect("counts fit"),
        roach_graph(6).expect("counts fit"),
    ];
    for graph in &graphs {
        assert!(graph.is_consistent());
    }
}

#[test]
fn order_one_directed_ring_keeps_its_two_vertex_shape() {
    let graph = cycle_digraph(1).expect("count fits");
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_edge(1, 2));
    assert!(!graph.has_edge(2, 1));
}

#[rstest]
#[case::complete(complete_graph(usize::MAX))]
#[case::binary_tree(binary_tree(300))]
#[case::clique_ring(clique_ring(usize::MAX, usize::MAX))]
#[case::grid(grid_graph(&[usize::MAX, 2], false))]
fn unrepresentable_counts_fail_before_allocating(
    #[case] built: Result<Graph, BuildError>,
) {
    let err = built.expect_err("count must not fit the index type");
    assert_eq!(err.code(), BuildErrorCode::SizeOverflow);
    assert_eq!(err.code().as_str(), "SIZE_OVERFLOW");
}
