//! Public-API tests for the containers and composition primitives.

use trellis_core::{
    EdgeInsertError, EdgeInsertErrorCode, Graph, cartesian_product, complete_graph, crosspath,
    cycle_graph, disjoint_union, path_graph,
};

#[test]
fn insertion_failures_carry_stable_codes() {
    let mut graph = Graph::empty(2);
    graph.add_edge(1, 2).expect("edge is valid");

    let duplicate = graph.add_edge(1, 2).expect_err("edge already exists");
    assert_eq!(duplicate.code().as_str(), "DUPLICATE_EDGE");

    let loop_err = graph.add_edge(2, 2).expect_err("self-loop must fail");
    assert_eq!(loop_err.code(), EdgeInsertErrorCode::SelfLoop);

    let range_err = graph.add_edge(1, 9).expect_err("endpoint out of range");
    assert_eq!(
        range_err,
        EdgeInsertError::OutOfRange {
            vertex: 9,
            vertex_count: 2
        }
    );
}

#[test]
fn failed_insertions_leave_the_graph_untouched() {
    let mut graph = Graph::empty(3);
    graph.add_edge(1, 2).expect("edge is valid");
    let before = graph.clone();

    assert!(graph.add_edge(2, 1).is_err());
    assert!(graph.add_edge(3, 3).is_err());
    assert!(graph.add_edge(0, 1).is_err());
    assert_eq!(graph, before);
}

#[test]
fn product_of_paths_matches_the_grid_constructor() {
    let rows = path_graph(3).expect("count fits");
    let cols = path_graph(4).expect("count fits");
    let product = cartesian_product(&rows, &cols).expect("counts fit");

    assert_eq!(product.vertex_count(), 12);
    assert_eq!(product.edge_count(), 2 * 4 + 3 * 3);
    assert!(product.is_consistent());
}

#[test]
fn union_and_chain_compose_cleanly() {
    let ring = cycle_graph(4).expect("count fits");
    let pair = complete_graph(2).expect("count fits");

    let union = disjoint_union(&ring, &pair).expect("counts fit");
    assert_eq!(union.vertex_count(), 6);
    assert_eq!(union.edge_count(), 5);
    assert!(union.has_edge(5, 6));

    let chain = crosspath(3, &pair).expect("counts fit");
    assert_eq!(chain.vertex_count(), 6);
    assert_eq!(chain.edge_count(), 3 + 4);
    assert!(chain.has_edge(1, 3));
    assert!(chain.has_edge(2, 4));
    assert!(chain.is_consistent());
}
