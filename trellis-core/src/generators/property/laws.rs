//! Law checkers shared by the property runners.
//!
//! Each checker inspects a finished graph through the public API only, so
//! the laws hold independently of the debug assertions inside the
//! containers.

use proptest::prelude::{prop_assert, prop_assert_eq};
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::{Digraph, Graph};

use super::strategies::UndirectedCase;

fn neighbours_of(graph: &Graph, vertex: usize) -> Result<&[usize], TestCaseError> {
    graph
        .neighbours(vertex)
        .ok_or_else(|| TestCaseError::fail(format!("vertex {vertex} missing from its own graph")))
}

/// Sorted duplicate-free lists, in-range loop-free entries, symmetry, and
/// a declared edge count matching the adjacency-derived one.
pub(super) fn check_undirected_laws(graph: &Graph) -> TestCaseResult {
    let vertex_count = graph.vertex_count();
    let mut half_edges = 0_usize;
    for vertex in graph.vertices() {
        let list = neighbours_of(graph, vertex)?;
        prop_assert!(
            list.windows(2).all(|pair| pair[0] < pair[1]),
            "vertex {} has an unsorted or duplicated list: {:?}",
            vertex,
            list
        );
        for &neighbour in list {
            prop_assert!(
                neighbour >= 1 && neighbour <= vertex_count,
                "vertex {} lists out-of-range neighbour {}",
                vertex,
                neighbour
            );
            prop_assert!(neighbour != vertex, "vertex {} lists itself", vertex);
            prop_assert!(
                graph.has_edge(neighbour, vertex),
                "edge ({}, {}) has no mirror",
                vertex,
                neighbour
            );
        }
        half_edges += list.len();
    }
    prop_assert_eq!(half_edges, graph.edge_count() * 2);
    Ok(())
}

/// Sorted in-range lists, forward/backward mirroring, and a declared arc
/// count matching both adjacency sides.
pub(super) fn check_directed_laws(graph: &Digraph) -> TestCaseResult {
    let vertex_count = graph.vertex_count();
    let mut forward_arcs = 0_usize;
    let mut backward_arcs = 0_usize;
    for vertex in graph.vertices() {
        let outs = graph
            .out_neighbours(vertex)
            .ok_or_else(|| TestCaseError::fail(format!("vertex {vertex} has no forward list")))?;
        let ins = graph
            .in_neighbours(vertex)
            .ok_or_else(|| TestCaseError::fail(format!("vertex {vertex} has no backward list")))?;
        for list in [outs, ins] {
            prop_assert!(
                list.windows(2).all(|pair| pair[0] < pair[1]),
                "vertex {} has an unsorted or duplicated list: {:?}",
                vertex,
                list
            );
            prop_assert!(
                list.iter().all(|&v| v >= 1 && v <= vertex_count),
                "vertex {} lists an out-of-range endpoint",
                vertex
            );
        }
        for &target in outs {
            let mirrored = graph
                .in_neighbours(target)
                .is_some_and(|list| list.binary_search(&vertex).is_ok());
            prop_assert!(mirrored, "arc ({}, {}) has no backward mirror", vertex, target);
        }
        for &source in ins {
            prop_assert!(
                graph.has_edge(source, vertex),
                "backward entry ({}, {}) has no forward arc",
                source,
                vertex
            );
        }
        forward_arcs += outs.len();
        backward_arcs += ins.len();
    }
    prop_assert_eq!(forward_arcs, graph.edge_count());
    prop_assert_eq!(backward_arcs, graph.edge_count());
    Ok(())
}

/// Closed-form vertex and edge counts for a sampled case.
pub(super) fn check_expected_counts(case: &UndirectedCase, graph: &Graph) -> TestCaseResult {
    let (vertices, edges) = expected_counts(case);
    prop_assert_eq!(graph.vertex_count(), vertices, "vertex count for {:?}", case);
    prop_assert_eq!(graph.edge_count(), edges, "edge count for {:?}", case);
    Ok(())
}

/// Degree structure for the families with a fixed degree law.
pub(super) fn check_family_degrees(case: &UndirectedCase, graph: &Graph) -> TestCaseResult {
    let degree_of = |vertex: usize| graph.degree(vertex).unwrap_or(0);
    match *case {
        UndirectedCase::Complete(n) if n >= 1 => {
            for vertex in graph.vertices() {
                prop_assert_eq!(degree_of(vertex), n - 1);
            }
        }
        UndirectedCase::Star(n) if n >= 2 => {
            prop_assert_eq!(degree_of(1), n - 1);
            for leaf in 2..=n {
                prop_assert_eq!(degree_of(leaf), 1);
            }
        }
        UndirectedCase::Path(n) if n >= 2 => {
            prop_assert_eq!(degree_of(1), 1);
            prop_assert_eq!(degree_of(n), 1);
            for interior in 2..n {
                prop_assert_eq!(degree_of(interior), 2);
            }
        }
        UndirectedCase::Cycle(n) if n >= 3 => {
            for vertex in graph.vertices() {
                prop_assert_eq!(degree_of(vertex), 2);
            }
        }
        UndirectedCase::Wheel(n) if n >= 4 => {
            prop_assert_eq!(degree_of(1), n - 1);
            for rim in 2..=n {
                prop_assert_eq!(degree_of(rim), 3);
            }
        }
        _ => {}
    }
    Ok(())
}

fn cycle_edges(n: usize) -> usize {
    match n {
        0 | 1 => 0,
        2 => 1,
        _ => n,
    }
}

fn expected_counts(case: &UndirectedCase) -> (usize, usize) {
    match *case {
        UndirectedCase::Complete(n) => (n, n * n.saturating_sub(1) / 2),
        UndirectedCase::CompleteBipartite(n1, n2) => (n1 + n2, n1 * n2),
        UndirectedCase::Star(n) | UndirectedCase::Path(n) => (n, n.saturating_sub(1)),
        UndirectedCase::Cycle(n) => (n, cycle_edges(n)),
        UndirectedCase::Wheel(n) => match n {
            0..=3 => (n, cycle_edges(n)),
            _ => (n, 2 * (n - 1)),
        },
        UndirectedCase::BinaryTree(k) => {
            let n = (1_usize << k) - 1;
            (n, n.saturating_sub(1))
        }
        UndirectedCase::CliqueRing(k, n) => {
            if k == 0 || n == 0 {
                return (0, 0);
            }
            let bridges = match n {
                1 => 0,
                2 => 1,
                _ => n,
            };
            (k * n, n * (k * (k - 1) / 2) + bridges)
        }
        UndirectedCase::Grid(ref dims, periodic) => grid_counts(dims, periodic),
        UndirectedCase::DoubleBinaryTree(k) => {
            if k == 0 {
                return (0, 0);
            }
            let tree = (1_usize << k) - 1;
            (2 * tree, 2 * tree - 1)
        }
        UndirectedCase::Roach(k) => {
            if k == 0 {
                return (0, 0);
            }
            (4 * k, 5 * k - 2)
        }
    }
}

fn grid_counts(dims: &[usize], periodic: bool) -> (usize, usize) {
    if dims.is_empty() || dims.contains(&0) {
        return (0, 0);
    }
    let mut vertices = 1_usize;
    let mut edges = 0_usize;
    for &extent in dims {
        let base_edges = if periodic {
            cycle_edges(extent)
        } else {
            extent - 1
        };
        edges = base_edges * vertices + edges * extent;
        vertices *= extent;
    }
    (vertices, edges)
}
