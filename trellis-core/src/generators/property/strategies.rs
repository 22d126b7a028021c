//! Parameter strategies covering every constructor family.
//!
//! Orders are kept small — the laws are about structure, not scale — but
//! the ranges start at zero so every degenerate boundary is exercised.

use proptest::prelude::*;

use crate::generators::{
    binary_tree, clique_ring, complete_bipartite_graph, complete_digraph, complete_graph,
    cycle_digraph, cycle_graph, double_binary_tree, grid_graph, path_digraph, path_graph,
    roach_graph, star_digraph, star_graph, wheel_digraph, wheel_graph,
};
use crate::graph::{Digraph, Graph};

/// Upper bound for sampled orders.
const MAX_ORDER: usize = 24;
/// Upper bound for sampled tree depths.
const MAX_DEPTH: usize = 5;
/// Upper bound for sampled clique orders and ring lengths.
const MAX_BLOCK: usize = 6;
/// Upper bound for a single grid extent.
const MAX_EXTENT: usize = 5;

/// A sampled undirected constructor invocation.
#[derive(Clone, Debug)]
pub(super) enum UndirectedCase {
    Complete(usize),
    CompleteBipartite(usize, usize),
    Star(usize),
    Path(usize),
    Cycle(usize),
    Wheel(usize),
    BinaryTree(usize),
    CliqueRing(usize, usize),
    Grid(Vec<usize>, bool),
    DoubleBinaryTree(usize),
    Roach(usize),
}

impl UndirectedCase {
    pub(super) fn build(&self) -> Graph {
        let built = match self {
            Self::Complete(n) => complete_graph(*n),
            Self::CompleteBipartite(n1, n2) => complete_bipartite_graph(*n1, *n2),
            Self::Star(n) => star_graph(*n),
            Self::Path(n) => path_graph(*n),
            Self::Cycle(n) => cycle_graph(*n),
            Self::Wheel(n) => wheel_graph(*n),
            Self::BinaryTree(k) => binary_tree(*k),
            Self::CliqueRing(k, n) => clique_ring(*k, *n),
            Self::Grid(dims, periodic) => grid_graph(dims, *periodic),
            Self::DoubleBinaryTree(k) => double_binary_tree(*k),
            Self::Roach(k) => roach_graph(*k),
        };
        built.expect("bounded parameters always fit")
    }
}

/// A sampled directed constructor invocation.
#[derive(Clone, Debug)]
pub(super) enum DirectedCase {
    Complete(usize),
    Star(usize),
    Path(usize),
    Cycle(usize),
    Wheel(usize),
}

impl DirectedCase {
    pub(super) fn build(&self) -> Digraph {
        let built = match self {
            Self::Complete(n) => complete_digraph(*n),
            Self::Star(n) => star_digraph(*n),
            Self::Path(n) => path_digraph(*n),
            Self::Cycle(n) => cycle_digraph(*n),
            Self::Wheel(n) => wheel_digraph(*n),
        };
        built.expect("bounded parameters always fit")
    }
}

pub(super) fn undirected_case() -> impl Strategy<Value = UndirectedCase> {
    prop_oneof![
        (0..=MAX_ORDER).prop_map(UndirectedCase::Complete),
        (0..=MAX_ORDER, 0..=MAX_ORDER)
            .prop_map(|(n1, n2)| UndirectedCase::CompleteBipartite(n1, n2)),
        (0..=MAX_ORDER).prop_map(UndirectedCase::Star),
        (0..=MAX_ORDER).prop_map(UndirectedCase::Path),
        (0..=MAX_ORDER).prop_map(UndirectedCase::Cycle),
        (0..=MAX_ORDER).prop_map(UndirectedCase::Wheel),
        (0..=MAX_DEPTH).prop_map(UndirectedCase::BinaryTree),
        (0..=MAX_BLOCK, 0..=MAX_BLOCK).prop_map(|(k, n)| UndirectedCase::CliqueRing(k, n)),
        (prop::collection::vec(0..=MAX_EXTENT, 0..=3), any::<bool>())
            .prop_map(|(dims, periodic)| UndirectedCase::Grid(dims, periodic)),
        prop_oneof![
            (0..=MAX_DEPTH).prop_map(UndirectedCase::DoubleBinaryTree),
            (0..=MAX_BLOCK).prop_map(UndirectedCase::Roach),
        ],
    ]
}

pub(super) fn directed_case() -> impl Strategy<Value = DirectedCase> {
    prop_oneof![
        (0..=MAX_ORDER).prop_map(DirectedCase::Complete),
        (0..=MAX_ORDER).prop_map(DirectedCase::Star),
        (0..=MAX_ORDER).prop_map(DirectedCase::Path),
        (0..=MAX_ORDER).prop_map(DirectedCase::Cycle),
        (0..=MAX_ORDER).prop_map(DirectedCase::Wheel),
    ]
}
