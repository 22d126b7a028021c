//! Trellis core library.
//!
//! Deterministic constructors for canonical graph topologies: complete,
//! bipartite, star, path, cycle, wheel, lattice/grid, binary tree, roach,
//! and clique-ring families, in undirected and (where meaningful) directed
//! form. Every constructor takes a handful of integer parameters and
//! returns a fully-formed graph value with exact vertex and edge counts —
//! no randomness, no I/O.
//!
//! Derived counts are computed at a width strictly wider than the vertex
//! index type and validated before narrowing, so a parameter set whose
//! graph cannot be addressed fails with [`BuildError::SizeOverflow`]
//! instead of wrapping. Out-of-range parameters (order zero, empty
//! dimension lists) are not errors: each family defines an explicit
//! degenerate result.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod generators;
mod graph;
mod size;

pub use crate::{
    error::{
        BuildError, BuildErrorCode, BuildResult, EdgeInsertError, EdgeInsertErrorCode,
    },
    generators::{
        binary_tree, clique_ring, complete_bipartite_graph, complete_digraph, complete_graph,
        cycle_digraph, cycle_graph, double_binary_tree, grid_graph, path_digraph, path_graph,
        roach_graph, star_digraph, star_graph, wheel_digraph, wheel_graph,
    },
    graph::{Digraph, Graph, cartesian_product, crosspath, disjoint_union},
};
