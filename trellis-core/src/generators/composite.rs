//! Constructors assembled from smaller graphs and composition primitives.
//!
//! Each builder here constructs one or more intermediate graphs with the
//! direct or incremental builders, folds them through the primitives in
//! [`crate::graph`], and drops the intermediates. Overall sizes are
//! validated up front so a parameter set that cannot be addressed fails
//! before the first intermediate is allocated.

use tracing::debug;

use crate::{
    error::BuildResult,
    graph::{Graph, cartesian_product, crosspath, disjoint_union},
    size,
};

use super::{
    direct::{binary_tree, complete_graph, path_graph},
    incremental::{cycle_graph, insert_known_edge},
};

/// Builds the lattice graph over the given dimension extents.
///
/// The first extent seeds a one-dimensional base graph — a cycle when
/// `periodic`, a path otherwise — and every further extent is folded in
/// with the cartesian product, multiplying the vertex count by that
/// extent. An empty dimension list or any zero extent yields the empty
/// graph.
///
/// # Errors
///
/// Returns [`crate::BuildError::SizeOverflow`] when the product of all
/// extents does not fit the index type.
///
/// # Examples
/// ```
/// use trellis_core::grid_graph;
///
/// let lattice = grid_graph(&[2, 3], false).expect("counts fit");
/// assert_eq!(lattice.vertex_count(), 6);
/// assert_eq!(lattice.edge_count(), 7);
/// ```
pub fn grid_graph(dims: &[usize], periodic: bool) -> BuildResult<Graph> {
    let Some((&head, rest)) = dims.split_first() else {
        return Ok(Graph::empty(0));
    };
    if dims.contains(&0) {
        return Ok(Graph::empty(0));
    }
    size::dimension_product("grid vertex count", dims)?;

    let base = |extent: usize| {
        if periodic {
            cycle_graph(extent)
        } else {
            path_graph(extent)
        }
    };
    let mut graph = base(head)?;
    for &extent in rest {
        graph = cartesian_product(&base(extent)?, &graph)?;
    }
    debug!(
        dimensions = dims.len(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        periodic,
        "folded grid"
    );
    Ok(graph)
}

/// Builds two depth-`k` binary trees bridged root to root.
///
/// The second tree's vertices sit at an offset of `2^k - 1`, so the bridge
/// joins vertices `1` and `2^k`. Depth zero yields the empty graph.
///
/// # Errors
///
/// Returns [`crate::BuildError::SizeOverflow`] when the doubled tree order
/// does not fit the index type.
pub fn double_binary_tree(k: usize) -> BuildResult<Graph> {
    if k == 0 {
        return Ok(Graph::empty(0));
    }
    let left = binary_tree(k)?;
    let right = binary_tree(k)?;
    let offset = left.vertex_count();
    let mut graph = disjoint_union(&left, &right)?;
    insert_known_edge(&mut graph, 1, offset + 1);
    Ok(graph)
}

/// Builds the roach graph of length `k`: a chain of `k` isolated vertex
/// pairs (the antennae) joined to a chain of `k` dipoles (the body).
///
/// Both strips are built by chaining a two-vertex seed `k` times, placed
/// side by side with the disjoint union, and connected by two bridge
/// edges from the last antennae pair to the first body pair. Length zero
/// yields the empty graph.
///
/// # Errors
///
/// Returns [`crate::BuildError::SizeOverflow`] when `4 * k` vertices do
/// not fit the index type.
pub fn roach_graph(k: usize) -> BuildResult<Graph> {
    if k == 0 {
        return Ok(Graph::empty(0));
    }
    let antennae = crosspath(k, &Graph::empty(2))?;
    let body = crosspath(k, &complete_graph(2)?)?;
    let joint = antennae.vertex_count();
    let mut graph = disjoint_union(&antennae, &body)?;
    insert_known_edge(&mut graph, joint - 1, joint + 1);
    insert_known_edge(&mut graph, joint, joint + 2);
    debug!(
        length = k,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "assembled roach"
    );
    Ok(graph)
}
