//! Composition primitives over whole graphs.
//!
//! These operate on finished values and produce finished values: the
//! composite constructors build small intermediates, fold them through
//! these primitives, and drop them. Vertex index maps are closed-form, so
//! each output list is assembled directly in sorted order (or sorted once,
//! for the product) without edge-by-edge mutation.

use tracing::trace;

use crate::{error::BuildResult, size};

use super::undirected::Graph;

/// Places `right` next to `left` with no shared vertices or edges.
///
/// The second operand's vertices are relabelled by an offset equal to
/// `left.vertex_count()`.
///
/// # Errors
///
/// Returns [`crate::BuildError::SizeOverflow`] when the combined vertex or
/// edge count does not fit the index type.
pub fn disjoint_union(left: &Graph, right: &Graph) -> BuildResult<Graph> {
    let vertex_count = size::checked_sum(
        "union vertex count",
        left.vertex_count(),
        right.vertex_count(),
    )?;
    let edge_count = size::checked_sum("union edge count", left.edge_count(), right.edge_count())?;
    let offset = left.vertex_count();
    let mut adj = Vec::with_capacity(vertex_count);
    adj.extend(left.adj.iter().cloned());
    adj.extend(
        right
            .adj
            .iter()
            .map(|list| list.iter().map(|&vertex| vertex + offset).collect()),
    );
    Ok(Graph::from_adjacency(edge_count, adj))
}

/// Builds the cartesian graph product of `left` and `right`.
///
/// The product vertex `(i, j)` receives the index `(i - 1) * nr + j` where
/// `nr = right.vertex_count()`. Two product vertices are adjacent iff they
/// agree in one coordinate and are adjacent in the other.
///
/// # Errors
///
/// Returns [`crate::BuildError::SizeOverflow`] when the product vertex or
/// edge count does not fit the index type.
pub fn cartesian_product(left: &Graph, right: &Graph) -> BuildResult<Graph> {
    let nl = left.vertex_count();
    let nr = right.vertex_count();
    let vertex_count = size::checked_product("product vertex count", nl, nr)?;
    let left_cross = size::checked_product("product edge count", left.edge_count(), nr)?;
    let right_cross = size::checked_product("product edge count", right.edge_count(), nl)?;
    let edge_count = size::checked_sum("product edge count", left_cross, right_cross)?;

    let mut adj = Vec::with_capacity(vertex_count);
    for i in 1..=nl {
        for j in 1..=nr {
            let left_moves = &left.adj[i - 1];
            let right_moves = &right.adj[j - 1];
            let mut list = Vec::with_capacity(left_moves.len() + right_moves.len());
            list.extend(left_moves.iter().map(|&ip| (ip - 1) * nr + j));
            list.extend(right_moves.iter().map(|&jp| (i - 1) * nr + jp));
            list.sort_unstable();
            adj.push(list);
        }
    }
    trace!(
        vertices = vertex_count,
        edges = edge_count,
        "built cartesian product"
    );
    Ok(Graph::from_adjacency(edge_count, adj))
}

/// Chains `count` disjoint copies of `graph`, linking corresponding
/// vertices of consecutive copies with matching edges.
///
/// Copy `c` (zero-based) of vertex `v` receives the index `c * n + v`
/// where `n = graph.vertex_count()`.
///
/// # Errors
///
/// Returns [`crate::BuildError::SizeOverflow`] when the chained vertex or
/// edge count does not fit the index type.
pub fn crosspath(count: usize, graph: &Graph) -> BuildResult<Graph> {
    let n = graph.vertex_count();
    let vertex_count = size::checked_product("chain vertex count", count, n)?;
    if vertex_count == 0 {
        return Ok(Graph::empty(0));
    }
    let within = size::checked_product("chain edge count", count, graph.edge_count())?;
    let between = size::checked_product("chain edge count", count - 1, n)?;
    let edge_count = size::checked_sum("chain edge count", within, between)?;

    let mut adj = Vec::with_capacity(vertex_count);
    for copy in 0..count {
        let offset = copy * n;
        for vertex in 1..=n {
            let local = &graph.adj[vertex - 1];
            let mut list = Vec::with_capacity(local.len() + 2);
            if copy > 0 {
                list.push(offset + vertex - n);
            }
            list.extend(local.iter().map(|&w| offset + w));
            if copy + 1 < count {
                list.push(offset + vertex + n);
            }
            adj.push(list);
        }
    }
    Ok(Graph::from_adjacency(edge_count, adj))
}
