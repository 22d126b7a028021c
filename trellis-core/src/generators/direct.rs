//! Constructors that assemble the complete adjacency structure in one pass.
//!
//! Each builder sizes its result through [`crate::size`], fills every
//! vertex's neighbour list from a closed-form index formula into freshly
//! allocated storage, and wraps the arrays with the bulk constructor. No
//! list is ever revisited, so the dense fills are free to run per-vertex on
//! the rayon pool when the `parallel` feature is enabled; the result is
//! identical either way.

use tracing::debug;

use crate::{
    error::BuildResult,
    graph::{Digraph, Graph},
    size,
};

use super::incremental::{cycle_graph, insert_known_arc};

#[cfg(feature = "parallel")]
fn fill_lists<F>(vertex_count: usize, fill: F) -> Vec<Vec<usize>>
where
    F: Fn(usize) -> Vec<usize> + Send + Sync,
{
    use rayon::prelude::*;

    (0..vertex_count)
        .into_par_iter()
        .map(|slot| fill(slot + 1))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn fill_lists<F>(vertex_count: usize, fill: F) -> Vec<Vec<usize>>
where
    F: Fn(usize) -> Vec<usize> + Send + Sync,
{
    (1..=vertex_count).map(fill).collect()
}

/// All vertices other than `vertex`, ascending.
fn all_but(vertex: usize, n: usize) -> Vec<usize> {
    let mut list = Vec::with_capacity(n - 1);
    list.extend(1..vertex);
    list.extend((vertex + 1)..=n);
    list
}

/// Builds the complete graph on `n` vertices.
///
/// Every pair of distinct vertices is adjacent; `n = 0` yields the empty
/// graph.
///
/// # Errors
///
/// Returns [`crate::BuildError::SizeOverflow`] when `n * (n - 1) / 2` does
/// not fit the index type.
///
/// # Examples
/// ```
/// use trellis_core::complete_graph;
///
/// let graph = complete_graph(4).expect("count fits");
/// assert_eq!(graph.edge_count(), 6);
/// assert_eq!(graph.neighbours(2), Some(&[1, 3, 4][..]));
/// ```
pub fn complete_graph(n: usize) -> BuildResult<Graph> {
    if n == 0 {
        return Ok(Graph::empty(0));
    }
    let edge_count = size::triangular_count("complete edge count", n)?;
    let adj = fill_lists(n, |vertex| all_but(vertex, n));
    debug!(vertices = n, edges = edge_count, "built complete graph");
    Ok(Graph::from_adjacency(edge_count, adj))
}

/// Builds the complete bipartite graph on blocks of `n1` and `n2` vertices.
///
/// Vertices `1..=n1` form the first block, `n1+1..=n1+n2` the second;
/// every cross-block pair is adjacent and no intra-block edge exists.
///
/// # Errors
///
/// Returns [`crate::BuildError::SizeOverflow`] when `n1 + n2` or
/// `n1 * n2` does not fit the index type.
pub fn complete_bipartite_graph(n1: usize, n2: usize) -> BuildResult<Graph> {
    let vertex_count = size::checked_sum("bipartite vertex count", n1, n2)?;
    if vertex_count == 0 {
        return Ok(Graph::empty(0));
    }
    let edge_count = size::checked_product("bipartite edge count", n1, n2)?;
    let adj = fill_lists(vertex_count, |vertex| {
        if vertex <= n1 {
            ((n1 + 1)..=vertex_count).collect()
        } else {
            (1..=n1).collect()
        }
    });
    Ok(Graph::from_adjacency(edge_count, adj))
}

/// Builds the complete digraph on `n` vertices.
///
/// Every ordered pair of distinct vertices is an arc, so forward and
/// backward lists coincide.
///
/// # Errors
///
/// Returns [`crate::BuildError::SizeOverflow`] when `n * (n - 1)` does not
/// fit the index type.
pub fn complete_digraph(n: usize) -> BuildResult<Digraph> {
    if n == 0 {
        return Ok(Digraph::empty(0));
    }
    let edge_count = size::pair_count("complete arc count", n)?;
    let fwd = fill_lists(n, |vertex| all_but(vertex, n));
    let back = fwd.clone();
    Ok(Digraph::from_adjacency(edge_count, fwd, back))
}

/// Builds the star graph on `n` vertices: hub `1` adjacent to `2..=n`.
pub fn star_graph(n: usize) -> BuildResult<Graph> {
    if n == 0 {
        return Ok(Graph::empty(0));
    }
    let mut adj = Vec::with_capacity(n);
    adj.push((2..=n).collect());
    adj.extend((2..=n).map(|_| vec![1]));
    Ok(Graph::from_adjacency(n - 1, adj))
}

/// Builds the star digraph on `n` vertices: arcs from hub `1` to `2..=n`.
pub fn star_digraph(n: usize) -> BuildResult<Digraph> {
    if n == 0 {
        return Ok(Digraph::empty(0));
    }
    let mut fwd = Vec::with_capacity(n);
    fwd.push((2..=n).collect());
    fwd.extend((2..=n).map(|_| Vec::new()));
    let mut back = Vec::with_capacity(n);
    back.push(Vec::new());
    back.extend((2..=n).map(|_| vec![1]));
    Ok(Digraph::from_adjacency(n - 1, fwd, back))
}

/// Builds the path graph `1 - 2 - … - n`.
///
/// Orders zero and one yield zero edges.
pub fn path_graph(n: usize) -> BuildResult<Graph> {
    if n <= 1 {
        return Ok(Graph::empty(n));
    }
    let mut adj = Vec::with_capacity(n);
    adj.push(vec![2]);
    for vertex in 2..n {
        adj.push(vec![vertex - 1, vertex + 1]);
    }
    adj.push(vec![n - 1]);
    Ok(Graph::from_adjacency(n - 1, adj))
}

/// Builds the path digraph `1 → 2 → … → n`.
pub fn path_digraph(n: usize) -> BuildResult<Digraph> {
    if n <= 1 {
        return Ok(Digraph::empty(n));
    }
    let fwd = (1..=n)
        .map(|vertex| if vertex < n { vec![vertex + 1] } else { Vec::new() })
        .collect();
    let back = (1..=n)
        .map(|vertex| if vertex > 1 { vec![vertex - 1] } else { Vec::new() })
        .collect();
    Ok(Digraph::from_adjacency(n - 1, fwd, back))
}

/// Builds the wheel graph on `n` vertices: hub `1` joined to the rim cycle
/// `2, …, n`.
///
/// Orders zero and one fall back to [`path_graph`]; orders two and three
/// fall back to [`cycle_graph`], since the rim only closes into a proper
/// cycle from four vertices up.
///
/// # Errors
///
/// Returns [`crate::BuildError::SizeOverflow`] when `2 * (n - 1)` does not
/// fit the index type.
pub fn wheel_graph(n: usize) -> BuildResult<Graph> {
    if n <= 1 {
        return path_graph(n);
    }
    if n <= 3 {
        return cycle_graph(n);
    }
    let edge_count = size::checked_product("wheel edge count", 2, n - 1)?;
    let mut adj = Vec::with_capacity(n);
    adj.push((2..=n).collect());
    adj.push(vec![1, 3, n]);
    for vertex in 3..n {
        adj.push(vec![1, vertex - 1, vertex + 1]);
    }
    adj.push(vec![1, 2, n - 1]);
    Ok(Graph::from_adjacency(edge_count, adj))
}

/// Builds the wheel digraph on `n` vertices: arcs from hub `1` to every
/// rim vertex and a directed rim ring `2 → 3 → … → n → 2`.
///
/// Orders up to two fall back to [`path_digraph`]. Order three is built by
/// hand: its two-vertex rim carries both ring arcs, which the general fill
/// cannot express.
///
/// # Errors
///
/// Returns [`crate::BuildError::SizeOverflow`] when `2 * (n - 1)` does not
/// fit the index type.
pub fn wheel_digraph(n: usize) -> BuildResult<Digraph> {
    if n <= 2 {
        return path_digraph(n);
    }
    if n == 3 {
        let mut graph = Digraph::empty(3);
        for (source, target) in [(1, 2), (1, 3), (2, 3), (3, 2)] {
            insert_known_arc(&mut graph, source, target);
        }
        return Ok(graph);
    }
    let edge_count = size::checked_product("wheel arc count", 2, n - 1)?;
    let mut fwd = Vec::with_capacity(n);
    let mut back = Vec::with_capacity(n);
    fwd.push((2..=n).collect());
    back.push(Vec::new());
    fwd.push(vec![3]);
    back.push(vec![1, n]);
    for vertex in 3..n {
        fwd.push(vec![vertex + 1]);
        back.push(vec![1, vertex - 1]);
    }
    fwd.push(vec![2]);
    back.push(vec![1, n - 1]);
    Ok(Digraph::from_adjacency(edge_count, fwd, back))
}

/// Builds the complete binary tree of depth `k` on `2^k - 1` vertices.
///
/// Vertex `1` is the root; vertex `j` has children `2j` and `2j + 1` and
/// parent `j / 2`, level by level, with the deepest level holding leaves
/// only.
///
/// # Errors
///
/// Returns [`crate::BuildError::SizeOverflow`] when `2^k - 1` does not fit
/// the index type.
pub fn binary_tree(k: usize) -> BuildResult<Graph> {
    if k == 0 {
        return Ok(Graph::empty(0));
    }
    if k == 1 {
        return Ok(Graph::empty(1));
    }
    let vertex_count = size::pow2_minus_one("binary tree vertex count", k)?;
    let mut adj = Vec::with_capacity(vertex_count);
    adj.push(vec![2, 3]);
    for level in 1..(k - 1) {
        for vertex in (1_usize << level)..(1_usize << (level + 1)) {
            adj.push(vec![vertex >> 1, 2 * vertex, 2 * vertex + 1]);
        }
    }
    for vertex in (1_usize << (k - 1))..=vertex_count {
        adj.push(vec![vertex >> 1]);
    }
    debug!(depth = k, vertices = vertex_count, "built binary tree");
    Ok(Graph::from_adjacency(vertex_count - 1, adj))
}
