//! Constructors that grow an empty graph through the insertion primitive.
//!
//! Every insertion these builders attempt is valid by construction — the
//! loops are arranged so no duplicate, self-loop, or out-of-range edge can
//! occur — so the primitive's failure branch is guarded by debug
//! assertions rather than handled.

use tracing::trace;

use crate::{
    error::BuildResult,
    graph::{Digraph, Graph},
    size,
};

pub(super) fn insert_known_edge(graph: &mut Graph, source: usize, target: usize) {
    let inserted = graph.add_edge(source, target);
    debug_assert!(
        inserted.is_ok(),
        "edge ({source}, {target}) must be insertable by construction"
    );
}

pub(super) fn insert_known_arc(graph: &mut Digraph, source: usize, target: usize) {
    let inserted = graph.add_edge(source, target);
    debug_assert!(
        inserted.is_ok(),
        "arc ({source}, {target}) must be insertable by construction"
    );
}

/// Builds the cycle graph `1 - 2 - … - n - 1`.
///
/// Order zero yields the empty graph and order one a single isolated
/// vertex; order two is the single-edge graph, since the closing edge
/// would duplicate the opening one.
pub fn cycle_graph(n: usize) -> BuildResult<Graph> {
    let mut graph = Graph::empty(n);
    if n <= 1 {
        return Ok(graph);
    }
    if n == 2 {
        insert_known_edge(&mut graph, 1, 2);
        return Ok(graph);
    }
    for vertex in 1..n {
        insert_known_edge(&mut graph, vertex, vertex + 1);
    }
    insert_known_edge(&mut graph, n, 1);
    trace!(vertices = n, "closed cycle");
    Ok(graph)
}

/// Builds the directed ring `1 → 2 → … → n → 1`.
///
/// Order one is emitted as two vertices carrying the single arc `1 → 2`,
/// not as a one-vertex loop.
pub fn cycle_digraph(n: usize) -> BuildResult<Digraph> {
    if n == 0 {
        return Ok(Digraph::empty(0));
    }
    if n == 1 {
        let mut graph = Digraph::empty(2);
        insert_known_arc(&mut graph, 1, 2);
        return Ok(graph);
    }
    let mut graph = Digraph::empty(n);
    for vertex in 1..n {
        insert_known_arc(&mut graph, vertex, vertex + 1);
    }
    insert_known_arc(&mut graph, n, 1);
    Ok(graph)
}

/// Builds a ring of `n` disjoint `k`-cliques on `k * n` vertices.
///
/// Each block of `k` consecutive vertices is made complete, consecutive
/// blocks are bridged through their first vertices, and a closing bridge
/// joins the last block's first vertex back to vertex `1`. With fewer than
/// three blocks the ring degenerates: one block needs no bridge and two
/// blocks share a single bridge.
///
/// # Errors
///
/// Returns [`crate::BuildError::SizeOverflow`] when `k * n` does not fit
/// the index type.
pub fn clique_ring(k: usize, n: usize) -> BuildResult<Graph> {
    let vertex_count = size::checked_product("clique-ring vertex count", k, n)?;
    let mut graph = Graph::empty(vertex_count);
    if k == 0 || n == 0 {
        return Ok(graph);
    }
    for block in 0..n {
        let first = block * k + 1;
        let last = block * k + k;
        for source in first..last {
            for target in (source + 1)..=last {
                insert_known_edge(&mut graph, source, target);
            }
        }
    }
    for block in 1..n {
        insert_known_edge(&mut graph, (block - 1) * k + 1, block * k + 1);
    }
    if n >= 3 {
        insert_known_edge(&mut graph, 1, (n - 1) * k + 1);
    }
    trace!(
        cliques = n,
        clique_order = k,
        edges = graph.edge_count(),
        "closed clique ring"
    );
    Ok(graph)
}

// ============================================================================
// Kani Formal Verification
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    //! Bounded harnesses for the ring constructors.

    use super::cycle_graph;

    /// Verifies cycle structural invariants for bounded orders: consistent
    /// adjacency, the documented degenerate edge counts, and degree two
    /// everywhere from order three up.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_cycle_structure_small_orders() {
        let n: usize = kani::any();
        kani::assume(n <= 8);

        let graph = match cycle_graph(n) {
            Ok(graph) => graph,
            Err(_) => return,
        };

        kani::assert(graph.is_consistent(), "cycle adjacency must be consistent");

        let expected_edges = match n {
            0 | 1 => 0,
            2 => 1,
            _ => n,
        };
        kani::assert(graph.edge_count() == expected_edges, "cycle edge count");

        if n >= 3 {
            for vertex in graph.vertices() {
                kani::assert(graph.degree(vertex) == Some(2), "cycle degree");
            }
        }
    }
}
