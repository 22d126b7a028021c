//! Directed graph container with mirrored forward and backward adjacency.

use std::ops::RangeInclusive;

use crate::error::EdgeInsertError;

/// A directed graph on vertices `1..=n`.
///
/// Every arc is recorded twice: in the source's forward list and the
/// target's backward list, both kept sorted ascending.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Digraph {
    pub(super) edge_count: usize,
    pub(super) fwd: Vec<Vec<usize>>,
    pub(super) back: Vec<Vec<usize>>,
}

impl Digraph {
    /// Creates a digraph with `vertex_count` vertices and no arcs.
    #[must_use]
    pub fn empty(vertex_count: usize) -> Self {
        Self {
            edge_count: 0,
            fwd: vec![Vec::new(); vertex_count],
            back: vec![Vec::new(); vertex_count],
        }
    }

    /// Wraps fully-assembled forward and backward adjacency in O(n).
    ///
    /// Callers guarantee mirrored, sorted, in-range lists and a matching
    /// arc count; only debug builds re-check.
    pub(crate) fn from_adjacency(
        edge_count: usize,
        fwd: Vec<Vec<usize>>,
        back: Vec<Vec<usize>>,
    ) -> Self {
        let graph = Self {
            edge_count,
            fwd,
            back,
        };
        debug_assert!(
            graph.is_consistent(),
            "bulk adjacency must already be canonical"
        );
        graph
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.fwd.len()
    }

    /// Returns the number of arcs.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the vertex range `1..=n`.
    #[must_use]
    pub fn vertices(&self) -> RangeInclusive<usize> {
        1..=self.vertex_count()
    }

    /// Returns the sorted list of vertices `vertex` points at.
    #[must_use]
    pub fn out_neighbours(&self, vertex: usize) -> Option<&[usize]> {
        vertex
            .checked_sub(1)
            .and_then(|slot| self.fwd.get(slot))
            .map(Vec::as_slice)
    }

    /// Returns the sorted list of vertices pointing at `vertex`.
    #[must_use]
    pub fn in_neighbours(&self, vertex: usize) -> Option<&[usize]> {
        vertex
            .checked_sub(1)
            .and_then(|slot| self.back.get(slot))
            .map(Vec::as_slice)
    }

    /// Returns the out-degree of `vertex`.
    #[must_use]
    pub fn out_degree(&self, vertex: usize) -> Option<usize> {
        self.out_neighbours(vertex).map(<[usize]>::len)
    }

    /// Returns the in-degree of `vertex`.
    #[must_use]
    pub fn in_degree(&self, vertex: usize) -> Option<usize> {
        self.in_neighbours(vertex).map(<[usize]>::len)
    }

    /// Returns `true` when the arc `source → target` is present.
    #[must_use]
    pub fn has_edge(&self, source: usize, target: usize) -> bool {
        self.out_neighbours(source)
            .is_some_and(|list| list.binary_search(&target).is_ok())
    }

    /// Inserts the arc `source → target`, keeping both lists sorted.
    ///
    /// Directed self-loops are permitted; none of the constructors in this
    /// crate produces one.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeInsertError::OutOfRange`] when an endpoint is not in
    /// `1..=n` and [`EdgeInsertError::DuplicateEdge`] when the arc already
    /// exists.
    pub fn add_edge(&mut self, source: usize, target: usize) -> Result<(), EdgeInsertError> {
        let vertex_count = self.vertex_count();
        for vertex in [source, target] {
            if vertex == 0 || vertex > vertex_count {
                return Err(EdgeInsertError::OutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
        let position = match self.fwd[source - 1].binary_search(&target) {
            Ok(_) => return Err(EdgeInsertError::DuplicateEdge { source, target }),
            Err(position) => position,
        };
        self.fwd[source - 1].insert(position, target);
        let mirror = self.back[target - 1].binary_search(&source);
        debug_assert!(mirror.is_err(), "backward list already contains {source}");
        if let Err(back_position) = mirror {
            self.back[target - 1].insert(back_position, source);
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Checks the structural invariants every finished digraph satisfies:
    /// sorted duplicate-free lists, indices in `1..=n`, forward/backward
    /// mirroring, and an arc count matching the forward lists.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.fwd.len() != self.back.len() {
            return false;
        }
        let vertex_count = self.vertex_count();
        let sorted_in_range = |lists: &[Vec<usize>]| {
            lists.iter().all(|list| {
                list.windows(2).all(|pair| pair[0] < pair[1])
                    && list
                        .iter()
                        .all(|&vertex| vertex >= 1 && vertex <= vertex_count)
            })
        };
        if !sorted_in_range(&self.fwd) || !sorted_in_range(&self.back) {
            return false;
        }
        for (slot, list) in self.fwd.iter().enumerate() {
            let source = slot + 1;
            for &target in list {
                if self.back[target - 1].binary_search(&source).is_err() {
                    return false;
                }
            }
        }
        for (slot, list) in self.back.iter().enumerate() {
            let target = slot + 1;
            for &source in list {
                if !self.has_edge(source, target) {
                    return false;
                }
            }
        }
        let forward_arcs: usize = self.fwd.iter().map(Vec::len).sum();
        let backward_arcs: usize = self.back.iter().map(Vec::len).sum();
        forward_arcs == self.edge_count && backward_arcs == self.edge_count
    }
}
