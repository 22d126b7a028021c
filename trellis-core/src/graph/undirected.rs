//! Undirected graph container with one-based vertices and sorted adjacency.

use std::ops::RangeInclusive;

use crate::error::EdgeInsertError;

/// An undirected graph on vertices `1..=n`.
///
/// The stored edge count is kept consistent with the adjacency structure at
/// all times: [`Graph::add_edge`] maintains it incrementally and the bulk
/// constructor asserts it in debug builds.
///
/// # Examples
/// ```
/// use trellis_core::Graph;
///
/// let mut graph = Graph::empty(3);
/// graph.add_edge(1, 2).expect("edge is valid");
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.neighbours(1), Some(&[2][..]));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    pub(super) edge_count: usize,
    pub(super) adj: Vec<Vec<usize>>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn empty(vertex_count: usize) -> Self {
        Self {
            edge_count: 0,
            adj: vec![Vec::new(); vertex_count],
        }
    }

    /// Wraps a fully-assembled adjacency structure in O(n).
    ///
    /// Callers guarantee the lists are sorted, symmetric, in range, and
    /// loop-free, and that `edge_count` matches; only debug builds
    /// re-check.
    pub(crate) fn from_adjacency(edge_count: usize, adj: Vec<Vec<usize>>) -> Self {
        let graph = Self { edge_count, adj };
        debug_assert!(
            graph.is_consistent(),
            "bulk adjacency must already be canonical"
        );
        graph
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the vertex range `1..=n`.
    #[must_use]
    pub fn vertices(&self) -> RangeInclusive<usize> {
        1..=self.vertex_count()
    }

    /// Returns the sorted neighbour list of `vertex`, or `None` when the
    /// vertex is out of range.
    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> Option<&[usize]> {
        vertex
            .checked_sub(1)
            .and_then(|slot| self.adj.get(slot))
            .map(Vec::as_slice)
    }

    /// Returns the degree of `vertex`, or `None` when it is out of range.
    #[must_use]
    pub fn degree(&self, vertex: usize) -> Option<usize> {
        self.neighbours(vertex).map(<[usize]>::len)
    }

    /// Returns `true` when the edge `{source, target}` is present.
    #[must_use]
    pub fn has_edge(&self, source: usize, target: usize) -> bool {
        self.neighbours(source)
            .is_some_and(|list| list.binary_search(&target).is_ok())
    }

    /// Iterates over the edges as `(source, target)` pairs with
    /// `source < target`, ascending by source then target.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj.iter().enumerate().flat_map(|(slot, list)| {
            let source = slot + 1;
            list.iter()
                .copied()
                .filter(move |&target| target > source)
                .map(move |target| (source, target))
        })
    }

    /// Inserts the undirected edge `{source, target}`, keeping both
    /// neighbour lists sorted.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeInsertError::OutOfRange`] when an endpoint is not in
    /// `1..=n`, [`EdgeInsertError::SelfLoop`] when both endpoints coincide,
    /// and [`EdgeInsertError::DuplicateEdge`] when the edge already exists.
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
        if source == target {
            return Err(EdgeInsertError::SelfLoop { vertex: source });
        }
        let position = match self.adj[source - 1].binary_search(&target) {
            Ok(_) => return Err(EdgeInsertError::DuplicateEdge { source, target }),
            Err(position) => position,
        };
        self.adj[source - 1].insert(position, target);
        let mirror = self.adj[target - 1].binary_search(&source);
        debug_assert!(mirror.is_err(), "mirror list already contains {source}");
        if let Err(back_position) = mirror {
            self.adj[target - 1].insert(back_position, source);
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Checks the structural invariants every finished graph satisfies:
    /// sorted duplicate-free lists, indices in `1..=n`, no self-loops,
    /// symmetric adjacency, and an edge count matching the lists.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let vertex_count = self.vertex_count();
        let mut half_edges = 0_usize;
        for (slot, list) in self.adj.iter().enumerate() {
            let vertex = slot + 1;
            if !list.windows(2).all(|pair| pair[0] < pair[1]) {
                return false;
            }
            for &neighbour in list {
                if neighbour == 0 || neighbour > vertex_count || neighbour == vertex {
                    return false;
                }
                if !self.has_edge(neighbour, vertex) {
                    return false;
                }
            }
            half_edges += list.len();
        }
        self.edge_count
            .checked_mul(2)
            .is_some_and(|doubled| doubled == half_edges)
    }
}
