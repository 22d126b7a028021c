//! Graph containers and the composition primitives the generators consume.
//!
//! Vertices are the contiguous integers `1..=n` and every adjacency list is
//! kept sorted ascending, so two graphs with the same topology compare
//! equal list-for-list. The constructors in [`crate::generators`] rely on
//! these containers for storage only; all sizing and index arithmetic
//! happens before a container is touched.

mod directed;
mod ops;
mod undirected;

pub use self::{
    directed::Digraph,
    ops::{cartesian_product, crosspath, disjoint_union},
    undirected::Graph,
};
