//! Property-based tests for the topology constructors.
//!
//! Samples parameters across every family and verifies the general laws
//! all generated graphs share (sorted duplicate-free adjacency, symmetry
//! or forward/backward mirroring, declared-versus-derived edge counts) as
//! well as each family's closed-form vertex and edge counts.

mod laws;
mod strategies;
mod tests;
