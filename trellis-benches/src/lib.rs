//! Shared parameter tables for the trellis benchmarks.
//!
//! Keeping the tables in one place means every bench file sweeps the same
//! sizes, so group-to-group comparisons stay meaningful.

/// Orders used by the dense direct-fill benchmarks.
pub const DENSE_ORDERS: &[usize] = &[64, 256, 1_024];

/// Square side lengths used by the lattice benchmarks.
pub const GRID_EXTENTS: &[usize] = &[8, 16, 32];

/// `(clique order, ring length)` pairs used by the clique-ring benchmarks.
pub const CLIQUE_RINGS: &[(usize, usize)] = &[(4, 16), (8, 32), (16, 64)];
