//! Overflow-checked sizing for generated graphs.
//!
//! Every derived vertex or edge count — triangular numbers, block products,
//! powers of two, dimension products — is computed in `u128`, validated
//! against the index width, and only then narrowed to `usize`. A count the
//! index type cannot represent fails with [`BuildError::SizeOverflow`]
//! before any allocation happens; nothing is ever silently truncated.

use crate::error::{BuildError, BuildResult};

/// Narrows a full-width count to the index type.
pub(crate) fn narrow(count: &'static str, requested: u128) -> BuildResult<usize> {
    usize::try_from(requested).map_err(|_| BuildError::SizeOverflow { count, requested })
}

/// Computes `a + b` for vertex or edge totals.
pub(crate) fn checked_sum(count: &'static str, a: usize, b: usize) -> BuildResult<usize> {
    narrow(count, a as u128 + b as u128)
}

/// Computes `a * b` for block and copy counts.
pub(crate) fn checked_product(count: &'static str, a: usize, b: usize) -> BuildResult<usize> {
    narrow(count, a as u128 * b as u128)
}

/// Computes `n * (n - 1) / 2`, the edge count of a complete graph.
pub(crate) fn triangular_count(count: &'static str, n: usize) -> BuildResult<usize> {
    let wide = n as u128;
    narrow(count, wide * wide.saturating_sub(1) / 2)
}

/// Computes `n * (n - 1)`, the arc count of a complete digraph.
pub(crate) fn pair_count(count: &'static str, n: usize) -> BuildResult<usize> {
    let wide = n as u128;
    narrow(count, wide * wide.saturating_sub(1))
}

/// Computes `2^k - 1`, the order of a depth-`k` binary tree.
pub(crate) fn pow2_minus_one(count: &'static str, exponent: usize) -> BuildResult<usize> {
    if exponent >= 128 {
        return Err(BuildError::SizeOverflow {
            count,
            requested: u128::MAX,
        });
    }
    narrow(count, (1_u128 << exponent) - 1)
}

/// Computes the product of every dimension extent.
pub(crate) fn dimension_product(count: &'static str, dims: &[usize]) -> BuildResult<usize> {
    let mut product: u128 = 1;
    for &dim in dims {
        product = product
            .checked_mul(dim as u128)
            .ok_or(BuildError::SizeOverflow {
                count,
                requested: u128::MAX,
            })?;
    }
    narrow(count, product)
}
