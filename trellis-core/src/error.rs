//! Error types for the trellis core library.
//!
//! Defines the construction-failure and edge-insertion error enums together
//! with their stable machine-readable codes.

use thiserror::Error;

/// Errors produced while sizing a generated graph.
///
/// Degenerate parameters (order zero, empty dimension lists) never raise an
/// error — every family maps them to an explicit small result. The only
/// construction failure is a derived count that the vertex index type
/// cannot represent.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum BuildError {
    /// A derived vertex or edge count does not fit the index width.
    #[error("{count} of {requested} cannot be represented by the vertex index type")]
    SizeOverflow {
        /// Name of the derived count that overflowed.
        count: &'static str,
        /// The value the constructor required, computed at full width.
        requested: u128,
    },
}

impl BuildError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> BuildErrorCode {
        match self {
            Self::SizeOverflow { .. } => BuildErrorCode::SizeOverflow,
        }
    }
}

/// Machine-readable error codes for [`BuildError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BuildErrorCode {
    /// A derived vertex or edge count does not fit the index width.
    SizeOverflow,
}

impl BuildErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SizeOverflow => "SIZE_OVERFLOW",
        }
    }
}

/// Errors reported by the edge-insertion primitive.
///
/// The incremental constructors in this crate only ever attempt insertions
/// that are valid by construction, so none of these variants is reachable
/// from a generator; the type exists for the container's general contract.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum EdgeInsertError {
    /// The edge is already present.
    DuplicateEdge { source: usize, target: usize },
    /// Both endpoints name the same vertex of an undirected graph.
    SelfLoop { vertex: usize },
    /// An endpoint is outside the vertex range.
    OutOfRange { vertex: usize, vertex_count: usize },
}

impl core::fmt::Display for EdgeInsertError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DuplicateEdge { source, target } => {
                write!(f, "edge ({source}, {target}) already exists")
            }
            Self::SelfLoop { vertex } => {
                write!(f, "edge ({vertex}, {vertex}) would be a self-loop")
            }
            Self::OutOfRange {
                vertex,
                vertex_count,
            } => write!(f, "vertex {vertex} is outside 1..={vertex_count}"),
        }
    }
}

impl std::error::Error for EdgeInsertError {}

impl EdgeInsertError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> EdgeInsertErrorCode {
        match self {
            Self::DuplicateEdge { .. } => EdgeInsertErrorCode::DuplicateEdge,
            Self::SelfLoop { .. } => EdgeInsertErrorCode::SelfLoop,
            Self::OutOfRange { .. } => EdgeInsertErrorCode::OutOfRange,
        }
    }
}

/// Machine-readable error codes for [`EdgeInsertError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EdgeInsertErrorCode {
    /// The edge is already present.
    DuplicateEdge,
    /// Both endpoints name the same vertex of an undirected graph.
    SelfLoop,
    /// An endpoint is outside the vertex range.
    OutOfRange,
}

impl EdgeInsertErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DuplicateEdge => "DUPLICATE_EDGE",
            Self::SelfLoop => "SELF_LOOP",
            Self::OutOfRange => "OUT_OF_RANGE",
        }
    }
}

/// Convenient alias for results returned by the constructors.
pub type BuildResult<T> = core::result::Result<T, BuildError>;
