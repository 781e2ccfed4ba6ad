//! # Error Types
//!
//! Error types for edge distribution. All errors are explicit and carry the
//! context needed to find the offending input.
//!
//! ## Error Policy
//!
//! - NO substituted values when an input is degenerate
//! - A zero extent is never treated as 1
//! - Clamping a resolved count to one is policy, not an error

use thiserror::Error;

use crate::axis::Axis;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while distributing donors along edges.
///
/// ## Example
///
/// ```rust
/// use edge_distribute::{extent::extent, Axis, DistributeError};
///
/// match extent(&[], Axis::X) {
///     Err(DistributeError::EmptyMesh) => {}
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributeError {
    /// A required input sequence has zero items.
    #[error("Input '{input}' is empty")]
    EmptyInput {
        /// Name of the empty input sequence
        input: &'static str,
    },

    /// The donor has no vertices but its extent is needed.
    #[error("Donor mesh has no vertices")]
    EmptyMesh,

    /// The donor has zero size along the orientation axis.
    #[error("Donor extent along {axis} axis is zero")]
    DegenerateDonor {
        /// Orientation axis the extent was measured along
        axis: Axis,
    },

    /// The target segment has zero length.
    #[error("Target segment has zero length")]
    DegenerateSegment,

    /// `length / extent` is too large to be an instance count.
    #[error("Segment fits {ratio} donors, more than can be counted")]
    CountOverflow {
        /// Rounded length-to-extent ratio
        ratio: f64,
    },

    /// A recipient edge references a vertex that does not exist.
    #[error("Recipient edge {edge} references vertex {index}, but only {vertex_count} vertices exist")]
    EdgeIndexOutOfRange {
        /// Position of the edge in the recipient edge list
        edge: usize,
        /// Offending vertex index
        index: usize,
        /// Number of recipient vertices
        vertex_count: usize,
    },

    /// A batch item failed; wraps the item's own error.
    #[error("Batch item {index} failed: {source}")]
    Item {
        /// Position of the item after broadcast alignment
        index: usize,
        /// Underlying failure
        #[source]
        source: Box<DistributeError>,
    },
}

impl DistributeError {
    /// Creates an empty input error.
    pub fn empty_input(input: &'static str) -> Self {
        Self::EmptyInput { input }
    }

    /// Wraps an error with the index of the batch item that produced it.
    pub fn at_item(self, index: usize) -> Self {
        Self::Item {
            index,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, stripping batch item context.
    pub fn root(&self) -> &DistributeError {
        match self {
            Self::Item { source, .. } => source.root(),
            other => other,
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for distribution operations.
pub type DistributeResult<T> = Result<T, DistributeError>;

// =============================================================================
// TESTS
// =============================================================================
