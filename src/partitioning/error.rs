//! Partitioning errors for gnn-partition

use thiserror::Error;

/// Errors from partition construction and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PartitionError {
    /// The requested node count was negative.
    #[error("invalid node count {0}: must be non-negative")]
    InvalidNodeCount(i64),
    /// The offsets array for the requested part count could not be allocated.
    #[error("cannot allocate offsets for {parts} parts")]
    Allocation { parts: i64 },
    /// Offsets must hold at least two entries.
    #[error("offsets length mismatch: expected at least {expected}, got {got}")]
    OffsetsLength { expected: usize, got: usize },
    /// `offsets[index] > offsets[index + 1]`.
    #[error("offsets decrease at index {index}")]
    OffsetsNotMonotonic { index: usize },
    /// Offsets must start at 0 and end at the node count.
    #[error("offsets must span [0, {num_nodes}], got [{first}, {last}]")]
    OffsetsBounds {
        first: usize,
        last: usize,
        num_nodes: usize,
    },
    /// A permutation entry lies outside `[0, num_nodes)`.
    #[error("node {node} out of range for {num_nodes} nodes")]
    NodeOutOfRange { node: usize, num_nodes: usize },
    /// A node appears more than once in the permutation.
    #[error("node {0} appears more than once in the permutation")]
    DuplicateNode(usize),
}
