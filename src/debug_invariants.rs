use crate::partitioning::{NodePartition, PartitionError};

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), PartitionError>;
}

/// Helper macro to run a fallible check and panic on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

impl DebugInvariants for NodePartition {
    fn debug_assert_invariants(&self) {
        debug_invariants!(self.validate_invariants(), "NodePartition");
    }

    /// Checks offset shape, offset monotonicity and that the permutation is a
    /// bijection on `0..num_nodes`.
    fn validate_invariants(&self) -> Result<(), PartitionError> {
        let offsets = self.offsets();
        let n = self.num_nodes();
        if offsets.len() < 2 {
            return Err(PartitionError::OffsetsLength {
                expected: 2,
                got: offsets.len(),
            });
        }
        let (first, last) = (offsets[0], offsets[offsets.len() - 1]);
        if first != 0 || last != n {
            return Err(PartitionError::OffsetsBounds {
                first,
                last,
                num_nodes: n,
            });
        }
        if let Some(index) = offsets.windows(2).position(|w| w[0] > w[1]) {
            return Err(PartitionError::OffsetsNotMonotonic { index });
        }

        let mut seen = vec![false; n];
        for &node in self.permutation() {
            let slot = seen
                .get_mut(node)
                .ok_or(PartitionError::NodeOutOfRange { node, num_nodes: n })?;
            if std::mem::replace(slot, true) {
                return Err(PartitionError::DuplicateNode(node));
            }
        }
        Ok(())
    }
}
