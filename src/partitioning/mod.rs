//! Entry-point for structure-oblivious node partitioning.
//!
//! [`random_partition`] splits `0..num_nodes` into `num_parts` contiguous ranges of a
//! (possibly shuffled) node permutation. The result is a [`NodePartition`], which keeps
//! the permutation and its offsets together.

pub mod assignment;
pub mod error;
pub mod graph_traits;
pub mod metrics;
pub mod parallel;

pub use self::assignment::PartitionMap;
pub use self::error::PartitionError;
pub use self::graph_traits::PartitionableGraph;
pub use self::metrics::{PartitionStats, chunk_size, part_sizes, partition_stats};

use crate::debug_invariants::DebugInvariants;
use itertools::Itertools;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Dense, zero-based graph vertex identifier.
pub type NodeId = usize;
/// Index of a part in `0..num_parts`.
pub type PartId = usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionerConfig {
    /// Requested number of parts; values `<= 1` yield a single part.
    pub n_parts: i64,
    /// Shuffle node ids before chunking. Ignored for a single part.
    pub shuffle: bool,
    /// Seeds the `SmallRng` that [`partition_graph`] shuffles with.
    pub rng_seed: u64,
}

impl Default for PartitionerConfig {
    fn default() -> Self {
        Self {
            n_parts: 1,
            shuffle: true,
            rng_seed: 42,
        }
    }
}

/// A node permutation plus the offsets delimiting each part.
///
/// Part `i` is `permutation[offsets[i]..offsets[i + 1]]`. The two arrays are only
/// meaningful together, so they are never handed out separately except through
/// [`NodePartition::into_parts`].
///
/// Deserialization goes through [`NodePartition::from_raw_parts`], so malformed input is
/// rejected instead of producing a partition whose accessors would panic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNodePartition")]
pub struct NodePartition {
    permutation: Vec<NodeId>,
    offsets: Vec<usize>,
}

/// Unchecked wire form of [`NodePartition`].
#[derive(Deserialize)]
struct RawNodePartition {
    permutation: Vec<NodeId>,
    offsets: Vec<usize>,
}

impl TryFrom<RawNodePartition> for NodePartition {
    type Error = PartitionError;

    fn try_from(raw: RawNodePartition) -> Result<Self, Self::Error> {
        Self::from_raw_parts(raw.permutation, raw.offsets)
    }
}

impl NodePartition {
    /// Rebuild a partition from raw arrays, checking every invariant.
    pub fn from_raw_parts(
        permutation: Vec<NodeId>,
        offsets: Vec<usize>,
    ) -> Result<Self, PartitionError> {
        let p = Self {
            permutation,
            offsets,
        };
        p.validate_invariants()?;
        Ok(p)
    }

    pub fn num_nodes(&self) -> usize {
        self.permutation.len()
    }

    /// Number of parts, including empty trailing parts.
    pub fn num_parts(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    pub fn permutation(&self) -> &[NodeId] {
        &self.permutation
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Nodes of part `i`, or `None` if `i >= num_parts()`.
    pub fn part(&self, i: PartId) -> Option<&[NodeId]> {
        let range = self.part_range(i)?;
        Some(&self.permutation[range])
    }

    pub fn part_len(&self, i: PartId) -> Option<usize> {
        self.part_range(i).map(|r| r.len())
    }

    fn part_range(&self, i: PartId) -> Option<Range<usize>> {
        let start = *self.offsets.get(i)?;
        let end = *self.offsets.get(i + 1)?;
        Some(start..end)
    }

    /// Half-open ranges into the permutation, one per part.
    pub fn part_ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.offsets.iter().tuple_windows().map(|(&a, &b)| a..b)
    }

    /// Iterate over the node slices of every part, in part order.
    pub fn parts(&self) -> impl ExactSizeIterator<Item = &[NodeId]> + '_ {
        self.offsets
            .windows(2)
            .map(move |w| &self.permutation[w[0]..w[1]])
    }

    /// Inverse mapping from node id to the part containing it.
    pub fn assignment(&self) -> PartitionMap {
        PartitionMap::from_partition(self)
    }

    pub fn into_parts(self) -> (Vec<NodeId>, Vec<usize>) {
        (self.permutation, self.offsets)
    }
}

/// Randomly partition `num_nodes` nodes into `num_parts` contiguous chunks.
///
/// Part sizes are `ceil(num_nodes / num_parts)` except for trailing parts, which absorb
/// the remainder and may be empty. When `num_parts <= 1` the identity permutation is
/// returned as a single part and `rng` is left untouched, regardless of `shuffle`.
///
/// # Errors
/// [`PartitionError::InvalidNodeCount`] if `num_nodes` is negative, and
/// [`PartitionError::Allocation`] if the offsets for `num_parts` do not fit in memory.
///
/// # Example
/// ```
/// use gnn_partition::partitioning::random_partition;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let p = random_partition(10, 4, false, &mut rng).unwrap();
/// assert_eq!(p.offsets(), &[0, 3, 6, 9, 10]);
/// assert_eq!(p.part(3), Some(&[9][..]));
/// ```
pub fn random_partition<R>(
    num_nodes: i64,
    num_parts: i64,
    shuffle: bool,
    rng: &mut R,
) -> Result<NodePartition, PartitionError>
where
    R: Rng + ?Sized,
{
    let n =
        usize::try_from(num_nodes).map_err(|_| PartitionError::InvalidNodeCount(num_nodes))?;
    partition_nodes(n, num_parts, shuffle, rng)
}

fn partition_nodes<R>(
    n: usize,
    num_parts: i64,
    shuffle: bool,
    rng: &mut R,
) -> Result<NodePartition, PartitionError>
where
    R: Rng + ?Sized,
{
    let mut permutation: Vec<NodeId> = (0..n).collect();

    if num_parts <= 1 {
        if num_parts < 1 {
            log::debug!("num_parts = {num_parts} treated as a single part");
        }
        let part = NodePartition {
            permutation,
            offsets: vec![0, n],
        };
        crate::debug_invariants!(part.validate_invariants(), "single-part partition");
        return Ok(part);
    }

    let alloc_err = PartitionError::Allocation { parts: num_parts };
    let parts = usize::try_from(num_parts).map_err(|_| alloc_err.clone())?;
    let mut offsets: Vec<usize> = Vec::new();
    parts
        .checked_add(1)
        .and_then(|len| offsets.try_reserve_exact(len).ok())
        .ok_or(alloc_err)?;

    if shuffle {
        log::trace!("shuffling {n} node ids");
        permutation.shuffle(rng);
    }

    let cs = chunk_size(n, parts);
    offsets.extend((0..=parts).map(|i| cs.saturating_mul(i).min(n)));

    let part = NodePartition {
        permutation,
        offsets,
    };
    crate::debug_invariants!(part.validate_invariants(), "random partition");
    log::debug!("partitioned {n} nodes into {parts} parts (chunk size {cs}, shuffle={shuffle})");
    Ok(part)
}

/// Partition `graph` according to `cfg`, seeding a `SmallRng` from `cfg.rng_seed`.
///
/// Equal configs on graphs with the same node count give equal partitions.
pub fn partition_graph<G>(
    graph: &G,
    cfg: &PartitionerConfig,
) -> Result<NodePartition, PartitionError>
where
    G: PartitionableGraph + ?Sized,
{
    let mut rng = SmallRng::seed_from_u64(cfg.rng_seed);
    partition_graph_with_rng(graph, cfg.n_parts, cfg.shuffle, &mut rng)
}

/// Partition `graph` using a caller-owned random source.
pub fn partition_graph_with_rng<G, R>(
    graph: &G,
    n_parts: i64,
    shuffle: bool,
    rng: &mut R,
) -> Result<NodePartition, PartitionError>
where
    G: PartitionableGraph + ?Sized,
    R: Rng + ?Sized,
{
    let part = partition_nodes(graph.num_nodes(), n_parts, shuffle, rng)?;
    if log::log_enabled!(log::Level::Debug) {
        let stats = partition_stats(&part);
        log::debug!(
            "part sizes: min {} max {} empty {} imbalance {:.3}",
            stats.min_size,
            stats.max_size,
            stats.empty_parts,
            stats.imbalance
        );
    }
    Ok(part)
}

#[cfg(test)]
mod tests;
