//! Parallel utilities for consuming partitions.
//!
//! This module provides per-worker random number generators, so independent data-loading
//! workers can each partition or sample reproducibly, and helpers for visiting parts
//! in parallel with rayon.

use super::{NodeId, NodePartition, PartId};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;

/// Golden ratio increment of the splitmix64 sequence.
const GOLDEN_RATIO_PRIME: u64 = 0x9e37_79b9_7f4a_7c15;

/// splitmix64 finalizer: a fixed bijective mix of one 64-bit word.
fn mix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(GOLDEN_RATIO_PRIME);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Derives the RNG seed of worker `worker_idx` from a global seed.
///
/// The derivation uses only fixed constants, so a fixed global seed gives every worker
/// the same seed on every run and every platform.
pub fn worker_seed(global_seed: u64, worker_idx: u64) -> u64 {
    mix64(global_seed ^ mix64(worker_idx))
}

/// A `SmallRng` owned by a single worker.
///
/// Streams repeat across runs for a given build target; `SmallRng` itself differs
/// between 32- and 64-bit platforms.
pub fn worker_rng(global_seed: u64, worker_idx: u64) -> SmallRng {
    SmallRng::seed_from_u64(worker_seed(global_seed, worker_idx))
}

/// Executes `func(part_id, nodes)` in parallel for every part, including empty ones.
pub fn par_for_each_part<F>(partition: &NodePartition, func: F)
where
    F: Fn(PartId, &[NodeId]) + Send + Sync,
{
    par_parts(partition).for_each(|(pid, nodes)| func(pid, nodes));
}

/// Maps every part in parallel; results are returned in part order.
pub fn par_map_parts<T, F>(partition: &NodePartition, func: F) -> Vec<T>
where
    T: Send,
    F: Fn(PartId, &[NodeId]) -> T + Send + Sync,
{
    par_parts(partition).map(|(pid, nodes)| func(pid, nodes)).collect()
}

fn par_parts(
    partition: &NodePartition,
) -> impl IndexedParallelIterator<Item = (PartId, &[NodeId])> + '_ {
    let perm = partition.permutation();
    partition
        .offsets()
        .par_windows(2)
        .map(move |w| &perm[w[0]..w[1]])
        .enumerate()
}
