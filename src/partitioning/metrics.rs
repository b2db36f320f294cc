//! Partitioning metrics utilities.
//!
//! Size statistics for evaluating how evenly a [`NodePartition`] spreads nodes over its
//! parts. Intended for logging, testing, and CI validation.

use super::NodePartition;
use serde::Serialize;

/// Target nodes per part: `ceil(num_nodes / num_parts)`.
///
/// A part count of zero is treated as one part.
pub fn chunk_size(num_nodes: usize, num_parts: usize) -> usize {
    num_nodes.div_ceil(num_parts.max(1))
}

/// Number of nodes in each part, in part order.
pub fn part_sizes(p: &NodePartition) -> Vec<usize> {
    p.part_ranges().map(|r| r.len()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PartitionStats {
    pub num_parts: usize,
    pub min_size: usize,
    pub max_size: usize,
    /// Parts holding no nodes.
    pub empty_parts: usize,
    /// Largest part size over the mean part size; 1.0 is perfectly balanced.
    /// 0.0 for a graph without nodes.
    pub imbalance: f64,
}

/// Computes size statistics of a partition (O(num_parts)).
pub fn partition_stats(p: &NodePartition) -> PartitionStats {
    let sizes = part_sizes(p);
    let num_parts = sizes.len();
    let min_size = sizes.iter().copied().min().unwrap_or(0);
    let max_size = sizes.iter().copied().max().unwrap_or(0);
    let empty_parts = sizes.iter().filter(|&&s| s == 0).count();
    let total: usize = sizes.iter().sum();
    let imbalance = if total == 0 || num_parts == 0 {
        0.0
    } else {
        max_size as f64 * num_parts as f64 / total as f64
    };
    PartitionStats {
        num_parts,
        min_size,
        max_size,
        empty_parts,
        imbalance,
    }
}
