#![cfg_attr(docsrs, feature(doc_cfg))]
//! # gnn-partition
//!
//! gnn-partition splits the node set of a large graph into disjoint, roughly balanced
//! parts so that graph neural network training can build subgraphs and mini-batches one
//! part at a time, bounding the memory and compute of each step.
//!
//! The partitioner is structure-oblivious: it shuffles (or keeps) the node order and cuts
//! it into `ceil(num_nodes / num_parts)`-sized chunks. The result is a
//! [`NodePartition`](partitioning::NodePartition), a permutation of node ids together with
//! the offsets delimiting each part.
//!
//! ## Features
//! - `random_partition` / `partition_graph` with explicit, seedable randomness
//! - Node-to-part lookup via [`PartitionMap`](partitioning::PartitionMap)
//! - Part size statistics for logging and validation
//! - Rayon helpers for visiting parts in parallel and per-worker RNGs
//!
//! ## Determinism
//!
//! Randomness is never global. Callers pass an RNG, or a `PartitionerConfig` whose
//! `rng_seed` seeds a `SmallRng`, so runs are reproducible. Unit tests fix seeds
//! explicitly.
//!
//! ## Usage
//!
//! ```
//! use gnn_partition::prelude::*;
//!
//! let adjacency: Vec<Vec<usize>> = vec![vec![1], vec![0, 2], vec![1], vec![]];
//! let cfg = PartitionerConfig { n_parts: 2, ..Default::default() };
//! let p = partition_graph(&adjacency, &cfg).unwrap();
//! assert_eq!(p.offsets(), &[0, 2, 4]);
//! for nodes in p.parts() {
//!     assert_eq!(nodes.len(), 2);
//! }
//! ```

pub mod debug_invariants;
pub mod partitioning;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::partitioning::graph_traits::PartitionableGraph;
    pub use crate::partitioning::parallel::{par_for_each_part, par_map_parts, worker_rng};
    pub use crate::partitioning::{
        NodeId, NodePartition, PartId, PartitionError, PartitionMap, PartitionStats,
        PartitionerConfig, partition_graph, partition_graph_with_rng, partition_stats,
        random_partition,
    };
}
