//! Node-to-part lookup derived from a [`NodePartition`].
//!
//! Downstream consumers such as embedding lookups only need to know which part a node
//! belongs to. Node ids are dense, so the map is a plain vector indexed by node id.

use super::{NodeId, NodePartition, PartId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionMap {
    parts: Vec<PartId>,
    num_parts: usize,
}

impl PartitionMap {
    /// Invert `partition`, assigning each node the id of the part whose range holds it.
    pub fn from_partition(partition: &NodePartition) -> Self {
        let mut parts = vec![0; partition.num_nodes()];
        for (pid, nodes) in partition.parts().enumerate() {
            for &v in nodes {
                parts[v] = pid;
            }
        }
        Self {
            parts,
            num_parts: partition.num_parts(),
        }
    }

    /// Part containing `v`, or `None` if `v` is not a node of the partitioned graph.
    pub fn part_of(&self, v: NodeId) -> Option<PartId> {
        self.parts.get(v).copied()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn num_parts(&self) -> usize {
        self.num_parts
    }

    /// `(node, part)` pairs in node-id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, PartId)> + '_ {
        self.parts.iter().copied().enumerate()
    }

    /// Nodes assigned to `part`, in increasing id order.
    pub fn nodes_in(&self, part: PartId) -> impl Iterator<Item = NodeId> + '_ {
        self.iter().filter(move |&(_, p)| p == part).map(|(v, _)| v)
    }

    pub fn as_slice(&self) -> &[PartId] {
        &self.parts
    }
}
