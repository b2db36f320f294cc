// Graph trait abstraction for partitioning
use super::NodeId;

/// Capability required from a graph to be partitioned.
///
/// Node ids are dense and zero-based, so the node count is all the
/// structure-oblivious partitioner needs. Edges are never traversed.
pub trait PartitionableGraph {
    /// Number of nodes; ids are `0..num_nodes()`.
    fn num_nodes(&self) -> usize;
}

/// A bare node count.
impl PartitionableGraph for usize {
    fn num_nodes(&self) -> usize {
        *self
    }
}

/// Adjacency lists indexed by node id.
impl PartitionableGraph for [Vec<NodeId>] {
    fn num_nodes(&self) -> usize {
        self.len()
    }
}

impl PartitionableGraph for Vec<Vec<NodeId>> {
    fn num_nodes(&self) -> usize {
        self.len()
    }
}

impl<G: PartitionableGraph + ?Sized> PartitionableGraph for &G {
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }
}
