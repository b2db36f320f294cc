#![allow(dead_code)]
use gnn_partition::partitioning::NodePartition;

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}

/// Union of all part slices, sorted.
pub fn covered_nodes(p: &NodePartition) -> Vec<usize> {
    let mut all: Vec<usize> = p.parts().flatten().copied().collect();
    all.sort_unstable();
    all
}

/// Graph known only by its node count.
pub struct CountOnlyGraph {
    pub n: usize,
}

impl gnn_partition::partitioning::PartitionableGraph for CountOnlyGraph {
    fn num_nodes(&self) -> usize {
        self.n
    }
}
