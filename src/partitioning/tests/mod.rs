use super::*;

fn identity(n: usize) -> Vec<NodeId> {
    (0..n).collect()
}

#[test]
fn four_parts_without_shuffle() {
    let mut rng = SmallRng::seed_from_u64(0);
    let p = random_partition(10, 4, false, &mut rng).expect("partition should succeed");
    assert_eq!(p.permutation(), identity(10).as_slice());
    assert_eq!(p.offsets(), &[0, 3, 6, 9, 10]);
    assert_eq!(p.num_parts(), 4);
    assert_eq!(p.part(1), Some(&[3, 4, 5][..]));
    assert_eq!(p.part(4), None);
    assert_eq!(p.part_len(3), Some(1));
}

#[test]
fn single_part_ignores_shuffle() {
    let mut rng = SmallRng::seed_from_u64(0);
    for parts in [1, 0, -3] {
        let p = random_partition(10, parts, true, &mut rng).unwrap();
        assert_eq!(p.permutation(), identity(10).as_slice());
        assert_eq!(p.offsets(), &[0, 10]);
    }
}

#[test]
fn single_part_leaves_rng_untouched() {
    let mut used = SmallRng::seed_from_u64(9);
    let mut fresh = SmallRng::seed_from_u64(9);
    random_partition(100, 1, true, &mut used).unwrap();
    assert_eq!(used.r#gen::<u64>(), fresh.r#gen::<u64>());
}

#[test]
fn empty_graph_has_empty_parts() {
    let mut rng = SmallRng::seed_from_u64(0);
    let p = random_partition(0, 4, true, &mut rng).unwrap();
    assert!(p.permutation().is_empty());
    assert_eq!(p.offsets(), &[0, 0, 0, 0, 0]);

    let p = random_partition(0, 1, true, &mut rng).unwrap();
    assert_eq!(p.offsets(), &[0, 0]);
}

#[test]
fn more_parts_than_nodes() {
    let mut rng = SmallRng::seed_from_u64(0);
    let p = random_partition(5, 10, false, &mut rng).unwrap();
    assert_eq!(p.offsets(), &[0, 1, 2, 3, 4, 5, 5, 5, 5, 5, 5]);
    assert_eq!(p.parts().filter(|s| s.is_empty()).count(), 5);
}

#[test]
fn negative_node_count_is_rejected() {
    let mut rng = SmallRng::seed_from_u64(0);
    let err = random_partition(-1, 4, true, &mut rng).unwrap_err();
    assert_eq!(err, PartitionError::InvalidNodeCount(-1));
}

#[test]
fn absurd_part_count_fails_to_allocate() {
    let mut rng = SmallRng::seed_from_u64(0);
    let err = random_partition(4, i64::MAX, false, &mut rng).unwrap_err();
    assert_eq!(err, PartitionError::Allocation { parts: i64::MAX });
}

#[test]
fn shuffled_partition_keeps_offsets() {
    let mut rng = SmallRng::seed_from_u64(1234);
    let p = random_partition(10, 4, true, &mut rng).unwrap();
    assert_eq!(p.offsets(), &[0, 3, 6, 9, 10]);
    let mut all: Vec<_> = p.parts().flatten().copied().collect();
    all.sort_unstable();
    assert_eq!(all, identity(10));
}

#[test]
fn config_seed_is_reproducible() {
    let cfg = PartitionerConfig {
        n_parts: 8,
        rng_seed: 7,
        ..Default::default()
    };
    let a = partition_graph(&1000usize, &cfg).unwrap();
    let b = partition_graph(&1000usize, &cfg).unwrap();
    assert_eq!(a, b);

    let other = PartitionerConfig { rng_seed: 8, ..cfg };
    let c = partition_graph(&1000usize, &other).unwrap();
    assert_eq!(a.offsets(), c.offsets());
    assert_ne!(a.permutation(), c.permutation());
}

#[test]
fn partition_graph_uses_node_count_only() {
    // 3-node path plus an isolated node
    let adj: Vec<Vec<usize>> = vec![vec![1], vec![0, 2], vec![1], vec![]];
    let cfg = PartitionerConfig {
        n_parts: 3,
        shuffle: false,
        ..Default::default()
    };
    let p = partition_graph(&adj, &cfg).unwrap();
    assert_eq!(p.offsets(), &[0, 2, 4, 4]);
    assert_eq!(p.assignment().as_slice(), &[0, 0, 1, 1]);
}

#[test]
fn into_parts_round_trips_through_from_raw_parts() {
    let mut rng = SmallRng::seed_from_u64(3);
    let p = random_partition(17, 5, true, &mut rng).unwrap();
    let (perm, offsets) = p.clone().into_parts();
    assert_eq!(NodePartition::from_raw_parts(perm, offsets).unwrap(), p);
}

#[test]
fn part_ranges_match_offsets() {
    let mut rng = SmallRng::seed_from_u64(0);
    let p = random_partition(7, 3, false, &mut rng).unwrap();
    let ranges: Vec<_> = p.part_ranges().collect();
    assert_eq!(ranges, vec![0..3, 3..6, 6..7]);
}
