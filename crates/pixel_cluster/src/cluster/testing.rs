//! Shared assertions for clustering tests.
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use rand::Rng as RngCore;

use crate::cluster::PixelCluster;
use crate::grid::{BitGrid, Point};

/// Order-independent view of a clustering result.
pub(crate) fn partition(clusters: &[PixelCluster]) -> BTreeSet<BTreeSet<Point>> {
    clusters
        .iter()
        .map(|c| c.pixels().iter().copied().collect())
        .collect()
}

/// Checks partition, maximality and connectivity of `clusters` against `grid`.
pub(crate) fn assert_valid_clustering(grid: &BitGrid, clusters: &[PixelCluster]) {
    let mut owner: HashMap<Point, usize> = HashMap::new();
    for (idx, c) in clusters.iter().enumerate() {
        assert!(!c.is_empty(), "cluster {idx} is empty");
        for &p in c.pixels() {
            let prev = owner.insert(p, idx);
            assert!(prev.is_none(), "{p:?} appears more than once");
        }
    }

    let occupied: HashSet<Point> = grid.iter_occupied().collect();
    let covered: HashSet<Point> = owner.keys().copied().collect();
    assert_eq!(covered, occupied, "clusters do not partition the occupied cells");

    for (&p, &idx) in &owner {
        for n in p.neighbors4() {
            if let Some(&other) = owner.get(&n) {
                assert_eq!(other, idx, "{p:?} and {n:?} are adjacent but split");
            }
        }
    }

    for (idx, c) in clusters.iter().enumerate() {
        let members: HashSet<Point> = c.pixels().iter().copied().collect();
        let start = c.pixels()[0];
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(p) = queue.pop_front() {
            for n in p.neighbors4() {
                if members.contains(&n) && seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        assert_eq!(seen.len(), members.len(), "cluster {idx} is not connected");
    }
}

/// Quadratic reference: start from one singleton per occupied cell, then repeatedly pick a
/// cluster at random, merge every cluster adjacent to it, and finalize it once nothing is
/// adjacent.
pub(crate) fn pairwise_merge_oracle(grid: &BitGrid, rng: &mut dyn RngCore) -> Vec<PixelCluster> {
    let mut unmerged: Vec<PixelCluster> = grid
        .iter_occupied()
        .map(|p| PixelCluster::from_pixels(vec![p]))
        .collect();
    let mut done = Vec::new();

    while !unmerged.is_empty() {
        let pick = rng.next_u32() as usize % unmerged.len();
        let candidate = unmerged.swap_remove(pick);

        let (adjacent, rest): (Vec<_>, Vec<_>) = unmerged
            .into_iter()
            .partition(|c| candidate.is_adjacent_to(c));
        unmerged = rest;

        if adjacent.is_empty() {
            done.push(candidate);
        } else {
            let pixels = std::iter::once(candidate)
                .chain(adjacent)
                .flat_map(PixelCluster::into_pixels)
                .collect();
            unmerged.push(PixelCluster::from_pixels(pixels));
        }
    }

    done
}
