//! Two-pass union-find cluster labeling.
//!
//! The first pass walks cells row-major and gives each occupied cell a provisional label,
//! taken from its left or upper neighbour when those are occupied. When both are occupied
//! with different labels the two labels are recorded as equivalent in a disjoint-set
//! forest. The second pass resolves every label to its root and groups cells by root.
use tracing::trace;

use crate::cluster::{point_at, read_occupancy, PixelCluster, PixelClusterizer};
use crate::grid::PixelGrid;

const UNLABELED: usize = usize::MAX;

/// Disjoint-set forest over provisional labels.
#[derive(Debug, Default)]
struct LabelForest {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl LabelForest {
    fn make_label(&mut self) -> usize {
        let label = self.parent.len();
        self.parent.push(label);
        self.size.push(1);
        label
    }

    /// Finds the root of `label`, halving the path on the way.
    fn find(&mut self, mut label: usize) -> usize {
        while self.parent[label] != label {
            let grandparent = self.parent[self.parent[label]];
            self.parent[label] = grandparent;
            label = grandparent;
        }
        label
    }

    /// Merges the classes of `a` and `b`, attaching the smaller tree to the larger.
    fn union(&mut self, a: usize, b: usize) -> usize {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return ra;
        }
        let (root, child) = if self.size[ra] >= self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        root
    }

    fn len(&self) -> usize {
        self.parent.len()
    }
}

/// Classic two-pass connected-component labeling with a union-find equivalence table.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnionFindClusterizer;

impl PixelClusterizer for UnionFindClusterizer {
    fn create_clusters(&self, grid: &dyn PixelGrid) -> Vec<PixelCluster> {
        let w = grid.width().max(0) as usize;
        let occupied = read_occupancy(grid);

        let mut labels = vec![UNLABELED; occupied.len()];
        let mut forest = LabelForest::default();

        for i in 0..occupied.len() {
            if !occupied[i] {
                continue;
            }
            let left = if i % w > 0 { labels[i - 1] } else { UNLABELED };
            let up = if i >= w { labels[i - w] } else { UNLABELED };

            labels[i] = match (left != UNLABELED, up != UNLABELED) {
                (false, false) => forest.make_label(),
                (true, false) => left,
                (false, true) => up,
                (true, true) => forest.union(left, up),
            };
        }

        trace!("Union-find first pass created {} provisional labels.", forest.len());

        // Maps a root label to its index in `groups`.
        let mut slot = vec![UNLABELED; forest.len()];
        let mut groups: Vec<Vec<_>> = Vec::new();
        for (i, &label) in labels.iter().enumerate() {
            if label == UNLABELED {
                continue;
            }
            let root = forest.find(label);
            if slot[root] == UNLABELED {
                slot[root] = groups.len();
                groups.push(Vec::new());
            }
            groups[slot[root]].push(point_at(i, w));
        }

        groups.into_iter().map(PixelCluster::from_pixels).collect()
    }
}
