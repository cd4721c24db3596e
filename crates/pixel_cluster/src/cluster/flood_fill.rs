//! Flood-fill cluster labeling.
use tracing::trace;

use crate::cluster::{point_at, read_occupancy, PixelCluster, PixelClusterizer};
use crate::grid::PixelGrid;

/// Depth-first flood fill with an explicit stack.
///
/// Cells are scanned row-major. Each occupied cell not yet claimed seeds a fill that
/// claims every cell reachable through 4-neighbours. A cell is claimed when it is pushed,
/// so it is visited exactly once and the stack never exceeds the number of occupied cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloodFillClusterizer;

impl PixelClusterizer for FloodFillClusterizer {
    fn create_clusters(&self, grid: &dyn PixelGrid) -> Vec<PixelCluster> {
        let w = grid.width().max(0) as usize;
        let h = grid.height().max(0) as usize;
        // `true` means occupied and not yet claimed by a cluster.
        let mut pending = read_occupancy(grid);

        let mut clusters = Vec::new();
        let mut stack: Vec<usize> = Vec::new();

        for seed in 0..pending.len() {
            if !pending[seed] {
                continue;
            }
            pending[seed] = false;
            stack.push(seed);

            let mut pixels = Vec::new();
            while let Some(i) = stack.pop() {
                pixels.push(point_at(i, w));

                let (x, y) = (i % w, i / w);
                let neighbors = [
                    (x > 0).then(|| i - 1),
                    (x + 1 < w).then(|| i + 1),
                    (y > 0).then(|| i - w),
                    (y + 1 < h).then(|| i + w),
                ];
                for n in neighbors.into_iter().flatten() {
                    if pending[n] {
                        pending[n] = false;
                        stack.push(n);
                    }
                }
            }

            trace!("Flood fill from {:?} claimed {} pixels.", point_at(seed, w), pixels.len());
            clusters.push(PixelCluster::from_pixels(pixels));
        }

        clusters
    }
}
