//! High-level runner applying a [`ClusterConfig`] to a grid.
use tracing::{debug, warn};

use crate::cluster::{sort_canonical, ClusterConfig, ClusterOrder, PixelCluster};
use crate::error::Result;
use crate::grid::PixelGrid;

/// Result of a [`Clusterizer::run`].
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterReport {
    /// Clusters kept after filtering.
    pub clusters: Vec<PixelCluster>,
    /// Occupied pixels found in the grid, including those in discarded clusters.
    pub occupied_pixels: usize,
    /// Clusters dropped for being smaller than `min_pixels`.
    pub discarded_clusters: usize,
}

impl ClusterReport {
    /// Pixels covered by the kept clusters.
    pub fn clustered_pixels(&self) -> usize {
        self.clusters.iter().map(PixelCluster::len).sum()
    }

    /// Largest kept cluster, if any.
    pub fn largest(&self) -> Option<&PixelCluster> {
        self.clusters.iter().max_by_key(|c| c.len())
    }
}

/// Runs clustering with a validated [`ClusterConfig`].
#[derive(Debug, Clone, Default)]
pub struct Clusterizer {
    config: ClusterConfig,
}

impl Clusterizer {
    /// Creates a runner after validating `config`.
    pub fn try_new(config: ClusterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    /// Clusters `grid`. The grid is only read.
    pub fn run(&self, grid: &dyn PixelGrid) -> ClusterReport {
        let mut clusters = self.config.strategy.clusterizer().create_clusters(grid);
        let occupied_pixels: usize = clusters.iter().map(PixelCluster::len).sum();

        let found = clusters.len();
        let min_pixels = self.config.min_pixels;
        clusters.retain(|c| c.len() >= min_pixels);
        let discarded_clusters = found - clusters.len();
        if discarded_clusters > 0 {
            warn!(
                "Discarded {} of {} clusters smaller than {} pixels.",
                discarded_clusters, found, min_pixels
            );
        }

        if self.config.order == ClusterOrder::Canonical {
            sort_canonical(&mut clusters);
        }

        debug!(
            "Clustered {}x{} grid with {:?}: {} occupied pixels, {} clusters.",
            grid.width(),
            grid.height(),
            self.config.strategy,
            occupied_pixels,
            clusters.len(),
        );

        ClusterReport {
            clusters,
            occupied_pixels,
            discarded_clusters,
        }
    }
}
