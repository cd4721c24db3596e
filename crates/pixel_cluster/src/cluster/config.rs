//! Configuration for [`crate::cluster::Clusterizer`] runs.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cluster::{FloodFillClusterizer, PixelClusterizer, UnionFindClusterizer};
use crate::error::{Error, Result};

/// Labeling strategy. Both produce the same partition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClusterStrategy {
    #[default]
    FloodFill,
    UnionFind,
}

impl ClusterStrategy {
    pub(crate) fn clusterizer(self) -> &'static dyn PixelClusterizer {
        match self {
            ClusterStrategy::FloodFill => &FloodFillClusterizer,
            ClusterStrategy::UnionFind => &UnionFindClusterizer,
        }
    }
}

/// Ordering applied to the produced clusters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClusterOrder {
    /// Whatever order the strategy produced.
    #[default]
    Unspecified,
    /// Pixels row-major within each cluster, clusters by their first pixel.
    Canonical,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClusterConfig {
    /// Labeling strategy.
    pub strategy: ClusterStrategy,
    /// Output ordering.
    pub order: ClusterOrder,
    /// Clusters with fewer pixels are discarded after labeling. `1` keeps everything.
    pub min_pixels: usize,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            strategy: ClusterStrategy::default(),
            order: ClusterOrder::default(),
            min_pixels: 1,
        }
    }
}

impl ClusterConfig {
    /// Creates a new [`ClusterConfig`] that keeps every cluster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the labeling strategy.
    pub fn with_strategy(mut self, strategy: ClusterStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the output ordering.
    pub fn with_order(mut self, order: ClusterOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the minimum cluster size.
    pub fn with_min_pixels(mut self, min_pixels: usize) -> Self {
        self.min_pixels = min_pixels;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.min_pixels == 0 {
            return Err(Error::InvalidConfig("min_pixels must be >= 1".into()));
        }
        Ok(())
    }
}
