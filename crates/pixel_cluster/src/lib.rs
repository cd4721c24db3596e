#![forbid(unsafe_code)]
//! pixel_cluster: bounded boolean pixel grids and 4-connected cluster labeling.
//!
//! Modules:
//! - grid: the [`grid::PixelGrid`] access contract and the dense [`grid::BitGrid`]
//! - cluster: linear-time connected-component labeling (flood fill, union-find) and the
//!   configurable [`cluster::Clusterizer`] runner
//!
//! For examples, see the `pixel_cluster_examples` crate.
pub mod cluster;
pub mod error;
pub mod grid;

pub use cluster::cluster;

/// Convenient re-exports for common types. Import with `use pixel_cluster::prelude::*;`.
pub mod prelude {
    pub use crate::cluster::{
        cluster, sort_canonical, ClusterConfig, ClusterOrder, ClusterReport, ClusterStrategy,
        Clusterizer, FloodFillClusterizer, PixelCluster, PixelClusterizer, UnionFindClusterizer,
    };
    pub use crate::error::{Error, Result};
    pub use crate::grid::{BitGrid, PixelGrid, Point};
}
