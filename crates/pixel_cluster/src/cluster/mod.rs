//! Connected-component labeling of occupied pixels under 4-connectivity.
//!
//! A [`PixelClusterizer`] reads a [`PixelGrid`] and returns every maximal group of occupied
//! cells that are connected through shared edges. Cells that only touch at a corner are
//! never merged. Both strategies run in `O(width * height)` time and space:
//! - [`FloodFillClusterizer`]: explicit-stack fill seeded at each unvisited occupied cell.
//! - [`UnionFindClusterizer`]: two-pass labeling over a disjoint-set forest.
//!
//! The order of clusters, and of pixels within a cluster, is unspecified. Use
//! [`ClusterOrder::Canonical`] or [`PixelCluster::sorted`] when a stable order is needed.
use std::collections::HashSet;

use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grid::{PixelGrid, Point};

pub mod config;
pub mod flood_fill;
pub mod runner;
pub mod union_find;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ClusterConfig, ClusterOrder, ClusterStrategy};
pub use flood_fill::FloodFillClusterizer;
pub use runner::{ClusterReport, Clusterizer};
pub use union_find::UnionFindClusterizer;

/// A non-empty set of pixel coordinates forming one connected component.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PixelCluster {
    pixels: Vec<Point>,
}

impl PixelCluster {
    pub(crate) fn from_pixels(pixels: Vec<Point>) -> Self {
        debug_assert!(!pixels.is_empty(), "clusters are never empty");
        Self { pixels }
    }

    /// The member pixels, in unspecified order.
    pub fn pixels(&self) -> &[Point] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<Point> {
        self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.pixels.contains(&p)
    }

    /// Inclusive `(min, max)` corners of the axis-aligned bounding box.
    pub fn bounding_box(&self) -> (Point, Point) {
        let mut min = Point::new(i32::MAX, i32::MAX);
        let mut max = Point::new(i32::MIN, i32::MIN);
        for p in &self.pixels {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        (min, max)
    }

    /// Mean pixel position.
    pub fn centroid(&self) -> Vec2 {
        let sum = self
            .pixels
            .iter()
            .fold(Vec2::ZERO, |acc, p| acc + Vec2::new(p.x as f32, p.y as f32));
        sum / self.pixels.len().max(1) as f32
    }

    /// Returns `true` if any pixel of `other` is 4-adjacent to a pixel of `self`.
    pub fn is_adjacent_to(&self, other: &PixelCluster) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let lookup: HashSet<Point> = large.pixels.iter().copied().collect();
        small
            .pixels
            .iter()
            .any(|p| p.neighbors4().iter().any(|n| lookup.contains(n)))
    }

    /// Returns the cluster with its pixels in row-major order.
    pub fn sorted(mut self) -> Self {
        self.sort();
        self
    }

    fn sort(&mut self) {
        self.pixels.sort_unstable_by_key(|p| (p.y, p.x));
    }
}

/// Trait for cluster labeling strategies.
pub trait PixelClusterizer: Send + Sync {
    /// Groups neighbouring occupied pixels into clusters. The grid is only read.
    fn create_clusters(&self, grid: &dyn PixelGrid) -> Vec<PixelCluster>;
}

/// Clusters `grid` with the default strategy ([`FloodFillClusterizer`]).
pub fn cluster(grid: &dyn PixelGrid) -> Vec<PixelCluster> {
    let clusters = FloodFillClusterizer.create_clusters(grid);
    debug!(
        "Clustered {}x{} grid: {} occupied pixels, {} clusters.",
        grid.width(),
        grid.height(),
        clusters.iter().map(PixelCluster::len).sum::<usize>(),
        clusters.len()
    );
    clusters
}

/// Sorts pixels within each cluster row-major and clusters by their first pixel.
pub fn sort_canonical(clusters: &mut [PixelCluster]) {
    for c in clusters.iter_mut() {
        c.sort();
    }
    clusters.sort_unstable_by_key(|c| c.pixels.first().map(|p| (p.y, p.x)));
}

/// Reads every cell of `grid` once into a row-major occupancy buffer.
pub(crate) fn read_occupancy(grid: &dyn PixelGrid) -> Vec<bool> {
    let (w, h) = (grid.width().max(0), grid.height().max(0));
    let mut cells = Vec::with_capacity(w as usize * h as usize);
    for y in 0..h {
        for x in 0..w {
            // Coordinates are in bounds, so an error here can only come from a broken
            // PixelGrid implementation; such cells are treated as unoccupied.
            cells.push(matches!(grid.get(x, y), Ok(true)));
        }
    }
    cells
}

#[inline]
pub(crate) fn point_at(index: usize, width: usize) -> Point {
    Point::new((index % width) as i32, (index / width) as i32)
}

#[cfg(test)]
mod tests {
    use super::testing::{assert_valid_clustering, partition};
    use super::*;
    use crate::grid::BitGrid;

    fn points(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn single_center_pixel_is_one_cluster() {
        let grid = BitGrid::from_rows(&["...", ".#.", "..."]).unwrap();
        let clusters = cluster(&grid);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].pixels(), &[Point::new(1, 1)]);
    }

    #[test]
    fn gap_splits_row_into_two_singletons() {
        let grid = BitGrid::from_rows(&["#.#"]).unwrap();
        let clusters = cluster(&grid);
        assert_eq!(
            partition(&clusters),
            partition(&[
                PixelCluster::from_pixels(points(&[(0, 0)])),
                PixelCluster::from_pixels(points(&[(2, 0)])),
            ])
        );
    }

    #[test]
    fn full_square_is_one_cluster() {
        let grid = BitGrid::from_rows(&["##", "##"]).unwrap();
        let clusters = cluster(&grid);
        assert_eq!(clusters.len(), 1);
        assert_eq!(
            clusters[0].clone().sorted().into_pixels(),
            points(&[(0, 0), (1, 0), (0, 1), (1, 1)])
        );
    }

    #[test]
    fn diagonal_neighbours_are_not_merged() {
        let grid = BitGrid::from_rows(&["#..", ".#.", "..."]).unwrap();
        let clusters = cluster(&grid);
        assert_eq!(clusters.len(), 2);
        assert!(clusters.iter().all(|c| c.len() == 1));
        assert_valid_clustering(&grid, &clusters);
    }

    #[test]
    fn empty_grid_has_no_clusters() {
        let grid = BitGrid::new(5, 4).unwrap();
        assert!(cluster(&grid).is_empty());
    }

    #[test]
    fn clustering_does_not_mutate_grid() {
        let grid = BitGrid::from_rows(&["#.#", "###"]).unwrap();
        let before = grid.clone();
        let _ = cluster(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn clusters_outlive_the_grid() {
        let clusters = {
            let grid = BitGrid::from_rows(&["##.", "..#"]).unwrap();
            cluster(&grid)
        };
        assert_eq!(clusters.iter().map(PixelCluster::len).sum::<usize>(), 3);
    }

    #[test]
    fn bounding_box_and_centroid() {
        let c = PixelCluster::from_pixels(points(&[(1, 1), (2, 1), (2, 2), (2, 3)]));
        assert_eq!(c.bounding_box(), (Point::new(1, 1), Point::new(2, 3)));
        assert_eq!(c.centroid(), Vec2::new(1.75, 1.75));
    }

    #[test]
    fn cluster_adjacency_ignores_diagonals() {
        let a = PixelCluster::from_pixels(points(&[(0, 0), (1, 0)]));
        let b = PixelCluster::from_pixels(points(&[(2, 1)]));
        let c = PixelCluster::from_pixels(points(&[(1, 1)]));
        assert!(!a.is_adjacent_to(&b));
        assert!(a.is_adjacent_to(&c));
        assert!(c.is_adjacent_to(&a));
    }

    #[test]
    fn cluster_covers_every_occupied_pixel() {
        let grid = BitGrid::from_rows(&["##.#", "...#", "#..."]).unwrap();
        let clusters = cluster(&grid);
        let covered: usize = clusters.iter().map(PixelCluster::len).sum();
        assert_eq!(covered, grid.occupied_count());
        assert_eq!(clusters.len(), 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn cluster_serde_roundtrip() {
        let grid = BitGrid::from_rows(&[".##", "..#"]).unwrap();
        let clusters = cluster(&grid);
        let json = serde_json::to_string(&clusters).unwrap();
        let back: Vec<PixelCluster> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, clusters);
    }

    #[test]
    fn sort_canonical_orders_by_first_pixel() {
        let grid = BitGrid::from_rows(&["#.#", "#.#", "..."]).unwrap();
        let mut clusters = cluster(&grid);
        sort_canonical(&mut clusters);
        let firsts: Vec<Point> = clusters.iter().map(|c| c.pixels()[0]).collect();
        assert_eq!(firsts, points(&[(0, 0), (2, 0)]));
        assert_eq!(clusters[1].pixels(), &points(&[(2, 0), (2, 1)])[..]);
    }
}
