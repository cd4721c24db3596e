//! Bounded boolean pixel grids.
//!
//! This module defines the [`PixelGrid`] access contract used by the clusterizers and the
//! dense [`BitGrid`] implementation:
//! - Implement [`PixelGrid`] to cluster your own storage without copying it.
//! - Use [`BitGrid`] when you just need a fixed-size foreground/background mask.
pub mod bit_grid;
pub mod point;

pub use bit_grid::BitGrid;
pub use point::{Point, NEIGHBORS_4};

use crate::error::Result;

/// Point-wise access to a fixed `width x height` boolean grid.
/// All accesses must happen within `(0, 0)` inclusive to `(width, height)` exclusive.
pub trait PixelGrid {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    /// Returns the occupied flag at `(x, y)`, or [`crate::error::Error::OutOfBounds`].
    fn get(&self, x: i32, y: i32) -> Result<bool>;

    /// Sets the occupied flag at `(x, y)`, or fails with [`crate::error::Error::OutOfBounds`]
    /// leaving the grid untouched.
    fn set(&mut self, x: i32, y: i32, value: bool) -> Result<()>;

    /// Returns `true` if `(x, y)` lies inside the grid.
    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width() && y < self.height()
    }
}
