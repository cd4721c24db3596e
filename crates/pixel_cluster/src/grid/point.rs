//! Integer pixel coordinates and the 4-neighbourhood.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pixel coordinate. Valid for a grid when `0 <= x < width` and `0 <= y < height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Axis-aligned neighbour offsets. Diagonals are never neighbours.
pub const NEIGHBORS_4: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns `true` if `other` differs by exactly one step along a single axis.
    #[inline]
    pub fn is_adjacent_to(&self, other: &Point) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        (dx == 0 && dy == 1) || (dy == 0 && dx == 1)
    }

    /// The four axis-aligned neighbours, which may lie outside any particular grid.
    pub fn neighbors4(&self) -> [Point; 4] {
        NEIGHBORS_4.map(|(dx, dy)| Point::new(self.x + dx, self.y + dy))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}
