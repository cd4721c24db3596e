//! Dense row-major boolean grid.
use std::fmt;

use rand::Rng as RngCore;

use super::{PixelGrid, Point};
use crate::error::{Error, Result};

const OCCUPIED: char = '#';
const EMPTY: char = '.';

/// A fixed-size grid storing one occupied flag per cell, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitGrid {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl BitGrid {
    /// Creates a `width x height` grid with every cell unoccupied.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidArgument(format!(
                "grid dimensions must be > 0, got {width}x{height}"
            )));
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| Error::InvalidArgument("grid dimensions overflow".into()))?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    /// Parses ASCII rows where `#` is occupied and `.` is empty. Row `i` becomes `y = i`.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let first = rows
            .first()
            .ok_or_else(|| Error::InvalidArgument("no rows given".into()))?;
        let width = first.as_ref().chars().count();
        let w = i32::try_from(width)
            .map_err(|_| Error::InvalidArgument(format!("row width {width} too large")))?;
        let h = i32::try_from(rows.len())
            .map_err(|_| Error::InvalidArgument(format!("row count {} too large", rows.len())))?;

        let mut grid = Self::new(w, h)?;
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(Error::InvalidArgument(format!(
                    "row {y} has {} cells, expected {width}",
                    row.chars().count()
                )));
            }
            for (x, c) in row.chars().enumerate() {
                let occupied = match c {
                    OCCUPIED => true,
                    EMPTY => false,
                    other => {
                        return Err(Error::InvalidArgument(format!(
                            "unexpected cell '{other}' at ({x}, {y})"
                        )))
                    }
                };
                grid.cells[y * width + x] = occupied;
            }
        }
        Ok(grid)
    }

    /// Creates a grid where each cell is occupied with probability `density`.
    pub fn random(width: i32, height: i32, density: f64, rng: &mut dyn RngCore) -> Result<Self> {
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::InvalidArgument(format!(
                "density must be within [0, 1], got {density}"
            )));
        }
        let mut grid = Self::new(width, height)?;
        for cell in &mut grid.cells {
            *cell = rand01(rng) < density;
        }
        Ok(grid)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    /// Iterates occupied coordinates in row-major order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = Point> + '_ {
        let w = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(move |(i, _)| Point::new((i % w) as i32, (i / w) as i32))
    }

    /// Marks every cell unoccupied.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Result<usize> {
        if !self.contains(x, y) {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}

impl PixelGrid for BitGrid {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn get(&self, x: i32, y: i32) -> Result<bool> {
        let i = self.index(x, y)?;
        Ok(self.cells[i])
    }

    fn set(&mut self, x: i32, y: i32, value: bool) -> Result<()> {
        let i = self.index(x, y)?;
        self.cells[i] = value;
        Ok(())
    }
}

impl fmt::Display for BitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width as usize).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &c in row {
                write!(f, "{}", if c { OCCUPIED } else { EMPTY })?;
            }
        }
        Ok(())
    }
}

/// Uniform float in `[0, 1)` with 53 bits of precision.
#[inline]
fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64
}
