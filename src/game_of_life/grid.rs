//! Grid representation and utilities for Game of Life

use crate::error::{LifeError, Result};
use itertools::iproduct;
use std::fmt;

/// One generation of the automaton.
///
/// Cells are stored row-major; `row` runs along y and `col` along x.
/// A grid is never resized or mutated once built, the rule engine always
/// produces a fresh instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

/// Upper bound on cells per grid
pub const MAX_CELLS: usize = 1 << 28;

fn cell_count(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(LifeError::Configuration(format!(
            "Grid dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    width
        .checked_mul(height)
        .filter(|&count| count <= MAX_CELLS)
        .ok_or_else(|| {
            LifeError::Configuration(format!(
                "Grid of {}x{} exceeds the limit of {} cells",
                width, height, MAX_CELLS
            ))
        })
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let count = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![false; count],
        })
    }

    /// Create a grid from a 2D boolean array (outer index is the row)
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self> {
        if cells.is_empty() {
            return Err(LifeError::Configuration("Grid cannot be empty".into()));
        }

        let height = cells.len();
        let width = cells[0].len();

        if width == 0 {
            return Err(LifeError::Configuration("Grid width cannot be zero".into()));
        }

        // Verify all rows have the same length
        for (i, row) in cells.iter().enumerate() {
            if row.len() != width {
                return Err(LifeError::Configuration(format!(
                    "Row {} has length {}, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
        }

        Ok(Self {
            width,
            height,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    /// Create a grid of the given size with the listed `(row, col)` cells alive
    pub fn from_living<I>(width: usize, height: usize, living: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut cells = vec![false; cell_count(width, height)?];
        for (row, col) in living {
            if row >= height || col >= width {
                return Err(LifeError::Configuration(format!(
                    "Coordinates ({}, {}) out of bounds for {}x{} grid",
                    row, col, height, width
                )));
            }
            cells[row * width + col] = true;
        }

        Ok(Self { width, height, cells })
    }

    /// Build directly from a flat row-major buffer of matching length
    pub(crate) fn from_raw(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get cell value at coordinates
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row < self.height && col < self.width {
            self.cells[self.index(row, col)]
        } else {
            false // Out of bounds cells are considered dead
        }
    }

    /// Count living cells among the eight neighbours. Positions outside the
    /// grid are dead; there is no wraparound.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        iproduct!([-1isize, 0, 1], [-1isize, 0, 1])
            .filter(|&(dr, dc)| !(dr == 0 && dc == 0))
            .filter(|&(dr, dc)| self.is_alive_at(row as isize + dr, col as isize + dc))
            .count() as u8
    }

    fn is_alive_at(&self, row: isize, col: isize) -> bool {
        row >= 0
            && col >= 0
            && (row as usize) < self.height
            && (col as usize) < self.width
            && self.cells[self.index(row as usize, col as usize)]
    }

    /// Get all living cell coordinates as `(row, col)`
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.height, 0..self.width)
            .filter(|&(row, col)| self.get(row, col))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Fraction of living cells, 0.0 to 1.0
    pub fn density(&self) -> f64 {
        self.living_count() as f64 / self.cells.len() as f64
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = if self.get(row, col) { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
