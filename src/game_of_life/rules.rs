//! Game of Life rules implementation

use super::Grid;
use itertools::iproduct;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Apply Game of Life rules to evolve the grid one generation forward.
    ///
    /// Every neighbour count is read from `current`, which is never written,
    /// so the result does not depend on cell visiting order.
    pub fn evolve(current: &Grid) -> Grid {
        let next_cells: Vec<bool> = iproduct!(0..current.height(), 0..current.width())
            .map(|(row, col)| {
                Self::should_be_alive(current.get(row, col), current.count_neighbors(row, col))
            })
            .collect();

        Grid::from_raw(current.width(), current.height(), next_cells)
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid);
        }
        grid
    }

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }
}
