//! Binary cell grid, row-major over (x, z)

use crate::rng::Mulberry32;
use serde::{Deserialize, Serialize};

/// One generation of cells. Index is `z * width + x`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    depth: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid.
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, depth: usize) -> Self {
        assert!(width > 0 && depth > 0, "grid dimensions must be positive, got {}x{}", width, depth);
        Self {
            width,
            depth,
            cells: vec![false; width * depth],
        }
    }

    /// Fills every cell independently: alive when the next draw is below `density`.
    ///
    /// Cells are visited row by row (z outer, x inner), one draw per cell.
    pub fn seeded_random(width: usize, depth: usize, density: f64, rng: &mut Mulberry32) -> Self {
        let mut grid = Self::new(width, depth);
        for cell in grid.cells.iter_mut() {
            *cell = rng.next_f64() < density;
        }
        grid
    }

    /// One live cell at the horizontal center of every row.
    pub fn seeded_center(width: usize, depth: usize) -> Self {
        let mut grid = Self::new(width, depth);
        let center = width / 2;
        for z in 0..depth {
            grid.set(center, z, true);
        }
        grid
    }

    /// Builds a grid from row-major cells. Panics on a size mismatch.
    pub fn from_cells(width: usize, depth: usize, cells: Vec<bool>) -> Self {
        assert_eq!(cells.len(), width * depth, "cell count does not match {}x{}", width, depth);
        assert!(width > 0 && depth > 0, "grid dimensions must be positive, got {}x{}", width, depth);
        Self { width, depth, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.depth)
    }

    #[inline]
    pub fn get(&self, x: usize, z: usize) -> bool {
        self.cells[z * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, z: usize, alive: bool) {
        self.cells[z * self.width + x] = alive;
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Row `z` as a slice
    pub fn row(&self, z: usize) -> &[bool] {
        &self.cells[z * self.width..(z + 1) * self.width]
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let grid = Grid::new(5, 3);
        assert_eq!(grid.dimensions(), (5, 3));
        assert_eq!(grid.cells().len(), 15);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_row_major_layout() {
        let mut grid = Grid::new(4, 3);
        grid.set(1, 2, true);
        assert!(grid.cells()[2 * 4 + 1]);
        assert_eq!(grid.row(2), &[false, true, false, false]);
    }

    #[test]
    fn test_center_seed_every_row() {
        let grid = Grid::seeded_center(7, 4);
        for z in 0..4 {
            assert_eq!(grid.row(z), &[false, false, false, true, false, false, false]);
        }
        assert_eq!(grid.population(), 4);
    }

    #[test]
    fn test_density_extremes() {
        let mut rng = Mulberry32::new(9);
        assert_eq!(Grid::seeded_random(10, 10, 0.0, &mut rng).population(), 0);
        assert_eq!(Grid::seeded_random(10, 10, 1.0, &mut rng).population(), 100);
    }

    #[test]
    fn test_random_seed_reproducible() {
        let a = Grid::seeded_random(16, 16, 0.4, &mut Mulberry32::new(5));
        let b = Grid::seeded_random(16, 16, 0.4, &mut Mulberry32::new(5));
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    fn test_zero_width_panics() {
        Grid::new(0, 4);
    }
}
