//! Neighbor offset tables and live-neighbor counting

use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// Orthogonal plus diagonal
const MOORE: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Orthogonal only
const VON_NEUMANN: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// 2D neighborhood used by life-like rules. Elementary rules ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeighborMode {
    #[default]
    Moore,
    VonNeumann,
}

impl NeighborMode {
    /// Unknown names fall back to Moore
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "vonneumann" | "von-neumann" | "von_neumann" | "vn" | "4" => Self::VonNeumann,
            _ => Self::Moore,
        }
    }

    /// (dx, dz) offsets in a fixed order
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::Moore => &MOORE,
            Self::VonNeumann => &VON_NEUMANN,
        }
    }
}

/// Counts live neighbors of (x, z).
///
/// With `wrap` the grid is a torus; without it, offsets falling outside the
/// grid are skipped.
pub fn count_live_neighbors(grid: &Grid, x: usize, z: usize, mode: NeighborMode, wrap: bool) -> u8 {
    let w = grid.width() as i32;
    let d = grid.depth() as i32;
    let xi = x as i32;
    let zi = z as i32;

    let mut count = 0u8;
    for &(dx, dz) in mode.offsets() {
        let (nx, nz) = if wrap {
            ((xi + dx).rem_euclid(w), (zi + dz).rem_euclid(d))
        } else {
            let nx = xi + dx;
            let nz = zi + dz;
            if nx < 0 || nx >= w || nz < 0 || nz >= d {
                continue;
            }
            (nx, nz)
        };
        if grid.get(nx as usize, nz as usize) {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_alive_but_origin() -> Grid {
        let mut cells = vec![true; 9];
        cells[0] = false;
        Grid::from_cells(3, 3, cells)
    }

    #[test]
    fn test_wrap_counts_all_eight() {
        let grid = all_alive_but_origin();
        assert_eq!(count_live_neighbors(&grid, 0, 0, NeighborMode::Moore, true), 8);
    }

    #[test]
    fn test_bounded_skips_outside() {
        let grid = all_alive_but_origin();
        assert_eq!(count_live_neighbors(&grid, 0, 0, NeighborMode::Moore, false), 3);
    }

    #[test]
    fn test_von_neumann() {
        let grid = all_alive_but_origin();
        assert_eq!(count_live_neighbors(&grid, 0, 0, NeighborMode::VonNeumann, true), 4);
        assert_eq!(count_live_neighbors(&grid, 0, 0, NeighborMode::VonNeumann, false), 2);
        // center sees the dead origin only through a diagonal
        assert_eq!(count_live_neighbors(&grid, 1, 1, NeighborMode::VonNeumann, false), 4);
        assert_eq!(count_live_neighbors(&grid, 1, 1, NeighborMode::Moore, false), 7);
    }

    #[test]
    fn test_offset_tables() {
        assert_eq!(NeighborMode::Moore.offsets().len(), 8);
        assert_eq!(NeighborMode::VonNeumann.offsets().len(), 4);
        assert!(!NeighborMode::Moore.offsets().contains(&(0, 0)));
    }

    #[test]
    fn test_unknown_mode_is_moore() {
        assert_eq!(NeighborMode::from_name("hexagonal"), NeighborMode::Moore);
        assert_eq!(NeighborMode::from_name("VonNeumann"), NeighborMode::VonNeumann);
    }
}
