//! Next-generation computation for both automaton families.
//!
//! Both step functions are pure: they read the current grid and return a
//! new grid of the same dimensions.

use crate::grid::Grid;
use crate::neighborhood::{count_live_neighbors, NeighborMode};
use crate::rule::RuleMasks;

/// Everything needed to advance one generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stepper {
    Life {
        masks: RuleMasks,
        mode: NeighborMode,
        wrap: bool,
    },
    Elementary {
        rule: u8,
        wrap: bool,
    },
}

impl Stepper {
    pub fn step(&self, grid: &Grid) -> Grid {
        match *self {
            Self::Life { ref masks, mode, wrap } => step_life(grid, masks, mode, wrap),
            Self::Elementary { rule, wrap } => step_elementary(grid, rule, wrap),
        }
    }
}

/// Life-like step: `survive[n]` for live cells, `birth[n]` for dead ones
pub fn step_life(grid: &Grid, masks: &RuleMasks, mode: NeighborMode, wrap: bool) -> Grid {
    let (width, depth) = grid.dimensions();
    let mut next = Grid::new(width, depth);

    for z in 0..depth {
        for x in 0..width {
            let neighbors = count_live_neighbors(grid, x, z, mode, wrap);
            next.set(x, z, masks.next_state(grid.get(x, z), neighbors));
        }
    }

    next
}

/// Elementary step: each row is an independent 1D automaton.
///
/// Pattern `(left << 2) | (center << 1) | right` selects a bit of `rule`.
/// Without wrap the missing neighbor at either end reads as dead.
pub fn step_elementary(grid: &Grid, rule: u8, wrap: bool) -> Grid {
    let (width, depth) = grid.dimensions();
    let mut next = Grid::new(width, depth);

    for z in 0..depth {
        let row = grid.row(z);
        for x in 0..width {
            let left = if x == 0 {
                wrap && row[width - 1]
            } else {
                row[x - 1]
            };
            let center = row[x];
            let right = if x == width - 1 {
                wrap && row[0]
            } else {
                row[x + 1]
            };

            let pattern = (left as u8) << 2 | (center as u8) << 1 | (right as u8);
            next.set(x, z, (rule >> pattern) & 1 == 1);
        }
    }

    next
}
