//! Sliding window of recent generations, oldest first

use crate::grid::Grid;
use crate::rng::Mulberry32;
use crate::rule::{RuleFamily, StartMode};
use crate::stepper::Stepper;
use std::collections::VecDeque;

/// Upper bound on `width * depth * generations` the renderer will materialize
pub const INSTANCE_CEILING: usize = 350_000;
/// Generation depth never drops below this when the budget is tight
pub const MIN_GENERATIONS: usize = 4;

/// Clamps the requested generation depth against the instance budget.
///
/// Only the generation count is reduced, never the grid dimensions. The
/// result is at least [`MIN_GENERATIONS`] even if that still exceeds the
/// ceiling.
pub fn apply_instance_budget(width: usize, depth: usize, requested: usize, ceiling: usize) -> usize {
    let cells = width.max(1).saturating_mul(depth.max(1));
    if cells.saturating_mul(requested) <= ceiling {
        requested
    } else {
        (ceiling / cells).max(MIN_GENERATIONS)
    }
}

/// How the first grid after a reset is filled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedPlan {
    pub width: usize,
    pub depth: usize,
    pub seed: u32,
    pub density: f64,
    pub family: RuleFamily,
    pub start: StartMode,
}

impl SeedPlan {
    /// Builds the initial grid from a fresh generator
    pub fn initial_grid(&self) -> Grid {
        match (self.family, self.start) {
            (RuleFamily::Elementary, StartMode::Single) => Grid::seeded_center(self.width, self.depth),
            _ => {
                let mut rng = Mulberry32::new(self.seed);
                Grid::seeded_random(self.width, self.depth, self.density, &mut rng)
            }
        }
    }
}

/// Capped FIFO of grids. The newest grid is the basis for the next step.
#[derive(Debug, Clone)]
pub struct HistoryWindow {
    frames: VecDeque<Grid>,
    capacity: usize,
    generation: u64,
}

impl HistoryWindow {
    /// An empty window. `capacity` is raised to 1 if zero.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            frames: VecDeque::with_capacity(capacity),
            capacity,
            generation: 0,
        }
    }

    /// Replaces the whole window with one freshly seeded grid
    pub fn reset(&mut self, plan: &SeedPlan, capacity: usize) {
        let mut window = Self::new(capacity);
        window.frames.push_back(plan.initial_grid());
        *self = window;
        tracing::debug!(
            width = plan.width,
            depth = plan.depth,
            seed = plan.seed,
            capacity = self.capacity,
            "history reset"
        );
    }

    /// Computes the next generation from the newest grid and appends it,
    /// evicting the oldest grid when over capacity.
    ///
    /// Panics if the window has not been seeded.
    pub fn step(&mut self, stepper: &Stepper) -> &Grid {
        let next = stepper.step(self.current());
        self.push(next);
        self.current()
    }

    fn push(&mut self, grid: Grid) {
        self.frames.push_back(grid);
        while self.frames.len() > self.capacity {
            self.frames.pop_front();
        }
        self.generation += 1;
    }

    /// Newest grid. Panics if the window is empty.
    pub fn current(&self) -> &Grid {
        self.frames
            .back()
            .expect("history window queried before reset: no current grid")
    }

    pub fn try_current(&self) -> Option<&Grid> {
        self.frames.back()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the capacity in place, evicting the oldest grids if needed
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.frames.len() > self.capacity {
            self.frames.pop_front();
        }
    }

    /// Steps taken since the last reset, evictions included
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Grid> + ExactSizeIterator {
        self.frames.iter()
    }
}
