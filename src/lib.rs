//! Generational cellular automata with a bounded layer history.
//!
//! Two families share one grid representation: life-like birth/survive rules
//! over a 2D neighborhood, and elementary (Wolfram) rules applied to every
//! row independently. Each step appends a new grid to a capped history
//! window that a layered renderer can draw oldest to newest.

pub mod config;
pub mod engine;
pub mod grid;
pub mod history;
pub mod neighborhood;
pub mod pacing;
pub mod rng;
pub mod rule;
pub mod settings;
pub mod stepper;

pub use config::{DisplayConfig, SimConfig, ViewMode};
pub use engine::{ConfigUpdate, Engine, UpdateEffect};
pub use grid::Grid;
pub use history::{apply_instance_budget, HistoryWindow, INSTANCE_CEILING};
pub use neighborhood::NeighborMode;
pub use rng::Mulberry32;
pub use rule::{parse_life_rule, LifeRule, RuleFamily, StartMode};
pub use stepper::Stepper;
