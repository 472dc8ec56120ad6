//! Simulation engine: configuration, parsed rule and history window in one
//! owned value.
//!
//! All configuration changes go through [`Engine::apply`], which takes
//! `&mut self`; a step can never observe a half-applied update.
//!
//! ```
//! use voxlife::{ConfigUpdate, Engine, RuleFamily, SimConfig};
//!
//! let mut engine = Engine::new(SimConfig::default());
//! engine.reset();
//! engine.step_n(10);
//! assert_eq!(engine.history_snapshot().len(), 11);
//!
//! engine.apply(ConfigUpdate::Family(RuleFamily::Elementary));
//! engine.apply(ConfigUpdate::ElementaryRule(90.0));
//! engine.step();
//! ```

use crate::config::{sanitize_density, SimConfig, MAX_GENERATIONS, MAX_GRID_SIZE};
use crate::grid::Grid;
use crate::history::{apply_instance_budget, HistoryWindow, SeedPlan, INSTANCE_CEILING};
use crate::neighborhood::NeighborMode;
use crate::rule::{clamp_eca_rule, LifeRule, RuleFamily, StartMode};
use crate::stepper::Stepper;

/// A single configuration change
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigUpdate {
    Seed(u32),
    Density(f64),
    GridSize { width: usize, depth: usize },
    GenerationDepth(usize),
    Neighborhood(NeighborMode),
    WrapEdges(bool),
    Family(RuleFamily),
    LifeRule(String),
    /// Rounded and clamped into 0..=255
    ElementaryRule(f64),
    StartMode(StartMode),
}

/// What an update did to the history window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateEffect {
    /// Window discarded and reseeded
    Reset,
    /// Capacity changed in place; oldest generations may have been evicted
    Resized,
    /// Applies from the next step on
    NextStep,
}

#[derive(Debug, Clone)]
pub struct Engine {
    config: SimConfig,
    life_rule: LifeRule,
    generations: usize,
    ceiling: usize,
    history: HistoryWindow,
}

impl Engine {
    /// Creates an engine with an empty history. Call [`Engine::reset`] before stepping.
    pub fn new(config: SimConfig) -> Self {
        Self::with_ceiling(config, INSTANCE_CEILING)
    }

    /// Same as [`Engine::new`] with a custom instance budget
    pub fn with_ceiling(config: SimConfig, ceiling: usize) -> Self {
        let mut config = config.sanitized();
        let life_rule = LifeRule::parse(&config.life_rule);
        config.life_rule = life_rule.text().to_string();
        let generations = apply_instance_budget(config.width, config.depth, config.generations, ceiling);
        log_budget(&config, generations);

        Self {
            config,
            life_rule,
            generations,
            ceiling,
            history: HistoryWindow::new(generations),
        }
    }

    /// Discards the window and seeds a new initial grid from the configuration
    pub fn reset(&mut self) {
        let plan = SeedPlan {
            width: self.config.width,
            depth: self.config.depth,
            seed: self.config.seed,
            density: self.config.density,
            family: self.config.family,
            start: self.config.start,
        };
        self.history.reset(&plan, self.generations);
    }

    /// Advances one generation. Panics if the engine was never reset.
    pub fn step(&mut self) -> &Grid {
        let stepper = self.stepper();
        self.history.step(&stepper)
    }

    pub fn step_n(&mut self, n: usize) {
        let stepper = self.stepper();
        for _ in 0..n {
            self.history.step(&stepper);
        }
    }

    /// Step function for the current family, rule and edge policy
    pub fn stepper(&self) -> Stepper {
        match self.config.family {
            RuleFamily::Life => Stepper::Life {
                masks: *self.life_rule.masks(),
                mode: self.config.neighborhood,
                wrap: self.config.wrap,
            },
            RuleFamily::Elementary => Stepper::Elementary {
                rule: self.config.eca_rule,
                wrap: self.config.wrap,
            },
        }
    }

    /// Applies one configuration change
    pub fn apply(&mut self, update: ConfigUpdate) -> UpdateEffect {
        tracing::debug!(?update, "config update");
        match update {
            ConfigUpdate::Seed(seed) => self.config.seed = seed,
            ConfigUpdate::Density(density) => self.config.density = sanitize_density(density),
            ConfigUpdate::GridSize { width, depth } => {
                self.config.width = width.clamp(1, MAX_GRID_SIZE);
                self.config.depth = depth.clamp(1, MAX_GRID_SIZE);
                self.rebudget();
            }
            ConfigUpdate::GenerationDepth(generations) => {
                self.config.generations = generations.clamp(1, MAX_GENERATIONS);
                self.rebudget();
                self.history.set_capacity(self.generations);
                return UpdateEffect::Resized;
            }
            ConfigUpdate::Neighborhood(mode) => {
                self.config.neighborhood = mode;
                return UpdateEffect::NextStep;
            }
            ConfigUpdate::WrapEdges(wrap) => {
                self.config.wrap = wrap;
                return UpdateEffect::NextStep;
            }
            ConfigUpdate::Family(family) => self.config.family = family,
            ConfigUpdate::LifeRule(text) => {
                self.life_rule = LifeRule::parse(&text);
                self.config.life_rule = self.life_rule.text().to_string();
            }
            ConfigUpdate::ElementaryRule(n) => self.config.eca_rule = clamp_eca_rule(n),
            ConfigUpdate::StartMode(start) => self.config.start = start,
        }
        self.reset();
        UpdateEffect::Reset
    }

    fn rebudget(&mut self) {
        self.generations = apply_instance_budget(
            self.config.width,
            self.config.depth,
            self.config.generations,
            self.ceiling,
        );
        log_budget(&self.config, self.generations);
    }

    /// Canonical `B.../S...` text of the life-like rule
    pub fn normalized_rule_text(&self) -> &str {
        self.life_rule.text()
    }

    /// Retained generations, oldest to newest
    pub fn history_snapshot(&self) -> Vec<&Grid> {
        self.history.iter().collect()
    }

    pub fn history(&self) -> &HistoryWindow {
        &self.history
    }

    pub fn grid_dimensions(&self) -> (usize, usize) {
        (self.config.width, self.config.depth)
    }

    /// Generation depth after the instance budget was applied
    pub fn effective_generation_depth(&self) -> usize {
        self.generations
    }

    /// Newest grid. Panics if the engine was never reset.
    pub fn current_grid(&self) -> &Grid {
        self.history.current()
    }

    /// Steps since the last reset
    pub fn generation(&self) -> u64 {
        self.history.generation()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}

fn log_budget(config: &SimConfig, effective: usize) {
    if effective != config.generations {
        tracing::info!(
            width = config.width,
            depth = config.depth,
            requested = config.generations,
            effective,
            "generation depth reduced to fit instance budget"
        );
    }
}
