use crate::neighborhood::NeighborMode;
use crate::pacing::MAX_STEPS_PER_TICK;
use crate::rule::{RuleFamily, StartMode, DEFAULT_LIFE_RULE};
use serde::{Deserialize, Serialize};

/// Largest accepted grid edge
pub const MAX_GRID_SIZE: usize = 512;
/// Largest accepted generation depth before budget clamping
pub const MAX_GENERATIONS: usize = 2000;

/// Simulation configuration (everything a reset is derived from)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub seed: u32,
    pub density: f64,           // Probability a cell starts alive (random fill)
    pub width: usize,           // Cells along x
    pub depth: usize,           // Cells along z
    pub generations: usize,     // Requested history depth, before budget clamping
    pub neighborhood: NeighborMode,
    pub wrap: bool,             // Toroidal edges
    pub family: RuleFamily,
    pub life_rule: String,      // Raw rule text, normalized on parse
    pub eca_rule: u8,
    pub start: StartMode,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 1337,
            density: 0.3,
            width: 64,
            depth: 64,
            generations: 48,
            neighborhood: NeighborMode::Moore,
            wrap: true,
            family: RuleFamily::Life,
            life_rule: DEFAULT_LIFE_RULE.to_string(),
            eca_rule: 30,
            start: StartMode::Single,
        }
    }
}

impl SimConfig {
    /// Clamps dimensions, depth and density into their accepted ranges
    pub fn sanitized(mut self) -> Self {
        self.width = self.width.clamp(1, MAX_GRID_SIZE);
        self.depth = self.depth.clamp(1, MAX_GRID_SIZE);
        self.generations = self.generations.clamp(1, MAX_GENERATIONS);
        self.density = sanitize_density(self.density);
        self
    }
}

/// Density in [0, 1]; NaN becomes 0
pub fn sanitize_density(density: f64) -> f64 {
    if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    }
}

/// Which projection of the history the viewer draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Looking down the generation axis, shaded by age
    #[default]
    Top,
    /// One row over time, newest at the bottom
    Slice,
}

impl ViewMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "top" | "layers" => Some(Self::Top),
            "slice" | "time" => Some(Self::Slice),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Top => Self::Slice,
            Self::Slice => Self::Top,
        }
    }
}

/// Viewer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub time_step: f32,         // Seconds per rendered frame
    pub steps_per_second: f32,  // Simulation rate
    pub max_steps_per_tick: u32,
    pub color_scheme: u8,       // 0-9, same numbering as the shifted digit keys
    pub draw_char: char,
    pub view: ViewMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time_step: 0.03,
            steps_per_second: 10.0,
            max_steps_per_tick: MAX_STEPS_PER_TICK,
            color_scheme: 0,
            draw_char: '#',
            view: ViewMode::Top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_clamps() {
        let config = SimConfig {
            width: 0,
            depth: 10_000,
            generations: 0,
            density: 3.5,
            ..SimConfig::default()
        }
        .sanitized();
        assert_eq!(config.width, 1);
        assert_eq!(config.depth, MAX_GRID_SIZE);
        assert_eq!(config.generations, 1);
        assert_eq!(config.density, 1.0);
    }

    #[test]
    fn test_nan_density() {
        assert_eq!(sanitize_density(f64::NAN), 0.0);
        assert_eq!(sanitize_density(-0.5), 0.0);
    }

    #[test]
    fn test_partial_toml() {
        let config: SimConfig = toml::from_str("width = 20\nfamily = \"elementary\"\nneighborhood = \"vonneumann\"").unwrap();
        assert_eq!(config.width, 20);
        assert_eq!(config.depth, 64);
        assert_eq!(config.family, RuleFamily::Elementary);
        assert_eq!(config.neighborhood, NeighborMode::VonNeumann);
    }

    #[test]
    fn test_display_defaults_use_pacing_cap() {
        assert_eq!(DisplayConfig::default().max_steps_per_tick, MAX_STEPS_PER_TICK);
        let display: DisplayConfig = toml::from_str("steps_per_second = 30.0").unwrap();
        assert_eq!(display.max_steps_per_tick, MAX_STEPS_PER_TICK);
    }

    #[test]
    fn test_view_toggle() {
        assert_eq!(ViewMode::Top.toggled(), ViewMode::Slice);
        assert_eq!(ViewMode::from_name("SLICE"), Some(ViewMode::Slice));
    }
}
