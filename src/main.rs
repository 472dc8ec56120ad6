mod colors;
mod help;
mod render;
mod terminal;
mod viewer;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use voxlife::rule::{parse_eca_rule, preset, ELEMENTARY_PRESETS};
use voxlife::settings::Settings;
use voxlife::{Engine, Grid, NeighborMode, RuleFamily, SimConfig, StartMode, ViewMode};

#[derive(Parser)]
#[command(name = "voxlife")]
#[command(author = "Terminal Art Generator")]
#[command(version)]
#[command(about = "voxlife: layered cellular automata (life-like and elementary rules)", long_about = None)]
struct Cli {
    /// Settings file (defaults to <config dir>/voxlife/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive viewer
    Run {
        #[command(flatten)]
        sim: SimArgs,

        /// Seconds per rendered frame
        #[arg(short, long)]
        time: Option<f32>,

        /// Simulation steps per second
        #[arg(long)]
        rate: Option<f32>,

        /// Character used for live cells
        #[arg(short, long)]
        char: Option<String>,

        /// Initial view: top or slice
        #[arg(long)]
        view: Option<String>,
    },

    /// Run a number of steps and print the result
    Print {
        #[command(flatten)]
        sim: SimArgs,

        /// Steps to run before printing
        #[arg(short = 'n', long, default_value = "0")]
        steps: usize,

        /// top or slice
        #[arg(long, default_value = "top")]
        view: String,

        /// Row shown by the slice view (defaults to the middle row)
        #[arg(long)]
        row: Option<usize>,

        /// Dump the full history window as JSON
        #[arg(long)]
        json: bool,

        /// Character used for live cells
        #[arg(short, long, default_value = "#")]
        char: String,
    },
}

/// Simulation flags shared by every subcommand; unset flags keep the settings file values
#[derive(Args)]
struct SimArgs {
    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u32>,

    /// Initial fill probability (0.0-1.0)
    #[arg(short, long)]
    density: Option<f64>,

    /// Grid width (cells along x)
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Grid depth (cells along z)
    #[arg(short = 'D', long)]
    depth: Option<usize>,

    /// Generations kept in the history window
    #[arg(short, long)]
    generations: Option<usize>,

    /// Neighborhood: moore or vonneumann
    #[arg(long)]
    neighborhood: Option<String>,

    /// Disable toroidal wrap at the edges
    #[arg(long)]
    no_wrap: bool,

    /// Rule family: life or elementary
    #[arg(short, long)]
    family: Option<String>,

    /// Life-like rule (B3/S23 notation or a preset name such as highlife)
    #[arg(short, long)]
    rule: Option<String>,

    /// Elementary rule: a number (0-255), ruleN, or a name such as sierpinski
    #[arg(short, long, allow_hyphen_values = true)]
    eca: Option<String>,

    /// Elementary start: single or random
    #[arg(long)]
    start: Option<String>,
}

impl SimArgs {
    /// Overlays the flags on `base`
    fn apply_to(self, mut base: SimConfig) -> SimConfig {
        if let Some(seed) = self.seed {
            base.seed = seed;
        }
        if let Some(density) = self.density {
            base.density = density;
        }
        if let Some(width) = self.width {
            base.width = width;
        }
        if let Some(depth) = self.depth {
            base.depth = depth;
        }
        if let Some(generations) = self.generations {
            base.generations = generations;
        }
        if let Some(name) = self.neighborhood {
            base.neighborhood = NeighborMode::from_name(&name);
        }
        if self.no_wrap {
            base.wrap = false;
        }
        if let Some(name) = self.family {
            base.family = RuleFamily::from_name(&name).unwrap_or_else(|| {
                eprintln!("Unknown rule family: {}. Using life.", name);
                eprintln!("Available: life, elementary");
                RuleFamily::Life
            });
        }
        if let Some(rule) = self.rule {
            base.life_rule = preset(&rule).map(str::to_string).unwrap_or(rule);
        }
        if let Some(text) = self.eca {
            match parse_eca_rule(&text) {
                Some(rule) => base.eca_rule = rule,
                None => {
                    let names: Vec<&str> = ELEMENTARY_PRESETS.iter().map(|(name, _)| *name).collect();
                    eprintln!("Unknown elementary rule: {}. Keeping {}.", text, base.eca_rule);
                    eprintln!("Available: 0-255, rule<N>, {}", names.join(", "));
                }
            }
        }
        if let Some(name) = self.start {
            base.start = StartMode::from_name(&name).unwrap_or_else(|| {
                eprintln!("Unknown start mode: {}. Using single.", name);
                StartMode::Single
            });
        }
        base
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    rule: &'a str,
    config: &'a SimConfig,
    generation: u64,
    effective_generations: usize,
    /// Oldest to newest
    grids: Vec<&'a Grid>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("VOXLIFE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn parse_view(name: &str) -> ViewMode {
    ViewMode::from_name(name).unwrap_or_else(|| {
        eprintln!("Unknown view: {}. Using top.", name);
        ViewMode::Top
    })
}

fn main() -> io::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    match cli.command {
        Commands::Run { sim, time, rate, char: draw_char, view } => {
            let mut display = settings.display;
            if let Some(time) = time {
                display.time_step = time.max(0.0);
            }
            if let Some(rate) = rate {
                display.steps_per_second = rate;
            }
            if let Some(c) = draw_char.and_then(|s| s.chars().next()) {
                display.draw_char = c;
            }
            if let Some(name) = view {
                display.view = parse_view(&name);
            }

            let mut engine = Engine::new(sim.apply_to(settings.simulation));
            engine.reset();
            viewer::run(&mut engine, &display)?;
        }
        Commands::Print { sim, steps, view, row, json, char: draw_char } => {
            let mut engine = Engine::new(sim.apply_to(settings.simulation));
            engine.reset();
            engine.step_n(steps);

            if json {
                let snapshot = Snapshot {
                    rule: engine.normalized_rule_text(),
                    config: engine.config(),
                    generation: engine.generation(),
                    effective_generations: engine.effective_generation_depth(),
                    grids: engine.history_snapshot(),
                };
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
                return Ok(());
            }

            let row = row.unwrap_or(engine.grid_dimensions().1 / 2);
            let shade = match parse_view(&view) {
                ViewMode::Top => render::top_view(engine.history()),
                ViewMode::Slice => render::slice_view(engine.history(), row),
            };
            if let Some(shade) = shade {
                print!("{}", shade.to_text(draw_char.chars().next().unwrap_or('#')));
            }
        }
    }

    Ok(())
}
