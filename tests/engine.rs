//! End-to-end engine behaviour: seeding, stepping both families, history
//! eviction and budget clamping through the public surface.

use voxlife::grid::Grid;
use voxlife::neighborhood::count_live_neighbors;
use voxlife::{
    apply_instance_budget, parse_life_rule, ConfigUpdate, Engine, Mulberry32, NeighborMode,
    RuleFamily, SimConfig, StartMode, UpdateEffect,
};

fn row_string(grid: &Grid, z: usize) -> String {
    grid.row(z).iter().map(|&c| if c { '#' } else { '.' }).collect()
}

fn elementary(width: usize, depth: usize, generations: usize) -> Engine {
    let mut engine = Engine::new(SimConfig {
        width,
        depth,
        generations,
        family: RuleFamily::Elementary,
        eca_rule: 30,
        start: StartMode::Single,
        wrap: true,
        ..SimConfig::default()
    });
    engine.reset();
    engine
}

#[test]
fn rng_streams_match_for_same_seed() {
    let mut a = Mulberry32::new(2024);
    let mut b = Mulberry32::new(2024);
    for _ in 0..256 {
        let (x, y) = (a.next_f64(), b.next_f64());
        assert_eq!(x.to_bits(), y.to_bits());
        assert!((0.0..1.0).contains(&x));
    }
}

#[test]
fn garbage_rules_fall_back_to_conway() {
    assert_eq!(parse_life_rule("").normalized, "B3/S23");
    assert_eq!(parse_life_rule("garbage").normalized, "B3/S23");
}

#[test]
fn budget_example() {
    assert_eq!(apply_instance_budget(100, 100, 200, 350_000), 35);
}

#[test]
fn wrap_versus_bounded_corner() {
    let mut cells = vec![true; 9];
    cells[0] = false;
    let grid = Grid::from_cells(3, 3, cells);
    assert_eq!(count_live_neighbors(&grid, 0, 0, NeighborMode::Moore, true), 8);
    assert_eq!(count_live_neighbors(&grid, 0, 0, NeighborMode::Moore, false), 3);
}

#[test]
fn rule_30_first_generation() {
    let mut engine = elementary(7, 1, 10);
    assert_eq!(row_string(engine.current_grid(), 0), "...#...");
    engine.step();
    assert_eq!(row_string(engine.current_grid(), 0), "..###..");
}

#[test]
fn elementary_rows_evolve_identically_from_single_start() {
    let mut engine = elementary(31, 5, 10);
    engine.step_n(12);
    let grid = engine.current_grid();
    for z in 1..5 {
        assert_eq!(grid.row(z), grid.row(0));
    }
}

#[test]
fn history_keeps_last_five_of_ten() {
    let mut engine = elementary(21, 2, 5);
    let mut produced = vec![engine.current_grid().clone()];
    for _ in 0..10 {
        produced.push(engine.step().clone());
    }

    let snapshot = engine.history_snapshot();
    assert_eq!(snapshot.len(), 5);
    // produced[0] is the seed; the oldest kept grid is the sixth generation produced
    assert_eq!(snapshot[0], &produced[6]);
    assert_eq!(*snapshot.last().unwrap(), &produced[10]);
}

#[test]
fn reset_with_same_seed_reproduces_initial_grid() {
    let config = SimConfig {
        width: 40,
        depth: 30,
        seed: 77,
        density: 0.45,
        ..SimConfig::default()
    };
    let mut engine = Engine::new(config);
    engine.reset();
    let first = engine.current_grid().clone();
    engine.step_n(9);
    engine.reset();
    assert_eq!(engine.current_grid(), &first);
    assert_eq!(engine.generation(), 0);

    let mut other = Engine::new(engine.config().clone());
    other.reset();
    assert_eq!(other.current_grid(), &first);
}

#[test]
fn different_seeds_differ() {
    let mut engine = Engine::new(SimConfig {
        width: 32,
        depth: 32,
        ..SimConfig::default()
    });
    engine.reset();
    let first = engine.current_grid().clone();
    assert_eq!(engine.apply(ConfigUpdate::Seed(1338)), UpdateEffect::Reset);
    assert_ne!(engine.current_grid(), &first);
}

#[test]
fn life_runs_are_deterministic() {
    let config = SimConfig {
        width: 24,
        depth: 24,
        seed: 5,
        ..SimConfig::default()
    };
    let mut a = Engine::new(config.clone());
    let mut b = Engine::new(config);
    a.reset();
    b.reset();
    a.step_n(20);
    b.step_n(20);
    assert_eq!(a.history_snapshot(), b.history_snapshot());
}

#[test]
fn neighborhood_change_applies_without_reset() {
    let mut engine = Engine::new(SimConfig {
        width: 12,
        depth: 12,
        ..SimConfig::default()
    });
    engine.reset();
    engine.step_n(3);
    let before = engine.current_grid().clone();
    assert_eq!(
        engine.apply(ConfigUpdate::Neighborhood(NeighborMode::VonNeumann)),
        UpdateEffect::NextStep
    );
    assert_eq!(engine.current_grid(), &before);
    assert_eq!(engine.generation(), 3);
}

#[test]
fn random_elementary_start_uses_density() {
    let mut engine = Engine::new(SimConfig {
        width: 50,
        depth: 4,
        family: RuleFamily::Elementary,
        start: StartMode::Random,
        density: 0.0,
        ..SimConfig::default()
    });
    engine.reset();
    assert_eq!(engine.current_grid().population(), 0);
    engine.apply(ConfigUpdate::Density(1.0));
    assert_eq!(engine.current_grid().population(), 200);
}

#[test]
fn oversized_request_keeps_dimensions() {
    let mut engine = Engine::new(SimConfig {
        width: 10,
        depth: 10,
        generations: 2000,
        ..SimConfig::default()
    });
    engine.apply(ConfigUpdate::GridSize { width: 300, depth: 300 });
    assert_eq!(engine.grid_dimensions(), (300, 300));
    assert_eq!(engine.effective_generation_depth(), 4);
    engine.step_n(10);
    assert_eq!(engine.history_snapshot().len(), 4);
}
