//! Interactive layered view of a running engine

use crate::colors::ColorState;
use crate::help::{show_help_modal, VIEWER_HELP};
use crate::render::{slice_view, top_view, Shade};
use crate::terminal::Terminal;
use crossterm::event::{KeyCode, KeyModifiers};
use std::io;
use std::time::Instant;
use voxlife::pacing::FixedStep;
use voxlife::{ConfigUpdate, DisplayConfig, Engine, RuleFamily, ViewMode};

/// Steps per second for the digit keys (0 = slowest)
const SPEED_PRESETS: [f32; 10] = [0.5, 60.0, 40.0, 25.0, 15.0, 10.0, 6.0, 4.0, 2.0, 1.0];
/// Sleep while paused
const PAUSED_SLEEP: f32 = 0.05;

/// What a key press asks the loop to do
enum Action {
    None,
    Quit,
    Help,
}

/// Runtime state for interactive controls
struct ViewerState {
    paused: bool,
    view: ViewMode,
    slice_row: usize,
    colors: ColorState,
    pace: FixedStep,
    step_once: bool,
}

impl ViewerState {
    fn new(display: &DisplayConfig, depth: usize) -> Self {
        Self {
            paused: false,
            view: display.view,
            slice_row: depth / 2,
            colors: ColorState::new(display.color_scheme),
            pace: FixedStep::from_rate(display.steps_per_second, display.max_steps_per_tick),
            step_once: false,
        }
    }

    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers, engine: &mut Engine) -> Action {
        if self.colors.handle_key(code) {
            return Action::None;
        }
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Char('?') => return Action::Help,
            KeyCode::Char(' ') => {
                self.paused = !self.paused;
                self.pace.clear();
            }
            KeyCode::Char('n') if self.paused => self.step_once = true,
            KeyCode::Char('r') => engine.reset(),
            KeyCode::Char('s') => {
                let seed = engine.config().seed.wrapping_add(1);
                engine.apply(ConfigUpdate::Seed(seed));
            }
            KeyCode::Char('v') => self.view = self.view.toggled(),
            KeyCode::Char('[') => self.slice_row = self.slice_row.saturating_sub(1),
            KeyCode::Char(']') => {
                let depth = engine.grid_dimensions().1;
                self.slice_row = (self.slice_row + 1).min(depth - 1);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(idx) = c.to_digit(10) {
                    self.pace.set_rate(SPEED_PRESETS[idx as usize]);
                }
            }
            _ => {}
        }
        Action::None
    }
}

/// Run the viewer until the user quits. The engine must already be reset.
pub fn run(engine: &mut Engine, display: &DisplayConfig) -> io::Result<()> {
    let mut term = Terminal::new()?;
    let mut state = ViewerState::new(display, engine.grid_dimensions().1);
    let mut last_tick = Instant::now();

    loop {
        term.refresh_size()?;

        if let Some((code, mods)) = term.check_key()? {
            match state.handle_key(code, mods, engine) {
                Action::Quit => break,
                Action::Help => {
                    if show_help_modal(&mut term, VIEWER_HELP)? {
                        break;
                    }
                    last_tick = Instant::now();
                }
                Action::None => {}
            }
        }

        let now = Instant::now();
        let elapsed = now - last_tick;
        last_tick = now;

        if state.paused {
            if state.step_once {
                engine.step();
                state.step_once = false;
            }
        } else {
            let steps = state.pace.advance(elapsed);
            engine.step_n(steps as usize);
        }

        draw(&mut term, engine, &state, display.draw_char);
        term.present()?;
        term.sleep(if state.paused { PAUSED_SLEEP } else { display.time_step });
    }

    Ok(())
}

fn draw(term: &mut Terminal, engine: &Engine, state: &ViewerState, draw_char: char) {
    term.clear();
    let (_, h) = term.size();
    let rows = h.saturating_sub(1) as usize;

    let shade = match state.view {
        ViewMode::Top => top_view(engine.history()),
        ViewMode::Slice => slice_view(engine.history(), state.slice_row),
    };
    if let Some(shade) = shade {
        // slice view keeps the newest rows when the window is taller than the screen
        let skip = match state.view {
            ViewMode::Slice => shade.height.saturating_sub(rows),
            ViewMode::Top => 0,
        };
        draw_shade(term, &shade, skip, rows, state, draw_char);
    }

    let status = status_line(engine, state);
    term.set_str(0, h as i32 - 1, &status, Some(state.colors.muted()), false);
}

fn draw_shade(term: &mut Terminal, shade: &Shade, skip: usize, rows: usize, state: &ViewerState, draw_char: char) {
    for y in skip..shade.height.min(skip + rows) {
        for x in 0..shade.width {
            if let Some(intensity) = shade.get(x, y) {
                let (color, bold) = state.colors.layer(intensity);
                term.set(x as i32, (y - skip) as i32, draw_char, Some(color), bold);
            }
        }
    }
}

fn status_line(engine: &Engine, state: &ViewerState) -> String {
    let config = engine.config();
    let rule = match config.family {
        RuleFamily::Life => engine.normalized_rule_text().to_string(),
        RuleFamily::Elementary => format!("rule {}", config.eca_rule),
    };
    let (w, d) = engine.grid_dimensions();
    let population = engine.history().try_current().map_or(0, |g| g.population());
    let view = match state.view {
        ViewMode::Top => "top".to_string(),
        ViewMode::Slice => format!("slice z={}", state.slice_row),
    };
    format!(
        " gen {} | {} | pop {} | {}x{} x{} | seed {} | {}{} | ? help",
        engine.generation(),
        rule,
        population,
        w,
        d,
        engine.effective_generation_depth(),
        config.seed,
        view,
        if state.paused { " | paused" } else { "" },
    )
}
