//! Flattens the history window into 2D frames the terminal can draw

use voxlife::HistoryWindow;

/// Cells carry an intensity 0-3 when alive, None when empty
#[derive(Debug, Clone, PartialEq)]
pub struct Shade {
    pub width: usize,
    pub height: usize,
    cells: Vec<Option<u8>>,
}

impl Shade {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.cells[y * self.width + x]
    }

    fn set(&mut self, x: usize, y: usize, intensity: u8) {
        self.cells[y * self.width + x] = Some(intensity);
    }

    /// Plain text, one line per row. Older layers use lighter glyphs.
    pub fn to_text(&self, draw_char: char) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(match self.get(x, y) {
                    Some(3) => draw_char,
                    Some(2) => '+',
                    Some(1) => ':',
                    Some(_) => '.',
                    None => ' ',
                });
            }
            out.push('\n');
        }
        out
    }
}

/// 3 for the newest layer, fading to 0 for the oldest half of the window
pub fn age_intensity(age: usize, len: usize) -> u8 {
    match age {
        0 => 3,
        1 | 2 => 2,
        _ if age < len / 2 => 1,
        _ => 0,
    }
}

/// Looks down the generation axis: each cell takes the age of the newest
/// layer in which it is alive.
pub fn top_view(history: &HistoryWindow) -> Option<Shade> {
    let current = history.try_current()?;
    let (width, depth) = current.dimensions();
    let len = history.len();
    let mut shade = Shade::new(width, depth);

    for (age, grid) in history.iter().rev().enumerate() {
        let intensity = age_intensity(age, len);
        for z in 0..depth {
            for x in 0..width {
                if grid.get(x, z) && shade.get(x, z).is_none() {
                    shade.set(x, z, intensity);
                }
            }
        }
    }

    Some(shade)
}

/// Row `z` of every retained generation, oldest at the top
pub fn slice_view(history: &HistoryWindow, z: usize) -> Option<Shade> {
    let current = history.try_current()?;
    let width = current.width();
    let z = z.min(current.depth() - 1);
    let mut shade = Shade::new(width, history.len());

    for (y, grid) in history.iter().enumerate() {
        for (x, &alive) in grid.row(z).iter().enumerate() {
            if alive {
                shade.set(x, y, 3);
            }
        }
    }

    Some(shade)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxlife::{ConfigUpdate, Engine, RuleFamily, SimConfig};

    fn eca_engine(width: usize, depth: usize) -> Engine {
        let mut engine = Engine::new(SimConfig {
            width,
            depth,
            generations: 8,
            ..SimConfig::default()
        });
        engine.apply(ConfigUpdate::Family(RuleFamily::Elementary));
        engine
    }

    #[test]
    fn test_empty_history_has_no_view() {
        let engine = Engine::new(SimConfig::default());
        assert!(top_view(engine.history()).is_none());
        assert!(slice_view(engine.history(), 0).is_none());
    }

    #[test]
    fn test_slice_shows_rule_30_triangle() {
        let mut engine = eca_engine(7, 1);
        engine.step_n(2);
        let text = slice_view(engine.history(), 0).unwrap().to_text('#');
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        assert_eq!(lines, vec!["   #", "  ###", " ##  #"]);
    }

    #[test]
    fn test_top_view_prefers_newest_layer() {
        let mut engine = eca_engine(7, 1);
        engine.step();
        let shade = top_view(engine.history()).unwrap();
        assert_eq!(shade.get(2, 0), Some(3));
        assert_eq!(shade.get(3, 0), Some(3));
        assert_eq!(shade.get(0, 0), None);
    }

    #[test]
    fn test_age_ramp() {
        assert_eq!(age_intensity(0, 10), 3);
        assert_eq!(age_intensity(2, 10), 2);
        assert_eq!(age_intensity(4, 10), 1);
        assert_eq!(age_intensity(9, 10), 0);
    }
}
