use crossterm::event::KeyCode;
use crossterm::style::Color;

/// Four shades per scheme, dimmest first. Index matches the shifted digit keys.
const SCHEMES: [[Color; 4]; 10] = [
    [Color::DarkGreen, Color::Green, Color::Green, Color::AnsiValue(10)],          // matrix
    [Color::DarkRed, Color::Red, Color::DarkYellow, Color::Yellow],                // fire
    [Color::DarkBlue, Color::Blue, Color::Cyan, Color::AnsiValue(14)],             // ice
    [Color::DarkMagenta, Color::Magenta, Color::Magenta, Color::AnsiValue(13)],    // pink
    [Color::DarkYellow, Color::Yellow, Color::Yellow, Color::AnsiValue(11)],       // gold
    [Color::DarkCyan, Color::Cyan, Color::Cyan, Color::AnsiValue(14)],             // electric
    [Color::DarkRed, Color::Red, Color::Magenta, Color::AnsiValue(9)],             // lava
    [Color::DarkGrey, Color::Grey, Color::White, Color::White],                    // mono
    [Color::Red, Color::Yellow, Color::Green, Color::Cyan],                        // rainbow
    [Color::DarkBlue, Color::Blue, Color::Magenta, Color::AnsiValue(13)],          // neon
];

/// Shifted digit row, in scheme order 0-9
const SCHEME_KEYS: [char; 10] = [')', '!', '@', '#', '$', '%', '^', '&', '*', '('];

#[derive(Clone, Copy)]
pub struct ColorState {
    pub scheme: u8,
}

impl ColorState {
    pub fn new(scheme: u8) -> Self {
        Self { scheme: scheme.min(9) }
    }

    /// Shift+digit selects a scheme. Returns true if the key was handled.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if let KeyCode::Char(c) = code {
            if let Some(idx) = SCHEME_KEYS.iter().position(|&k| k == c) {
                self.scheme = idx as u8;
                return true;
            }
        }
        false
    }

    /// Color for an age intensity (0 oldest, 3 newest). Only the newest layer is bold.
    pub fn layer(&self, intensity: u8) -> (Color, bool) {
        let shades = &SCHEMES[self.scheme.min(9) as usize];
        let idx = intensity.min(3) as usize;
        (shades[idx], idx == 3)
    }

    /// Dim shade for the status line
    pub fn muted(&self) -> Color {
        SCHEMES[self.scheme.min(9) as usize][1]
    }
}
