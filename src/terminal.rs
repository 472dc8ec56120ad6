use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{poll, read, Event, KeyCode, KeyModifiers},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, stdout, Write};
use std::time::Duration;

/// A single cell in the back buffer
#[derive(Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Color>,
    pub bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: None,
            bold: false,
        }
    }
}

/// Raw-mode alternate screen with a back buffer, restored on drop
pub struct Terminal {
    width: u16,
    height: u16,
    buffer: Vec<Cell>,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let (width, height) = size()?;

        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide)?;

        Ok(Self {
            width,
            height,
            buffer: vec![Cell::default(); width as usize * height as usize],
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Picks up a new terminal size. Returns true if it changed.
    pub fn refresh_size(&mut self) -> io::Result<bool> {
        let (w, h) = size()?;
        if (w, h) == (self.width, self.height) {
            return Ok(false);
        }
        self.width = w;
        self.height = h;
        self.buffer = vec![Cell::default(); w as usize * h as usize];
        execute!(stdout(), Clear(ClearType::All))?;
        Ok(true)
    }

    /// Clear the back buffer
    pub fn clear(&mut self) {
        self.buffer.fill(Cell::default());
    }

    /// Set a character; out-of-range positions are ignored
    pub fn set(&mut self, x: i32, y: i32, ch: char, fg: Option<Color>, bold: bool) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let idx = y as usize * self.width as usize + x as usize;
            self.buffer[idx] = Cell { ch, fg, bold };
        }
    }

    pub fn set_str(&mut self, x: i32, y: i32, s: &str, fg: Option<Color>, bold: bool) {
        for (i, ch) in s.chars().enumerate() {
            self.set(x + i as i32, y, ch, fg, bold);
        }
    }

    /// Write the back buffer to the screen in one flush
    pub fn present(&self) -> io::Result<()> {
        let mut out = stdout();
        let width = self.width.max(1) as usize;

        for (y, row) in self.buffer.chunks(width).enumerate() {
            queue!(out, MoveTo(0, y as u16))?;
            for cell in row {
                if cell.bold {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }
                match cell.fg {
                    Some(color) => queue!(out, SetForegroundColor(color), Print(cell.ch), ResetColor)?,
                    None => queue!(out, Print(cell.ch))?,
                }
                if cell.bold {
                    queue!(out, SetAttribute(Attribute::Reset))?;
                }
            }
        }

        out.flush()
    }

    /// Non-blocking key check
    pub fn check_key(&self) -> io::Result<Option<(KeyCode, KeyModifiers)>> {
        self.wait_key(0)
    }

    pub fn wait_key(&self, timeout_ms: u64) -> io::Result<Option<(KeyCode, KeyModifiers)>> {
        if poll(Duration::from_millis(timeout_ms))? {
            if let Event::Key(key_event) = read()? {
                return Ok(Some((key_event.code, key_event.modifiers)));
            }
        }
        Ok(None)
    }

    pub fn sleep(&self, seconds: f32) {
        std::thread::sleep(Duration::from_secs_f32(seconds.max(0.0)));
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
