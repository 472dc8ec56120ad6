use crate::terminal::Terminal;
use crossterm::event::KeyCode;
use crossterm::style::Color;
use std::io;

pub const VIEWER_HELP: &str = "\
VOXLIFE
q / Esc   Quit
space     Pause / resume
n         Single step (paused)
r         Reset
s         Reseed (seed + 1)
v         Toggle top / slice view
[ ]       Move slice row
0-9       Simulation speed
!@#...    Color scheme
?         Close help";

/// Draws a centered, bordered text box into the back buffer
pub fn draw_help_box(term: &mut Terminal, text: &str) {
    let lines: Vec<&str> = text.lines().collect();
    let inner = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 2;
    let (width, height) = term.size();
    let left = (width as usize).saturating_sub(inner + 2) / 2;
    let top = (height as usize).saturating_sub(lines.len() + 2) / 2;
    let (x0, y0) = (left as i32, top as i32);
    let right = x0 + inner as i32 + 1;
    let bottom = y0 + lines.len() as i32 + 1;
    let border = Some(Color::White);

    for x in x0 + 1..right {
        term.set(x, y0, '─', border, false);
        term.set(x, bottom, '─', border, false);
    }
    term.set(x0, y0, '┌', border, false);
    term.set(right, y0, '┐', border, false);
    term.set(x0, bottom, '└', border, false);
    term.set(right, bottom, '┘', border, false);

    for (i, line) in lines.iter().enumerate() {
        let y = y0 + 1 + i as i32;
        term.set(x0, y, '│', border, false);
        term.set_str(x0 + 1, y, &format!(" {:<w$} ", line, w = inner - 2), Some(Color::Grey), i == 0);
        term.set(right, y, '│', border, false);
    }
}

/// Shows the help box until `?` is pressed again.
/// Returns true if the user asked to quit while it was open.
pub fn show_help_modal(term: &mut Terminal, text: &str) -> io::Result<bool> {
    draw_help_box(term, text);
    term.present()?;

    loop {
        if let Some((code, _)) = term.wait_key(50)? {
            match code {
                KeyCode::Char('?') => return Ok(false),
                KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
                _ => {}
            }
        }
    }
}
