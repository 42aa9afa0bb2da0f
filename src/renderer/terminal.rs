//! TerminalRenderer: flushes a canvas to a real terminal

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    QueueableCommand, cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use super::canvas::{Canvas, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Canvas>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Current terminal size in cells
    pub fn size(&self) -> (u16, u16) {
        terminal::size().unwrap_or((80, 24))
    }

    /// Draw a canvas, repainting only the runs that changed since the last draw
    pub fn draw(&mut self, canvas: Canvas) -> Result<()> {
        match self.last.take() {
            Some(prev) if prev.width() == canvas.width() && prev.height() == canvas.height() => {
                if prev != canvas {
                    self.diff_redraw(&canvas, &prev)?;
                }
            }
            _ => self.full_redraw(&canvas)?,
        }
        self.last = Some(canvas);
        Ok(())
    }

    fn full_redraw(&mut self, canvas: &Canvas) -> Result<()> {
        self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        let mut current: Option<(Rgb, Rgb)> = None;
        for y in 0..canvas.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            self.print_run(canvas, 0, y, canvas.width(), &mut current)?;
        }
        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn diff_redraw(&mut self, next: &Canvas, prev: &Canvas) -> Result<()> {
        let mut current: Option<(Rgb, Rgb)> = None;
        for (x, y, len) in changed_runs(prev, next) {
            self.stdout.queue(cursor::MoveTo(x, y))?;
            self.print_run(next, x, y, len, &mut current)?;
        }
        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn print_run(
        &mut self,
        canvas: &Canvas,
        x: u16,
        y: u16,
        len: u16,
        current: &mut Option<(Rgb, Rgb)>,
    ) -> Result<()> {
        for dx in 0..len {
            let cell = canvas.get(x + dx, y).unwrap_or_default();
            if *current != Some((cell.fg, cell.bg)) {
                self.stdout.queue(SetForegroundColor(to_color(cell.fg)))?;
                self.stdout.queue(SetBackgroundColor(to_color(cell.bg)))?;
                *current = Some((cell.fg, cell.bg));
            }
            self.stdout.queue(Print(cell.ch))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Horizontal runs of cells that differ between two same-sized canvases,
/// as `(x, y, len)`
fn changed_runs(prev: &Canvas, next: &Canvas) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    let w = next.width();
    for y in 0..next.height() {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            runs.push((start, y, x - start));
        }
    }
    runs
}
