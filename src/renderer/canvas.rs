//! Character-cell rasterizer for session frames
//!
//! The top row is a HUD line; the rest of the canvas is the play field scaled
//! from window space to cells.

use crate::sim::{Frame, Overlay, Rect};

pub const BACKGROUND: Rgb = Rgb::from_hex(0x1A0033);
pub const PADDLE: Rgb = Rgb::from_hex(0xFF9933);
pub const BALL: Rgb = Rgb::from_hex(0xFFFF00);
pub const TEXT: Rgb = Rgb::from_hex(0xFFFFFF);

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

/// A single terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: TEXT,
            bg: BACKGROUND,
        }
    }
}

/// 2D grid of styled cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize).copied()
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = y as usize * self.width as usize + x as usize;
            self.cells[idx] = cell;
        }
    }

    /// Write text starting at (x, y), clipped to the canvas
    pub fn text(&mut self, x: u16, y: u16, s: &str, fg: Rgb) {
        for (i, ch) in s.chars().enumerate() {
            let cx = x as usize + i;
            if cx >= self.width as usize {
                break;
            }
            self.set(cx as u16, y, Cell { ch, fg, bg: BACKGROUND });
        }
    }

    /// Write text horizontally centred on row `y`
    pub fn text_centered(&mut self, y: u16, s: &str, fg: Rgb) {
        let len = s.chars().count() as u16;
        let x = self.width.saturating_sub(len) / 2;
        self.text(x, y, s, fg);
    }

    /// One row of the canvas as a string (for tests and debugging)
    pub fn row_string(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

/// Maps window space onto the play-field cells
struct Viewport {
    sx: f32,
    sy: f32,
    top: u16,
    cols: u16,
    rows: u16,
}

impl Viewport {
    fn col(&self, x: f32) -> i32 {
        (x * self.sx).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        (y * self.sy).floor() as i32 + self.top as i32
    }

    /// Fill the cells covered by `rect`; always at least one cell
    fn fill(&self, canvas: &mut Canvas, rect: &Rect, ch: char, fg: Rgb) {
        let c0 = self.col(rect.left).max(0);
        let c1 = self.col(rect.right - 0.01).max(c0).min(self.cols as i32 - 1);
        let r0 = self.row(rect.top).max(self.top as i32);
        let r1 = self
            .row(rect.bottom - 0.01)
            .max(r0)
            .min(self.top as i32 + self.rows as i32 - 1);
        for y in r0..=r1 {
            for x in c0..=c1 {
                canvas.set(x as u16, y as u16, Cell { ch, fg, bg: BACKGROUND });
            }
        }
    }
}

/// Rasterize `frame` into a `cols` x `rows` canvas
pub fn render_frame(frame: &Frame, cols: u16, rows: u16) -> Canvas {
    let mut canvas = Canvas::new(cols, rows);
    if cols == 0 || rows < 2 {
        return canvas;
    }

    let hud = match frame.lives {
        Some(lives) => format!(" Score: {}   Lives: {}", frame.score, lives),
        None => format!(" Score: {}", frame.score),
    };
    canvas.text(0, 0, &hud, TEXT);

    let field_rows = rows - 1;
    let view = Viewport {
        sx: cols as f32 / frame.width,
        sy: field_rows as f32 / frame.height,
        top: 1,
        cols,
        rows: field_rows,
    };

    for brick in &frame.bricks {
        let color = Rgb::from_hex(brick.color.hex());
        view.fill(&mut canvas, &brick.rect, '█', color);
    }
    view.fill(&mut canvas, &frame.paddle, '▀', PADDLE);

    let bx = view.col(frame.ball.x);
    let by = view.row(frame.ball.y);
    if (0..cols as i32).contains(&bx) && (1..rows as i32).contains(&by) {
        canvas.set(bx as u16, by as u16, Cell { ch: '●', fg: BALL, bg: BACKGROUND });
    }

    draw_overlay(&mut canvas, frame);
    canvas
}

fn draw_overlay(canvas: &mut Canvas, frame: &Frame) {
    let mid = canvas.height() / 2;
    match frame.overlay {
        Overlay::None => {}
        Overlay::FrontPage => {
            let accent = Rgb::from_hex(frame.settings.brick_color.hex());
            canvas.text_centered(mid.saturating_sub(3), "BRICK BREAKER", accent);
            canvas.text_centered(mid.saturating_sub(1), "Enter: start   q: quit", TEXT);
            canvas.text_centered(mid, &frame.settings.describe(), TEXT);
            canvas.text_centered(mid + 1, "1: speed   2: paddle   3: bricks", TEXT);
            canvas.text_centered(mid + 3, "←/→ move   p: pause   r: resume", TEXT);
        }
        Overlay::Paused => {
            canvas.text_centered(mid, "PAUSED  (r to resume)", TEXT);
        }
        Overlay::Countdown(n) => {
            canvas.text_centered(mid, &n.to_string(), TEXT);
        }
        Overlay::LifeLost { lives } => {
            let msg = if lives == 1 {
                "Life lost! 1 life left".to_string()
            } else {
                format!("Life lost! {lives} lives left")
            };
            canvas.text_centered(mid, &msg, TEXT);
        }
        Overlay::GameOver { won, score } => {
            let title = if won { "YOU WIN!" } else { "GAME OVER" };
            canvas.text_centered(mid.saturating_sub(1), title, TEXT);
            canvas.text_centered(mid, &format!("Final score: {score}"), TEXT);
            canvas.text_centered(mid + 1, "Esc: front page   q: quit", TEXT);
        }
    }
}
