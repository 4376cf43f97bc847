//! Half-block terminal canvas
//!
//! Each terminal cell shows two vertically stacked pixels: the upper one as
//! the foreground of `▀`, the lower one as the background. The world
//! viewport is stretched over the whole terminal. Text is laid over the
//! pixels one character per cell.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute, queue,
    style::{self, Color},
    terminal,
};
use glam::Vec2;

use crate::consts::{VIEW_HEIGHT, VIEW_WIDTH};
use crate::renderer::{Canvas, Rgb, TextSize};
use crate::sim::Rect;

const UPPER_HALF_BLOCK: char = '\u{2580}';

/// A character drawn over the pixels of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Glyph {
    ch: char,
    color: Rgb,
}

/// Pixel framebuffer sized to the terminal
#[derive(Debug)]
pub struct PixelCanvas {
    cols: usize,
    rows: usize,
    /// Pixel rows, two per terminal row
    height: usize,
    px: Vec<Rgb>,
    glyphs: Vec<Option<Glyph>>,
    /// World units to pixels
    scale: Vec2,
}

impl PixelCanvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        let mut canvas = Self {
            cols: 0,
            rows: 0,
            height: 0,
            px: Vec::new(),
            glyphs: Vec::new(),
            scale: Vec2::ZERO,
        };
        canvas.resize(cols, rows);
        canvas
    }

    /// Match a new terminal size
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1) as usize;
        self.rows = rows.max(1) as usize;
        self.height = self.rows * 2;
        self.px = vec![Rgb::BLACK; self.cols * self.height];
        self.glyphs = vec![None; self.cols * self.rows];
        self.scale = Vec2::new(
            self.cols as f32 / VIEW_WIDTH,
            self.height as f32 / VIEW_HEIGHT,
        );
    }

    /// Terminal size in cells
    pub fn size(&self) -> (u16, u16) {
        (self.cols as u16, self.rows as u16)
    }

    fn to_px(&self, p: Vec2) -> Vec2 {
        p * self.scale
    }

    fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.height {
            self.px[y as usize * self.cols + x as usize] = c;
        }
    }

    fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.cols + x]
    }

    /// Fill pixel rows `y0..y1`, columns `x0..x1`, clipped to the buffer
    fn fill_px(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, c: Rgb) {
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.cols as i32);
        let y1 = y1.min(self.height as i32);
        for y in y0..y1 {
            let row = y as usize * self.cols;
            for x in x0..x1 {
                self.px[row + x as usize] = c;
            }
        }
    }

    /// Pixel bounding box of a world-space area, at least one pixel each way
    fn px_bounds(&self, min: Vec2, max: Vec2) -> (i32, i32, i32, i32) {
        let a = self.to_px(min).round();
        let b = self.to_px(max).round();
        let (x0, y0) = (a.x as i32, a.y as i32);
        (x0, y0, (b.x as i32).max(x0 + 1), (b.y as i32).max(y0 + 1))
    }

    /// What a cell shows: its character, foreground (if any) and background
    fn cell(&self, col: usize, row: usize) -> (char, Option<Rgb>, Rgb) {
        let top = self.get(col, row * 2);
        let bottom = self.get(col, row * 2 + 1);
        if let Some(glyph) = self.glyphs[row * self.cols + col] {
            return (glyph.ch, Some(glyph.color), top);
        }
        if top == bottom {
            (' ', None, top)
        } else {
            (UPPER_HALF_BLOCK, Some(top), bottom)
        }
    }

    /// Write the frame to the terminal
    pub fn present(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let mut fg: Option<Rgb> = None;
        let mut bg: Option<Rgb> = None;

        for row in 0..self.rows {
            for col in 0..self.cols {
                let (ch, cell_fg, cell_bg) = self.cell(col, row);
                if let Some(c) = cell_fg
                    && fg != Some(c)
                {
                    queue!(out, style::SetForegroundColor(color(c)))?;
                    fg = Some(c);
                }
                if bg != Some(cell_bg) {
                    queue!(out, style::SetBackgroundColor(color(cell_bg)))?;
                    bg = Some(cell_bg);
                }
                queue!(out, style::Print(ch))?;
            }
            if row + 1 < self.rows {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                fg = None;
                bg = None;
            }
        }
        queue!(out, style::ResetColor)?;
        out.flush()
    }
}

fn color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

impl Canvas for PixelCanvas {
    fn fill(&mut self, color: Rgb) {
        self.px.fill(color);
        self.glyphs.fill(None);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let (x0, y0, x1, y1) = self.px_bounds(
            Vec2::new(rect.left(), rect.top()),
            Vec2::new(rect.right(), rect.bottom()),
        );
        self.fill_px(x0, y0, x1, y1, color);
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb) {
        let a = self.to_px(from);
        let b = self.to_px(to);
        let half = (width * self.scale.min_element() / 2.0).max(0.5);
        let x0 = (a.x.min(b.x) - half).floor() as i32;
        let x1 = (a.x.max(b.x) + half).ceil() as i32;
        let y0 = (a.y.min(b.y) - half).floor() as i32;
        let y1 = (a.y.max(b.y) + half).ceil() as i32;

        let ab = b - a;
        let len_sq = ab.length_squared();
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let t = if len_sq > 0.0 {
                    ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                if p.distance(a + ab * t) <= half {
                    self.set(x, y, color);
                }
            }
        }
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        let c = self.to_px(center);
        let r = radius * self.scale;
        if r.x < 0.5 || r.y < 0.5 {
            self.set(c.x as i32, c.y as i32, color);
            return;
        }
        let x0 = (c.x - r.x).floor() as i32;
        let x1 = (c.x + r.x).ceil() as i32;
        let y0 = (c.y - r.y).floor() as i32;
        let y1 = (c.y + r.y).ceil() as i32;
        for y in y0..y1 {
            for x in x0..x1 {
                let d = (Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - c) / r;
                if d.length_squared() <= 1.0 {
                    self.set(x, y, color);
                }
            }
        }
    }

    fn polygon(&mut self, points: &[Vec2], color: Rgb) {
        if points.len() < 3 {
            return;
        }
        let pts: Vec<Vec2> = points.iter().map(|&p| self.to_px(p)).collect();
        let y0 = pts.iter().map(|p| p.y).fold(f32::INFINITY, f32::min).floor() as i32;
        let y1 = pts.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max).ceil() as i32;

        // Even-odd scanline fill through pixel centers
        let mut crossings = Vec::with_capacity(pts.len());
        for y in y0..y1 {
            let sy = y as f32 + 0.5;
            crossings.clear();
            for (i, &a) in pts.iter().enumerate() {
                let b = pts[(i + 1) % pts.len()];
                if (a.y <= sy) != (b.y <= sy) {
                    crossings.push(a.x + (sy - a.y) / (b.y - a.y) * (b.x - a.x));
                }
            }
            crossings.sort_by(f32::total_cmp);
            for span in crossings.chunks_exact(2) {
                let x0 = (span[0] - 0.5).ceil() as i32;
                let x1 = (span[1] - 0.5).floor() as i32;
                self.fill_px(x0, y, x1 + 1, y + 1, color);
            }
        }
    }

    fn text(&mut self, pos: Vec2, text: &str, _size: TextSize, color: Rgb) {
        let p = self.to_px(pos);
        let row = (p.y / 2.0) as usize;
        if row >= self.rows {
            return;
        }
        let start = p.x.round().max(0.0) as usize;
        for (i, ch) in text.chars().enumerate() {
            let col = start + i;
            if col >= self.cols {
                break;
            }
            self.glyphs[row * self.cols + col] = Some(Glyph { ch, color });
        }
    }

    /// One cell per character, whatever the size
    fn text_width(&self, text: &str, _size: TextSize) -> f32 {
        text.chars().count() as f32 / self.scale.x
    }
}

/// Raw mode and alternate screen for the lifetime of the value
///
/// Dropping it restores the terminal, including on early returns and panics.
pub struct TerminalSession {
    keyboard_enhanced: bool,
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // From here on a failure drops the session and restores the terminal
        let mut session = Self {
            keyboard_enhanced: false,
        };
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
        )?;
        // Key release events, where the terminal supports them
        session.keyboard_enhanced = execute!(
            out,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .is_ok();
        log::debug!("Keyboard enhancement: {}", session.keyboard_enhanced);
        Ok(session)
    }

    pub fn keyboard_enhanced(&self) -> bool {
        self.keyboard_enhanced
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if self.keyboard_enhanced {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(
            out,
            style::ResetColor,
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen,
        );
        let _ = terminal::disable_raw_mode();
    }
}
