//! BoardView: maps a `core::GameSnapshot` into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, GameStatus};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{glyph, COLS, KEYS_TO_WIN, ROWS};

const PANEL_GAP: u16 = 2;
const PANEL_W: u16 = 10;

/// Renders the board with a border and a status panel on its right.
///
/// The highest row index is drawn at the top, so north is up on screen.
#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    /// Terminal columns per board cell; the glyph sits in the last one.
    cell_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl BoardView {
    fn frame_size(&self) -> (u16, u16) {
        let inner_w = COLS as u16 * self.cell_w + 1;
        (inner_w + 2, ROWS as u16 + 2)
    }

    /// Framebuffer size needed for the board and the panel.
    pub fn size(&self) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        (frame_w + PANEL_GAP + PANEL_W, frame_h)
    }

    /// Render into an existing framebuffer, resizing it to [`BoardView::size`].
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        let (width, height) = self.size();
        fb.reset(width, height, Cell::BLANK);

        let (frame_w, frame_h) = self.frame_size();
        self.draw_border(fb, frame_w, frame_h, CellStyle::fg(Rgb::new(200, 200, 200)));

        for row in 0..ROWS {
            let y = 1 + (ROWS - 1 - row) as u16;
            for col in 0..COLS {
                let x = 1 + (col as u16 + 1) * self.cell_w - 1;
                let ch = snap.glyphs[row as usize][col as usize];
                fb.put_char(x, y, ch, glyph_style(ch));
            }
        }

        self.draw_side_panel(fb, snap, frame_w + PANEL_GAP);

        match snap.status {
            GameStatus::Won => self.draw_banner(fb, frame_w, frame_h, " VICTORY "),
            GameStatus::Lost => self.draw_banner(fb, frame_w, frame_h, " DEFEATED "),
            GameStatus::InProgress => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot) -> FrameBuffer {
        let (width, height) = self.size();
        let mut fb = FrameBuffer::new(width, height);
        self.render_into(snap, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, w: u16, h: u16, style: CellStyle) {
        fb.put_char(0, 0, '┌', style);
        fb.put_char(w - 1, 0, '┐', style);
        fb.put_char(0, h - 1, '└', style);
        fb.put_char(w - 1, h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(dx, 0, '─', style);
            fb.put_char(dx, h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(0, dy, '│', style);
            fb.put_char(w - 1, dy, '│', style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, panel_x: u16) {
        let label = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let mut y = 0;
        fb.put_str(panel_x, y, "STRENGTH", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.strength, value);
        y += 2;

        fb.put_str(panel_x, y, "KEYS", label);
        y += 1;
        let x = fb.put_u32(panel_x, y, snap.keys, value);
        fb.put_char(x, y, '/', value);
        fb.put_u32(x + 1, y, KEYS_TO_WIN, value);
        y += 2;

        fb.put_str(panel_x, y, "MOVES", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.moves, value);
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, frame_w: u16, frame_h: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = frame_w.saturating_sub(text_w) / 2;
        let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        fb.put_str(x, frame_h - 1, text, style);
    }
}

fn glyph_style(ch: char) -> CellStyle {
    match ch {
        glyph::MOUNTAIN => CellStyle::fg(Rgb::new(150, 120, 90)),
        glyph::OCCUPIED => CellStyle::fg(Rgb::new(255, 230, 80)).bold(),
        glyph::FINISH => CellStyle::fg(Rgb::new(255, 190, 40)).bold(),
        glyph::TELEPORT => CellStyle::fg(Rgb::new(200, 120, 220)),
        glyph::ENEMY => CellStyle::fg(Rgb::new(220, 80, 80)),
        _ => CellStyle::fg(Rgb::new(90, 90, 100)).dim(),
    }
}
