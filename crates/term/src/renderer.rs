//! TerminalRenderer: writes a framebuffer to a terminal, one line per row.
//!
//! The game is turn-based and interleaves prompts with board drawings, so the
//! renderer prints rows below the cursor instead of taking over the screen.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer<W: Write> {
    out: W,
    color: bool,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Draw a framebuffer followed by a blank line.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        if self.color {
            encode_lines_into(fb, &mut self.buf)?;
        } else {
            encode_plain_into(fb, &mut self.buf);
        }
        self.buf.push(b'\n');
        self.flush_buf()
    }

    /// Print lines of narration, each on its own line.
    pub fn say<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<()> {
        self.buf.clear();
        for line in lines {
            self.buf.extend_from_slice(line.as_ref().as_bytes());
            self.buf.push(b'\n');
        }
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode every row with crossterm style commands into `out`.
///
/// Styles are only re-emitted when they change, and reset at each line end so
/// colors never bleed into the prompt that follows.
pub fn encode_lines_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    for y in 0..fb.height() {
        let mut current_style: Option<CellStyle> = None;
        for cell in fb.row(y) {
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(Print('\n'))?;
    }
    Ok(())
}

/// Encode the characters only, trimming trailing blanks from each row.
pub fn encode_plain_into(fb: &FrameBuffer, out: &mut Vec<u8>) {
    for y in 0..fb.height() {
        out.extend_from_slice(fb.row_text(y).as_bytes());
        out.push(b'\n');
    }
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
