use crossterm::{
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

use crate::simulation::color::Color;

/// A character grid the driver draws each frame onto.
pub trait Surface {
    /// Blanks every cell of the pending frame.
    fn clear(&mut self);
    /// Writes one cell. Coordinates outside the grid are ignored.
    fn set_cell(&mut self, x: i32, y: i32, glyph: char, color: Color);
    /// Shows the pending frame. Called once per tick, after all `set_cell` calls.
    fn present(&mut self) -> io::Result<()>;
    fn size(&self) -> (u16, u16);
    fn resize(&mut self, width: u16, height: u16) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: Color,
}

/// Row-major cell buffer.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<Option<Cell>>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Some(cell);
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).and_then(|idx| self.cells[idx])
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<Cell>]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

/// Draws frames as ANSI truecolor text into `W`, normally a buffered stdout.
pub struct TerminalSurface<W: Write> {
    out: W,
    frame: Frame,
    background: Option<(u8, u8, u8)>,
    output_buf: Vec<u8>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, width: u16, height: u16, background: Option<(u8, u8, u8)>) -> Self {
        Self {
            out,
            frame: Frame::new(width, height),
            background,
            output_buf: Vec::with_capacity(width as usize * height as usize * 20),
        }
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn compose(&mut self) -> io::Result<()> {
        self.output_buf.clear();
        self.output_buf.extend_from_slice(b"\x1b[H");

        let height = self.frame.height() as usize;
        for (y, row) in self.frame.rows().enumerate() {
            if let Some((r, g, b)) = self.background {
                write!(self.output_buf, "\x1b[48;2;{r};{g};{b}m")?;
            }

            let mut prev_color: Option<Color> = None;
            for cell in row {
                match cell {
                    Some(cell) => {
                        if prev_color != Some(cell.color) {
                            let (r, g, b) = cell.color.rgb();
                            write!(self.output_buf, "\x1b[38;2;{r};{g};{b}m")?;
                            prev_color = Some(cell.color);
                        }
                        let mut utf8 = [0u8; 4];
                        self.output_buf
                            .extend_from_slice(cell.glyph.encode_utf8(&mut utf8).as_bytes());
                    }
                    None => self.output_buf.push(b' '),
                }
            }

            self.output_buf.extend_from_slice(b"\x1b[0m");
            if y + 1 < height {
                self.output_buf.extend_from_slice(b"\r\n");
            }
        }
        Ok(())
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self) {
        self.frame.clear();
    }

    fn set_cell(&mut self, x: i32, y: i32, glyph: char, color: Color) {
        self.frame.set(x, y, Cell { glyph, color });
    }

    fn present(&mut self) -> io::Result<()> {
        self.compose()?;
        self.out.write_all(&self.output_buf)?;
        self.out.flush()
    }

    fn size(&self) -> (u16, u16) {
        (self.frame.width(), self.frame.height())
    }

    fn resize(&mut self, width: u16, height: u16) -> io::Result<()> {
        self.frame = Frame::new(width, height);
        queue!(self.out, Clear(ClearType::All))?;
        Ok(())
    }
}
