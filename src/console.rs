use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal,
};
use std::io::{self, Write};
use torus_life::Grid;

const LIVE_GLYPH: &str = "\u{2588}";
const DEAD_GLYPH: &str = " ";
const LIVE_COLOR: Color = Color::AnsiValue(227);
const DEAD_COLOR: Color = Color::AnsiValue(235);

/// Paints whole frames of the grid to a terminal
pub struct ConsoleRender<W: Write> {
    out: W,
}

impl ConsoleRender<io::BufWriter<io::Stdout>> {
    pub fn stdout() -> Self {
        Self::new(io::BufWriter::new(io::stdout()))
    }
}

impl<W: Write> ConsoleRender<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Clears the screen and writes every cell, one terminal line per row
    pub fn render(&mut self, grid: &Grid) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::All)
        )?;
        for row in grid.rows() {
            for &alive in row {
                let (color, glyph) = if alive {
                    (LIVE_COLOR, LIVE_GLYPH)
                } else {
                    (DEAD_COLOR, DEAD_GLYPH)
                };
                queue!(self.out, SetBackgroundColor(color), Print(glyph), ResetColor)?;
            }
            self.out.write_all(b"\n")?;
        }
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
