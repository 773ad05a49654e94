//! Drawing shapes side by side in the terminal.

use crossterm::style::{Color, Stylize};
use polyomino_lib::Occupancy;

/// Colour of the occupied cells.
const FILL: Color = Color::Rgb {
    r: 0x0e,
    g: 0xa9,
    b: 0xf0,
};

/// Blank columns between two shapes on the same line.
const GAP: usize = 2;

pub(crate) struct Renderer {
    /// Number of shapes on each line.
    columns: usize,

    /// Uses `o` and `.` instead of coloured blocks.
    plain: bool,
}

impl Renderer {
    pub(crate) fn new(columns: usize, plain: bool) -> Self {
        Renderer {
            columns: columns.max(1),
            plain,
        }
    }

    /// Width in characters of one cell.
    fn cell_width(&self) -> usize {
        if self.plain {
            1
        } else {
            2
        }
    }

    fn push_cell(&self, out: &mut String, occupied: bool) {
        match (self.plain, occupied) {
            (true, true) => out.push('o'),
            (true, false) => out.push('.'),
            (false, true) => out.push_str(&"  ".on(FILL).to_string()),
            (false, false) => out.push_str("  "),
        }
    }

    /// Draws the shapes, `columns` of them on each line,
    /// with a blank line between two lines of shapes.
    pub(crate) fn render<S: Occupancy>(&self, shapes: &[&S]) -> String {
        let mut out = String::new();
        let gap = " ".repeat(GAP * self.cell_width());
        for (k, chunk) in shapes.chunks(self.columns).enumerate() {
            if k > 0 {
                out.push('\n');
            }
            let height = chunk.iter().map(|s| s.rows()).max().unwrap_or(0);
            for i in 0..height {
                let mut line = String::new();
                for (n, shape) in chunk.iter().enumerate() {
                    if n > 0 {
                        line.push_str(&gap);
                    }
                    for j in 0..shape.cols() {
                        let occupied = i < shape.rows() && shape.is_occupied((i, j));
                        if self.plain && i >= shape.rows() {
                            line.push(' ');
                        } else {
                            self.push_cell(&mut line, occupied);
                        }
                    }
                }
                out.push_str(line.trim_end());
                out.push('\n');
            }
        }
        out
    }
}
