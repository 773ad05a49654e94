//! What a renderer may see of a shape.
use crate::grid::{Coord, Grid};

/// Read-only access to the cells of a shape.
///
/// This is all that is handed to code that draws shapes:
/// it can neither transform nor modify them.
pub trait Occupancy {
    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Whether the cell is occupied. Cells outside the shape are empty.
    fn is_occupied(&self, coord: Coord) -> bool;

    /// Displays the shape in [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
    ///
    /// * **Occupied** cells are represented by `o`;
    /// * **Empty** cells are represented by `.`;
    /// * Each row is ended with a newline.
    fn plaintext(&self) -> String {
        let mut str = String::with_capacity((self.cols() + 1) * self.rows());
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                str.push(if self.is_occupied((i, j)) { 'o' } else { '.' });
            }
            str.push('\n');
        }
        str
    }
}

impl Occupancy for Grid {
    fn rows(&self) -> usize {
        Grid::rows(self)
    }

    fn cols(&self) -> usize {
        Grid::cols(self)
    }

    fn is_occupied(&self, coord: Coord) -> bool {
        self.get(coord) == Some(true)
    }
}
