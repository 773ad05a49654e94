//! Grids of cells.

use crate::{error::Error, expand::Direction};
use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use crate::save::GridSer;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coordinates of a cell, `(row, column)`, both zero-indexed.
pub type Coord = (usize, usize);

/// A rectangular grid of cells, each either occupied or empty.
///
/// A grid is a plain value: every operation that changes its shape
/// returns a new grid and leaves the original untouched.
///
/// A grid is called *canonical* when it has at least one occupied cell
/// and none of its border rows or columns is entirely empty.
/// Elements of a [`Generation`](crate::Generation) are always canonical.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "GridSer", into = "GridSer")
)]
pub struct Grid {
    rows: usize,
    cols: usize,

    /// Occupancy of the cells, row by row.
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an empty grid with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// The `1 × 1` grid with its only cell occupied.
    pub fn single() -> Self {
        Grid {
            rows: 1,
            cols: 1,
            cells: vec![true],
        }
    }

    /// Builds a grid of the given dimensions, asking `f` whether each cell is occupied.
    pub(crate) fn from_fn<F: Fn(Coord) -> bool>(rows: usize, cols: usize, f: F) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                cells.push(f((i, j)));
            }
        }
        Grid { rows, cols, cells }
    }

    /// Creates a grid from rows of booleans.
    ///
    /// Returns an error if there are no rows, no columns,
    /// or if the rows have different lengths.
    pub fn from_bools(rows: Vec<Vec<bool>>) -> Result<Self, Error> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(Error::InvalidGridError(String::from("the grid has no cells")));
        }
        if let Some(i) = rows.iter().position(|row| row.len() != cols) {
            return Err(Error::InvalidGridError(format!(
                "row {} has length {}, expected {}",
                i,
                rows[i].len(),
                cols
            )));
        }
        Ok(Grid {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Creates a grid from rows of `0`s and `1`s.
    ///
    /// Returns an error if some value is neither `0` nor `1`,
    /// or if the rows do not form a rectangle.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, Error> {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(j, value)| match value {
                        0 => Ok(false),
                        1 => Ok(true),
                        v => Err(Error::InvalidGridError(format!(
                            "cell {:?} has value {}, expected 0 or 1",
                            (i, j),
                            v
                        ))),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_bools(rows)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, (i, j): Coord) -> Option<usize> {
        if i < self.rows && j < self.cols {
            Some(i * self.cols + j)
        } else {
            None
        }
    }

    /// Whether the cell is occupied.
    ///
    /// Returns `None` if the cell is outside the grid.
    pub fn get(&self, coord: Coord) -> Option<bool> {
        self.index(coord).map(|k| self.cells[k])
    }

    /// Sets the occupancy of a cell.
    pub fn set(&mut self, coord: Coord, occupied: bool) -> Result<(), Error> {
        let k = self.index(coord).ok_or(Error::OutOfBoundsError(coord))?;
        self.cells[k] = occupied;
        Ok(())
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Coordinates of all occupied cells, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(move |(k, _)| (k / cols, k % cols))
    }

    fn row_is_empty(&self, i: usize) -> bool {
        self.cells[i * self.cols..(i + 1) * self.cols]
            .iter()
            .all(|&c| !c)
    }

    fn col_is_empty(&self, j: usize) -> bool {
        (0..self.rows).all(|i| !self.cells[i * self.cols + j])
    }

    /// Whether no border row or column is empty,
    /// and there is at least one occupied cell.
    pub fn is_canonical(&self) -> bool {
        self.rows > 0
            && self.cols > 0
            && !self.row_is_empty(0)
            && !self.row_is_empty(self.rows - 1)
            && !self.col_is_empty(0)
            && !self.col_is_empty(self.cols - 1)
    }

    /// Whether the occupied cells form a single piece,
    /// two cells being joined when they share an edge.
    ///
    /// A grid with no occupied cell is not connected.
    pub fn is_connected(&self) -> bool {
        let start = match self.occupied().next() {
            Some(coord) => coord,
            None => return false,
        };
        let mut seen = vec![false; self.cells.len()];
        let mut stack = vec![start];
        let mut reached = 0;
        while let Some(coord) = stack.pop() {
            let k = coord.0 * self.cols + coord.1;
            if seen[k] {
                continue;
            }
            seen[k] = true;
            reached += 1;
            for direction in Direction::ALL {
                if let Some(next) = direction.neighbor(coord, self.rows, self.cols) {
                    if self.get(next) == Some(true) {
                        stack.push(next);
                    }
                }
            }
        }
        reached == self.cell_count()
    }

    /// Trims all the empty rows and columns on the border,
    /// leaving the minimal bounding box of the occupied cells.
    ///
    /// Reducing a canonical grid gives the same grid.
    ///
    /// Returns [`Error::EmptyShapeError`] if there is no occupied cell.
    pub fn reduce(&self) -> Result<Grid, Error> {
        if self.cells.iter().all(|&c| !c) {
            return Err(Error::EmptyShapeError);
        }

        let (mut top, mut bottom) = (0, self.rows - 1);
        while self.row_is_empty(top) {
            top += 1;
        }
        while self.row_is_empty(bottom) {
            bottom -= 1;
        }

        let (mut left, mut right) = (0, self.cols - 1);
        while self.col_is_empty(left) {
            left += 1;
        }
        while self.col_is_empty(right) {
            right -= 1;
        }

        Ok(Grid::from_fn(bottom - top + 1, right - left + 1, |(i, j)| {
            self.cells[(i + top) * self.cols + j + left]
        }))
    }

    /// Adds one occupied cell.
    ///
    /// The grid is first padded with an empty border on all four sides,
    /// so an existing cell at `(i, j)` moves to `(i + 1, j + 1)`.
    /// Then the cell at `coord`, given in the padded coordinates,
    /// is occupied, and the result is [reduced](Self::reduce).
    pub fn expand(&self, coord: Coord) -> Result<Grid, Error> {
        let mut padded = Grid::from_fn(self.rows + 2, self.cols + 2, |(i, j)| {
            i > 0 && j > 0 && self.get((i - 1, j - 1)) == Some(true)
        });
        padded.set(coord, true)?;
        padded.reduce()
    }
}

impl Display for Grid {
    /// Plaintext: `o` for occupied cells, `.` for empty ones,
    /// each row ended with a newline.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                let c = if self.cells[i * self.cols + j] { 'o' } else { '.' };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows, self.cols)?;
        Display::fmt(self, f)
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// Parses a grid in the plaintext format.
    ///
    /// `o`, `O`, `*`, `#` and `1` are occupied cells; `.` and `0` are empty cells.
    /// Blank lines and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(i, line)| {
                line.chars()
                    .enumerate()
                    .map(|(j, c)| match c {
                        'o' | 'O' | '*' | '#' | '1' => Ok(true),
                        '.' | '0' => Ok(false),
                        c => Err(Error::InvalidGridError(format!(
                            "invalid character {:?} at {:?}",
                            c,
                            (i, j)
                        ))),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_bools(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows() -> Result<(), Error> {
        let grid = Grid::from_rows(vec![vec![1, 0], vec![1, 1]])?;
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.get((0, 1)), Some(false));
        assert_eq!(grid.get((1, 1)), Some(true));
        assert_eq!(grid.get((2, 0)), None);
        assert_eq!(grid.cell_count(), 3);
        Ok(())
    }

    #[test]
    fn invalid_grids() {
        assert!(matches!(
            Grid::from_rows(vec![vec![1, 2]]),
            Err(Error::InvalidGridError(_))
        ));
        assert!(matches!(
            Grid::from_rows(vec![vec![1, 0], vec![1]]),
            Err(Error::InvalidGridError(_))
        ));
        assert!(matches!(
            Grid::from_rows(vec![]),
            Err(Error::InvalidGridError(_))
        ));
        assert!(matches!(
            "o.\nox".parse::<Grid>(),
            Err(Error::InvalidGridError(_))
        ));
    }

    #[test]
    fn plaintext() -> Result<(), Error> {
        let grid: Grid = "
            .o.
            ooo
        "
        .parse()?;
        assert_eq!(grid.to_string(), ".o.\nooo\n");
        assert_eq!(grid, Grid::from_rows(vec![vec![0, 1, 0], vec![1, 1, 1]])?);
        Ok(())
    }

    #[test]
    fn occupied() -> Result<(), Error> {
        let grid: Grid = "o.\n.o\n".parse()?;
        assert_eq!(grid.occupied().collect::<Vec<_>>(), vec![(0, 0), (1, 1)]);
        Ok(())
    }

    #[test]
    fn connectivity() -> Result<(), Error> {
        assert!(Grid::single().is_connected());
        assert!("o.\noo".parse::<Grid>()?.is_connected());
        assert!("ooo\no.o\nooo".parse::<Grid>()?.is_connected());
        assert!(!"o.\n.o".parse::<Grid>()?.is_connected());
        assert!(!"o.o".parse::<Grid>()?.is_connected());
        assert!(!Grid::new(2, 2).is_connected());
        Ok(())
    }

    #[test]
    fn reduce() -> Result<(), Error> {
        let grid: Grid = "
            .....
            ..o..
            ..oo.
            .....
        "
        .parse()?;
        assert!(!grid.is_canonical());
        let reduced = grid.reduce()?;
        assert_eq!(reduced.to_string(), "o.\noo\n");
        assert!(reduced.is_canonical());
        assert_eq!(reduced.reduce()?, reduced);
        Ok(())
    }

    #[test]
    fn reduce_keeps_inner_empty_lines() -> Result<(), Error> {
        let grid: Grid = "o.o\n...\no..\n".parse()?;
        assert_eq!(grid.reduce()?, grid);
        Ok(())
    }

    #[test]
    fn reduce_empty() {
        assert_eq!(Grid::new(3, 2).reduce(), Err(Error::EmptyShapeError));
    }

    #[test]
    fn expand() -> Result<(), Error> {
        let grid = Grid::single();
        assert_eq!(grid.expand((1, 0))?.to_string(), "oo\n");
        assert_eq!(grid.expand((2, 1))?.to_string(), "o\no\n");
        assert_eq!(grid, Grid::single());
        assert_eq!(grid.expand((3, 3)), Err(Error::OutOfBoundsError((3, 3))));
        Ok(())
    }
}
