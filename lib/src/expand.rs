//! Growing a polyomino by one cell.

use crate::{
    error::Error,
    grid::{Coord, Grid},
};

/// The four directions in which a new cell can be attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// In the order candidates are generated for each cell.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The neighbour of `coord` in this direction,
    /// or `None` if it lies outside a `rows × cols` grid.
    pub fn neighbor(self, (i, j): Coord, rows: usize, cols: usize) -> Option<Coord> {
        let (i, j) = match self {
            Direction::Left => (i, j.checked_sub(1)?),
            Direction::Right => (i, j + 1),
            Direction::Up => (i.checked_sub(1)?, j),
            Direction::Down => (i + 1, j),
        };
        if i < rows && j < cols {
            Some((i, j))
        } else {
            None
        }
    }

    /// The neighbour of `coord` in this direction, in the coordinates of
    /// the grid padded by one empty cell on every side.
    pub fn padded_target(self, (i, j): Coord) -> Coord {
        match self {
            Direction::Left => (i + 1, j),
            Direction::Right => (i + 1, j + 2),
            Direction::Up => (i, j + 1),
            Direction::Down => (i + 2, j + 1),
        }
    }
}

/// All grids obtained by attaching one cell next to an occupied cell of `grid`.
///
/// For every occupied cell, in row-major order, and every direction in
/// [`Direction::ALL`], one candidate is produced when the neighbour in that
/// direction is outside the grid or empty.
///
/// The result is not deduplicated: the same shape may appear several times,
/// in the same or in different orientations.
pub fn candidates_from_one_added_cell(grid: &Grid) -> Result<Vec<Grid>, Error> {
    let mut candidates = Vec::new();
    for coord in grid.occupied() {
        for direction in Direction::ALL {
            let free = match direction.neighbor(coord, grid.rows(), grid.cols()) {
                None => true,
                Some(neighbor) => grid.get(neighbor) == Some(false),
            };
            if free {
                candidates.push(grid.expand(direction.padded_target(coord))?);
            }
        }
    }
    Ok(candidates)
}
