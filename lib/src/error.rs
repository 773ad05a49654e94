//! All kinds of errors in this crate.

use crate::grid::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Invalid grid: {0}.
    InvalidGridError(String),
    /// The shape has no occupied cell.
    EmptyShapeError,
    // Only used internally to short-circuit isomorphism checks.
    /// The two grids can never match under rotations and reflections.
    DimensionMismatchError,
    /// The size should be positive.
    NonPositiveError,
    /// Cell {0:?} is outside the grid.
    OutOfBoundsError(Coord),
    /// Found {found} polyominoes with {size} cells, expected {expected}.
    CountMismatchError {
        size: usize,
        expected: usize,
        found: usize,
    },
}
