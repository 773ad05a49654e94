//! Rotations and reflections of grids.
//!
//! 8 different transformations correspond to 8 elements of the
//! [dihedral group _D_<sub>8</sub>](https://en.wikipedia.org/wiki/Examples_of_groups#dihedral_group_of_order_8).

use crate::grid::{Coord, Grid};
use educe::Educe;
use std::{
    fmt::{self, Display, Formatter},
    matches,
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Transformations (rotations and reflections) of a grid.
///
/// `Id` is the identity transformation.
///
/// `R` means rotations. The number after it is the counterclockwise
/// rotation angle in degrees.
///
/// `F` means reflections (flips).
/// The symbol after it is the axis of reflection.
///
/// Transformations marked with `R90`, `R270`, `F\` and `F/`
/// swap the number of rows and columns.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Transform {
    /// `Id`.
    ///
    /// Identity transformation.
    #[educe(Default)]
    Id,
    /// `R90`.
    ///
    /// 90° rotation counterclockwise.
    #[cfg_attr(feature = "serde", serde(rename = "R90"))]
    Rotate90,
    /// `R180`.
    ///
    /// 180° rotation counterclockwise.
    #[cfg_attr(feature = "serde", serde(rename = "R180"))]
    Rotate180,
    /// `R270`.
    ///
    /// 270° rotation counterclockwise.
    #[cfg_attr(feature = "serde", serde(rename = "R270"))]
    Rotate270,
    /// `F-`.
    ///
    /// Reflection across the middle row. The rows come in reverse order.
    #[cfg_attr(feature = "serde", serde(rename = "F-"))]
    FlipRow,
    /// `F|`.
    ///
    /// Reflection across the middle column. The columns come in reverse order.
    #[cfg_attr(feature = "serde", serde(rename = "F|"))]
    FlipCol,
    /// `F\`.
    ///
    /// Reflection across the diagonal, i.e., transposition.
    #[cfg_attr(feature = "serde", serde(rename = "F\\"))]
    FlipDiag,
    /// `F/`.
    ///
    /// Reflection across the antidiagonal.
    #[cfg_attr(feature = "serde", serde(rename = "F/"))]
    FlipAntidiag,
}

impl FromStr for Transform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Id" => Ok(Transform::Id),
            "R90" => Ok(Transform::Rotate90),
            "R180" => Ok(Transform::Rotate180),
            "R270" => Ok(Transform::Rotate270),
            "F-" => Ok(Transform::FlipRow),
            "F|" => Ok(Transform::FlipCol),
            "F\\" => Ok(Transform::FlipDiag),
            "F/" => Ok(Transform::FlipAntidiag),
            _ => Err(String::from("invalid Transform")),
        }
    }
}

impl Display for Transform {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            Transform::Id => "Id",
            Transform::Rotate90 => "R90",
            Transform::Rotate180 => "R180",
            Transform::Rotate270 => "R270",
            Transform::FlipRow => "F-",
            Transform::FlipCol => "F|",
            Transform::FlipDiag => "F\\",
            Transform::FlipAntidiag => "F/",
        };
        write!(f, "{}", s)?;
        Ok(())
    }
}

impl Transform {
    /// All 8 transformations.
    pub const ALL: [Transform; 8] = [
        Transform::Id,
        Transform::Rotate90,
        Transform::Rotate180,
        Transform::Rotate270,
        Transform::FlipRow,
        Transform::FlipCol,
        Transform::FlipDiag,
        Transform::FlipAntidiag,
    ];

    /// Counterclockwise rotation by `90° × k`.
    ///
    /// `k` is taken modulo 4, so negative values rotate clockwise.
    pub fn rotation(k: i32) -> Self {
        match k.rem_euclid(4) {
            0 => Transform::Id,
            1 => Transform::Rotate90,
            2 => Transform::Rotate180,
            _ => Transform::Rotate270,
        }
    }

    /// Whether this transformation swaps the number of rows and columns.
    ///
    /// Returns `true` for `R90`, `R270`, `F\` and `F/`.
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Transform::Rotate90
                | Transform::Rotate270
                | Transform::FlipDiag
                | Transform::FlipAntidiag,
        )
    }

    /// The inverse of this transformation.
    pub fn inverse(self) -> Self {
        match self {
            Transform::Rotate90 => Transform::Rotate270,
            Transform::Rotate270 => Transform::Rotate90,
            x => x,
        }
    }

    /// Applies the transformation on a coordinate of a grid
    /// with `rows` rows and `cols` columns.
    ///
    /// Returns the coordinate of the same cell in the transformed grid,
    /// or `None` if `coord` is outside the grid.
    pub fn act_on(self, coord: Coord, rows: usize, cols: usize) -> Option<Coord> {
        let (i, j) = coord;
        if i >= rows || j >= cols {
            return None;
        }
        let target = match self {
            Transform::Id => (i, j),
            Transform::Rotate90 => (cols - 1 - j, i),
            Transform::Rotate180 => (rows - 1 - i, cols - 1 - j),
            Transform::Rotate270 => (j, rows - 1 - i),
            Transform::FlipRow => (rows - 1 - i, j),
            Transform::FlipCol => (i, cols - 1 - j),
            Transform::FlipDiag => (j, i),
            Transform::FlipAntidiag => (cols - 1 - j, rows - 1 - i),
        };
        Some(target)
    }
}

impl Grid {
    /// Applies a transformation, returning a new grid.
    pub fn transformed(&self, transform: Transform) -> Grid {
        let (rows, cols) = if transform.swaps_dimensions() {
            (self.cols(), self.rows())
        } else {
            (self.rows(), self.cols())
        };
        // Pull each target cell back through the inverse.
        let inverse = transform.inverse();
        Grid::from_fn(rows, cols, |coord| {
            inverse
                .act_on(coord, rows, cols)
                .and_then(|source| self.get(source))
                == Some(true)
        })
    }

    /// Rotates the grid counterclockwise by `90° × k`.
    pub fn rotate(&self, k: i32) -> Grid {
        self.transformed(Transform::rotation(k))
    }

    /// Reflects the grid horizontally, reversing the order of the columns.
    pub fn reflect_horizontal(&self) -> Grid {
        self.transformed(Transform::FlipCol)
    }

    /// Reflects the grid vertically, reversing the order of the rows.
    pub fn reflect_vertical(&self) -> Grid {
        self.transformed(Transform::FlipRow)
    }
}
