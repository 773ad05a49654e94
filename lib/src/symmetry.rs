//! Classifying polyominoes by the transformations that fix them.

use crate::{grid::Grid, transform::Transform};
use educe::Educe;
use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The symmetry class of a polyomino.
///
/// Each class is named after the transformations in [`Transform::ALL`]
/// that leave the shape unchanged. Those transformations always form
/// a subgroup of _D_<sub>8</sub>, and there are 10 such subgroups.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symmetry {
    /// `C1`: only the identity fixes the shape, like the F-pentomino.
    #[educe(Default)]
    C1,
    /// `C2`: the shape is unchanged by a half turn, like the S-tetromino.
    C2,
    /// `C4`: unchanged by a quarter turn, but by no reflection.
    C4,
    /// `D2-`: the top half mirrors the bottom half.
    #[cfg_attr(feature = "serde", serde(rename = "D2-"))]
    D2Row,
    /// `D2|`: the left half mirrors the right half.
    #[cfg_attr(feature = "serde", serde(rename = "D2|"))]
    D2Col,
    /// `D2\`: unchanged by swapping rows and columns.
    #[cfg_attr(feature = "serde", serde(rename = "D2\\"))]
    D2Diag,
    /// `D2/`: unchanged by reflection across the antidiagonal.
    #[cfg_attr(feature = "serde", serde(rename = "D2/"))]
    D2Antidiag,
    /// `D4+`: both the row and the column mirrors fix the shape,
    /// like the straight polyominoes.
    #[cfg_attr(feature = "serde", serde(rename = "D4+"))]
    D4Ortho,
    /// `D4X`: both diagonal mirrors fix the shape.
    #[cfg_attr(feature = "serde", serde(rename = "D4X"))]
    D4Diag,
    /// `D8`: every transformation fixes the shape,
    /// like the monomino, the square tetromino and the X-pentomino.
    D8,
}

impl PartialOrd for Symmetry {
    /// `a < b` when every transformation fixing `a` shapes also fixes `b` shapes.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        let (mine, theirs) = (self.members(), other.members());
        if mine.iter().all(|t| theirs.contains(t)) {
            Some(Ordering::Less)
        } else if theirs.iter().all(|t| mine.contains(t)) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl FromStr for Symmetry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C1" => Ok(Symmetry::C1),
            "C2" => Ok(Symmetry::C2),
            "C4" => Ok(Symmetry::C4),
            "D2-" => Ok(Symmetry::D2Row),
            "D2|" => Ok(Symmetry::D2Col),
            "D2\\" => Ok(Symmetry::D2Diag),
            "D2/" => Ok(Symmetry::D2Antidiag),
            "D4+" => Ok(Symmetry::D4Ortho),
            "D4X" => Ok(Symmetry::D4Diag),
            "D8" => Ok(Symmetry::D8),
            _ => Err(String::from("invalid symmetry")),
        }
    }
}

impl Display for Symmetry {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            Symmetry::C1 => "C1",
            Symmetry::C2 => "C2",
            Symmetry::C4 => "C4",
            Symmetry::D2Row => "D2-",
            Symmetry::D2Col => "D2|",
            Symmetry::D2Diag => "D2\\",
            Symmetry::D2Antidiag => "D2/",
            Symmetry::D4Ortho => "D4+",
            Symmetry::D4Diag => "D4X",
            Symmetry::D8 => "D8",
        };
        write!(f, "{}", s)?;
        Ok(())
    }
}

impl Symmetry {
    /// All 10 symmetries, from the largest group to the smallest.
    pub const ALL: [Symmetry; 10] = [
        Symmetry::D8,
        Symmetry::D4Ortho,
        Symmetry::D4Diag,
        Symmetry::C4,
        Symmetry::D2Row,
        Symmetry::D2Col,
        Symmetry::D2Diag,
        Symmetry::D2Antidiag,
        Symmetry::C2,
        Symmetry::C1,
    ];

    /// Transformations contained in the symmetry group.
    pub fn members(self) -> Vec<Transform> {
        match self {
            Symmetry::C1 => vec![Transform::Id],
            Symmetry::C2 => vec![Transform::Id, Transform::Rotate180],
            Symmetry::C4 => vec![
                Transform::Id,
                Transform::Rotate90,
                Transform::Rotate180,
                Transform::Rotate270,
            ],
            Symmetry::D2Row => vec![Transform::Id, Transform::FlipRow],
            Symmetry::D2Col => vec![Transform::Id, Transform::FlipCol],
            Symmetry::D2Diag => vec![Transform::Id, Transform::FlipDiag],
            Symmetry::D2Antidiag => vec![Transform::Id, Transform::FlipAntidiag],
            Symmetry::D4Ortho => vec![
                Transform::Id,
                Transform::FlipRow,
                Transform::FlipCol,
                Transform::Rotate180,
            ],
            Symmetry::D4Diag => vec![
                Transform::Id,
                Transform::FlipDiag,
                Transform::FlipAntidiag,
                Transform::Rotate180,
            ],
            Symmetry::D8 => Transform::ALL.to_vec(),
        }
    }

    /// Number of distinct orientations of a shape with this symmetry,
    /// i.e., the index of the symmetry group in _D_<sub>8</sub>.
    pub fn orientations(self) -> usize {
        8 / self.members().len()
    }
}

impl Grid {
    /// The symmetry of the shape: the largest group of transformations
    /// that map the grid exactly onto itself.
    pub fn symmetry(&self) -> Symmetry {
        let fixed: Vec<Transform> = Transform::ALL
            .into_iter()
            .filter(|&t| self.transformed(t) == *self)
            .collect();
        Symmetry::ALL
            .into_iter()
            .find(|sym| sym.members().iter().all(|t| fixed.contains(t)))
            .unwrap_or_default()
    }
}
