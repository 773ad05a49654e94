#![cfg(feature = "serde")]
//! Serialized forms of grids and generations.

use crate::{
    error::Error, generation::Generation, grid::Grid, isomorphism::is_isomorphic,
    traits::Occupancy,
};
use serde::{Deserialize, Serialize};

/// A grid as a list of [Plaintext](https://conwaylife.com/wiki/Plaintext) rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSer {
    rows: Vec<String>,
}

impl From<Grid> for GridSer {
    fn from(grid: Grid) -> Self {
        GridSer {
            rows: grid.plaintext().lines().map(String::from).collect(),
        }
    }
}

impl TryFrom<GridSer> for Grid {
    type Error = Error;

    fn try_from(ser: GridSer) -> Result<Self, Self::Error> {
        ser.rows.join("\n").parse()
    }
}

/// A generation, with its size and count spelled out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSer {
    /// Number of cells in each shape.
    size: usize,

    /// Number of shapes.
    count: usize,

    shapes: Vec<Grid>,
}

impl From<Generation> for GenerationSer {
    fn from(generation: Generation) -> Self {
        GenerationSer {
            size: generation.size(),
            count: generation.len(),
            shapes: generation.into_shapes(),
        }
    }
}

impl TryFrom<GenerationSer> for Generation {
    type Error = Error;

    /// Checks that the saved shapes could really form a generation:
    /// each one a canonical connected shape of the right size,
    /// no two of them the same polyomino, and as many as claimed.
    fn try_from(ser: GenerationSer) -> Result<Self, Self::Error> {
        if ser.size == 0 {
            return Err(Error::NonPositiveError);
        }
        if ser.count != ser.shapes.len() {
            return Err(Error::InvalidGridError(format!(
                "expected {} shapes, found {}",
                ser.count,
                ser.shapes.len()
            )));
        }
        if let Some(k) = ser
            .shapes
            .iter()
            .position(|s| !s.is_canonical() || s.cell_count() != ser.size)
        {
            return Err(Error::InvalidGridError(format!(
                "shape #{} is not a canonical shape with {} cells",
                k, ser.size
            )));
        }
        if let Some(k) = ser.shapes.iter().position(|s| !s.is_connected()) {
            return Err(Error::InvalidGridError(format!("shape #{} is not connected", k)));
        }
        for (k, a) in ser.shapes.iter().enumerate() {
            if let Some(l) = ser.shapes[..k].iter().position(|b| is_isomorphic(a, b)) {
                return Err(Error::InvalidGridError(format!(
                    "shapes #{} and #{} are the same polyomino",
                    l, k
                )));
            }
        }
        Ok(Generation::from_parts(ser.size, ser.shapes))
    }
}
