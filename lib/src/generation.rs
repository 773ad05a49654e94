//! Generations of free polyominoes.

use crate::{
    error::Error,
    expand::candidates_from_one_added_cell,
    grid::Grid,
    isomorphism::is_isomorphic,
};
use log::{debug, trace};
use std::slice;

#[cfg(feature = "serde")]
use crate::save::GenerationSer;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Numbers of free polyominoes with `n = 1, 2, ..., 12` cells.
///
/// See [OEIS A000105](https://oeis.org/A000105).
pub const FREE_POLYOMINO_COUNTS: [usize; 12] =
    [1, 1, 2, 5, 12, 35, 108, 369, 1285, 4655, 17073, 63600];

/// The known number of free polyominoes with `size` cells, if it is in the table.
pub fn known_count(size: usize) -> Option<usize> {
    size.checked_sub(1)
        .and_then(|k| FREE_POLYOMINO_COUNTS.get(k))
        .copied()
}

/// Statistics of a single generation step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Number of candidates produced by expanding the previous generation.
    pub candidates: usize,

    /// Number of candidates kept in the new generation.
    pub accepted: usize,

    /// Number of candidates isomorphic to an earlier one.
    pub rejected: usize,
}

/// All distinct free polyominoes with the same number of cells.
///
/// The shapes are canonical grids, pairwise non-isomorphic,
/// in the order they were first encountered.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "GenerationSer", into = "GenerationSer")
)]
pub struct Generation {
    /// Number of cells in each shape.
    size: usize,

    shapes: Vec<Grid>,
}

impl Generation {
    /// The generation with one cell: a single `1 × 1` grid.
    pub fn seed() -> Self {
        Generation {
            size: 1,
            shapes: vec![Grid::single()],
        }
    }

    /// Wraps shapes that are already known to be canonical,
    /// pairwise non-isomorphic and of the given size.
    pub(crate) fn from_parts(size: usize, shapes: Vec<Grid>) -> Self {
        Generation { size, shapes }
    }

    /// The generation of all free polyominoes with `size` cells,
    /// computed from the seed.
    pub fn of_size(size: usize) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::NonPositiveError);
        }
        let mut generation = Generation::seed();
        while generation.size < size {
            generation = generation.next_generation()?;
        }
        Ok(generation)
    }

    /// Number of cells in each shape.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether there are no shapes at all.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The shapes, in the order they were found.
    pub fn shapes(&self) -> &[Grid] {
        &self.shapes
    }

    pub fn iter(&self) -> slice::Iter<'_, Grid> {
        self.shapes.iter()
    }

    pub fn into_shapes(self) -> Vec<Grid> {
        self.shapes
    }

    /// Computes the next generation, with one more cell.
    pub fn next_generation(&self) -> Result<Generation, Error> {
        self.next_with_stats().map(|(generation, _)| generation)
    }

    /// Computes the next generation, together with statistics of the step.
    ///
    /// Every candidate is compared with the shapes accepted so far,
    /// in order, and kept only when none of them is isomorphic to it.
    /// So the first representative of each shape wins.
    ///
    /// The count is not checked here; call [`verify`](Self::verify) for that.
    pub fn next_with_stats(&self) -> Result<(Generation, GenerationStats), Error> {
        let size = self.size + 1;
        let mut shapes: Vec<Grid> = Vec::new();
        let mut stats = GenerationStats::default();

        for grid in &self.shapes {
            for candidate in candidates_from_one_added_cell(grid)? {
                stats.candidates += 1;
                match shapes.iter().position(|s| is_isomorphic(&candidate, s)) {
                    Some(k) => {
                        stats.rejected += 1;
                        trace!("Candidate is the same as shape #{}:\n{}", k, candidate);
                    }
                    None => shapes.push(candidate),
                }
            }
        }
        stats.accepted = shapes.len();

        debug!(
            "Generation {}: {} candidates, {} accepted, {} rejected",
            size, stats.candidates, stats.accepted, stats.rejected
        );
        Ok((Generation::from_parts(size, shapes), stats))
    }

    /// Compares the number of shapes with [`FREE_POLYOMINO_COUNTS`].
    ///
    /// Sizes beyond the table are accepted without checking.
    pub fn verify(&self) -> Result<(), Error> {
        match known_count(self.size) {
            Some(expected) if expected != self.len() => Err(Error::CountMismatchError {
                size: self.size,
                expected,
                found: self.len(),
            }),
            _ => Ok(()),
        }
    }
}

impl<'a> IntoIterator for &'a Generation {
    type Item = &'a Grid;
    type IntoIter = slice::Iter<'a, Grid>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

/// Successive generations, starting from the seed,
/// up to a maximal number of cells.
pub struct Generations {
    max_size: usize,

    /// The generation returned last time.
    last: Option<Generation>,

    /// Statistics of the step that produced `last`.
    stats: Option<GenerationStats>,

    failed: bool,
}

impl Generations {
    /// Generations with `1, 2, ..., max_size` cells.
    pub fn new(max_size: usize) -> Self {
        Generations {
            max_size,
            last: None,
            stats: None,
            failed: false,
        }
    }

    /// Statistics of the step that produced the last returned generation.
    ///
    /// `None` before the first call to `next`, and for the seed.
    pub fn stats(&self) -> Option<GenerationStats> {
        self.stats
    }
}

impl Iterator for Generations {
    type Item = Result<Generation, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.max_size == 0 {
            return None;
        }
        let generation = match &self.last {
            None => Generation::seed(),
            Some(last) if last.size() >= self.max_size => return None,
            Some(last) => match last.next_with_stats() {
                Ok((generation, stats)) => {
                    self.stats = Some(stats);
                    generation
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            },
        };
        self.last = Some(generation.clone());
        Some(Ok(generation))
    }
}
