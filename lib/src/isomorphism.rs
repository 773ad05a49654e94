//! Deciding whether two grids are the same free polyomino.

use crate::{error::Error, grid::Grid};

/// Fails with [`Error::DimensionMismatchError`] when no rotation or reflection
/// of `a` can possibly equal `b`.
fn check_dimensions(a: &Grid, b: &Grid) -> Result<(), Error> {
    let same_box = (a.rows(), a.cols()) == (b.rows(), b.cols())
        || (a.rows(), a.cols()) == (b.cols(), b.rows());
    if same_box && a.cell_count() == b.cell_count() {
        Ok(())
    } else {
        Err(Error::DimensionMismatchError)
    }
}

/// Whether `a` can be turned into exactly `b` by rotations and reflections.
///
/// Both grids should be canonical.
///
/// A working copy of `a` is probed four times in a row with:
/// compare; reflect horizontally, compare; reflect vertically, compare;
/// then rotate by 90° for the next round. The reflections accumulate,
/// so each round visits `g`, `F| g` and `R180 g` for the current `g`,
/// and the four rounds together cover all 8 elements of _D_<sub>8</sub>.
pub fn is_isomorphic(a: &Grid, b: &Grid) -> bool {
    if check_dimensions(a, b).is_err() {
        return false;
    }
    let mut probe = a.clone();
    for _ in 0..4 {
        if probe == *b {
            return true;
        }
        probe = probe.reflect_horizontal();
        if probe == *b {
            return true;
        }
        probe = probe.reflect_vertical();
        if probe == *b {
            return true;
        }
        probe = probe.rotate(1);
    }
    false
}
