//! Enumeration configuration.

use crate::{
    error::Error,
    generation::{Generation, Generations},
    symmetry::Symmetry,
};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Enumeration configuration.
///
/// The generations will be produced from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// Number of cells of the largest polyominoes to enumerate.
    #[educe(Default = 5)]
    pub size: usize,

    /// Whether to report every generation from `1` to `size`,
    /// instead of only the last one.
    pub keep_history: bool,

    /// Only report shapes with exactly this symmetry.
    ///
    /// `None` means that all shapes are reported.
    pub symmetry: Option<Symmetry>,

    /// Whether to compare the number of shapes in each generation
    /// with the known values.
    #[educe(Default = true)]
    pub verify: bool,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(size: usize) -> Self {
        Config {
            size,
            ..Config::default()
        }
    }

    /// Sets whether to report every generation.
    pub fn set_keep_history(mut self, keep_history: bool) -> Self {
        self.keep_history = keep_history;
        self
    }

    /// Sets the symmetry filter.
    pub fn set_symmetry<T: Into<Option<Symmetry>>>(mut self, symmetry: T) -> Self {
        self.symmetry = symmetry.into();
        self
    }

    /// Sets whether to check the counts.
    pub fn set_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Creates the iterator over the generations `1, 2, ..., size`.
    ///
    /// Returns an error if the size is zero.
    pub fn generations(&self) -> Result<Generations, Error> {
        if self.size == 0 {
            return Err(Error::NonPositiveError);
        }
        Ok(Generations::new(self.size))
    }

    /// Whether a generation with this many cells should be reported.
    pub fn reports(&self, generation: &Generation) -> bool {
        self.keep_history || generation.size() == self.size
    }

    /// Whether a shape passes the symmetry filter.
    pub fn accepts(&self, symmetry: Symmetry) -> bool {
        self.symmetry.map_or(true, |s| s == symmetry)
    }
}
