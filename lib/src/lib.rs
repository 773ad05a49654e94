//! __polyomino-lib__ enumerates [free polyominoes](https://en.wikipedia.org/wiki/Polyomino),
//! generation by generation.
//!
//! All shapes with `n` cells are obtained from the shapes with `n - 1` cells
//! by attaching one cell in every possible way, and then removing the shapes
//! that are rotations or reflections of one found earlier.
//!
//! # Example
//!
//! ```rust
//! use polyomino_lib::Generation;
//!
//! let mut generation = Generation::seed();
//! for _ in 1..5 {
//!     generation = generation.next_generation().unwrap();
//! }
//! assert_eq!(generation.size(), 5);
//! assert_eq!(generation.len(), 12);
//! ```

mod config;
mod error;
mod expand;
mod generation;
mod grid;
mod isomorphism;
mod save;
mod symmetry;
mod traits;
mod transform;

pub use config::Config;
pub use error::Error;
pub use expand::{candidates_from_one_added_cell, Direction};
pub use generation::{
    known_count, Generation, GenerationStats, Generations, FREE_POLYOMINO_COUNTS,
};
pub use grid::{Coord, Grid};
pub use isomorphism::is_isomorphic;
pub use symmetry::Symmetry;
pub use traits::Occupancy;
pub use transform::Transform;
