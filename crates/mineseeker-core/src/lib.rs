//! MineSeeker engine: solves Minesweeper boards by constraint propagation.
//!
//! The engine keeps, per uncovered numbered field, the set of mine
//! configurations of its 3x3 neighbourhood that are still admissible, and
//! filters these sets by node consistency (observed counts, committed
//! neighbours) and pairwise consistency (overlap compatibility between
//! nearby fields) until a fixed point is reached. When deduction stalls it
//! asks a hint oracle for one guaranteed-safe field; a perfect run needs no
//! hints at all.
//!
//! The main types are [`Minefield`] (the ground truth, queried through a
//! read-only oracle interface), [`Seeker`] (the solver), and
//! [`SafeFieldOracle`] (the default hint source).

pub mod config;
pub mod generator;
pub mod hint;
pub mod minefield;
pub mod seeker;

use serde::{Deserialize, Serialize};

pub use generator::Generator;
pub use hint::{HintOracle, NoHints, SafeFieldOracle};
pub use minefield::{Minefield, ParseError};
pub use seeker::{Cell, CellState, Seeker};

/// A field coordinate. `x` grows to the right, `y` downwards; `(0, 0)` is
/// the top-left corner of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
