//! Constraint-tracking backtracking solver for generalized Sudoku boards.
//!
//! The solver owns a validated [`Board`](boxdoku_core::Board) and maintains
//! per-row, per-column, and per-box seen-digit indices so that candidate
//! computation and move application are constant-time bitset operations.
//! Search is depth-first with most-constrained-cell ordering: at every level
//! the empty cell with the fewest legal digits is tried first, failing fast
//! on contradictions.
//!
//! # Examples
//!
//! ```
//! use boxdoku_core::{Board, BoxDims};
//! use boxdoku_solver::Solver;
//!
//! let board = Board::parse(
//!     "
//!     1_ 3_
//!     34 _2
//!
//!     2_ 4_
//!     _3 21
//!     ",
//!     BoxDims::new(2, 2),
//! )?;
//!
//! let mut solver = Solver::new(board)?;
//! let solution = solver.solve()?;
//! assert!(solution.is_full());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{error::*, solver::*};

mod error;
mod solver;
