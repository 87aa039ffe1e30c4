//! Core data structures for generalized Sudoku boards.
//!
//! This crate provides the board representation and structural validation
//! used by the solver. Boards are n×n grids partitioned into rectangular
//! boxes of a fixed width and height, where n is the box area; digits range
//! over 1..=n.
//!
//! # Overview
//!
//! - [`cell`]: A single grid cell, either empty or holding a digit.
//! - [`digit_set`]: A fixed-size bitset over digits 1..=n, used for
//!   constraint tracking and candidate computation.
//! - [`board`]: The board itself, box geometry, and text conversion.
//! - [`validate`]: Structural legality checking (row, column, and box
//!   uniqueness plus digit range).
//!
//! # Examples
//!
//! ```
//! use boxdoku_core::{Board, BoxDims, validate};
//!
//! let board = Board::parse(
//!     "
//!     12 34
//!     34 12
//!
//!     21 43
//!     43 21
//!     ",
//!     BoxDims::new(2, 2),
//! )?;
//!
//! assert!(validate::is_valid(&board));
//! assert!(board.is_full());
//! # Ok::<(), boxdoku_core::board::ParseBoardError>(())
//! ```

pub mod board;
pub mod cell;
pub mod digit_set;
pub mod validate;

pub use self::{
    board::{Board, BoxDims},
    cell::Cell,
    digit_set::DigitSet,
};
