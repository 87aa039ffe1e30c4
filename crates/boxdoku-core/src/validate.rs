//! Structural board validation.
//!
//! A board is structurally valid when every filled cell holds a digit in
//! `1..=n` and no digit repeats within a row, column, or box. Validity says
//! nothing about solvability; it is the precondition the solver checks
//! before building its constraint indices.

use crate::{board::Board, cell::Cell, digit_set::DigitSet};

/// Returns `true` if the board violates no row, column, or box constraint.
///
/// The column check runs the row check over a transposed view of the board,
/// so row and column validation are the same logic by construction. Empty
/// cells are always acceptable; a filled cell fails if its digit is out of
/// range or already seen in the same unit.
///
/// Pure: the board is never modified, and validating twice yields the same
/// answer.
///
/// # Examples
///
/// ```
/// use boxdoku_core::{Board, BoxDims, validate};
///
/// let board = Board::parse("12 34  34 12  21 43  43 21", BoxDims::new(2, 2))?;
/// assert!(validate::is_valid(&board));
///
/// // Duplicate 1 in the first row.
/// let board = Board::parse("11 34  34 12  22 43  43 21", BoxDims::new(2, 2))?;
/// assert!(!validate::is_valid(&board));
/// # Ok::<(), boxdoku_core::board::ParseBoardError>(())
/// ```
#[must_use]
pub fn is_valid(board: &Board) -> bool {
    let size = board.size();
    check_rows(board.rows().map(|row| row.iter().copied()), size)
        && check_rows((0..size).map(|col| board.column(col)), size)
        && check_boxes(board)
}

/// Checks every row of a (possibly transposed) board for duplicates and
/// out-of-range digits.
fn check_rows<R, C>(mut rows: R, size: u8) -> bool
where
    R: Iterator<Item = C>,
    C: Iterator<Item = Cell>,
{
    rows.all(|row| unit_is_valid(row, size))
}

/// Checks every box tile, iterating tiles in row-major order.
fn check_boxes(board: &Board) -> bool {
    let size = board.size();
    let width = board.box_dims().width();
    let height = board.box_dims().height();
    for start_row in (0..size).step_by(usize::from(height)) {
        for start_col in (0..size).step_by(usize::from(width)) {
            let tile = (start_row..start_row + height)
                .flat_map(|row| (start_col..start_col + width).map(move |col| (row, col)))
                .map(|(row, col)| board.get(row, col));
            if !unit_is_valid(tile, size) {
                return false;
            }
        }
    }
    true
}

/// Returns `true` if the unit's filled cells are in range and pairwise
/// distinct. Fails closed on the first violation.
fn unit_is_valid(cells: impl Iterator<Item = Cell>, max: u8) -> bool {
    let mut seen = DigitSet::new();
    for cell in cells {
        if let Some(digit) = cell.digit() {
            if !(1..=max).contains(&digit) || seen.contains(digit) {
                return false;
            }
            seen.insert(digit);
        }
    }
    true
}
