//! Backtracking solver with incremental constraint tracking.

use boxdoku_core::{Board, Cell, DigitSet, validate};
use tinyvec::TinyVec;

use crate::SolverError;

/// Placement of a digit into a currently empty cell.
///
/// A move is only meaningful for a cell that is empty at the time it is
/// applied (and filled with exactly this digit at the time it is undone);
/// the search loop is responsible for that discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    row: u8,
    col: u8,
    digit: u8,
}

impl Move {
    /// Creates a move placing `digit` at `(row, col)`.
    #[must_use]
    #[inline]
    pub fn new(row: u8, col: u8, digit: u8) -> Self {
        Self { row, col, digit }
    }

    /// Returns the target row.
    #[must_use]
    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    /// Returns the target column.
    #[must_use]
    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    /// Returns the digit to place.
    #[must_use]
    #[inline]
    pub fn digit(self) -> u8 {
        self.digit
    }
}

/// An empty cell together with its legal digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CandidateCell {
    /// Row of the empty cell.
    pub row: u8,
    /// Column of the empty cell.
    pub col: u8,
    /// Digits that can legally be placed there.
    pub candidates: DigitSet,
}

/// List of empty cells with candidates, inline up to 64 entries.
pub type CandidateList = TinyVec<[CandidateCell; 64]>;

/// A backtracking Sudoku solver over a validated board.
///
/// The solver owns its board exclusively and keeps three families of
/// seen-digit sets (by row, by column, by box) in sync with it. Every filled
/// cell's digit is a member of exactly the three sets covering that cell,
/// and no set holds a digit not actually present in its unit; this invariant
/// is established by the construction scan and preserved by every
/// [`apply`](Self::apply)/[`undo`](Self::undo) pair.
///
/// A solver instance is single-threaded state: the search mutates the board
/// and indices in place across recursive calls.
///
/// # Examples
///
/// ```
/// use boxdoku_core::{Board, BoxDims};
/// use boxdoku_solver::Solver;
///
/// let board = Board::parse(
///     "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
///     ",
///     BoxDims::new(3, 3),
/// )?;
///
/// let mut solver = Solver::new(board)?;
/// let solution = solver.solve()?;
/// assert!(solution.is_full());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solver {
    board: Board,
    full: DigitSet,
    row_seen: Vec<DigitSet>,
    col_seen: Vec<DigitSet>,
    box_seen: Vec<DigitSet>,
}

impl Solver {
    /// Builds a solver over the given board.
    ///
    /// The board is validated first; on success, every filled cell is
    /// scanned once in row-major order to populate the row, column, and box
    /// seen-digit sets.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidBoard`] if the board violates a row,
    /// column, or box constraint or holds an out-of-range digit.
    pub fn new(board: Board) -> Result<Self, SolverError> {
        if !validate::is_valid(&board) {
            return Err(SolverError::InvalidBoard);
        }
        let size = usize::from(board.size());
        let mut solver = Self {
            full: DigitSet::full(board.size()),
            row_seen: vec![DigitSet::new(); size],
            col_seen: vec![DigitSet::new(); size],
            box_seen: vec![DigitSet::new(); size],
            board,
        };
        solver.index_filled_cells();
        Ok(solver)
    }

    fn index_filled_cells(&mut self) {
        let entries: Vec<_> = self
            .board
            .cells()
            .filter_map(|(row, col, cell)| {
                cell.digit()
                    .map(|digit| (row, col, self.board.box_of(row, col), digit))
            })
            .collect();
        for (row, col, box_index, digit) in entries {
            self.row_seen[usize::from(row)].insert(digit);
            self.col_seen[usize::from(col)].insert(digit);
            self.box_seen[usize::from(box_index)].insert(digit);
        }
    }

    /// Returns the solver's board in its current state.
    #[must_use]
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the solver and returns the board.
    #[must_use]
    #[inline]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Writes the move's digit into the board and into the three seen-digit
    /// sets covering its cell.
    ///
    /// The target cell must be empty and the digit must not already appear
    /// in the cell's row, column, or box; this is the search loop's
    /// responsibility and is only checked in debug builds. An already-seen
    /// digit would make the insert a no-op on the bitset, so the paired
    /// [`undo`](Self::undo) would strip a digit that another cell still
    /// owns.
    pub fn apply(&mut self, mv: Move) {
        debug_assert!(
            self.board.get(mv.row, mv.col).is_empty(),
            "apply target ({}, {}) must be empty",
            mv.row,
            mv.col,
        );
        debug_assert!(
            self.candidates(mv.row, mv.col).contains(mv.digit),
            "digit {} is already seen from ({}, {})",
            mv.digit,
            mv.row,
            mv.col,
        );
        let box_index = self.board.box_of(mv.row, mv.col);
        self.board.set(mv.row, mv.col, Cell::Filled(mv.digit));
        self.row_seen[usize::from(mv.row)].insert(mv.digit);
        self.col_seen[usize::from(mv.col)].insert(mv.digit);
        self.box_seen[usize::from(box_index)].insert(mv.digit);
    }

    /// Clears the move's cell and removes its digit from the three
    /// seen-digit sets, exactly inverting [`apply`](Self::apply).
    ///
    /// The target cell must currently hold the move's digit; this is the
    /// search loop's responsibility and is only checked in debug builds.
    pub fn undo(&mut self, mv: Move) {
        debug_assert_eq!(
            self.board.get(mv.row, mv.col),
            Cell::Filled(mv.digit),
            "undo target ({}, {}) must hold the move's digit",
            mv.row,
            mv.col,
        );
        let box_index = self.board.box_of(mv.row, mv.col);
        self.board.set(mv.row, mv.col, Cell::Empty);
        self.row_seen[usize::from(mv.row)].remove(mv.digit);
        self.col_seen[usize::from(mv.col)].remove(mv.digit);
        self.box_seen[usize::from(box_index)].remove(mv.digit);
    }

    /// Returns the digits that can legally be placed in the given empty
    /// cell: the full digit set minus everything seen in the cell's row,
    /// column, and box.
    #[must_use]
    pub fn candidates(&self, row: u8, col: u8) -> DigitSet {
        let box_index = self.board.box_of(row, col);
        let used = self.row_seen[usize::from(row)]
            | self.col_seen[usize::from(col)]
            | self.box_seen[usize::from(box_index)];
        self.full.difference(used)
    }

    /// Returns every empty cell with a non-empty candidate set, in
    /// row-major order.
    ///
    /// Empty cells with no legal digit are omitted rather than listed with
    /// an empty set; a list shorter than the number of empty cells is how
    /// the search recognizes a dead end.
    #[must_use]
    pub fn all_candidates(&self) -> CandidateList {
        let mut open = CandidateList::default();
        for (row, col, cell) in self.board.cells() {
            if cell.is_empty() {
                let candidates = self.candidates(row, col);
                if !candidates.is_empty() {
                    open.push(CandidateCell {
                        row,
                        col,
                        candidates,
                    });
                }
            }
        }
        open
    }

    /// Returns `true` if the board is completely and correctly filled.
    ///
    /// Both conditions are checked: no cell is empty, and every row,
    /// column, and box seen-digit set is saturated. A full board with an
    /// under-saturated set would indicate a bookkeeping bug, not a normal
    /// state.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_full()
            && self
                .row_seen
                .iter()
                .chain(&self.col_seen)
                .chain(&self.box_seen)
                .all(|&seen| seen == self.full)
    }

    /// Fills the board by depth-first search, or proves it unsolvable.
    ///
    /// The first solution found is returned; a board that is already solved
    /// returns immediately with zero search steps. On failure every
    /// explored move has been undone, so the board is left exactly as it
    /// was before the call.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::UnsolvableBoard`] if no valid completion
    /// exists.
    pub fn solve(&mut self) -> Result<&Board, SolverError> {
        if self.search() {
            Ok(&self.board)
        } else {
            Err(SolverError::UnsolvableBoard)
        }
    }

    /// Recursive search step. Returns `true` once the board is solved,
    /// leaving the solving moves committed; returns `false` with all moves
    /// of this subtree undone.
    ///
    /// Recursion depth is bounded by the number of empty cells.
    fn search(&mut self) -> bool {
        if self.is_solved() {
            return true;
        }

        let mut open = self.all_candidates();
        // A starved empty cell is omitted from the list; any omission means
        // this branch cannot be completed.
        if open.len() < self.board.empty_count() {
            return false;
        }
        // Most-constrained cell first; the stable sort keeps equal-count
        // cells in row-major order so solve order is deterministic.
        open.sort_by_key(|cell| cell.candidates.len());
        let Some(&cell) = open.first() else {
            return false;
        };

        for digit in cell.candidates {
            let mv = Move::new(cell.row, cell.col, digit);
            self.apply(mv);
            if self.search() {
                return true;
            }
            self.undo(mv);
        }
        false
    }
}
