//! Board representation and box geometry.

use std::fmt::{self, Display, Write as _};

use crate::cell::Cell;

/// Dimensions of the rectangular boxes tiling a board.
///
/// A board partitioned into boxes of `width × height` cells has side length
/// `width * height`: there are `height` boxes across and `width` boxes down,
/// so every row, column, and box holds the same number of cells.
///
/// # Examples
///
/// ```
/// use boxdoku_core::BoxDims;
///
/// let dims = BoxDims::new(3, 3); // classic 9×9
/// assert_eq!(dims.board_size(), 9);
///
/// let dims = BoxDims::new(3, 2); // 6×6 with 3-wide, 2-tall boxes
/// assert_eq!(dims.board_size(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxDims {
    width: u8,
    height: u8,
}

impl BoxDims {
    /// Creates box dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or if `width * height` exceeds 32,
    /// the largest board side a [`DigitSet`](crate::DigitSet) can cover.
    #[must_use]
    pub fn new(width: u8, height: u8) -> Self {
        assert!(width > 0 && height > 0, "box dimensions must be positive");
        let size = u16::from(width) * u16::from(height);
        assert!(
            size <= u16::from(crate::digit_set::MAX_DIGIT),
            "box area must be at most 32, got {size}"
        );
        Self { width, height }
    }

    /// Returns the box width.
    #[must_use]
    #[inline]
    pub fn width(self) -> u8 {
        self.width
    }

    /// Returns the box height.
    #[must_use]
    #[inline]
    pub fn height(self) -> u8 {
        self.height
    }

    /// Returns the side length of a board tiled by these boxes.
    #[must_use]
    #[inline]
    pub fn board_size(self) -> u8 {
        self.width * self.height
    }
}

/// An n×n grid of cells partitioned into rectangular boxes.
///
/// Cells are stored in row-major order. The side length always equals the
/// box area, so the boxes tile the board exactly; this is enforced by every
/// constructor.
///
/// # Examples
///
/// ```
/// use boxdoku_core::{Board, BoxDims, Cell};
///
/// let mut board = Board::new(BoxDims::new(2, 2));
/// assert_eq!(board.size(), 4);
/// assert_eq!(board.empty_count(), 16);
///
/// board.set(1, 2, Cell::Filled(3));
/// assert_eq!(board.get(1, 2).digit(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    size: u8,
    box_dims: BoxDims,
}

impl Board {
    /// Creates an empty board for the given box dimensions.
    #[must_use]
    pub fn new(box_dims: BoxDims) -> Self {
        let size = box_dims.board_size();
        Self {
            cells: vec![Cell::Empty; usize::from(size) * usize::from(size)],
            size,
            box_dims,
        }
    }

    /// Builds a board from rows of optional digits.
    ///
    /// `None` marks an empty cell. Digit values are stored unchecked; range
    /// and uniqueness are the validator's concern
    /// (see [`validate::is_valid`](crate::validate::is_valid)).
    ///
    /// # Panics
    ///
    /// Panics if the number of rows, or the length of any row, does not
    /// equal `box_dims.board_size()`. Passing malformed dimensions is a
    /// caller bug, not a recoverable condition.
    #[must_use]
    pub fn from_rows(rows: &[Vec<Option<u8>>], box_dims: BoxDims) -> Self {
        let size = box_dims.board_size();
        assert_eq!(
            rows.len(),
            usize::from(size),
            "board must have {size} rows to match its box dimensions"
        );
        let mut cells = Vec::with_capacity(usize::from(size) * usize::from(size));
        for row in rows {
            assert_eq!(
                row.len(),
                usize::from(size),
                "every row must have {size} cells"
            );
            cells.extend(row.iter().map(|&digit| Cell::from(digit)));
        }
        Self {
            cells,
            size,
            box_dims,
        }
    }

    /// Parses a board from grid text.
    ///
    /// The digits `1`-`9` fill a cell; `_`, `.`, and `0` mark an empty cell;
    /// all whitespace is ignored. Cells are read in row-major order, so line
    /// breaks and grouping are purely cosmetic:
    ///
    /// ```
    /// use boxdoku_core::{Board, BoxDims};
    ///
    /// let board = Board::parse(
    ///     "
    ///     1_ 3_
    ///     34 _2
    ///
    ///     2_ 4_
    ///     _3 21
    ///     ",
    ///     BoxDims::new(2, 2),
    /// )?;
    /// assert_eq!(board.get(1, 1).digit(), Some(4));
    /// assert!(board.get(0, 1).is_empty());
    /// # Ok::<(), boxdoku_core::board::ParseBoardError>(())
    /// ```
    ///
    /// Since each cell is a single character, only boards up to 9×9 can be
    /// written as text; larger boards go through [`Board::from_rows`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseBoardError`] if the board side exceeds 9, if the text
    /// contains a character that is not a cell or whitespace, or if the cell
    /// count does not match the board size.
    pub fn parse(text: &str, box_dims: BoxDims) -> Result<Self, ParseBoardError> {
        let size = box_dims.board_size();
        if size > 9 {
            return Err(ParseBoardError::UnsupportedSize { size });
        }
        let expected = usize::from(size) * usize::from(size);
        let mut cells = Vec::with_capacity(expected);
        for ch in text.chars() {
            match ch {
                '_' | '.' | '0' => cells.push(Cell::Empty),
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let digit = ch.to_digit(10).unwrap_or_default() as u8;
                    cells.push(Cell::Filled(digit));
                }
                ch if ch.is_whitespace() => {}
                ch => return Err(ParseBoardError::UnexpectedChar { ch }),
            }
        }
        if cells.len() != expected {
            return Err(ParseBoardError::CellCount {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            cells,
            size,
            box_dims,
        })
    }

    /// Returns the board side length.
    #[must_use]
    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns the box dimensions.
    #[must_use]
    #[inline]
    pub fn box_dims(&self) -> BoxDims {
        self.box_dims
    }

    #[inline]
    fn index(&self, row: u8, col: u8) -> usize {
        debug_assert!(row < self.size && col < self.size);
        usize::from(row) * usize::from(self.size) + usize::from(col)
    }

    /// Returns the cell at the given position.
    #[must_use]
    #[inline]
    pub fn get(&self, row: u8, col: u8) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Replaces the cell at the given position.
    #[inline]
    pub fn set(&mut self, row: u8, col: u8, cell: Cell) {
        let index = self.index(row, col);
        self.cells[index] = cell;
    }

    /// Returns the index of the box containing the given position.
    ///
    /// Boxes tile the board in row-major order: box index =
    /// `(row / box_height) * (size / box_width) + col / box_width`. A board
    /// of size n has exactly n boxes.
    #[must_use]
    #[inline]
    pub fn box_of(&self, row: u8, col: u8) -> u8 {
        let boxes_across = self.size / self.box_dims.width;
        (row / self.box_dims.height) * boxes_across + col / self.box_dims.width
    }

    /// Returns an iterator over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.size))
    }

    /// Returns an iterator over the cells of one column, top to bottom.
    pub fn column(&self, col: u8) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).map(move |row| self.get(row, col))
    }

    /// Returns an iterator over all cells with their positions, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8, Cell)> + '_ {
        let size = usize::from(self.size);
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            #[expect(clippy::cast_possible_truncation)]
            let (row, col) = ((i / size) as u8, (i % size) as u8);
            (row, col, cell)
        })
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Converts the board back into rows of optional digits.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Option<u8>>> {
        self.rows()
            .map(|row| row.iter().map(|&cell| cell.digit()).collect())
            .collect()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.box_dims.width;
        let height = self.box_dims.height;
        for (row_index, row) in self.rows().enumerate() {
            if row_index > 0 && row_index % usize::from(height) == 0 {
                f.write_char('\n')?;
            }
            for (col_index, cell) in row.iter().enumerate() {
                if col_index > 0 {
                    if col_index % usize::from(width) == 0 {
                        f.write_char(' ')?;
                    } else if self.size > 9 {
                        // multi-character digits need a separator
                        f.write_char(' ')?;
                    }
                }
                write!(f, "{cell}")?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a board from grid text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The board side exceeds 9, the largest size expressible one character
    /// per cell.
    #[display("boards larger than 9x9 cannot be parsed from text, got size {size}")]
    UnsupportedSize {
        /// The requested board side length.
        size: u8,
    },
    /// The text contained a character that is neither a cell nor whitespace.
    #[display("unexpected character {ch:?}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
    },
    /// The number of cells did not match the board size.
    #[display("expected {expected} cells, found {found}")]
    CellCount {
        /// The number of cells the board size requires.
        expected: usize,
        /// The number of cells found in the text.
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_dims() -> BoxDims {
        BoxDims::new(3, 3)
    }

    #[test]
    fn test_box_dims() {
        let dims = BoxDims::new(3, 2);
        assert_eq!(dims.width(), 3);
        assert_eq!(dims.height(), 2);
        assert_eq!(dims.board_size(), 6);
    }

    #[test]
    #[should_panic(expected = "box dimensions must be positive")]
    fn test_zero_box_dims() {
        let _ = BoxDims::new(0, 3);
    }

    #[test]
    #[should_panic(expected = "box area must be at most 32")]
    fn test_oversized_box_dims() {
        let _ = BoxDims::new(6, 6);
    }

    #[test]
    fn test_box_of_square_boxes() {
        let board = Board::new(classic_dims());
        let expected = [
            ((0, 0), 0),
            ((1, 4), 1),
            ((2, 8), 2),
            ((3, 0), 3),
            ((4, 4), 4),
            ((5, 6), 5),
            ((7, 1), 6),
            ((8, 5), 7),
            ((7, 6), 8),
        ];
        for ((row, col), index) in expected {
            assert_eq!(board.box_of(row, col), index, "box_of({row}, {col})");
        }
    }

    #[test]
    fn test_box_of_rect_boxes() {
        // 6×6 board, boxes 3 wide and 2 tall: two boxes across, three down.
        let board = Board::new(BoxDims::new(3, 2));
        assert_eq!(board.box_of(0, 0), 0);
        assert_eq!(board.box_of(1, 2), 0);
        assert_eq!(board.box_of(0, 3), 1);
        assert_eq!(board.box_of(2, 0), 2);
        assert_eq!(board.box_of(3, 5), 3);
        assert_eq!(board.box_of(5, 1), 4);
        assert_eq!(board.box_of(4, 4), 5);
    }

    #[test]
    fn test_parse_and_display_roundtrip() {
        let board = Board::parse(
            "
            1_ 3_
            34 _2

            2_ 4_
            _3 21
            ",
            BoxDims::new(2, 2),
        )
        .unwrap();
        assert_eq!(board.get(0, 0).digit(), Some(1));
        assert!(board.get(0, 1).is_empty());
        assert_eq!(board.empty_count(), 6);

        let reparsed = Board::parse(&board.to_string(), BoxDims::new(2, 2)).unwrap();
        assert_eq!(board, reparsed);
    }

    #[test]
    fn test_parse_zero_is_empty() {
        let board = Board::parse("10 30  34 02  20 40  03 21", BoxDims::new(2, 2)).unwrap();
        assert!(board.get(0, 1).is_empty());
        assert!(board.get(1, 2).is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Board::parse("1_3_", BoxDims::new(2, 2)),
            Err(ParseBoardError::CellCount {
                expected: 16,
                found: 4
            })
        );
        assert_eq!(
            Board::parse("x___ ____ ____ ____", BoxDims::new(2, 2)),
            Err(ParseBoardError::UnexpectedChar { ch: 'x' })
        );
        assert_eq!(
            Board::parse("", BoxDims::new(4, 3)),
            Err(ParseBoardError::UnsupportedSize { size: 12 })
        );
    }

    #[test]
    fn test_from_rows_roundtrip() {
        let rows = vec![
            vec![Some(1), None, Some(3), None],
            vec![Some(3), Some(4), None, Some(2)],
            vec![Some(2), None, Some(4), None],
            vec![None, Some(3), Some(2), Some(1)],
        ];
        let board = Board::from_rows(&rows, BoxDims::new(2, 2));
        assert_eq!(board.to_rows(), rows);
    }

    #[test]
    #[should_panic(expected = "board must have 9 rows")]
    fn test_from_rows_size_mismatch() {
        let rows = vec![vec![None; 9]; 4];
        let _ = Board::from_rows(&rows, classic_dims());
    }

    #[test]
    fn test_column_iteration() {
        let board = Board::parse(
            "
            1_ 3_
            34 _2

            2_ 4_
            _3 21
            ",
            BoxDims::new(2, 2),
        )
        .unwrap();
        let col: Vec<_> = board.column(0).map(Cell::digit).collect();
        assert_eq!(col, vec![Some(1), Some(3), Some(2), None]);
    }

    #[test]
    fn test_cells_row_major() {
        let board = Board::new(BoxDims::new(2, 1));
        let positions: Vec<_> = board.cells().map(|(row, col, _)| (row, col)).collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}
