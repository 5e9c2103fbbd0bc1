//! Fixed 3×3 game board and the line checks used for win detection.

use crate::core::common::Seed;
use crate::core::config::{COLS, NUM_CELLS, ROWS};
use core::fmt;

/// Board contents, indexed `[row][col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [[Seed; COLS]; ROWS],
}

impl Board {
    /// Create a board with every cell empty.
    pub fn new() -> Self {
        Board {
            cells: [[Seed::Empty; COLS]; ROWS],
        }
    }

    /// Mark at (row, col), or `None` when the position is off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Seed> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Seed; COLS]; ROWS] {
        &self.cells
    }

    /// Number of cells holding a mark.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&s| s != Seed::Empty)
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == NUM_CELLS
    }

    pub fn is_empty(&self) -> bool {
        self.occupied() == 0
    }

    // Callers check bounds through `GameEngine::is_legal_move` first.
    pub(crate) fn set(&mut self, row: usize, col: usize, seed: Seed) {
        self.cells[row][col] = seed;
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [[Seed::Empty; COLS]; ROWS];
    }

    /// Whether `seed`, sitting at (row, col), completes a row, column or
    /// diagonal through that cell. Only the lines crossing the cell are
    /// inspected.
    pub fn completes_line(&self, seed: Seed, row: usize, col: usize) -> bool {
        if seed == Seed::Empty || row >= ROWS || col >= COLS {
            return false;
        }
        let c = &self.cells;
        if c[row].iter().all(|&s| s == seed) {
            return true;
        }
        if c.iter().all(|r| r[col] == seed) {
            return true;
        }
        if row == col && (0..ROWS).all(|i| c[i][i] == seed) {
            return true;
        }
        row + col == ROWS - 1 && (0..ROWS).all(|i| c[i][ROWS - 1 - i] == seed)
    }
}

/// Console rendering: ` X | O |   ` rows separated by `-----------`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, seed) in row.iter().enumerate() {
                write!(f, " {} ", seed.symbol())?;
                if c != COLS - 1 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if r != ROWS - 1 {
                writeln!(f, "-----------")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, usize, Seed)]) -> Board {
        let mut board = Board::new();
        for &(r, c, s) in marks {
            board.set(r, c, s);
        }
        board
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert!(!board.is_full());
        assert_eq!(board.get(1, 1), Some(Seed::Empty));
    }

    #[test]
    fn get_out_of_range_is_none() {
        let board = Board::new();
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 3), None);
    }

    #[test]
    fn row_and_column_lines() {
        let row = board_with(&[(1, 0, Seed::Nought), (1, 1, Seed::Nought), (1, 2, Seed::Nought)]);
        assert!(row.completes_line(Seed::Nought, 1, 2));
        assert!(!row.completes_line(Seed::Cross, 1, 2));

        let col = board_with(&[(0, 2, Seed::Cross), (1, 2, Seed::Cross), (2, 2, Seed::Cross)]);
        assert!(col.completes_line(Seed::Cross, 0, 2));
    }

    #[test]
    fn diagonals_only_checked_through_their_cells() {
        let diag = board_with(&[(0, 0, Seed::Cross), (1, 1, Seed::Cross), (2, 2, Seed::Cross)]);
        assert!(diag.completes_line(Seed::Cross, 2, 2));
        // (0,1) lies on neither diagonal, and its row and column are incomplete.
        assert!(!diag.completes_line(Seed::Cross, 0, 1));

        let anti = board_with(&[(0, 2, Seed::Nought), (1, 1, Seed::Nought), (2, 0, Seed::Nought)]);
        assert!(anti.completes_line(Seed::Nought, 2, 0));
    }

    #[test]
    fn empty_seed_never_completes_a_line() {
        assert!(!Board::new().completes_line(Seed::Empty, 0, 0));
    }

    #[test]
    fn display_matches_console_layout() {
        let board = board_with(&[(0, 0, Seed::Cross), (1, 1, Seed::Nought)]);
        let expected = " X |   |   \n-----------\n   | O |   \n-----------\n   |   |   \n";
        assert_eq!(board.to_string(), expected);
    }
}
