pub const ROWS: usize = 3;
pub const COLS: usize = 3;

/// Number of cells on the board, and therefore the longest possible game.
pub const NUM_CELLS: usize = ROWS * COLS;
