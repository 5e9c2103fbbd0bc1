//! Common types for tic-tac-toe: cell marks, players, moves, status and errors.

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Seed {
    Cross,
    Nought,
    #[default]
    Empty,
}

impl Seed {
    /// The player owning this mark, or `None` for an empty cell.
    pub fn player(self) -> Option<Player> {
        match self {
            Seed::Cross => Some(Player::Cross),
            Seed::Nought => Some(Player::Nought),
            Seed::Empty => None,
        }
    }

    /// Single character used by text renderings.
    pub fn symbol(self) -> char {
        match self {
            Seed::Cross => 'X',
            Seed::Nought => 'O',
            Seed::Empty => ' ',
        }
    }
}

/// One of the two players. Cross always opens a fresh game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    Cross,
    Nought,
}

impl Player {
    pub fn seed(self) -> Seed {
        match self {
            Player::Cross => Seed::Cross,
            Player::Nought => Seed::Nought,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }

    /// Status reached when this player completes a line.
    pub fn winning_status(self) -> GameStatus {
        match self {
            Player::Cross => GameStatus::CrossWon,
            Player::Nought => GameStatus::NoughtWon,
        }
    }
}

/// A placed mark. Created when a move is applied and never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    #[default]
    Playing,
    Draw,
    CrossWon,
    NoughtWon,
}

impl GameStatus {
    /// Returns `true` for `Draw`, `CrossWon` and `NoughtWon`.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Playing
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::CrossWon => Some(Player::Cross),
            GameStatus::NoughtWon => Some(Player::Nought),
            GameStatus::Playing | GameStatus::Draw => None,
        }
    }
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Target cell is off the board, already occupied, or the game is over.
    InvalidMove { row: usize, col: usize },
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidMove { row, col } => {
                write!(f, "Invalid move at row {}, column {}", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
