use alloc::vec::Vec;
use log::{debug, trace};

use crate::core::{
    board::Board,
    common::{GameError, GameStatus, Move, Player, Seed},
    config::{COLS, NUM_CELLS, ROWS},
};

/// Plain-data snapshot of an engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub status: GameStatus,
    pub history: Vec<Move>,
}

/// Core game logic: board, turn, status and the undo stack.
///
/// The history always replays from an empty board to the current board, and
/// `status` is `Playing` until a move completes a line or fills the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameEngine {
    /// Create an engine ready for a fresh game.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Cross,
            status: GameStatus::Playing,
            history: Vec::with_capacity(NUM_CELLS),
        }
    }

    /// Discard the current game: empty board, Cross to move, no history.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::Cross;
        self.status = GameStatus::Playing;
        self.history.clear();
        debug!("game reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Mark at (row, col), `None` when off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Seed> {
        self.board.get(row, col)
    }

    /// Whether the current player may place a mark at (row, col).
    pub fn is_legal_move(&self, row: usize, col: usize) -> bool {
        self.status == GameStatus::Playing && self.board.get(row, col) == Some(Seed::Empty)
    }

    /// Place the current player's mark at (row, col) and return the new status.
    ///
    /// Illegal moves leave the engine untouched. After a terminal move the
    /// current player stays on the mover.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameStatus, GameError> {
        if !self.is_legal_move(row, col) {
            trace!(
                "rejected move ({}, {}) with status {:?}",
                row,
                col,
                self.status
            );
            return Err(GameError::InvalidMove { row, col });
        }
        let player = self.current_player;
        let seed = player.seed();
        self.board.set(row, col, seed);
        self.history.push(Move { row, col, player });

        self.status = if self.board.completes_line(seed, row, col) {
            player.winning_status()
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::Playing
        };
        if self.status == GameStatus::Playing {
            self.current_player = player.opponent();
        }
        debug!(
            "{:?} played ({}, {}) -> {:?}",
            player, row, col, self.status
        );
        Ok(self.status)
    }

    /// Take back the most recent move. Returns the removed move, or `None`
    /// when there is nothing to undo.
    ///
    /// The status always returns to `Playing`: only the removed move could
    /// have ended the game.
    pub fn undo(&mut self) -> Option<Move> {
        let last = self.history.pop()?;
        self.board.set(last.row, last.col, Seed::Empty);
        self.current_player = last.player;
        self.status = GameStatus::Playing;
        debug!("undid {:?} at ({}, {})", last.player, last.row, last.col);
        Some(last)
    }

    /// Generate a snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: self.board,
            current_player: self.current_player,
            status: self.status,
            history: self.history.clone(),
        }
    }

    /// Rebuild an engine by applying `moves` to a fresh game in order.
    ///
    /// Fails on the first move that is illegal or recorded for the wrong
    /// player.
    pub fn replay(moves: &[Move]) -> Result<Self, GameError> {
        let mut engine = Self::new();
        for mv in moves {
            if mv.player != engine.current_player {
                return Err(GameError::InvalidMove {
                    row: mv.row,
                    col: mv.col,
                });
            }
            engine.apply_move(mv.row, mv.col)?;
        }
        Ok(engine)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Restore an engine from a snapshot. The history is replayed and must
/// reproduce the snapshot's board, status and current player.
impl TryFrom<GameState> for GameEngine {
    type Error = GameError;

    fn try_from(state: GameState) -> Result<Self, Self::Error> {
        let engine = Self::replay(&state.history)?;
        if engine.board == state.board
            && engine.status == state.status
            && engine.current_player == state.current_player
        {
            return Ok(engine);
        }
        // Point at the first cell that disagrees, else at the last move.
        let (row, col) = (0..ROWS)
            .flat_map(|r| (0..COLS).map(move |c| (r, c)))
            .find(|&(r, c)| engine.board.get(r, c) != state.board.get(r, c))
            .or_else(|| state.history.last().map(|m| (m.row, m.col)))
            .unwrap_or((0, 0));
        debug!("rejected inconsistent snapshot at ({}, {})", row, col);
        Err(GameError::InvalidMove { row, col })
    }
}
