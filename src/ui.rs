#![cfg(feature = "std")]

//! Graphical front-end controller.
//!
//! Holds everything a windowed front-end needs apart from the drawing
//! itself: click to cell mapping, button handling, the game-over dialog and
//! the per-session win tally. The host toolkit forwards its events to
//! [`GuiController::handle`] and redraws on [`UiResponse::Redraw`].

use log::debug;

use crate::core::{GameEngine, GameStatus, Player, COLS, ROWS};

/// Width and height of one board cell in pixels.
pub const CELL_SIZE: u32 = 120;
pub const CANVAS_WIDTH: u32 = CELL_SIZE * COLS as u32;
pub const CANVAS_HEIGHT: u32 = CELL_SIZE * ROWS as u32;
pub const STATUS_BAR_HEIGHT: u32 = 30;

/// Preferred window size: the board canvas plus the status bar below it.
pub fn window_size() -> (u32, u32) {
    (CANVAS_WIDTH, CANVAS_HEIGHT + STATUS_BAR_HEIGHT)
}

/// Map a click on the canvas to (row, col), or `None` outside the board.
pub fn cell_at(x: u32, y: u32) -> Option<(usize, usize)> {
    let row = (y / CELL_SIZE) as usize;
    let col = (x / CELL_SIZE) as usize;
    (row < ROWS && col < COLS).then_some((row, col))
}

/// Win counts kept across games for as long as the window is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub cross_wins: u32,
    pub nought_wins: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game. Draws and unfinished games are not tallied.
    pub fn record(&mut self, status: GameStatus) {
        match status.winner() {
            Some(Player::Cross) => self.cross_wins += 1,
            Some(Player::Nought) => self.nought_wins += 1,
            None => {}
        }
    }

    pub fn reset_totals(&mut self) {
        *self = Self::default();
    }
}

/// Input events forwarded by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Mouse click on the canvas, in pixels.
    Click { x: u32, y: u32 },
    NewGame,
    Undo,
    ResetTotals,
    /// Answer to the game-over dialog.
    PlayAgain(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiResponse {
    Redraw,
    Ignored,
    Exit,
}

#[derive(Debug, Default)]
pub struct GuiController {
    engine: GameEngine,
    session: Session,
    dialog_open: bool,
}

impl GuiController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn session(&self) -> Session {
        self.session
    }

    /// Whether the modal game-over dialog is showing.
    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn handle(&mut self, event: UiEvent) -> UiResponse {
        if self.dialog_open {
            return match event {
                UiEvent::PlayAgain(true) => {
                    self.dialog_open = false;
                    self.engine.reset();
                    UiResponse::Redraw
                }
                UiEvent::PlayAgain(false) => UiResponse::Exit,
                _ => UiResponse::Ignored,
            };
        }
        match event {
            UiEvent::Click { x, y } => self.click(x, y),
            UiEvent::NewGame => {
                self.engine.reset();
                UiResponse::Redraw
            }
            UiEvent::Undo => match self.engine.undo() {
                Some(_) => UiResponse::Redraw,
                None => UiResponse::Ignored,
            },
            UiEvent::ResetTotals => {
                self.session.reset_totals();
                UiResponse::Redraw
            }
            UiEvent::PlayAgain(_) => UiResponse::Ignored,
        }
    }

    fn click(&mut self, x: u32, y: u32) -> UiResponse {
        let Some((row, col)) = cell_at(x, y) else {
            return UiResponse::Ignored;
        };
        match self.engine.apply_move(row, col) {
            Ok(status) => {
                if status.is_terminal() {
                    self.session.record(status);
                    self.dialog_open = true;
                    debug!("game over: {:?}, tally {:?}", status, self.session);
                }
                UiResponse::Redraw
            }
            Err(_) => UiResponse::Ignored,
        }
    }

    /// Text for the status bar under the canvas.
    pub fn status_text(&self) -> String {
        let head = match self.engine.status() {
            GameStatus::Playing => match self.engine.current_player() {
                Player::Cross => "X's Turn",
                Player::Nought => "O's Turn",
            },
            GameStatus::Draw => "It's a Draw!",
            GameStatus::CrossWon => "'X' Won!",
            GameStatus::NoughtWon => "'O' Won!",
        };
        format!(
            "{} | X Wins: {} | O Wins: {}",
            head, self.session.cross_wins, self.session.nought_wins
        )
    }

    /// Message for the game-over dialog, `None` while it is closed.
    pub fn dialog_text(&self) -> Option<String> {
        if !self.dialog_open {
            return None;
        }
        let outcome = match self.engine.status() {
            GameStatus::Draw => "It's a Draw!",
            GameStatus::CrossWon => "'X' Won!",
            GameStatus::NoughtWon => "'O' Won!",
            GameStatus::Playing => return None,
        };
        Some(format!("{}\nDo you want to play again?", outcome))
    }
}
