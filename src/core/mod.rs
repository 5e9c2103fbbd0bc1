//! Core tic-tac-toe game engine (no_std compatible)
//!
//! This module contains the pure game logic. Apart from `alloc` for the move
//! history and the `log` facade it has no dependencies, so front-ends of any
//! kind can drive it.

pub mod board;
pub mod common;
pub mod config;
pub mod game;

// Re-export commonly used types
pub use board::Board;
pub use common::{GameError, GameStatus, Move, Player, Seed};
pub use config::*;
pub use game::{GameEngine, GameState};
