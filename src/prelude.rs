//! Commonly used types and utilities for ease of import.

pub use crate::{GameEngine, GameError, GameStatus, Move, Player, Seed};

#[cfg(feature = "std")]
pub use crate::{Console, GuiController, Session, UiEvent, UiResponse};
