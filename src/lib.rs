#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod core;
#[cfg(feature = "std")]
pub mod console;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
pub mod ui;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use console::Console;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use ui::{cell_at, window_size, GuiController, Session, UiEvent, UiResponse};
