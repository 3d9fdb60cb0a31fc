//! Keyboard input
//!
//! Maps keys to game actions so the loop never asks about raw key codes.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
