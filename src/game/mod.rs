//! Runner game simulation
//!
//! Everything here except `renderer` and `clock` is plain data and math, so
//! it can be exercised without a window:
//! - sprite: animated sprite sheets and the ground predicate
//! - player: gravity and jump
//! - parallax: scrolling background layers
//! - collision: padded rectangle overlap
//! - state: the `GameState` aggregate and its per-frame `tick`

pub mod sprite;
pub mod player;
pub mod parallax;
pub mod collision;
pub mod state;
pub mod clock;
pub mod renderer;

// Re-export main types
pub use parallax::LayerKind;
pub use state::{FrameInput, GameState};
pub use clock::{clock_for, FramePacer};
pub use renderer::draw_game;
