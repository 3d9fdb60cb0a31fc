//! Input state
//!
//! Polls macroquad's keyboard state once per frame.

use macroquad::prelude::*;
use crate::game::FrameInput;
use super::Action;

/// Keyboard-backed action queries
#[derive(Debug, Default)]
pub struct InputState;

impl InputState {
    pub fn new() -> Self {
        Self
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        is_key_pressed(action.key())
    }

    /// Did the user ask to close the game (window button or quit key)?
    pub fn quit_requested(&self) -> bool {
        is_quit_requested() || self.action_pressed(Action::Quit)
    }

    /// Input consumed by the simulation this frame
    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            jump: self.action_pressed(Action::Jump),
        }
    }
}
