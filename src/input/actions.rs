//! Game action definitions

use macroquad::prelude::KeyCode;

/// Everything the player can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Space
    Jump,
    /// Escape (the window close button quits as well)
    Quit,
}

impl Action {
    /// Key bound to this action
    pub fn key(&self) -> KeyCode {
        match self {
            Action::Jump => KeyCode::Space,
            Action::Quit => KeyCode::Escape,
        }
    }
}
