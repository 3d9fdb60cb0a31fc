//! Player vertical kinematics
//!
//! The runner never moves horizontally; the world scrolls past it. Only the
//! vertical axis is simulated: gravity while airborne, an impulse on jump.

use super::sprite::AnimatedSprite;

/// Vertical motion state of the player
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerBody {
    /// Vertical velocity (pixels per second, positive = down)
    pub velocity: f32,
    /// Was the player off the ground at the last ground check?
    pub in_air: bool,
}

impl PlayerBody {
    /// Ground check: grounded resets velocity, airborne accumulates gravity
    pub fn apply_gravity(&mut self, sprite: &AnimatedSprite, window_height: f32, gravity: f32, dt: f32) {
        if sprite.is_on_ground(window_height) {
            self.velocity = 0.0;
            self.in_air = false;
        } else {
            self.velocity += gravity * dt;
            self.in_air = true;
        }
    }

    /// Add the jump impulse if the last ground check found us grounded.
    ///
    /// Returns true if the jump happened.
    pub fn try_jump(&mut self, jump_velocity: f32) -> bool {
        if self.in_air {
            return false;
        }
        self.velocity += jump_velocity;
        true
    }

    /// Move the sprite by the current velocity
    pub fn integrate(&self, sprite: &mut AnimatedSprite, dt: f32) {
        sprite.position.y += self.velocity * dt;
    }
}
