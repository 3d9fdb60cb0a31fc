//! Animated sprites
//!
//! A sprite sheet holds its animation frames side by side. `AnimatedSprite`
//! tracks which cell is current and slides `frame_rect` across the sheet as
//! time accumulates.

use macroquad::prelude::{Rect, Vec2};

/// One on-screen animated entity (the player or a single obstacle)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedSprite {
    /// Sub-rectangle of the sheet to draw
    pub frame_rect: Rect,
    /// Top-left screen position
    pub position: Vec2,
    /// Current animation frame index
    pub frame: u32,
    /// Seconds a frame is held before advancing
    pub frame_duration: f32,
    /// Time accumulated since the last frame advance
    pub elapsed_since_frame: f32,
}

impl AnimatedSprite {
    /// Create a sprite showing the first cell of a sheet
    pub fn new(frame_width: f32, frame_height: f32, position: Vec2, frame_duration: f32) -> Self {
        Self {
            frame_rect: Rect::new(0.0, 0.0, frame_width, frame_height),
            position,
            frame: 0,
            frame_duration,
            elapsed_since_frame: 0.0,
        }
    }

    /// True when the sprite's bottom edge is at or below the floor line
    pub fn is_on_ground(&self, window_height: f32) -> bool {
        self.position.y >= window_height - self.frame_rect.h
    }

    /// Accumulate `dt` and step to the next frame once `frame_duration` has passed.
    ///
    /// Frames cycle through `0..=max_frame`. Returns true if the frame changed.
    pub fn advance(&mut self, dt: f32, max_frame: u32) -> bool {
        self.elapsed_since_frame += dt;
        if self.elapsed_since_frame < self.frame_duration {
            return false;
        }

        self.elapsed_since_frame = 0.0;
        self.frame = if self.frame >= max_frame { 0 } else { self.frame + 1 };
        self.frame_rect.x = self.frame as f32 * self.frame_rect.w;
        true
    }

    /// Screen-space rectangle covered by the sprite
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.frame_rect.w, self.frame_rect.h)
    }
}
