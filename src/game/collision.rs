//! Collision
//!
//! Obstacle sprites have a lot of transparent margin, so their rectangles are
//! shrunk before the overlap test. The test itself is strict on every edge:
//! rectangles that only touch do not collide, but a rectangle shrunk down to
//! a single point still hits when that point is inside the other one.

use macroquad::prelude::Rect;

/// Shrink `rect` by `pad` on every side
pub fn inset(rect: Rect, pad: f32) -> Rect {
    Rect::new(rect.x + pad, rect.y + pad, rect.w - 2.0 * pad, rect.h - 2.0 * pad)
}

/// Strict axis-aligned overlap test
pub fn intersects(a: Rect, b: Rect) -> bool {
    a.x < b.x + b.w
        && a.x + a.w > b.x
        && a.y < b.y + b.h
        && a.y + a.h > b.y
}

/// Index of the first obstacle whose padded rectangle overlaps `player`
pub fn first_hit<'a, I>(player: Rect, obstacles: I, pad: f32) -> Option<usize>
where
    I: IntoIterator<Item = &'a Rect>,
{
    obstacles
        .into_iter()
        .position(|obstacle| intersects(inset(*obstacle, pad), player))
}
