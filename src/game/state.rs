//! Game state and the per-frame update
//!
//! `GameState` owns everything that changes while the game runs. `tick`
//! advances it by one frame in a fixed order:
//!
//! 1. scroll the background layers
//! 2. ground check (reset velocity or apply gravity)
//! 3. jump impulse
//! 4. move obstacles and the finish line
//! 5. integrate the player's height
//! 6. animate the player (only on the ground) and the obstacles
//! 7. collision test
//!
//! The jump impulse lands between the ground check and integration, so the
//! first airborne frame moves at exactly `jump_velocity` and gravity starts
//! the frame after.

use macroquad::prelude::Vec2;
use crate::assets::{SheetGeometry, OBSTACLE_MAX_FRAME, PLAYER_MAX_FRAME};
use crate::config::Tuning;
use super::collision;
use super::parallax::{LayerKind, ParallaxLayer};
use super::player::PlayerBody;
use super::sprite::AnimatedSprite;

/// Number of obstacles in a run
pub const OBSTACLE_COUNT: usize = 6;

/// How the run currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Running,
    /// Hit an obstacle
    Lost,
    /// Reached the finish line
    Won,
}

/// Input sampled for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Jump key went down this frame
    pub jump: bool,
}

/// Everything that changes while the game runs
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Window size in pixels
    pub screen: Vec2,
    pub player: AnimatedSprite,
    pub body: PlayerBody,
    pub obstacles: [AnimatedSprite; OBSTACLE_COUNT],
    /// Far, back and fore layers
    pub layers: [ParallaxLayer; 3],
    /// Finish line x; moves with the obstacles
    pub finish_line: f32,
    /// Set on the first hit, never cleared
    pub collided: bool,
    outcome: Outcome,
}

impl GameState {
    pub fn new(tuning: Tuning, geometry: SheetGeometry, screen: Vec2) -> Self {
        let obstacle_frame = geometry.obstacle_frame;
        let obstacles: [AnimatedSprite; OBSTACLE_COUNT] = std::array::from_fn(|i| {
            let position = Vec2::new(
                screen.x + i as f32 * tuning.obstacle_spacing,
                screen.y - obstacle_frame.y,
            );
            AnimatedSprite::new(obstacle_frame.x, obstacle_frame.y, position, tuning.obstacle_frame_duration)
        });
        let finish_line = obstacles[OBSTACLE_COUNT - 1].position.x;

        let player_frame = geometry.player_frame;
        let player = AnimatedSprite::new(
            player_frame.x,
            player_frame.y,
            Vec2::new(screen.x / 2.0 - player_frame.x / 2.0, screen.y - player_frame.y),
            tuning.player_frame_duration,
        );

        let layers = std::array::from_fn(|i| {
            ParallaxLayer::new(
                LayerKind::ALL[i],
                geometry.layer_widths[i],
                tuning.layer_speeds[i],
                tuning.layer_scale,
            )
        });

        Self {
            tuning,
            screen,
            player,
            body: PlayerBody::default(),
            obstacles,
            layers,
            finish_line,
            collided: false,
            outcome: Outcome::Running,
        }
    }

    /// Advance the game by `dt` seconds
    pub fn tick(&mut self, dt: f32, input: FrameInput) -> Outcome {
        for layer in &mut self.layers {
            layer.scroll(dt);
        }

        self.body.apply_gravity(&self.player, self.screen.y, self.tuning.gravity, dt);
        if input.jump && self.body.try_jump(self.tuning.jump_velocity) {
            log::trace!("jump at y={:.1}", self.player.position.y);
        }

        let dx = self.tuning.obstacle_velocity * dt;
        for obstacle in &mut self.obstacles {
            obstacle.position.x += dx;
        }
        self.finish_line += dx;

        self.body.integrate(&mut self.player, dt);

        if !self.body.in_air {
            self.player.advance(dt, PLAYER_MAX_FRAME);
        }
        for obstacle in &mut self.obstacles {
            obstacle.advance(dt, OBSTACLE_MAX_FRAME);
        }

        let obstacle_rects = self.obstacles.map(|o| o.bounds());
        if let Some(index) = collision::first_hit(self.player.bounds(), &obstacle_rects, self.tuning.collision_padding) {
            if !self.collided {
                log::debug!("player hit obstacle {}", index);
            }
            self.collided = true;
        }

        let outcome = self.evaluate();
        if outcome != self.outcome {
            match outcome {
                Outcome::Lost => log::info!("GAME OVER: collided with an obstacle"),
                Outcome::Won => log::info!("Finish line reached"),
                Outcome::Running => {}
            }
            self.outcome = outcome;
        }
        outcome
    }

    /// Outcome as of the last tick
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Collision beats the finish line; both beat running
    fn evaluate(&self) -> Outcome {
        if self.collided {
            Outcome::Lost
        } else if self.player.position.x >= self.finish_line {
            Outcome::Won
        } else {
            Outcome::Running
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::TextureSize;

    const DT: f32 = 1.0 / 60.0;

    fn geometry() -> SheetGeometry {
        SheetGeometry::from_sizes(
            TextureSize::new(800, 800),
            TextureSize::new(768, 128),
            [TextureSize::new(256, 192), TextureSize::new(256, 192), TextureSize::new(352, 192)],
        )
        .unwrap()
    }

    fn new_state() -> GameState {
        GameState::new(Tuning::default(), geometry(), Vec2::new(512.0, 380.0))
    }

    const IDLE: FrameInput = FrameInput { jump: false };
    const JUMP: FrameInput = FrameInput { jump: true };

    #[test]
    fn test_initial_layout() {
        let state = new_state();
        assert_eq!(state.player.position, Vec2::new(192.0, 252.0));
        for (i, o) in state.obstacles.iter().enumerate() {
            assert_eq!(o.position, Vec2::new(512.0 + i as f32 * 300.0, 280.0));
        }
        assert_eq!(state.finish_line, 2012.0);
        assert_eq!(state.outcome(), Outcome::Running);
        assert!(state.player.is_on_ground(380.0));
    }

    #[test]
    fn test_jump_sets_velocity_and_lifts_player() {
        let mut state = new_state();
        state.tick(DT, JUMP);
        assert_eq!(state.body.velocity, -600.0);
        assert!(!state.body.in_air);
        assert!((state.player.position.y - (252.0 - 600.0 * DT)).abs() < 1e-3);

        // Next frame: airborne, gravity applied on top of the impulse
        state.tick(DT, IDLE);
        assert!(state.body.in_air);
        assert!((state.body.velocity - (-600.0 + 1000.0 * DT)).abs() < 1e-3);
    }

    #[test]
    fn test_holding_jump_in_air_has_no_effect() {
        let mut held = new_state();
        let mut released = new_state();
        held.tick(DT, JUMP);
        released.tick(DT, JUMP);
        for _ in 0..20 {
            held.tick(DT, JUMP);
            released.tick(DT, IDLE);
            assert_eq!(held.body.velocity, released.body.velocity);
            assert_eq!(held.player.position.y, released.player.position.y);
        }
    }

    #[test]
    fn test_player_animation_frozen_in_air() {
        let mut state = new_state();
        state.tick(DT, JUMP);
        state.tick(DT, IDLE);
        assert!(state.body.in_air);
        let frame = state.player.frame;
        let elapsed = state.player.elapsed_since_frame;
        for _ in 0..10 {
            state.tick(DT, IDLE);
        }
        assert!(state.body.in_air);
        assert_eq!(state.player.frame, frame);
        assert_eq!(state.player.elapsed_since_frame, elapsed);
    }

    #[test]
    fn test_obstacles_and_finish_line_move_together() {
        let mut state = new_state();
        let gap = state.finish_line - state.obstacles[OBSTACLE_COUNT - 1].position.x;
        for _ in 0..30 {
            state.tick(DT, IDLE);
        }
        assert!((state.obstacles[0].position.x - (512.0 - 250.0 * DT * 30.0)).abs() < 1e-2);
        assert!((state.finish_line - state.obstacles[OBSTACLE_COUNT - 1].position.x - gap).abs() < 1e-3);
    }

    #[test]
    fn test_obstacles_always_animate() {
        let mut state = new_state();
        state.tick(DT, IDLE);
        state.tick(DT, IDLE);
        for o in &state.obstacles {
            assert_eq!(o.frame, 2);
            assert_eq!(o.frame_rect.x, 200.0);
        }
    }

    #[test]
    fn test_scenario_loss_without_jumping() {
        let mut state = new_state();
        let mut lost_at = None;
        for frame in 0..600 {
            if state.tick(DT, IDLE) == Outcome::Lost {
                lost_at = Some(frame);
                break;
            }
        }
        let lost_at = lost_at.expect("first obstacle should reach the player");

        // The padded point of obstacle 0 is at x + 50; it must be inside the player
        let point_x = state.obstacles[0].position.x + 50.0;
        assert!(point_x < 192.0 + 128.0);
        assert!(lost_at > 0);

        // Sticky from here on, even once the obstacle has passed
        for _ in 0..600 {
            assert_eq!(state.tick(DT, IDLE), Outcome::Lost);
            assert!(state.collided);
        }
    }

    #[test]
    fn test_collision_flag_never_clears() {
        let mut state = new_state();
        state.collided = true;
        for _ in 0..100 {
            state.tick(DT, IDLE);
            assert!(state.collided);
            assert_eq!(state.outcome(), Outcome::Lost);
        }
    }

    /// Jump whenever an obstacle's padded point is about to reach the player
    fn obstacle_ahead(state: &GameState) -> bool {
        let pad = state.tuning.collision_padding;
        let player_right = state.player.position.x + state.player.frame_rect.w;
        state.obstacles.iter().any(|o| {
            let gap = o.position.x + pad - player_right;
            gap > 0.0 && gap < 110.0
        })
    }

    #[test]
    fn test_scenario_win_by_jumping_every_obstacle() {
        let mut state = new_state();

        let mut jumps = 0;
        let mut won_at = None;
        for frame in 0..2000 {
            let input = FrameInput { jump: obstacle_ahead(&state) };
            let outcome = state.tick(DT, input);
            if input.jump && !state.body.in_air && state.body.velocity == state.tuning.jump_velocity {
                jumps += 1;
            }
            assert_ne!(outcome, Outcome::Lost, "hit an obstacle on frame {}", frame);
            if outcome == Outcome::Won {
                won_at = Some(frame);
                break;
            }
        }

        assert!(won_at.is_some(), "finish line never reached");
        assert_eq!(jumps, OBSTACLE_COUNT);
        assert!(!state.collided);
        assert!(state.player.position.x >= state.finish_line);

        // Keeps playing after the win: obstacles pass, the player lands, nothing changes
        for _ in 0..300 {
            let input = FrameInput { jump: obstacle_ahead(&state) };
            assert_eq!(state.tick(DT, input), Outcome::Won);
        }
        assert!(!state.collided);
        assert!(!state.body.in_air);
    }

    #[test]
    fn test_collision_takes_priority_over_finish() {
        let mut state = new_state();
        state.finish_line = 0.0;
        state.collided = true;
        assert_eq!(state.tick(DT, IDLE), Outcome::Lost);
    }

    #[test]
    fn test_layers_scroll_at_own_speeds() {
        let mut state = new_state();
        state.tick(0.5, IDLE);
        let offsets: Vec<f32> = state.layers.iter().map(|l| l.offset).collect();
        assert_eq!(offsets, vec![-10.0, -20.0, -40.0]);
    }
}
