//! Drawing
//!
//! Background layers are always drawn. On top of them either the running
//! world (obstacles, then the player) or the end-of-game message.

use macroquad::prelude::*;
use crate::assets::GameTextures;
use super::parallax::ParallaxLayer;
use super::state::{GameState, Outcome};

/// Font size of the end-of-game message
pub const MESSAGE_FONT_SIZE: f32 = 32.0;

/// Text shown for a finished run
pub fn outcome_message(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::Running => None,
        Outcome::Lost => Some("GAME OVER!"),
        Outcome::Won => Some("You Win!"),
    }
}

/// Top-left corner of the end-of-game message
pub fn message_origin(screen: Vec2) -> Vec2 {
    Vec2::new((screen.x / 4.0).floor(), (screen.y / 2.0).floor())
}

/// Draw one frame of the game
pub fn draw_game(state: &GameState, textures: &GameTextures) {
    clear_background(WHITE);

    for layer in &state.layers {
        draw_layer(layer, textures.layer(layer.kind));
    }

    if let Some(message) = outcome_message(state.outcome()) {
        let origin = message_origin(state.screen);
        // macroquad places text by its baseline
        draw_text(message, origin.x, origin.y + MESSAGE_FONT_SIZE, MESSAGE_FONT_SIZE, WHITE);
        return;
    }

    for obstacle in &state.obstacles {
        draw_texture_ex(&textures.obstacle, obstacle.position.x, obstacle.position.y, WHITE, DrawTextureParams {
            source: Some(obstacle.frame_rect),
            ..Default::default()
        });
    }

    let player = &state.player;
    draw_texture_ex(&textures.player, player.position.x, player.position.y, WHITE, DrawTextureParams {
        source: Some(player.frame_rect),
        ..Default::default()
    });
}

fn draw_layer(layer: &ParallaxLayer, texture: &Texture2D) {
    let size = vec2(texture.width(), texture.height()) * layer.scale;
    for x in layer.tile_positions() {
        draw_texture_ex(texture, x, 0.0, WHITE, DrawTextureParams {
            dest_size: Some(size),
            ..Default::default()
        });
    }
}
