//! Texture loading
//!
//! All five textures are loaded once before the loop starts. A missing or
//! empty file stops the game with a message naming the file instead of
//! drawing garbage.

use macroquad::prelude::*;
use crate::game::LayerKind;

/// Obstacle sprite sheet (8x8 grid, only the first row is animated)
pub const OBSTACLE_SHEET: &str = "textures/12_nebula_spritesheet.png";
/// Player sprite sheet (6 frames in one row)
pub const PLAYER_SHEET: &str = "textures/scarfy.png";

pub const OBSTACLE_SHEET_COLUMNS: u32 = 8;
pub const OBSTACLE_SHEET_ROWS: u32 = 8;
pub const OBSTACLE_MAX_FRAME: u32 = 7;
pub const PLAYER_SHEET_COLUMNS: u32 = 6;
pub const PLAYER_MAX_FRAME: u32 = 5;

/// Error type for texture loading
#[derive(Debug)]
pub enum AssetError {
    Load { path: String, reason: String },
    EmptyTexture { path: String },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Load { path, reason } => write!(f, "failed to load {}: {}", path, reason),
            AssetError::EmptyTexture { path } => write!(f, "texture {} has zero size", path),
        }
    }
}

impl std::error::Error for AssetError {}

/// Pixel size of a loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSize {
    pub width: u32,
    pub height: u32,
}

impl TextureSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn of(texture: &Texture2D) -> Self {
        Self::new(texture.width() as u32, texture.height() as u32)
    }
}

/// Frame and layer dimensions derived from the texture sizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    /// Size of one obstacle cell
    pub obstacle_frame: Vec2,
    /// Size of one player frame
    pub player_frame: Vec2,
    /// Unscaled widths of the far, back and fore layers
    pub layer_widths: [f32; 3],
}

impl SheetGeometry {
    /// Slice the sheets into frames. Every texture must be non-empty.
    pub fn from_sizes(
        obstacle: TextureSize,
        player: TextureSize,
        layers: [TextureSize; 3],
    ) -> Result<Self, AssetError> {
        let named = [
            (OBSTACLE_SHEET, obstacle),
            (PLAYER_SHEET, player),
            (LayerKind::Far.texture_path(), layers[0]),
            (LayerKind::Back.texture_path(), layers[1]),
            (LayerKind::Fore.texture_path(), layers[2]),
        ];
        for (path, size) in named {
            if size.width == 0 || size.height == 0 {
                return Err(AssetError::EmptyTexture { path: path.to_string() });
            }
        }

        // Sheets smaller than their grid would yield zero-sized frames
        let obstacle_frame = Vec2::new(
            (obstacle.width / OBSTACLE_SHEET_COLUMNS) as f32,
            (obstacle.height / OBSTACLE_SHEET_ROWS) as f32,
        );
        if obstacle_frame.x == 0.0 || obstacle_frame.y == 0.0 {
            return Err(AssetError::EmptyTexture { path: OBSTACLE_SHEET.to_string() });
        }
        let player_frame = Vec2::new((player.width / PLAYER_SHEET_COLUMNS) as f32, player.height as f32);
        if player_frame.x == 0.0 {
            return Err(AssetError::EmptyTexture { path: PLAYER_SHEET.to_string() });
        }

        Ok(Self {
            obstacle_frame,
            player_frame,
            layer_widths: [layers[0].width as f32, layers[1].width as f32, layers[2].width as f32],
        })
    }
}

/// GPU textures used by the renderer
pub struct GameTextures {
    pub obstacle: Texture2D,
    pub player: Texture2D,
    /// Far, back and fore layers
    pub layers: [Texture2D; 3],
}

impl GameTextures {
    /// Load every texture, failing on the first one that cannot be read
    pub async fn load() -> Result<Self, AssetError> {
        let obstacle = load_pixel_texture(OBSTACLE_SHEET).await?;
        let player = load_pixel_texture(PLAYER_SHEET).await?;
        let far = load_pixel_texture(LayerKind::Far.texture_path()).await?;
        let back = load_pixel_texture(LayerKind::Back.texture_path()).await?;
        let fore = load_pixel_texture(LayerKind::Fore.texture_path()).await?;

        Ok(Self { obstacle, player, layers: [far, back, fore] })
    }

    /// Background texture for a layer
    pub fn layer(&self, kind: LayerKind) -> &Texture2D {
        match kind {
            LayerKind::Far => &self.layers[0],
            LayerKind::Back => &self.layers[1],
            LayerKind::Fore => &self.layers[2],
        }
    }

    /// Measure the loaded textures
    pub fn geometry(&self) -> Result<SheetGeometry, AssetError> {
        SheetGeometry::from_sizes(
            TextureSize::of(&self.obstacle),
            TextureSize::of(&self.player),
            [
                TextureSize::of(&self.layers[0]),
                TextureSize::of(&self.layers[1]),
                TextureSize::of(&self.layers[2]),
            ],
        )
    }
}

async fn load_pixel_texture(path: &str) -> Result<Texture2D, AssetError> {
    let texture = load_texture(path).await.map_err(|e| AssetError::Load {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    texture.set_filter(FilterMode::Nearest);
    log::debug!("Loaded {} ({}x{})", path, texture.width(), texture.height());
    Ok(texture)
}
