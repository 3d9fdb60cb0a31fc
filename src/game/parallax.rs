//! Parallax background
//!
//! Each layer is an image drawn twice side by side and scrolled left at its
//! own speed. When the first tile has fully left the screen the offset snaps
//! back to 0, which is seamless because the second tile is then exactly where
//! the first one started.

/// Which background layer (back to front)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Far,
    Back,
    Fore,
}

impl LayerKind {
    pub const ALL: [LayerKind; 3] = [LayerKind::Far, LayerKind::Back, LayerKind::Fore];

    /// Texture path relative to the working directory
    pub fn texture_path(&self) -> &'static str {
        match self {
            LayerKind::Far => "textures/far-buildings.png",
            LayerKind::Back => "textures/back-buildings.png",
            LayerKind::Fore => "textures/foreground.png",
        }
    }
}

/// One horizontally scrolling background layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    pub kind: LayerKind,
    /// Unscaled texture width in pixels
    pub width: f32,
    /// Scroll speed (pixels per second, leftwards)
    pub speed: f32,
    /// Draw scale
    pub scale: f32,
    /// Current horizontal offset (always in (-width * scale, 0])
    pub offset: f32,
}

impl ParallaxLayer {
    pub fn new(kind: LayerKind, width: f32, speed: f32, scale: f32) -> Self {
        Self { kind, width, speed, scale, offset: 0.0 }
    }

    /// Width of one drawn tile
    pub fn tile_width(&self) -> f32 {
        self.width * self.scale
    }

    /// Scroll left by `speed * dt`, wrapping once a whole tile has passed
    pub fn scroll(&mut self, dt: f32) {
        self.offset -= self.speed * dt;
        if self.offset <= -self.tile_width() {
            self.offset = 0.0;
        }
    }

    /// X positions of the two tiles drawn this frame
    pub fn tile_positions(&self) -> [f32; 2] {
        [self.offset, self.offset + self.tile_width()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_moves_left() {
        let mut layer = ParallaxLayer::new(LayerKind::Far, 256.0, 20.0, 2.0);
        layer.scroll(0.5);
        assert_eq!(layer.offset, -10.0);
    }

    #[test]
    fn test_wraps_exactly_at_twice_width() {
        let mut layer = ParallaxLayer::new(LayerKind::Back, 256.0, 40.0, 2.0);
        layer.offset = -472.0;
        // Lands exactly on -512
        layer.scroll(1.0);
        assert_eq!(layer.offset, 0.0);
    }

    #[test]
    fn test_wraps_when_overshooting() {
        let mut layer = ParallaxLayer::new(LayerKind::Fore, 352.0, 80.0, 2.0);
        layer.offset = -700.0;
        layer.scroll(0.1);
        assert_eq!(layer.offset, 0.0);
    }

    #[test]
    fn test_offset_never_below_bound() {
        for kind in LayerKind::ALL {
            let mut layer = ParallaxLayer::new(kind, 100.0, 80.0, 2.0);
            for _ in 0..10_000 {
                layer.scroll(1.0 / 60.0);
                assert!(layer.offset > -200.0);
                assert!(layer.offset <= 0.0);
            }
        }
    }

    #[test]
    fn test_tile_positions_are_adjacent() {
        let mut layer = ParallaxLayer::new(LayerKind::Far, 256.0, 20.0, 2.0);
        layer.offset = -30.0;
        assert_eq!(layer.tile_positions(), [-30.0, 482.0]);
    }
}
