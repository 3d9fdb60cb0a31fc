//! Dasher: a tiny side-scrolling runner
//!
//! The player runs in place while nebulae scroll in from the right. Jump over
//! all six to reach the finish line; touch one and it's game over.
//! Space jumps, Escape or the close button quits.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod config;
mod game;
mod input;

use macroquad::prelude::*;
use assets::{AssetError, GameTextures};
use config::{ConfigError, Tuning, TUNING_FILE, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use game::{draw_game, FramePacer, GameState};
use input::InputState;

/// Anything that stops the game before the first frame
#[derive(Debug)]
enum StartupError {
    Config(ConfigError),
    Asset(AssetError),
}

impl From<ConfigError> for StartupError {
    fn from(e: ConfigError) -> Self {
        StartupError::Config(e)
    }
}

impl From<AssetError> for StartupError {
    fn from(e: AssetError) -> Self {
        StartupError::Asset(e)
    }
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartupError::Config(e) => write!(f, "bad {}: {}", TUNING_FILE, e),
            StartupError::Asset(e) => write!(f, "missing asset: {}", e),
        }
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("=== Dasher v{} ===", VERSION);

    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }

    log::info!("Window closed, exiting");
}

async fn run() -> Result<(), StartupError> {
    let tuning = Tuning::load_or_default(TUNING_FILE)?;

    let textures = GameTextures::load().await?;
    let geometry = textures.geometry()?;
    tuning.check_geometry(&geometry)?;

    let screen = vec2(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);
    let mut clock = game::clock_for(tuning.fixed_dt);
    let mut pacer = FramePacer::new(tuning.frame_time());
    let mut state = GameState::new(tuning, geometry, screen);
    let input = InputState::new();

    if let Some(dt) = state.tuning.fixed_dt {
        log::info!("Using fixed time step of {}s", dt);
    }

    // Close requests are handled by the loop so textures are released first
    prevent_quit();

    loop {
        pacer.begin();

        if input.quit_requested() {
            break;
        }

        let dt = clock.delta();
        state.tick(dt, input.frame_input());
        draw_game(&state, &textures);

        pacer.wait();
        next_frame().await;
    }

    drop(textures);
    log::debug!("Textures released");
    Ok(())
}
