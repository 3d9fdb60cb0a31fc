//! Build automation tasks for Dasher
//!
//! Usage:
//!   cargo xtask check-assets                # Verify the textures the game loads exist
//!   cargo xtask package [--platform linux]  # Release build + textures into dist/

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Textures loaded by the game at startup, relative to the working directory
const TEXTURES: [&str; 5] = [
    "textures/12_nebula_spritesheet.png",
    "textures/scarfy.png",
    "textures/far-buildings.png",
    "textures/back-buildings.png",
    "textures/foreground.png",
];

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for Dasher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that every texture the game needs is present
    CheckAssets,
    /// Build a native release and bundle it with its textures
    Package {
        /// Target platform: windows, macos, linux
        #[arg(long)]
        platform: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckAssets => check_assets(&project_root()),
        Commands::Package { platform } => package(platform),
    }
}

/// Get the project root directory
fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.parent().unwrap_or(manifest_dir).to_path_buf()
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Textures missing under `root`
fn missing_textures(root: &Path) -> Vec<&'static str> {
    TEXTURES
        .iter()
        .copied()
        .filter(|path| !root.join(path).is_file())
        .collect()
}

fn check_assets(root: &Path) -> Result<()> {
    let missing = missing_textures(root);
    if !missing.is_empty() {
        anyhow::bail!("Missing textures: {}", missing.join(", "));
    }
    println!("All {} textures present", TEXTURES.len());
    Ok(())
}

/// Build a native release into dist/<platform>/
fn package(platform: Option<String>) -> Result<()> {
    let root = project_root();
    check_assets(&root)?;

    let platform = platform.unwrap_or_else(|| {
        if cfg!(target_os = "windows") {
            "windows".to_string()
        } else if cfg!(target_os = "macos") {
            "macos".to_string()
        } else {
            "linux".to_string()
        }
    });

    let dist = root.join(format!("dist/{}", platform));

    println!("Building native release for {}...", platform);

    // Clean and create dist folder
    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(dist.join("textures"))?;

    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--package", "dasher"]),
    )?;

    let binary_name = if platform == "windows" { "dasher.exe" } else { "dasher" };
    std::fs::copy(
        root.join(format!("target/release/{}", binary_name)),
        dist.join(binary_name),
    )
    .with_context(|| format!("Failed to copy {}", binary_name))?;

    for texture in TEXTURES {
        std::fs::copy(root.join(texture), dist.join(texture))
            .with_context(|| format!("Failed to copy {}", texture))?;
    }

    // Ship a tuning override only if the developer has one
    let tuning = root.join("dasher.ron");
    if tuning.is_file() {
        std::fs::copy(&tuning, dist.join("dasher.ron"))?;
    }

    println!("Package complete: dist/{}/", platform);
    Ok(())
}
