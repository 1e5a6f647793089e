use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cubefield_common::BenchConfig;
use cubefield_driver::{BenchSession, drive};
use cubefield_render::{CameraRig, DebugTextRenderer, LogOverlay, NullRenderer, Renderer};
use cubefield_scene::SceneGroup;

#[derive(Parser)]
#[command(name = "cubefield-cli", about = "Headless cubefield benchmark operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate info
    Info,
    /// Populate a cube field and print a frame summary
    Populate {
        /// Number of cubes to scatter
        #[arg(long, default_value = "16")]
        cubes: usize,
    },
    /// Run the frame loop without a window and report the achieved rate
    Run {
        /// Number of frames to drive
        #[arg(long, default_value = "1000")]
        frames: u64,
        /// Number of cubes in the field
        #[arg(long)]
        cubes: Option<usize>,
        /// JSON benchmark configuration file (missing fields use defaults)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>, cubes: Option<usize>) -> Result<BenchConfig> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config file {}", path.display()))?
        }
        None => BenchConfig::default(),
    };
    if let Some(cubes) = cubes {
        config.cube_count = cubes;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("cubefield-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("scene: {}", cubefield_scene::crate_info());
            println!("input: {}", cubefield_input::crate_info());
            println!("render: {}", cubefield_render::crate_info());
            println!("driver: {}", cubefield_driver::crate_info());
        }
        Commands::Populate { cubes } => {
            // Exercises the populator directly; zero cubes is a valid field.
            let defaults = BenchConfig::default();
            let group =
                SceneGroup::populate(cubes, defaults.cube_size, defaults.spread_half_width);
            let camera = CameraRig::new(
                defaults.camera_distance,
                defaults.fov_degrees,
                defaults.near,
                defaults.far,
            );
            let output = DebugTextRenderer::new().render(&group, &camera);
            print!("{output}");
        }
        Commands::Run {
            frames,
            cubes,
            config,
        } => {
            let config = load_config(config.as_ref(), cubes)?;
            let mut session =
                BenchSession::new(config).context("invalid benchmark configuration")?;
            let mut renderer = NullRenderer::new();
            let mut overlay = LogOverlay;

            println!(
                "Driving {frames} frames over {} cubes (no window)",
                session.group().cube_count()
            );

            let started = Instant::now();
            drive(
                &mut session,
                &mut renderer,
                &mut overlay,
                || started.elapsed().as_secs_f64() * 1000.0,
                |s| s.frame_count() < frames,
            );
            let elapsed = started.elapsed();

            let avg_fps = renderer.frames_rendered() as f64 / elapsed.as_secs_f64();
            println!(
                "Rendered {} frames in {elapsed:?} ({avg_fps:.0} fps average)",
                renderer.frames_rendered()
            );
        }
    }

    Ok(())
}
