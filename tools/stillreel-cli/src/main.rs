//! stillreel CLI: lay a folder of stills out on a video track.
//!
//! Usage:
//!   stillreel init <PROJECT>            Create a project document
//!   stillreel plan [DIR]                Print the placements for a folder
//!   stillreel populate <PROJECT> [DIR]  Insert stills into a project
//!   stillreel info <PROJECT>            Show project information
//!   stillreel validate <PROJECT>        Check media and transitions
//!   stillreel config                    Show or write the configuration

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use stillreel_common::config::{
    AppConfig, MotionMode, OverlapPolicy, PlacementConfig, StartPosition,
};
use stillreel_common::error::StillreelError;

mod commands;

#[derive(Parser)]
#[command(
    name = "stillreel",
    about = "Populate a video track with a folder of stills, with pan/zoom motion and transitions",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to the standard location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project document
    Init {
        /// Project file to create
        path: PathBuf,

        /// Project name (defaults to the file stem)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Print the placements for a folder without touching a project
    Plan {
        /// Stills folder (defaults to the configured folder)
        dir: Option<PathBuf>,

        /// Start of the first clip (seconds)
        #[arg(long, default_value = "0")]
        start: f64,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        placement: PlacementArgs,
    },

    /// Insert stills into a project's selected video track
    Populate {
        /// Project file
        project: PathBuf,

        /// Stills folder (defaults to the configured folder)
        dir: Option<PathBuf>,

        /// Ask for the stills folder before populating
        #[arg(long)]
        pick_folder: bool,

        /// Select this track id before populating
        #[arg(long)]
        track: Option<u32>,

        /// Run everything but do not save the project
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        placement: PlacementArgs,
    },

    /// Show project information
    Info {
        /// Project file
        project: PathBuf,
    },

    /// Check that event media exist and transitions are registered
    Validate {
        /// Project file
        project: PathBuf,
    },

    /// Print the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        write: bool,
    },
}

/// Overrides for the placement configuration.
#[derive(Args, Debug, Default)]
struct PlacementArgs {
    /// Built-in preset: slideshow | title-flicker
    #[arg(long)]
    preset: Option<String>,

    /// Still length (seconds)
    #[arg(long)]
    duration: Option<f64>,

    /// Overlap with the previous still (seconds)
    #[arg(long)]
    overlap: Option<f64>,

    /// Initial scale in (0, 1]
    #[arg(long)]
    scale: Option<f64>,

    /// Initial rotation (radians)
    #[arg(long, allow_hyphen_values = true)]
    rotation: Option<f64>,

    /// Motion: fixed | randomized
    #[arg(long)]
    motion: Option<String>,

    /// Transition name (repeatable); replaces the configured list
    #[arg(long = "transition")]
    transitions: Vec<String>,

    /// Seed for randomized motion
    #[arg(long)]
    seed: Option<u64>,

    /// Start at the timeline origin instead of the cursor
    #[arg(long)]
    from_zero: bool,

    /// Place clips end to end when overlap is not shorter than the still
    #[arg(long)]
    butt_join: bool,
}

impl PlacementArgs {
    fn apply(&self, placement: &mut PlacementConfig) -> Result<(), StillreelError> {
        if let Some(name) = &self.preset {
            *placement = PlacementConfig::preset(name)
                .ok_or_else(|| StillreelError::config(format!("unknown preset: {name}")))?;
        }
        if let Some(duration) = self.duration {
            placement.still_duration_secs = duration;
        }
        if let Some(overlap) = self.overlap {
            placement.overlap_secs = overlap;
        }
        if let Some(scale) = self.scale {
            placement.initial_scale = scale;
        }
        if let Some(rotation) = self.rotation {
            placement.initial_rotation_rad = rotation;
        }
        if let Some(motion) = &self.motion {
            placement.motion = match motion.as_str() {
                "fixed" => MotionMode::Fixed,
                "randomized" | "random" => MotionMode::Randomized,
                other => {
                    return Err(StillreelError::config(format!("unknown motion mode: {other}")))
                }
            };
        }
        if !self.transitions.is_empty() {
            placement.transitions = self
                .transitions
                .iter()
                .map(|name| stillreel_host_core::TransitionStyle::new(name.as_str()))
                .collect();
        }
        if self.seed.is_some() {
            placement.seed = self.seed;
        }
        if self.from_zero {
            placement.start = StartPosition::Zero;
        }
        if self.butt_join {
            placement.overlap_policy = OverlapPolicy::ButtJoin;
        }
        Ok(())
    }
}

fn load_config(path: Option<&PathBuf>, allow_missing: bool) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) if allow_missing && !path.exists() => Ok(AppConfig::default()),
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(AppConfig::load()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let writing_config = matches!(cli.command, Commands::Config { write: true });
    let mut config = load_config(cli.config.as_ref(), writing_config)?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    stillreel_common::logging::init_logging(&config.logging);
    tracing::debug!(?config, "Effective configuration");

    match cli.command {
        Commands::Init { path, name } => commands::init::run(path, name),
        Commands::Plan {
            dir,
            start,
            json,
            placement,
        } => {
            placement.apply(&mut config.placement)?;
            commands::plan::run(&config, dir, start, json)
        }
        Commands::Populate {
            project,
            dir,
            pick_folder,
            track,
            dry_run,
            placement,
        } => {
            placement.apply(&mut config.placement)?;
            if let Some(dir) = dir {
                config.source.stills_dir = dir;
            }
            if pick_folder {
                config.source.pick_folder = true;
            }
            commands::populate::run(&config, project, track, dry_run)
        }
        Commands::Info { project } => commands::info::run(project),
        Commands::Validate { project } => commands::validate::run(project),
        Commands::Config { write } => commands::config::run(&config, cli.config, write),
    }
}
