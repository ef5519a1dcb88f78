//! Application configuration.
//!
//! Every knob that controls a populate run lives here so it can be loaded
//! from `config.json`, overridden from the command line, or built in code.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{StillreelError, StillreelResult};

/// Global application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Where stills come from.
    pub source: SourceConfig,

    /// Clip timing, motion, and transition settings.
    pub placement: PlacementConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Still source folder settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Folder to read stills from (also the picker's default).
    pub stills_dir: PathBuf,

    /// Ask the user to choose the folder before populating.
    pub pick_folder: bool,

    /// Sort listed files by name. Directory order is OS-defined otherwise.
    pub sort_files: bool,

    /// Accepted file extensions, case-insensitive. Empty accepts every file.
    pub extensions: Vec<String>,
}

/// How clips are timed, moved, and joined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Length of each still clip in seconds.
    pub still_duration_secs: f64,

    /// How much each clip overlaps the previous one, in seconds.
    pub overlap_secs: f64,

    /// Scale of the first keyframe. Clips return to unity scale at their end.
    pub initial_scale: f64,

    /// Rotation of the first keyframe in radians (signed).
    pub initial_rotation_rad: f64,

    /// Fixed or randomized motion.
    pub motion: MotionMode,

    /// Candidate transitions. Fixed motion always uses the first one.
    pub transitions: Vec<TransitionStyle>,

    /// Where the first clip starts.
    pub start: StartPosition,

    /// What to do when overlap is not shorter than the clip.
    pub overlap_policy: OverlapPolicy,

    /// Translation bounds for randomized motion.
    pub jitter: JitterBounds,

    /// RNG seed for randomized motion. `None` seeds from entropy.
    pub seed: Option<u64>,
}

/// Per-clip motion policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MotionMode {
    /// Same scale, rotation, and transition for every clip.
    Fixed,
    /// Random rotation sign/amount, random translation, random transition.
    #[default]
    Randomized,
}

/// Starting point of the first clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StartPosition {
    /// Timeline origin.
    Zero,
    /// The host's transport cursor.
    #[default]
    Cursor,
}

/// Handling of overlap >= still duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Refuse the configuration.
    #[default]
    Reject,
    /// Ignore the overlap and place clips end to end.
    ButtJoin,
}

/// Half-open translation bounds: x in `[-x, x)`, y in `[-y, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JitterBounds {
    pub x: i32,
    pub y: i32,
}

impl Default for JitterBounds {
    fn default() -> Self {
        Self { x: 15, y: 20 }
    }
}

/// A host transition effect, optionally with a named preset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionStyle {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
}

impl TransitionStyle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preset: None,
        }
    }

    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }
}

/// Transitions used by the slideshow preset.
pub const SLIDESHOW_TRANSITIONS: [&str; 6] = [
    "VEGAS Linear Wipe",
    "VEGAS Page Peel",
    "VEGAS Iris",
    "VEGAS Portals",
    "VEGAS Push",
    "VEGAS Star Wipe",
];

impl PlacementConfig {
    /// Fast flicker of stills for a title intro: short fixed clips, one
    /// soft top-down wipe, starting at the timeline origin.
    pub fn title_flicker() -> Self {
        Self {
            still_duration_secs: 0.166667,
            overlap_secs: 0.0666667,
            initial_scale: 0.85,
            initial_rotation_rad: -0.0523599,
            motion: MotionMode::Fixed,
            transitions: vec![
                TransitionStyle::new("VEGAS Linear Wipe").with_preset("Top-Down, Soft Edge")
            ],
            start: StartPosition::Zero,
            overlap_policy: OverlapPolicy::Reject,
            jitter: JitterBounds::default(),
            seed: None,
        }
    }

    /// Moderately paced pan/zoom slideshow with a little randomness,
    /// starting at the host cursor.
    pub fn slideshow() -> Self {
        Self {
            still_duration_secs: 4.0,
            overlap_secs: 0.25,
            initial_scale: 0.85,
            initial_rotation_rad: 0.0523599,
            motion: MotionMode::Randomized,
            transitions: SLIDESHOW_TRANSITIONS
                .iter()
                .map(|name| TransitionStyle::new(*name))
                .collect(),
            start: StartPosition::Cursor,
            overlap_policy: OverlapPolicy::Reject,
            jitter: JitterBounds::default(),
            seed: None,
        }
    }

    /// Look up a built-in preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "title-flicker" | "title_flicker" => Some(Self::title_flicker()),
            "slideshow" => Some(Self::slideshow()),
            _ => None,
        }
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self::slideshow()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "stillreel=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            stills_dir: default_stills_dir(),
            pick_folder: false,
            sort_files: true,
            extensions: ["jpg", "jpeg", "png", "bmp", "gif", "tif", "tiff"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = %config_path.display(), error = %e, "Failed to load config, using defaults");
                }
            }
        }
        Self::default()
    }

    /// Load config from an explicit path. Missing or malformed files are errors.
    pub fn load_from(path: impl AsRef<Path>) -> StillreelResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StillreelError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> StillreelResult<PathBuf> {
        let config_path = config_file_path();
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save config as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> StillreelResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"));
    base.join("stillreel").join("config.json")
}

/// Default stills folder.
fn default_stills_dir() -> PathBuf {
    home_dir().join("Pictures")
}

fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}
