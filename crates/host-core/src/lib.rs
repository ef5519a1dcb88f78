//! stillreel host contracts.
//!
//! The host editing application owns tracks, events, media decoding and
//! transition rendering. This crate describes the small slice of it that
//! stillreel calls into, so planners can run against a real host, a
//! project document, or a test double without knowing which.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use stillreel_common::config::TransitionStyle;

/// Kind of media a track carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Video,
    Audio,
}

/// Host-assigned track identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub u32);

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "track#{}", self.0)
    }
}

/// Handle to a clip the host created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipHandle(pub u64);

/// What the host reports about one track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackInfo {
    pub id: TrackId,
    pub name: String,
    pub selected: bool,
    pub media_type: MediaType,
}

/// Pan/zoom/rotate applied at a clip's first keyframe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionTransform {
    /// Uniform scale, 1.0 = unity.
    pub scale: f64,
    /// Rotation in radians.
    pub rotation_rad: f64,
    /// Horizontal offset in host motion units.
    pub translate_x: f64,
    /// Vertical offset in host motion units.
    pub translate_y: f64,
}

impl MotionTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation_rad: 0.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for MotionTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Result of asking the user for a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderChoice {
    Chosen(PathBuf),
    Cancelled,
}

/// Errors a host can report.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),

    #[error("{0} is not a video track")]
    NotAVideoTrack(TrackId),

    #[error("Clip not found: {0:?}")]
    ClipNotFound(ClipHandle),

    #[error("Cannot read media {path}: {reason}")]
    MediaUnreadable { path: PathBuf, reason: String },

    #[error("Transition is not registered with the host: {name}")]
    UnknownTransition { name: String },

    #[error("Folder unavailable: {path}")]
    FolderUnavailable { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias using HostError.
pub type HostResult<T> = Result<T, HostError>;

/// Track and clip editing operations of the host.
pub trait EditingService {
    /// All tracks in host order.
    fn list_tracks(&self) -> HostResult<Vec<TrackInfo>>;

    /// Current transport cursor in seconds.
    fn cursor_position_secs(&self) -> HostResult<f64>;

    /// Add a clip of `file` on `track`.
    fn insert_clip(
        &mut self,
        track: TrackId,
        file: &Path,
        start_secs: f64,
        duration_secs: f64,
    ) -> HostResult<ClipHandle>;

    /// Key `transform` at the clip start and identity at the clip end.
    fn set_initial_transform(
        &mut self,
        clip: ClipHandle,
        transform: &MotionTransform,
    ) -> HostResult<()>;

    /// Use `style` as the clip's fade-in transition.
    fn attach_transition(&mut self, clip: ClipHandle, style: &TransitionStyle) -> HostResult<()>;
}

/// Directory listing as the host sees it.
pub trait MediaLibrary {
    fn list_files(&self, dir: &Path) -> HostResult<Vec<PathBuf>>;
}

/// Interactive folder selection.
pub trait FolderPicker {
    fn choose_folder(&mut self, default: &Path) -> HostResult<FolderChoice>;
}

/// First track that is both selected and carries video.
pub fn find_selected_video_track(tracks: &[TrackInfo]) -> Option<TrackId> {
    tracks
        .iter()
        .find(|t| t.selected && t.media_type == MediaType::Video)
        .map(|t| t.id)
}
