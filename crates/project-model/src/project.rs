//! Project metadata and on-disk document.
//!
//! A project is a single JSON file holding the tracks, their events, the
//! transport cursor, and the names of the transitions the editor offers.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stillreel_common::config::SLIDESHOW_TRANSITIONS;
use stillreel_host_core::{MediaType, TrackId};

use crate::track::Track;

/// Top-level project document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Schema version.
    pub version: String,

    /// Human-readable project name.
    pub name: String,

    /// Unique project identifier (UUID).
    pub id: String,

    /// Creation timestamp (ISO 8601).
    pub created_at: String,

    /// Last modified timestamp (ISO 8601).
    pub modified_at: String,

    /// Transport cursor (seconds).
    #[serde(default)]
    pub cursor_secs: f64,

    /// Tracks in display order.
    pub tracks: Vec<Track>,

    /// Transition names available to events.
    #[serde(default)]
    pub transitions: Vec<String>,
}

/// A project together with the file it lives in.
#[derive(Debug, Clone)]
pub struct LoadedProject {
    /// Path of the project JSON file.
    pub path: PathBuf,

    pub project: Project,
}

impl Project {
    /// Create a new project with one selected video track, one audio
    /// track, and the default transition library.
    pub fn new(name: impl Into<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            version: "1.0".to_string(),
            name: name.into(),
            id: uuid_v4(),
            created_at: now.clone(),
            modified_at: now,
            cursor_secs: 0.0,
            tracks: vec![
                Track::video(1, "Video 1").selected(true),
                Track::audio(2, "Audio 1"),
            ],
            transitions: SLIDESHOW_TRANSITIONS
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn track_mut(&mut self, id: TrackId) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.id == id)
    }

    /// Next free event id across all tracks.
    pub fn next_event_id(&self) -> u64 {
        self.tracks
            .iter()
            .flat_map(|t| t.events.iter().map(|e| e.id))
            .max()
            .map_or(1, |id| id + 1)
    }

    pub fn event_count(&self) -> usize {
        self.tracks.iter().map(|t| t.events.len()).sum()
    }

    pub fn is_transition_registered(&self, name: &str) -> bool {
        self.transitions.iter().any(|t| t == name)
    }

    /// Mark one track as the only selected track.
    pub fn select_only(&mut self, id: TrackId) -> Result<(), ProjectError> {
        if self.track(id).is_none() {
            return Err(ProjectError::ValidationError {
                message: format!("no track with id {}", id.0),
            });
        }
        for track in &mut self.tracks {
            track.selected = track.id == id;
        }
        Ok(())
    }

    /// Update the modification timestamp.
    pub fn touch(&mut self) {
        self.modified_at = chrono::Utc::now().to_rfc3339();
    }
}

impl LoadedProject {
    /// Load a project file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProjectError> {
        let path = path.as_ref().to_path_buf();

        let json = std::fs::read_to_string(&path).map_err(|e| ProjectError::IoError {
            path: path.clone(),
            source: e,
        })?;

        let project: Project =
            serde_json::from_str(&json).map_err(|e| ProjectError::ParseError {
                path: path.clone(),
                source: e,
            })?;

        Ok(Self { path, project })
    }

    /// Write the project back to its file.
    pub fn save(&self) -> Result<(), ProjectError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ProjectError::IoError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json =
            serde_json::to_string_pretty(&self.project).map_err(|e| ProjectError::ParseError {
                path: self.path.clone(),
                source: e,
            })?;
        std::fs::write(&self.path, json).map_err(|e| ProjectError::IoError {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(())
    }

    /// Create a new project file. Refuses to overwrite an existing file.
    pub fn create(path: impl AsRef<Path>, name: impl Into<String>) -> Result<Self, ProjectError> {
        let path = path.as_ref().to_path_buf();
        if path.exists() {
            return Err(ProjectError::ValidationError {
                message: format!("{} already exists", path.display()),
            });
        }

        let loaded = Self {
            path,
            project: Project::new(name),
        };
        loaded.save()?;
        Ok(loaded)
    }

    /// Resolve an event media path against the project file's folder.
    pub fn resolve_media(&self, media_path: &str) -> PathBuf {
        let media = Path::new(media_path);
        if media.is_absolute() {
            return media.to_path_buf();
        }
        self.path
            .parent()
            .map(|dir| dir.join(media))
            .unwrap_or_else(|| media.to_path_buf())
    }

    /// Check that referenced media exist and transitions are registered.
    pub fn validate_sources(&self) -> Vec<String> {
        let mut errors = vec![];

        for track in &self.project.tracks {
            if track.media_type == MediaType::Audio && !track.events.is_empty() {
                errors.push(format!("{} holds video events on an audio track", track.name));
            }
            for event in &track.events {
                if !self.resolve_media(&event.media_path).is_file() {
                    errors.push(format!(
                        "{} event {} media missing: {}",
                        track.name, event.id, event.media_path
                    ));
                }
                if let Some(style) = &event.fade_in {
                    if !self.project.is_transition_registered(&style.name) {
                        errors.push(format!(
                            "{} event {} uses unregistered transition: {}",
                            track.name, event.id, style.name
                        ));
                    }
                }
            }
        }

        errors
    }
}

/// Errors that can occur when working with projects.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid project: {message}")]
    ValidationError { message: String },
}

/// Generate a simple UUID v4 without external dependency.
fn uuid_v4() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!(
        "{:08x}-{:04x}-4{:03x}-{:04x}-{:012x}",
        (seed & 0xFFFFFFFF) as u32,
        ((seed >> 32) & 0xFFFF) as u16,
        ((seed >> 48) & 0x0FFF) as u16,
        (((seed >> 60) & 0x3F) | 0x80) as u16,
        (seed >> 76) & 0xFFFFFFFFFFFF,
    )
}
