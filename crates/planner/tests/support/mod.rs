//! In-memory host double that records every call.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use stillreel_host_core::{
    ClipHandle, EditingService, FolderChoice, FolderPicker, HostError, HostResult, MediaLibrary,
    MediaType, MotionTransform, TrackId, TrackInfo, TransitionStyle,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Insert {
        track: TrackId,
        path: PathBuf,
        start_secs: f64,
        duration_secs: f64,
    },
    Transform {
        clip: ClipHandle,
        transform: MotionTransform,
    },
    Transition {
        clip: ClipHandle,
        style: TransitionStyle,
    },
}

#[derive(Debug, Default)]
pub struct RecordingService {
    pub tracks: Vec<TrackInfo>,
    pub cursor_secs: f64,
    pub calls: Vec<Call>,
    /// Transitions the host knows; `None` accepts every name.
    pub registered: Option<Vec<String>>,
    /// Paths the host refuses to open.
    pub unreadable: Vec<PathBuf>,
    next_clip: u64,
}

impl RecordingService {
    pub fn with_selected_video() -> Self {
        Self {
            tracks: vec![
                track(1, true, MediaType::Audio),
                track(2, false, MediaType::Video),
                track(3, true, MediaType::Video),
            ],
            ..Self::default()
        }
    }

    pub fn without_selection() -> Self {
        Self {
            tracks: vec![
                track(1, true, MediaType::Audio),
                track(2, false, MediaType::Video),
            ],
            ..Self::default()
        }
    }

    pub fn inserts(&self) -> Vec<(TrackId, PathBuf, f64, f64)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Insert {
                    track,
                    path,
                    start_secs,
                    duration_secs,
                } => Some((*track, path.clone(), *start_secs, *duration_secs)),
                _ => None,
            })
            .collect()
    }
}

pub fn track(id: u32, selected: bool, media_type: MediaType) -> TrackInfo {
    TrackInfo {
        id: TrackId(id),
        name: format!("Track {id}"),
        selected,
        media_type,
    }
}

impl EditingService for RecordingService {
    fn list_tracks(&self) -> HostResult<Vec<TrackInfo>> {
        Ok(self.tracks.clone())
    }

    fn cursor_position_secs(&self) -> HostResult<f64> {
        Ok(self.cursor_secs)
    }

    fn insert_clip(
        &mut self,
        track: TrackId,
        file: &Path,
        start_secs: f64,
        duration_secs: f64,
    ) -> HostResult<ClipHandle> {
        if self.unreadable.iter().any(|p| p == file) {
            return Err(HostError::MediaUnreadable {
                path: file.to_path_buf(),
                reason: "cannot decode".to_string(),
            });
        }
        self.calls.push(Call::Insert {
            track,
            path: file.to_path_buf(),
            start_secs,
            duration_secs,
        });
        self.next_clip += 1;
        Ok(ClipHandle(self.next_clip))
    }

    fn set_initial_transform(
        &mut self,
        clip: ClipHandle,
        transform: &MotionTransform,
    ) -> HostResult<()> {
        self.calls.push(Call::Transform {
            clip,
            transform: *transform,
        });
        Ok(())
    }

    fn attach_transition(&mut self, clip: ClipHandle, style: &TransitionStyle) -> HostResult<()> {
        if let Some(registered) = &self.registered {
            if !registered.contains(&style.name) {
                return Err(HostError::UnknownTransition {
                    name: style.name.clone(),
                });
            }
        }
        self.calls.push(Call::Transition {
            clip,
            style: style.clone(),
        });
        Ok(())
    }
}

/// Folder listing backed by a map.
#[derive(Debug, Default)]
pub struct StaticLibrary {
    pub folders: HashMap<PathBuf, Vec<PathBuf>>,
}

impl StaticLibrary {
    pub fn with_folder(dir: &str, files: &[&str]) -> Self {
        let mut folders = HashMap::new();
        folders.insert(
            PathBuf::from(dir),
            files.iter().map(|f| Path::new(dir).join(f)).collect(),
        );
        Self { folders }
    }
}

impl MediaLibrary for StaticLibrary {
    fn list_files(&self, dir: &Path) -> HostResult<Vec<PathBuf>> {
        self.folders
            .get(dir)
            .cloned()
            .ok_or_else(|| HostError::FolderUnavailable {
                path: dir.to_path_buf(),
            })
    }
}

/// Picker that returns a scripted answer and records the default it was shown.
#[derive(Debug)]
pub struct ScriptedPicker {
    pub answer: FolderChoice,
    pub asked_with: Vec<PathBuf>,
}

impl ScriptedPicker {
    pub fn answering(answer: FolderChoice) -> Self {
        Self {
            answer,
            asked_with: vec![],
        }
    }
}

impl FolderPicker for ScriptedPicker {
    fn choose_folder(&mut self, default: &Path) -> HostResult<FolderChoice> {
        self.asked_with.push(default.to_path_buf());
        Ok(self.answer.clone())
    }
}
