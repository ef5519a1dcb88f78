//! Editing service backed by a project document.

use std::fs::File;
use std::path::Path;

use stillreel_host_core::{
    ClipHandle, EditingService, HostError, HostResult, MediaType, MotionTransform, TrackId,
    TrackInfo, TransitionStyle,
};
use stillreel_project_model::{Project, VideoEvent};

/// Applies editing commands to an in-memory [`Project`].
///
/// Clip handles are project event ids. Media paths are stored in
/// canonical form so the document does not depend on the working
/// directory of the run.
pub struct ProjectHost<'a> {
    project: &'a mut Project,
}

impl<'a> ProjectHost<'a> {
    pub fn new(project: &'a mut Project) -> Self {
        Self { project }
    }

    fn event_mut(&mut self, clip: ClipHandle) -> HostResult<&mut VideoEvent> {
        self.project
            .tracks
            .iter_mut()
            .find_map(|t| t.event_mut(clip.0))
            .ok_or(HostError::ClipNotFound(clip))
    }
}

impl EditingService for ProjectHost<'_> {
    fn list_tracks(&self) -> HostResult<Vec<TrackInfo>> {
        Ok(self
            .project
            .tracks
            .iter()
            .map(|t| TrackInfo {
                id: t.id,
                name: t.name.clone(),
                selected: t.selected,
                media_type: t.media_type,
            })
            .collect())
    }

    fn cursor_position_secs(&self) -> HostResult<f64> {
        Ok(self.project.cursor_secs)
    }

    fn insert_clip(
        &mut self,
        track: TrackId,
        file: &Path,
        start_secs: f64,
        duration_secs: f64,
    ) -> HostResult<ClipHandle> {
        let media_type = self
            .project
            .track(track)
            .map(|t| t.media_type)
            .ok_or(HostError::TrackNotFound(track))?;
        if media_type != MediaType::Video {
            return Err(HostError::NotAVideoTrack(track));
        }

        let media_path = open_media(file)?;
        let id = self.project.next_event_id();
        let target = self
            .project
            .track_mut(track)
            .ok_or(HostError::TrackNotFound(track))?;
        target.events.push(VideoEvent {
            id,
            media_path,
            start_secs,
            length_secs: duration_secs,
            maintain_aspect_ratio: false,
            keyframes: vec![],
            fade_in: None,
        });
        self.project.touch();

        tracing::trace!(%track, event = id, start_secs, "Inserted event");
        Ok(ClipHandle(id))
    }

    fn set_initial_transform(
        &mut self,
        clip: ClipHandle,
        transform: &MotionTransform,
    ) -> HostResult<()> {
        self.event_mut(clip)?.apply_initial_transform(*transform);
        Ok(())
    }

    fn attach_transition(&mut self, clip: ClipHandle, style: &TransitionStyle) -> HostResult<()> {
        if !self.project.is_transition_registered(&style.name) {
            return Err(HostError::UnknownTransition {
                name: style.name.clone(),
            });
        }
        self.event_mut(clip)?.fade_in = Some(style.clone());
        Ok(())
    }
}

/// Check that `file` is a readable regular file and return its canonical path.
fn open_media(file: &Path) -> HostResult<String> {
    let unreadable = |reason: String| HostError::MediaUnreadable {
        path: file.to_path_buf(),
        reason,
    };

    let handle = File::open(file).map_err(|e| unreadable(e.to_string()))?;
    let metadata = handle.metadata().map_err(|e| unreadable(e.to_string()))?;
    if !metadata.is_file() {
        return Err(unreadable("not a regular file".to_string()));
    }
    let canonical = std::fs::canonicalize(file).map_err(|e| unreadable(e.to_string()))?;
    // The project document stores paths as JSON strings.
    canonical
        .into_os_string()
        .into_string()
        .map_err(|_| unreadable("path is not valid UTF-8".to_string()))
}
