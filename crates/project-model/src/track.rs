//! Tracks, video events, and motion keyframes.

use serde::{Deserialize, Serialize};
use stillreel_host_core::{MediaType, MotionTransform, TrackId, TransitionStyle};

/// One track of the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,

    /// Display name.
    pub name: String,

    pub media_type: MediaType,

    /// Whether the track is selected in the editor.
    #[serde(default)]
    pub selected: bool,

    /// Events in insertion order.
    #[serde(default)]
    pub events: Vec<VideoEvent>,
}

/// A clip on a video track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoEvent {
    /// Project-unique event id.
    pub id: u64,

    /// Media file path as given at insertion.
    pub media_path: String,

    /// Position on the timeline (seconds).
    pub start_secs: f64,

    /// Event length (seconds).
    pub length_secs: f64,

    /// Whether the host keeps the source aspect ratio when moving the frame.
    #[serde(default)]
    pub maintain_aspect_ratio: bool,

    /// Pan/crop keyframes, sorted by time.
    #[serde(default)]
    pub keyframes: Vec<MotionKeyframe>,

    /// Transition applied to the event's fade-in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_in: Option<TransitionStyle>,
}

/// Motion keyframe, relative to its event start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionKeyframe {
    pub time_secs: f64,
    pub transform: MotionTransform,
}

impl Track {
    pub fn video(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: TrackId(id),
            name: name.into(),
            media_type: MediaType::Video,
            selected: false,
            events: vec![],
        }
    }

    pub fn audio(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: TrackId(id),
            name: name.into(),
            media_type: MediaType::Audio,
            selected: false,
            events: vec![],
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// End of the last event on this track, or 0.0 when empty.
    pub fn end_secs(&self) -> f64 {
        self.events
            .iter()
            .map(VideoEvent::end_secs)
            .fold(0.0, f64::max)
    }

    pub fn event_mut(&mut self, id: u64) -> Option<&mut VideoEvent> {
        self.events.iter_mut().find(|e| e.id == id)
    }
}

impl VideoEvent {
    pub fn end_secs(&self) -> f64 {
        self.start_secs + self.length_secs
    }

    /// Key `transform` at the event start and identity at its end,
    /// replacing any existing keyframes.
    pub fn apply_initial_transform(&mut self, transform: MotionTransform) {
        self.keyframes = vec![
            MotionKeyframe {
                time_secs: 0.0,
                transform,
            },
            MotionKeyframe {
                time_secs: self.length_secs,
                transform: MotionTransform::IDENTITY,
            },
        ];
    }
}
