//! Placement records produced by the planner.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use stillreel_host_core::{MotionTransform, TrackId, TransitionStyle};

/// One image file to place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StillItem {
    pub path: PathBuf,
}

impl StillItem {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl From<PathBuf> for StillItem {
    fn from(path: PathBuf) -> Self {
        Self { path }
    }
}

/// Where and how one still lands on the track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Position in the input order.
    pub index: usize,
    pub path: PathBuf,
    pub start_secs: f64,
    pub duration_secs: f64,
    /// Transform at the clip start; the clip ends at identity.
    pub transform: MotionTransform,
    /// Fade-in transition, if any are configured.
    pub transition: Option<TransitionStyle>,
}

impl Placement {
    pub fn end_secs(&self) -> f64 {
        self.start_secs + self.duration_secs
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Track every clip went to.
    pub track: TrackId,
    pub placements: Vec<Placement>,
}

impl RunReport {
    /// Seconds covered from the first clip start to the last clip end.
    pub fn span_secs(&self) -> f64 {
        match (self.placements.first(), self.placements.last()) {
            (Some(first), Some(last)) => last.end_secs() - first.start_secs,
            _ => 0.0,
        }
    }
}
