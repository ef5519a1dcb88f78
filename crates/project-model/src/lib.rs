//! stillreel project model
//!
//! The editing document stillreel populates when no live host is attached:
//! - **Tracks:** ordered video/audio tracks with a selection flag
//! - **Events:** clips on a track, each with motion keyframes and a fade-in
//! - **Project:** metadata, transport cursor, and the transition library
//!
//! Times are seconds. Keyframe times are relative to their event start.

pub mod project;
pub mod track;

pub use project::*;
pub use track::*;
