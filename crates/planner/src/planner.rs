//! The sequential placement planner.
//!
//! # Algorithm
//!
//! 1. **Validate** the placement configuration once, up front.
//! 2. **Step**: clip `i` starts at `start + i * (duration - overlap)`.
//! 3. **Motion**: sample a transform and transition per clip.
//! 4. **Apply**: resolve the selected video track, then insert, key and
//!    transition each clip in order, stopping at the first host error.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stillreel_common::config::{OverlapPolicy, PlacementConfig};
use stillreel_host_core::{find_selected_video_track, EditingService, HostResult, TrackId};

use crate::error::PlanError;
use crate::motion::MotionSampler;
use crate::placement::{Placement, RunReport, StillItem};

/// Plans and applies still placements.
#[derive(Debug, Clone)]
pub struct SequentialPlanner {
    config: PlacementConfig,
    step_secs: f64,
}

impl SequentialPlanner {
    /// Create a planner, rejecting configurations that cannot produce a
    /// forward-moving timeline.
    pub fn new(config: PlacementConfig) -> Result<Self, PlanError> {
        let step_secs = validate(&config)?;
        Ok(Self { config, step_secs })
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Distance between consecutive clip starts.
    pub fn step_secs(&self) -> f64 {
        self.step_secs
    }

    /// Compute placements without touching a host.
    pub fn plan<R: Rng + ?Sized>(
        &self,
        items: &[StillItem],
        start_secs: f64,
        rng: &mut R,
    ) -> Result<Vec<Placement>, PlanError> {
        if !start_secs.is_finite() || start_secs < 0.0 {
            return Err(PlanError::invalid_config(format!(
                "start time must be a non-negative number of seconds, got {start_secs}"
            )));
        }

        let sampler = MotionSampler::new(&self.config);
        let placements = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let transform = sampler.transform(rng);
                let transition = sampler.transition(rng);
                Placement {
                    index,
                    path: item.path.clone(),
                    start_secs: start_secs + index as f64 * self.step_secs,
                    duration_secs: self.config.still_duration_secs,
                    transform,
                    transition,
                }
            })
            .collect();

        Ok(placements)
    }

    /// Plan and insert every item on the selected video track.
    ///
    /// The track is resolved before anything is inserted. On a host error
    /// the run stops; clips inserted before the failing one stay in place.
    pub fn run<S, R>(
        &self,
        service: &mut S,
        items: &[StillItem],
        start_secs: f64,
        rng: &mut R,
    ) -> Result<RunReport, PlanError>
    where
        S: EditingService + ?Sized,
        R: Rng + ?Sized,
    {
        let tracks = service.list_tracks().map_err(PlanError::TrackQuery)?;
        let track = find_selected_video_track(&tracks).ok_or(PlanError::NoSelectedVideoTrack)?;

        let placements = self.plan(items, start_secs, rng)?;
        tracing::info!(
            %track,
            count = placements.len(),
            start_secs,
            step_secs = self.step_secs,
            "Placing stills"
        );

        for placement in &placements {
            apply_placement(service, track, placement).map_err(|source| PlanError::Insert {
                index: placement.index,
                path: placement.path.clone(),
                source,
            })?;
        }

        Ok(RunReport { track, placements })
    }
}

fn apply_placement<S: EditingService + ?Sized>(
    service: &mut S,
    track: TrackId,
    placement: &Placement,
) -> HostResult<()> {
    tracing::debug!(
        index = placement.index,
        path = %placement.path.display(),
        start_secs = placement.start_secs,
        "Inserting still"
    );
    let clip = service.insert_clip(
        track,
        &placement.path,
        placement.start_secs,
        placement.duration_secs,
    )?;
    service.set_initial_transform(clip, &placement.transform)?;
    if let Some(style) = &placement.transition {
        service.attach_transition(clip, style)?;
    }
    Ok(())
}

/// Check the configuration and return the start-to-start step.
fn validate(config: &PlacementConfig) -> Result<f64, PlanError> {
    let duration = config.still_duration_secs;
    let overlap = config.overlap_secs;

    if !duration.is_finite() || duration <= 0.0 {
        return Err(PlanError::invalid_config(format!(
            "still duration must be positive, got {duration}"
        )));
    }
    if !overlap.is_finite() || overlap < 0.0 {
        return Err(PlanError::invalid_config(format!(
            "overlap must be zero or positive, got {overlap}"
        )));
    }
    if !(config.initial_scale > 0.0 && config.initial_scale <= 1.0) {
        return Err(PlanError::invalid_config(format!(
            "initial scale must be in (0, 1], got {}",
            config.initial_scale
        )));
    }
    if !config.initial_rotation_rad.is_finite() {
        return Err(PlanError::invalid_config("initial rotation must be finite"));
    }
    if config.jitter.x <= 0 || config.jitter.y <= 0 {
        return Err(PlanError::invalid_config(format!(
            "jitter bounds must be positive, got x={} y={}",
            config.jitter.x, config.jitter.y
        )));
    }
    if config.transitions.iter().any(|t| t.name.trim().is_empty()) {
        return Err(PlanError::invalid_config("transition names must not be empty"));
    }

    if overlap < duration {
        return Ok(duration - overlap);
    }

    match config.overlap_policy {
        OverlapPolicy::Reject => Err(PlanError::invalid_config(format!(
            "overlap ({overlap}s) must be shorter than still duration ({duration}s)"
        ))),
        OverlapPolicy::ButtJoin => {
            tracing::warn!(
                overlap_secs = overlap,
                still_duration_secs = duration,
                "Overlap is not shorter than the still duration; placing clips end to end"
            );
            Ok(duration)
        }
    }
}

/// RNG for randomized motion: seeded when a seed is given, otherwise from entropy.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
