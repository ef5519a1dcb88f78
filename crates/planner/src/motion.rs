//! Per-clip motion and transition selection.
//!
//! Fixed motion never touches the RNG, so a fixed run is fully
//! determined by its configuration and input order. Randomized motion
//! draws, per clip and in this order: rotation multiplier, x offset,
//! y offset, transition index.

use rand::seq::SliceRandom;
use rand::Rng;
use stillreel_common::config::{JitterBounds, MotionMode, PlacementConfig};
use stillreel_host_core::{MotionTransform, TransitionStyle};

/// Chooses the initial transform and transition of each clip.
#[derive(Debug, Clone)]
pub struct MotionSampler<'a> {
    mode: MotionMode,
    scale: f64,
    rotation_rad: f64,
    jitter: JitterBounds,
    transitions: &'a [TransitionStyle],
}

impl<'a> MotionSampler<'a> {
    pub fn new(config: &'a PlacementConfig) -> Self {
        Self {
            mode: config.motion,
            scale: config.initial_scale,
            rotation_rad: config.initial_rotation_rad,
            jitter: config.jitter,
            transitions: &config.transitions,
        }
    }

    /// Transform for the next clip.
    pub fn transform<R: Rng + ?Sized>(&self, rng: &mut R) -> MotionTransform {
        match self.mode {
            MotionMode::Fixed => MotionTransform {
                scale: self.scale,
                rotation_rad: self.rotation_rad,
                translate_x: 0.0,
                translate_y: 0.0,
            },
            MotionMode::Randomized => {
                let multiplier: f64 = rng.gen_range(-1.0..1.0);
                let x = rng.gen_range(-self.jitter.x..self.jitter.x);
                let y = rng.gen_range(-self.jitter.y..self.jitter.y);
                MotionTransform {
                    scale: self.scale,
                    rotation_rad: self.rotation_rad * multiplier,
                    translate_x: f64::from(x),
                    translate_y: f64::from(y),
                }
            }
        }
    }

    /// Transition for the next clip. Every configured style is reachable.
    pub fn transition<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<TransitionStyle> {
        match self.mode {
            MotionMode::Fixed => self.transitions.first().cloned(),
            MotionMode::Randomized => self.transitions.choose(rng).cloned(),
        }
    }
}
