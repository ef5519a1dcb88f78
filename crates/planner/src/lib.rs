//! stillreel planner
//!
//! Lays an ordered set of stills out on the selected video track:
//! - **Placement:** contiguous clips with a fixed overlap
//! - **Motion:** fixed or randomized pan/zoom/rotate at each clip start
//! - **Transitions:** one fade-in transition per clip
//!
//! Planning itself is pure computation. Host interaction goes through the
//! `stillreel-host-core` traits, and randomness is always injected.

pub mod error;
pub mod motion;
pub mod placement;
pub mod planner;
pub mod populate;

pub use error::PlanError;
pub use motion::MotionSampler;
pub use placement::{Placement, RunReport, StillItem};
pub use planner::{rng_from_seed, SequentialPlanner};
pub use populate::{populate, PopulateOutcome};
