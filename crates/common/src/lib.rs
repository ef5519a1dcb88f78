//! stillreel common utilities
//!
//! Shared infrastructure for all stillreel crates:
//! - Error types and result aliases
//! - Configuration loading (source folder, placement settings, logging)
//! - Tracing/logging initialization

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
