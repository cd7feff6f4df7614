//! Radar scan pipeline for RADARSCOPE.
//!
//! Owns the target registry (a pooled slot arena of radar targets), runs one
//! scan pass per frame against the host's discovery and rendering
//! collaborators, and produces `RadarSnapshot`s. Completely headless, so the
//! whole pipeline can be driven deterministically from tests.

pub mod headless;
pub mod interfaces;
pub mod plane;
pub mod registry;
pub mod scanner;
pub mod snapshot;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use radarscope_core as core;
pub use registry::{RadarTarget, TargetRegistry};
pub use scanner::RadarScanner;
