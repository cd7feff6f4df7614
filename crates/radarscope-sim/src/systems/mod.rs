//! Systems that drive the demo world between scans.
//!
//! Systems are plain functions over `&mut World`; they hold no state of
//! their own. None of them is needed by the scan pipeline itself.

pub mod churn;
pub mod movement;
