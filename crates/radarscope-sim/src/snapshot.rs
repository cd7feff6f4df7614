//! Snapshot builder: reads the registry and builds a `RadarSnapshot`.
//!
//! Read-only. Display positions use the same mapping as the scan pass.

use radarscope_core::config::RadarConfig;
use radarscope_core::state::{RadarSnapshot, TargetView};

use crate::registry::TargetRegistry;

/// Build the display view of every active target, in registry order.
pub fn build_snapshot(registry: &TargetRegistry, config: &RadarConfig, frame: u64) -> RadarSnapshot {
    let scale = config.display_scale();

    let targets = registry
        .active_targets()
        .map(|target| TargetView {
            entity_id: target.entity_id(),
            category: target.category(),
            projected: target.projected(),
            display_position: target.projected().truncate() * scale,
            marker: target.marker(),
        })
        .collect();

    RadarSnapshot {
        frame,
        radar_range: config.radar_range,
        targets,
    }
}
