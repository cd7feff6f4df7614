//! Per-frame outputs of a scan: the report counters and the display snapshot.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::Category;
use crate::types::{EntityId, MarkerId};

/// Counters describing what a single scan pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Frame number of the scan (starts at 1 for the first scan).
    pub frame: u64,
    /// Targets acquired this frame that were not tracked before.
    pub acquired: u32,
    /// Of `acquired`, how many were served from the free list.
    pub reused: u32,
    /// Targets returned to the free list this frame.
    pub released: u32,
    /// Candidates skipped for lying outside the radar range.
    pub out_of_range: u32,
    /// Candidates skipped because their handle no longer resolved.
    pub stale: u32,
    /// Tracked targets whose category changed.
    pub reclassified: u32,
    /// Active targets after reclamation.
    pub active: u32,
    /// Total records in the pool (active + free).
    pub pool_size: u32,
}

/// One active target as seen on the radar display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetView {
    pub entity_id: EntityId,
    pub category: Category,
    /// Position in scan-plane local space (z = 0).
    pub projected: Vec3,
    /// Position in display space, origin at the display center.
    pub display_position: Vec2,
    pub marker: Option<MarkerId>,
}

/// Complete radar state after a scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadarSnapshot {
    pub frame: u64,
    pub radar_range: f32,
    pub targets: Vec<TargetView>,
}

impl RadarSnapshot {
    pub fn hostile_count(&self) -> usize {
        self.targets
            .iter()
            .filter(|t| t.category.is_hostile())
            .count()
    }

    pub fn friendly_count(&self) -> usize {
        self.targets.len() - self.hostile_count()
    }
}
