//! Contracts of the collaborators a scan pass talks to.
//!
//! The scanner only discovers entities and drives markers through these
//! traits; how entities are found or markers drawn is up to the host.

use glam::Vec3;

use radarscope_core::enums::Category;
use radarscope_core::types::{EntityId, MarkerId, Rgba};

/// A discovered entity, as handed to the scanner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub entity_id: EntityId,
    /// World position, or `None` when the handle no longer resolves to a
    /// live transform.
    pub world_position: Option<Vec3>,
}

impl Candidate {
    pub fn new(entity_id: EntityId, world_position: Vec3) -> Self {
        Self {
            entity_id,
            world_position: Some(world_position),
        }
    }

    pub fn stale(entity_id: EntityId) -> Self {
        Self {
            entity_id,
            world_position: None,
        }
    }

    /// The world position if it is usable for projection.
    pub fn resolved_position(&self) -> Option<Vec3> {
        self.world_position.filter(|p| p.is_finite())
    }
}

/// Finds the entities of one category. Called once per category per frame.
pub trait EntityDiscovery {
    /// Append every candidate of `category` to `out`.
    ///
    /// `out` is cleared by the caller and reused across frames.
    fn find_entities(&self, category: Category, out: &mut Vec<Candidate>);
}

/// Maps world positions into the scan plane's local frame.
pub trait SpatialTransform {
    fn world_to_local(&self, world: Vec3) -> Vec3;
}

/// Visual marker provisioning. Markers are created lazily and recycled by
/// toggling them; the scanner never destroys one, and handles outlive a
/// registry reset.
pub trait MarkerRenderer {
    fn create_marker(&mut self) -> MarkerId;
    fn set_marker_active(&mut self, marker: MarkerId, active: bool);
    fn set_marker_color(&mut self, marker: MarkerId, color: Rgba);
    fn set_marker_screen_position(&mut self, marker: MarkerId, position: glam::Vec2);
}
