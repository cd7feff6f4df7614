//! hecs world adapters: components for radar contacts and the discovery
//! implementations that feed a scanner from a world.
//!
//! Components are plain data; the scan logic never sees the world directly.

use glam::Vec3;
use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use radarscope_core::enums::Category;
use radarscope_core::types::EntityId;

use crate::interfaces::{Candidate, EntityDiscovery};

/// World position of a contact (Y up).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// World velocity of a contact (units per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Which side a contact is on. Can change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allegiance(pub Category);

/// Radar identity of a hecs entity.
pub fn entity_id(entity: Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

/// Every entity with `Position` and a matching `Allegiance` is a candidate.
impl EntityDiscovery for World {
    fn find_entities(&self, category: Category, out: &mut Vec<Candidate>) {
        let mut query = self.query::<(&Position, &Allegiance)>();
        for (entity, (pos, allegiance)) in query.iter() {
            if allegiance.0 == category {
                out.push(Candidate::new(entity_id(entity), pos.0));
            }
        }
    }
}

/// Explicit per-category entity lists, kept by the host as contacts spawn.
///
/// Entries are not pruned when an entity dies; a despawned entity (or one
/// that lost its `Position`) shows up as a stale candidate until the host
/// calls `prune`.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    friendly: Vec<Entity>,
    hostile: Vec<Entity>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity under `category`, moving it if it was listed elsewhere.
    pub fn enlist(&mut self, entity: Entity, category: Category) {
        self.remove(entity);
        self.list_mut(category).push(entity);
    }

    pub fn remove(&mut self, entity: Entity) {
        self.friendly.retain(|e| *e != entity);
        self.hostile.retain(|e| *e != entity);
    }

    /// Drop entries whose entity no longer exists in `world`. Returns how
    /// many were removed.
    pub fn prune(&mut self, world: &World) -> usize {
        let before = self.len();
        self.friendly.retain(|e| world.contains(*e));
        self.hostile.retain(|e| world.contains(*e));
        before - self.len()
    }

    pub fn entities(&self, category: Category) -> &[Entity] {
        match category {
            Category::Friendly => &self.friendly,
            Category::Hostile => &self.hostile,
        }
    }

    pub fn len(&self) -> usize {
        self.friendly.len() + self.hostile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pair the roster with the world it refers to.
    pub fn in_world<'a>(&'a self, world: &'a World) -> RosterDiscovery<'a> {
        RosterDiscovery {
            roster: self,
            world,
        }
    }

    fn list_mut(&mut self, category: Category) -> &mut Vec<Entity> {
        match category {
            Category::Friendly => &mut self.friendly,
            Category::Hostile => &mut self.hostile,
        }
    }
}

/// Discovery over a roster's lists, resolving positions through a world.
pub struct RosterDiscovery<'a> {
    roster: &'a Roster,
    world: &'a World,
}

impl EntityDiscovery for RosterDiscovery<'_> {
    fn find_entities(&self, category: Category, out: &mut Vec<Candidate>) {
        for &entity in self.roster.entities(category) {
            let position = self.world.get::<&Position>(entity).ok().map(|p| p.0);
            out.push(Candidate {
                entity_id: entity_id(entity),
                world_position: position,
            });
        }
    }
}
