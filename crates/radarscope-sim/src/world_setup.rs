//! Entity spawn factories for populating a demo world with radar contacts.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use radarscope_core::enums::Category;

use crate::world::{Allegiance, Position, Velocity};

/// Where and how fast contacts are spawned.
#[derive(Debug, Clone, Copy)]
pub struct SpawnArea {
    /// Contacts spawn within this horizontal distance of the origin.
    pub radius: f32,
    /// Maximum altitude above the ground plane.
    pub max_altitude: f32,
    /// Maximum horizontal speed.
    pub max_speed: f32,
    /// Probability that a contact spawns hostile.
    pub hostile_ratio: f64,
}

impl Default for SpawnArea {
    fn default() -> Self {
        Self {
            radius: 150.0,
            max_altitude: 30.0,
            max_speed: 20.0,
            hostile_ratio: 0.5,
        }
    }
}

/// Spawn `count` contacts at random positions within `area`.
pub fn spawn_contacts(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    area: &SpawnArea,
    count: usize,
) -> Vec<Entity> {
    (0..count).map(|_| spawn_contact(world, rng, area)).collect()
}

/// Spawn a single contact with random allegiance, position and heading.
pub fn spawn_contact(world: &mut World, rng: &mut ChaCha8Rng, area: &SpawnArea) -> Entity {
    let category = Category::from_hostile(rng.gen_bool(area.hostile_ratio));

    // Uniform over the disc.
    let bearing = rng.gen_range(0.0..std::f32::consts::TAU);
    let distance = area.radius * rng.gen::<f32>().sqrt();
    let altitude = rng.gen_range(0.0..=area.max_altitude);
    let position = Vec3::new(
        distance * bearing.sin(),
        altitude,
        distance * bearing.cos(),
    );

    let heading = rng.gen_range(0.0..std::f32::consts::TAU);
    let speed = rng.gen_range(0.0..=area.max_speed);
    let velocity = Vec3::new(speed * heading.sin(), 0.0, speed * heading.cos());

    world.spawn((Position(position), Velocity(velocity), Allegiance(category)))
}
