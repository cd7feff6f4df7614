//! Churn system: contacts die, new ones appear, and some switch sides.
//!
//! Keeps the population constant by respawning one contact per death, so a
//! scanner watching the world sees steady-state churn.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::world::Allegiance;
use crate::world_setup::{spawn_contact, SpawnArea};

/// Per-frame churn probabilities.
#[derive(Debug, Clone, Copy)]
pub struct ChurnRates {
    /// Chance that a contact is despawned (and replaced) this frame.
    pub despawn: f64,
    /// Chance that a contact flips allegiance this frame.
    pub defect: f64,
}

impl Default for ChurnRates {
    fn default() -> Self {
        Self {
            despawn: 0.02,
            defect: 0.005,
        }
    }
}

/// What a churn pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChurnEvents {
    pub despawned: u32,
    pub defected: u32,
}

/// Run one churn pass. Uses a caller-owned buffer to avoid per-frame
/// allocation; on return it holds the contacts spawned by this pass.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    rates: &ChurnRates,
    area: &SpawnArea,
    buffer: &mut Vec<Entity>,
) -> ChurnEvents {
    buffer.clear();
    let mut events = ChurnEvents::default();

    for (entity, allegiance) in world.query_mut::<&mut Allegiance>() {
        if rng.gen_bool(rates.despawn) {
            buffer.push(entity);
        } else if rng.gen_bool(rates.defect) {
            allegiance.0 = allegiance.0.flipped();
            events.defected += 1;
        }
    }

    for entity in buffer.drain(..) {
        if world.despawn(entity).is_ok() {
            events.despawned += 1;
        }
    }

    for _ in 0..events.despawned {
        buffer.push(spawn_contact(world, rng, area));
    }

    events
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::world_setup::spawn_contacts;

    #[test]
    fn test_churn_keeps_population_constant() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let area = SpawnArea::default();
        spawn_contacts(&mut world, &mut rng, &area, 50);

        let rates = ChurnRates {
            despawn: 0.2,
            defect: 0.1,
        };
        let mut buffer = Vec::new();
        let mut total = ChurnEvents::default();
        for _ in 0..20 {
            let events = run(&mut world, &mut rng, &rates, &area, &mut buffer);
            total.despawned += events.despawned;
            total.defected += events.defected;
            assert_eq!(world.len(), 50);
        }
        assert!(total.despawned > 0);
        assert!(total.defected > 0);
    }

    #[test]
    fn test_buffer_returns_replacements() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let area = SpawnArea::default();
        let originals = spawn_contacts(&mut world, &mut rng, &area, 30);

        let rates = ChurnRates {
            despawn: 0.5,
            defect: 0.0,
        };
        let mut buffer = Vec::new();
        let events = run(&mut world, &mut rng, &rates, &area, &mut buffer);

        assert!(events.despawned > 0);
        assert_eq!(buffer.len(), events.despawned as usize);
        assert!(buffer.iter().all(|e| world.contains(*e)));
        assert!(buffer.iter().all(|e| !originals.contains(e)));
    }

    #[test]
    fn test_zero_rates_change_nothing() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let area = SpawnArea::default();
        let before = spawn_contacts(&mut world, &mut rng, &area, 10);

        let rates = ChurnRates {
            despawn: 0.0,
            defect: 0.0,
        };
        let events = run(&mut world, &mut rng, &rates, &area, &mut Vec::new());
        assert_eq!(events, ChurnEvents::default());
        assert!(before.iter().all(|e| world.contains(*e)));
    }
}
