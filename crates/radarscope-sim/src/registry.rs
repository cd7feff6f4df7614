//! Target registry: the identity-keyed pool of radar targets.
//!
//! Records live in an index-stable slot arena. A slot is either active
//! (mapped from its entity id and listed in `active`) or free (queued in
//! `free`), never both and never neither. Slots are recycled forever; the
//! arena only grows when churn outruns the free list.

use std::collections::{HashMap, VecDeque};

use glam::Vec3;

use radarscope_core::constants::REGISTRY_INITIAL_CAPACITY;
use radarscope_core::enums::Category;
use radarscope_core::types::{EntityId, MarkerId, SlotIndex};

use crate::interfaces::MarkerRenderer;

/// One tracked entity on the radar.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarTarget {
    entity_id: EntityId,
    category: Category,
    /// Scan-plane local position, z flattened to 0.
    projected: Vec3,
    /// Set by `touch`, cleared at the end of each frame.
    touched: bool,
    marker: Option<MarkerId>,
}

impl RadarTarget {
    fn new(entity_id: EntityId, category: Category) -> Self {
        Self {
            entity_id,
            category,
            projected: Vec3::ZERO,
            touched: false,
            marker: None,
        }
    }

    /// Point a recycled record at a different entity. The marker is kept.
    fn repurpose(&mut self, entity_id: EntityId, category: Category) {
        self.entity_id = entity_id;
        self.category = category;
        self.touched = false;
    }

    pub fn entity_id(&self) -> EntityId {
        self.entity_id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_hostile(&self) -> bool {
        self.category.is_hostile()
    }

    pub fn projected(&self) -> Vec3 {
        self.projected
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn marker(&self) -> Option<MarkerId> {
        self.marker
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn attach_marker(&mut self, marker: MarkerId) {
        self.marker = Some(marker);
    }

    /// Record this frame's observation. Keeps the target out of reclamation.
    pub fn touch(&mut self, projected: Vec3) {
        self.projected = projected;
        self.touched = true;
    }

    /// Clear the liveness flag so the next frame must touch the target again.
    pub fn mark_untouched(&mut self) {
        self.touched = false;
    }
}

/// Pool of radar targets keyed by entity identity.
#[derive(Debug)]
pub struct TargetRegistry {
    slots: Vec<RadarTarget>,
    by_entity: HashMap<EntityId, SlotIndex>,
    /// Active slots in insertion order.
    active: Vec<SlotIndex>,
    /// Free slots, oldest released first.
    free: VecDeque<SlotIndex>,
    /// Markers left over from records dropped by `init`, handed to newly
    /// allocated records before the renderer is asked for more.
    spare_markers: Vec<MarkerId>,
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::with_capacity(REGISTRY_INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            by_entity: HashMap::with_capacity(capacity),
            active: Vec::with_capacity(capacity),
            free: VecDeque::with_capacity(capacity),
            spare_markers: Vec::new(),
        }
    }

    /// Drop every record and mapping. Safe to call any number of times.
    ///
    /// Marker handles held by the dropped records are kept as spares and
    /// attached to the next records the arena allocates. Their active state
    /// is untouched; callers deactivate them through `markers()` first.
    pub fn init(&mut self) {
        self.spare_markers
            .extend(self.slots.drain(..).filter_map(|t| t.marker));
        self.by_entity.clear();
        self.active.clear();
        self.free.clear();
    }

    /// Return the record tracking `entity_id`, creating or recycling one if
    /// the entity is not tracked yet. The flag is `true` for a fresh record.
    ///
    /// An existing record is returned untouched, including its category.
    pub fn acquire_or_reuse(
        &mut self,
        entity_id: EntityId,
        category: Category,
    ) -> (&mut RadarTarget, bool) {
        if let Some(&slot) = self.by_entity.get(&entity_id) {
            return (&mut self.slots[slot.index()], false);
        }

        let slot = match self.free.pop_front() {
            Some(slot) => {
                log::trace!("reusing slot {slot} for {entity_id}");
                self.slots[slot.index()].repurpose(entity_id, category);
                slot
            }
            None => {
                let slot = SlotIndex(self.slots.len() as u32);
                log::trace!("allocating slot {slot} for {entity_id}");
                let mut target = RadarTarget::new(entity_id, category);
                target.marker = self.spare_markers.pop();
                self.slots.push(target);
                slot
            }
        };

        self.active.push(slot);
        self.by_entity.insert(entity_id, slot);
        (&mut self.slots[slot.index()], true)
    }

    /// Active targets in insertion order.
    pub fn active_targets(&self) -> impl Iterator<Item = &RadarTarget> + '_ {
        self.active.iter().map(|slot| &self.slots[slot.index()])
    }

    /// Visit every active target mutably, in insertion order.
    pub fn for_each_active_mut(&mut self, mut f: impl FnMut(&mut RadarTarget)) {
        let Self { slots, active, .. } = self;
        for slot in active.iter() {
            f(&mut slots[slot.index()]);
        }
    }

    /// Move every untouched active target to the free list and deactivate
    /// its marker. Returns how many targets were released.
    pub fn release_stale<R>(&mut self, renderer: &mut R) -> u32
    where
        R: MarkerRenderer + ?Sized,
    {
        let Self {
            slots,
            by_entity,
            active,
            free,
            ..
        } = self;
        let mut released = 0;

        // Back to front, so the latest acquired is queued for reuse first.
        for &slot in active.iter().rev() {
            let target = &slots[slot.index()];
            if target.touched {
                continue;
            }

            free.push_back(slot);
            by_entity.remove(&target.entity_id);

            if let Some(marker) = target.marker {
                renderer.set_marker_active(marker, false);
            }
            log::trace!("released slot {slot} ({})", target.entity_id);
            released += 1;
        }

        if released > 0 {
            active.retain(|slot| slots[slot.index()].touched);
        }
        released
    }

    /// The record tracking `entity_id`, if any.
    pub fn get(&self, entity_id: EntityId) -> Option<&RadarTarget> {
        self.by_entity
            .get(&entity_id)
            .map(|slot| &self.slots[slot.index()])
    }

    pub fn contains(&self, entity_id: EntityId) -> bool {
        self.by_entity.contains_key(&entity_id)
    }

    /// Slot currently holding `entity_id`.
    pub fn slot_of(&self, entity_id: EntityId) -> Option<SlotIndex> {
        self.by_entity.get(&entity_id).copied()
    }

    pub fn slot(&self, slot: SlotIndex) -> Option<&RadarTarget> {
        self.slots.get(slot.index())
    }

    /// Free slots, in the order they will be reused.
    pub fn free_slots(&self) -> impl Iterator<Item = SlotIndex> + '_ {
        self.free.iter().copied()
    }

    /// Every marker handle the registry holds: on active or free records,
    /// or spare since the last `init`.
    pub fn markers(&self) -> impl Iterator<Item = MarkerId> + '_ {
        self.slots
            .iter()
            .filter_map(|t| t.marker)
            .chain(self.spare_markers.iter().copied())
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// Total records owned by the registry (active + free).
    pub fn pool_size(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Panic if the active/free partition or the identity map is broken.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        use std::collections::HashSet;

        assert_eq!(
            self.active.len() + self.free.len(),
            self.slots.len(),
            "every slot must be either active or free"
        );
        assert_eq!(self.by_entity.len(), self.active.len());

        let active: HashSet<_> = self.active.iter().copied().collect();
        let free: HashSet<_> = self.free.iter().copied().collect();
        assert_eq!(active.len(), self.active.len(), "duplicate active slot");
        assert_eq!(free.len(), self.free.len(), "duplicate free slot");
        assert!(active.is_disjoint(&free), "slot both active and free");

        for slot in &self.active {
            let target = &self.slots[slot.index()];
            assert_eq!(self.by_entity.get(&target.entity_id), Some(slot));
        }
    }
}
