use crate::api::types::BodyId;
use crate::components::body::{Body, BodyRole};

/// Arena of every body in the scene.
///
/// Bodies are never removed individually, so a `BodyId` is simply the
/// body's index and lookups are O(1). Role indices are kept alongside so
/// the per-frame systems never scan the star field or guides.
pub struct SceneGraph {
    bodies: Vec<Body>,
    orbiting: Vec<BodyId>,
    /// Orbiting bodies grouped by ring (slot 0 holds ring index 1).
    by_ring: Vec<Vec<BodyId>>,
    ring_guides: Vec<BodyId>,
    star_field: Option<BodyId>,
    central: Option<BodyId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(capacity),
            orbiting: Vec::new(),
            by_ring: Vec::new(),
            ring_guides: Vec::new(),
            star_field: None,
            central: None,
        }
    }

    /// Add a body. Its id is reassigned to its arena slot and returned.
    pub fn spawn(&mut self, mut body: Body) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        body.id = id;

        match body.role {
            BodyRole::Orbiting => {
                self.orbiting.push(id);
                if let Some(orbit) = &body.orbit {
                    let slot = orbit.ring_index.saturating_sub(1) as usize;
                    if self.by_ring.len() <= slot {
                        self.by_ring.resize_with(slot + 1, Vec::new);
                    }
                    self.by_ring[slot].push(id);
                }
            }
            BodyRole::RingGuide => self.ring_guides.push(id),
            BodyRole::StarField => self.star_field = Some(id),
            BodyRole::Central => self.central = Some(id),
        }

        self.bodies.push(body);
        id
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    /// Ids of all orbiting bodies, in spawn order.
    pub fn orbiting(&self) -> &[BodyId] {
        &self.orbiting
    }

    /// Ids of the orbiting bodies on a ring (ring indices start at 1).
    pub fn on_ring(&self, ring_index: u32) -> &[BodyId] {
        ring_index
            .checked_sub(1)
            .and_then(|slot| self.by_ring.get(slot as usize))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn ring_guides(&self) -> &[BodyId] {
        &self.ring_guides
    }

    pub fn star_field(&self) -> Option<BodyId> {
        self.star_field
    }

    pub fn central(&self) -> Option<BodyId> {
        self.central
    }

    /// Whether the body exists and can be dragged.
    pub fn is_draggable(&self, id: BodyId) -> bool {
        self.get(id).map_or(false, |b| b.orbit.is_some())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}
