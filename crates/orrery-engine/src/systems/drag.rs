//! Interaction handler: ring-constrained dragging of orbiting bodies.

use glam::Vec3;

use crate::api::types::BodyId;
use crate::components::ring::Ring;
use crate::core::scene::SceneGraph;
use crate::renderer::controls::NavigationControls;

/// Constrain a proposed drag position to a body's ring.
///
/// Outside the band the proposed vector is rescaled to
/// `inner_radius + body_radius`. Inside the band only the angle is kept and
/// the body sits exactly on the inner radius in the z=0 plane.
/// `fallback_dir` orients a zero-length proposal.
pub fn constrain_to_ring(proposed: Vec3, ring: Ring, body_radius: f32, fallback_dir: Vec3) -> Vec3 {
    let distance = proposed.length();
    if !ring.contains(distance) {
        let dir = proposed
            .try_normalize()
            .or_else(|| fallback_dir.try_normalize())
            .unwrap_or(Vec3::X);
        dir * (ring.inner_radius + body_radius)
    } else {
        let angle = proposed.y.atan2(proposed.x);
        Vec3::new(ring.inner_radius * angle.cos(), ring.inner_radius * angle.sin(), 0.0)
    }
}

/// Put a position back on the ring's inner radius, keeping its angle.
pub fn snap_to_ring(pos: Vec3, ring: Ring) -> Vec3 {
    let angle = if pos.x == 0.0 && pos.y == 0.0 { 0.0 } else { pos.y.atan2(pos.x) };
    Vec3::new(ring.inner_radius * angle.cos(), ring.inner_radius * angle.sin(), 0.0)
}

/// Tracks which bodies are being dragged and owns the rule that camera
/// navigation is off while any drag is in flight.
#[derive(Debug)]
pub struct InteractionHandler {
    active: Vec<BodyId>,
    attached: bool,
}

impl InteractionHandler {
    pub fn new() -> Self {
        Self {
            active: Vec::new(),
            attached: true,
        }
    }

    /// Whether gesture events are still accepted.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_dragging(&self, id: BodyId) -> bool {
        self.active.contains(&id)
    }

    /// Bodies currently being dragged.
    pub fn active(&self) -> &[BodyId] {
        &self.active
    }

    /// Begin dragging `id`. Returns false if the event was ignored.
    pub fn drag_start(
        &mut self,
        scene: &mut SceneGraph,
        controls: &mut NavigationControls,
        id: BodyId,
    ) -> bool {
        if !self.attached {
            return false;
        }
        if !scene.is_draggable(id) {
            log::debug!("drag start on non-draggable body {:?} ignored", id);
            return false;
        }
        let Some(orbit) = scene.get_mut(id).and_then(|b| b.orbit.as_mut()) else {
            return false;
        };
        orbit.is_dragging = true;
        if !self.active.contains(&id) {
            self.active.push(id);
        }
        controls.set_enabled(false);
        true
    }

    /// Apply a proposed position to a body being dragged.
    /// Returns the constrained position written to the body.
    pub fn drag(&mut self, scene: &mut SceneGraph, id: BodyId, proposed: Vec3) -> Option<Vec3> {
        if !self.attached || !self.is_dragging(id) {
            log::debug!("drag on body {:?} without drag start ignored", id);
            return None;
        }
        let body = scene.get_mut(id)?;
        let orbit = body.orbit?;
        let pos = constrain_to_ring(proposed, orbit.ring, body.radius(), body.pos);
        body.pos = pos;
        Some(pos)
    }

    /// Release `id`: snap it onto its ring and hand it back to the frame
    /// updater. Navigation resumes once no drag is left.
    pub fn drag_end(
        &mut self,
        scene: &mut SceneGraph,
        controls: &mut NavigationControls,
        id: BodyId,
    ) -> bool {
        if !self.attached {
            return false;
        }
        let Some(idx) = self.active.iter().position(|&a| a == id) else {
            log::debug!("drag end on body {:?} without drag start ignored", id);
            return false;
        };
        self.active.swap_remove(idx);
        release(scene, id);
        if self.active.is_empty() {
            controls.set_enabled(true);
        }
        true
    }

    /// Cancel every in-flight drag and stop accepting gestures.
    pub fn detach(&mut self, scene: &mut SceneGraph, controls: &mut NavigationControls) {
        for id in self.active.drain(..) {
            log::debug!("drag on body {:?} cancelled by teardown", id);
            release(scene, id);
        }
        controls.set_enabled(true);
        self.attached = false;
    }
}

impl Default for InteractionHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn release(scene: &mut SceneGraph, id: BodyId) {
    if let Some(body) = scene.get_mut(id) {
        if let Some(orbit) = body.orbit.as_mut() {
            orbit.is_dragging = false;
            body.pos = snap_to_ring(body.pos, orbit.ring);
        }
    }
}
