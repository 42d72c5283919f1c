//! Frame updater: per-tick orbital positions and ambient spin.
//!
//! Positions are a pure function of elapsed time and the body's ring
//! (plus its slot on clustered rings), so stepping the clock by any
//! sequence of deltas lands every body in the same place.

use std::f64::consts::TAU;
use glam::{Quat, Vec3};

use crate::api::config::{AmbientSpin, OrbitModel};
use crate::components::body::{BodyRole, Orbit};
use crate::core::scene::SceneGraph;

/// Orbital phase in radians at `elapsed` seconds.
pub fn orbit_angle(orbit: &Orbit, elapsed: f64) -> f64 {
    elapsed * orbit.speed_factor as f64 * TAU + orbit.phase_offset() as f64
}

/// Position of an orbiting body at `elapsed` seconds.
/// Distance from the origin is always `orbit.radius`.
pub fn orbit_position(model: OrbitModel, orbit: &Orbit, elapsed: f64) -> Vec3 {
    let angle = orbit_angle(orbit, elapsed);
    let r = orbit.radius as f64;
    match model {
        OrbitModel::Planar => Vec3::new((r * angle.cos()) as f32, (r * angle.sin()) as f32, 0.0),
        OrbitModel::Spiral { arm_twist, tilt } => {
            let lagged = angle - arm_twist as f64 * orbit.ring_index as f64;
            let flat = Vec3::new((r * lagged.cos()) as f32, (r * lagged.sin()) as f32, 0.0);
            Quat::from_rotation_x(tilt) * flat
        }
    }
}

/// Move every orbiting body that is not being dragged onto its orbit.
/// Returns the number of bodies written.
pub fn update_orbits(scene: &mut SceneGraph, model: OrbitModel, elapsed: f64) -> usize {
    let mut moved = 0;
    for body in scene.iter_mut() {
        let Some(orbit) = body.orbit else { continue };
        if orbit.is_dragging {
            continue;
        }
        body.pos = orbit_position(model, &orbit, elapsed);
        moved += 1;
    }
    moved
}

/// Rotate the decorative bodies by their fixed per-tick increments.
pub fn apply_ambient_spin(scene: &mut SceneGraph, spin: AmbientSpin) {
    for body in scene.iter_mut() {
        match body.role {
            BodyRole::StarField => body.rotation.y += spin.star_field,
            BodyRole::RingGuide => body.rotation.z += spin.ring_guides,
            BodyRole::Central | BodyRole::Orbiting => {}
        }
    }
}
