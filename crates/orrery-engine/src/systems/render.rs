use glam::Vec3;

use crate::components::body::{Body, BodyShape};
use crate::core::scene::SceneGraph;
use crate::renderer::instance::{
    BodyInstance, RenderBuffer, FLAG_DRAGGING, KIND_ANNULUS, KIND_POINTS, KIND_SPHERE,
};

/// Flatten a body into its render record.
pub fn body_instance(body: &Body) -> BodyInstance {
    let (kind, size_a, size_b) = match &body.shape {
        BodyShape::Sphere { radius } => (KIND_SPHERE, *radius, 0.0),
        BodyShape::Annulus { inner, outer } => (KIND_ANNULUS, *inner, *outer),
        BodyShape::Points { positions, size } => (KIND_POINTS, *size, positions.len() as f32),
    };
    BodyInstance {
        id: body.id.0 as f32,
        kind,
        x: body.pos.x,
        y: body.pos.y,
        z: body.pos.z,
        rot_x: body.rotation.x,
        rot_y: body.rotation.y,
        rot_z: body.rotation.z,
        size_a,
        size_b,
        r: body.color.r,
        g: body.color.g,
        b: body.color.b,
        flags: if body.is_dragging() { FLAG_DRAGGING } else { 0.0 },
        _pad: [0.0; 2],
    }
}

/// Rebuild the render buffer from the scene's visible bodies, in arena order.
pub fn build_render_buffer<'a>(bodies: impl Iterator<Item = &'a Body>, buffer: &mut RenderBuffer) {
    buffer.clear();
    for body in bodies {
        if !body.visible {
            continue;
        }
        buffer.push(body_instance(body));
    }
}

/// Star positions of the scene's star field (empty if it has none).
pub fn star_points(scene: &SceneGraph) -> &[Vec3] {
    scene
        .star_field()
        .and_then(|id| scene.get(id))
        .and_then(|body| match &body.shape {
            BodyShape::Points { positions, .. } => Some(positions.as_slice()),
            _ => None,
        })
        .unwrap_or(&[])
}
