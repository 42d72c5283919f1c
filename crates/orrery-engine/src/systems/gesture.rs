//! Pointer gestures: turns raw pointer positions into drag events on
//! orbiting bodies, or into camera rotation when nothing is grabbed.

use glam::{Vec2, Vec3};

use crate::api::types::BodyId;
use crate::core::scene::SceneGraph;
use crate::renderer::camera::{PerspectiveCamera, Ray};

/// What a pointer event turned into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    None,
    DragStart(BodyId),
    Drag(BodyId, Vec3),
    DragEnd(BodyId),
    /// Camera rotation by a pointer delta in CSS pixels.
    Rotate { dx: f32, dy: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum GestureState {
    Idle,
    /// Dragging a body across the plane through its grab point facing the camera.
    Dragging { body: BodyId, plane_point: Vec3, plane_normal: Vec3, offset: Vec3 },
    Orbiting,
}

/// Nearest draggable body hit by a ray.
pub fn pick_orbiting(scene: &SceneGraph, ray: &Ray) -> Option<BodyId> {
    scene
        .orbiting()
        .iter()
        .filter_map(|&id| {
            let body = scene.get(id)?;
            ray.intersect_sphere(body.pos, body.radius()).map(|t| (id, t))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

#[derive(Debug)]
pub struct GestureTracker {
    state: GestureState,
    last_ndc: Vec2,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self {
            state: GestureState::Idle,
            last_ndc: Vec2::ZERO,
        }
    }

    /// Body under the active drag gesture, if any.
    pub fn dragging(&self) -> Option<BodyId> {
        match self.state {
            GestureState::Dragging { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn pointer_down(&mut self, ndc: Vec2, scene: &SceneGraph, camera: &PerspectiveCamera) -> GestureAction {
        self.last_ndc = ndc;
        let ray = camera.ray_from_ndc(ndc);
        let Some(id) = pick_orbiting(scene, &ray) else {
            self.state = GestureState::Orbiting;
            return GestureAction::None;
        };
        let Some(body) = scene.get(id) else {
            self.state = GestureState::Orbiting;
            return GestureAction::None;
        };

        let plane_normal = -camera.forward();
        let plane_point = body.pos;
        let offset = ray
            .intersect_plane(plane_point, plane_normal)
            .map_or(Vec3::ZERO, |hit| hit - body.pos);
        self.state = GestureState::Dragging { body: id, plane_point, plane_normal, offset };
        GestureAction::DragStart(id)
    }

    /// `viewport` is the surface size in CSS pixels.
    pub fn pointer_move(&mut self, ndc: Vec2, camera: &PerspectiveCamera, viewport: (u32, u32)) -> GestureAction {
        let delta = ndc - self.last_ndc;
        self.last_ndc = ndc;
        match self.state {
            GestureState::Idle => GestureAction::None,
            GestureState::Orbiting => GestureAction::Rotate {
                dx: delta.x * viewport.0 as f32 / 2.0,
                dy: -delta.y * viewport.1 as f32 / 2.0,
            },
            GestureState::Dragging { body, plane_point, plane_normal, offset } => camera
                .ray_from_ndc(ndc)
                .intersect_plane(plane_point, plane_normal)
                .map_or(GestureAction::None, |hit| GestureAction::Drag(body, hit - offset)),
        }
    }

    pub fn pointer_up(&mut self) -> GestureAction {
        let action = match self.state {
            GestureState::Dragging { body, .. } => GestureAction::DragEnd(body),
            _ => GestureAction::None,
        };
        self.state = GestureState::Idle;
        action
    }

    /// Forget any gesture in progress.
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}
