use glam::Vec3;
use crate::api::types::{BodyId, Color};
use crate::components::ring::Ring;

/// What a body is in the scene. Only `Orbiting` bodies move or drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRole {
    StarField,
    Central,
    RingGuide,
    Orbiting,
}

/// Geometry handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyShape {
    Sphere { radius: f32 },
    /// Flat ring in the body's local XY plane.
    Annulus { inner: f32, outer: f32 },
    /// Point cloud in the body's local frame.
    Points { positions: Vec<Vec3>, size: f32 },
}

impl BodyShape {
    /// Bounding radius of the shape around the body's position.
    pub fn bounding_radius(&self) -> f32 {
        match self {
            BodyShape::Sphere { radius } => *radius,
            BodyShape::Annulus { outer, .. } => *outer,
            BodyShape::Points { positions, .. } => positions
                .iter()
                .map(|p| p.length())
                .fold(0.0, f32::max),
        }
    }
}

/// Kinematic state of an orbiting body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    /// Ring index, starting at 1.
    pub ring_index: u32,
    /// The guide annulus this body belongs to.
    pub ring: Ring,
    /// Orbit radius used by the frame updater (`ring_index * ring_radius_step`).
    pub radius: f32,
    /// Revolutions per second (`ring_index * angular_speed`).
    pub speed_factor: f32,
    /// Position of this body among the bodies sharing the ring.
    pub slot: u32,
    /// Number of bodies sharing the ring.
    pub slots: u32,
    /// While set, the frame updater leaves the position alone.
    pub is_dragging: bool,
}

impl Orbit {
    pub fn new(ring_index: u32, ring: Ring, radius: f32, speed_factor: f32) -> Self {
        Self {
            ring_index,
            ring,
            radius,
            speed_factor,
            slot: 0,
            slots: 1,
            is_dragging: false,
        }
    }

    pub fn with_slot(mut self, slot: u32, slots: u32) -> Self {
        self.slot = slot;
        self.slots = slots.max(1);
        self
    }

    /// Phase offset that spreads bodies sharing a ring evenly around it.
    pub fn phase_offset(&self) -> f32 {
        self.slot as f32 / self.slots as f32 * std::f32::consts::TAU
    }
}

/// A positioned visual entity: star field, sun, ring guide or planet.
#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    /// Free-form name for lookups and logs.
    pub tag: String,
    pub role: BodyRole,
    pub visible: bool,
    pub pos: Vec3,
    /// Euler rotation (XYZ, radians).
    pub rotation: Vec3,
    pub shape: BodyShape,
    pub color: Color,
    pub orbit: Option<Orbit>,
}

impl Body {
    pub fn new(id: BodyId, role: BodyRole, shape: BodyShape) -> Self {
        Self {
            id,
            tag: String::new(),
            role,
            visible: true,
            pos: Vec3::ZERO,
            rotation: Vec3::ZERO,
            shape,
            color: Color::WHITE,
            orbit: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_orbit(mut self, orbit: Orbit) -> Self {
        self.orbit = Some(orbit);
        self
    }

    /// Visual radius for spheres, zero for other shapes.
    pub fn radius(&self) -> f32 {
        match self.shape {
            BodyShape::Sphere { radius } => radius,
            _ => 0.0,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.orbit.map_or(false, |o| o.is_dragging)
    }
}
