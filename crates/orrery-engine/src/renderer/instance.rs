use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Instance kinds understood by the host renderer.
pub const KIND_POINTS: f32 = 0.0;
pub const KIND_SPHERE: f32 = 1.0;
pub const KIND_ANNULUS: f32 = 2.0;

/// Flag bit set on bodies currently held by a drag.
pub const FLAG_DRAGGING: f32 = 1.0;

/// Per-body render data read by the host straight out of WASM memory.
/// 16 floats = 64 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    pub id: f32,
    pub kind: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Euler rotation (XYZ, radians).
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
    /// Sphere radius, annulus inner radius, or point size.
    pub size_a: f32,
    /// Annulus outer radius, or point count.
    pub size_b: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub flags: f32,
    pub _pad: [f32; 2],
}

impl BodyInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Everything the host needs to draw one frame's bodies.
pub struct RenderBuffer {
    pub instances: Vec<BodyInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: BodyInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for reads from JS.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
