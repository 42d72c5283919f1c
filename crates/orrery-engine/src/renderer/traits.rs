//! The rendering collaborator.
//!
//! The controller never rasterizes anything. Each redraw it hands a
//! `FrameData` snapshot to a `RenderSurface`; the browser bridge uses a
//! surface that only records state and lets the page read the buffers.

use glam::Vec3;

use super::camera::CameraUniform;
use super::instance::BodyInstance;
use crate::api::types::Color;

/// Complete data for one redraw.
pub struct FrameData<'a> {
    /// One record per visible body (star field included, as its transform).
    pub instances: &'a [BodyInstance],
    /// Star positions in the star field's local frame.
    pub stars: &'a [Vec3],
    pub camera: CameraUniform,
    pub clear_color: Color,
    /// Monotonic frame counter.
    pub frame: u64,
}

/// A drawing surface owned by the controller.
pub trait RenderSurface {
    /// Backend identifier (e.g. "headless", "webgpu").
    fn backend(&self) -> &'static str;

    /// Resize the drawing buffer.
    fn set_size(&mut self, width: u32, height: u32, pixel_ratio: f32);

    /// Current drawing-buffer size in CSS pixels.
    fn size(&self) -> (u32, u32);

    /// Draw (or publish) a frame.
    fn render(&mut self, frame: &FrameData);

    /// Release the surface. No frames are drawn afterwards.
    fn dispose(&mut self);
}
