use super::camera::CameraUniform;
use super::traits::{FrameData, RenderSurface};

/// Surface that draws nothing and records what it was asked to do.
///
/// The browser bridge uses it as the hand-off point: the page reads the
/// controller's buffers after each tick, and `frames_rendered` tells it
/// whether a redraw was requested.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    width: u32,
    height: u32,
    pixel_ratio: f32,
    frames_rendered: u64,
    resizes: u32,
    last_camera: Option<CameraUniform>,
    disposed: bool,
}

impl HeadlessSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixel_ratio: 1.0,
            ..Default::default()
        }
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Number of `set_size` calls received.
    pub fn resizes(&self) -> u32 {
        self.resizes
    }

    pub fn last_camera(&self) -> Option<&CameraUniform> {
        self.last_camera.as_ref()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl RenderSurface for HeadlessSurface {
    fn backend(&self) -> &'static str {
        "headless"
    }

    fn set_size(&mut self, width: u32, height: u32, pixel_ratio: f32) {
        self.width = width;
        self.height = height;
        self.pixel_ratio = pixel_ratio;
        self.resizes += 1;
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn render(&mut self, frame: &FrameData) {
        if self.disposed {
            log::debug!("render on disposed surface ignored");
            return;
        }
        self.frames_rendered += 1;
        self.last_camera = Some(frame.camera);
    }

    fn dispose(&mut self) {
        self.disposed = true;
        self.last_camera = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Color;
    use bytemuck::Zeroable;

    fn frame() -> FrameData<'static> {
        FrameData {
            instances: &[],
            stars: &[],
            camera: CameraUniform::zeroed(),
            clear_color: Color::BLACK,
            frame: 0,
        }
    }

    #[test]
    fn records_renders_and_sizes() {
        let mut surface = HeadlessSurface::new(800, 600);
        surface.set_size(1024, 768, 2.0);
        surface.render(&frame());
        assert_eq!(surface.size(), (1024, 768));
        assert_eq!(surface.pixel_ratio(), 2.0);
        assert_eq!(surface.resizes(), 1);
        assert_eq!(surface.frames_rendered(), 1);
        assert!(surface.last_camera().is_some());
    }

    #[test]
    fn disposed_surface_draws_nothing() {
        let mut surface = HeadlessSurface::new(800, 600);
        surface.dispose();
        surface.render(&frame());
        assert_eq!(surface.frames_rendered(), 0);
        assert!(surface.is_disposed());
    }
}
