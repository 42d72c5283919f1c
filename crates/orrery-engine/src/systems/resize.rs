//! Resize adapter: keeps the drawing buffer and camera aspect in step with
//! the host container.

use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::traits::RenderSurface;

/// Applies container-size notifications. Repeating the last size is a no-op.
#[derive(Debug, Default)]
pub struct ResizeAdapter {
    last: Option<(u32, u32, u32)>,
}

impl ResizeAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last applied `(width, height)`.
    pub fn current(&self) -> Option<(u32, u32)> {
        self.last.map(|(w, h, _)| (w, h))
    }

    /// Resize surface and camera to `width x height` CSS pixels.
    /// Returns true if anything changed (the caller should redraw).
    /// A zero dimension means the container is not laid out yet and is ignored.
    pub fn apply<S: RenderSurface + ?Sized>(
        &mut self,
        width: u32,
        height: u32,
        pixel_ratio: f32,
        camera: &mut PerspectiveCamera,
        surface: &mut S,
    ) -> bool {
        if width == 0 || height == 0 {
            log::debug!("resize to {}x{} ignored: container not laid out", width, height);
            return false;
        }
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 { pixel_ratio } else { 1.0 };
        let key = (width, height, pixel_ratio.to_bits());
        if self.last == Some(key) {
            return false;
        }
        surface.set_size(width, height, pixel_ratio);
        camera.set_aspect(width, height);
        self.last = Some(key);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::CameraConfig;
    use crate::renderer::surface::HeadlessSurface;

    fn setup() -> (ResizeAdapter, PerspectiveCamera, HeadlessSurface) {
        (
            ResizeAdapter::new(),
            PerspectiveCamera::new(&CameraConfig::default(), 1.0),
            HeadlessSurface::new(0, 0),
        )
    }

    #[test]
    fn resize_updates_surface_and_aspect() {
        let (mut adapter, mut camera, mut surface) = setup();
        assert!(adapter.apply(1280, 720, 1.0, &mut camera, &mut surface));
        assert_eq!(surface.size(), (1280, 720));
        assert!((camera.aspect - 1280.0 / 720.0).abs() < 1e-6);
        assert_eq!(adapter.current(), Some((1280, 720)));
    }

    #[test]
    fn repeated_resize_is_idempotent() {
        let (mut adapter, mut camera, mut surface) = setup();
        adapter.apply(1280, 720, 2.0, &mut camera, &mut surface);
        let size = surface.size();
        let aspect = camera.aspect;
        assert!(!adapter.apply(1280, 720, 2.0, &mut camera, &mut surface));
        assert_eq!(surface.size(), size);
        assert_eq!(camera.aspect, aspect);
        assert_eq!(surface.resizes(), 1);
    }

    #[test]
    fn pixel_ratio_change_resizes() {
        let (mut adapter, mut camera, mut surface) = setup();
        adapter.apply(800, 600, 1.0, &mut camera, &mut surface);
        assert!(adapter.apply(800, 600, 2.0, &mut camera, &mut surface));
        assert_eq!(surface.pixel_ratio(), 2.0);
    }

    #[test]
    fn zero_dimension_is_ignored() {
        let (mut adapter, mut camera, mut surface) = setup();
        assert!(!adapter.apply(0, 600, 1.0, &mut camera, &mut surface));
        assert!(!adapter.apply(800, 0, 1.0, &mut camera, &mut surface));
        assert_eq!(surface.resizes(), 0);
        assert_eq!(camera.aspect, 1.0);
        assert!(adapter.current().is_none());
    }
}
