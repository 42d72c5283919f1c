//! Orbit-style camera navigation with exponential damping.

use std::f32::consts::{PI, TAU};
use glam::Vec3;

use crate::api::config::ControlsConfig;
use crate::renderer::camera::PerspectiveCamera;

/// Keeps the polar angle away from the poles so `look_at` stays defined.
const POLAR_EPS: f32 = 1e-6;
/// Base multiplicative dolly step per wheel notch.
const DOLLY_BASE: f32 = 0.95;

/// Rotates and dollies the camera around a target on a sphere.
///
/// Pointer input accumulates into pending deltas; `update` applies them
/// once per tick. With damping on, each update applies `damping_factor`
/// of the pending rotation and decays the rest, so motion eases out.
#[derive(Debug, Clone)]
pub struct NavigationControls {
    enabled: bool,
    pub target: Vec3,
    config: ControlsConfig,
    theta_delta: f32,
    phi_delta: f32,
    scale: f32,
}

/// Spherical coordinates about the Y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Spherical {
    radius: f32,
    /// Polar angle from +Y.
    phi: f32,
    /// Azimuth around Y, measured from +Z toward +X.
    theta: f32,
}

impl Spherical {
    fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self { radius: 0.0, phi: 0.0, theta: 0.0 };
        }
        Self {
            radius,
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
            theta: v.x.atan2(v.z),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }
}

impl NavigationControls {
    pub fn new(config: &ControlsConfig) -> Self {
        Self {
            enabled: true,
            target: Vec3::ZERO,
            config: *config,
            theta_delta: 0.0,
            phi_delta: 0.0,
            scale: 1.0,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Queue a rotation from a pointer delta in pixels.
    /// Returns false when navigation is disabled.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) -> bool {
        if !self.enabled || viewport_height <= 0.0 {
            return false;
        }
        let k = TAU * self.config.rotate_speed / viewport_height;
        self.theta_delta -= dx * k;
        self.phi_delta -= dy * k;
        true
    }

    /// Queue a dolly from a wheel delta: positive moves away from the target.
    pub fn dolly(&mut self, delta: f32) -> bool {
        if !self.enabled || delta == 0.0 {
            return false;
        }
        let step = DOLLY_BASE.powf(self.config.zoom_speed);
        if delta > 0.0 {
            self.scale /= step;
        } else {
            self.scale *= step;
        }
        true
    }

    /// Apply pending motion to the camera. Returns true if the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let offset = camera.position - self.target;
        let mut s = Spherical::from_offset(offset);

        if self.config.enable_damping {
            s.theta += self.theta_delta * self.config.damping_factor;
            s.phi += self.phi_delta * self.config.damping_factor;
        } else {
            s.theta += self.theta_delta;
            s.phi += self.phi_delta;
        }
        s.phi = s.phi.clamp(POLAR_EPS, PI - POLAR_EPS);
        s.radius = (s.radius * self.scale).clamp(self.config.min_distance, self.config.max_distance);

        let new_position = self.target + s.to_offset();
        let moved = (new_position - camera.position).length_squared() > 1e-8;
        camera.position = new_position;
        camera.target = self.target;

        if self.config.enable_damping {
            self.theta_delta *= 1.0 - self.config.damping_factor;
            self.phi_delta *= 1.0 - self.config.damping_factor;
        } else {
            self.theta_delta = 0.0;
            self.phi_delta = 0.0;
        }
        self.scale = 1.0;
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::CameraConfig;

    fn setup(damping: bool) -> (NavigationControls, PerspectiveCamera) {
        let config = ControlsConfig {
            enable_damping: damping,
            ..ControlsConfig::default()
        };
        let camera = PerspectiveCamera::new(&CameraConfig::default(), 1.0);
        (NavigationControls::new(&config), camera)
    }

    #[test]
    fn idle_update_keeps_camera() {
        let (mut controls, mut camera) = setup(true);
        let before = camera.position;
        assert!(!controls.update(&mut camera));
        assert!((camera.position - before).length() < 1e-3);
    }

    #[test]
    fn rotate_without_damping_applies_at_once() {
        let (mut controls, mut camera) = setup(false);
        // A full viewport-height drag with rotate speed 0.3 turns 0.3 rev.
        assert!(controls.rotate(-1000.0, 0.0, 1000.0));
        controls.update(&mut camera);
        let expected = 0.3 * TAU;
        let theta = camera.position.x.atan2(camera.position.z);
        let wrapped = (theta - expected).rem_euclid(TAU);
        assert!(wrapped < 1e-3 || wrapped > TAU - 1e-3, "theta {theta}");
        assert!((camera.position.length() - 100.0).abs() < 1e-2);
        assert!(!controls.update(&mut camera));
    }

    #[test]
    fn damping_eases_out() {
        let (mut controls, mut camera) = setup(true);
        controls.rotate(-500.0, 0.0, 1000.0);
        let mut last_step = f32::MAX;
        let mut prev = camera.position;
        for _ in 0..20 {
            assert!(controls.update(&mut camera));
            let step = (camera.position - prev).length();
            assert!(step < last_step + 1e-4, "step grew: {step} > {last_step}");
            last_step = step;
            prev = camera.position;
        }
        assert!((camera.position.length() - 100.0).abs() < 1e-2);
    }

    #[test]
    fn disabled_controls_ignore_input() {
        let (mut controls, mut camera) = setup(false);
        controls.set_enabled(false);
        assert!(!controls.rotate(300.0, 300.0, 600.0));
        assert!(!controls.dolly(1.0));
        let before = camera.position;
        controls.update(&mut camera);
        assert!((camera.position - before).length() < 1e-3);
    }

    #[test]
    fn dolly_respects_distance_limits() {
        let (mut controls, mut camera) = setup(false);
        for _ in 0..200 {
            controls.dolly(1.0);
            controls.update(&mut camera);
        }
        assert!((camera.position.length() - 800.0).abs() < 1e-2);
        for _ in 0..400 {
            controls.dolly(-1.0);
            controls.update(&mut camera);
        }
        assert!((camera.position.length() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn polar_angle_never_flips_over_pole() {
        let (mut controls, mut camera) = setup(false);
        controls.rotate(0.0, 100_000.0, 100.0);
        controls.update(&mut camera);
        assert!(camera.position.is_finite());
        assert!(camera.position.y > 99.0, "{:?}", camera.position);
    }
}
