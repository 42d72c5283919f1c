use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;
use crate::api::types::Color;

/// One guide ring and the bodies that orbit on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingSpec {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Body color; drawn from the seeded RNG when absent.
    #[serde(default)]
    pub body_color: Option<Color>,
    #[serde(default = "default_body_radius")]
    pub body_radius: f32,
    /// Bodies sharing this ring (1 = one planet per ring).
    #[serde(default = "default_bodies")]
    pub bodies: u32,
}

impl RingSpec {
    pub fn new(inner_radius: f32, outer_radius: f32, body_radius: f32) -> Self {
        Self {
            inner_radius,
            outer_radius,
            body_color: None,
            body_radius,
            bodies: 1,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.body_color = Some(color);
        self
    }

    pub fn with_bodies(mut self, bodies: u32) -> Self {
        self.bodies = bodies;
        self
    }
}

/// Parametric path followed by orbiting bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum OrbitModel {
    /// Circular orbits in the z=0 plane.
    Planar,
    /// Circular orbits whose phase lags with ring index (spiral arms),
    /// in a plane tilted about X.
    #[serde(rename_all = "camelCase")]
    Spiral { arm_twist: f32, tilt: f32 },
}

impl Default for OrbitModel {
    fn default() -> Self {
        OrbitModel::Planar
    }
}

/// Background point cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StarFieldConfig {
    pub count: u32,
    /// Half-extent of the cube the stars are scattered in.
    pub extent: f32,
    pub point_size: f32,
    pub color: Color,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            extent: 1000.0,
            point_size: 0.01,
            color: Color::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CentralBodyConfig {
    pub radius: f32,
    pub color: Color,
}

impl Default for CentralBodyConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            color: Color::from_hex(0xffff00),
        }
    }
}

/// Fixed per-tick rotations of the decorative bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AmbientSpin {
    /// Radians per tick about Y.
    pub star_field: f32,
    /// Radians per tick about Z.
    pub ring_guides: f32,
}

impl Default for AmbientSpin {
    fn default() -> Self {
        Self {
            star_field: 0.0005,
            ring_guides: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 0.0, 100.0),
        }
    }
}

/// Orbit-style navigation around the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControlsConfig {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.05,
            rotate_speed: 0.3,
            zoom_speed: 1.0,
            min_distance: 10.0,
            max_distance: 800.0,
        }
    }
}

/// Everything the scene bootstrap needs. Every field has a default, so
/// `{}` is a valid document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneConfig {
    pub rings: Vec<RingSpec>,
    pub ring_radius_step: f32,
    /// Revolutions per second contributed by each ring index.
    pub angular_speed: f32,
    pub orbit_model: OrbitModel,
    pub star_field: StarFieldConfig,
    pub central_body: CentralBodyConfig,
    pub ring_color: Color,
    pub clear_color: Color,
    pub ambient_spin: AmbientSpin,
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
    /// Seed for star positions and unassigned body colors.
    pub seed: u64,
}

pub const DEFAULT_RING_COUNT: u32 = 4;
pub const DEFAULT_RING_STEP: f32 = 20.0;
pub const DEFAULT_RING_WIDTH: f32 = 1.0;
/// Most stars a star field may hold.
pub const MAX_STARS: u32 = 1_000_000;
/// Most orbiting bodies a scene may hold, summed over all rings.
pub const MAX_ORBITING_BODIES: u32 = 10_000;
pub const DEFAULT_BODY_RADIUS: f32 = 2.0;

fn default_body_radius() -> f32 {
    DEFAULT_BODY_RADIUS
}

fn default_bodies() -> u32 {
    1
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::evenly_spaced(
            DEFAULT_RING_COUNT,
            DEFAULT_RING_STEP,
            DEFAULT_RING_WIDTH,
            DEFAULT_BODY_RADIUS,
        )
    }
}

impl SceneConfig {
    /// Rings at `step, 2*step, ...` each `width` wide, one body per ring.
    pub fn evenly_spaced(count: u32, step: f32, width: f32, body_radius: f32) -> Self {
        let rings = (1..=count)
            .map(|i| {
                let inner = i as f32 * step;
                RingSpec::new(inner, inner + width, body_radius)
            })
            .collect();
        Self {
            rings,
            ring_radius_step: step,
            angular_speed: 0.1,
            orbit_model: OrbitModel::Planar,
            star_field: StarFieldConfig::default(),
            central_body: CentralBodyConfig::default(),
            ring_color: Color::BLACK,
            clear_color: Color::from_hex(0x1a2b4c),
            ambient_spin: AmbientSpin::default(),
            camera: CameraConfig::default(),
            controls: ControlsConfig::default(),
            seed: 42,
        }
    }

    /// Parse a configuration from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the bootstrap relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rings.is_empty() {
            return Err(ConfigError::NoRings);
        }
        if !(self.ring_radius_step > 0.0) {
            return Err(ConfigError::NonPositive { field: "ringRadiusStep" });
        }
        if !(self.camera.fov > 0.0) {
            return Err(ConfigError::NonPositive { field: "camera.fov" });
        }
        if !(self.camera.near > 0.0) || !(self.camera.far > self.camera.near) {
            return Err(ConfigError::NonPositive { field: "camera.far - camera.near" });
        }
        if !(self.central_body.radius > 0.0) {
            return Err(ConfigError::NonPositive { field: "centralBody.radius" });
        }
        if !self.camera.fov.is_finite() || self.camera.fov >= 180.0 {
            return Err(ConfigError::OutOfRange { field: "camera.fov", value: self.camera.fov });
        }
        if !self.camera.far.is_finite() {
            return Err(ConfigError::OutOfRange { field: "camera.far", value: self.camera.far });
        }
        if !self.camera.position.is_finite() {
            return Err(ConfigError::OutOfRange { field: "camera.position", value: self.camera.position.length() });
        }
        finite("angularSpeed", self.angular_speed)?;
        finite("ambientSpin.starField", self.ambient_spin.star_field)?;
        finite("ambientSpin.ringGuides", self.ambient_spin.ring_guides)?;
        self.validate_controls()?;
        self.validate_star_field()?;

        for (index, ring) in self.rings.iter().enumerate() {
            if !(ring.inner_radius > 0.0) || !(ring.outer_radius >= ring.inner_radius) {
                return Err(ConfigError::InvalidRing {
                    index,
                    inner: ring.inner_radius,
                    outer: ring.outer_radius,
                });
            }
            if !(ring.body_radius > 0.0) {
                return Err(ConfigError::InvalidBodyRadius {
                    index,
                    radius: ring.body_radius,
                });
            }
            if ring.bodies == 0 {
                return Err(ConfigError::NonPositive { field: "rings[].bodies" });
            }
            if ring.bodies > MAX_ORBITING_BODIES {
                return Err(ConfigError::TooMany {
                    field: "rings[].bodies",
                    count: ring.bodies as u64,
                    limit: MAX_ORBITING_BODIES as u64,
                });
            }

            let on_grid = (index + 1) as f32 * self.ring_radius_step;
            if (ring.inner_radius - on_grid).abs() > 1e-3 {
                log::warn!(
                    "ring {}: inner radius {} is off the {} grid; bodies orbit at {}",
                    index,
                    ring.inner_radius,
                    self.ring_radius_step,
                    on_grid
                );
            }
        }

        let total: u64 = self.rings.iter().map(|r| r.bodies as u64).sum();
        if total > MAX_ORBITING_BODIES as u64 {
            return Err(ConfigError::TooMany {
                field: "rings[].bodies (total)",
                count: total,
                limit: MAX_ORBITING_BODIES as u64,
            });
        }
        Ok(())
    }

    fn validate_controls(&self) -> Result<(), ConfigError> {
        let c = &self.controls;
        if !(c.min_distance > 0.0) || !(c.max_distance >= c.min_distance) || !c.max_distance.is_finite() {
            return Err(ConfigError::InvalidDistanceRange {
                min: c.min_distance,
                max: c.max_distance,
            });
        }
        if !(c.damping_factor > 0.0 && c.damping_factor <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "controls.dampingFactor",
                value: c.damping_factor,
            });
        }
        finite("controls.rotateSpeed", c.rotate_speed)?;
        finite("controls.zoomSpeed", c.zoom_speed)?;
        Ok(())
    }

    fn validate_star_field(&self) -> Result<(), ConfigError> {
        let s = &self.star_field;
        if s.count > MAX_STARS {
            return Err(ConfigError::TooMany {
                field: "starField.count",
                count: s.count as u64,
                limit: MAX_STARS as u64,
            });
        }
        if !(s.extent > 0.0) || !s.extent.is_finite() {
            return Err(ConfigError::OutOfRange { field: "starField.extent", value: s.extent });
        }
        if !(s.point_size > 0.0) || !s.point_size.is_finite() {
            return Err(ConfigError::OutOfRange { field: "starField.pointSize", value: s.point_size });
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}
