//! Scene bootstrap: turns a `SceneConfig` into the initial scene graph.

use glam::Vec3;

use crate::api::config::{SceneConfig, MAX_ORBITING_BODIES};
use crate::api::types::BodyId;
use crate::components::body::{Body, BodyRole, BodyShape, Orbit};
use crate::components::ring::Ring;
use crate::core::rng::Rng;
use crate::core::scene::SceneGraph;
use crate::systems::orbit::orbit_position;

/// Scatter `count` points uniformly in the cube `[-extent, extent)^3`.
pub fn scatter_stars(rng: &mut Rng, count: u32, extent: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.range(-extent, extent),
                rng.range(-extent, extent),
                rng.range(-extent, extent),
            )
        })
        .collect()
}

/// Build the scene at time zero: star field, central body, then one guide
/// and its orbiting bodies per ring, each body already on its orbit.
pub fn build_scene(config: &SceneConfig) -> SceneGraph {
    // Bounded by `validate`; saturating so an unvalidated config cannot wrap.
    let body_count = config
        .rings
        .iter()
        .map(|r| r.bodies as usize)
        .fold(0usize, usize::saturating_add)
        .min(MAX_ORBITING_BODIES as usize);
    let mut scene = SceneGraph::with_capacity(2 + config.rings.len().min(MAX_ORBITING_BODIES as usize) + body_count);
    let mut rng = Rng::new(config.seed);

    let stars = &config.star_field;
    scene.spawn(
        Body::new(
            BodyId(0),
            BodyRole::StarField,
            BodyShape::Points {
                positions: scatter_stars(&mut rng, stars.count, stars.extent),
                size: stars.point_size,
            },
        )
        .with_tag("stars")
        .with_color(stars.color),
    );

    scene.spawn(
        Body::new(
            BodyId(0),
            BodyRole::Central,
            BodyShape::Sphere { radius: config.central_body.radius },
        )
        .with_tag("sun")
        .with_color(config.central_body.color),
    );

    for (i, ring_spec) in config.rings.iter().enumerate() {
        let ring_index = i as u32 + 1;
        let ring = Ring::new(ring_spec.inner_radius, ring_spec.outer_radius);

        scene.spawn(
            Body::new(
                BodyId(0),
                BodyRole::RingGuide,
                BodyShape::Annulus { inner: ring.inner_radius, outer: ring.outer_radius },
            )
            .with_tag(format!("ring-{ring_index}"))
            .with_color(config.ring_color),
        );

        let radius = ring_index as f32 * config.ring_radius_step;
        let speed_factor = ring_index as f32 * config.angular_speed;
        for slot in 0..ring_spec.bodies {
            let orbit = Orbit::new(ring_index, ring, radius, speed_factor).with_slot(slot, ring_spec.bodies);
            let color = ring_spec.body_color.unwrap_or_else(|| rng.hex_color());
            let tag = if ring_spec.bodies == 1 {
                format!("planet-{ring_index}")
            } else {
                format!("planet-{ring_index}-{slot}")
            };
            scene.spawn(
                Body::new(BodyId(0), BodyRole::Orbiting, BodyShape::Sphere { radius: ring_spec.body_radius })
                    .with_tag(tag)
                    .with_pos(orbit_position(config.orbit_model, &orbit, 0.0))
                    .with_color(color)
                    .with_orbit(orbit),
            );
        }
    }

    log::debug!(
        "scene built: {} bodies, {} orbiting, {} stars",
        scene.len(),
        scene.orbiting().len(),
        stars.count
    );
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::RingSpec;
    use crate::api::types::Color;

    fn small_config() -> SceneConfig {
        let mut config = SceneConfig::default();
        config.star_field.count = 100;
        config
    }

    #[test]
    fn default_scene_layout() {
        let scene = build_scene(&small_config());
        // stars + sun + 4 guides + 4 planets
        assert_eq!(scene.len(), 10);
        assert_eq!(scene.orbiting().len(), 4);
        assert_eq!(scene.ring_guides().len(), 4);
        assert!(scene.star_field().is_some());
        assert_eq!(scene.get(scene.central().unwrap()).unwrap().radius(), 10.0);
    }

    #[test]
    fn bodies_start_on_their_rings() {
        let scene = build_scene(&small_config());
        for (i, id) in scene.orbiting().iter().enumerate() {
            let body = scene.get(*id).unwrap();
            let expected = (i + 1) as f32 * 20.0;
            assert!((body.pos - Vec3::new(expected, 0.0, 0.0)).length() < 1e-4);
            assert_eq!(body.orbit.unwrap().ring_index, i as u32 + 1);
            assert!(!body.is_dragging());
        }
    }

    #[test]
    fn stars_stay_inside_extent() {
        let scene = build_scene(&small_config());
        let stars = scene.get(scene.star_field().unwrap()).unwrap();
        match &stars.shape {
            BodyShape::Points { positions, size } => {
                assert_eq!(positions.len(), 100);
                assert_eq!(*size, 0.01);
                for p in positions {
                    assert!(p.abs().max_element() <= 1000.0);
                }
            }
            other => panic!("expected points, got {:?}", other),
        }
    }

    #[test]
    fn same_seed_same_scene() {
        let a = build_scene(&small_config());
        let b = build_scene(&small_config());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.color, y.color);
            assert_eq!(x.shape, y.shape);
        }
    }

    #[test]
    fn explicit_colors_are_kept() {
        let mut config = small_config();
        config.rings[0] = RingSpec::new(20.0, 21.0, 2.0).with_color(Color::new(1.0, 0.0, 0.0));
        let scene = build_scene(&config);
        let first = scene.get(scene.on_ring(1)[0]).unwrap();
        assert_eq!(first.color, Color::new(1.0, 0.0, 0.0));
        assert_eq!(first.tag, "planet-1");
    }

    #[test]
    fn clustered_ring_hosts_many_bodies() {
        let mut config = small_config();
        config.rings[1] = RingSpec::new(40.0, 41.0, 1.0).with_bodies(3);
        let scene = build_scene(&config);
        let on_two = scene.on_ring(2);
        assert_eq!(on_two.len(), 3);
        assert_eq!(scene.orbiting().len(), 6);
        for id in on_two {
            let body = scene.get(*id).unwrap();
            assert!((body.pos.length() - 40.0).abs() < 1e-3);
            assert_eq!(body.orbit.unwrap().slots, 3);
        }
        assert_eq!(scene.get(on_two[2]).unwrap().tag, "planet-2-2");
    }
}
