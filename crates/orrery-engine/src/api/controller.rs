use glam::{Vec2, Vec3};

use crate::api::config::SceneConfig;
use crate::api::error::ConfigError;
use crate::api::types::FrameStatus;
use crate::core::bootstrap::build_scene;
use crate::core::clock::Clock;
use crate::core::scene::SceneGraph;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::controls::NavigationControls;
use crate::renderer::instance::RenderBuffer;
use crate::renderer::traits::{FrameData, RenderSurface};
use crate::systems::drag::InteractionHandler;
use crate::systems::gesture::{GestureAction, GestureTracker};
use crate::systems::orbit::{apply_ambient_spin, update_orbits};
use crate::systems::render::{build_render_buffer, star_points};
use crate::systems::resize::ResizeAdapter;

/// Owns one orbital scene from mount to teardown.
///
/// The host drives it: `tick` once per display refresh for as long as it
/// returns `FrameStatus::Continue`, `push_input` from pointer handlers,
/// `resize` from the container observer, `teardown` on unmount.
/// Everything runs on the caller's thread.
pub struct OrbitalSceneController<S: RenderSurface> {
    config: SceneConfig,
    scene: SceneGraph,
    clock: Clock,
    camera: PerspectiveCamera,
    controls: NavigationControls,
    interaction: InteractionHandler,
    gestures: GestureTracker,
    resize: ResizeAdapter,
    input: InputQueue,
    render_buffer: RenderBuffer,
    surface: S,
    frame: u64,
    running: bool,
}

impl<S: RenderSurface> OrbitalSceneController<S> {
    /// Validate the config, build the scene at time zero, size the surface
    /// to the container and draw the first frame.
    pub fn mount(
        config: SceneConfig,
        surface: S,
        width: u32,
        height: u32,
        pixel_ratio: f32,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let scene = build_scene(&config);
        let aspect = if width > 0 && height > 0 { width as f32 / height as f32 } else { 1.0 };
        let camera = PerspectiveCamera::new(&config.camera, aspect);
        let controls = NavigationControls::new(&config.controls);
        let render_buffer = RenderBuffer::with_capacity(scene.len());

        let mut controller = Self {
            config,
            scene,
            clock: Clock::new(),
            camera,
            controls,
            interaction: InteractionHandler::new(),
            gestures: GestureTracker::new(),
            resize: ResizeAdapter::new(),
            input: InputQueue::new(),
            render_buffer,
            surface,
            frame: 0,
            running: true,
        };
        controller
            .resize
            .apply(width, height, pixel_ratio, &mut controller.camera, &mut controller.surface);
        controller.redraw();

        log::info!(
            "orbital scene mounted on {} surface: {} bodies, {} orbiting",
            controller.surface.backend(),
            controller.scene.len(),
            controller.scene.orbiting().len()
        );
        Ok(controller)
    }

    /// Queue an input event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        if !self.running {
            log::debug!("input {:?} after teardown ignored", event);
            return;
        }
        self.input.push(event);
    }

    /// Run one frame: apply queued input, settle navigation, advance the
    /// clock, move the bodies and redraw.
    pub fn tick(&mut self, dt: f32) -> FrameStatus {
        if !self.running {
            return FrameStatus::Stopped;
        }

        for event in self.input.drain() {
            self.handle_event(event);
        }

        self.controls.update(&mut self.camera);

        self.clock.advance(dt);
        apply_ambient_spin(&mut self.scene, self.config.ambient_spin);
        update_orbits(&mut self.scene, self.config.orbit_model, self.clock.elapsed());

        self.redraw();
        FrameStatus::Continue
    }

    /// Container resized. Redraws only when the size actually changed.
    pub fn resize(&mut self, width: u32, height: u32, pixel_ratio: f32) -> bool {
        if !self.running {
            return false;
        }
        let changed = self
            .resize
            .apply(width, height, pixel_ratio, &mut self.camera, &mut self.surface);
        if changed {
            self.redraw();
        }
        changed
    }

    /// Stop the loop and release the surface. Gesture handling is detached
    /// first, so a drag in flight is cancelled with its body back on its ring.
    pub fn teardown(&mut self) {
        if !self.running {
            return;
        }
        self.input.clear();
        self.gestures.cancel();
        self.interaction.detach(&mut self.scene, &mut self.controls);
        self.running = false;
        self.render_buffer.clear();
        self.surface.dispose();
        log::info!(
            "orbital scene torn down after {} ticks ({} frames drawn)",
            self.clock.ticks(),
            self.frame
        );
    }

    fn handle_event(&mut self, event: InputEvent) {
        let action = match event {
            InputEvent::PointerDown { x, y } => {
                // A press while a drag is open means its pointer-up was lost.
                if let Some(stale) = self.gestures.dragging() {
                    log::debug!("press during drag on body {:?}: releasing it", stale);
                    self.interaction.drag_end(&mut self.scene, &mut self.controls, stale);
                }
                self.gestures.pointer_down(Vec2::new(x, y), &self.scene, &self.camera)
            }
            InputEvent::PointerMove { x, y } => {
                self.gestures
                    .pointer_move(Vec2::new(x, y), &self.camera, self.surface.size())
            }
            InputEvent::PointerUp { .. } => self.gestures.pointer_up(),
            InputEvent::Wheel { delta } => {
                self.controls.dolly(delta);
                GestureAction::None
            }
            InputEvent::DragStart { body } => GestureAction::DragStart(body),
            InputEvent::Drag { body, x, y, z } => GestureAction::Drag(body, Vec3::new(x, y, z)),
            InputEvent::DragEnd { body } => GestureAction::DragEnd(body),
        };

        match action {
            GestureAction::None => {}
            GestureAction::DragStart(body) => {
                self.interaction.drag_start(&mut self.scene, &mut self.controls, body);
            }
            GestureAction::Drag(body, proposed) => {
                self.interaction.drag(&mut self.scene, body, proposed);
            }
            GestureAction::DragEnd(body) => {
                self.interaction.drag_end(&mut self.scene, &mut self.controls, body);
            }
            GestureAction::Rotate { dx, dy } => {
                let (_, height) = self.surface.size();
                self.controls.rotate(dx, dy, height as f32);
            }
        }
    }

    fn redraw(&mut self) {
        build_render_buffer(self.scene.iter(), &mut self.render_buffer);
        let frame = FrameData {
            instances: &self.render_buffer.instances,
            stars: star_points(&self.scene),
            camera: self.camera.uniform(),
            clear_color: self.config.clear_color,
            frame: self.frame,
        };
        self.surface.render(&frame);
        self.frame += 1;
    }

    // ---- Accessors ----

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn controls(&self) -> &NavigationControls {
        &self.controls
    }

    pub fn interaction(&self) -> &InteractionHandler {
        &self.interaction
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    pub fn stars(&self) -> &[Vec3] {
        star_points(&self.scene)
    }

    /// Frames drawn so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::RingSpec;
    use crate::api::types::BodyId;
    use crate::renderer::surface::HeadlessSurface;

    const DT: f32 = 1.0 / 60.0;

    fn config() -> SceneConfig {
        let mut config = SceneConfig::default();
        config.star_field.count = 64;
        config
    }

    fn mount() -> OrbitalSceneController<HeadlessSurface> {
        OrbitalSceneController::mount(config(), HeadlessSurface::new(0, 0), 800, 600, 1.0).unwrap()
    }

    fn planet(ctl: &OrbitalSceneController<HeadlessSurface>, ring_index: u32) -> BodyId {
        ctl.scene().on_ring(ring_index)[0]
    }

    fn pos(ctl: &OrbitalSceneController<HeadlessSurface>, id: BodyId) -> Vec3 {
        ctl.scene().get(id).unwrap().pos
    }

    #[test]
    fn mount_sizes_surface_and_draws_first_frame() {
        let ctl = mount();
        assert_eq!(ctl.surface().size(), (800, 600));
        assert!((ctl.camera().aspect - 800.0 / 600.0).abs() < 1e-6);
        assert_eq!(ctl.surface().frames_rendered(), 1);
        assert_eq!(ctl.render_buffer().instance_count() as usize, ctl.scene().len());
        assert_eq!(ctl.stars().len(), 64);
        assert_eq!(ctl.clock().elapsed(), 0.0);
        assert!((pos(&ctl, planet(&ctl, 1)) - Vec3::new(20.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn invalid_config_fails_to_mount() {
        let mut bad = config();
        bad.rings = vec![RingSpec::new(-1.0, 2.0, 1.0)];
        let result = OrbitalSceneController::mount(bad, HeadlessSurface::new(0, 0), 800, 600, 1.0);
        assert!(matches!(result, Err(ConfigError::InvalidRing { .. })));
    }

    #[test]
    fn ticks_keep_bodies_on_their_rings() {
        let mut ctl = mount();
        for _ in 0..240 {
            assert_eq!(ctl.tick(DT), FrameStatus::Continue);
            for i in 1..=4 {
                let d = pos(&ctl, planet(&ctl, i)).length();
                assert!((d - i as f32 * 20.0).abs() < 1e-3, "ring {i}: {d}");
            }
        }
        assert_eq!(ctl.surface().frames_rendered(), 241);
        assert!((ctl.clock().elapsed() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn ambient_spin_turns_star_field_each_tick() {
        let mut ctl = mount();
        for _ in 0..10 {
            ctl.tick(DT);
        }
        let stars = ctl.scene().star_field().unwrap();
        let rot = ctl.scene().get(stars).unwrap().rotation.y;
        assert!((rot - 0.005).abs() < 1e-6, "rotation {rot}");
    }

    #[test]
    fn dragged_body_is_held_and_released() {
        let mut ctl = mount();
        let id = planet(&ctl, 1);

        ctl.push_input(InputEvent::DragStart { body: id });
        ctl.push_input(InputEvent::Drag { body: id, x: 5.0, y: 0.0, z: 0.0 });
        ctl.tick(DT);
        assert!(!ctl.controls().enabled());
        let held = pos(&ctl, id);
        assert!((held - Vec3::new(22.0, 0.0, 0.0)).length() < 1e-4);

        for _ in 0..30 {
            ctl.tick(DT);
            assert_eq!(pos(&ctl, id), held);
        }

        ctl.push_input(InputEvent::DragEnd { body: id });
        ctl.tick(DT);
        assert!(ctl.controls().enabled());
        assert!(!ctl.scene().get(id).unwrap().is_dragging());
        assert!((pos(&ctl, id).length() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn other_bodies_keep_orbiting_during_a_drag() {
        let mut ctl = mount();
        let dragged = planet(&ctl, 1);
        let free = planet(&ctl, 2);
        ctl.push_input(InputEvent::DragStart { body: dragged });
        ctl.tick(DT);
        let before = pos(&ctl, free);
        ctl.tick(DT);
        assert_ne!(pos(&ctl, free), before);
    }

    #[test]
    fn pointer_drag_end_to_end() {
        let mut ctl = mount();
        let id = planet(&ctl, 1);
        let on_body = ctl.camera().project(pos(&ctl, id)).truncate();
        let inside = ctl.camera().project(Vec3::new(5.0, 0.0, 0.0)).truncate();

        ctl.push_input(InputEvent::PointerDown { x: on_body.x, y: on_body.y });
        ctl.push_input(InputEvent::PointerMove { x: inside.x, y: inside.y });
        ctl.tick(0.0);
        assert!(ctl.interaction().is_dragging(id));
        let p = pos(&ctl, id);
        assert!((p.length() - 22.0).abs() < 1e-3, "{p:?}");

        ctl.push_input(InputEvent::PointerUp { x: inside.x, y: inside.y });
        ctl.tick(0.0);
        assert!(!ctl.interaction().is_dragging(id));
        assert!((pos(&ctl, id) - Vec3::new(20.0, 0.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn second_press_releases_the_first_drag() {
        let mut ctl = mount();
        let a = planet(&ctl, 1);
        let b = planet(&ctl, 2);
        let on_a = ctl.camera().project(pos(&ctl, a)).truncate();
        let on_b = ctl.camera().project(pos(&ctl, b)).truncate();

        ctl.push_input(InputEvent::PointerDown { x: on_a.x, y: on_a.y });
        ctl.tick(0.0);
        assert!(ctl.interaction().is_dragging(a));

        ctl.push_input(InputEvent::PointerDown { x: on_b.x, y: on_b.y });
        ctl.tick(0.0);
        assert!(!ctl.interaction().is_dragging(a));
        assert!(!ctl.scene().get(a).unwrap().is_dragging());
        assert!(ctl.interaction().is_dragging(b));
        assert!(!ctl.controls().enabled());

        ctl.push_input(InputEvent::PointerUp { x: on_b.x, y: on_b.y });
        for _ in 0..10 {
            ctl.tick(DT);
        }
        assert!(ctl.interaction().active().is_empty());
        assert!(ctl.controls().enabled());
        assert!(!ctl.scene().get(b).unwrap().is_dragging());
        let p = pos(&ctl, a);
        assert!((p.length() - 20.0).abs() < 1e-3);
        assert!(p.y > 0.0, "ring-1 body resumed orbiting: {p:?}");
    }

    #[test]
    fn empty_space_drag_orbits_camera() {
        let mut ctl = mount();
        let before = ctl.camera().position;
        ctl.push_input(InputEvent::PointerDown { x: 0.8, y: 0.8 });
        ctl.push_input(InputEvent::PointerMove { x: 0.2, y: 0.8 });
        ctl.push_input(InputEvent::PointerUp { x: 0.2, y: 0.8 });
        ctl.tick(DT);
        assert!((ctl.camera().position - before).length() > 1e-3);
        assert!((ctl.camera().position.length() - 100.0).abs() < 1e-2);
    }

    #[test]
    fn wheel_is_ignored_while_dragging() {
        let mut ctl = mount();
        let id = planet(&ctl, 1);
        ctl.push_input(InputEvent::DragStart { body: id });
        ctl.push_input(InputEvent::Wheel { delta: 1.0 });
        ctl.tick(DT);
        assert!((ctl.camera().position.length() - 100.0).abs() < 1e-3);

        ctl.push_input(InputEvent::DragEnd { body: id });
        ctl.push_input(InputEvent::Wheel { delta: 1.0 });
        ctl.tick(DT);
        assert!(ctl.camera().position.length() > 100.0);
    }

    #[test]
    fn resize_is_idempotent() {
        let mut ctl = mount();
        assert!(ctl.resize(1024, 768, 2.0));
        let frames = ctl.surface().frames_rendered();
        assert!(!ctl.resize(1024, 768, 2.0));
        assert_eq!(ctl.surface().frames_rendered(), frames);
        assert_eq!(ctl.surface().size(), (1024, 768));
        assert_eq!(ctl.surface().resizes(), 2);
    }

    #[test]
    fn teardown_stops_loop_and_releases_surface() {
        let mut ctl = mount();
        ctl.tick(DT);
        ctl.teardown();
        assert!(!ctl.is_running());
        assert!(ctl.surface().is_disposed());
        assert_eq!(ctl.render_buffer().instance_count(), 0);

        let elapsed = ctl.clock().elapsed();
        assert_eq!(ctl.tick(DT), FrameStatus::Stopped);
        assert!(!ctl.tick(DT).is_running());
        assert_eq!(ctl.clock().elapsed(), elapsed);
        assert!(!ctl.resize(640, 480, 1.0));
        ctl.push_input(InputEvent::Wheel { delta: 1.0 });
        ctl.teardown();
    }

    #[test]
    fn teardown_cancels_drag_in_flight() {
        let mut ctl = mount();
        let id = planet(&ctl, 2);
        ctl.push_input(InputEvent::DragStart { body: id });
        ctl.push_input(InputEvent::Drag { body: id, x: 0.0, y: 5.0, z: 0.0 });
        ctl.tick(DT);
        ctl.push_input(InputEvent::Drag { body: id, x: 0.0, y: 90.0, z: 0.0 });
        ctl.teardown();

        assert!(ctl.interaction().active().is_empty());
        assert!(!ctl.scene().get(id).unwrap().is_dragging());
        assert!(ctl.controls().enabled());
        assert!((pos(&ctl, id) - Vec3::new(0.0, 40.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn bad_frame_delta_does_not_rewind() {
        let mut ctl = mount();
        ctl.tick(1.0);
        ctl.tick(-5.0);
        ctl.tick(f32::NAN);
        assert!((ctl.clock().elapsed() - 1.0).abs() < 1e-9);
    }
}
