use orrery_engine::{
    CameraUniform, ConfigError, HeadlessSurface, InputEvent,
    OrbitalSceneController, RenderSurface, SceneConfig,
};

/// Concrete scene runner behind the wasm exports.
///
/// The host page owns the GPU; it reads the instance, star and camera
/// buffers straight out of wasm memory through the pointer accessors after
/// each tick. wasm-bindgen cannot export the generic controller, so the
/// surface type is fixed here.
pub struct SceneRunner {
    controller: OrbitalSceneController<HeadlessSurface>,
    camera: CameraUniform,
}

impl SceneRunner {
    /// Parse `json` (empty means defaults) and mount a scene at the given
    /// container size.
    pub fn mount(json: &str, width: u32, height: u32, pixel_ratio: f32) -> Result<Self, ConfigError> {
        let config = if json.trim().is_empty() {
            SceneConfig::default()
        } else {
            SceneConfig::from_json(json)?
        };
        let surface = HeadlessSurface::new(width, height);
        let controller = OrbitalSceneController::mount(config, surface, width, height, pixel_ratio)?;
        let camera = controller.camera().uniform();
        Ok(Self { controller, camera })
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.controller.push_input(event);
    }

    /// Returns false once the scene has been torn down.
    pub fn tick(&mut self, dt: f32) -> bool {
        let status = self.controller.tick(dt);
        self.camera = self.controller.camera().uniform();
        status.is_running()
    }

    pub fn resize(&mut self, width: u32, height: u32, pixel_ratio: f32) -> bool {
        let changed = self.controller.resize(width, height, pixel_ratio);
        if changed {
            self.camera = self.controller.camera().uniform();
        }
        changed
    }

    pub fn teardown(&mut self) {
        self.controller.teardown();
    }

    pub fn is_running(&self) -> bool {
        self.controller.is_running()
    }

    // ---- Pointer accessors for host-side buffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.controller.render_buffer().instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.controller.render_buffer().instance_count()
    }

    /// Star positions as packed xyz triples.
    pub fn stars_ptr(&self) -> *const f32 {
        self.controller.stars().as_ptr() as *const f32
    }

    pub fn star_count(&self) -> u32 {
        self.controller.stars().len() as u32
    }

    pub fn star_size(&self) -> f32 {
        self.controller.config().star_field.point_size
    }

    pub fn camera_ptr(&self) -> *const f32 {
        self.camera.as_floats().as_ptr()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.controller.surface().frames_rendered()
    }

    pub fn clear_color(&self) -> String {
        self.controller.config().clear_color.to_hex_string()
    }

    pub fn surface_size(&self) -> (u32, u32) {
        self.controller.surface().size()
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.controller.surface().pixel_ratio()
    }
}
