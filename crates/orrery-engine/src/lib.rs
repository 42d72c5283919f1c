pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::{
    AmbientSpin, CameraConfig, CentralBodyConfig, ControlsConfig, OrbitModel, RingSpec,
    SceneConfig, StarFieldConfig,
};
pub use api::controller::OrbitalSceneController;
pub use api::error::ConfigError;
pub use api::types::{BodyId, Color, FrameStatus};
pub use components::body::{Body, BodyRole, BodyShape, Orbit};
pub use components::ring::Ring;
pub use core::bootstrap::build_scene;
pub use core::clock::Clock;
pub use core::scene::SceneGraph;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::{CameraUniform, PerspectiveCamera, Ray};
pub use renderer::controls::NavigationControls;
pub use renderer::instance::{BodyInstance, RenderBuffer};
pub use renderer::surface::HeadlessSurface;
pub use renderer::traits::{FrameData, RenderSurface};
pub use systems::drag::{constrain_to_ring, InteractionHandler};
pub use systems::resize::ResizeAdapter;
