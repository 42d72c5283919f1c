//! wasm-bindgen surface for the orbital scene.
//!
//! One scene per page: the runner lives in a `thread_local!` and every
//! export borrows it. Calls made before `scene_mount` or after the runner
//! was dropped are logged and ignored.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use orrery_engine::{BodyId, InputEvent};

pub mod runner;

pub use runner::SceneRunner;

thread_local! {
    static RUNNER: RefCell<Option<SceneRunner>> = const { RefCell::new(None) };
}

fn with_runner_or<R>(fallback: R, f: impl FnOnce(&mut SceneRunner) -> R) -> R {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => f(runner),
        None => {
            log::warn!("scene not mounted; call scene_mount() first");
            fallback
        }
    })
}

fn with_runner<R: Default>(f: impl FnOnce(&mut SceneRunner) -> R) -> R {
    with_runner_or(R::default(), f)
}

fn push(event: InputEvent) {
    with_runner(|r| r.push_input(event));
}

/// Mount a scene. `config_json` may be empty for the default galaxy.
#[wasm_bindgen]
pub fn scene_mount(config_json: &str, width: u32, height: u32, pixel_ratio: f32) -> Result<(), JsError> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    match SceneRunner::mount(config_json, width, height, pixel_ratio) {
        Ok(runner) => {
            RUNNER.with(|cell| {
                if let Some(mut previous) = cell.borrow_mut().replace(runner) {
                    previous.teardown();
                }
            });
            Ok(())
        }
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&format!("orrery: mount failed: {err}")));
            Err(JsError::new(&err.to_string()))
        }
    }
}

/// Run one frame. Returns false once the scene is torn down; the host
/// stops requesting animation frames then.
#[wasm_bindgen]
pub fn scene_tick(dt: f32) -> bool {
    with_runner(|r| r.tick(dt))
}

#[wasm_bindgen]
pub fn scene_resize(width: u32, height: u32, pixel_ratio: f32) -> bool {
    with_runner(|r| r.resize(width, height, pixel_ratio))
}

#[wasm_bindgen]
pub fn scene_teardown() {
    RUNNER.with(|cell| {
        if let Some(mut runner) = cell.borrow_mut().take() {
            runner.teardown();
        }
    });
}

// ---- Input: pointer positions are normalized device coordinates ----

#[wasm_bindgen]
pub fn scene_pointer_down(x: f32, y: f32) {
    push(InputEvent::PointerDown { x, y });
}

#[wasm_bindgen]
pub fn scene_pointer_move(x: f32, y: f32) {
    push(InputEvent::PointerMove { x, y });
}

#[wasm_bindgen]
pub fn scene_pointer_up(x: f32, y: f32) {
    push(InputEvent::PointerUp { x, y });
}

#[wasm_bindgen]
pub fn scene_wheel(delta: f32) {
    push(InputEvent::Wheel { delta });
}

/// Direct drag events for hosts that do their own picking.
#[wasm_bindgen]
pub fn scene_drag_start(body: u32) {
    push(InputEvent::DragStart { body: BodyId(body) });
}

#[wasm_bindgen]
pub fn scene_drag(body: u32, x: f32, y: f32, z: f32) {
    push(InputEvent::Drag { body: BodyId(body), x, y, z });
}

#[wasm_bindgen]
pub fn scene_drag_end(body: u32) {
    push(InputEvent::DragEnd { body: BodyId(body) });
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner_or(std::ptr::null(), |r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_stars_ptr() -> *const f32 {
    with_runner_or(std::ptr::null(), |r| r.stars_ptr())
}

#[wasm_bindgen]
pub fn get_star_count() -> u32 {
    with_runner(|r| r.star_count())
}

#[wasm_bindgen]
pub fn get_star_size() -> f32 {
    with_runner(|r| r.star_size())
}

#[wasm_bindgen]
pub fn get_camera_ptr() -> *const f32 {
    with_runner_or(std::ptr::null(), |r| r.camera_ptr())
}

#[wasm_bindgen]
pub fn get_frames_rendered() -> f64 {
    with_runner(|r| r.frames_rendered() as f64)
}

#[wasm_bindgen]
pub fn get_clear_color() -> String {
    with_runner(|r| r.clear_color())
}

#[wasm_bindgen]
pub fn get_pixel_ratio() -> f32 {
    with_runner(|r| r.pixel_ratio())
}
