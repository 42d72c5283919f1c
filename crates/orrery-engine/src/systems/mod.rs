pub mod drag;
pub mod gesture;
pub mod orbit;
pub mod render;
pub mod resize;
