pub mod camera;
pub mod core;
pub mod navigation;
pub mod render;
pub mod scene;
pub mod systems;
