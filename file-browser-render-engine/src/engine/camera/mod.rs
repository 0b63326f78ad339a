//! Fly camera for moving through a directory scene.
//!
//! Mouse motion turns the view with the cursor locked, W/S/A/D move along
//! and across it, Space and Shift move up and down. Each newly shown scene is
//! framed from the front.

/// Fly camera resource, input mapping and controller systems.
pub mod fly_camera;

pub use fly_camera::{FlyCamera, camera_controller, grab_cursor, spawn_camera};
