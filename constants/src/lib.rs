//! Shared constants for the directory browser: layout spacing, scan limits,
//! card and label styling, camera tuning and the layout-to-world transform.

pub mod camera;
pub mod coordinate_system;
pub mod layout;
pub mod render_settings;
