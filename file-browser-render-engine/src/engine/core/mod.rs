//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, settings and
//! the navigation state machine.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with scene presentation, navigation, camera and HUD
/// systems.
pub mod app_setup;

/// Browser state machine mirrored from the navigation controller.
pub mod app_state;

/// Command line and JSON settings.
pub mod config;

/// Window settings.
pub mod window_config;
