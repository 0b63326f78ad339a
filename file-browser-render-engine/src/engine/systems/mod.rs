//! Runtime overlays and diagnostics.
//!
//! Provides the FPS counter, crosshair and status line.

/// FPS counter updates for the native overlay.
pub mod fps_tracking;

/// Heads-up display: crosshair, status line and key hints.
pub mod hud;
