//! Directory scanning and scene construction.
//!
//! Turns a directory listing into a `Scene`: entries are classified into
//! entity kinds, hidden entries dropped, the survivors laid out on a square
//! grid and their content (image pixels, text previews) prepared. Nothing
//! here spawns or reads render objects; scenes are plain values built on
//! worker threads and handed to the navigation controller. A scene only
//! carries the ids of its render roots once a `SceneStage` has spawned it.

/// Scene value and the scan that builds it.
pub mod builder;

/// Entry to entity-kind mapping.
pub mod classifier;

/// Entity kinds, per-kind construction and activation.
pub mod entity;

/// Directory listing and capped file reads.
pub mod entry;

/// Square-grid placement.
pub mod layout;

pub use builder::{ScanSettings, Scene, SceneHandles, build_scene};
pub use entity::{Activation, EntityContent, EntityKind, SceneEntity};
