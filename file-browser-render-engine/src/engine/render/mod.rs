//! Presentation of scenes in the Bevy world.
//!
//! Spawns cards, textures and overlay labels for a scene the first time it
//! is attached, and toggles their visibility on later swaps.

/// Screen-space labels that follow points in the 3D scene.
pub mod labels;

/// `SceneStage` implementation spawning cards, textures and pick regions.
pub mod scene_spawner;
