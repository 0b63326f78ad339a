//! Interactive tools for the directory scene.
//!
//! ## Selection
//!
//! Left click casts a ray from the camera through the crosshair at the
//! centre of the window. Every card of the active scene carries a
//! `SelectionBounds` box; the closest box hit wins and its entity kind
//! decides what happens:
//!
//! ```text
//! Left click
//!   └─> activate_on_click()
//!       ├─> Directory: DescendRequest { path }
//!       └─> Image / Text / Error: nothing
//! ```
//!
//! Cards of scenes kept in the history are hidden and never hit.

/// Ray intersection utilities for oriented bounding box selection.
///
/// Slab method raycast against transformed AABBs in card-local space.
pub mod ray;

/// Crosshair picking and entity activation.
pub mod selection;

use bevy::prelude::*;

use crate::engine::core::app_state::BrowserState;

pub struct SelectionToolPlugin;

impl Plugin for SelectionToolPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            selection::activate_on_click.run_if(in_state(BrowserState::Active)),
        );
    }
}
