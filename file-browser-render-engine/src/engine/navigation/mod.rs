//! Scene navigation: descending into directories and going back.
//!
//! ## Flow
//!
//! ```text
//! DescendRequest (startup root, directory click)
//!   └─> dispatch_descend_requests()
//!       ├─> Navigation::begin_descend()      rejected while Loading
//!       └─> build_scene() on AsyncComputeTaskPool
//!
//! poll_pending_scan()                        once per frame
//!   └─> Navigation::finish_descend()
//!       ├─> previous scene: detach, push onto history
//!       └─> new scene: attach (spawned on first attach)
//!
//! GoBackRequest (Backspace)
//!   └─> Navigation::go_back()
//!       ├─> current scene: detach, release
//!       └─> popped scene: attach (shown again, not rebuilt)
//! ```
//!
//! Navigation state is only mutated by these main-schedule systems; the
//! scan task returns a `Scene` value and never sees it.

/// Active scene, history stack and the `SceneStage` seam.
pub mod controller;

/// Requests, the pending scan slot and the systems driving the controller.
pub mod systems;

use bevy::prelude::*;

pub use controller::{Navigation, SceneStage};
pub use systems::{DescendRequest, GoBackRequest, PendingScan};

use crate::engine::core::app_state::{BrowserState, sync_browser_state};

pub struct NavigationPlugin;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<BrowserState>()
            .init_resource::<Navigation>()
            .init_resource::<PendingScan>()
            .add_event::<DescendRequest>()
            .add_event::<GoBackRequest>()
            .add_systems(Startup, systems::request_root_scene)
            .add_systems(
                Update,
                (
                    systems::dispatch_descend_requests,
                    systems::poll_pending_scan,
                    systems::go_back_on_backspace,
                    systems::handle_go_back_requests,
                    sync_browser_state,
                )
                    .chain(),
            );
    }
}
