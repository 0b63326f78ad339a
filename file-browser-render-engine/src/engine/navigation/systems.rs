use std::path::PathBuf;

use bevy::prelude::*;
use bevy::tasks::{AsyncComputeTaskPool, Task, block_on, futures_lite::future};

use super::controller::Navigation;
use crate::engine::camera::FlyCamera;
use crate::engine::core::config::BrowserSettings;
use crate::engine::render::scene_spawner::SceneSpawner;
use crate::engine::scene::{Scene, build_scene};
use crate::engine::systems::hud::StatusLine;
use crate::error::ScanError;

/// Ask for the scene of `path` to be built and shown.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct DescendRequest {
    pub path: PathBuf,
}

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct GoBackRequest;

/// The one scan allowed in flight.
#[derive(Resource, Default)]
pub struct PendingScan(Option<Task<Result<Scene, ScanError>>>);

impl PendingScan {
    pub fn is_running(&self) -> bool {
        self.0.is_some()
    }
}

pub fn request_root_scene(
    settings: Res<BrowserSettings>,
    mut descend_requests: EventWriter<DescendRequest>,
) {
    descend_requests.write(DescendRequest {
        path: settings.root.clone(),
    });
}

/// Start a background scan for each accepted descend request.
pub fn dispatch_descend_requests(
    mut descend_requests: EventReader<DescendRequest>,
    mut navigation: ResMut<Navigation>,
    mut pending: ResMut<PendingScan>,
    settings: Res<BrowserSettings>,
    mut status: ResMut<StatusLine>,
) {
    for request in descend_requests.read() {
        if let Err(err) = navigation.begin_descend(request.path.clone()) {
            warn!("Ignoring request for {}: {err}", request.path.display());
            continue;
        }
        status.clear();

        let path = request.path.clone();
        let scan_settings = settings.scan_settings();
        let task = AsyncComputeTaskPool::get().spawn(async move { build_scene(&path, &scan_settings) });
        pending.0 = Some(task);
    }
}

/// Hand a finished scan to the navigation controller.
pub fn poll_pending_scan(
    mut pending: ResMut<PendingScan>,
    mut navigation: ResMut<Navigation>,
    mut stage: SceneSpawner,
    mut fly_camera: ResMut<FlyCamera>,
    mut status: ResMut<StatusLine>,
) {
    let Some(task) = pending.0.as_mut() else {
        return;
    };
    let Some(result) = block_on(future::poll_once(task)) else {
        return;
    };
    pending.0 = None;

    match navigation.finish_descend(result, &mut stage) {
        Ok(scene) => fly_camera.frame_grid(scene.grid_side(), scene.grid_step),
        Err(err) => {
            error!("{err}");
            status.show(err.to_string());
        }
    }
}

pub fn go_back_on_backspace(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut go_back_requests: EventWriter<GoBackRequest>,
) {
    if keyboard.just_pressed(KeyCode::Backspace) {
        go_back_requests.write(GoBackRequest);
    }
}

pub fn handle_go_back_requests(
    mut go_back_requests: EventReader<GoBackRequest>,
    mut navigation: ResMut<Navigation>,
    mut stage: SceneSpawner,
    mut fly_camera: ResMut<FlyCamera>,
    mut status: ResMut<StatusLine>,
) {
    for _ in go_back_requests.read() {
        match navigation.go_back(&mut stage) {
            Ok(scene) => {
                fly_camera.frame_grid(scene.grid_side(), scene.grid_step);
                status.clear();
            }
            Err(err) => {
                info!("Cannot go back: {err}");
                status.show(format!("cannot go back: {err}"));
            }
        }
    }
}
