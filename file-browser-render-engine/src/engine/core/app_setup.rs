use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;

use constants::render_settings::CLEAR_COLOUR;

use crate::engine::camera::{FlyCamera, camera_controller, grab_cursor, spawn_camera};
use crate::engine::core::app_state::BrowserState;
use crate::engine::core::config::BrowserSettings;
use crate::engine::core::window_config::create_window_config;
use crate::engine::navigation::{Navigation, NavigationPlugin};
use crate::engine::render::labels::update_world_labels;
use crate::engine::systems::fps_tracking::fps_text_update_system;
use crate::engine::systems::hud::{StatusLine, spawn_hud, status_text_update_system};
use crate::tools::SelectionToolPlugin;

pub fn create_app(settings: BrowserSettings) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .insert_resource(ClearColor(CLEAR_COLOUR))
        .insert_resource(settings)
        .init_resource::<FlyCamera>()
        .init_resource::<StatusLine>();

    // Scene lifecycle, then the tools acting on it
    app.add_plugins(NavigationPlugin)
        .add_plugins(SelectionToolPlugin);

    app.add_systems(Startup, (spawn_camera, spawn_lighting, spawn_hud, grab_cursor))
        .add_systems(
            Update,
            (
                exit_on_escape,
                camera_controller,
                update_world_labels.after(camera_controller),
                fps_text_update_system,
                status_text_update_system,
            ),
        )
        .add_systems(OnEnter(BrowserState::Active), log_active_scene);

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    DefaultPlugins.set(window_config)
}

fn spawn_lighting(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

fn exit_on_escape(keyboard: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

fn log_active_scene(navigation: Res<Navigation>) {
    if let Some(scene) = navigation.active() {
        info!("Browsing {}", scene.path.display());
    }
}
