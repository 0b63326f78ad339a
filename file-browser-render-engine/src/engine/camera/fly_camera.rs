use bevy::input::mouse::MouseMotion;
use bevy::math::EulerRot;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

use constants::camera::{
    FRAMING_DISTANCE_FACTOR, FRAMING_MIN_DISTANCE, INITIAL_CAMERA_POSITION, MOUSE_SENSITIVITY,
    MOVE_SPEED, PITCH_LIMIT,
};
use constants::coordinate_system::layout_to_world;

/// Free-flying camera pose driven by mouse-look and WASD.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FlyCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            position: INITIAL_CAMERA_POSITION,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

/// Movement requested this frame, each axis in -1..=1 relative to the view.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveInput {
    pub forward: f32,
    pub right: f32,
    pub up: f32,
}

impl MoveInput {
    pub fn from_keyboard(keyboard: &ButtonInput<KeyCode>) -> Self {
        let axis = |positive: KeyCode, negative: KeyCode| {
            keyboard.pressed(positive) as i8 as f32 - keyboard.pressed(negative) as i8 as f32
        };
        let down = keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
        Self {
            forward: axis(KeyCode::KeyW, KeyCode::KeyS),
            right: axis(KeyCode::KeyD, KeyCode::KeyA),
            up: keyboard.pressed(KeyCode::Space) as i8 as f32 - down as i8 as f32,
        }
    }
}

impl FlyCamera {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Turn by a mouse delta in pixels.
    pub fn look(&mut self, mouse_delta: Vec2) {
        self.yaw -= mouse_delta.x * MOUSE_SENSITIVITY;
        self.pitch = (self.pitch - mouse_delta.y * MOUSE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Move relative to the current view for `dt` seconds. Strafing and
    /// vertical movement run at half speed.
    pub fn step(&mut self, input: MoveInput, dt: f32) {
        let rotation = self.rotation();
        let forward = rotation * Vec3::NEG_Z;
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;

        let velocity = forward * input.forward + (right * input.right + up * input.up) * 0.5;
        self.position += velocity * MOVE_SPEED * dt;
    }

    /// Face a scene laid out on a `side`×`side` grid with cells `step` apart,
    /// far enough back to see all of it.
    pub fn frame_grid(&mut self, side: usize, step: f32) {
        let span = side.saturating_sub(1) as f32 * step;
        let centre = layout_to_world(Vec3::new(span * 0.5, 0.0, span * 0.5));
        let distance = (side as f32 * step * FRAMING_DISTANCE_FACTOR).max(FRAMING_MIN_DISTANCE);

        self.position = centre + Vec3::Z * distance;
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}

pub fn spawn_camera(mut commands: Commands, fly_camera: Res<FlyCamera>) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(fly_camera.position).with_rotation(fly_camera.rotation()),
    ));
}

/// Hide and lock the cursor so mouse motion only turns the camera.
pub fn grab_cursor(mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = windows.single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut fly_camera: ResMut<FlyCamera>,
    mut mouse_motion: EventReader<MouseMotion>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_delta != Vec2::ZERO {
        fly_camera.look(mouse_delta);
    }

    let input = MoveInput::from_keyboard(&keyboard);
    if input != MoveInput::default() {
        fly_camera.step(input, time.delta_secs());
    }

    camera_transform.translation = fly_camera.position;
    camera_transform.rotation = fly_camera.rotation();
}
