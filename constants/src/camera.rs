use bevy::math::Vec3;

/// Camera pose before the first scene arrives.
pub const INITIAL_CAMERA_POSITION: Vec3 = Vec3::new(2.0, -3.0, 20.0);

/// Radians of turn per pixel of mouse motion.
pub const MOUSE_SENSITIVITY: f32 = 0.0025;
/// Pitch is clamped just short of straight up/down.
pub const PITCH_LIMIT: f32 = 1.55;

/// Units per second for forward/backward movement; strafing and vertical
/// movement run at half of this.
pub const MOVE_SPEED: f32 = 15.0;

/// Framing distance per grid cell along the wider scene axis.
pub const FRAMING_DISTANCE_FACTOR: f32 = 1.3;
pub const FRAMING_MIN_DISTANCE: f32 = 8.0;
