use bevy::color::Color;
use bevy::math::Vec2;

/// Card sizes in world units (width, height).
pub const ERROR_CARD_SIZE: Vec2 = Vec2::new(1.2, 0.6);
pub const DIRECTORY_CARD_SIZE: Vec2 = Vec2::new(2.0, 1.4);
pub const TEXT_CARD_SIZE: Vec2 = Vec2::new(2.4, 2.4);
/// Longest side of an image plane; the other side follows the aspect ratio.
pub const IMAGE_CARD_EXTENT: f32 = 2.4;

/// Depth of every pick region, centred on the card plane.
pub const PICK_DEPTH: f32 = 0.1;

/// Grey margin drawn behind text cards.
pub const TEXT_FRAME_MARGIN: f32 = 0.08;

pub const ERROR_CARD_COLOUR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const DIRECTORY_CARD_COLOUR: Color = Color::srgb(0.93, 0.72, 0.26);
pub const TEXT_CARD_COLOUR: Color = Color::srgb(1.0, 1.0, 1.0);
pub const TEXT_FRAME_COLOUR: Color = Color::srgb(0.8, 0.8, 0.8);
pub const LABEL_TEXT_COLOUR: Color = Color::srgb(0.0, 0.0, 0.0);

/// Label font size at `LABEL_REFERENCE_DISTANCE` from the camera.
pub const LABEL_BASE_FONT_SIZE: f32 = 18.0;
pub const TEXT_PREVIEW_FONT_SIZE: f32 = 9.0;
pub const LABEL_REFERENCE_DISTANCE: f32 = 10.0;
pub const LABEL_MIN_FONT_SIZE: f32 = 4.0;
pub const LABEL_MAX_FONT_SIZE: f32 = 48.0;
/// Labels farther than this are not drawn.
pub const LABEL_MAX_DISTANCE: f32 = 60.0;

pub const HUD_FONT_SIZE: f32 = 16.0;
pub const HUD_TEXT_COLOUR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const CLEAR_COLOUR: Color = Color::srgb(0.55, 0.6, 0.66);
