/// Distance between neighbouring grid cells, applied to both layout axes.
pub const GRID_STEP: f32 = 3.0;

/// Maximum number of bytes read from a file for a text preview.
pub const TEXT_PREVIEW_BYTES: usize = 400;
/// Largest preview cap accepted from settings.
pub const MAX_TEXT_PREVIEW_BYTES: usize = 64 * 1024;

/// Names starting with this marker are treated as hidden.
pub const HIDDEN_MARKER: char = '.';
