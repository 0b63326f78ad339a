use bevy::math::{Mat3, Vec3};

/// Layout-plane to world transform (row-major: [x_new, y_new, z_new]).
/// Layout rows grow along +Z; in the world they hang downwards so the grid
/// reads left-to-right, top-to-bottom on a wall facing +Z.
pub const COORDINATE_TRANSFORM: [[f32; 3]; 3] = [
    [1.0, 0.0, 0.0],  // X = X
    [0.0, 0.0, -1.0], // Y = -Z
    [0.0, 1.0, 0.0],  // Z = Y
];

/// Apply the layout-to-world transform to a layout position.
pub fn layout_to_world(position: Vec3) -> Vec3 {
    let [r0, r1, r2] = COORDINATE_TRANSFORM;
    Mat3::from_cols(
        Vec3::new(r0[0], r1[0], r2[0]),
        Vec3::new(r0[1], r1[1], r2[1]),
        Vec3::new(r0[2], r1[2], r2[2]),
    ) * position
}
