use bevy::math::Vec3;

/// Number of cells per side of the smallest square grid holding `count` items.
pub fn grid_side(count: usize) -> usize {
    let mut side = (count as f64).sqrt().ceil() as usize;
    // Float rounding can land one off for very large counts.
    while side * side < count {
        side += 1;
    }
    while side > 0 && (side - 1) * (side - 1) >= count {
        side -= 1;
    }
    side
}

/// Grid positions for `count` items on the layout plane, row-major: the k-th
/// item lands in column `k % side`, row `k / side`.
pub fn layout(count: usize, step: f32) -> Vec<Vec3> {
    let side = grid_side(count);
    (0..count)
        .map(|k| {
            let i = k % side;
            let j = k / side;
            Vec3::new(i as f32 * step, 0.0, j as f32 * step)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_is_ceiling_of_square_root() {
        assert_eq!(grid_side(0), 0);
        assert_eq!(grid_side(1), 1);
        assert_eq!(grid_side(2), 2);
        assert_eq!(grid_side(4), 2);
        assert_eq!(grid_side(5), 3);
        assert_eq!(grid_side(9), 3);
        assert_eq!(grid_side(10), 4);
    }

    #[test]
    fn layout_yields_one_distinct_cell_per_item() {
        for count in 0..=50 {
            let positions = layout(count, 3.0);
            assert_eq!(positions.len(), count);

            let side = grid_side(count);
            assert!(side * side >= count);

            for (a, pa) in positions.iter().enumerate() {
                assert_eq!(pa.y, 0.0);
                for pb in &positions[a + 1..] {
                    assert_ne!(pa, pb, "duplicate cell for count {count}");
                }
            }
        }
    }

    #[test]
    fn cells_fill_rows_left_to_right() {
        let positions = layout(4, 3.0);
        assert_eq!(
            positions,
            [
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(3.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 3.0),
                Vec3::new(3.0, 0.0, 3.0),
            ]
        );
    }

    #[test]
    fn step_scales_both_axes() {
        let positions = layout(5, 2.5);
        assert_eq!(positions[4], Vec3::new(2.5, 0.0, 2.5));
    }
}
