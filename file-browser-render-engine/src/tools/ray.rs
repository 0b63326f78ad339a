use bevy::prelude::*;

/// Distance along the ray to a box of `size` placed by `xf`, if hit.
pub fn ray_hits_obb(origin: Vec3, dir: Vec3, xf: &GlobalTransform, size: Vec3) -> Option<f32> {
    let inv = xf.compute_matrix().inverse();
    let o_local = inv.transform_point3(origin);
    let d_local = inv.transform_vector3(dir);
    let he = size * 0.5;
    ray_aabb_hit_t(o_local, d_local, -he, he)
}

// Slab-method ray–AABB intersection, returns Some(t) or None
pub fn ray_aabb_hit_t(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray_origin[axis];
        let direction = ray_direction[axis];

        if direction == 0.0 {
            // Parallel to this slab: miss unless already inside it.
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / direction;
        let (mut t0, mut t1) = ((min[axis] - origin) * inv, (max[axis] - origin) * inv);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_a_box_straight_ahead() {
        let t = ray_aabb_hit_t(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, -Vec3::ONE, Vec3::ONE);
        assert_eq!(t, Some(9.0));
    }

    #[test]
    fn misses_a_box_off_to_the_side() {
        let t = ray_aabb_hit_t(Vec3::new(5.0, 0.0, 10.0), Vec3::NEG_Z, -Vec3::ONE, Vec3::ONE);
        assert_eq!(t, None);
    }

    #[test]
    fn ignores_boxes_behind_the_origin() {
        let t = ray_aabb_hit_t(Vec3::new(0.0, 0.0, 10.0), Vec3::Z, -Vec3::ONE, Vec3::ONE);
        assert_eq!(t, None);
    }

    #[test]
    fn origin_inside_reports_the_exit() {
        let t = ray_aabb_hit_t(Vec3::ZERO, Vec3::X, -Vec3::ONE, Vec3::ONE);
        assert_eq!(t, Some(1.0));
    }

    #[test]
    fn transformed_boxes_are_hit_in_world_space() {
        let xf = GlobalTransform::from(Transform::from_xyz(3.0, -3.0, 0.0));
        let size = Vec3::new(2.0, 1.0, 0.1);

        let hit = ray_hits_obb(Vec3::new(3.0, -3.0, 10.0), Vec3::NEG_Z, &xf, size);
        assert!((hit.unwrap() - 9.95).abs() < 1e-4);
        assert_eq!(ray_hits_obb(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, &xf, size), None);
    }
}
