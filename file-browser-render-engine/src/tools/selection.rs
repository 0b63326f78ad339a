use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::ray::ray_hits_obb;
use crate::engine::navigation::DescendRequest;
use crate::engine::render::scene_spawner::{Selectable, SelectionBounds};
use crate::engine::scene::Activation;

/// Closest candidate hit by the ray, with its distance.
pub fn closest_hit<'a, T>(
    origin: Vec3,
    dir: Vec3,
    candidates: impl IntoIterator<Item = (&'a GlobalTransform, Vec3, T)>,
) -> Option<(T, f32)> {
    let mut best: Option<(T, f32)> = None;
    for (xf, size, item) in candidates {
        let Some(t) = ray_hits_obb(origin, dir, xf, size) else {
            continue;
        };
        if best.as_ref().is_none_or(|(_, best_t)| t < *best_t) {
            best = Some((item, t));
        }
    }
    best
}

/// On left click, activate the visible entity under the crosshair.
pub fn activate_on_click(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    selectables: Query<(&GlobalTransform, &SelectionBounds, &Selectable, &InheritedVisibility)>,
    mut descend_requests: EventWriter<DescendRequest>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((cam_xf, camera)) = cameras.single() else {
        return;
    };

    let crosshair = Vec2::new(window.width(), window.height()) * 0.5;
    let Ok(ray) = camera.viewport_to_world(cam_xf, crosshair) else {
        return;
    };

    let candidates = selectables
        .iter()
        .filter(|(_, _, _, visibility)| visibility.get())
        .map(|(xf, SelectionBounds(size), selectable, _)| (xf, *size, selectable));

    let Some((selectable, _)) = closest_hit(ray.origin, ray.direction.as_vec3(), candidates) else {
        return;
    };

    match selectable.kind.activation(&selectable.source) {
        Some(Activation::Descend(path)) => {
            descend_requests.write(DescendRequest { path });
        }
        None => debug!("{} has no action", selectable.source.display()),
    }
}
