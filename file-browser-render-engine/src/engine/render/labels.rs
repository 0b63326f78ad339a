use bevy::prelude::*;

use constants::render_settings::{
    LABEL_MAX_DISTANCE, LABEL_MAX_FONT_SIZE, LABEL_MIN_FONT_SIZE, LABEL_REFERENCE_DISTANCE,
};

/// Overlay text pinned to a point in the 3D scene.
#[derive(Component, Debug, Clone, Copy)]
pub struct WorldLabel {
    pub anchor: Vec3,
    pub base_font_size: f32,
    pub placement: LabelPlacement,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelPlacement {
    /// Centred on the anchor.
    Centred,
    /// Top-left corner on the anchor, wrapped and clipped to a world-space
    /// box of this size.
    Boxed(Vec2),
}

impl WorldLabel {
    pub fn centred(anchor: Vec3, base_font_size: f32) -> Self {
        Self {
            anchor,
            base_font_size,
            placement: LabelPlacement::Centred,
        }
    }

    pub fn wrapped(corner: Vec3, base_font_size: f32, extent: Vec2) -> Self {
        Self {
            anchor: corner,
            base_font_size,
            placement: LabelPlacement::Boxed(extent),
        }
    }
}

/// Font size for a label seen from `distance`, so labels shrink with their
/// card.
pub fn label_font_size(base: f32, distance: f32) -> f32 {
    (base * LABEL_REFERENCE_DISTANCE / distance.max(f32::EPSILON))
        .clamp(LABEL_MIN_FONT_SIZE, LABEL_MAX_FONT_SIZE)
}

/// Project visible labels onto the screen, hiding those behind the camera or
/// too far away.
pub fn update_world_labels(
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut labels: Query<(
        &WorldLabel,
        &mut Node,
        &mut TextFont,
        &ComputedNode,
        &InheritedVisibility,
    )>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    for (label, mut node, mut font, computed, visibility) in &mut labels {
        if !visibility.get() {
            continue;
        }

        let distance = camera_transform.translation().distance(label.anchor);
        let screen = if distance <= LABEL_MAX_DISTANCE {
            camera.world_to_viewport(camera_transform, label.anchor).ok()
        } else {
            None
        };
        let Some(screen) = screen else {
            if node.display != Display::None {
                node.display = Display::None;
            }
            continue;
        };

        let font_size = label_font_size(label.base_font_size, distance);
        if font.font_size != font_size {
            font.font_size = font_size;
        }

        let top_left = match label.placement {
            LabelPlacement::Centred => {
                let extent = computed.size() * computed.inverse_scale_factor();
                screen - extent * 0.5
            }
            LabelPlacement::Boxed(extent) => {
                let far_corner = label.anchor + Vec3::new(extent.x, -extent.y, 0.0);
                if let Ok(corner) = camera.world_to_viewport(camera_transform, far_corner) {
                    let boxed = (corner - screen).abs();
                    node.max_width = Val::Px(boxed.x);
                    node.max_height = Val::Px(boxed.y);
                    node.overflow = Overflow::clip();
                }
                screen
            }
        };

        node.display = Display::Flex;
        node.left = Val::Px(top_left.x);
        node.top = Val::Px(top_left.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_matches_base_at_reference_distance() {
        assert_eq!(label_font_size(18.0, LABEL_REFERENCE_DISTANCE), 18.0);
    }

    #[test]
    fn font_size_shrinks_with_distance_within_limits() {
        let near = label_font_size(18.0, 5.0);
        let far = label_font_size(18.0, 20.0);
        assert!(near > far);
        assert_eq!(label_font_size(18.0, 0.0), LABEL_MAX_FONT_SIZE);
        assert_eq!(label_font_size(18.0, 1000.0), LABEL_MIN_FONT_SIZE);
    }

    #[test]
    fn boxed_labels_remember_their_extent() {
        let label = WorldLabel::wrapped(Vec3::ZERO, 9.0, Vec2::new(2.0, 1.0));
        assert_eq!(label.placement, LabelPlacement::Boxed(Vec2::new(2.0, 1.0)));
    }
}
