use std::path::PathBuf;

use bevy::asset::RenderAssetUsages;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use constants::coordinate_system::layout_to_world;
use constants::render_settings::*;

use super::labels::WorldLabel;
use crate::engine::navigation::SceneStage;
use crate::engine::scene::entity::DecodedImage;
use crate::engine::scene::{EntityContent, EntityKind, Scene, SceneEntity, SceneHandles};

#[derive(Component)]
pub struct DirectorySceneRoot;

#[derive(Component)]
pub struct DirectorySceneOverlay;

/// Marks a card the selection tool can target.
#[derive(Component, Debug, Clone)]
pub struct Selectable {
    pub kind: EntityKind,
    pub source: PathBuf,
}

/// Size of the box used for ray picks, centred on the card.
#[derive(Component, Debug, Clone, Copy)]
pub struct SelectionBounds(pub Vec3);

/// World-unit size of the card an entity is drawn on.
pub fn card_size(content: &EntityContent) -> Vec2 {
    match content {
        EntityContent::Error => ERROR_CARD_SIZE,
        EntityContent::Directory { .. } => DIRECTORY_CARD_SIZE,
        EntityContent::Text(_) => TEXT_CARD_SIZE,
        EntityContent::Image(image) => image_card_size(image.width, image.height),
    }
}

fn image_card_size(width: u32, height: u32) -> Vec2 {
    let aspect = width.max(1) as f32 / height.max(1) as f32;
    if aspect >= 1.0 {
        Vec2::new(IMAGE_CARD_EXTENT, IMAGE_CARD_EXTENT / aspect)
    } else {
        Vec2::new(IMAGE_CARD_EXTENT * aspect, IMAGE_CARD_EXTENT)
    }
}

/// Bevy implementation of the scene stage.
#[derive(SystemParam)]
pub struct SceneSpawner<'w, 's> {
    commands: Commands<'w, 's>,
    meshes: ResMut<'w, Assets<Mesh>>,
    materials: ResMut<'w, Assets<StandardMaterial>>,
    images: ResMut<'w, Assets<Image>>,
}

impl SceneStage for SceneSpawner<'_, '_> {
    fn attach(&mut self, scene: &mut Scene) {
        match scene.handles {
            Some(handles) => self.set_visibility(handles, Visibility::Inherited),
            None => scene.handles = Some(self.spawn_scene(scene)),
        }
    }

    fn detach(&mut self, scene: &Scene) {
        if let Some(handles) = scene.handles {
            self.set_visibility(handles, Visibility::Hidden);
        }
    }

    fn release(&mut self, scene: Scene) {
        if let Some(handles) = scene.handles {
            self.commands.entity(handles.world_root).despawn();
            self.commands.entity(handles.overlay_root).despawn();
        }
    }
}

impl SceneSpawner<'_, '_> {
    fn set_visibility(&mut self, handles: SceneHandles, visibility: Visibility) {
        self.commands.entity(handles.world_root).insert(visibility);
        self.commands.entity(handles.overlay_root).insert(visibility);
    }

    /// Spawn every entity of `scene`. Image pixels move into the image
    /// assets here, so they are only held once.
    fn spawn_scene(&mut self, scene: &mut Scene) -> SceneHandles {
        let world_root = self
            .commands
            .spawn((
                DirectorySceneRoot,
                Name::new(format!("scene {}", scene.path.display())),
                Transform::default(),
                Visibility::default(),
            ))
            .id();
        let overlay_root = self
            .commands
            .spawn((
                DirectorySceneOverlay,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    position_type: PositionType::Absolute,
                    ..default()
                },
                Visibility::default(),
            ))
            .id();
        let handles = SceneHandles {
            world_root,
            overlay_root,
        };

        for entity in &mut scene.entities {
            self.spawn_entity(entity, handles);
        }
        handles
    }

    fn spawn_entity(&mut self, entity: &mut SceneEntity, handles: SceneHandles) {
        let centre = layout_to_world(entity.position);
        let size = card_size(&entity.content);
        let kind = entity.kind();

        match &mut entity.content {
            EntityContent::Error => {
                self.spawn_card(centre, size, ERROR_CARD_COLOUR, None, handles);
                self.spawn_label(
                    WorldLabel::centred(centre, LABEL_BASE_FONT_SIZE),
                    "error",
                    Some(ERROR_CARD_COLOUR),
                    handles,
                );
            }
            EntityContent::Directory { name } => {
                self.spawn_card(centre, size, DIRECTORY_CARD_COLOUR, None, handles);
                self.spawn_label(
                    WorldLabel::centred(centre, LABEL_BASE_FONT_SIZE),
                    name,
                    None,
                    handles,
                );
            }
            EntityContent::Image(decoded) => {
                let texture = self.images.add(to_texture(decoded));
                self.spawn_card(centre, size, Color::WHITE, Some(texture), handles);
            }
            EntityContent::Text(preview) => {
                let frame = size + Vec2::splat(TEXT_FRAME_MARGIN * 2.0);
                self.spawn_backdrop(centre - Vec3::Z * 0.01, frame, TEXT_FRAME_COLOUR, handles);
                self.spawn_card(centre, size, TEXT_CARD_COLOUR, None, handles);

                let corner = centre + Vec3::new(-size.x, size.y, 0.0) * 0.5;
                self.spawn_label(
                    WorldLabel::wrapped(corner, TEXT_PREVIEW_FONT_SIZE, size),
                    preview,
                    None,
                    handles,
                );
            }
        }

        self.commands.spawn((
            Selectable {
                kind,
                source: entity.source.clone(),
            },
            SelectionBounds(size.extend(PICK_DEPTH)),
            Transform::from_translation(centre),
            Visibility::default(),
            ChildOf(handles.world_root),
        ));
    }

    fn spawn_card(
        &mut self,
        centre: Vec3,
        size: Vec2,
        colour: Color,
        texture: Option<Handle<Image>>,
        handles: SceneHandles,
    ) {
        let material = self.materials.add(StandardMaterial {
            base_color: colour,
            base_color_texture: texture,
            unlit: true,
            double_sided: true,
            cull_mode: None,
            ..default()
        });
        self.commands.spawn((
            Mesh3d(self.meshes.add(Rectangle::new(size.x, size.y))),
            MeshMaterial3d(material),
            Transform::from_translation(centre),
            ChildOf(handles.world_root),
        ));
    }

    fn spawn_backdrop(&mut self, centre: Vec3, size: Vec2, colour: Color, handles: SceneHandles) {
        self.spawn_card(centre, size, colour, None, handles);
    }

    fn spawn_label(
        &mut self,
        label: WorldLabel,
        text: &str,
        background: Option<Color>,
        handles: SceneHandles,
    ) {
        let mut node = self.commands.spawn((
            Text::new(text),
            TextFont {
                font_size: label.base_font_size,
                ..default()
            },
            TextColor(LABEL_TEXT_COLOUR),
            Node {
                position_type: PositionType::Absolute,
                display: Display::None,
                ..default()
            },
            label,
            ChildOf(handles.overlay_root),
        ));
        if let Some(colour) = background {
            node.insert(BackgroundColor(colour));
        }
    }
}

fn to_texture(decoded: &mut DecodedImage) -> Image {
    Image::new(
        Extent3d {
            width: decoded.width,
            height: decoded.height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        std::mem::take(&mut decoded.rgba),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}
