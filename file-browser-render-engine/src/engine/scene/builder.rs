use std::path::{Path, PathBuf};

use bevy::log::info;
use bevy::ecs::entity::Entity;
use rayon::prelude::*;

use constants::layout::{GRID_STEP, TEXT_PREVIEW_BYTES};

use super::classifier::classify;
use super::entity::{EntityKind, SceneEntity, construct_entity};
use super::entry::list_entries;
use super::layout::{grid_side, layout};
use crate::error::ScanError;

/// Settings a scan runs with; copied into each background task.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSettings {
    pub grid_step: f32,
    pub text_preview_bytes: usize,
    pub hide_dotfiles: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            grid_step: GRID_STEP,
            text_preview_bytes: TEXT_PREVIEW_BYTES,
            hide_dotfiles: false,
        }
    }
}

/// Roots of a scene's spawned objects: 3D cards hang off `world_root`,
/// overlay labels off `overlay_root`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneHandles {
    pub world_root: Entity,
    pub overlay_root: Entity,
}

/// All entities for one directory.
///
/// Render-side objects are spawned on first attach and kept in `handles`
/// until the scene is released.
#[derive(Debug)]
pub struct Scene {
    pub path: PathBuf,
    pub entities: Vec<SceneEntity>,
    pub grid_step: f32,
    pub(crate) handles: Option<SceneHandles>,
}

impl Scene {
    pub fn new(path: PathBuf, entities: Vec<SceneEntity>, grid_step: f32) -> Self {
        Self {
            path,
            entities,
            grid_step,
            handles: None,
        }
    }

    /// Cells per side of the grid this scene was laid out on.
    pub fn grid_side(&self) -> usize {
        grid_side(self.entities.len())
    }

    pub fn count_of(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind() == kind).count()
    }
}

/// Scan `directory` and build its scene.
///
/// Blocking; run it off the render thread. Only a failed listing fails the
/// scan, every per-entry failure becomes an error entity.
pub fn build_scene(directory: &Path, settings: &ScanSettings) -> Result<Scene, ScanError> {
    let entries =
        list_entries(directory).map_err(|source| ScanError::DirectoryUnreadable {
            path: directory.to_path_buf(),
            source,
        })?;

    let visible: Vec<_> = entries
        .into_iter()
        .filter_map(|entry| classify(&entry, settings.hide_dotfiles).map(|kind| (kind, entry)))
        .collect();
    let positions = layout(visible.len(), settings.grid_step);

    let entities: Vec<SceneEntity> = visible
        .into_par_iter()
        .zip(positions.into_par_iter())
        .map(|((kind, entry), position)| construct_entity(kind, &entry, position, settings))
        .collect();

    let scene = Scene::new(directory.to_path_buf(), entities, settings.grid_step);
    info!(
        "Scanned {}: {} entities ({} directories, {} images, {} text, {} errors)",
        directory.display(),
        scene.entities.len(),
        scene.count_of(EntityKind::Directory),
        scene.count_of(EntityKind::Image),
        scene.count_of(EntityKind::Text),
        scene.count_of(EntityKind::Error),
    );
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;

    use bevy::math::Vec3;

    use super::*;
    use crate::engine::scene::entity::EntityContent;

    fn mixed_directory() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join(".git")).unwrap();
        fs::write(root.join(".git").join("HEAD"), "ref: refs/heads/main").unwrap();
        fs::write(root.join("blob.zzqx"), [0u8, 1, 2, 3]).unwrap();
        image::RgbaImage::from_pixel(4, 4, image::Rgba([255, 0, 0, 255]))
            .save(root.join("picture.png"))
            .unwrap();
        fs::write(root.join("readme.txt"), "hello from the scene").unwrap();
        fs::create_dir(root.join("subdir")).unwrap();
        dir
    }

    #[test]
    fn mixed_directory_builds_four_entities_on_a_two_by_two_grid() {
        let dir = mixed_directory();
        let scene = build_scene(dir.path(), &ScanSettings::default()).unwrap();

        let kinds: Vec<_> = scene.entities.iter().map(SceneEntity::kind).collect();
        assert_eq!(
            kinds,
            [
                EntityKind::Error,
                EntityKind::Image,
                EntityKind::Text,
                EntityKind::Directory
            ]
        );
        assert_eq!(scene.grid_side(), 2);

        let positions: Vec<_> = scene.entities.iter().map(|e| e.position).collect();
        assert_eq!(
            positions,
            [
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(3.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 3.0),
                Vec3::new(3.0, 0.0, 3.0),
            ]
        );
        assert!(scene.entities.iter().all(|e| e.source.file_name().unwrap() != ".git"));
        assert_eq!(
            scene.entities[2].content,
            EntityContent::Text("hello from the scene".to_string())
        );
    }

    #[test]
    fn hidden_directories_take_no_cell() {
        let dir = tempfile::tempdir().unwrap();
        for name in [".cache", ".git", ".venv"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        fs::write(dir.path().join("only.txt"), "x").unwrap();

        let scene = build_scene(dir.path(), &ScanSettings::default()).unwrap();
        assert_eq!(scene.entities.len(), 1);
        assert_eq!(scene.entities[0].position, Vec3::ZERO);
        assert_eq!(scene.grid_side(), 1);
    }

    #[test]
    fn unknown_types_become_error_entities() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.zzqx"), "?").unwrap();
        fs::write(dir.path().join("Makefile-like"), "?").unwrap();

        let scene = build_scene(dir.path(), &ScanSettings::default()).unwrap();
        assert_eq!(scene.count_of(EntityKind::Error), 2);
    }

    #[test]
    fn positions_stay_distinct_for_large_directories() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..23 {
            fs::write(dir.path().join(format!("file{i:02}.txt")), "x").unwrap();
        }

        let scene = build_scene(dir.path(), &ScanSettings::default()).unwrap();
        assert_eq!(scene.entities.len(), 23);
        assert_eq!(scene.grid_side(), 5);
        let cells: HashSet<_> = scene
            .entities
            .iter()
            .map(|e| (e.position.x as i32, e.position.z as i32))
            .collect();
        assert_eq!(cells.len(), 23);
    }

    #[test]
    fn custom_settings_are_honoured() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".hidden.txt"), "secret").unwrap();
        fs::write(dir.path().join("a.txt"), "abcdef").unwrap();
        fs::write(dir.path().join("b.txt"), "ghijkl").unwrap();

        let settings = ScanSettings {
            grid_step: 5.0,
            text_preview_bytes: 3,
            hide_dotfiles: true,
        };
        let scene = build_scene(dir.path(), &settings).unwrap();
        assert_eq!(scene.entities.len(), 2);
        assert_eq!(scene.entities[1].position, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(scene.entities[0].content, EntityContent::Text("abc".to_string()));
    }

    #[test]
    fn empty_directory_builds_an_empty_scene() {
        let dir = tempfile::tempdir().unwrap();
        let scene = build_scene(dir.path(), &ScanSettings::default()).unwrap();
        assert!(scene.entities.is_empty());
        assert_eq!(scene.grid_side(), 0);
    }

    #[test]
    fn unreadable_directory_fails_the_scan() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = build_scene(&missing, &ScanSettings::default()).unwrap_err();
        let ScanError::DirectoryUnreadable { path, .. } = err;
        assert_eq!(path, missing);
    }
}
