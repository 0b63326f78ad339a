use std::fmt;
use std::path::{Path, PathBuf};

use bevy::log::warn;
use bevy::math::Vec3;

use super::builder::ScanSettings;
use super::entry::{Entry, read_prefix};
use crate::error::EntityError;

/// What an entry renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Directory,
    Image,
    Text,
    Error,
}

/// Result of selecting an entity in the scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Descend(PathBuf),
}

type Constructor = fn(&Entry, &ScanSettings) -> Result<EntityContent, EntityError>;

impl EntityKind {
    fn constructor(self) -> Constructor {
        match self {
            Self::Directory => build_directory,
            Self::Image => build_image,
            Self::Text => build_text,
            Self::Error => build_error,
        }
    }

    /// Action taken when an entity of this kind sourced from `source` is
    /// selected. Only directories do anything.
    pub fn activation(self, source: &Path) -> Option<Activation> {
        match self {
            Self::Directory => Some(Activation::Descend(source.to_path_buf())),
            Self::Image | Self::Text | Self::Error => None,
        }
    }
}

/// RGBA8 pixels decoded off the render thread.
#[derive(Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Everything needed to render one entity, prepared during the scan.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityContent {
    Error,
    Directory { name: String },
    Image(DecodedImage),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneEntity {
    pub source: PathBuf,
    /// Layout-plane position, `(x, 0, z)`.
    pub position: Vec3,
    pub content: EntityContent,
}

impl SceneEntity {
    pub fn kind(&self) -> EntityKind {
        match self.content {
            EntityContent::Error => EntityKind::Error,
            EntityContent::Directory { .. } => EntityKind::Directory,
            EntityContent::Image(_) => EntityKind::Image,
            EntityContent::Text(_) => EntityKind::Text,
        }
    }

    pub fn activation(&self) -> Option<Activation> {
        self.kind().activation(&self.source)
    }
}

/// Build the entity for `entry`. A failed construction yields an error
/// entity in the same cell.
pub fn construct_entity(
    kind: EntityKind,
    entry: &Entry,
    position: Vec3,
    settings: &ScanSettings,
) -> SceneEntity {
    let content = (kind.constructor())(entry, settings).unwrap_or_else(|err| {
        warn!("{err}");
        EntityContent::Error
    });

    SceneEntity {
        source: entry.path.clone(),
        position,
        content,
    }
}

fn build_error(_entry: &Entry, _settings: &ScanSettings) -> Result<EntityContent, EntityError> {
    Ok(EntityContent::Error)
}

fn build_directory(entry: &Entry, _settings: &ScanSettings) -> Result<EntityContent, EntityError> {
    Ok(EntityContent::Directory {
        name: entry.name.clone(),
    })
}

fn build_image(entry: &Entry, _settings: &ScanSettings) -> Result<EntityContent, EntityError> {
    let decoded = image::open(&entry.path).map_err(|err| EntityError::ConstructionFailed {
        path: entry.path.clone(),
        source: Box::new(err),
    })?;
    let rgba = decoded.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(EntityError::ConstructionFailed {
            path: entry.path.clone(),
            source: "image has no pixels".into(),
        });
    }

    Ok(EntityContent::Image(DecodedImage {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    }))
}

fn build_text(entry: &Entry, settings: &ScanSettings) -> Result<EntityContent, EntityError> {
    let cap = settings.text_preview_bytes;
    // One byte past the cap tells a capped read from a file that just ends.
    let mut bytes = read_prefix(&entry.path, cap.saturating_add(1)).map_err(|err| {
        EntityError::ConstructionFailed {
            path: entry.path.clone(),
            source: Box::new(err),
        }
    })?;
    let truncated = bytes.len() > cap;
    bytes.truncate(cap);

    Ok(EntityContent::Text(decode_preview(&bytes, truncated)))
}

/// Decode a byte window as UTF-8.
///
/// When `truncated` is set, a multi-byte sequence cut off at the end of the
/// window is dropped. Any other invalid byte switches to an escaped
/// byte-level rendering of the whole window.
pub fn decode_preview(bytes: &[u8], truncated: bool) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(err) if truncated && err.error_len().is_none() => {
            String::from_utf8_lossy(&bytes[..err.valid_up_to()]).into_owned()
        }
        Err(_) => bytes.escape_ascii().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn settings() -> ScanSettings {
        ScanSettings::default()
    }

    #[test]
    fn only_directories_activate() {
        let path = Path::new("/data/sub");
        assert_eq!(
            EntityKind::Directory.activation(path),
            Some(Activation::Descend(path.to_path_buf()))
        );
        assert_eq!(EntityKind::Image.activation(path), None);
        assert_eq!(EntityKind::Text.activation(path), None);
        assert_eq!(EntityKind::Error.activation(path), None);
    }

    #[test]
    fn preview_keeps_valid_text() {
        assert_eq!(decode_preview(b"hello\nworld", false), "hello\nworld");
    }

    #[test]
    fn preview_falls_back_to_escaped_bytes() {
        assert_eq!(decode_preview(&[b'f', 0xff, 0xfe], false), "f\\xff\\xfe");
    }

    #[test]
    fn sequence_cut_by_the_cap_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accents.txt");
        // "aaa€" is 6 bytes; a cap of 5 cuts the euro sign after two bytes.
        fs::write(&path, "aaa\u{20ac}").unwrap();

        let settings = ScanSettings {
            text_preview_bytes: 5,
            ..settings()
        };
        let entry = Entry::new(&path, false);
        let entity = construct_entity(EntityKind::Text, &entry, Vec3::ZERO, &settings);
        assert_eq!(entity.content, EntityContent::Text("aaa".to_string()));
    }

    #[test]
    fn short_file_ending_mid_sequence_is_escaped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cut.txt");
        fs::write(&path, [b'a', b'b', 0xe2, 0x82]).unwrap();

        let entry = Entry::new(&path, false);
        let entity = construct_entity(EntityKind::Text, &entry, Vec3::ZERO, &settings());
        assert_eq!(entity.content, EntityContent::Text("ab\\xe2\\x82".to_string()));
    }

    #[test]
    fn file_exactly_at_the_cap_is_not_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exact.txt");
        fs::write(&path, [b'a', b'b', 0xe2, 0x82]).unwrap();

        let settings = ScanSettings {
            text_preview_bytes: 4,
            ..settings()
        };
        let entry = Entry::new(&path, false);
        let entity = construct_entity(EntityKind::Text, &entry, Vec3::ZERO, &settings);
        assert_eq!(entity.content, EntityContent::Text("ab\\xe2\\x82".to_string()));
    }

    #[test]
    fn text_entity_reads_at_most_the_preview_cap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("long.txt");
        fs::write(&path, "z".repeat(1000)).unwrap();

        let entry = Entry::new(&path, false);
        let entity = construct_entity(EntityKind::Text, &entry, Vec3::ZERO, &settings());
        assert_eq!(entity.content, EntityContent::Text("z".repeat(400)));
    }

    #[test]
    fn invalid_text_renders_byte_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, [b'c', b'a', b'f', 0xe9, b'!']).unwrap();

        let entry = Entry::new(&path, false);
        let entity = construct_entity(EntityKind::Text, &entry, Vec3::ZERO, &settings());
        assert_eq!(entity.content, EntityContent::Text("caf\\xe9!".to_string()));
    }

    #[test]
    fn unreadable_text_downgrades_to_error() {
        let dir = tempfile::tempdir().unwrap();
        let entry = Entry::new(dir.path().join("gone.txt"), false);
        let entity = construct_entity(EntityKind::Text, &entry, Vec3::ZERO, &settings());
        assert_eq!(entity.kind(), EntityKind::Error);
        assert_eq!(entity.source, entry.path);
    }

    #[test]
    fn undecodable_image_downgrades_to_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").unwrap();

        let entry = Entry::new(&path, false);
        let entity = construct_entity(EntityKind::Image, &entry, Vec3::ONE, &settings());
        assert_eq!(entity.kind(), EntityKind::Error);
        assert_eq!(entity.position, Vec3::ONE);
    }

    #[test]
    fn image_entity_holds_rgba_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let entry = Entry::new(&path, false);
        let entity = construct_entity(EntityKind::Image, &entry, Vec3::ZERO, &settings());
        let EntityContent::Image(decoded) = entity.content else {
            panic!("expected an image entity");
        };
        assert_eq!((decoded.width, decoded.height), (3, 2));
        assert_eq!(decoded.rgba.len(), 3 * 2 * 4);
        assert_eq!(&decoded.rgba[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn directory_entity_is_labelled_with_its_name() {
        let entry = Entry::new("/data/projects", true);
        let entity = construct_entity(EntityKind::Directory, &entry, Vec3::ZERO, &settings());
        assert_eq!(
            entity.content,
            EntityContent::Directory {
                name: "projects".to_string()
            }
        );
    }
}
