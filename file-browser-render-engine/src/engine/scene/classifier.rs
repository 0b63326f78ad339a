use bevy::log::debug;
use mime_guess::mime;

use constants::layout::HIDDEN_MARKER;

use super::entity::EntityKind;
use super::entry::Entry;
use crate::error::EntityError;

/// Whether `entry` is left out of the scene entirely.
///
/// Hidden directories are always skipped; hidden files only when
/// `hide_dotfiles` is set.
pub fn is_hidden(entry: &Entry, hide_dotfiles: bool) -> bool {
    let marked = entry.name.starts_with(HIDDEN_MARKER);
    marked && (entry.is_directory || hide_dotfiles)
}

/// Resolve the entity kind for a visible entry from its content type.
pub fn content_kind(entry: &Entry) -> Result<EntityKind, EntityError> {
    if entry.is_directory {
        return Ok(EntityKind::Directory);
    }

    let Some(content_type) = mime_guess::from_path(&entry.path).first() else {
        return Err(EntityError::ClassificationUnknown {
            path: entry.path.clone(),
        });
    };

    let major = content_type.type_();
    if major == mime::IMAGE {
        Ok(EntityKind::Image)
    } else if major == mime::TEXT {
        Ok(EntityKind::Text)
    } else {
        Err(EntityError::UnsupportedType {
            path: entry.path.clone(),
            mime: content_type.essence_str().to_string(),
        })
    }
}

/// Map an entry to the kind of entity it renders as, or `None` when the entry
/// is hidden.
pub fn classify(entry: &Entry, hide_dotfiles: bool) -> Option<EntityKind> {
    if is_hidden(entry, hide_dotfiles) {
        return None;
    }

    Some(content_kind(entry).unwrap_or_else(|err| {
        debug!("{err}");
        EntityKind::Error
    }))
}
