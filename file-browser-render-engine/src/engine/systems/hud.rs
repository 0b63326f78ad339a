use bevy::prelude::*;

use constants::render_settings::{HUD_FONT_SIZE, HUD_TEXT_COLOUR};

use crate::engine::core::app_state::BrowserState;
use crate::engine::navigation::Navigation;

#[derive(Component)]
pub struct FpsText;

#[derive(Component)]
pub struct StatusText;

const KEY_HINTS: &str = "click: open directory | backspace: back | wasd/space/shift: move | esc: quit";

/// Last problem worth showing to the user, cleared by the next successful
/// navigation.
#[derive(Resource, Default, Debug)]
pub struct StatusLine {
    message: Option<String>,
}

impl StatusLine {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Status text for the current navigation state.
pub fn status_text(navigation: &Navigation, status: &StatusLine) -> String {
    let mut lines = Vec::new();

    match navigation.phase() {
        BrowserState::Loading => {
            let path = navigation
                .loading_path()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            lines.push(format!("Loading {path}..."));
        }
        BrowserState::Idle => lines.push("No directory shown".to_string()),
        BrowserState::Active => {}
    }

    if let Some(scene) = navigation.active() {
        lines.push(format!(
            "{}  ({} entries, history {})",
            scene.path.display(),
            scene.entities.len(),
            navigation.history_depth()
        ));
    }
    if let Some(message) = status.message() {
        lines.push(message.to_string());
    }
    lines.push(KEY_HINTS.to_string());

    lines.join("\n")
}

pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: HUD_FONT_SIZE,
                    ..default()
                },
                TextColor(HUD_TEXT_COLOUR),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: HUD_FONT_SIZE,
                    ..default()
                },
                TextColor(HUD_TEXT_COLOUR),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                StatusText,
            ));
            parent.spawn((
                Text::new("+"),
                TextFont {
                    font_size: HUD_FONT_SIZE * 1.5,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Percent(50.0),
                    top: Val::Percent(50.0),
                    ..default()
                },
            ));
        });
}

pub fn status_text_update_system(
    navigation: Res<Navigation>,
    status: Res<StatusLine>,
    mut query: Query<&mut Text, With<StatusText>>,
) {
    if !navigation.is_changed() && !status.is_changed() {
        return;
    }
    for mut text in &mut query {
        text.0 = status_text(&navigation, &status);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn idle_status_mentions_no_directory() {
        let text = status_text(&Navigation::default(), &StatusLine::default());
        assert!(text.starts_with("No directory shown"));
        assert!(text.ends_with(KEY_HINTS));
    }

    #[test]
    fn loading_status_names_the_path() {
        let mut navigation = Navigation::default();
        navigation.begin_descend(PathBuf::from("/srv/data")).unwrap();

        let mut status = StatusLine::default();
        status.show("cannot go back: history is empty");

        let text = status_text(&navigation, &status);
        assert!(text.contains("Loading /srv/data..."));
        assert!(text.contains("cannot go back"));
    }
}
