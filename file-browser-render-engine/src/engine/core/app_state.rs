use bevy::prelude::*;

use crate::engine::navigation::Navigation;

/// Navigation lifecycle as a Bevy state, so systems can be gated on it.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum BrowserState {
    #[default]
    Idle,
    Loading,
    Active,
}

/// Mirror the navigation phase into `BrowserState`.
pub fn sync_browser_state(
    navigation: Res<Navigation>,
    state: Res<State<BrowserState>>,
    mut next_state: ResMut<NextState<BrowserState>>,
) {
    if !navigation.is_changed() {
        return;
    }

    let phase = navigation.phase();
    if *state.get() != phase {
        info!("→ Transitioning to {:?} state", phase);
        next_state.set(phase);
    }
}
