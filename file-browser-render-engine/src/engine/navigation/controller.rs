use std::path::{Path, PathBuf};

use bevy::prelude::*;

use crate::engine::core::app_state::BrowserState;
use crate::engine::scene::Scene;
use crate::error::{NavigationError, ScanError};

/// Render-side half of a scene swap.
///
/// `attach` makes a scene visible (spawning it the first time), `detach`
/// hides it while keeping everything alive, `release` destroys it.
pub trait SceneStage {
    fn attach(&mut self, scene: &mut Scene);
    fn detach(&mut self, scene: &Scene);
    fn release(&mut self, scene: Scene);
}

/// Active scene plus back-history.
///
/// Only main-schedule systems touch this; scans run elsewhere and hand their
/// result to `finish_descend`.
#[derive(Resource, Default, Debug)]
pub struct Navigation {
    active: Option<Scene>,
    history: Vec<Scene>,
    loading: Option<PathBuf>,
}

impl Navigation {
    pub fn phase(&self) -> BrowserState {
        if self.loading.is_some() {
            BrowserState::Loading
        } else if self.active.is_some() {
            BrowserState::Active
        } else {
            BrowserState::Idle
        }
    }

    pub fn active(&self) -> Option<&Scene> {
        self.active.as_ref()
    }

    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    pub fn loading_path(&self) -> Option<&Path> {
        self.loading.as_deref()
    }

    /// Mark `path` as loading. Rejected while another load is in flight.
    pub fn begin_descend(&mut self, path: PathBuf) -> Result<(), NavigationError> {
        if self.loading.is_some() {
            return Err(NavigationError::LoadInFlight);
        }
        info!("Descending into {}", path.display());
        self.loading = Some(path);
        Ok(())
    }

    /// Complete the in-flight load.
    ///
    /// On success the previous scene moves onto the history and the new one
    /// becomes active. On failure nothing but the loading flag changes.
    pub fn finish_descend(
        &mut self,
        result: Result<Scene, ScanError>,
        stage: &mut impl SceneStage,
    ) -> Result<&Scene, NavigationError> {
        self.loading = None;
        let mut scene = result?;

        if let Some(previous) = self.active.take() {
            stage.detach(&previous);
            self.history.push(previous);
        }
        stage.attach(&mut scene);
        info!(
            "Showing {} (history depth {})",
            scene.path.display(),
            self.history.len()
        );

        Ok(&*self.active.insert(scene))
    }

    /// Return to the most recently left scene without rescanning it.
    pub fn go_back(&mut self, stage: &mut impl SceneStage) -> Result<&Scene, NavigationError> {
        if self.loading.is_some() {
            return Err(NavigationError::LoadInFlight);
        }
        let mut restored = self.history.pop().ok_or(NavigationError::HistoryEmpty)?;

        if let Some(current) = self.active.take() {
            stage.detach(&current);
            stage.release(current);
        }
        stage.attach(&mut restored);
        info!(
            "Back to {} (history depth {})",
            restored.path.display(),
            self.history.len()
        );

        Ok(&*self.active.insert(restored))
    }
}
