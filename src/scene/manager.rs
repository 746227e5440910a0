//! Scene manager for storing and switching between scenes.

use super::strategy::SceneStrategy;
use crate::error::SceneError;
use crate::render::Canvas3d;

/// Whether the manager has a current scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManagerState {
    /// No scenes registered.
    Empty,
    /// The scene at this index is current.
    Active(usize),
}

/// What a scene switch ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The target was already current, or there is nothing to switch to.
    Unchanged,
    /// The target scene is now current and initialized.
    Activated(usize),
    /// The current scene failed to clean up; it stays current.
    CleanupFailed,
    /// The target failed to initialize; scene 0 was initialized instead.
    FellBack,
    /// The target and scene 0 both failed to initialize. Scene 0 is current
    /// but not initialized.
    Degraded,
}

/// Owns every registered scene and drives transitions between them.
///
/// Scenes are append-only. At most one scene is initialized at a time: the
/// current scene is always cleaned up before the next one is initialized.
#[derive(Default)]
pub struct SceneManager {
    scenes: Vec<Box<dyn SceneStrategy>>,
    current: Option<usize>,
}

impl SceneManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a scene. `None` is ignored.
    ///
    /// The first registered scene is activated immediately.
    pub fn register_scene(&mut self, scene: Option<Box<dyn SceneStrategy>>) {
        let Some(scene) = scene else {
            log::warn!("ignoring empty scene registration");
            return;
        };

        log::info!("registered scene '{}'", scene.name());
        self.scenes.push(scene);

        if self.current.is_none() {
            self.activate(0);
        }
    }

    pub fn register(&mut self, scene: impl SceneStrategy + 'static) {
        self.register_scene(Some(Box::new(scene)));
    }

    /// Makes scene `index` current.
    ///
    /// Out-of-range indices leave the manager untouched.
    pub fn switch_to_scene(&mut self, index: usize) -> Result<SwitchOutcome, SceneError> {
        if index >= self.scenes.len() {
            let err = SceneError::SceneOutOfRange {
                index,
                len: self.scenes.len(),
            };
            log::warn!("{err}");
            return Err(err);
        }
        Ok(self.activate(index))
    }

    pub fn switch_to_next_scene(&mut self) -> SwitchOutcome {
        match self.cursor() {
            Some(current) => self.activate((current + 1) % self.scenes.len()),
            None => SwitchOutcome::Unchanged,
        }
    }

    pub fn switch_to_previous_scene(&mut self) -> SwitchOutcome {
        match self.cursor() {
            Some(0) => self.activate(self.scenes.len() - 1),
            Some(current) => self.activate(current - 1),
            None => SwitchOutcome::Unchanged,
        }
    }

    /// The current index for navigation, reset to 0 if it went stale.
    fn cursor(&mut self) -> Option<usize> {
        if self.scenes.is_empty() {
            return None;
        }
        match self.current {
            Some(index) if index < self.scenes.len() => Some(index),
            stale => {
                log::warn!("scene cursor {stale:?} is invalid, resetting to 0");
                self.current = Some(0);
                Some(0)
            }
        }
    }

    fn activate(&mut self, index: usize) -> SwitchOutcome {
        if self.current == Some(index) {
            return SwitchOutcome::Unchanged;
        }

        if let Some(scene) = self.current.and_then(|i| self.scenes.get_mut(i)) {
            if let Err(err) = scene.cleanup() {
                log::error!("{err}; staying on '{}'", scene.name());
                return SwitchOutcome::CleanupFailed;
            }
        }

        self.current = Some(index);
        let scene = &mut self.scenes[index];
        match scene.initialize() {
            Ok(()) => {
                log::info!("switched to scene '{}'", scene.name());
                SwitchOutcome::Activated(index)
            }
            Err(err) => {
                log::error!("{err}; falling back to scene 0");
                self.fall_back()
            }
        }
    }

    /// Makes scene 0 current and tries to initialize it once.
    fn fall_back(&mut self) -> SwitchOutcome {
        self.current = Some(0);
        let scene = &mut self.scenes[0];
        match scene.initialize() {
            Ok(()) => {
                log::info!("recovered on scene '{}'", scene.name());
                SwitchOutcome::FellBack
            }
            Err(err) => {
                log::error!("{err}; no scene is initialized");
                SwitchOutcome::Degraded
            }
        }
    }

    /// Advances the current scene, if any.
    pub fn update(&mut self, dt: f32) {
        if let Some(scene) = self.current.and_then(|i| self.scenes.get_mut(i)) {
            scene.update(dt);
        }
    }

    /// Draws the current scene, if any.
    pub fn draw(&self, canvas: &mut dyn Canvas3d) {
        if let Some(scene) = self.current_scene() {
            scene.draw(canvas);
        }
    }

    pub fn state(&self) -> ManagerState {
        match self.current {
            Some(index) => ManagerState::Active(index),
            None => ManagerState::Empty,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_scene(&self) -> Option<&dyn SceneStrategy> {
        self.current
            .and_then(|i| self.scenes.get(i))
            .map(|scene| scene.as_ref())
    }

    pub fn current_scene_name(&self) -> Option<&str> {
        self.current_scene().map(|scene| scene.name())
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}
