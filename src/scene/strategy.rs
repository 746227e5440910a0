use crate::error::SceneError;
use crate::render::Canvas3d;

/// A self-contained scene driven by the [`SceneManager`](super::SceneManager).
///
/// The manager guarantees `initialize` runs before the first `update`/`draw`
/// after activation, and `cleanup` runs before another scene is initialized.
/// Both hooks should be idempotent.
pub trait SceneStrategy {
    /// Display name, shown in the window title.
    fn name(&self) -> &str;

    /// Acquires the scene's resources.
    fn initialize(&mut self) -> Result<(), SceneError>;

    /// Advances the scene by `dt` seconds.
    fn update(&mut self, dt: f32);

    fn draw(&self, canvas: &mut dyn Canvas3d);

    /// Releases everything `initialize` acquired.
    fn cleanup(&mut self) -> Result<(), SceneError>;
}
