//! Scenes and scene management.
//!
//! A [`Scene`] is a plain ordered list of [`SceneObject`]s. A
//! [`SceneStrategy`] is an interactive mode with a lifecycle
//! (initialize, update, draw, cleanup); the [`SceneManager`] owns every
//! strategy and switches between them.
//!
//! ```ignore
//! let mut manager = SceneManager::new();
//! manager.register(ShowcaseScene::new(geometry)); // activated immediately
//! manager.register(PhysicsScene::new(PhysicsConfig::default()));
//!
//! // Each frame:
//! manager.update(dt);
//! manager.draw(&mut queue);
//! ```

mod manager;
mod object;
#[allow(clippy::module_inception)]
mod scene;
mod showcase;
mod strategy;

pub use manager::{ManagerState, SceneManager, SwitchOutcome};
pub use object::SceneObject;
pub use scene::Scene;
pub use showcase::ShowcaseScene;
pub use strategy::SceneStrategy;
