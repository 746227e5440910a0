//! # Tableau
//!
//! **A small scene-switching demo on wgpu, rapier and hecs.**
//!
//! Tableau loads one model, arranges copies of it in a plain scene, runs a
//! rigid-body scene next to it and lets you flip between the two.
//!
//! ```no_run
//! use tableau::*;
//!
//! fn main() -> Result<(), AppError> {
//!     let geometry = GeometryLoader::from_file("assets/model.stl")
//!         .centered()
//!         .normalized()
//!         .build()?;
//!
//!     let mut scenes = SceneManager::new();
//!     scenes.register(ShowcaseScene::new(geometry));
//!     scenes.register(PhysicsScene::new(PhysicsConfig::default()));
//!
//!     run(AppConfig::default(), scenes)
//! }
//! ```
//!
//! Scenes only ever see the [`Canvas3d`] trait, so everything above the
//! renderer runs (and is tested) without a GPU.

mod app;
mod camera;
mod color;
pub mod config;
mod error;
mod geometry;
mod gpu;
mod input;
mod mesh;
mod model;
mod orbit_camera;
pub mod physics;
pub mod render;
pub mod scene;

pub use app::run;
pub use camera::Camera;
pub use color::Color;
pub use config::{AppConfig, PhysicsConfig};
pub use error::{AppError, GeometryError, GpuError, SceneError};
pub use geometry::{GeometryLoader, RawGeometry};
pub use gpu::GpuContext;
pub use input::Input;
pub use mesh::{LineVertex, Mesh, Vertex3d};
pub use model::Model;
pub use orbit_camera::OrbitCamera;
pub use physics::PhysicsScene;
pub use render::{Canvas3d, DrawQueue, MeshPass};
pub use scene::{
    ManagerState, Scene, SceneManager, SceneObject, SceneStrategy, ShowcaseScene, SwitchOutcome,
};
