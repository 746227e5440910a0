//! Rigid-body simulation backed by rapier.
//!
//! [`PhysicsWorld`] owns the rapier structures, [`FixedTimestep`] decides how
//! many steps each frame runs, and [`PhysicsScene`] ties them to `hecs`
//! entities that mirror bodies into draw calls.

mod body;
mod scene;
mod timestep;
mod world;

pub use body::{Ground, MotionState, Name, PhysicsBody, Renderable};
pub use scene::PhysicsScene;
pub use timestep::FixedTimestep;
pub use world::PhysicsWorld;
