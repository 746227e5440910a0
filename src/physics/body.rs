//! ECS components for physics-driven objects.
//!
//! Every object in the physics scene is one `hecs` entity carrying a
//! [`PhysicsBody`] and a [`Renderable`]. The static floor additionally has the
//! [`Ground`] tag. Ground and boxes are otherwise handled the same way.
//!
//! ```ignore
//! world.spawn((
//!     PhysicsBody::new(body, collider, half_extents),
//!     Renderable::new(Model::cube(1.0), Color::RED, Vec3::ONE),
//!     Name::new("box 0"),
//! ));
//! ```

use glam::{Quat, Vec3};
use rapier3d::prelude::{ColliderHandle, RigidBodyHandle};

use crate::color::Color;
use crate::model::Model;

/// A body's world transform as of the last simulation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionState {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl MotionState {
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }
}

/// Handles into the physics world for one rigid body and its box collider.
#[derive(Clone, Copy, Debug)]
pub struct PhysicsBody {
    pub body: RigidBodyHandle,
    pub collider: ColliderHandle,
    /// `None` until the first sync; drawing then reads the body directly.
    pub motion_state: Option<MotionState>,
    pub half_extents: Vec3,
}

impl PhysicsBody {
    pub fn new(body: RigidBodyHandle, collider: ColliderHandle, half_extents: Vec3) -> Self {
        Self {
            body,
            collider,
            motion_state: None,
            half_extents,
        }
    }

    pub fn with_motion_state(mut self, state: MotionState) -> Self {
        self.motion_state = Some(state);
        self
    }
}

/// The model mirrored onto a physics body.
#[derive(Debug)]
pub struct Renderable {
    pub model: Model,
    pub color: Color,
    /// Model-space scale applied before the body's transform.
    pub scale: Vec3,
}

impl Renderable {
    pub fn new(model: Model, color: Color, scale: Vec3) -> Self {
        Self {
            model,
            color,
            scale,
        }
    }
}

/// Tag for the static floor.
#[derive(Clone, Copy, Debug)]
pub struct Ground;

/// Debug name of a physics object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Name(pub String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
