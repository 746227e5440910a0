//! Thin ownership wrapper around a rapier physics world.

use glam::{Quat, Vec3};
use rapier3d::prelude::*;

use super::body::MotionState;

/// Every rapier structure needed to step a simulation.
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
}

pub(crate) fn to_glam_vec(v: &Vector<Real>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

pub(crate) fn to_glam_quat(r: &Rotation<Real>) -> Quat {
    Quat::from_xyzw(r.i, r.j, r.k, r.w)
}

impl PhysicsWorld {
    /// An empty world stepping `dt` seconds at a time.
    pub fn new(gravity: Vec3, dt: f32) -> Self {
        let integration_parameters = IntegrationParameters {
            dt,
            ..Default::default()
        };

        Self {
            gravity: vector![gravity.x, gravity.y, gravity.z],
            integration_parameters,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Adds a box body with a cuboid collider.
    ///
    /// A `mass` of `None` makes the body static.
    pub fn add_box(
        &mut self,
        position: Vec3,
        half_extents: Vec3,
        mass: Option<f32>,
    ) -> (RigidBodyHandle, ColliderHandle) {
        let builder = match mass {
            Some(_) => RigidBodyBuilder::dynamic(),
            None => RigidBodyBuilder::fixed(),
        };
        let body = self
            .bodies
            .insert(builder.translation(vector![position.x, position.y, position.z]).build());

        let mut collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z);
        if let Some(mass) = mass {
            collider = collider.mass(mass);
        }
        let collider = self
            .colliders
            .insert_with_parent(collider.build(), body, &mut self.bodies);

        (body, collider)
    }

    /// Removes a body together with its colliders.
    pub fn remove_body(&mut self, handle: RigidBodyHandle) -> bool {
        self.bodies
            .remove(
                handle,
                &mut self.islands,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    /// Runs one fixed step.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// The body's current world transform, if it exists.
    pub fn body_transform(&self, handle: RigidBodyHandle) -> Option<MotionState> {
        self.bodies.get(handle).map(|body| {
            MotionState::new(
                to_glam_vec(body.translation()),
                to_glam_quat(body.rotation()),
            )
        })
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    /// Releases the world's parts, dependents before what they depend on.
    pub fn teardown(self) {
        let Self {
            gravity: _,
            integration_parameters: _,
            pipeline,
            islands,
            broad_phase,
            narrow_phase,
            bodies,
            colliders,
            impulse_joints,
            multibody_joints,
            ccd_solver,
            query_pipeline,
        } = self;

        if !bodies.is_empty() {
            log::warn!("tearing down a world that still has {} bodies", bodies.len());
        }

        drop(query_pipeline);
        drop(ccd_solver);
        drop(multibody_joints);
        drop(impulse_joints);
        drop(narrow_phase);
        drop(broad_phase);
        drop(islands);
        drop(colliders);
        drop(bodies);
        drop(pipeline);
        log::debug!("physics world released");
    }
}
