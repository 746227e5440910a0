//! Falling boxes on a static floor.

use glam::Vec3;

use super::body::{Ground, MotionState, Name, PhysicsBody, Renderable};
use super::timestep::FixedTimestep;
use super::world::PhysicsWorld;
use crate::color::Color;
use crate::config::PhysicsConfig;
use crate::error::SceneError;
use crate::model::Model;
use crate::render::Canvas3d;
use crate::scene::SceneStrategy;

const SCENE_NAME: &str = "Physics";

/// Everything that exists only while the scene is initialized.
struct Simulation {
    world: PhysicsWorld,
    objects: hecs::World,
    clock: FixedTimestep,
}

/// A rigid-body demo scene.
///
/// `initialize` and `cleanup` are both idempotent. Cleanup takes the
/// simulation out of the scene before releasing it, so the scene already reads
/// as uninitialized while the teardown runs.
pub struct PhysicsScene {
    config: PhysicsConfig,
    simulation: Option<Simulation>,
}

impl PhysicsScene {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            simulation: None,
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.simulation.is_some()
    }

    /// Number of physics objects (ground included).
    pub fn object_count(&self) -> usize {
        self.simulation
            .as_ref()
            .map_or(0, |sim| sim.objects.len() as usize)
    }

    /// Number of rigid bodies in the physics world.
    pub fn body_count(&self) -> usize {
        self.simulation
            .as_ref()
            .map_or(0, |sim| sim.world.body_count())
    }

    fn validate(&self) -> Result<(), SceneError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        let c = &self.config;
        let reason = if !c.gravity.is_finite() {
            "gravity must be finite"
        } else if !positive(c.box_mass) {
            "box mass must be positive"
        } else if !positive(c.box_half_size) {
            "box size must be positive"
        } else if !positive(c.fixed_time_step) {
            "time step must be positive"
        } else if !positive(c.ground_half_extents.min_element()) {
            "ground extents must be positive"
        } else {
            return Ok(());
        };
        Err(SceneError::initialize(SCENE_NAME, reason))
    }

    fn build(config: &PhysicsConfig) -> Simulation {
        let mut world = PhysicsWorld::new(config.gravity, config.fixed_time_step);
        let mut objects = hecs::World::new();

        let ground_position = Vec3::new(0.0, config.ground_y, 0.0);
        let (body, collider) = world.add_box(ground_position, config.ground_half_extents, None);
        objects.spawn((
            PhysicsBody::new(body, collider, config.ground_half_extents)
                .with_motion_state(MotionState::new(ground_position, glam::Quat::IDENTITY)),
            Renderable::new(
                Model::cube(1.0),
                Color::DARK_GREEN,
                config.ground_half_extents * 2.0,
            ),
            Ground,
            Name::new("ground"),
        ));

        let grid = config.grid_size();
        let half_extents = Vec3::splat(config.box_half_size);
        let center = grid as f32 / 2.0;
        for i in 0..grid {
            for j in 0..grid {
                let index = i * grid + j;
                let position = Vec3::new(
                    (i as f32 - center) * config.spacing,
                    config.start_height,
                    (j as f32 - center) * config.spacing,
                );
                let (body, collider) = world.add_box(position, half_extents, Some(config.box_mass));
                let hue = index as f32 / config.box_count as f32 * 360.0;

                objects.spawn((
                    PhysicsBody::new(body, collider, half_extents)
                        .with_motion_state(MotionState::new(position, glam::Quat::IDENTITY)),
                    Renderable::new(
                        Model::cube(1.0),
                        Color::from_hsv(hue, 0.8, 0.9),
                        half_extents * 2.0,
                    ),
                    Name::new(format!("box {index}")),
                ));
            }
        }

        Simulation {
            world,
            objects,
            clock: FixedTimestep::new(config.fixed_time_step, config.max_sub_steps),
        }
    }
}

impl Simulation {
    fn sync_motion_states(&mut self) {
        for (_, body) in self.objects.query_mut::<&mut PhysicsBody>() {
            if let Some(state) = self.world.body_transform(body.body) {
                body.motion_state = Some(state);
            }
        }
    }

    fn teardown(mut self) {
        let handles: Vec<_> = self
            .objects
            .query::<&PhysicsBody>()
            .iter()
            .map(|(_, body)| body.body)
            .collect();

        for handle in handles {
            self.world.remove_body(handle);
        }

        // Drops every Renderable and with it the models.
        self.objects.clear();
        self.world.teardown();
    }
}

impl SceneStrategy for PhysicsScene {
    fn name(&self) -> &str {
        SCENE_NAME
    }

    fn initialize(&mut self) -> Result<(), SceneError> {
        if self.simulation.is_some() {
            return Ok(());
        }
        self.validate()?;

        let simulation = Self::build(&self.config);
        log::info!(
            "physics scene ready: {} objects, {} bodies",
            simulation.objects.len(),
            simulation.world.body_count()
        );
        self.simulation = Some(simulation);
        Ok(())
    }

    fn update(&mut self, dt: f32) {
        let Some(sim) = self.simulation.as_mut() else {
            return;
        };

        let steps = sim.clock.advance(dt);
        for _ in 0..steps {
            sim.world.step();
        }
        if steps > 0 {
            sim.sync_motion_states();
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas3d) {
        let Some(sim) = self.simulation.as_ref() else {
            return;
        };

        for (_, (body, renderable)) in sim.objects.query::<(&PhysicsBody, &Renderable)>().iter() {
            let Some(state) = body
                .motion_state
                .or_else(|| sim.world.body_transform(body.body))
            else {
                continue;
            };

            let (axis, angle) = state.rotation.to_axis_angle();
            canvas.draw_model_ex(
                &renderable.model,
                state.translation,
                axis,
                angle,
                renderable.scale,
                renderable.color,
            );
            canvas.draw_cube_wires(state.translation, body.half_extents * 2.0, Color::DARK_GRAY);
        }
    }

    fn cleanup(&mut self) -> Result<(), SceneError> {
        if let Some(simulation) = self.simulation.take() {
            simulation.teardown();
            log::info!("physics scene released");
        }
        Ok(())
    }
}

impl Drop for PhysicsScene {
    fn drop(&mut self) {
        if let Some(simulation) = self.simulation.take() {
            simulation.teardown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawOp, RecordingCanvas};
    use approx::assert_abs_diff_eq;

    fn ground_scale() -> Vec3 {
        PhysicsConfig::default().ground_half_extents * 2.0
    }

    /// Positions of drawn boxes and the ground, in draw order.
    fn drawn(scene: &PhysicsScene) -> (Vec<Vec3>, Option<Vec3>) {
        let mut canvas = RecordingCanvas::new();
        scene.draw(&mut canvas);

        let mut boxes = Vec::new();
        let mut ground = None;
        for op in canvas.models() {
            if let DrawOp::Model {
                position, scale, ..
            } = op
            {
                if *scale == ground_scale() {
                    ground = Some(*position);
                } else {
                    boxes.push(*position);
                }
            }
        }
        (boxes, ground)
    }

    #[test]
    fn initialize_builds_ground_and_box_grid() {
        let mut scene = PhysicsScene::new(PhysicsConfig::default());
        assert!(!scene.is_initialized());
        scene.initialize().unwrap();

        assert_eq!(scene.object_count(), 10);
        assert_eq!(scene.body_count(), 10);

        let sim = scene.simulation.as_ref().unwrap();
        let grounds: Vec<String> = sim
            .objects
            .query::<(&Ground, &Name)>()
            .iter()
            .map(|(_, (_, name))| name.0.clone())
            .collect();
        assert_eq!(grounds.len(), 1);
        assert_eq!(scene.config().box_count, 10);

        let (boxes, ground) = drawn(&scene);
        assert_eq!(boxes.len(), 9);
        assert_eq!(ground, Some(Vec3::new(0.0, -0.5, 0.0)));
        assert!(boxes.contains(&Vec3::new(-3.0, 5.0, -3.0)));
        assert!(boxes.contains(&Vec3::new(1.0, 5.0, 1.0)));
        assert!(!boxes.iter().any(|p| p.x == 3.0 || p.z == 3.0));
    }

    #[test]
    fn box_grid_is_offset_by_half_its_width() {
        let mut scene = PhysicsScene::new(PhysicsConfig::default());
        scene.initialize().unwrap();

        let (boxes, _) = drawn(&scene);
        let axes: [fn(&Vec3) -> f32; 2] = [|p| p.x, |p| p.z];
        for axis in axes {
            let mut coords: Vec<f32> = boxes.iter().map(axis).collect();
            coords.sort_by(f32::total_cmp);
            coords.dedup();
            assert_eq!(coords, vec![-3.0, -1.0, 1.0]);
        }
    }

    #[test]
    fn every_object_gets_a_model_and_a_wireframe() {
        let mut scene = PhysicsScene::new(PhysicsConfig::default());
        scene.initialize().unwrap();

        let mut canvas = RecordingCanvas::new();
        scene.draw(&mut canvas);
        assert_eq!(canvas.model_count(), 10);
        assert_eq!(canvas.wire_count(), 10);

        let wire_sizes: Vec<Vec3> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::CubeWires { size, color, .. } => {
                    assert_eq!(*color, Color::DARK_GRAY);
                    Some(*size)
                }
                _ => None,
            })
            .collect();
        assert!(wire_sizes.contains(&Vec3::ONE));
        assert!(wire_sizes.contains(&ground_scale()));
    }

    #[test]
    fn initialize_twice_is_a_no_op() {
        let mut scene = PhysicsScene::new(PhysicsConfig::default());
        scene.initialize().unwrap();
        scene.initialize().unwrap();
        assert_eq!(scene.body_count(), 10);
    }

    #[test]
    fn reinitializing_after_cleanup_matches_a_fresh_start() {
        let mut fresh = PhysicsScene::new(PhysicsConfig::default());
        fresh.initialize().unwrap();

        let mut cycled = PhysicsScene::new(PhysicsConfig::default());
        cycled.initialize().unwrap();
        cycled.update(0.5);
        cycled.cleanup().unwrap();
        assert!(!cycled.is_initialized());
        assert_eq!(cycled.object_count(), 0);
        cycled.cleanup().unwrap();
        cycled.initialize().unwrap();

        assert_eq!(cycled.object_count(), fresh.object_count());
        assert_eq!(cycled.body_count(), fresh.body_count());

        let (mut a, ga) = drawn(&fresh);
        let (mut b, gb) = drawn(&cycled);
        let key = |v: &Vec3| (v.x.to_bits(), v.z.to_bits());
        a.sort_by_key(key);
        b.sort_by_key(key);
        assert_eq!(a, b);
        assert_eq!(ga, gb);
    }

    #[test]
    fn cleanup_releases_models() {
        let mut scene = PhysicsScene::new(PhysicsConfig::default());
        scene.initialize().unwrap();

        let watches: Vec<_> = {
            let sim = scene.simulation.as_ref().unwrap();
            sim.objects
                .query::<&Renderable>()
                .iter()
                .map(|(_, r)| r.model.watch())
                .collect()
        };
        assert_eq!(watches.len(), 10);

        scene.cleanup().unwrap();
        assert!(watches.iter().all(|w| w.upgrade().is_none()));
    }

    #[test]
    fn boxes_fall_and_the_ground_stays() {
        let mut scene = PhysicsScene::new(PhysicsConfig::default());
        scene.initialize().unwrap();
        for _ in 0..3 {
            scene.update(1.0 / 6.0);
        }

        let (boxes, ground) = drawn(&scene);
        assert!(boxes.iter().all(|p| p.y < 5.0));
        let ground = ground.unwrap();
        assert_abs_diff_eq!(ground, Vec3::new(0.0, -0.5, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn drawing_falls_back_to_the_body_without_motion_state() {
        let mut scene = PhysicsScene::new(PhysicsConfig::default());
        scene.initialize().unwrap();
        scene.update(0.25);

        let before = drawn(&scene);
        let sim = scene.simulation.as_mut().unwrap();
        for (_, body) in sim.objects.query_mut::<&mut PhysicsBody>() {
            body.motion_state = None;
        }
        // States were synced after the last step, so the body agrees with them.
        assert_eq!(drawn(&scene), before);
    }

    #[test]
    fn invalid_config_fails_to_initialize() {
        let config = PhysicsConfig {
            box_mass: 0.0,
            ..PhysicsConfig::default()
        };
        let mut scene = PhysicsScene::new(config);
        assert!(matches!(
            scene.initialize(),
            Err(SceneError::Initialize { .. })
        ));
        assert!(!scene.is_initialized());
    }

    #[test]
    fn updates_before_initialize_are_ignored() {
        let mut scene = PhysicsScene::new(PhysicsConfig::default());
        scene.update(1.0);
        let mut canvas = RecordingCanvas::new();
        scene.draw(&mut canvas);
        assert!(canvas.ops.is_empty());
    }
}
