use glam::Vec3;

use super::scene::Scene;
use super::strategy::SceneStrategy;
use crate::color::Color;
use crate::error::SceneError;
use crate::geometry::RawGeometry;
use crate::model::Model;
use crate::render::Canvas3d;

const HERO: &str = "hero";
/// Degrees per second.
const HERO_SPIN: f32 = 45.0;

/// The plain rendering scene: three copies of the startup model.
pub struct ShowcaseScene {
    geometry: RawGeometry,
    scene: Scene,
}

impl ShowcaseScene {
    pub fn new(geometry: RawGeometry) -> Self {
        Self {
            geometry,
            scene: Scene::new(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    fn model(&self) -> Model {
        Model::from_geometry(self.geometry.clone())
    }
}

impl SceneStrategy for ShowcaseScene {
    fn name(&self) -> &str {
        "Showcase"
    }

    fn initialize(&mut self) -> Result<(), SceneError> {
        if !self.scene.is_empty() {
            return Ok(());
        }
        if self.geometry.indices.is_empty() {
            return Err(SceneError::initialize(self.name(), "model has no triangles"));
        }

        let left = self.model();
        let hero = self.model();
        let right = self.model();

        self.scene.add_object_with_rotation(
            left,
            Vec3::new(-3.0, 0.0, 0.0),
            Vec3::new(0.0, 30.0, 0.0),
            1.0,
            "left",
        );
        let hero = self.scene.add_object(hero, Vec3::ZERO, 1.5, HERO);
        if let Ok(object) = self.scene.object_mut(hero) {
            object.tint = Color::GOLD;
        }
        let right = self.scene.add_object_with_rotation(
            right,
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(-20.0, -30.0, 15.0),
            1.0,
            "right",
        );
        if let Ok(object) = self.scene.object_mut(right) {
            object.tint = Color::SKY_BLUE;
        }

        log::debug!("showcase placed {} objects", self.scene.len());
        Ok(())
    }

    fn update(&mut self, dt: f32) {
        if let Some(hero) = self.scene.find_object_by_name_mut(HERO) {
            hero.rotation.y = (hero.rotation.y + HERO_SPIN * dt).rem_euclid(360.0);
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas3d) {
        self.scene.draw(canvas);
    }

    fn cleanup(&mut self) -> Result<(), SceneError> {
        self.scene.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingCanvas;
    use approx::assert_abs_diff_eq;

    #[test]
    fn initialize_places_three_copies_once() {
        let mut showcase = ShowcaseScene::new(RawGeometry::cube(1.0));
        showcase.initialize().unwrap();
        showcase.initialize().unwrap();
        assert_eq!(showcase.scene().len(), 3);

        let mut canvas = RecordingCanvas::new();
        showcase.draw(&mut canvas);
        assert_eq!(canvas.model_count(), 3);
    }

    #[test]
    fn hero_spins_with_time() {
        let mut showcase = ShowcaseScene::new(RawGeometry::cube(1.0));
        showcase.initialize().unwrap();
        showcase.update(2.0);

        let hero = showcase.scene().find_object_by_name(HERO).unwrap();
        assert_abs_diff_eq!(hero.rotation.y, 90.0, epsilon = 1e-4);
    }

    #[test]
    fn cleanup_releases_the_copies() {
        let mut showcase = ShowcaseScene::new(RawGeometry::cube(1.0));
        showcase.initialize().unwrap();
        let watch = showcase.scene().object(0).unwrap().model.watch();

        showcase.cleanup().unwrap();
        assert!(showcase.scene().is_empty());
        assert!(watch.upgrade().is_none());
    }

    #[test]
    fn empty_geometry_fails_to_initialize() {
        let mut showcase = ShowcaseScene::new(RawGeometry::default());
        assert!(matches!(
            showcase.initialize(),
            Err(SceneError::Initialize { .. })
        ));
    }
}
