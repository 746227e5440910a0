//! Ordered collections of scene objects.

use glam::Vec3;

use super::object::SceneObject;
use crate::error::SceneError;
use crate::model::Model;
use crate::render::Canvas3d;

/// An ordered list of [`SceneObject`]s.
///
/// Insertion order is draw order. The scene owns every model it holds, and
/// each one is released exactly once: when it is removed, when the scene is
/// cleared, or when the scene is dropped.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an unrotated object and returns its index.
    pub fn add_object(
        &mut self,
        model: Model,
        position: Vec3,
        scale: f32,
        name: impl Into<String>,
    ) -> usize {
        self.push(SceneObject::new(model, position, scale, name))
    }

    /// Appends an object rotated by `rotation` (degrees: pitch, yaw, roll).
    pub fn add_object_with_rotation(
        &mut self,
        model: Model,
        position: Vec3,
        rotation: Vec3,
        scale: f32,
        name: impl Into<String>,
    ) -> usize {
        self.push(SceneObject::new(model, position, scale, name).with_rotation(rotation))
    }

    /// Appends a fully configured object and returns its index.
    pub fn push(&mut self, object: SceneObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    pub fn object(&self, index: usize) -> Result<&SceneObject, SceneError> {
        let len = self.objects.len();
        self.objects
            .get(index)
            .ok_or(SceneError::ObjectOutOfRange { index, len })
    }

    pub fn object_mut(&mut self, index: usize) -> Result<&mut SceneObject, SceneError> {
        let len = self.objects.len();
        self.objects
            .get_mut(index)
            .ok_or(SceneError::ObjectOutOfRange { index, len })
    }

    /// First object with the given name.
    pub fn find_object_by_name(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn find_object_by_name_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.name == name)
    }

    /// Removes the object at `index`, shifting later objects down.
    ///
    /// The model is released when the returned object is dropped.
    pub fn remove_object(&mut self, index: usize) -> Result<SceneObject, SceneError> {
        if index >= self.objects.len() {
            return Err(SceneError::ObjectOutOfRange {
                index,
                len: self.objects.len(),
            });
        }
        Ok(self.objects.remove(index))
    }

    /// Removes and releases the first object with the given name.
    ///
    /// Returns `false` if no object has that name.
    pub fn remove_object_by_name(&mut self, name: &str) -> bool {
        match self.objects.iter().position(|o| o.name == name) {
            Some(index) => {
                self.objects.remove(index);
                true
            }
            None => false,
        }
    }

    /// Draws every object in insertion order.
    pub fn draw(&self, canvas: &mut dyn Canvas3d) {
        for object in &self.objects {
            object.draw(canvas);
        }
    }

    /// Removes and releases every object.
    pub fn clear(&mut self) {
        if !self.objects.is_empty() {
            log::debug!("releasing {} scene objects", self.objects.len());
        }
        self.objects.clear();
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingCanvas;

    fn cube() -> Model {
        Model::cube(1.0)
    }

    #[test]
    fn add_returns_consecutive_indices() {
        let mut scene = Scene::new();
        assert_eq!(scene.add_object(cube(), Vec3::ZERO, 1.0, "a"), 0);
        assert_eq!(
            scene.add_object_with_rotation(cube(), Vec3::X, Vec3::new(0.0, 90.0, 0.0), 1.0, "b"),
            1
        );
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.object(1).map(|o| o.rotation.y), Ok(90.0));
    }

    #[test]
    fn out_of_range_access_is_an_error() {
        let mut scene = Scene::new();
        scene.add_object(cube(), Vec3::ZERO, 1.0, "only");

        assert_eq!(
            scene.object(1).err(),
            Some(SceneError::ObjectOutOfRange { index: 1, len: 1 })
        );
        assert!(scene.object_mut(5).is_err());
        assert!(scene.remove_object(1).is_err());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn lookup_by_name_returns_first_match() {
        let mut scene = Scene::new();
        scene.add_object(cube(), Vec3::X, 1.0, "twin");
        scene.add_object(cube(), Vec3::Y, 1.0, "twin");

        let found = scene.find_object_by_name("twin").map(|o| o.position);
        assert_eq!(found, Some(Vec3::X));
        assert!(scene.find_object_by_name("missing").is_none());

        if let Some(obj) = scene.find_object_by_name_mut("twin") {
            obj.scale = 3.0;
        }
        assert_eq!(scene.object(0).map(|o| o.scale), Ok(3.0));
        assert_eq!(scene.object(1).map(|o| o.scale), Ok(1.0));
    }

    #[test]
    fn removal_shifts_later_objects_down() {
        let mut scene = Scene::new();
        for name in ["a", "b", "c"] {
            scene.add_object(cube(), Vec3::ZERO, 1.0, name);
        }

        let removed = scene.remove_object(1).map(|o| o.name);
        assert_eq!(removed.as_deref(), Ok("b"));
        assert_eq!(scene.object(1).map(|o| o.name.as_str()), Ok("c"));
    }

    #[test]
    fn removing_then_adding_keeps_the_length() {
        let mut scene = Scene::new();
        for name in ["a", "b", "c", "d"] {
            scene.add_object(cube(), Vec3::ZERO, 1.0, name);
        }

        scene.remove_object(1).unwrap();
        assert!(scene.remove_object_by_name("d"));
        assert_eq!(scene.add_object(cube(), Vec3::X, 1.0, "e"), 2);
        assert_eq!(scene.add_object(cube(), Vec3::Y, 1.0, "f"), 3);

        assert_eq!(scene.len(), 4);
        let names: Vec<&str> = (0..scene.len())
            .map(|i| scene.object(i).map(|o| o.name.as_str()))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(names, ["a", "c", "e", "f"]);
    }

    #[test]
    fn removing_releases_the_model() {
        let mut scene = Scene::new();
        let model = cube();
        let watch = model.watch();
        scene.add_object(model, Vec3::ZERO, 1.0, "doomed");

        assert!(scene.remove_object_by_name("doomed"));
        assert!(watch.upgrade().is_none());
        assert!(!scene.remove_object_by_name("doomed"));
    }

    #[test]
    fn clear_and_drop_release_every_model() {
        let mut scene = Scene::new();
        let first = cube();
        let second = cube();
        let watches = [first.watch(), second.watch()];
        scene.add_object(first, Vec3::ZERO, 1.0, "");
        scene.add_object(second, Vec3::ZERO, 1.0, "");

        scene.clear();
        assert!(scene.is_empty());
        assert!(watches.iter().all(|w| w.upgrade().is_none()));

        let third = cube();
        let watch = third.watch();
        scene.add_object(third, Vec3::ZERO, 1.0, "");
        drop(scene);
        assert!(watch.upgrade().is_none());
    }

    #[test]
    fn draw_visits_objects_in_order() {
        let mut scene = Scene::new();
        scene.add_object(cube(), Vec3::X, 1.0, "");
        scene.add_object(cube(), Vec3::Y, 1.0, "");

        let mut canvas = RecordingCanvas::new();
        scene.draw(&mut canvas);

        let positions: Vec<Vec3> = canvas
            .models()
            .filter_map(|op| match op {
                crate::render::DrawOp::Model { position, .. } => Some(*position),
                _ => None,
            })
            .collect();
        assert_eq!(positions, vec![Vec3::X, Vec3::Y]);
    }
}
