//! A single placed model.

use glam::{Mat4, Quat, Vec3};

use crate::color::Color;
use crate::model::Model;
use crate::render::Canvas3d;

/// A model placed in the world.
///
/// Rotation is stored as Euler angles in degrees: `x` is pitch, `y` is yaw
/// and `z` is roll. The object owns its model; dropping the object releases
/// it.
#[derive(Debug)]
pub struct SceneObject {
    pub model: Model,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
    pub tint: Color,
    /// Empty for unnamed objects.
    pub name: String,
}

impl SceneObject {
    pub fn new(model: Model, position: Vec3, scale: f32, name: impl Into<String>) -> Self {
        Self {
            model,
            position,
            rotation: Vec3::ZERO,
            scale,
            tint: Color::WHITE,
            name: name.into(),
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    /// Orientation built as roll · yaw · pitch, so pitch is applied first.
    pub fn orientation(&self) -> Quat {
        let Vec3 {
            x: pitch,
            y: yaw,
            z: roll,
        } = self.rotation;
        Quat::from_rotation_z(roll.to_radians())
            * Quat::from_rotation_y(yaw.to_radians())
            * Quat::from_rotation_x(pitch.to_radians())
    }

    /// World matrix: translation · rotation · scale.
    pub fn transform_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.orientation(),
            self.position,
        )
    }

    /// Rotation as `(axis, radians)` for [`Canvas3d::draw_model_ex`].
    ///
    /// Yaw-only rotations skip the quaternion and turn about +Y directly.
    pub fn axis_angle(&self) -> (Vec3, f32) {
        if self.rotation.x != 0.0 || self.rotation.z != 0.0 {
            self.orientation().to_axis_angle()
        } else {
            (Vec3::Y, self.rotation.y.to_radians())
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas3d) {
        let (axis, angle) = self.axis_angle();
        canvas.draw_model_ex(
            &self.model,
            self.position,
            axis,
            angle,
            Vec3::splat(self.scale),
            self.tint,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawOp, RecordingCanvas};
    use approx::assert_abs_diff_eq;

    fn object(rotation: Vec3) -> SceneObject {
        SceneObject::new(Model::cube(1.0), Vec3::new(1.0, 2.0, 3.0), 2.0, "sample")
            .with_rotation(rotation)
    }

    fn matrix_from_axis_angle(obj: &SceneObject) -> Mat4 {
        let (axis, angle) = obj.axis_angle();
        Mat4::from_scale_rotation_translation(
            Vec3::splat(obj.scale),
            Quat::from_axis_angle(axis.normalize_or(Vec3::Y), angle),
            obj.position,
        )
    }

    #[test]
    fn yaw_only_shortcut_matches_full_rotation() {
        let obj = object(Vec3::new(0.0, 37.0, 0.0));
        assert_abs_diff_eq!(matrix_from_axis_angle(&obj), obj.transform_matrix(), epsilon = 1e-5);
    }

    #[test]
    fn quarter_turn_yaw_matches_full_rotation() {
        let obj = object(Vec3::new(0.0, 90.0, 0.0));
        let (axis, angle) = obj.axis_angle();
        assert_eq!(axis, Vec3::Y);
        assert_abs_diff_eq!(angle, std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
        assert_abs_diff_eq!(matrix_from_axis_angle(&obj), obj.transform_matrix(), epsilon = 1e-5);

        let (full_axis, full_angle) = obj.orientation().to_axis_angle();
        assert_abs_diff_eq!(full_axis, Vec3::Y, epsilon = 1e-5);
        assert_abs_diff_eq!(full_angle, angle, epsilon = 1e-5);
    }

    #[test]
    fn pitch_and_roll_use_full_rotation() {
        let obj = object(Vec3::new(20.0, 45.0, -30.0));
        assert_abs_diff_eq!(matrix_from_axis_angle(&obj), obj.transform_matrix(), epsilon = 1e-5);
    }

    #[test]
    fn scale_is_applied_before_rotation_and_translation() {
        let obj = object(Vec3::new(0.0, 90.0, 0.0));
        let p = obj.transform_matrix().transform_point3(Vec3::X);
        // 2 units along +X, yawed to -Z, then moved.
        assert_abs_diff_eq!(p, Vec3::new(1.0, 2.0, 1.0), epsilon = 1e-5);
    }

    #[test]
    fn pitch_rotates_about_x() {
        let obj = SceneObject::new(Model::cube(1.0), Vec3::ZERO, 1.0, "")
            .with_rotation(Vec3::new(90.0, 0.0, 0.0));
        let p = obj.transform_matrix().transform_point3(Vec3::Y);
        assert_abs_diff_eq!(p, Vec3::Z, epsilon = 1e-5);
    }

    #[test]
    fn draw_issues_one_model_call() {
        let obj = object(Vec3::ZERO).with_tint(Color::GOLD);
        let mut canvas = RecordingCanvas::new();
        obj.draw(&mut canvas);

        assert_eq!(canvas.ops.len(), 1);
        match &canvas.ops[0] {
            DrawOp::Model {
                position,
                axis,
                angle,
                scale,
                tint,
                ..
            } => {
                assert_eq!(*position, Vec3::new(1.0, 2.0, 3.0));
                assert_eq!(*axis, Vec3::Y);
                assert_eq!(*angle, 0.0);
                assert_eq!(*scale, Vec3::splat(2.0));
                assert_eq!(*tint, Color::GOLD);
            }
            other => panic!("unexpected draw {other:?}"),
        }
    }
}
