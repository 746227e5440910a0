//! Per-frame draw queue.

use std::sync::Arc;

use glam::{Mat4, Quat, Vec3};

use super::Canvas3d;
use crate::color::Color;
use crate::mesh::LineVertex;
use crate::model::{Model, ModelData};

/// A model draw recorded for this frame.
#[derive(Debug)]
pub(crate) struct QueuedModel {
    pub(crate) model: Arc<ModelData>,
    pub(crate) transform: Mat4,
    pub(crate) color: Color,
}

/// Collects a frame's draw calls for [`MeshPass`](super::MeshPass).
///
/// Queued models share ownership with the scene that drew them so a model
/// removed mid-frame stays valid until [`clear`](Self::clear) runs after
/// submission.
#[derive(Debug, Default)]
pub struct DrawQueue {
    pub(crate) models: Vec<QueuedModel>,
    pub(crate) lines: Vec<LineVertex>,
}

impl DrawQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued model draws.
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Number of queued line segments.
    pub fn line_count(&self) -> usize {
        self.lines.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.lines.is_empty()
    }

    /// Drops every queued draw, releasing the queue's hold on models.
    pub fn clear(&mut self) {
        self.models.clear();
        self.lines.clear();
    }

    fn push_line(&mut self, a: Vec3, b: Vec3, color: [f32; 4]) {
        self.lines.push(LineVertex::new(a.to_array(), color));
        self.lines.push(LineVertex::new(b.to_array(), color));
    }
}

/// Rotation from an axis-angle pair, treating a zero axis as no rotation.
pub(crate) fn axis_angle_rotation(axis: Vec3, angle: f32) -> Quat {
    match axis.try_normalize() {
        Some(axis) => Quat::from_axis_angle(axis, angle),
        None => Quat::IDENTITY,
    }
}

impl Canvas3d for DrawQueue {
    fn draw_model_ex(
        &mut self,
        model: &Model,
        position: Vec3,
        axis: Vec3,
        angle: f32,
        scale: Vec3,
        tint: Color,
    ) {
        let rotation = axis_angle_rotation(axis, angle);
        self.models.push(QueuedModel {
            model: Arc::clone(&model.data),
            transform: Mat4::from_scale_rotation_translation(scale, rotation, position),
            color: tint,
        });
    }

    fn draw_cube_wires(&mut self, center: Vec3, size: Vec3, color: Color) {
        let half = size * 0.5;
        let corner = |x: f32, y: f32, z: f32| center + half * Vec3::new(x, y, z);
        let color = color.to_array();

        for (y, z) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            self.push_line(corner(-1.0, y, z), corner(1.0, y, z), color);
        }
        for (x, z) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            self.push_line(corner(x, -1.0, z), corner(x, 1.0, z), color);
        }
        for (x, y) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            self.push_line(corner(x, y, -1.0), corner(x, y, 1.0), color);
        }
    }
}
