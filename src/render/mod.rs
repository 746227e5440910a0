//! The rendering boundary.
//!
//! Scenes never talk to the GPU directly. They describe a frame through the
//! [`Canvas3d`] trait; the application hands them a [`DrawQueue`] which the
//! [`MeshPass`] then turns into wgpu commands.
//!
//! ```text
//! SceneManager::draw ──▶ Canvas3d (DrawQueue) ──▶ MeshPass::render ──▶ surface
//! ```

mod mesh_pass;
mod queue;

pub use mesh_pass::MeshPass;
pub use queue::DrawQueue;

use glam::Vec3;

use crate::color::Color;
use crate::model::Model;

/// Immediate-mode 3D drawing surface for one frame.
pub trait Canvas3d {
    /// Draws `model` scaled by `scale`, rotated by `angle` radians about
    /// `axis`, then moved to `position`, with its color multiplied by `tint`.
    fn draw_model_ex(
        &mut self,
        model: &Model,
        position: Vec3,
        axis: Vec3,
        angle: f32,
        scale: Vec3,
        tint: Color,
    );

    /// Draws the edges of an axis-aligned box.
    fn draw_cube_wires(&mut self, center: Vec3, size: Vec3, color: Color);
}

#[cfg(test)]
pub(crate) use recording::{DrawOp, RecordingCanvas};

#[cfg(test)]
mod recording {
    use super::*;

    /// One recorded call on a [`RecordingCanvas`].
    #[derive(Clone, Debug, PartialEq)]
    pub(crate) enum DrawOp {
        Model {
            position: Vec3,
            axis: Vec3,
            angle: f32,
            scale: Vec3,
            tint: Color,
            triangles: usize,
        },
        CubeWires {
            center: Vec3,
            size: Vec3,
            color: Color,
        },
    }

    /// A canvas that remembers what was drawn instead of drawing it.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingCanvas {
        pub ops: Vec<DrawOp>,
    }

    impl RecordingCanvas {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn models(&self) -> impl Iterator<Item = &DrawOp> {
            self.ops
                .iter()
                .filter(|op| matches!(op, DrawOp::Model { .. }))
        }

        pub fn model_count(&self) -> usize {
            self.models().count()
        }

        pub fn wire_count(&self) -> usize {
            self.ops
                .iter()
                .filter(|op| matches!(op, DrawOp::CubeWires { .. }))
                .count()
        }
    }

    impl Canvas3d for RecordingCanvas {
        fn draw_model_ex(
            &mut self,
            model: &Model,
            position: Vec3,
            axis: Vec3,
            angle: f32,
            scale: Vec3,
            tint: Color,
        ) {
            self.ops.push(DrawOp::Model {
                position,
                axis,
                angle,
                scale,
                tint,
                triangles: model.geometry().triangle_count(),
            });
        }

        fn draw_cube_wires(&mut self, center: Vec3, size: Vec3, color: Color) {
            self.ops.push(DrawOp::CubeWires {
                center,
                size,
                color,
            });
        }
    }
}
