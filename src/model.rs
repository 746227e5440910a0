//! Owned renderable model handles.

use std::sync::{Arc, OnceLock};

use crate::geometry::RawGeometry;
use crate::gpu::GpuContext;
use crate::mesh::Mesh;

/// An owned, drawable model.
///
/// A `Model` holds CPU geometry and uploads it to the GPU the first time it is
/// drawn. It is deliberately not `Clone`: whoever owns the `Model` owns its GPU
/// buffers, and dropping it releases them. The frame's draw queue may keep the
/// data alive until the frame has been submitted, but never longer.
#[derive(Debug)]
pub struct Model {
    pub(crate) data: Arc<ModelData>,
}

#[derive(Debug)]
pub(crate) struct ModelData {
    geometry: RawGeometry,
    gpu: OnceLock<Mesh>,
}

impl ModelData {
    /// The GPU mesh, uploading it on first use.
    pub(crate) fn mesh(&self, gpu: &GpuContext) -> &Mesh {
        self.gpu.get_or_init(|| {
            log::debug!(
                "uploading model ({} vertices, {} triangles)",
                self.geometry.vertices.len(),
                self.geometry.triangle_count()
            );
            self.geometry.upload(gpu)
        })
    }
}

impl Model {
    pub fn from_geometry(geometry: RawGeometry) -> Self {
        Self {
            data: Arc::new(ModelData {
                geometry,
                gpu: OnceLock::new(),
            }),
        }
    }

    /// A cube model centered on the origin with the given edge length.
    pub fn cube(size: f32) -> Self {
        Self::from_geometry(RawGeometry::cube(size))
    }

    pub fn geometry(&self) -> &RawGeometry {
        &self.data.geometry
    }

    /// Whether the model has been uploaded to the GPU yet.
    pub fn is_uploaded(&self) -> bool {
        self.data.gpu.get().is_some()
    }

    /// A handle that observes when this model's resources are released.
    #[cfg(test)]
    pub(crate) fn watch(&self) -> std::sync::Weak<ModelData> {
        Arc::downgrade(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_the_model_releases_it() {
        let model = Model::cube(1.0);
        let watch = model.watch();
        assert!(watch.upgrade().is_some());

        drop(model);
        assert!(watch.upgrade().is_none());
    }

    #[test]
    fn models_start_on_the_cpu() {
        let model = Model::cube(2.0);
        assert!(!model.is_uploaded());
        assert_eq!(model.geometry().triangle_count(), 12);
    }
}
