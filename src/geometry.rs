//! CPU-side geometry: loading from disk and building primitives.
//!
//! Geometry stays on the CPU until a [`Model`](crate::Model) built from it is
//! drawn for the first time. That keeps loading, scene assembly and physics
//! testable without a GPU.
//!
//! # Supported Formats
//!
//! | Format | Extensions | Notes |
//! |--------|------------|-------|
//! | STL    | `.stl`     | Binary and ASCII, no UV coordinates |
//!
//! ```no_run
//! use tableau::GeometryLoader;
//!
//! let geometry = GeometryLoader::from_file("assets/model.stl")
//!     .centered()
//!     .normalized()
//!     .build()
//!     .unwrap();
//! ```

use crate::error::GeometryError;
use crate::gpu::GpuContext;
use crate::mesh::{Mesh, Vertex3d};
use glam::Vec3;
use std::path::Path;

/// Raw geometry data before GPU upload.
#[derive(Clone, Debug, Default)]
pub struct RawGeometry {
    /// Vertex positions, normals, and UVs.
    pub vertices: Vec<Vertex3d>,
    /// Triangle indices.
    pub indices: Vec<u32>,
}

impl RawGeometry {
    pub fn new(vertices: Vec<Vertex3d>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// An axis-aligned cube centered at the origin with the given edge length.
    ///
    /// Each face has its own four vertices so normals stay flat. Counter-clockwise
    /// winding.
    pub fn cube(size: f32) -> Self {
        let h = size * 0.5;

        #[rustfmt::skip]
        let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
            ([ 0.0,  0.0,  1.0], [[-h, -h,  h], [ h, -h,  h], [ h,  h,  h], [-h,  h,  h]]),
            ([ 0.0,  0.0, -1.0], [[ h, -h, -h], [-h, -h, -h], [-h,  h, -h], [ h,  h, -h]]),
            ([ 0.0,  1.0,  0.0], [[-h,  h,  h], [ h,  h,  h], [ h,  h, -h], [-h,  h, -h]]),
            ([ 0.0, -1.0,  0.0], [[-h, -h, -h], [ h, -h, -h], [ h, -h,  h], [-h, -h,  h]]),
            ([ 1.0,  0.0,  0.0], [[ h, -h,  h], [ h, -h, -h], [ h,  h, -h], [ h,  h,  h]]),
            ([-1.0,  0.0,  0.0], [[-h, -h, -h], [-h, -h,  h], [-h,  h,  h], [-h,  h, -h]]),
        ];
        const UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (normal, corners) in faces {
            let base = vertices.len() as u32;
            for (corner, uv) in corners.into_iter().zip(UVS) {
                vertices.push(Vertex3d::new(corner, normal, uv));
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
        }

        Self::new(vertices, indices)
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Computes the axis-aligned bounding box as `(min, max)`.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);

        for v in &self.vertices {
            let p = Vec3::from(v.position);
            min = min.min(p);
            max = max.max(p);
        }

        (min, max)
    }

    pub fn center(&self) -> Vec3 {
        let (min, max) = self.bounds();
        (min + max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        let (min, max) = self.bounds();
        max - min
    }

    pub fn translate(&mut self, offset: Vec3) {
        for v in &mut self.vertices {
            v.position = (Vec3::from(v.position) + offset).into();
        }
    }

    /// Scales all vertices uniformly around the origin.
    pub fn scale(&mut self, factor: f32) {
        for v in &mut self.vertices {
            v.position = (Vec3::from(v.position) * factor).into();
        }
    }

    /// Centers the geometry at the origin.
    pub fn recenter(&mut self) {
        let center = self.center();
        self.translate(-center);
    }

    /// Scales the geometry so its largest dimension is 1.
    pub fn normalize(&mut self) {
        let size = self.size();
        let max_dim = size.x.max(size.y).max(size.z);
        if max_dim > 0.0 {
            self.scale(1.0 / max_dim);
        }
    }

    /// Uploads this geometry to the GPU as a [`Mesh`].
    pub fn upload(&self, gpu: &GpuContext) -> Mesh {
        Mesh::new(gpu, &self.vertices, &self.indices)
    }

    /// Loads geometry from a file, picking the parser from the extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GeometryError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "stl" => Self::load_stl(path),
            _ => Err(GeometryError::UnknownFormat(ext)),
        }
    }

    fn load_stl(path: impl AsRef<Path>) -> Result<Self, GeometryError> {
        let file = std::fs::File::open(path)?;
        let mut reader = std::io::BufReader::new(file);
        Self::parse_stl(&mut reader)
    }

    fn parse_stl<R: std::io::Read + std::io::Seek>(reader: &mut R) -> Result<Self, GeometryError> {
        let stl = stl_io::read_stl(reader)
            .map_err(|e| GeometryError::Parse(format!("STL parse error: {e}")))?;

        if stl.faces.is_empty() {
            return Err(GeometryError::Parse("STL contains no facets".to_string()));
        }

        let mut vertices = Vec::with_capacity(stl.faces.len() * 3);
        let mut indices = Vec::with_capacity(stl.faces.len() * 3);

        // stl_io deduplicates positions; faces keep a flat normal so each
        // triangle gets its own three vertices.
        for face in &stl.faces {
            let normal: [f32; 3] = face.normal.into();
            for &vertex_idx in &face.vertices {
                let vertex = stl.vertices.get(vertex_idx).ok_or_else(|| {
                    GeometryError::Parse(format!("facet references missing vertex {vertex_idx}"))
                })?;
                let position: [f32; 3] = (*vertex).into();
                indices.push(vertices.len() as u32);
                vertices.push(Vertex3d::new(position, normal, [0.0, 0.0]));
            }
        }

        Ok(Self::new(vertices, indices))
    }
}

/// A fluent builder for loading geometry with post-load adjustments.
///
/// Centering always runs before normalization, whatever the call order.
pub struct GeometryLoader {
    result: Result<RawGeometry, GeometryError>,
    center: bool,
    normalize: bool,
}

impl GeometryLoader {
    fn with(result: Result<RawGeometry, GeometryError>) -> Self {
        Self {
            result,
            center: false,
            normalize: false,
        }
    }

    /// Load geometry from a file, detecting the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self::with(RawGeometry::load(path))
    }

    pub fn centered(mut self) -> Self {
        self.center = true;
        self
    }

    /// Scales the geometry to fit within a unit cube.
    pub fn normalized(mut self) -> Self {
        self.normalize = true;
        self
    }

    pub fn build(self) -> Result<RawGeometry, GeometryError> {
        let mut geometry = self.result?;

        if self.center {
            geometry.recenter();
        }
        if self.normalize {
            geometry.normalize();
        }

        Ok(geometry)
    }
}
