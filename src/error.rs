//! Error types for startup, geometry loading and scene lifecycles.

use std::path::PathBuf;

/// Fatal errors raised while bringing the application up.
///
/// Every variant maps to a non-zero process exit code.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to open window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("GPU initialization failed: {0}")]
    Gpu(#[from] GpuError),

    #[error("asset not found: {}", .0.display())]
    AssetNotFound(PathBuf),

    #[error("failed to load model: {0}")]
    Geometry(#[from] GeometryError),
}

/// Errors raised while setting up the wgpu device and surface.
#[derive(thiserror::Error, Debug)]
pub enum GpuError {
    #[error("could not create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("could not create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}

/// Errors that can occur when loading geometry.
#[derive(thiserror::Error, Debug)]
pub enum GeometryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown geometry format: '{0}'")]
    UnknownFormat(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Errors from scene object access and scene lifecycle hooks.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("object index {index} out of range (scene has {len} objects)")]
    ObjectOutOfRange { index: usize, len: usize },

    #[error("scene index {index} out of range ({len} scenes registered)")]
    SceneOutOfRange { index: usize, len: usize },

    #[error("scene '{scene}' failed to initialize: {reason}")]
    Initialize { scene: String, reason: String },

    #[error("scene '{scene}' failed to clean up: {reason}")]
    Cleanup { scene: String, reason: String },
}

impl SceneError {
    pub fn initialize(scene: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Initialize {
            scene: scene.into(),
            reason: reason.into(),
        }
    }

    pub fn cleanup(scene: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Cleanup {
            scene: scene.into(),
            reason: reason.into(),
        }
    }
}
