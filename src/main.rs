use std::path::Path;
use std::process::ExitCode;

use env_logger::{Builder, Env};

use tableau::config::{DEFAULT_LOG_FILTER, MODEL_ASSET_PATH};
use tableau::{
    AppConfig, AppError, GeometryLoader, PhysicsConfig, PhysicsScene, SceneManager, ShowcaseScene,
};

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    match start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn start() -> Result<(), AppError> {
    let path = Path::new(MODEL_ASSET_PATH);
    if !path.exists() {
        return Err(AppError::AssetNotFound(path.to_path_buf()));
    }

    let geometry = GeometryLoader::from_file(path)
        .centered()
        .normalized()
        .build()?;
    log::info!(
        "loaded {} ({} triangles)",
        path.display(),
        geometry.triangle_count()
    );

    let mut scenes = SceneManager::new();
    scenes.register(ShowcaseScene::new(geometry));
    scenes.register(PhysicsScene::new(PhysicsConfig::default()));

    tableau::run(AppConfig::default(), scenes)
}
