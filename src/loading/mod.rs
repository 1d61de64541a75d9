use std::sync::Arc;

use bevy::{
    asset::{AssetLoadError, LoadState, RecursiveDependencyLoadState},
    gltf::Gltf,
    prelude::*,
    utils::HashMap,
};

use crate::app_state::AppState;
use crate::office::catalog::OFFICE;

/// Handles of every model in the office, keyed by asset path.
#[derive(Resource, Default)]
pub struct OfficeAssets {
    models: HashMap<&'static str, Handle<Gltf>>,
}

impl OfficeAssets {
    pub fn model(&self, path: &str) -> Option<Handle<Gltf>> {
        self.models.get(path).cloned()
    }
}

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start_loading_models)
            .add_systems(Update, wait_for_models.run_if(in_state(AppState::Loading)));
    }
}

fn start_loading_models(mut commands: Commands, asset_server: Res<AssetServer>) {
    let models: HashMap<_, _> = OFFICE
        .iter()
        .map(|object| (object.path, asset_server.load::<Gltf>(object.path)))
        .collect();
    info!("Loading {} office models", models.len());
    commands.insert_resource(OfficeAssets { models });
}

/// Where a model stands once its own load and its dependencies' loads are known.
#[derive(Debug, Clone)]
enum ModelStatus {
    Pending,
    Ready,
    /// The glTF itself failed; nothing of it is shown.
    Missing(Arc<AssetLoadError>),
    /// The glTF loaded but a texture or buffer did not; it renders with what did.
    Incomplete(Arc<AssetLoadError>),
}

impl ModelStatus {
    fn of(asset: Option<LoadState>, dependencies: Option<RecursiveDependencyLoadState>) -> Self {
        if let Some(LoadState::Failed(error)) = asset {
            return Self::Missing(error);
        }
        match dependencies {
            Some(RecursiveDependencyLoadState::Loaded) => Self::Ready,
            Some(RecursiveDependencyLoadState::Failed(error)) => Self::Incomplete(error),
            _ => Self::Pending,
        }
    }
}

/// Enters the office once every model has either loaded or failed. Failed models
/// are skipped rather than blocking the scene.
fn wait_for_models(
    assets: Option<Res<OfficeAssets>>,
    asset_server: Res<AssetServer>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(assets) = assets else {
        return;
    };

    let statuses: Vec<_> = assets
        .models
        .iter()
        .map(|(path, handle)| {
            let status = ModelStatus::of(
                asset_server.get_load_state(handle.id()),
                asset_server.get_recursive_dependency_load_state(handle.id()),
            );
            (*path, status)
        })
        .collect();
    if statuses
        .iter()
        .any(|(_, status)| matches!(status, ModelStatus::Pending))
    {
        return;
    }

    let mut missing = 0;
    for (path, status) in &statuses {
        match status {
            ModelStatus::Missing(error) => {
                warn!("Model {path} failed to load and will not be shown: {error}");
                missing += 1;
            }
            ModelStatus::Incomplete(error) => {
                warn!("Model {path} is missing some of its data and may render incompletely: {error}");
            }
            ModelStatus::Pending | ModelStatus::Ready => {}
        }
    }

    info!(
        "Office models ready: {} loaded, {missing} failed",
        assets.models.len() - missing
    );
    next_state.set(AppState::Office);
}
