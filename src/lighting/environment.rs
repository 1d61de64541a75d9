use bevy::{core_pipeline::Skybox, pbr::environment_map::EnvironmentMapLight, prelude::*};

/// Cubemaps of the "park" preset, shown as the background.
const PARK_SKYBOX: &str = "environment/park_specular.ktx2";
/// Cubemaps of the "warehouse" preset, used for image-based lighting.
const WAREHOUSE_DIFFUSE: &str = "environment/warehouse_diffuse.ktx2";
const WAREHOUSE_SPECULAR: &str = "environment/warehouse_specular.ktx2";

pub const SKYBOX_BRIGHTNESS: f32 = 1_500.0;
pub const ENVIRONMENT_INTENSITY: f32 = 1_500.0;

/// Two stacked presets: the park keeps the background, the warehouse takes the
/// lighting slot.
pub fn environment(asset_server: &AssetServer) -> (Skybox, EnvironmentMapLight) {
    (
        Skybox {
            image: asset_server.load(PARK_SKYBOX),
            brightness: SKYBOX_BRIGHTNESS,
            ..default()
        },
        EnvironmentMapLight {
            diffuse_map: asset_server.load(WAREHOUSE_DIFFUSE),
            specular_map: asset_server.load(WAREHOUSE_SPECULAR),
            intensity: ENVIRONMENT_INTENSITY,
            ..default()
        },
    )
}
