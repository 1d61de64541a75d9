pub mod environment;
pub mod fixtures;

use bevy::prelude::*;

pub use environment::environment;
pub use fixtures::{EmbeddedLightLevel, EmissiveFixture};

use crate::app_state::AppState;
use fixtures::{level_embedded_lights, light_fixtures};

/// Glowing ceiling fixtures and image-based environment lighting.
pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        // All fill light comes from the environment map.
        app.insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 0.0,
        })
        .add_observer(level_embedded_lights)
        .add_systems(Update, light_fixtures.run_if(in_state(AppState::Office)));
    }
}
