pub mod components;
pub mod systems;

use bevy::prelude::*;

use crate::app_state::AppState;
use systems::{despawn_camera, dolly_camera, orbit_camera, spawn_camera};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        // The wheel is only listened to while the office exists.
        app.add_systems(OnEnter(AppState::Office), spawn_camera)
            .add_systems(OnExit(AppState::Office), despawn_camera)
            .add_systems(
                Update,
                (dolly_camera, orbit_camera).run_if(in_state(AppState::Office)),
            );
    }
}
