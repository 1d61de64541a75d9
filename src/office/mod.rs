pub mod catalog;
pub mod components;
pub mod setup;

use bevy::prelude::*;

use crate::app_state::AppState;
use setup::{cleanup_office, setup_office};

/// Spawns the office models and wires each prop to its safety tip.
pub struct OfficePlugin;

impl Plugin for OfficePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Office), setup_office)
            .add_systems(OnExit(AppState::Office), cleanup_office);
    }
}
