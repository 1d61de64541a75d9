pub mod components;
pub mod styles;
pub mod systems;

use bevy::prelude::*;

pub use components::ActiveMessage;

use crate::app_state::AppState;
use systems::{button_interaction, cleanup_message_panel, sync_message_panel};

/// Centred panel showing the active safety tip with an OK button.
pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveMessage>()
            .add_systems(OnExit(AppState::Office), cleanup_message_panel)
            .add_systems(
                Update,
                (button_interaction, sync_message_panel).run_if(in_state(AppState::Office)),
            );
    }
}
