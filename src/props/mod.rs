pub mod components;
pub mod materials;
pub mod systems;

use bevy::prelude::*;

pub use components::{
    Activated, Interactive, MaterialOverride, ModelMaterials, ModelSource, Passive,
};
pub use materials::Emission;

use crate::app_state::AppState;
use systems::{
    apply_material_overrides, collect_model_materials, highlight_props, prepare_spawned_scene,
    wire_pointer_events,
};

/// Hover highlighting and click forwarding for office props.
pub struct PropsPlugin;

impl Plugin for PropsPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(wire_pointer_events)
            .add_observer(prepare_spawned_scene)
            .add_observer(collect_model_materials)
            .add_systems(
                Update,
                (apply_material_overrides, highlight_props)
                    .chain()
                    .run_if(in_state(AppState::Office)),
            );
    }
}
