mod app_state;
mod camera;
mod lighting;
mod loading;
mod office;
mod overlay;
mod props;
#[cfg(test)]
mod testing;

use bevy::{picking::mesh_picking::MeshPickingPlugin, prelude::*};

use app_state::AppState;
use camera::CameraPlugin;
use lighting::LightingPlugin;
use loading::LoadingPlugin;
use office::OfficePlugin;
use overlay::OverlayPlugin;
use props::PropsPlugin;

fn main() {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Sicherheit im Büro".to_string(),
                // Browser builds fill the page and keep wheel events from scrolling it.
                fit_canvas_to_parent: true,
                prevent_default_event_handling: true,
                ..default()
            }),
            ..default()
        }),
    )
    .add_plugins(MeshPickingPlugin)
    .init_state::<AppState>()
    .add_plugins((
        LoadingPlugin,
        OfficePlugin,
        PropsPlugin,
        LightingPlugin,
        CameraPlugin,
        OverlayPlugin,
    ));

    #[cfg(debug_assertions)]
    app.add_plugins((
        bevy::diagnostic::FrameTimeDiagnosticsPlugin::default(),
        bevy::diagnostic::LogDiagnosticsPlugin::default(),
    ));

    app.run();
}
