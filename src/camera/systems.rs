use std::f32::consts::TAU;

use bevy::{
    core_pipeline::tonemapping::Tonemapping,
    input::mouse::MouseWheel,
    picking::{focus::HoverMap, pointer::PointerId},
    prelude::*,
    render::camera::Exposure,
    window::{CursorMoved, PrimaryWindow},
};

use super::components::{
    wheel_delta, CameraRig, OrbitControls, FOV_DEGREES, START_POSITION, TONE_MAPPING_EXPOSURE,
};
use crate::lighting::environment;

/// Marker for the office camera.
#[derive(Component)]
pub struct OfficeCamera;

pub fn spawn_camera(mut commands: Commands, asset_server: Res<AssetServer>) {
    let controls = OrbitControls::default();
    let mut transform = Transform::from_translation(START_POSITION);
    controls.update(&mut transform);

    commands.spawn((
        OfficeCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            ..default()
        }),
        Tonemapping::AcesFitted,
        Exposure {
            ev100: Exposure::default().ev100 + TONE_MAPPING_EXPOSURE.recip().log2(),
        },
        environment(&asset_server),
        CameraRig::from_transform(&transform),
        controls,
        transform,
    ));
}

pub fn despawn_camera(mut commands: Commands, query: Query<Entity, With<OfficeCamera>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Dollies every rigged camera along Z and re-aims its orbit controls, if any.
pub fn dolly_camera(
    mut wheel: EventReader<MouseWheel>,
    mut query: Query<(&mut Transform, &mut CameraRig, Option<&mut OrbitControls>)>,
) {
    let deltas: Vec<f32> = wheel.read().map(wheel_delta).collect();
    if deltas.is_empty() {
        return;
    }

    for (mut transform, mut rig, controls) in query.iter_mut() {
        for delta in &deltas {
            rig.advance(*delta);
        }
        transform.translation = rig.position();

        if let Some(mut controls) = controls {
            controls.target = transform.translation - Vec3::Z;
            controls.update(&mut transform);
        }
    }
}

/// Orbits the camera while the left mouse button is held. Drags that begin over
/// the message panel belong to the panel and never orbit.
pub fn orbit_camera(
    buttons: Res<ButtonInput<MouseButton>>,
    mut cursor: EventReader<CursorMoved>,
    hover_map: Option<Res<HoverMap>>,
    ui_nodes: Query<(), With<Node>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut query: Query<(&mut Transform, &OrbitControls)>,
    mut orbiting: Local<bool>,
) {
    if buttons.just_pressed(MouseButton::Left) {
        *orbiting = !pointer_over_ui(hover_map.as_deref(), &ui_nodes);
    }
    if !buttons.pressed(MouseButton::Left) {
        *orbiting = false;
    }

    let drag: Vec2 = cursor.read().filter_map(|event| event.delta).sum();
    if !*orbiting || drag == Vec2::ZERO {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };

    // A drag across the full viewport height is one full turn.
    let angles = drag * TAU / window.height().max(1.0);
    for (mut transform, controls) in query.iter_mut() {
        controls.rotate(&mut transform, angles.x, angles.y);
    }
}

fn pointer_over_ui(hover_map: Option<&HoverMap>, ui_nodes: &Query<(), With<Node>>) -> bool {
    hover_map
        .and_then(|map| map.get(&PointerId::Mouse))
        .is_some_and(|hovered| hovered.keys().any(|entity| ui_nodes.contains(*entity)))
}
