use std::f32::consts::PI;

use bevy::{gltf::Gltf, prelude::*, scene::SceneInstanceReady};

use crate::props::materials::{changed_models, needs_refresh};
use crate::props::{Emission, ModelMaterials, ModelSource};

/// Marker for ceiling light models whose materials glow white.
#[derive(Component)]
pub struct EmissiveFixture;

/// Intensity forced onto every light embedded in a fixture model.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct EmbeddedLightLevel {
    pub candela: f32,
}

impl EmbeddedLightLevel {
    /// Luminous power of an isotropic point or spot light.
    pub fn lumens(&self) -> f32 {
        self.candela * 4.0 * PI
    }

    /// Illuminance used for directional lights.
    pub fn lux(&self) -> f32 {
        self.candela
    }
}

type EmbeddedLights<'w, 's> = Query<
    'w,
    's,
    AnyOf<(&'static mut PointLight, &'static mut SpotLight, &'static mut DirectionalLight)>,
>;

/// Makes fixture materials glow once the model is available, and again if it is
/// reloaded.
pub fn light_fixtures(
    mut events: EventReader<AssetEvent<Gltf>>,
    fixtures: Query<(Ref<ModelMaterials>, Option<&ModelSource>), With<EmissiveFixture>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let changed = changed_models(&mut events);
    for (model, source) in fixtures.iter() {
        if needs_refresh(&model, source, &changed) {
            model.for_each(&mut materials, |material| Emission::FIXTURE.apply(material));
        }
    }
}

/// Re-levels the lights a fixture brings along each time its scene is spawned.
pub fn level_embedded_lights(
    trigger: Trigger<SceneInstanceReady>,
    fixtures: Query<&EmbeddedLightLevel>,
    children: Query<&Children>,
    mut lights: EmbeddedLights,
) {
    let root = trigger.entity();
    let Ok(level) = fixtures.get(root) else {
        return;
    };
    level_lights(root, *level, &children, &mut lights);
}

fn level_lights(
    root: Entity,
    level: EmbeddedLightLevel,
    children: &Query<&Children>,
    lights: &mut EmbeddedLights,
) {
    let mut count = 0;
    for entity in children.iter_descendants(root) {
        let Ok((point, spot, directional)) = lights.get_mut(entity) else {
            continue;
        };
        if let Some(mut light) = point {
            light.intensity = level.lumens();
        }
        if let Some(mut light) = spot {
            light.intensity = level.lumens();
        }
        if let Some(mut light) = directional {
            light.illuminance = level.lux();
        }
        count += 1;
    }
    debug!("Re-levelled {count} embedded lights to {} cd", level.candela);
}
