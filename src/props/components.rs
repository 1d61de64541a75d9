use bevy::{gltf::Gltf, prelude::*};

/// The glTF asset a spawned object was built from.
#[derive(Component, Clone)]
pub struct ModelSource(pub Handle<Gltf>);

/// Distinct materials used by the meshes of an object's spawned scene. Inserted
/// once the scene instance is ready; absent before that or if the model failed
/// to load.
#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct ModelMaterials(pub Vec<Handle<StandardMaterial>>);

impl ModelMaterials {
    /// Runs `f` on every material that is still alive.
    pub fn for_each(
        &self,
        materials: &mut Assets<StandardMaterial>,
        mut f: impl FnMut(&mut StandardMaterial),
    ) {
        for handle in &self.0 {
            if let Some(material) = materials.get_mut(handle) {
                f(material);
            }
        }
    }
}

/// Marker for hoverable, clickable props.
///
/// Adding it wires the pointer observers; see [`super::systems::wire_pointer_events`].
#[derive(Component)]
#[require(Hovered)]
pub struct Interactive;

/// Whether the pointer is currently over this prop.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Hovered(pub bool);

/// Marker for decorative models: no handlers, receive shadows only.
#[derive(Component)]
pub struct Passive;

/// Fired on a prop when it is clicked. Carries no payload; whoever spawned the
/// prop decides what a click means.
#[derive(Event, Debug, Clone, Copy)]
pub struct Activated;

/// Roughness/metalness merged over every material of a model.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct MaterialOverride {
    pub roughness: Option<f32>,
    pub metalness: Option<f32>,
}

impl MaterialOverride {
    pub const fn new(roughness: f32, metalness: f32) -> Self {
        Self {
            roughness: Some(roughness),
            metalness: Some(metalness),
        }
    }

    pub fn apply(&self, material: &mut StandardMaterial) {
        if let Some(roughness) = self.roughness {
            material.perceptual_roughness = roughness;
        }
        if let Some(metalness) = self.metalness {
            material.metallic = metalness;
        }
    }
}
