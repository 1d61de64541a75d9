use bevy::{gltf::Gltf, prelude::*, utils::HashSet};

use super::components::{ModelMaterials, ModelSource};

/// Emissive colour scaled by an intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emission {
    pub color: LinearRgba,
    pub intensity: f32,
}

impl Emission {
    /// Yellow glow of a hovered prop.
    pub const HOVER: Self = Self {
        color: LinearRgba::rgb(1.0, 1.0, 0.0),
        intensity: 0.5,
    };

    pub const NONE: Self = Self {
        color: LinearRgba::BLACK,
        intensity: 0.0,
    };

    /// White glow of ceiling light fixtures.
    pub const FIXTURE: Self = Self {
        color: LinearRgba::WHITE,
        intensity: 10.0,
    };

    pub fn for_hover(hovered: bool) -> Self {
        if hovered {
            Self::HOVER
        } else {
            Self::NONE
        }
    }

    pub fn radiance(self) -> LinearRgba {
        let Self { color, intensity } = self;
        LinearRgba::rgb(
            color.red * intensity,
            color.green * intensity,
            color.blue * intensity,
        )
    }

    pub fn apply(self, material: &mut StandardMaterial) {
        material.emissive = self.radiance();
        // Emission is scene-referred; camera exposure must not dim it.
        material.emissive_exposure_weight = 0.0;
    }
}

/// Collects the distinct materials of every mesh below `root`, in scene order.
pub fn scene_materials(
    root: Entity,
    children: &Query<&Children>,
    mesh_materials: &Query<&MeshMaterial3d<StandardMaterial>>,
) -> ModelMaterials {
    let mut seen = HashSet::new();
    let handles = children
        .iter_descendants(root)
        .filter_map(|entity| mesh_materials.get(entity).ok())
        .filter(|material| seen.insert(material.0.id()))
        .map(|material| material.0.clone())
        .collect();
    ModelMaterials(handles)
}

/// Models whose material set (re)appeared since the last read.
pub fn changed_models(events: &mut EventReader<AssetEvent<Gltf>>) -> HashSet<AssetId<Gltf>> {
    events
        .read()
        .filter_map(|event| match event {
            AssetEvent::LoadedWithDependencies { id } | AssetEvent::Modified { id } => Some(*id),
            _ => None,
        })
        .collect()
}

/// True when a model's materials need their one-shot adjustments (re)applied:
/// its scene was (re)spawned or its asset reloaded.
pub fn needs_refresh(
    materials: &Ref<ModelMaterials>,
    source: Option<&ModelSource>,
    changed: &HashSet<AssetId<Gltf>>,
) -> bool {
    materials.is_changed() || source.is_some_and(|source| changed.contains(&source.0.id()))
}
