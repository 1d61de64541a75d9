//! The fixed list of objects that make up the office.

use bevy::prelude::*;

use crate::props::MaterialOverride;

/// Shared transform of every model that was authored in room space.
const ROOM_ORIGIN: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const ROOM_SCALE: Vec3 = Vec3::splat(1.5);

/// Intensity, in candela, of the lights embedded in the ceiling light model.
pub const EMBEDDED_LIGHT_CANDELA: f32 = 4.0;

/// How a catalog entry behaves once spawned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectKind {
    /// Rendered only.
    Passive,
    /// Glowing light fixture, optionally re-levelling the lights it embeds.
    Fixture { embedded_light_candela: Option<f32> },
    /// Hoverable and clickable prop with a safety tip.
    Interactive {
        name: &'static str,
        material: Option<MaterialOverride>,
        tooltip: &'static str,
    },
}

/// Static description of one model in the office.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    pub path: &'static str,
    pub position: Vec3,
    pub scale: Vec3,
    /// XYZ Euler angles in radians.
    pub rotation: Option<Vec3>,
    pub kind: ObjectKind,
}

impl SceneObject {
    const fn in_room(path: &'static str, kind: ObjectKind) -> Self {
        Self {
            path,
            position: ROOM_ORIGIN,
            scale: ROOM_SCALE,
            rotation: None,
            kind,
        }
    }

    const fn prop(
        path: &'static str,
        name: &'static str,
        roughness: f32,
        metalness: f32,
        tooltip: &'static str,
    ) -> Self {
        Self::in_room(
            path,
            ObjectKind::Interactive {
                name,
                material: Some(MaterialOverride::new(roughness, metalness)),
                tooltip,
            },
        )
    }

    pub fn transform(&self) -> Transform {
        let rotation = self
            .rotation
            .map(|r| Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z))
            .unwrap_or_default();
        Transform {
            translation: self.position,
            rotation,
            scale: self.scale,
        }
    }

    /// Display name of interactive entries.
    pub fn name(&self) -> Option<&'static str> {
        match self.kind {
            ObjectKind::Interactive { name, .. } => Some(name),
            _ => None,
        }
    }
}

const SIT_AND_MOVE: &str = "Wenn man viel am Computer sitzt, sollte man sich alle 150 Minuten bewegen. Hilfreich ist es auch im Stehen zu arbeiten";

pub const OFFICE: &[SceneObject] = &[
    SceneObject::in_room("models/officeRoomRoofless.glb", ObjectKind::Passive),
    SceneObject::in_room(
        "models/roofLamps.glb",
        ObjectKind::Fixture {
            embedded_light_candela: None,
        },
    ),
    SceneObject::in_room("models/roofHoles.glb", ObjectKind::Passive),
    SceneObject::in_room(
        "models/Licht.glb",
        ObjectKind::Fixture {
            embedded_light_candela: Some(EMBEDDED_LIGHT_CANDELA),
        },
    ),
    SceneObject {
        path: "models/chair.glb",
        position: Vec3::new(-5.63, 4.37, 3.75),
        scale: Vec3::splat(0.1),
        rotation: None,
        kind: ObjectKind::Passive,
    },
    SceneObject::prop(
        "models/officeChair.glb",
        "Stuhl",
        0.8,
        0.0,
        "Der Stuhl muss richtig eingestellt sein um Rückenprobleme zu vermeiden",
    ),
    SceneObject::prop("models/woodTable.glb", "Tisch", 1.0, 0.0, SIT_AND_MOVE),
    SceneObject::prop(
        "models/Lichtschalter.glb",
        "Lichtschalter",
        1.0,
        0.75,
        "Wenn keiner mehr im Raum ist, muss das Licht nicht brennen",
    ),
    SceneObject::prop("models/logo.glb", "Logo", 1.0, 0.75, "Made for Siemens"),
    SceneObject::prop(
        "models/coffee.glb",
        "Kaffeemaschine",
        0.5,
        1.0,
        "Laute und störende Geräusche, wie durch eine Kaffeemühle, sollten entfernt von arbeitenden Kollegen vermieden werden",
    ),
    SceneObject::prop(
        "models/cable.glb",
        "Kabel",
        1.0,
        0.75,
        "Es sollte darauf geachtet werden mögliche Stolperfallen zu vermeiden",
    ),
    SceneObject::prop(
        "models/laptop.glb",
        "Laptop",
        1.0,
        0.75,
        "Computer sollten bei nicht Benutzung gesperrt sein und nicht einfach rumstehen um Diebstähle zu vermeiden",
    ),
    SceneObject::prop(
        "models/fire.glb",
        "Feuerlöscher",
        1.0,
        0.75,
        "Feuerlöscher müssen aus Sicherheitsgründen an ihren Plätzen stehen",
    ),
    SceneObject::prop(
        "models/books.glb",
        "Bücher",
        1.0,
        0.2,
        "Falls etwas kaputt geht, sollte es richtig repariert werden oder ersetzt werden",
    ),
    SceneObject::prop(
        "models/powerStrip.glb",
        "Steckdosenleiste",
        1.0,
        0.75,
        "Es dürfen nicht mehrere Steckdosenleisten ineinandergesteckt werden, da sonst die vorgegebene Belastung überschritten werden kann",
    ),
    SceneObject::prop("models/whiteTable.glb", "Weißer Tisch", 0.5, 1.0, SIT_AND_MOVE),
    SceneObject::prop(
        "models/monitors.glb",
        "Bildschirm",
        1.0,
        1.0,
        "Der Bildschirm sollte augenschonend sein. Die richtige Einstellung ist auch wichtig",
    ),
];
