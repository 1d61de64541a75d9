use bevy::{gltf::Gltf, prelude::*};

use super::catalog::{ObjectKind, SceneObject, OFFICE};
use super::components::OfficeRoot;
use crate::lighting::{EmbeddedLightLevel, EmissiveFixture};
use crate::loading::OfficeAssets;
use crate::overlay::ActiveMessage;
use crate::props::{Activated, Interactive, ModelSource, Passive};

pub fn setup_office(mut commands: Commands, assets: Res<OfficeAssets>, gltfs: Res<Assets<Gltf>>) {
    let root = commands
        .spawn((OfficeRoot, Transform::default(), Visibility::default()))
        .id();

    for object in OFFICE {
        let entity = spawn_object(&mut commands, object, &assets, &gltfs);
        commands.entity(root).add_child(entity);
    }
    info!("Office spawned with {} objects", OFFICE.len());
}

pub fn cleanup_office(mut commands: Commands, query: Query<Entity, With<OfficeRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Spawns one catalog entry. Models that are not loaded get no scene and simply
/// do not render.
pub fn spawn_object(
    commands: &mut Commands,
    object: &SceneObject,
    assets: &OfficeAssets,
    gltfs: &Assets<Gltf>,
) -> Entity {
    let mut entity = commands.spawn((object.transform(), Visibility::default()));

    if let Some(handle) = assets.model(object.path) {
        let scene = gltfs
            .get(&handle)
            .and_then(|gltf| gltf.default_scene.clone().or_else(|| gltf.scenes.first().cloned()));
        match scene {
            Some(scene) => {
                entity.insert(SceneRoot(scene));
            }
            None => debug!("No scene available for {}", object.path),
        }
        entity.insert(ModelSource(handle));
    }

    entity.insert(Name::new(object.name().unwrap_or(object.path)));

    match object.kind {
        ObjectKind::Passive => {
            entity.insert(Passive);
        }
        ObjectKind::Fixture {
            embedded_light_candela,
        } => {
            entity.insert(EmissiveFixture);
            if let Some(candela) = embedded_light_candela {
                entity.insert(EmbeddedLightLevel { candela });
            }
        }
        ObjectKind::Interactive {
            material, tooltip, ..
        } => {
            entity.insert(Interactive);
            if let Some(material) = material {
                entity.insert(material);
            }
            entity.observe(
                move |_: Trigger<Activated>, mut message: ResMut<ActiveMessage>| {
                    message.show(tooltip)
                },
            );
        }
    }

    entity.id()
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;

    use super::*;
    use crate::props::{systems::wire_pointer_events, MaterialOverride};
    use crate::testing;

    fn office() -> App {
        let mut app = App::new();
        app.init_resource::<ActiveMessage>()
            .init_resource::<OfficeAssets>()
            .init_resource::<Assets<Gltf>>()
            .add_observer(wire_pointer_events);
        app.world_mut().run_system_once(setup_office).unwrap();
        app.world_mut().flush();
        app
    }

    fn named(app: &mut App, name: &str) -> Entity {
        app.world_mut()
            .query::<(Entity, &Name)>()
            .iter(app.world())
            .find(|(_, entity_name)| entity_name.as_str() == name)
            .map(|(entity, _)| entity)
            .unwrap()
    }

    fn click(app: &mut App, name: &str) {
        let prop = named(app, name);
        app.world_mut().trigger_targets(Activated, prop);
        app.world_mut().flush();
    }

    fn message(app: &App) -> Option<&str> {
        app.world().resource::<ActiveMessage>().text()
    }

    #[test]
    fn every_catalog_entry_spawns_once_under_the_root() {
        let mut app = office();
        let root = app
            .world_mut()
            .query_filtered::<Entity, With<OfficeRoot>>()
            .single(app.world());
        let children = app.world().get::<Children>(root).unwrap();
        assert_eq!(children.len(), OFFICE.len());

        let props = app
            .world_mut()
            .query_filtered::<(), With<Interactive>>()
            .iter(app.world())
            .count();
        assert_eq!(props, 12);
    }

    #[test]
    fn components_follow_the_catalog() {
        let mut app = office();

        let chair = named(&mut app, "Stuhl");
        assert_eq!(
            app.world().get::<MaterialOverride>(chair),
            Some(&MaterialOverride::new(0.8, 0.0))
        );

        let light = named(&mut app, "models/Licht.glb");
        assert!(app.world().entity(light).contains::<EmissiveFixture>());
        assert_eq!(
            app.world().get::<EmbeddedLightLevel>(light),
            Some(&EmbeddedLightLevel { candela: 4.0 })
        );

        let lamps = named(&mut app, "models/roofLamps.glb");
        assert!(!app.world().entity(lamps).contains::<EmbeddedLightLevel>());

        let room = named(&mut app, "models/officeRoomRoofless.glb");
        assert!(app.world().entity(room).contains::<Passive>());
        assert!(!app.world().entity(room).contains::<Interactive>());
    }

    #[test]
    fn clicking_props_replaces_and_dismisses_tips() {
        let mut app = office();
        assert_eq!(message(&app), None);

        click(&mut app, "Lichtschalter");
        assert_eq!(
            message(&app),
            Some("Wenn keiner mehr im Raum ist, muss das Licht nicht brennen")
        );

        app.world_mut().resource_mut::<ActiveMessage>().dismiss();
        assert_eq!(message(&app), None);

        click(&mut app, "Logo");
        assert_eq!(message(&app), Some("Made for Siemens"));

        click(&mut app, "Kabel");
        assert_eq!(
            message(&app),
            Some("Es sollte darauf geachtet werden mögliche Stolperfallen zu vermeiden")
        );
    }

    #[test]
    fn clicking_a_prop_mesh_shows_its_tip() {
        let mut app = office();
        let extinguisher = named(&mut app, "Feuerlöscher");
        let world = app.world_mut();
        let mesh = world.spawn(Mesh3d(Handle::default())).id();
        world.entity_mut(extinguisher).add_child(mesh);

        world.trigger_targets(testing::click(mesh), mesh);
        world.flush();

        assert_eq!(
            message(&app),
            Some("Feuerlöscher müssen aus Sicherheitsgründen an ihren Plätzen stehen")
        );
    }

    #[test]
    fn unloaded_models_spawn_without_scene() {
        let mut app = office();
        let laptop = named(&mut app, "Laptop");
        assert!(!app.world().entity(laptop).contains::<SceneRoot>());
        assert!(!app.world().entity(laptop).contains::<ModelSource>());
    }
}
