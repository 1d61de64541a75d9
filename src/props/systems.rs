use bevy::{
    gltf::Gltf,
    pbr::NotShadowCaster,
    picking::{
        events::{Click, Out, Over, Pointer},
        PickingBehavior,
    },
    prelude::*,
    scene::SceneInstanceReady,
};

use super::components::{
    Activated, Hovered, Interactive, MaterialOverride, ModelMaterials, ModelSource, Passive,
};
use super::materials::{changed_models, needs_refresh, scene_materials, Emission};

/// Hooks the pointer observers onto every newly added [`Interactive`].
pub fn wire_pointer_events(trigger: Trigger<OnAdd, Interactive>, mut commands: Commands) {
    commands
        .entity(trigger.entity())
        .observe(on_pointer_over)
        .observe(on_pointer_out)
        .observe(on_pointer_click);
}

/// Pointer events on a prop's meshes bubble up to the prop root; the root keeps
/// them from reaching anything further up.
fn on_pointer_over(mut trigger: Trigger<Pointer<Over>>, mut props: Query<&mut Hovered>) {
    trigger.propagate(false);
    if let Ok(mut hovered) = props.get_mut(trigger.entity()) {
        hovered.0 = true;
    }
}

fn on_pointer_out(trigger: Trigger<Pointer<Out>>, mut props: Query<&mut Hovered>) {
    if let Ok(mut hovered) = props.get_mut(trigger.entity()) {
        hovered.0 = false;
    }
}

fn on_pointer_click(mut trigger: Trigger<Pointer<Click>>, mut commands: Commands) {
    trigger.propagate(false);
    commands.trigger_targets(Activated, trigger.entity());
}

/// Merges material overrides into a prop's materials once its model is loaded,
/// and again if the model is reloaded.
pub fn apply_material_overrides(
    mut events: EventReader<AssetEvent<Gltf>>,
    props: Query<(Ref<ModelMaterials>, Option<&ModelSource>, &MaterialOverride)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let changed = changed_models(&mut events);
    for (model, source, material_override) in props.iter() {
        if needs_refresh(&model, source, &changed) {
            model.for_each(&mut materials, |material| material_override.apply(material));
        }
    }
}

/// Recomputes the hover highlight of every prop each frame.
pub fn highlight_props(
    props: Query<(&Hovered, &ModelMaterials), With<Interactive>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (hovered, model) in props.iter() {
        let emission = Emission::for_hover(hovered.0);
        model.for_each(&mut materials, |material| emission.apply(material));
    }
}

/// Records which materials a freshly spawned scene actually renders with. The
/// loader may add variants (e.g. for mirrored meshes) that the glTF asset does
/// not list, so the spawned meshes are the source of truth.
pub fn collect_model_materials(
    trigger: Trigger<SceneInstanceReady>,
    mut commands: Commands,
    children: Query<&Children>,
    mesh_materials: Query<&MeshMaterial3d<StandardMaterial>>,
) {
    let root = trigger.entity();
    let model = scene_materials(root, &children, &mesh_materials);
    debug!("Scene {root} renders with {} materials", model.0.len());
    commands.entity(root).insert(model);
}

/// Non-interactive geometry must not occlude props, and passive models only
/// receive shadows.
pub fn prepare_spawned_scene(
    trigger: Trigger<SceneInstanceReady>,
    mut commands: Commands,
    objects: Query<(Has<Interactive>, Has<Passive>)>,
    children: Query<&Children>,
    meshes: Query<(), With<Mesh3d>>,
) {
    prepare_object_meshes(trigger.entity(), &mut commands, &objects, &children, &meshes);
}

fn prepare_object_meshes(
    root: Entity,
    commands: &mut Commands,
    objects: &Query<(Has<Interactive>, Has<Passive>)>,
    children: &Query<&Children>,
    meshes: &Query<(), With<Mesh3d>>,
) {
    let Ok((interactive, passive)) = objects.get(root) else {
        return;
    };
    if interactive {
        return;
    }

    for entity in children.iter_descendants(root) {
        if !meshes.contains(entity) {
            continue;
        }
        let mut mesh = commands.entity(entity);
        mesh.insert(PickingBehavior::IGNORE);
        if passive {
            mesh.insert(NotShadowCaster);
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;

    use super::*;
    use crate::testing;

    fn prepare(world: &mut World, root: Entity) {
        world
            .run_system_once_with(
                root,
                |In(root): In<Entity>,
                 mut commands: Commands,
                 objects: Query<(Has<Interactive>, Has<Passive>)>,
                 children: Query<&Children>,
                 meshes: Query<(), With<Mesh3d>>| {
                    prepare_object_meshes(root, &mut commands, &objects, &children, &meshes)
                },
            )
            .unwrap();
    }

    fn mesh_child(world: &mut World, parent: Entity) -> Entity {
        let child = world.spawn(Mesh3d(Handle::default())).id();
        world.entity_mut(parent).add_child(child);
        child
    }

    #[test]
    fn passive_meshes_are_unpickable_non_casters() {
        let mut app = App::new();

        let root = app.world_mut().spawn(Passive).id();
        let group = app.world_mut().spawn_empty().id();
        app.world_mut().entity_mut(root).add_child(group);
        let mesh = mesh_child(app.world_mut(), group);

        prepare(app.world_mut(), root);

        let mesh = app.world().entity(mesh);
        let picking = mesh.get::<PickingBehavior>().unwrap();
        assert!(!picking.is_hoverable);
        assert!(!picking.should_block_lower);
        assert!(mesh.contains::<NotShadowCaster>());
        assert!(!app.world().entity(group).contains::<PickingBehavior>());
    }

    #[test]
    fn interactive_meshes_stay_pickable() {
        let mut app = App::new();

        let root = app.world_mut().spawn(Interactive).id();
        let mesh = mesh_child(app.world_mut(), root);

        prepare(app.world_mut(), root);

        assert!(!app.world().entity(mesh).contains::<PickingBehavior>());
        assert_eq!(app.world().get::<Hovered>(root), Some(&Hovered(false)));
    }

    #[test]
    fn activation_reaches_observers_on_the_prop_only() {
        #[derive(Resource, Default)]
        struct Hits(Vec<Entity>);

        let mut app = App::new();
        app.init_resource::<Hits>();

        let first = app.world_mut().spawn(Interactive).id();
        let second = app.world_mut().spawn(Interactive).id();
        for prop in [first, second] {
            app.world_mut().entity_mut(prop).observe(
                move |_: Trigger<Activated>, mut hits: ResMut<Hits>| hits.0.push(prop),
            );
        }

        app.world_mut().trigger_targets(Activated, second);
        app.world_mut().flush();

        assert_eq!(app.world().resource::<Hits>().0, vec![second]);
    }

    #[test]
    fn pointer_events_on_meshes_stop_at_the_prop() {
        #[derive(Resource, Default)]
        struct Seen {
            overs_at_root: usize,
            clicks_at_root: usize,
            activations: usize,
        }

        let mut app = App::new();
        app.init_resource::<Seen>().add_observer(wire_pointer_events);

        let world = app.world_mut();
        let root = world
            .spawn_empty()
            .observe(|_: Trigger<Pointer<Over>>, mut seen: ResMut<Seen>| seen.overs_at_root += 1)
            .observe(|_: Trigger<Pointer<Click>>, mut seen: ResMut<Seen>| seen.clicks_at_root += 1)
            .id();
        let prop = world
            .spawn(Interactive)
            .observe(|_: Trigger<Activated>, mut seen: ResMut<Seen>| seen.activations += 1)
            .id();
        world.entity_mut(root).add_child(prop);
        let group = world.spawn_empty().id();
        world.entity_mut(prop).add_child(group);
        let mesh = mesh_child(world, group);
        world.flush();

        world.trigger_targets(testing::over(mesh), mesh);
        world.flush();
        assert_eq!(world.get::<Hovered>(prop), Some(&Hovered(true)));
        assert_eq!(world.resource::<Seen>().overs_at_root, 0);

        world.trigger_targets(testing::out(mesh), mesh);
        world.flush();
        assert_eq!(world.get::<Hovered>(prop), Some(&Hovered(false)));

        world.trigger_targets(testing::click(mesh), mesh);
        world.flush();
        let seen = world.resource::<Seen>();
        assert_eq!(seen.activations, 1);
        assert_eq!(seen.clicks_at_root, 0);
    }

    fn material_app() -> (App, Handle<StandardMaterial>) {
        let mut app = App::new();
        app.init_resource::<Assets<StandardMaterial>>()
            .add_event::<AssetEvent<Gltf>>();
        let handle = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial::default());
        (app, handle)
    }

    fn material(app: &App, handle: &Handle<StandardMaterial>) -> StandardMaterial {
        app.world()
            .resource::<Assets<StandardMaterial>>()
            .get(handle)
            .unwrap()
            .clone()
    }

    #[test]
    fn hovered_props_glow_until_the_pointer_leaves() {
        let (mut app, handle) = material_app();
        app.add_systems(Update, highlight_props);
        let prop = app
            .world_mut()
            .spawn((Interactive, ModelMaterials(vec![handle.clone()])))
            .id();

        app.update();
        assert_eq!(material(&app, &handle).emissive, LinearRgba::BLACK);

        app.world_mut().get_mut::<Hovered>(prop).unwrap().0 = true;
        app.update();
        assert_eq!(material(&app, &handle).emissive, LinearRgba::rgb(0.5, 0.5, 0.0));
        assert_eq!(material(&app, &handle).emissive_exposure_weight, 0.0);

        app.world_mut().get_mut::<Hovered>(prop).unwrap().0 = false;
        app.update();
        assert_eq!(material(&app, &handle).emissive, LinearRgba::BLACK);
    }

    #[test]
    fn overrides_apply_once_per_spawned_scene() {
        let (mut app, handle) = material_app();
        app.add_systems(Update, apply_material_overrides);
        let prop = app
            .world_mut()
            .spawn((
                MaterialOverride::new(0.9, 0.3),
                ModelMaterials(vec![handle.clone()]),
            ))
            .id();

        app.update();
        assert_eq!(material(&app, &handle).perceptual_roughness, 0.9);
        assert_eq!(material(&app, &handle).metallic, 0.3);

        app.world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .get_mut(&handle)
            .unwrap()
            .perceptual_roughness = 0.1;
        app.update();
        assert_eq!(material(&app, &handle).perceptual_roughness, 0.1);

        // A respawned scene reports its materials again.
        app.world_mut()
            .entity_mut(prop)
            .insert(ModelMaterials(vec![handle.clone()]));
        app.update();
        assert_eq!(material(&app, &handle).perceptual_roughness, 0.9);
    }
}
