use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use fixture_editor::{DialogOutcome, FixtureDialogClosed, FixtureEditorSet};
use fixture_model::{insert_fixture, ConvexShape, Fixture, FixtureError};

use crate::config::SandboxConfig;

/// Dynamic body new fixtures are attached to.
#[derive(Component, Debug, Default)]
pub struct SandboxBody;

#[derive(Component, Debug, Default)]
pub struct Ground;

/// Ground, body and the dialog result handling. Runs headless; rapier and
/// rendering are installed by [`SandboxPlugin`](crate::SandboxPlugin).
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_scene).add_systems(
            Update,
            (
                configure_gravity,
                apply_closed_dialogs.after(FixtureEditorSet::Apply),
            ),
        );
    }
}

fn configure_gravity(
    mut rapier: Query<&mut RapierConfiguration, Added<RapierConfiguration>>,
    cfg: Res<SandboxConfig>,
) {
    for mut rc in &mut rapier {
        rc.gravity = Vect::new(0.0, cfg.physics.gravity_y * cfg.physics.pixels_per_meter);
    }
}

/// The body's first fixture: the configured defaults around a circle.
pub fn initial_fixture(cfg: &SandboxConfig) -> Result<Fixture, FixtureError> {
    let shape = ConvexShape::circle(cfg.scene.body_radius)?;
    Ok(cfg.editor.defaults.draft().into_fixture(shape))
}

/// Spawns `fixture` as a collider child of `body`.
pub fn attach_fixture(
    commands: &mut Commands,
    body: Entity,
    fixture: &Fixture,
    pixels_per_meter: f32,
) -> Result<Entity, FixtureError> {
    let child = commands.spawn(Transform::default()).id();
    if let Err(e) = insert_fixture(&mut commands.entity(child), fixture, pixels_per_meter) {
        commands.entity(child).despawn();
        return Err(e);
    }
    commands.entity(body).add_child(child);
    Ok(child)
}

pub fn spawn_scene(mut commands: Commands, cfg: Res<SandboxConfig>) {
    let ppm = cfg.physics.pixels_per_meter;
    let half_thickness = 0.25 * ppm;
    commands.spawn((
        Ground,
        Name::new("Ground"),
        RigidBody::Fixed,
        Collider::cuboid(cfg.scene.ground_width * 0.5 * ppm, half_thickness),
        Transform::from_xyz(0.0, -half_thickness, 0.0),
    ));

    let body = commands
        .spawn((
            SandboxBody,
            Name::new("Body"),
            RigidBody::Dynamic,
            Transform::from_xyz(0.0, cfg.scene.body_height * ppm, 0.0),
        ))
        .id();
    match initial_fixture(&cfg).and_then(|f| attach_fixture(&mut commands, body, &f, ppm)) {
        Ok(child) => info!("spawned body {body:?} with fixture {child:?}"),
        Err(e) => warn!("body {body:?} spawned without a fixture: {e}"),
    }
}

/// Adds confirmed fixtures to their body and rewrites edited ones in place.
pub fn apply_closed_dialogs(
    mut commands: Commands,
    mut closed: EventReader<FixtureDialogClosed>,
    fixtures: Query<(), With<Fixture>>,
    cfg: Res<SandboxConfig>,
) {
    let ppm = cfg.physics.pixels_per_meter;
    for ev in closed.read() {
        match &ev.outcome {
            DialogOutcome::Added(fixture) => match attach_fixture(&mut commands, ev.target, fixture, ppm) {
                Ok(child) => info!(
                    "added {} fixture '{}' ({child:?}) to {:?}",
                    fixture.shape.kind_name(),
                    fixture.name,
                    ev.target
                ),
                Err(e) => warn!("could not add fixture '{}': {e}", fixture.name),
            },
            DialogOutcome::Edited(fixture) => {
                if fixtures.get(ev.target).is_err() {
                    warn!("edited fixture {:?} no longer exists", ev.target);
                    continue;
                }
                match insert_fixture(&mut commands.entity(ev.target), fixture, ppm) {
                    Ok(()) => info!("updated fixture '{}' ({:?})", fixture.name, ev.target),
                    Err(e) => warn!("could not update fixture {:?}: {e}", ev.target),
                }
            }
            DialogOutcome::Canceled => debug!("fixture dialog for {:?} canceled", ev.target),
        }
    }
}
