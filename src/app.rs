use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_rapier2d::prelude::*;
use bevy_rapier2d::render::RapierDebugRenderPlugin;
use fixture_editor::{FixtureEditorPlugin, FixtureEditorSet, FixtureEditorUiPlugin};
use fixture_model::FixtureFilterHook;

use crate::config::SandboxConfig;
use crate::scene::ScenePlugin;
use crate::toolbar::{fixture_toolbar, ToolbarState};

/// Windowed sandbox: rapier world with debug render, egui, and the fixture dialogs.
/// Expects [`SandboxConfig`] to be inserted before the plugin is added.
pub struct SandboxPlugin;

impl Plugin for SandboxPlugin {
    fn build(&self, app: &mut App) {
        let cfg = app.world().get_resource::<SandboxConfig>().cloned().unwrap_or_else(|| {
            warn!("SandboxConfig not inserted before SandboxPlugin; using defaults");
            SandboxConfig::default()
        });
        app.insert_resource(cfg.clone())
            .add_plugins((
                RapierPhysicsPlugin::<FixtureFilterHook>::pixels_per_meter(cfg.physics.pixels_per_meter),
                RapierDebugRenderPlugin::default(),
                EguiPlugin { enable_multipass_for_primary_context: false },
                FixtureEditorPlugin {
                    defaults: cfg.editor.defaults.clone(),
                    add_title: cfg.editor.add_title.clone(),
                    edit_title: cfg.editor.edit_title.clone(),
                    icon: cfg.editor.icon.clone(),
                },
                FixtureEditorUiPlugin,
                ScenePlugin,
            ))
            .init_resource::<ToolbarState>()
            .add_systems(Startup, spawn_camera)
            .add_systems(Update, fixture_toolbar.before(FixtureEditorSet::Input));
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Transform::from_xyz(0.0, 150.0, 0.0)));
}
