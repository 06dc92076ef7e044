use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use fixture_editor::{ActiveFixtureDialog, OpenAddFixtureDialog, OpenEditFixtureDialog, ShapeKind};
use fixture_model::Fixture;

use crate::scene::SandboxBody;

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct ToolbarState {
    /// Shape of the next added fixture.
    pub shape: ShapeKind,
}

pub fn fixture_toolbar(
    mut contexts: EguiContexts,
    mut state: ResMut<ToolbarState>,
    active: Res<ActiveFixtureDialog>,
    bodies: Query<Entity, With<SandboxBody>>,
    fixtures: Query<(Entity, &Fixture)>,
    mut open_add: EventWriter<OpenAddFixtureDialog>,
    mut open_edit: EventWriter<OpenEditFixtureDialog>,
) {
    let ctx = contexts.ctx_mut();
    let idle = active.is_none();
    let body = bodies.iter().next();

    let mut listed: Vec<(Entity, &Fixture)> = fixtures.iter().collect();
    listed.sort_by_key(|(e, _)| *e);

    egui::SidePanel::left("fixture_toolbar")
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Fixtures");
            ui.horizontal_wrapped(|ui| {
                for kind in ShapeKind::ALL {
                    ui.selectable_value(&mut state.shape, kind, kind.label());
                }
            });
            let can_add = idle && body.is_some();
            if ui.add_enabled(can_add, egui::Button::new("Add Fixture...")).clicked() {
                if let Some(body) = body {
                    open_add.write(OpenAddFixtureDialog { body, shape: state.shape });
                }
            }
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                for (entity, fixture) in listed {
                    ui.horizontal(|ui| {
                        ui.label(format!("{} ({})", fixture.name, fixture.shape.kind_name()));
                        if ui.add_enabled(idle, egui::Button::new("Edit")).clicked() {
                            open_edit.write(OpenEditFixtureDialog { fixture: entity });
                        }
                    });
                }
            });
        });
}
