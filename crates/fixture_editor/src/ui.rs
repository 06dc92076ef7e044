//! egui rendering of the fixture dialogs (feature `ui`).
//!
//! Everything here is read-only with respect to dialog state: interactions are
//! written as [`FixtureDialogInput`] events and applied by the reducer.
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use fixture_model::{FilterAxis, CATEGORIES};

use crate::panels::LOCAL_TRANSFORM_HELP;
use crate::{
    ActiveFixtureDialog, AddFixtureDialog, ClickModifiers, DialogAction, DialogMessages, DialogTab,
    EditFixtureDialog, FilterKind, FixtureCommand, FixtureDialogInput, FixtureEditorSet, FixturePanel,
    ShapeCommand, TransformCommand,
};

const LIST_HEIGHT: f32 = 200.0;

/// Draws the active dialog and pending messages. Needs `EguiPlugin` and
/// [`FixtureEditorPlugin`](crate::FixtureEditorPlugin).
pub struct FixtureEditorUiPlugin;

impl Plugin for FixtureEditorUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (fixture_dialog_window, dialog_message_window).in_set(FixtureEditorSet::Present),
        );
    }
}

pub fn fixture_dialog_window(
    mut contexts: EguiContexts,
    active: Res<ActiveFixtureDialog>,
    mut input: EventWriter<FixtureDialogInput>,
) {
    let mut actions: Vec<DialogAction> = Vec::new();
    let ctx = contexts.ctx_mut();
    match &*active {
        ActiveFixtureDialog::None => return,
        ActiveFixtureDialog::Add { dialog, .. } => add_dialog_ui(ctx, dialog, &mut actions),
        ActiveFixtureDialog::Edit { dialog, .. } => edit_dialog_ui(ctx, dialog, &mut actions),
    }
    for action in actions {
        input.write(FixtureDialogInput(action));
    }
}

pub fn dialog_message_window(mut contexts: EguiContexts, mut messages: ResMut<DialogMessages>) {
    let Some(current) = messages.current().cloned() else {
        return;
    };
    let ctx = contexts.ctx_mut();
    let mut dismissed = false;
    egui::Window::new(current.title.as_str())
        .id(egui::Id::new("fixture_dialog_message"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(current.message.as_str());
            ui.add_space(6.0);
            dismissed = ui.button("OK").clicked();
        });
    if dismissed {
        messages.dismiss();
    }
}

fn window_title(icon: Option<&str>, title: &str) -> String {
    match icon {
        Some(icon) => format!("{icon} {title}"),
        None => title.to_string(),
    }
}

fn add_dialog_ui(ctx: &egui::Context, dialog: &AddFixtureDialog, actions: &mut Vec<DialogAction>) {
    egui::Window::new(window_title(dialog.icon(), dialog.title()))
        .id(egui::Id::new("add_fixture_dialog"))
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (tab, label) in [
                    (DialogTab::Shape, "Shape"),
                    (DialogTab::Fixture, "Fixture"),
                    (DialogTab::LocalTransform, "Local Transform"),
                ] {
                    if ui.selectable_label(dialog.tab() == tab, label).clicked() {
                        actions.push(DialogAction::SelectTab(tab));
                    }
                }
            });
            ui.separator();
            match dialog.tab() {
                DialogTab::Shape => shape_tab(ui, dialog, actions),
                DialogTab::Fixture => fixture_panel_ui(ui, dialog.fixture_panel(), actions),
                DialogTab::LocalTransform => transform_tab(ui, dialog, actions),
            }
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    actions.push(DialogAction::Cancel);
                }
                if ui.button("Add").clicked() {
                    actions.push(DialogAction::Confirm);
                }
            });
        });
}

fn edit_dialog_ui(ctx: &egui::Context, dialog: &EditFixtureDialog, actions: &mut Vec<DialogAction>) {
    egui::Window::new(dialog.title())
        .id(egui::Id::new("edit_fixture_dialog"))
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            fixture_panel_ui(ui, dialog.panel(), actions);
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    actions.push(DialogAction::Cancel);
                }
                if ui.button("OK").clicked() {
                    actions.push(DialogAction::Confirm);
                }
            });
        });
}

fn shape_tab(ui: &mut egui::Ui, dialog: &AddFixtureDialog, actions: &mut Vec<DialogAction>) {
    let panel = dialog.shape_panel();
    ui.label(egui::RichText::new(panel.kind().label()).strong());
    egui::Grid::new("shape_fields").num_columns(2).show(ui, |ui| {
        for (index, field) in panel.fields().iter().enumerate() {
            ui.label(field.label);
            let mut text = field.text.clone();
            if ui.text_edit_singleline(&mut text).changed() {
                actions.push(ShapeCommand::SetField { index, text }.into());
            }
            ui.end_row();
        }
    });
    if ui.button("Reset").clicked() {
        actions.push(ShapeCommand::Reset.into());
    }
}

fn transform_tab(ui: &mut egui::Ui, dialog: &AddFixtureDialog, actions: &mut Vec<DialogAction>) {
    ui.label(LOCAL_TRANSFORM_HELP);
    ui.add_space(4.0);
    egui::Grid::new("transform_fields").num_columns(2).show(ui, |ui| {
        for (index, field) in dialog.transform_panel().fields().iter().enumerate() {
            ui.label(field.label);
            let mut text = field.text.clone();
            if ui.text_edit_singleline(&mut text).changed() {
                actions.push(TransformCommand::SetField { index, text }.into());
            }
            ui.end_row();
        }
    });
}

fn fixture_panel_ui(ui: &mut egui::Ui, panel: &FixturePanel, actions: &mut Vec<DialogAction>) {
    let draft = panel.draft();
    egui::Grid::new("fixture_fields").num_columns(2).show(ui, |ui| {
        ui.label("Name");
        let mut name = draft.name.clone();
        if ui.text_edit_singleline(&mut name).changed() {
            actions.push(FixtureCommand::SetName(name).into());
        }
        ui.end_row();

        ui.label("Filter")
            .on_hover_text("The filter allows certain groups of fixtures to collide or not collide.");
        ui.horizontal(|ui| {
            let kind = panel.filter_kind();
            if ui.radio(kind == FilterKind::Default, "Default").clicked() {
                actions.push(FixtureCommand::SetFilterKind(FilterKind::Default).into());
            }
            if ui.radio(kind == FilterKind::Category, "Category").clicked() {
                actions.push(FixtureCommand::SetFilterKind(FilterKind::Category).into());
            }
        });
        ui.end_row();

        if panel.filter_lists_visible() {
            ui.label("");
            ui.horizontal(|ui| {
                category_list(ui, panel, FilterAxis::Category, "Groups", actions);
                category_list(ui, panel, FilterAxis::Mask, "Masks", actions);
            });
            ui.end_row();
        }

        ui.label("Is Sensor")
            .on_hover_text("A sensor fixture is detected during collision but not resolved.");
        let mut sensor = draft.sensor;
        if ui.checkbox(&mut sensor, "").changed() {
            actions.push(FixtureCommand::SetSensor(sensor).into());
        }
        ui.end_row();

        ui.label("Density").on_hover_text("Kilograms per square meter");
        let mut text = panel.density_text().to_string();
        let response = ui.text_edit_singleline(&mut text);
        if response.changed() {
            actions.push(FixtureCommand::EditDensityText(text).into());
        }
        if response.lost_focus() {
            actions.push(FixtureCommand::CommitDensityText.into());
        }
        ui.end_row();

        ui.label("Friction");
        let mut friction = panel.friction_slider().value();
        if ui
            .add(egui::Slider::new(&mut friction, panel.friction_slider().range()).custom_formatter(percent))
            .changed()
        {
            actions.push(FixtureCommand::SetFriction(friction).into());
        }
        ui.end_row();

        ui.label("Restitution");
        let mut restitution = panel.restitution_slider().value();
        if ui
            .add(egui::Slider::new(&mut restitution, panel.restitution_slider().range()).custom_formatter(percent))
            .changed()
        {
            actions.push(FixtureCommand::SetRestitution(restitution).into());
        }
        ui.end_row();
    });
}

fn percent(value: f64, _decimals: std::ops::RangeInclusive<usize>) -> String {
    format!("{:.2}", value * 0.01)
}

fn category_list(
    ui: &mut egui::Ui,
    panel: &FixturePanel,
    axis: FilterAxis,
    label: &str,
    actions: &mut Vec<DialogAction>,
) {
    let list = panel.filter_editor().list(axis);
    ui.vertical(|ui| {
        ui.label(label);
        egui::ScrollArea::vertical()
            .id_salt(label)
            .max_height(LIST_HEIGHT)
            .show(ui, |ui| {
                for (index, option) in CATEGORIES.iter().enumerate() {
                    if ui.selectable_label(list.is_selected(index), option.label).clicked() {
                        let mods = ui.input(|i| ClickModifiers { toggle: i.modifiers.command, range: i.modifiers.shift });
                        actions.push(
                            FixtureCommand::SelectFilterBits { axis, selection: list.click(index, mods) }.into(),
                        );
                    }
                }
            });
    });
}
