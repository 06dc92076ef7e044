use bevy::prelude::*;
use fixture_editor::*;
use fixture_model::{ConvexShape, FilterAxis, Fixture};

fn editor_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(FixtureEditorPlugin::default());
    app
}

fn send(app: &mut App, action: impl Into<DialogAction>) {
    app.world_mut().send_event(FixtureDialogInput(action.into()));
}

fn closed(app: &App) -> Vec<FixtureDialogClosed> {
    app.world()
        .resource::<Events<FixtureDialogClosed>>()
        .iter_current_update_events()
        .cloned()
        .collect()
}

#[test]
fn add_dialog_reports_new_fixture_for_body() {
    let mut app = editor_app();
    let body = app.world_mut().spawn_empty().id();
    app.world_mut().send_event(OpenAddFixtureDialog { body, shape: ShapeKind::Rectangle });
    app.update();
    assert!(matches!(*app.world().resource::<ActiveFixtureDialog>(), ActiveFixtureDialog::Add { .. }));

    send(&mut app, FixtureCommand::SetName("plate".into()));
    send(&mut app, TransformCommand::SetField { index: 1, text: "-1".into() });
    send(&mut app, DialogAction::Confirm);
    app.update();

    let events = closed(&app);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].target, body);
    let DialogOutcome::Added(fixture) = &events[0].outcome else {
        panic!("expected an added fixture, got {:?}", events[0].outcome);
    };
    assert_eq!(fixture.name, "plate");
    assert!(fixture.shape.centroid().distance(Vec2::new(0.0, -1.0)) < 1e-6);
    assert!(app.world().resource::<ActiveFixtureDialog>().is_none());
}

#[test]
fn invalid_input_queues_message_and_stays_open() {
    let mut app = editor_app();
    let body = app.world_mut().spawn_empty().id();
    app.world_mut().send_event(OpenAddFixtureDialog { body, shape: ShapeKind::Circle });
    app.update();

    send(&mut app, ShapeCommand::SetField { index: 0, text: "".into() });
    send(&mut app, DialogAction::Confirm);
    app.update();

    assert!(closed(&app).is_empty());
    assert_eq!(app.world().resource::<ActiveFixtureDialog>().state(), Some(DialogState::Open));
    let messages = app.world().resource::<DialogMessages>();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages.current().map(|m| m.title.as_str()), Some("Invalid Input"));
}

#[test]
fn second_open_request_is_ignored_while_open() {
    let mut app = editor_app();
    let first = app.world_mut().spawn_empty().id();
    let second = app.world_mut().spawn_empty().id();
    app.world_mut().send_event(OpenAddFixtureDialog { body: first, shape: ShapeKind::Circle });
    app.world_mut().send_event(OpenAddFixtureDialog { body: second, shape: ShapeKind::Polygon });
    app.update();

    let ActiveFixtureDialog::Add { body, dialog } = app.world().resource::<ActiveFixtureDialog>() else {
        panic!("expected an open add dialog");
    };
    assert_eq!(*body, first);
    assert_eq!(dialog.shape_panel().kind(), ShapeKind::Circle);
}

#[test]
fn edit_confirm_reports_edited_copy() {
    let mut app = editor_app();
    let original = Fixture::new(ConvexShape::circle(0.5).unwrap()).with_name("wheel");
    let entity = app.world_mut().spawn(original.clone()).id();
    app.world_mut().send_event(OpenEditFixtureDialog { fixture: entity });
    app.update();

    send(&mut app, FixtureCommand::SetRestitution(80));
    send(&mut app, FixtureCommand::SelectFilterBits {
        axis: FilterAxis::Mask,
        selection: ListSelection::settled(vec![1]),
    });
    send(&mut app, DialogAction::Confirm);
    app.update();

    let events = closed(&app);
    assert_eq!(events.len(), 1);
    let DialogOutcome::Edited(edited) = &events[0].outcome else {
        panic!("expected an edit, got {:?}", events[0].outcome);
    };
    assert_eq!(events[0].target, entity);
    assert_eq!(edited.shape, original.shape);
    assert!((edited.restitution - 0.8).abs() < 1e-6);
    assert_eq!(edited.filter.mask(), 1);
}

#[test]
fn edit_cancel_leaves_component_unchanged() {
    let mut app = editor_app();
    let original = Fixture::new(ConvexShape::circle(0.5).unwrap()).with_name("wheel");
    let entity = app.world_mut().spawn(original.clone()).id();
    app.world_mut().send_event(OpenEditFixtureDialog { fixture: entity });
    app.update();

    send(&mut app, FixtureCommand::SetName("changed".into()));
    send(&mut app, FixtureCommand::SetSensor(true));
    send(&mut app, DialogAction::Cancel);
    app.update();

    let events = closed(&app);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].outcome, DialogOutcome::Canceled);
    assert_eq!(app.world().get::<Fixture>(entity), Some(&original));
}

#[test]
fn edit_request_without_fixture_is_ignored() {
    let mut app = editor_app();
    let entity = app.world_mut().spawn_empty().id();
    app.world_mut().send_event(OpenEditFixtureDialog { fixture: entity });
    app.update();
    assert!(app.world().resource::<ActiveFixtureDialog>().is_none());
}
