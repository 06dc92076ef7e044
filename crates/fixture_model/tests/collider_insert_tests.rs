use bevy::ecs::system::SystemState;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use fixture_model::*;

fn spawn_with(fixture: Fixture) -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    let e = app.world_mut().spawn_empty().id();
    {
        let mut commands = app.world_mut().commands();
        insert_fixture(&mut commands.entity(e), &fixture, 50.0).unwrap();
    }
    app.world_mut().flush();
    (app, e)
}

#[test]
fn sensor_marker_follows_flag() {
    let mut fixture = Fixture::new(ConvexShape::circle(0.5).unwrap());
    fixture.sensor = true;
    let (mut app, e) = spawn_with(fixture.clone());
    assert!(app.world().get::<Sensor>(e).is_some());
    assert_eq!(app.world().get::<Fixture>(e), Some(&fixture));

    fixture.sensor = false;
    {
        let mut commands = app.world_mut().commands();
        insert_fixture(&mut commands.entity(e), &fixture, 50.0).unwrap();
    }
    app.world_mut().flush();
    assert!(app.world().get::<Sensor>(e).is_none());
}

#[test]
fn collider_enables_filter_hooks() {
    let mut fixture = Fixture::new(ConvexShape::rectangle(1.0, 2.0).unwrap());
    fixture.filter = CollisionFilter::category_filter(0b100, ALL_CATEGORIES);
    let (app, e) = spawn_with(fixture);
    assert_eq!(app.world().get::<ActiveHooks>(e), Some(&fixture_hooks()));
    assert!(app.world().get::<CollisionGroups>(e).is_none());
    assert!(app.world().get::<Collider>(e).is_some());
    assert_eq!(app.world().get::<Name>(e).unwrap().as_str(), "Fixture");
}

#[test]
fn hook_lets_default_meet_empty_category() {
    let mut empty = Fixture::new(ConvexShape::circle(0.5).unwrap());
    empty.filter = CollisionFilter::category_filter(0, ALL_CATEGORIES);
    let (mut app, a) = spawn_with(empty.clone());
    let b = app.world_mut().spawn(Fixture::new(ConvexShape::circle(0.5).unwrap())).id();
    let c = app.world_mut().spawn(empty).id();
    let plain = app.world_mut().spawn_empty().id();

    let mut state = SystemState::<FixtureFilterHook>::new(app.world_mut());
    let hook = state.get(app.world());
    assert!(hook.allows_pair(a, b));
    assert!(hook.allows_pair(b, a));
    assert!(hook.allows_pair(a, plain));
    assert!(!hook.allows_pair(a, c));
}

#[test]
fn hook_applies_category_rule() {
    let mut left = Fixture::new(ConvexShape::circle(0.5).unwrap());
    left.filter = CollisionFilter::category_filter(0b01, 0b10);
    let mut right = left.clone();
    right.filter = CollisionFilter::category_filter(0b10, 0b01);
    let mut loner = left.clone();
    loner.filter = CollisionFilter::category_filter(0b10, 0b10);

    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    let l = app.world_mut().spawn(left).id();
    let r = app.world_mut().spawn(right).id();
    let x = app.world_mut().spawn(loner).id();

    let mut state = SystemState::<FixtureFilterHook>::new(app.world_mut());
    let hook = state.get(app.world());
    assert!(hook.allows_pair(l, r));
    assert!(!hook.allows_pair(l, x));
}
