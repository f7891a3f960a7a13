//! Physics steps driven through the engine: gravity, collisions, bounds

use glam::DVec2;
use gravsim_core::tests::test_helpers::{approx_eq_vec, count_events, quiet_engine, spawn, spawn_with};
use gravsim_core::{CollisionModel, Engine, EngineConfig, Event, RemovalReason};

#[test]
fn test_bodies_attract() {
    let mut engine = quiet_engine();
    spawn(&mut engine, "a", 100.0, 250.0);
    spawn(&mut engine, "b", 400.0, 250.0);

    let before = engine.bodies()[0].pos.distance(engine.bodies()[1].pos);
    engine.tick(0.5);
    let after = engine.bodies()[0].pos.distance(engine.bodies()[1].pos);

    assert!(after < before, "gravity should pull bodies together");
    assert!(engine.bodies()[0].vel.x > 0.0);
    assert!(engine.bodies()[1].vel.x < 0.0);
}

#[test]
fn test_step_matches_manual_pairwise_order() {
    let mut engine = quiet_engine();
    spawn_with(&mut engine, "a", DVec2::new(100.0, 100.0), DVec2::new(1.0, 0.0), 100.0, 5.0);
    spawn_with(&mut engine, "b", DVec2::new(200.0, 150.0), DVec2::ZERO, 300.0, 5.0);
    spawn_with(&mut engine, "c", DVec2::new(150.0, 300.0), DVec2::new(0.0, -2.0), 50.0, 5.0);

    // Replay one step by hand in the same order
    let mut bodies = engine.bodies().to_vec();
    let g = engine.gravitational_constant();
    let dt = engine.step_size();
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (a, b) = gravsim_core::body::pair_mut(&mut bodies, i, j);
            a.apply_gravity(b, g);
        }
        bodies[i].simulate_step(dt);
    }

    engine.step_once(dt);

    for (expected, actual) in bodies.iter().zip(engine.bodies()) {
        assert!(approx_eq_vec(expected.pos, actual.pos, 1e-12));
        assert!(approx_eq_vec(expected.vel, actual.vel, 1e-12));
        assert_eq!(actual.acc, DVec2::ZERO);
    }
}

#[test]
fn test_stepping_is_deterministic() {
    let build = || {
        let mut engine = quiet_engine();
        spawn_with(&mut engine, "a", DVec2::new(200.0, 250.0), DVec2::new(0.0, 20.0), 500.0, 8.0);
        spawn_with(&mut engine, "b", DVec2::new(300.0, 250.0), DVec2::new(0.0, -20.0), 500.0, 8.0);
        spawn_with(&mut engine, "c", DVec2::new(250.0, 100.0), DVec2::new(15.0, 0.0), 50.0, 4.0);
        engine
    };

    let mut first = build();
    let mut second = build();
    for _ in 0..50 {
        first.tick(0.017);
        second.tick(0.017);
    }

    assert_eq!(first.bodies().len(), second.bodies().len());
    for (a, b) in first.bodies().iter().zip(second.bodies()) {
        assert_eq!(a.pos, b.pos);
        assert_eq!(a.vel, b.vel);
    }
}

#[test]
fn test_collision_swaps_velocities_once() {
    let mut engine = quiet_engine();
    spawn_with(&mut engine, "a", DVec2::new(100.0, 100.0), DVec2::new(50.0, 0.0), 100.0, 10.0);
    spawn_with(&mut engine, "b", DVec2::new(125.25, 100.0), DVec2::new(-50.0, 0.0), 100.0, 10.0);
    engine.drain_events();

    for _ in 0..10 {
        engine.step_once(0.01);
    }

    let events = engine.drain_events();
    let collisions = count_events(&events, |e| matches!(e, Event::Collision { .. }));
    assert_eq!(collisions, 1);
    assert!(events.contains(&Event::Collision {
        a: "a".to_string(),
        b: "b".to_string()
    }));

    // After the swap they fly apart
    assert!(engine.bodies()[0].vel.x < 0.0);
    assert!(engine.bodies()[1].vel.x > 0.0);
}

#[test]
fn test_elastic_collision_model() {
    let config = EngineConfig {
        collision: CollisionModel::Elastic,
        gravitational_constant: 0.0,
        ..EngineConfig::default()
    };
    let mut engine = Engine::new(config);
    spawn_with(&mut engine, "light", DVec2::new(100.0, 100.0), DVec2::new(50.0, 0.0), 1.0, 10.0);
    spawn_with(&mut engine, "heavy", DVec2::new(125.25, 100.0), DVec2::ZERO, 3.0, 10.0);

    let momentum = |e: &Engine| e.bodies().iter().map(|b| b.vel * b.mass).sum::<DVec2>();
    let before = momentum(&engine);
    for _ in 0..20 {
        engine.step_once(0.01);
    }

    assert!(approx_eq_vec(before, momentum(&engine), 1e-9));
    // The light body bounces back off the heavy one
    assert!(engine.bodies()[0].vel.x < 0.0);
    assert!(engine.bodies()[1].vel.x > 0.0);
}

#[test]
fn test_body_leaving_area_removed_once() {
    let mut engine = quiet_engine();
    // Default area is 500x500 with a 100 margin: x > 600 is out
    let id = spawn_with(&mut engine, "runaway", DVec2::new(599.0, 250.0), DVec2::new(200.0, 0.0), 1.0, 1.0);
    engine.drain_events();

    engine.step_once(0.01);

    assert!(engine.bodies().is_empty());
    let events = engine.drain_events();
    assert_eq!(
        events,
        vec![Event::BodyRemoved {
            id,
            name: "runaway".to_string(),
            reason: RemovalReason::LeftArea
        }]
    );

    engine.step_once(0.01);
    assert!(engine.drain_events().is_empty());
}

#[test]
fn test_body_on_margin_edge_survives() {
    let mut engine = quiet_engine();
    spawn_with(&mut engine, "edge", DVec2::new(-100.0, -100.0), DVec2::ZERO, 1.0, 1.0);

    engine.step_once(0.01);

    assert_eq!(engine.bodies().len(), 1);
}

#[test]
fn test_each_axis_bounds() {
    let exits = [
        DVec2::new(-101.0, 250.0),
        DVec2::new(250.0, -101.0),
        DVec2::new(601.0, 250.0),
        DVec2::new(250.0, 601.0),
    ];
    for pos in exits {
        let mut engine = quiet_engine();
        spawn_with(&mut engine, "out", pos, DVec2::ZERO, 1.0, 1.0);
        engine.step_once(0.01);
        assert!(engine.bodies().is_empty(), "{pos:?} should be out of bounds");
    }
}

#[test]
fn test_removal_does_not_skip_next_body() {
    let mut engine = quiet_engine();
    spawn_with(&mut engine, "gone", DVec2::new(-99.5, 400.0), DVec2::new(-100.0, 0.0), 1.0, 1.0);
    spawn_with(&mut engine, "next", DVec2::new(300.0, 100.0), DVec2::new(0.0, 100.0), 1.0, 1.0);

    engine.step_once(0.01);

    assert_eq!(engine.bodies().len(), 1);
    let next = &engine.bodies()[0];
    assert_eq!(next.name, "next");
    // Moved by roughly v * dt despite its predecessor being removed
    assert!((next.pos.y - 101.0).abs() < 1e-3, "y = {}", next.pos.y);
}

#[test]
fn test_paused_engine_does_not_move_bodies() {
    let mut engine = quiet_engine();
    spawn_with(&mut engine, "a", DVec2::new(100.0, 100.0), DVec2::new(10.0, 0.0), 1.0, 1.0);
    engine.set_paused(true);

    engine.tick(1.0);

    assert_eq!(engine.bodies()[0].pos, DVec2::new(100.0, 100.0));
}
