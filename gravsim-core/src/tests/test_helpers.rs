//! Test helper utilities for gravsim tests

use crate::body::{Body, BodyId};
use crate::engine::Engine;
use crate::events::Event;
use crate::form::BodyForm;
use glam::DVec2;

/// Check if two floating point values are approximately equal within tolerance
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Component-wise [`approx_eq`] for vectors
pub fn approx_eq_vec(a: DVec2, b: DVec2, tol: f64) -> bool {
    approx_eq(a.x, b.x, tol) && approx_eq(a.y, b.y, tol)
}

/// A standalone body at rest, for tests that work on bodies directly
pub fn body(id: u64, x: f64, y: f64, mass: f64, radius: f64) -> Body {
    Body::new(BodyId(id), format!("body{id}"), DVec2::new(x, y), DVec2::ZERO, mass, radius)
}

/// Form with only the name filled in
pub fn named(name: &str) -> BodyForm {
    BodyForm::new().with_name(name)
}

/// Create a body through the engine, panicking if it is rejected
pub fn spawn(engine: &mut Engine, name: &str, x: f64, y: f64) -> BodyId {
    engine
        .create_body(DVec2::new(x, y), &named(name))
        .unwrap_or_else(|e| panic!("failed to create {name}: {e}"))
}

/// Create a body with explicit mass, radius and velocity
pub fn spawn_with(
    engine: &mut Engine,
    name: &str,
    pos: DVec2,
    vel: DVec2,
    mass: f64,
    radius: f64,
) -> BodyId {
    let form = named(name)
        .with_mass(mass.to_string())
        .with_radius(radius.to_string())
        .with_velocity(vel.x.to_string(), vel.y.to_string());
    engine
        .create_body(pos, &form)
        .unwrap_or_else(|e| panic!("failed to create {name}: {e}"))
}

/// Engine with its start-up notification already drained
pub fn quiet_engine() -> Engine {
    let mut engine = Engine::default();
    engine.drain_events();
    engine
}

/// Count drained events matching `pred`
pub fn count_events(events: &[Event], pred: impl Fn(&Event) -> bool) -> usize {
    events.iter().filter(|&e| pred(e)).count()
}
