//! Bodies and their pairwise interactions
//!
//! A [`Body`] owns its own integration step. Pairwise operations take the
//! other body by `&mut` so both sides can be updated in one call; use
//! [`pair_mut`] to borrow two bodies out of the same slice.

use glam::DVec2;
use std::fmt;

/// Stable identity of a body, assigned by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A circular body in the simulation area
#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub name: String,
    pub pos: DVec2,
    pub vel: DVec2,
    /// Accumulated during one force pass, cleared by [`Body::simulate_step`]
    pub acc: DVec2,
    /// Acceleration used by the most recent step (display only)
    pub last_acc: DVec2,
    pub mass: f64,
    pub radius: f64,
    pub highlighted: bool,
}

impl Body {
    pub fn new(id: BodyId, name: impl Into<String>, pos: DVec2, vel: DVec2, mass: f64, radius: f64) -> Self {
        Self {
            id,
            name: name.into(),
            pos,
            vel,
            acc: DVec2::ZERO,
            last_acc: DVec2::ZERO,
            mass,
            radius,
            highlighted: false,
        }
    }

    /// Accumulate the mutual gravitational pull between `self` and `other`
    pub fn apply_gravity(&mut self, other: &mut Body, g: f64) {
        let r = other.pos - self.pos;
        let dist = r.length();
        // Coincident centers: no defined direction
        if dist == 0.0 {
            return;
        }

        let force = g * self.mass * other.mass / (dist * dist);
        let dir = r / dist;

        self.acc += dir * force / self.mass;
        other.acc -= dir * force / other.mass;
    }

    /// Circles overlap. A body never collides with itself.
    pub fn detect_collision(&self, other: &Body) -> bool {
        if self.id == other.id {
            return false;
        }
        self.pos.distance(other.pos) < self.radius + other.radius
    }

    /// Exchange velocity vectors with `other`
    pub fn collide(&mut self, other: &mut Body) {
        std::mem::swap(&mut self.vel, &mut other.vel);
    }

    /// Mass-weighted impulse along the contact normal
    pub fn collide_elastic(&mut self, other: &mut Body) {
        let normal = other.pos - self.pos;
        let magnitude = normal.length().max(self.radius + other.radius);
        let normal = normal / magnitude;

        let relative_vel = other.vel - self.vel;
        let impulse =
            2.0 * self.mass * other.mass * relative_vel.dot(normal) / (self.mass + other.mass);

        self.vel += normal * impulse / self.mass;
        other.vel -= normal * impulse / other.mass;
    }

    /// Semi-implicit Euler: v += a*dt, then x += v*dt
    pub fn simulate_step(&mut self, dt: f64) {
        self.vel += self.acc * dt;
        self.pos += self.vel * dt;
        self.last_acc = self.acc;
        self.acc = DVec2::ZERO;
    }
}

/// Borrow two distinct bodies mutably, in index order
///
/// Panics if `i == j` or either index is out of range.
pub fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    assert!(i != j, "pair_mut requires distinct indices");
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
