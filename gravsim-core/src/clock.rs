//! Fixed-step time accumulator
//!
//! Frames arrive at whatever interval the OS schedules them. The clock turns
//! that jittery wall time into a whole number of constant-size physics steps
//! and carries the remainder over to the next frame.

/// Converts scaled wall time into fixed physics steps
#[derive(Debug, Clone)]
pub struct StepClock {
    step: f64,
    debt: f64,
    speed: f64,
}

impl StepClock {
    pub fn new(step: f64) -> Self {
        Self {
            step,
            debt: 0.0,
            speed: 1.0,
        }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Scaled wall time not yet simulated. Always in `[0, step)`.
    pub fn debt(&self) -> f64 {
        self.debt
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Add `wall_dt` seconds of wall time and drain the whole steps it buys
    pub fn advance(&mut self, wall_dt: f64) -> usize {
        self.debt += wall_dt * self.speed;
        let steps = (self.debt / self.step).floor().max(0.0);
        self.debt -= steps * self.step;

        // Rounding in the division can leave the remainder a hair outside
        // [0, step); fold it back in.
        if self.debt < 0.0 {
            self.debt = 0.0;
        }
        let mut steps = steps as usize;
        while self.debt >= self.step {
            self.debt -= self.step;
            steps += 1;
        }
        steps
    }

    pub fn reset(&mut self) {
        self.debt = 0.0;
    }
}
