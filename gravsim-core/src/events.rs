//! Notifications emitted by the engine for the UI to render

use crate::body::BodyId;
use crate::engine::Mode;
use crate::error::ValidationError;
use std::fmt;

/// Why a body left the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    LeftArea,
    Deleted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SimulationStarted,
    SimulationReset,
    BodyAdded { id: BodyId, name: String },
    BodyRemoved { id: BodyId, name: String, reason: RemovalReason },
    BodyEdited { id: BodyId, name: String },
    BodySelected { id: BodyId, name: String },
    BodyMoved { id: BodyId, name: String },
    Collision { a: String, b: String },
    ModeChanged(Mode),
    Paused(bool),
    SpeedChanged(f64),
    Rejected(ValidationError),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::SimulationStarted => write!(f, "simulation started"),
            Event::SimulationReset => write!(f, "new simulation started"),
            Event::BodyAdded { name, .. } => write!(f, "added object {name}"),
            Event::BodyRemoved { name, reason: RemovalReason::LeftArea, .. } => {
                write!(f, "object {name} left the simulation area")
            }
            Event::BodyRemoved { name, reason: RemovalReason::Deleted, .. } => {
                write!(f, "removed object {name}")
            }
            Event::BodyEdited { name, .. } => write!(f, "edited object {name}"),
            Event::BodySelected { name, .. } => write!(f, "selected object {name}"),
            Event::BodyMoved { name, .. } => write!(f, "moved object {name}"),
            Event::Collision { a, b } => write!(f, "collision of objects {a} and {b}"),
            Event::ModeChanged(Mode::Adding) => write!(f, "adding mode"),
            Event::ModeChanged(Mode::Editing) => write!(f, "editing mode"),
            Event::Paused(true) => write!(f, "simulation paused"),
            Event::Paused(false) => write!(f, "simulation resumed"),
            Event::SpeedChanged(speed) => write!(f, "new simulation speed: {speed}"),
            Event::Rejected(err) => write!(f, "{err}"),
        }
    }
}
