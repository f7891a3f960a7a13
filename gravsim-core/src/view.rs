use crate::body::{Body, BodyId};
use glam::DVec2;

/// Read-only snapshot of one body for its list tile
#[derive(Debug, Clone, PartialEq)]
pub struct TileView {
    pub id: BodyId,
    pub name: String,
    pub mass: f64,
    pub radius: f64,
    pub pos: DVec2,
    pub vel: DVec2,
    pub acc: DVec2,
    pub highlighted: bool,
}

impl From<&Body> for TileView {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id,
            name: body.name.clone(),
            mass: body.mass,
            radius: body.radius,
            pos: body.pos,
            vel: body.vel,
            acc: body.last_acc,
            highlighted: body.highlighted,
        }
    }
}

impl TileView {
    pub fn position_text(&self) -> String {
        format_pair(self.pos)
    }

    pub fn velocity_text(&self) -> String {
        format_pair(self.vel)
    }

    pub fn acceleration_text(&self) -> String {
        format_pair(self.acc)
    }
}

fn format_pair(v: DVec2) -> String {
    format!("{:.2}; {:.2}", v.x, v.y)
}
