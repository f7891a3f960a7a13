use crate::body::{pair_mut, Body, BodyId};
use crate::clock::StepClock;
use crate::config::{CollisionModel, EngineConfig};
use crate::error::ValidationError;
use crate::events::{Event, RemovalReason};
use crate::form::BodyForm;
use glam::DVec2;
use tracing::{debug, info, trace, warn};

/// What a click in the simulation area does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Clicks create new bodies
    Adding,
    /// Clicks move the body being edited
    Editing,
}

/// The simulation: owns every body and advances them in fixed steps
#[derive(Debug)]
pub struct Engine {
    bodies: Vec<Body>,
    config: EngineConfig,
    g: f64,
    paused: bool,
    mode: Mode,
    edited: Option<BodyId>,
    clock: StepClock,
    next_id: u64,
    events: Vec<Event>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        info!(
            width = config.area.width,
            height = config.area.height,
            step = config.step_size,
            "simulation started"
        );
        Self {
            bodies: Vec::new(),
            g: config.gravitational_constant,
            paused: false,
            mode: Mode::Adding,
            edited: None,
            clock: StepClock::new(config.step_size),
            next_id: 0,
            events: vec![Event::SimulationStarted],
            config,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Live bodies in creation order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.g
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_adding(&self) -> bool {
        self.mode == Mode::Adding
    }

    pub fn edited(&self) -> Option<BodyId> {
        self.edited
    }

    pub fn edited_body(&self) -> Option<&Body> {
        self.edited.and_then(|id| self.body(id))
    }

    pub fn speed(&self) -> f64 {
        self.clock.speed()
    }

    pub fn time_debt(&self) -> f64 {
        self.clock.debt()
    }

    pub fn step_size(&self) -> f64 {
        self.clock.step()
    }

    /// Take every notification emitted since the last call
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    // ------------------------------------------------------------------
    // Stepping
    // ------------------------------------------------------------------

    /// Feed `wall_dt` seconds of wall time and run the whole physics steps
    /// it pays for. Returns the number of steps run.
    ///
    /// While paused nothing runs and the elapsed time is dropped, so resuming
    /// never catches up on the paused interval.
    pub fn tick(&mut self, wall_dt: f64) -> usize {
        if self.paused {
            return 0;
        }

        let steps = self.clock.advance(wall_dt);
        let dt = self.clock.step();
        for _ in 0..steps {
            self.step_once(dt);
        }
        if steps > 0 {
            trace!(steps, bodies = self.bodies.len(), debt = self.clock.debt(), "tick");
        }
        steps
    }

    /// One physics step.
    ///
    /// Body `i` interacts with every later body, then integrates and is
    /// bounds-checked before body `i + 1` is visited. Later bodies therefore
    /// see the already-moved positions of earlier ones.
    pub fn step_once(&mut self, dt: f64) {
        let g = self.g;
        let model = self.config.collision;

        let mut i = 0;
        while i < self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let (a, b) = pair_mut(&mut self.bodies, i, j);
                a.apply_gravity(b, g);

                if a.detect_collision(b) {
                    debug!(a = %a.name, b = %b.name, "collision");
                    self.events.push(Event::Collision {
                        a: a.name.clone(),
                        b: b.name.clone(),
                    });
                    match model {
                        CollisionModel::Swap => a.collide(b),
                        CollisionModel::Elastic => a.collide_elastic(b),
                    }
                }
            }

            self.bodies[i].simulate_step(dt);

            if !self.config.area.contains(self.bodies[i].pos) {
                // The next body has shifted into slot i
                self.remove_at(i, RemovalReason::LeftArea);
                continue;
            }
            i += 1;
        }
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused);
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            self.paused = paused;
            info!(paused, "pause toggled");
            self.events.push(Event::Paused(paused));
        }
    }

    pub fn set_speed(&mut self, speed: f64) -> Result<(), ValidationError> {
        let result = if speed.is_finite() && speed > 0.0 {
            Ok(())
        } else {
            Err(ValidationError::InvalidSpeed)
        };
        self.report(result)?;

        self.clock.set_speed(speed);
        info!(speed, "simulation speed changed");
        self.events.push(Event::SpeedChanged(speed));
        Ok(())
    }

    /// Switch between adding and editing.
    ///
    /// Entering editing selects the first body and is refused when there is
    /// nothing to edit. Leaving it clears the selection.
    pub fn toggle_mode(&mut self) -> Result<Mode, ValidationError> {
        match self.mode {
            Mode::Adding => {
                let first = self.bodies.first().map(|b| b.id).ok_or(ValidationError::NothingToEdit);
                let first = self.report(first)?;
                self.set_mode(Mode::Editing);
                self.select_for_edit(first)?;
            }
            Mode::Editing => {
                self.set_mode(Mode::Adding);
                self.unhighlight();
                self.edited = None;
            }
        }
        Ok(self.mode)
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.mode = mode;
            debug!(?mode, "mode changed");
            self.events.push(Event::ModeChanged(mode));
        }
    }

    /// Start editing `id` regardless of the current mode (tile click)
    pub fn edit_body(&mut self, id: BodyId) -> Result<(), ValidationError> {
        let found = self.index_of(id).ok_or(ValidationError::UnknownBody(id));
        self.report(found)?;
        self.set_mode(Mode::Editing);
        self.select_for_edit(id)
    }

    /// Highlight `id` and make it the body that edits apply to
    pub fn select_for_edit(&mut self, id: BodyId) -> Result<(), ValidationError> {
        let idx = self.index_of(id).ok_or(ValidationError::UnknownBody(id));
        let idx = self.report(idx)?;

        self.unhighlight();
        let body = &mut self.bodies[idx];
        body.highlighted = true;
        self.edited = Some(id);

        info!(id = %id, name = %body.name, "selected body");
        self.events.push(Event::BodySelected {
            id,
            name: body.name.clone(),
        });
        Ok(())
    }

    fn unhighlight(&mut self) {
        for body in &mut self.bodies {
            body.highlighted = false;
        }
    }

    /// A click in the simulation area, interpreted by the current mode
    pub fn click(&mut self, pos: DVec2, form: &BodyForm) -> Result<(), ValidationError> {
        match self.mode {
            Mode::Adding => self.create_body(pos, form).map(|_| ()),
            Mode::Editing => self.move_edited_body(pos),
        }
    }

    /// Create a body at `click` from `form`.
    ///
    /// Blank mass and radius fall back to the configured defaults, blank
    /// velocity to zero and blank position to the click location. The body is
    /// discarded if it would overlap any existing body.
    pub fn create_body(&mut self, click: DVec2, form: &BodyForm) -> Result<BodyId, ValidationError> {
        let result = self.try_create_body(click, form);
        self.report(result)
    }

    fn try_create_body(&mut self, click: DVec2, form: &BodyForm) -> Result<BodyId, ValidationError> {
        let name = form.name().ok_or(ValidationError::MissingName)?;
        let mass = form.mass()?.unwrap_or(self.config.default_mass);
        let radius = form.radius()?.unwrap_or(self.config.default_radius);
        let vel = DVec2::new(
            form.velocity_x()?.unwrap_or(0.0),
            form.velocity_y()?.unwrap_or(0.0),
        );
        let pos = DVec2::new(
            form.position_x()?.unwrap_or(click.x),
            form.position_y()?.unwrap_or(click.y),
        );

        let body = Body::new(BodyId(self.next_id), name, pos, vel, mass, radius);
        if self.bodies.iter().any(|other| body.detect_collision(other)) {
            return Err(ValidationError::WouldCollide);
        }

        self.next_id += 1;
        let id = body.id;
        info!(id = %id, name = %body.name, x = pos.x, y = pos.y, mass, radius, "added body");
        self.events.push(Event::BodyAdded {
            id,
            name: body.name.clone(),
        });
        self.bodies.push(body);
        Ok(id)
    }

    /// Apply `form` to an existing body. Blank fields keep the body's current
    /// values. Nothing is written unless every field is valid and the result
    /// does not overlap another body.
    pub fn adjust_body(&mut self, id: BodyId, form: &BodyForm) -> Result<(), ValidationError> {
        let result = self.try_adjust_body(id, form);
        self.report(result)
    }

    /// [`Engine::adjust_body`] on the body currently being edited
    pub fn adjust_edited(&mut self, form: &BodyForm) -> Result<(), ValidationError> {
        let result = self
            .edited
            .ok_or(ValidationError::NoBodySelected)
            .and_then(|id| self.try_adjust_body(id, form));
        self.report(result)
    }

    fn try_adjust_body(&mut self, id: BodyId, form: &BodyForm) -> Result<(), ValidationError> {
        let idx = self.index_of(id).ok_or(ValidationError::UnknownBody(id))?;
        let current = &self.bodies[idx];

        let mut adjusted = current.clone();
        if let Some(name) = form.name() {
            adjusted.name = name.to_string();
        }
        adjusted.mass = form.mass()?.unwrap_or(current.mass);
        adjusted.radius = form.radius()?.unwrap_or(current.radius);
        adjusted.vel = DVec2::new(
            form.velocity_x()?.unwrap_or(current.vel.x),
            form.velocity_y()?.unwrap_or(current.vel.y),
        );
        adjusted.pos = DVec2::new(
            form.position_x()?.unwrap_or(current.pos.x),
            form.position_y()?.unwrap_or(current.pos.y),
        );

        if self.bodies.iter().any(|other| adjusted.detect_collision(other)) {
            return Err(ValidationError::WouldCollide);
        }

        info!(id = %id, name = %adjusted.name, "edited body");
        self.events.push(Event::BodyEdited {
            id,
            name: adjusted.name.clone(),
        });
        self.bodies[idx] = adjusted;
        Ok(())
    }

    /// Move the edited body to `pos`, reverting if it would overlap another
    pub fn move_edited_body(&mut self, pos: DVec2) -> Result<(), ValidationError> {
        let result = self.try_move_edited_body(pos);
        self.report(result)
    }

    fn try_move_edited_body(&mut self, pos: DVec2) -> Result<(), ValidationError> {
        let id = self.edited.ok_or(ValidationError::NoBodySelected)?;
        let idx = self.index_of(id).ok_or(ValidationError::UnknownBody(id))?;

        let mut moved = self.bodies[idx].clone();
        moved.pos = pos;
        // Bodies sitting exactly on the target point are not checked
        let collides = self
            .bodies
            .iter()
            .filter(|other| other.pos != moved.pos)
            .any(|other| moved.detect_collision(other));
        if collides {
            return Err(ValidationError::WouldCollide);
        }

        let body = &mut self.bodies[idx];
        body.pos = pos;
        debug!(id = %id, x = pos.x, y = pos.y, "moved body");
        self.events.push(Event::BodyMoved {
            id,
            name: body.name.clone(),
        });
        Ok(())
    }

    /// Explicit deletion, e.g. from the body's tile
    pub fn remove_body(&mut self, id: BodyId) -> Result<Body, ValidationError> {
        let idx = self.index_of(id).ok_or(ValidationError::UnknownBody(id));
        let idx = self.report(idx)?;
        Ok(self.remove_at(idx, RemovalReason::Deleted))
    }

    fn remove_at(&mut self, idx: usize, reason: RemovalReason) -> Body {
        let body = self.bodies.remove(idx);
        if self.edited == Some(body.id) {
            self.edited = None;
            self.set_mode(Mode::Adding);
        }

        info!(id = %body.id, name = %body.name, ?reason, "removed body");
        self.events.push(Event::BodyRemoved {
            id: body.id,
            name: body.name.clone(),
            reason,
        });
        body
    }

    /// Drop every body and restore the gravitational constant.
    ///
    /// Pause state, mode and speed are kept.
    pub fn reset(&mut self) {
        self.bodies.clear();
        self.edited = None;
        self.g = self.config.gravitational_constant;
        self.clock.reset();
        info!("simulation reset");
        self.events.push(Event::SimulationReset);
    }

    fn report<T>(&mut self, result: Result<T, ValidationError>) -> Result<T, ValidationError> {
        if let Err(err) = &result {
            warn!(%err, "rejected");
            self.events.push(Event::Rejected(err.clone()));
        }
        result
    }
}
