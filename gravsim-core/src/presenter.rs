//! Glue between a frame-driven UI and the [`Engine`]
//!
//! The UI calls [`Presenter::tick`] once per frame and forwards user input
//! through the command methods. After every call the status log and the tile
//! list reflect the engine's current state, so the UI only has to draw them.

use crate::body::BodyId;
use crate::config::EngineConfig;
use crate::engine::{Engine, Mode};
use crate::error::ValidationError;
use crate::events::Event;
use crate::form::{parse_positive, BodyForm};
use crate::status::StatusLog;
use crate::view::TileView;
use glam::DVec2;
use std::time::Instant;

pub struct Presenter {
    engine: Engine,
    /// Input fields, edited in place by the UI
    pub form: BodyForm,
    status: StatusLog,
    tiles: Vec<TileView>,
    last_tick: Option<Instant>,
    /// Pause state to restore if a pending new-simulation request is cancelled
    pending_reset: Option<bool>,
}

impl Presenter {
    pub fn new(config: EngineConfig) -> Self {
        let mut presenter = Self {
            engine: Engine::new(config),
            form: BodyForm::new(),
            status: StatusLog::new(),
            tiles: Vec::new(),
            last_tick: None,
            pending_reset: None,
        };
        presenter.sync();
        presenter
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn status(&self) -> &StatusLog {
        &self.status
    }

    /// One tile per live body, in body order
    pub fn tiles(&self) -> &[TileView] {
        &self.tiles
    }

    pub fn tick(&mut self) -> usize {
        self.tick_at(Instant::now())
    }

    /// Advance by the wall time elapsed since the previous tick. The first
    /// tick only records the starting instant.
    pub fn tick_at(&mut self, now: Instant) -> usize {
        let wall_dt = match self.last_tick.replace(now) {
            Some(prev) => now.saturating_duration_since(prev).as_secs_f64(),
            None => 0.0,
        };
        let steps = self.engine.tick(wall_dt);
        self.sync();
        steps
    }

    pub fn toggle_pause(&mut self) -> bool {
        let paused = self.engine.toggle_pause();
        self.sync();
        paused
    }

    pub fn toggle_mode(&mut self) -> Result<Mode, ValidationError> {
        let result = self.engine.toggle_mode();
        self.sync();
        result
    }

    /// Parse and apply a speed multiplier typed by the user
    pub fn set_speed_text(&mut self, text: &str) -> Result<(), ValidationError> {
        let result = match parse_positive(text, "speed") {
            Ok(Some(speed)) => self.engine.set_speed(speed),
            Ok(None) | Err(_) => {
                let err = ValidationError::InvalidSpeed;
                self.status.record(&Event::Rejected(err.clone()));
                Err(err)
            }
        };
        self.sync();
        result
    }

    /// Pause while the user confirms wiping the simulation
    pub fn begin_new_simulation(&mut self) {
        if self.pending_reset.is_none() {
            self.pending_reset = Some(self.engine.is_paused());
        }
        self.engine.set_paused(true);
        self.sync();
    }

    pub fn new_simulation_pending(&self) -> bool {
        self.pending_reset.is_some()
    }

    /// Accepting wipes the simulation and leaves it paused. Cancelling
    /// restores the pause state from before the request.
    pub fn confirm_new_simulation(&mut self, accept: bool) {
        let Some(was_paused) = self.pending_reset.take() else {
            return;
        };
        if accept {
            self.engine.reset();
            self.last_tick = None;
        } else {
            self.engine.set_paused(was_paused);
        }
        self.sync();
    }

    /// Click at `pos` in simulation-area coordinates
    pub fn click(&mut self, pos: DVec2) -> Result<(), ValidationError> {
        let adding = self.engine.is_adding();
        let result = self.engine.click(pos, &self.form);
        if result.is_ok() && adding {
            self.form.clear();
        }
        self.sync();
        result
    }

    /// Apply the form to the edited body. Does nothing in adding mode.
    pub fn submit_edit(&mut self) -> Result<(), ValidationError> {
        if self.engine.is_adding() {
            return Ok(());
        }
        let result = self.engine.adjust_edited(&self.form);
        if result.is_ok() {
            self.form.clear();
        }
        self.sync();
        result
    }

    pub fn select_tile(&mut self, id: BodyId) -> Result<(), ValidationError> {
        let result = self.engine.edit_body(id);
        self.sync();
        result
    }

    pub fn remove_tile(&mut self, id: BodyId) -> Result<(), ValidationError> {
        let result = self.engine.remove_body(id).map(|_| ());
        self.sync();
        result
    }

    fn sync(&mut self) {
        for event in self.engine.drain_events() {
            self.status.record(&event);
        }
        self.tiles.clear();
        self.tiles.extend(self.engine.bodies().iter().map(TileView::from));
    }
}
