//! Interactive window for the gravity simulator
//!
//! Draws the simulation area, the body form, one tile per body and the
//! status line. All state lives in the [`Presenter`]; this module only maps
//! egui input onto presenter commands.

use eframe::egui;
use gravsim_core::{BodyId, EngineConfig, Mode, Presenter, TileView};
use glam::DVec2;

const AREA_COLOR: egui::Color32 = egui::Color32::from_rgb(151, 172, 184);
const BODY_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 220, 220);
const HIGHLIGHT_COLOR: egui::Color32 = egui::Color32::WHITE;

/// What the user asked a tile to do
enum TileAction {
    Select(BodyId),
    Remove(BodyId),
}

pub struct GravApp {
    presenter: Presenter,
    speed_text: String,
}

impl GravApp {
    pub fn new(config: EngineConfig, _cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            presenter: Presenter::new(config),
            speed_text: String::from("1.0"),
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let paused = self.presenter.engine().is_paused();
            if ui.button(if paused { "▶ Resume" } else { "⏸ Pause" }).clicked() {
                self.presenter.toggle_pause();
            }

            let mode_label = match self.presenter.engine().mode() {
                Mode::Adding => "➕ Adding mode",
                Mode::Editing => "✏ Editing mode",
            };
            if ui.button(mode_label).clicked() {
                let _ = self.presenter.toggle_mode();
            }

            ui.separator();

            ui.label("Speed:");
            let edit = ui.add(egui::TextEdit::singleline(&mut self.speed_text).desired_width(60.0));
            let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if submitted || ui.button("Set").clicked() {
                let _ = self.presenter.set_speed_text(&self.speed_text);
            }

            ui.separator();

            if ui.button("New simulation").clicked() {
                self.presenter.begin_new_simulation();
            }

            ui.separator();
            ui.label(format!("Objects: {}", self.presenter.tiles().len()));
        });
    }

    fn form(&mut self, ui: &mut egui::Ui) {
        let form = &mut self.presenter.form;
        egui::Grid::new("body_form").num_columns(2).show(ui, |ui| {
            ui.label("Name");
            ui.text_edit_singleline(&mut form.name);
            ui.end_row();

            ui.label("Mass");
            ui.text_edit_singleline(&mut form.mass);
            ui.end_row();

            ui.label("Radius");
            ui.text_edit_singleline(&mut form.radius);
            ui.end_row();

            ui.label("Velocity x");
            ui.text_edit_singleline(&mut form.velocity_x);
            ui.end_row();

            ui.label("Velocity y");
            ui.text_edit_singleline(&mut form.velocity_y);
            ui.end_row();

            ui.label("Position x");
            ui.text_edit_singleline(&mut form.position_x);
            ui.end_row();

            ui.label("Position y");
            ui.text_edit_singleline(&mut form.position_y);
            ui.end_row();
        });

        if !self.presenter.engine().is_adding() && ui.button("Apply changes").clicked() {
            let _ = self.presenter.submit_edit();
        }
    }

    fn tiles(&mut self, ui: &mut egui::Ui) {
        let mut action = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            for tile in self.presenter.tiles() {
                if let Some(a) = tile_widget(ui, tile) {
                    action = Some(a);
                }
            }
        });

        let _ = match action {
            Some(TileAction::Select(id)) => self.presenter.select_tile(id),
            Some(TileAction::Remove(id)) => self.presenter.remove_tile(id),
            None => Ok(()),
        };
    }

    fn simulation_area(&mut self, ui: &mut egui::Ui) {
        let area = self.presenter.engine().config().area;
        let size = egui::vec2(area.width as f32, area.height as f32);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, AREA_COLOR);

        let painter = painter.with_clip_rect(response.rect);
        for body in self.presenter.engine().bodies() {
            let center = origin + egui::vec2(body.pos.x as f32, body.pos.y as f32);
            let color = if body.highlighted { HIGHLIGHT_COLOR } else { BODY_COLOR };
            painter.circle_filled(center, body.radius as f32, color);
            painter.text(
                center + egui::vec2(10.0, 10.0),
                egui::Align2::LEFT_TOP,
                &body.name,
                egui::FontId::proportional(13.0),
                egui::Color32::BLACK,
            );
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - origin;
                let _ = self
                    .presenter
                    .click(DVec2::new(local.x as f64, local.y as f64));
            }
        }
    }

    fn confirm_dialog(&mut self, ctx: &egui::Context) {
        if !self.presenter.new_simulation_pending() {
            return;
        }

        let mut answer = None;
        egui::Window::new("New simulation")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label("Are you sure you want to start a new simulation?");
                ui.label("The current simulation state will be discarded.");
                ui.horizontal(|ui| {
                    if ui.button("Start new simulation").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        answer = Some(false);
                    }
                });
            });

        if let Some(accept) = answer {
            self.presenter.confirm_new_simulation(accept);
        }
    }
}

fn tile_widget(ui: &mut egui::Ui, tile: &TileView) -> Option<TileAction> {
    let mut action = None;
    let frame = egui::Frame::group(ui.style()).fill(if tile.highlighted {
        ui.visuals().selection.bg_fill
    } else {
        ui.visuals().faint_bg_color
    });

    frame.show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                if ui.button(tile.name.as_str()).clicked() {
                    action = Some(TileAction::Select(tile.id));
                }
                ui.label(format!("mass: {}", tile.mass));
                ui.label(format!("radius: {}", tile.radius));
                ui.label(format!("position: {}", tile.position_text()));
                ui.label(format!("velocity: {}", tile.velocity_text()));
                ui.label(format!("acceleration: {}", tile.acceleration_text()));
            });
            if ui.button("X").clicked() {
                action = Some(TileAction::Remove(tile.id));
            }
        });
    });

    action
}

impl eframe::App for GravApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Fixed-step physics for however much wall time passed since last frame
        self.presenter.tick();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.controls(ui);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            if let Some(entry) = self.presenter.status().latest() {
                ui.label(entry.formatted());
            }
        });

        egui::SidePanel::right("objects")
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.heading("Object");
                self.form(ui);
                ui.separator();
                ui.heading("Objects");
                self.tiles(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.simulation_area(ui);
        });

        self.confirm_dialog(ctx);

        ctx.request_repaint();
    }
}
