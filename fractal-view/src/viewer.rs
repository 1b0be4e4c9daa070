//! Interactive fractal tree viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the tree [`Session`] and the
//! recorded drawing surface, and implements [`eframe::App`] to edit the
//! parameters and paint the tree.

use std::{ops::RangeInclusive, time::Duration};

use eframe::App;
use fractal_core::{
    canvas::{DrawCommand, Recorder},
    color::{self, Hsl},
    params::{ANGLE_RANGE, DEPTH_RANGE, ROOT_LENGTH_RANGE, ROOT_WEIGHT_RANGE, SCALE_RANGE},
    render,
    session::{ParamEdit, Session},
};
use glam::Vec2;
use tracing::{debug, info};

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The tree core: a [`Session`] holding the parameters and the debounced
///   redraw schedule.
/// - A [`Recorder`] acting as the canvas. It keeps the last rendered frame
///   until the next redraw clears it, and is replayed onto the egui painter
///   every frame.
/// - eframe/egui callbacks for the controls panel and the drawing area.
///
/// ### Fields
/// - `session` - Parameters and redraw scheduling.
/// - `surface` - Display list of the last rendered tree, in surface pixels.
/// - `surface_size` - Size the surface was last rendered at.
/// - `controls_open` - Whether the controls panel is shown.
/// - `color_input` - Text buffer for the hex color field.
/// - `last_drawn` - Segment count of the last render (status bar).
/// - `last_generation` - Redraw generation of the last render (status bar).
pub struct Viewer {
    session: Session,
    surface: Recorder,
    surface_size: Vec2,

    controls_open: bool,
    color_input: String,

    last_drawn: usize,
    last_generation: u64,
}

impl Viewer {
    /// Creates a viewer with default parameters and the first redraw pending.
    ///
    /// `now` is the host clock reading at startup.
    pub fn new(now: Duration) -> Self {
        let session = Session::new(now);
        let color_input = session.params().root_color();

        Self {
            session,
            surface: Recorder::new(),
            surface_size: Vec2::ZERO,
            controls_open: true,
            color_input,
            last_drawn: 0,
            last_generation: 0,
        }
    }

    /// Applies one control edit; the session schedules the redraw.
    fn apply(&mut self, edit: ParamEdit, now: Duration) {
        debug!(?edit, "control changed");
        self.session.apply(edit, now);
        self.sync_color_input();
    }

    /// Restores the default parameters.
    fn reset(&mut self, now: Duration) {
        info!("resetting parameters to defaults");
        self.session.reset(now);
        self.sync_color_input();
    }

    fn sync_color_input(&mut self) {
        self.color_input = self.session.params().root_color();
    }

    fn toggle_controls(&mut self) {
        self.controls_open = !self.controls_open;
    }

    fn controls_label(&self) -> &'static str {
        if self.controls_open {
            "Close Controls"
        } else {
            "Open Controls"
        }
    }

    /// Renders into the surface if a redraw is due.
    ///
    /// A change of `size` counts as a resize and schedules a redraw first.
    ///
    /// ### Returns
    /// `true` if the surface was re-rendered.
    fn redraw_if_due(&mut self, now: Duration, size: Vec2) -> bool {
        if size != self.surface_size {
            debug!(?size, "viewport resized");
            self.surface_size = size;
            self.session.request_redraw(now);
        }

        let Some(generation) = self.session.poll_redraw(now) else {
            return false;
        };

        self.last_drawn = render::render(self.session.params(), &mut self.surface, size);
        self.last_generation = generation;
        true
    }

    /// Converts a surface position to screen-space.
    ///
    /// The surface is laid out with its origin at the top-left of `rect`.
    fn surface_to_screen(p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        egui::pos2(rect.min.x + p.x, rect.min.y + p.y)
    }

    fn to_color32(color: Hsl) -> egui::Color32 {
        let [r, g, b] = color.to_rgb();
        egui::Color32::from_rgb(r, g, b)
    }

    fn now(ctx: &egui::Context) -> Duration {
        Duration::from_secs_f64(ctx.input(|i| i.time).max(0.0))
    }

    /// Helper to draw a labeled [`egui::DragValue`].
    ///
    /// ### Returns
    /// `true` if the user changed the value this frame.
    fn labeled_drag<N: egui::emath::Numeric>(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut N,
        range: RangeInclusive<N>,
        speed: f64,
    ) -> bool {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed))
                .changed()
        })
        .inner
    }

    /// Builds the top panel (reset, controls toggle).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(self.controls_label()).clicked() {
                    self.toggle_controls();
                }

                if ui.button("Reset").clicked() {
                    self.reset(Self::now(ctx));
                }
            });
        });
    }

    /// Builds the bottom status bar (segment count, depth, redraw generation).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("redraw #{}", self.last_generation));
                ui.separator();
                ui.label(format!("segments = {}", self.last_drawn));
                ui.label(format!("depth = {}", self.session.params().depth()));
            });
        });
    }

    /// Builds the right-hand controls panel.
    ///
    /// Each widget edits a copy of the current value; only a change is
    /// turned into a [`ParamEdit`].
    fn ui_controls_panel(&mut self, ctx: &egui::Context) {
        if !self.controls_open {
            return;
        }

        let now = Self::now(ctx);
        let p = *self.session.params();
        let mut edits = Vec::new();
        let mut reset_clicked = false;

        egui::SidePanel::right("controls_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Tree");

                ui.separator();
                let mut depth = p.depth();
                if Self::labeled_drag(ui, "Depth:", &mut depth, DEPTH_RANGE, 0.1) {
                    edits.push(ParamEdit::Depth(f64::from(depth)));
                }

                let mut angle = p.angle();
                if Self::labeled_drag(ui, "Angle:", &mut angle, ANGLE_RANGE, 1.0) {
                    edits.push(ParamEdit::Angle(f64::from(angle)));
                }

                ui.separator();
                ui.label("Length");
                let mut length = p.root_length();
                if Self::labeled_drag(ui, "Root length:", &mut length, ROOT_LENGTH_RANGE, 1.0) {
                    edits.push(ParamEdit::RootLength(f64::from(length)));
                }
                let mut shorter = p.shorter_child();
                if ui.checkbox(&mut shorter, "Shorter child").changed() {
                    edits.push(ParamEdit::ShorterChild(shorter));
                }

                ui.separator();
                ui.label("Weight");
                let mut weight = p.root_weight();
                if Self::labeled_drag(ui, "Root weight:", &mut weight, ROOT_WEIGHT_RANGE, 0.2) {
                    edits.push(ParamEdit::RootWeight(f64::from(weight)));
                }
                let mut thinner = p.thinner_child();
                if ui.checkbox(&mut thinner, "Thinner child").changed() {
                    edits.push(ParamEdit::ThinnerChild(thinner));
                }

                ui.separator();
                ui.label("Color");
                ui.horizontal(|ui| {
                    let mut rgb = p.root_rgb();
                    if ui.color_edit_button_srgb(&mut rgb).changed() {
                        edits.push(ParamEdit::RootColor(color::to_hex(rgb)));
                    }
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.color_input).desired_width(80.0),
                    );
                    if response.lost_focus() && self.color_input != p.root_color() {
                        edits.push(ParamEdit::RootColor(self.color_input.clone()));
                    }
                });
                let mut multi = p.multi_colored();
                if ui.checkbox(&mut multi, "Multi-colored").changed() {
                    edits.push(ParamEdit::MultiColored(multi));
                }

                ui.separator();
                let mut scale = p.scale();
                if Self::labeled_drag(ui, "Scale:", &mut scale, SCALE_RANGE, 0.01) {
                    edits.push(ParamEdit::Scale(f64::from(scale)));
                }

                ui.separator();
                reset_clicked = ui.button("Reset to defaults").clicked();
            });

        for edit in edits {
            self.apply(edit, now);
        }
        if reset_clicked {
            self.reset(now);
        }
    }

    /// Builds the central panel, rendering on demand and replaying the surface.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
                let painter = ui.painter_at(rect);
                let now = Self::now(ctx);

                self.redraw_if_due(now, Vec2::new(rect.width(), rect.height()));

                for command in self.surface.commands() {
                    match command {
                        DrawCommand::Clear(color) => {
                            painter.rect_filled(rect, 0.0, Self::to_color32(*color));
                        }
                        DrawCommand::Line(seg) => {
                            painter.line_segment(
                                [
                                    Self::surface_to_screen(seg.from, rect),
                                    Self::surface_to_screen(seg.to, rect),
                                ],
                                egui::Stroke::new(seg.width, Self::to_color32(seg.color)),
                            );
                        }
                    }
                }

                // Wake up for a redraw that is still waiting out its window.
                if let Some(wait) = self.session.time_until_redraw(now) {
                    ctx.request_repaint_after(wait);
                }
            });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    ///
    /// Side panels are laid out before the central panel so that the
    /// drawing area gets the remaining space.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_controls_panel(ctx);
        self.ui_central_panel(ctx);
    }
}
