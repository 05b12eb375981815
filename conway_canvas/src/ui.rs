// ui.rs - Draws the frames and feeds pointer/viewport events back

use eframe::egui;
use egui::{Align2, Color32, FontId, Rect, Stroke, Vec2};

use crate::{lock, CanvasApp};

const BACKGROUND: Color32 = Color32::from_rgb(249, 249, 249);
const LIVE: (u8, u8, u8) = (0x0a, 0x50, 0xc6);
const BORDER: (u8, u8, u8) = (0x20, 0x2a, 0x44);

/// Each frame lays 20% background over the previous one.
const FADE: f32 = 0.8;

fn faded((r, g, b): (u8, u8, u8), opacity: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, (opacity * 255.0).round() as u8)
}

impl eframe::App for CanvasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.reseed_if_stale();

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                let size = ui.available_size();
                let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
                let canvas = response.rect;

                if !self.launched {
                    self.launch(canvas.size());
                } else if self.viewport != Some(canvas.size()) {
                    self.resize(canvas.size());
                }
                self.viewport = Some(canvas.size());

                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let local = pos - canvas.min;
                        self.click(local.x, local.y);
                    }
                }

                let metrics = self.input.metrics();
                let snapshot = lock(&self.shared);

                // Oldest first so the current generation ends up on top
                for (age, cells) in snapshot.trail.iter().enumerate().rev() {
                    let opacity = FADE.powi(age as i32);
                    let fill = faded(LIVE, opacity);
                    let stroke = Stroke::new(metrics.border_width, faded(BORDER, opacity));

                    for &cell in cells {
                        let (x, y) = metrics.cell_origin(cell);
                        let rect = Rect::from_min_size(
                            canvas.min + Vec2::new(x + 0.5, y + 0.5),
                            Vec2::splat(metrics.cell_size),
                        );
                        painter.rect_filled(rect, 0.0, fill);
                        painter.rect_stroke(rect, 0.0, stroke);
                    }
                }

                painter.text(
                    canvas.right_bottom() - Vec2::new(8.0, 8.0),
                    Align2::RIGHT_BOTTOM,
                    format!("Generation: {}   Live cells: {}", snapshot.generation, snapshot.population),
                    FontId::monospace(12.0),
                    Color32::from_gray(120),
                );
            });
    }
}
