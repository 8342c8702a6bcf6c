// src/gui/components/error_banner.rs

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(msg) = app.session.error().map(|e| e.to_string()) else {
        return;
    };

    let red = ui.visuals().error_fg_color;
    let mut dismiss = false;
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, red))
        .inner_margin(8.0)
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(msg).color(red));
                if ui.button("Try Again").clicked() {
                    dismiss = true;
                }
            });
        });

    if dismiss {
        app.session.dismiss_error();
    }
}
