// src/gui/components/toasts.rs

use eframe::egui;
use crate::gui::app::App;
use crate::toast::ToastLevel;

pub fn draw(ctx: &egui::Context, app: &App) {
    if app.toasts.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-20.0, 20.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            for t in app.toasts.iter() {
                let fill = match t.level {
                    ToastLevel::Info => egui::Color32::from_rgb(0x66, 0x7e, 0xea),
                    ToastLevel::Error => egui::Color32::from_rgb(0xdc, 0x35, 0x45),
                };
                egui::Frame::new()
                    .fill(fill)
                    .inner_margin(10.0)
                    .corner_radius(6.0)
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(&t.message).color(egui::Color32::WHITE));
                    });
                ui.add_space(6.0);
            }
        });
}
