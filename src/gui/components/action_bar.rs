// src/gui/components/action_bar.rs
//
// Summary counts, output path and the list-level actions.

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Summary ---
    let summary = app.session.summary();
    let showing = app.session.view().len();
    ui.horizontal(|ui| {
        stat(ui, summary.total, "Total Elements");
        ui.separator();
        stat(ui, summary.interactive, "Interactive");
        ui.separator();
        stat(ui, summary.forms, "Form Elements");
        ui.separator();
        ui.weak(format!("showing {} of {}", showing, summary.total));
    });

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions ---
    ui.horizontal(|ui| {
        if ui.button("Copy All").clicked() {
            actions::copy_all(app);
        }

        if ui.button("Download CSV").clicked() {
            actions::export(app);
        }

        let preview_label = if app.session.preview.is_visible() { "Hide Preview" } else { "Show Preview" };
        if ui.button(preview_label).clicked() {
            actions::toggle_preview(app);
        }

        if ui.button("Clear").clicked() {
            actions::clear(app);
        }

        ui.label(app.status_text());
    });
}

fn stat(ui: &mut egui::Ui, n: usize, label: &str) {
    ui.label(egui::RichText::new(n.to_string()).strong().size(18.0));
    ui.label(label);
}
