// src/gui/components/url_bar.rs

use eframe::egui::{self, widgets::Spinner};
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let busy = app.session.is_extracting();

    ui.horizontal(|ui| {
        ui.label("URL:");
        let resp = ui.add_enabled(
            !busy,
            egui::TextEdit::singleline(&mut app.session.url_input)
                .hint_text("https://example.com")
                .desired_width(480.0),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let label = if busy { "Processing..." } else { "Extract XPaths" };
        let clicked = ui.add_enabled(!busy, egui::Button::new(label)).clicked();

        if busy {
            ui.add(Spinner::new().size(16.0));
        }

        if enter || clicked {
            actions::extract(app, ui.ctx());
        }
    });

    // --- Option toggles ---
    let opts = &mut app.state.options.extract;
    ui.horizontal(|ui| {
        if ui.checkbox(&mut opts.include_non_interactive, "Include non-interactive elements").changed() {
            logf!("UI: include_non_interactive → {}", opts.include_non_interactive);
        }
        if ui.checkbox(&mut opts.include_text, "Include text elements").changed() {
            logf!("UI: include_text → {}", opts.include_text);
        }
    });
}
