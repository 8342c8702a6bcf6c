// src/gui/components/preview_panel.rs

use std::time::Instant;

use eframe::egui::{self, RichText, widgets::Spinner};
use crate::core::sanitize::truncate_chars;
use crate::gui::{actions, app::App};
use crate::preview::{PreviewOutcome, PreviewState};

#[derive(Clone, Copy)]
enum Control { Refresh, Open, Hide }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut control = None;

    ui.horizontal(|ui| {
        ui.heading("Preview");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✖").on_hover_text("Hide preview").clicked() {
                control = Some(Control::Hide);
            }
            if ui.button("Open").on_hover_text("Open in browser").clicked() {
                control = Some(Control::Open);
            }
            if ui.button("⟳").on_hover_text("Refresh preview").clicked() {
                control = Some(Control::Refresh);
            }
        });
    });
    ui.separator();

    let now = Instant::now();
    match app.session.preview.state() {
        PreviewState::Hidden => {}
        PreviewState::Loading { url, .. } => {
            ui.horizontal(|ui| {
                ui.add(Spinner::new());
                ui.label("Loading preview...");
            });
            ui.monospace(url);
            if let Some(left) = app.session.preview.remaining(now) {
                ui.weak(format!("times out in {:.1}s", left.as_secs_f32()));
            }
        }
        PreviewState::Shown { url, outcome } => {
            match outcome {
                PreviewOutcome::Loaded { title } => {
                    ui.label(RichText::new("Page loaded").strong());
                    if let Some(t) = title {
                        ui.label(format!("Title: {}", truncate_chars(t, 80)));
                    }
                }
                PreviewOutcome::Unconfirmed => {
                    ui.label(RichText::new("Page reachable").strong());
                    ui.weak("Content could not be inspected from here. Open it in the browser to view it.");
                }
                PreviewOutcome::Failed(reason) => {
                    ui.label(reason);
                }
            }
            ui.monospace(url);
        }
        PreviewState::Error { url, reason } => {
            let red = ui.visuals().error_fg_color;
            ui.label(RichText::new("Preview not available").strong().color(red));
            ui.label(reason);
            ui.weak("This site may block embedding or be unreachable. Try opening it in the browser.");
            ui.monospace(url);
        }
    }

    match control {
        Some(Control::Refresh) => actions::refresh_preview(app),
        Some(Control::Open)    => actions::open_in_browser(app),
        Some(Control::Hide)    => actions::hide_preview(app),
        None => {}
    }
}
