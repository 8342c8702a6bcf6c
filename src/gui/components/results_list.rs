// src/gui/components/results_list.rs
//
// Draws the results table from the current view. Rows are rebuilt every
// frame from the session; nothing is cached between frames.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::gui::{actions, app::App};
use crate::model::Badge;
use crate::render::{render_rows, RowModel};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let rows: Vec<RowModel> = render_rows(&app.session.view());

    if rows.is_empty() {
        ui.weak("No elements match the current filter.");
        return;
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let mut copy_clicked: Option<usize> = None;

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(80.0))
        .column(Column::initial(380.0).resizable(true).clip(true).at_least(120.0))
        .column(Column::remainder().clip(true))
        .column(Column::exact(56.0))
        .header(24.0, |mut header| {
            for title in ["Type", "XPath", "Details", ""] {
                header.col(|ui| {
                    ui.add(egui::Label::new(RichText::new(title).strong()).selectable(false));
                });
            }
        })
        .body(|body| {
            body.rows(24.0, rows.len(), |mut row| {
                let Some(r) = rows.get(row.index()) else { return };

                row.col(|ui| {
                    ui.label(RichText::new(r.kind.as_str()).strong().color(badge_color(r.badge)));
                });
                row.col(|ui| {
                    ui.scope(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        ui.label(RichText::new(&r.xpath).monospace());
                    });
                });
                row.col(|ui| {
                    ui.scope(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        ui.weak(r.info_line());
                    });
                });
                row.col(|ui| {
                    if ui.small_button("Copy").clicked() {
                        copy_clicked = Some(r.index);
                    }
                });
            });
        });

    // Act after the table releases its borrows
    if let Some(r) = copy_clicked.and_then(|i| rows.get(i)) {
        actions::copy_one(app, &r.xpath);
    }
}

fn badge_color(badge: Badge) -> Color32 {
    match badge {
        Badge::Button   => Color32::from_rgb(0x4c, 0xaf, 0x50),
        Badge::Input    => Color32::from_rgb(0x21, 0x96, 0xf3),
        Badge::Select   => Color32::from_rgb(0x9c, 0x27, 0xb0),
        Badge::Textarea => Color32::from_rgb(0x67, 0x3a, 0xb7),
        Badge::Link     => Color32::from_rgb(0x00, 0xbc, 0xd4),
        Badge::Form     => Color32::from_rgb(0xff, 0x98, 0x00),
        Badge::Nav      => Color32::from_rgb(0x79, 0x55, 0x48),
        Badge::Div      => Color32::from_rgb(0x60, 0x7d, 0x8b),
        Badge::Img      => Color32::from_rgb(0xe9, 0x1e, 0x63),
        Badge::Heading  => Color32::from_rgb(0xf4, 0x43, 0x36),
        Badge::Text     => Color32::from_rgb(0x9e, 0x9e, 0x9e),
    }
}
