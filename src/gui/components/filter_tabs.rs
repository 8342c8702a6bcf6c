// src/gui/components/filter_tabs.rs
//
// Category tabs plus the search field. Both only write into the session;
// the view is rebuilt from scratch by whoever draws next.

use eframe::egui;
use crate::filter::Category;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.session.category();
        for cat in Category::ALL {
            let selected = cat == cur;
            if ui.selectable_label(selected, cat.title()).clicked() && !selected {
                app.session.set_category(cat);
            }
        }

        ui.separator();

        let mut query = s!(app.session.query());
        let resp = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("Search XPaths...")
                .desired_width(220.0),
        );
        if resp.changed() {
            logd!("UI: Search → '{}'", query);
            app.session.set_query(query);
        }
    });
}
