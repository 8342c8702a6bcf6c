use std::{sync::mpsc, thread};

use eframe::egui;

use crate::{
    extract::run_extraction,
    gui::{app::App, progress::GuiProgress},
};

/// Validate, then run the extraction on a worker. The result comes back
/// through `app.extract_rx`.
pub fn extract(app: &mut App, ctx: &egui::Context) {
    if app.session.is_extracting() {
        logd!("Extract: Clicked while running, ignored");
        return;
    }

    let url = match app.session.begin_extract() {
        Ok(url) => url,
        Err(_) => return, // shown inline
    };

    let opts = app.state.options.extract;
    let mut prog = GuiProgress::new(app.status.clone());
    let (tx, rx) = mpsc::channel();
    let ctx = ctx.clone();

    thread::spawn(move || {
        // → This is where the extraction happens ←
        let res = run_extraction(&url, &opts, Some(&mut prog));
        let _ = tx.send(res);
        ctx.request_repaint();
    });

    app.extract_rx = Some(rx);
    app.status("Analyzing page structure…");
}
