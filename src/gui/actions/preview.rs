use std::time::{Duration, Instant};

use crate::{
    config::consts::PROBE_IO_TIMEOUT_MS,
    gui::app::App,
    preview::{probe::spawn_probe, ProbeTicket},
};

fn start_probe(app: &App, ticket: ProbeTicket) {
    spawn_probe(ticket, Duration::from_millis(PROBE_IO_TIMEOUT_MS), app.probe_tx.clone());
}

pub fn toggle_preview(app: &mut App) {
    let url = app.session.current_url().map(str::to_owned);
    match app.session.preview.toggle(url.as_deref(), Instant::now()) {
        Ok(Some(ticket)) => start_probe(app, ticket),
        Ok(None) => {}
        Err(e) => app.notify(false, e.to_string()),
    }
}

pub fn hide_preview(app: &mut App) {
    app.session.preview.hide();
}

pub fn refresh_preview(app: &mut App) {
    let url = app.session.current_url().map(str::to_owned);
    match app.session.preview.refresh(url.as_deref(), Instant::now()) {
        Ok(ticket) => start_probe(app, ticket),
        Err(e) => app.notify(false, e.to_string()),
    }
}

/// Hand the URL to the system browser.
pub fn open_in_browser(app: &mut App) {
    let Some(url) = app.session.current_url().map(str::to_owned) else {
        app.notify(false, "No URL available");
        return;
    };
    match open::that(&url) {
        Ok(()) => {
            logf!("Preview: opened {} in browser", url);
            app.notify(true, "Opened in new tab");
        }
        Err(e) => {
            loge!("Preview: open failed for {}: {}", url, e);
            app.notify(false, "Failed to open in new tab");
        }
    }
}
