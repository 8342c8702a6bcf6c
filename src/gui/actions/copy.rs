use crate::{clipboard, gui::app::App};

pub fn copy_one(app: &mut App, xpath: &str) {
    let outcome = clipboard::copy_one(&mut app.clipboard, xpath);
    app.notify(outcome.is_ok(), outcome.message());
}

pub fn copy_all(app: &mut App) {
    // The view borrows the session; the clipboard is a separate field.
    let outcome = {
        let view = app.session.view();
        logd!("Copy: all filter={} query='{}'", app.session.category(), app.session.query());
        clipboard::copy_all(&mut app.clipboard, &view)
    };
    app.notify(outcome.is_ok(), outcome.message());
}
