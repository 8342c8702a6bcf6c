use crate::gui::app::App;

pub fn clear(app: &mut App) {
    app.session.clear();
    app.status("Idle");
}
