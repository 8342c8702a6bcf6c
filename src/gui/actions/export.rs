use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        app.out_path_dirty = false;
    }

    let path = app.state.options.export.out_path();

    let result = {
        let view = app.session.view();
        logf!("Export: Begin rows={} path={}", view.len(), path.display());
        file::write_csv_file(&path, view.iter())
    };

    match result {
        Ok(p) => {
            logf!("Export: OK → {}", p.display());
            app.status(format!("Saved {}", p.display()));
            app.notify(true, "XPaths downloaded as CSV!");
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.notify(false, format!("Export error: {e}"));
        }
    }
}
