// src/gui/actions/export.rs
use tracing::{error, info};

use crate::{file, gui::app::App};

/// "Download to CSV": write the export file. Empty log → nothing written.
pub fn export(app: &mut App) {
    // normalize out dir first
    if app.out_dir_dirty {
        app.state.options.export.set_dir(&app.out_dir_text);
        info!("Export: Out dir set → {}", app.state.options.export.dir().display());
        app.out_dir_dirty = false;
    }

    let status_msg = match file::write_export(&app.log, &app.state.options.export) {
        Ok(Some(path)) => format!("Exported {} row(s) → {}", app.log.len(), path.display()),
        Ok(None) => s!("Nothing to export"),
        Err(e) => {
            error!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    app.status(status_msg);
}
