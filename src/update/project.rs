//! Project load and import handlers

use crate::commands::Cmd;
use crate::editable::Surface;
use crate::messages::ProjectMsg;
use crate::model::AppModel;
use crate::project::{import_document, ProjectSnapshot};

use super::{schedule_preview, sync_active};

/// Handle whole-project messages
pub fn update_project<S: Surface>(model: &mut AppModel<S>, msg: ProjectMsg) -> Option<Cmd> {
    match msg {
        ProjectMsg::Load(snapshot) => {
            load_snapshot(model, &snapshot);
            model.ui.set_status("Project loaded");
            Some(schedule_preview(model))
        }
        ProjectMsg::Import(html) => match import_document(&html) {
            Ok(report) => {
                load_snapshot(model, &report.snapshot);
                if report.missing.is_empty() {
                    model.ui.set_status("Project imported");
                } else {
                    let missing: Vec<&str> = report.missing.iter().map(|tab| tab.label()).collect();
                    model.ui.set_status(format!(
                        "Project imported (no {} section)",
                        missing.join(", ")
                    ));
                }
                Some(schedule_preview(model))
            }
            Err(e) => {
                tracing::warn!("Import failed: {}", e);
                model.ui.set_error(format!("Import failed: {}", e));
                None
            }
        },
    }
}

/// Replace all three texts, drop every history, and re-render the active
/// document
fn load_snapshot<S: Surface>(model: &mut AppModel<S>, snapshot: &ProjectSnapshot) {
    model.documents.load(snapshot);
    model.ui.search.clear();
    model.controller.invalidate();
    sync_active(model);
}
