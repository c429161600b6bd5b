//! Undo/redo on the active document

use crate::commands::Cmd;
use crate::editable::Surface;
use crate::messages::DocumentMsg;
use crate::model::AppModel;

use super::{schedule_preview, sync_active};

/// Handle history messages.
///
/// A restored snapshot is an external change for the surface: it is
/// re-rendered and the caret goes through anchor restoration.
pub fn update_document<S: Surface>(model: &mut AppModel<S>, msg: DocumentMsg) -> Option<Cmd> {
    let tab = model.ui.active_tab;
    let document = &mut model.documents[tab];
    let changed = match msg {
        DocumentMsg::Undo => document.undo(),
        DocumentMsg::Redo => document.redo(),
    };

    if !changed {
        tracing::debug!("{:?} on {} with empty stack", msg, tab.label());
        return None;
    }

    model.ui.search.clear();
    sync_active(model);
    Some(schedule_preview(model))
}
