//! Application-level handlers: tab switching and teardown

use crate::commands::Cmd;
use crate::editable::Surface;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle application messages
pub fn update_app<S: Surface>(model: &mut AppModel<S>, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::SwitchTab(tab) => {
            if tab == model.ui.active_tab {
                return None;
            }
            tracing::debug!("Switching surface to {}", tab.label());
            model.ui.active_tab = tab;
            model.ui.search.clear();
            model
                .controller
                .rebind(&mut model.surface, tab.language(), model.documents[tab].text());
            None
        }
        AppMsg::Shutdown => {
            tracing::info!("Shutting down");
            Some(Cmd::CancelPreview)
        }
    }
}
