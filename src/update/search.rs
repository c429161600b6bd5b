//! Find bar handlers

use crate::commands::Cmd;
use crate::editable::Surface;
use crate::messages::SearchMsg;
use crate::model::AppModel;
use crate::search::estimate_scroll_top;

/// Handle find bar messages
pub fn update_search<S: Surface>(model: &mut AppModel<S>, msg: SearchMsg) -> Option<Cmd> {
    match msg {
        SearchMsg::Find { term, direction } => {
            let tab = model.ui.active_tab;
            let text = model.documents[tab].text();
            let Some(offset) = model.ui.search.search(text, &term, direction) else {
                model.ui.set_status(format!("No matches for \"{}\"", term));
                return None;
            };

            match estimate_scroll_top(text, offset, model.config.line_height_px) {
                Some(top) => model.surface.scroll_to(top),
                None => tracing::debug!(offset, "Could not estimate scroll position for match"),
            }

            let count = model.ui.search.matches().len();
            let index = model.ui.search.selected_index().unwrap_or(0);
            model
                .ui
                .set_status(format!("Match {} of {}", index + 1, count));
            None
        }
        SearchMsg::Clear => {
            model.ui.search.clear();
            model.ui.clear_status();
            None
        }
    }
}
