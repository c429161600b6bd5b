//! Surface event handlers: typing, composition, paste, Enter, refresh

use crate::commands::Cmd;
use crate::editable::Surface;
use crate::messages::SurfaceMsg;
use crate::model::AppModel;

use super::{commit_edit, sync_active};

/// Handle events raised by the editable surface
pub fn update_surface<S: Surface>(model: &mut AppModel<S>, msg: SurfaceMsg) -> Option<Cmd> {
    let edited = match msg {
        SurfaceMsg::Input => model.controller.on_user_input(&model.surface),
        SurfaceMsg::CompositionStart => {
            model.controller.composition_start();
            None
        }
        SurfaceMsg::CompositionEnd => model.controller.composition_end(&model.surface),
        SurfaceMsg::Paste => return Some(Cmd::ReadClipboard),
        SurfaceMsg::PasteText(text) => model.controller.paste(&mut model.surface, &text),
        SurfaceMsg::Enter => model.controller.insert_line_break(&mut model.surface),
        SurfaceMsg::Refresh => {
            model.controller.invalidate();
            sync_active(model);
            None
        }
    };

    edited.and_then(|text| commit_edit(model, text))
}
