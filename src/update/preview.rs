//! Preview debounce handlers
//!
//! Every change bumps `preview_revision` and restarts the debounce timer.
//! When the timer fires, only the latest revision is composed.

use crate::commands::Cmd;
use crate::editable::Surface;
use crate::messages::PreviewMsg;
use crate::model::AppModel;
use crate::preview::compose_preview;

/// Mark the preview stale and request a debounced recomposition
pub fn schedule_preview<S: Surface>(model: &mut AppModel<S>) -> Cmd {
    model.preview_revision += 1;
    Cmd::DebouncedPreview {
        revision: model.preview_revision,
        delay_ms: model.config.preview_debounce_ms,
    }
}

/// Handle preview messages
pub fn update_preview<S: Surface>(model: &mut AppModel<S>, msg: PreviewMsg) -> Option<Cmd> {
    match msg {
        PreviewMsg::Ready { revision } => {
            if revision != model.preview_revision {
                tracing::debug!(
                    "Skipping stale preview: revision {} != current {}",
                    revision,
                    model.preview_revision
                );
                return None;
            }
            let document = compose_preview(&model.documents.snapshot());
            Some(Cmd::PublishPreview { document })
        }
    }
}
