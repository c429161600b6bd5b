//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod document;
mod preview;
mod project;
mod search;
mod surface;

use crate::commands::Cmd;
use crate::editable::{RestoreOutcome, Surface, SyncOutcome};
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::HistorySnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use document::update_document;
pub use preview::{schedule_preview, update_preview};
pub use project::update_project;
pub use search::update_search;
pub use surface::update_surface;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch.
#[inline]
pub fn update<S: Surface>(model: &mut AppModel<S>, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner<S: Surface>(model: &mut AppModel<S>, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Surface(m) => update_surface(model, m),
        Msg::Document(m) => update_document(model, m),
        Msg::Search(m) => update_search(model, m),
        Msg::Project(m) => update_project(model, m),
        Msg::Preview(m) => update_preview(model, m),
        Msg::App(m) => update_app(model, m),
    }
}

#[cfg(debug_assertions)]
fn update_traced<S: Surface>(model: &mut AppModel<S>, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    let before = HistorySnapshot::from_documents(&model.documents);
    let result = update_inner(model, msg);
    let after = HistorySnapshot::from_documents(&model.documents);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "history", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Payload-carrying messages are summarized so pasted or imported text
/// does not end up in the log.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::{ProjectMsg, SurfaceMsg};

    match msg {
        Msg::Surface(SurfaceMsg::PasteText(text)) => {
            format!("Surface::PasteText({} chars)", text.chars().count())
        }
        Msg::Project(ProjectMsg::Import(html)) => {
            format!("Project::Import({} bytes)", html.len())
        }
        Msg::Project(ProjectMsg::Load(_)) => "Project::Load".to_string(),
        Msg::Surface(m) => format!("Surface::{:?}", m),
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Search(m) => format!("Search::{:?}", m),
        Msg::Preview(m) => format!("Preview::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}

/// Push the active document's authoritative text into the surface,
/// re-rendering only if it differs from what the surface last showed
pub(crate) fn sync_active<S: Surface>(model: &mut AppModel<S>) -> SyncOutcome {
    let tab = model.ui.active_tab;
    let outcome = model
        .controller
        .sync(&mut model.surface, model.documents[tab].text());
    if let SyncOutcome::Rendered {
        restore: Some(RestoreOutcome::NoContent),
    } = outcome
    {
        tracing::debug!("Surface for {} has no content to place the caret in", tab.label());
    }
    outcome
}

/// Commit text read back from the surface into the active document.
/// The surface already shows this text, so nothing is re-rendered.
pub(crate) fn commit_edit<S: Surface>(model: &mut AppModel<S>, text: String) -> Option<Cmd> {
    let tab = model.ui.active_tab;
    if !model.documents[tab].commit(&text) {
        return None;
    }
    model.ui.search.clear();
    Some(schedule_preview(model))
}
