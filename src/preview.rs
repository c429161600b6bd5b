//! Live preview composition
//!
//! The preview is the exported document form of the current texts, so the
//! same page can be opened in a browser or re-imported. Script content is
//! embedded, never executed here.

use crate::project::{export_document, ProjectSnapshot};

const PREVIEW_TITLE: &str = "Preview";

/// Compose the three texts into one document for an isolated preview frame
pub fn compose_preview(snapshot: &ProjectSnapshot) -> String {
    export_document(snapshot, PREVIEW_TITLE)
}
