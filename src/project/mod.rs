//! Projects: the markup/style/script triple, and the ways it enters and
//! leaves the editor
//!
//! - [`export_document`] / [`import_document`]: a single self-contained
//!   HTML document with well-known element ids
//! - [`ProjectStore`]: saved projects persisted as JSON in the config dir

mod export;
mod import;
mod store;

use serde::{Deserialize, Serialize};

pub use export::{export_document, MARKUP_ELEMENT_ID, SCRIPT_ELEMENT_ID, STYLE_ELEMENT_ID};
pub use import::{import_document, ImportError, ImportReport};
pub use store::{ProjectStore, SavedProject};

/// Current text of the three documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    #[serde(rename = "markupText", default)]
    pub markup: String,
    #[serde(rename = "styleText", default)]
    pub style: String,
    #[serde(rename = "scriptText", default)]
    pub script: String,
}

impl ProjectSnapshot {
    pub fn new(markup: &str, style: &str, script: &str) -> Self {
        Self {
            markup: markup.to_string(),
            style: style.to_string(),
            script: script.to_string(),
        }
    }
}
