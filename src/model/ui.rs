//! UI state - active tab, find bar, and status messages

use crate::search::SearchState;

use super::document::Tab;

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// The latest outcome worth telling the user about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

/// UI selection state, separate from the documents themselves
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Document currently bound to the surface
    pub active_tab: Tab,
    /// Find bar state for the active document
    pub search: SearchState,
    pub status: Option<StatusMessage>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an informational status message
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::info(text));
    }

    /// Set an error status message
    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::error(text));
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}
