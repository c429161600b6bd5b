//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod ui;

pub use document::{Document, DocumentSet, Tab};
pub use ui::{StatusKind, StatusMessage, UiState};

use crate::config::EditorConfig;
use crate::editable::{FragmentSurface, Surface, SurfaceController};

/// The complete application model
#[derive(Debug)]
pub struct AppModel<S: Surface = FragmentSurface> {
    /// The markup, style and script documents
    pub documents: DocumentSet,
    /// UI state (active tab, search, status)
    pub ui: UiState,
    /// Persisted editor configuration
    pub config: EditorConfig,
    /// Keeps `surface` in step with the active document
    pub controller: SurfaceController,
    /// The single editable surface, owned by the active document
    pub surface: S,
    /// Bumped on every change that affects the preview
    pub preview_revision: u64,
}

impl<S: Surface> AppModel<S> {
    /// Create a model with empty documents, the markup tab active and
    /// rendered into `surface`
    pub fn new(config: EditorConfig, mut surface: S) -> Self {
        let documents = DocumentSet::new(config.history_depth);
        let ui = UiState::new();
        let mut controller = SurfaceController::new(ui.active_tab.language());
        controller.render(&mut surface, documents[ui.active_tab].text());
        Self {
            documents,
            ui,
            config,
            controller,
            surface,
            preview_revision: 0,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.ui.active_tab
    }

    pub fn active_document(&self) -> &Document {
        &self.documents[self.ui.active_tab]
    }
}

impl AppModel<FragmentSurface> {
    /// Headless model backed by an in-memory surface
    pub fn headless(config: EditorConfig) -> Self {
        Self::new(config, FragmentSurface::new())
    }
}
