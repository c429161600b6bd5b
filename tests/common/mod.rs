//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::Instant;

use anyhow::{anyhow, Result};
use livepen::config::EditorConfig;
use livepen::editable::{Caret, FragmentSurface, Surface};
use livepen::messages::{AppMsg, Msg, SurfaceMsg};
use livepen::model::{AppModel, Tab};
use livepen::runtime::{ClipboardSource, Runtime};
use livepen::update::update;

/// Create a headless model with the markup tab showing `text`
pub fn test_model(text: &str) -> AppModel {
    test_model_on(Tab::Markup, text)
}

/// Create a headless model with `tab` active and showing `text`
pub fn test_model_on(tab: Tab, text: &str) -> AppModel {
    let mut model = AppModel::headless(EditorConfig::default());
    update(&mut model, Msg::App(AppMsg::SwitchTab(tab)));
    model.documents[tab].reset(text);
    update(&mut model, Msg::Surface(SurfaceMsg::Refresh));
    model
}

/// Simulate typing `text` at the caret (or at the end when unfocused)
pub fn type_text(model: &mut AppModel, text: &str) {
    if model.surface.caret().is_none() {
        model.surface.focus_end();
    }
    model.surface.insert_text_at_caret(text);
    update(model, Msg::Surface(SurfaceMsg::Input));
}

/// Replace the whole surface content as if the user selected all and typed
pub fn replace_all(model: &mut AppModel, text: &str) {
    model.surface.set_markup("");
    model.surface.insert_text_at_caret(text);
    update(model, Msg::Surface(SurfaceMsg::Input));
}

/// Put the caret in text node `node` at `offset`
pub fn place_caret(model: &mut AppModel, node: usize, offset: usize) {
    model.surface.set_caret(Caret::new(node, offset));
}

pub fn active_text(model: &AppModel) -> &str {
    model.active_document().text()
}

/// Clipboard returning fixed text, or failing when empty
#[derive(Debug, Clone, Default)]
pub struct FakeClipboard {
    pub text: Option<String>,
    pub reads: usize,
}

impl FakeClipboard {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            reads: 0,
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }
}

impl ClipboardSource for FakeClipboard {
    fn read_text(&mut self) -> Result<String> {
        self.reads += 1;
        self.text
            .clone()
            .ok_or_else(|| anyhow!("clipboard unavailable"))
    }
}

/// Runtime over a headless model and a fake clipboard
pub fn test_runtime(clipboard: FakeClipboard) -> Runtime<FragmentSurface, FakeClipboard> {
    Runtime::new(AppModel::headless(EditorConfig::default()), clipboard)
}

pub fn start() -> Instant {
    Instant::now()
}
