//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::Tab;
use crate::project::ProjectSnapshot;
use crate::search::SearchDirection;

/// Events raised by the editable surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceMsg {
    /// The user edited the surface (keystroke-level)
    Input,
    /// Multi-keystroke composition (IME) started
    CompositionStart,
    /// Composition finished; its result commits as one edit
    CompositionEnd,
    /// Paste requested; the clipboard is read by the runtime
    Paste,
    /// Clipboard text arrived for a pending paste
    PasteText(String),
    /// Enter pressed
    Enter,
    /// Forced refresh: re-render the active document
    Refresh,
}

/// History operations on the active document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentMsg {
    Undo,
    Redo,
}

/// Find bar messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMsg {
    /// Search for `term`; a direction steps through existing matches
    Find {
        term: String,
        direction: Option<SearchDirection>,
    },
    Clear,
}

/// Whole-project messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectMsg {
    /// Replace all three texts (saved project load)
    Load(ProjectSnapshot),
    /// Parse an exported document and load it
    Import(String),
}

/// Preview debounce messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewMsg {
    /// The debounce timer for `revision` expired
    Ready { revision: u64 },
}

/// Application-level messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMsg {
    /// Bind the surface to another document
    SwitchTab(Tab),
    /// Teardown: cancel pending timers
    Shutdown,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Surface(SurfaceMsg),
    Document(DocumentMsg),
    Search(SearchMsg),
    Project(ProjectMsg),
    Preview(PreviewMsg),
    App(AppMsg),
}
