//! livepen - live HTML/CSS/JS playground editor core
//!
//! This crate keeps three plain-text documents (markup, style, script) in
//! step with a highlighted, directly editable surface, with per-document
//! undo/redo, search, project import/export and a debounced live preview,
//! implementing the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod messages;
pub mod model;
pub mod preview;
pub mod project;
pub mod runtime;
pub mod search;
pub mod syntax;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
