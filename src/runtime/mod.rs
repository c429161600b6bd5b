//! Runtime module - executes commands produced by `update`
//!
//! - `app` - the synchronous executor and preview debounce timer
//! - `clipboard` - clipboard access for paste

pub mod app;
pub mod clipboard;

pub use app::Runtime;
pub use clipboard::{ClipboardSource, SystemClipboard};
