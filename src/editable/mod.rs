//! Editable surface synchronization and per-document history.
//!
//! This module keeps a plain-text document and a highlighted, directly
//! editable rendering of it consistent in both directions:
//!
//! - [`Surface`]: Trait abstracting the platform's editable rendering area
//! - [`FragmentSurface`]: In-memory surface (headless runtime, CLI, tests)
//! - [`SurfaceController`]: Renders text into a surface, reads user edits
//!   back, buffers composition input, and carries the caret across forced
//!   re-renders
//! - [`Anchor`]: A captured caret location used for best-effort restoration
//! - [`BufferHistory`]: Bounded snapshot undo/redo stacks
//!
//! # Example
//!
//! ```ignore
//! use livepen::editable::{FragmentSurface, Surface, SurfaceController};
//! use livepen::syntax::LanguageId;
//!
//! let mut surface = FragmentSurface::new();
//! let mut controller = SurfaceController::new(LanguageId::JavaScript);
//! controller.render(&mut surface, "let x = 1;");
//!
//! surface.focus_end();
//! surface.insert_text_at_caret("\nx++;");
//! assert_eq!(
//!     controller.on_user_input(&surface).as_deref(),
//!     Some("let x = 1;\nx++;")
//! );
//! ```

mod anchor;
mod controller;
mod fragment;
mod history;
mod surface;

pub use anchor::{capture_anchor, restore_anchor, Anchor, RestoreOutcome};
pub use controller::{normalize_line_endings, SurfaceController, SyncOutcome};
pub use fragment::FragmentSurface;
pub use history::{BufferHistory, DEFAULT_HISTORY_DEPTH};
pub use surface::{Caret, Surface, SurfaceNode};
