//! Syntax highlighting module
//!
//! Provides best-effort highlighting for the three playground languages:
//! - Language detection from file extensions
//! - Single-pass, per-line tokenization into non-overlapping tokens
//! - Rendering tokens into an escaped, span-decorated display fragment
//!
//! ## Architecture
//!
//! ```text
//! text → tokenize_line (per line, ScanState carried) → LineHighlights
//!      → render_line (escape + <span class="hl-KIND">) → join with <br>
//! ```

mod highlights;
mod languages;
mod render;
mod tokenizer;

pub use highlights::{HighlightToken, LineHighlights, TokenKind};
pub use languages::LanguageId;
pub use render::{
    escape_html, highlight, markup_pieces, render_line, strip_markup, unescape_html, MarkupPiece,
    CLASS_PREFIX, LINE_BREAK,
};
pub use tokenizer::{tokenize, tokenize_line, ScanMode, ScanState};
