//! In-memory surface backed by a parsed fragment.
//!
//! Mirrors what a browser exposes for a contenteditable element: every span
//! boundary produces a separate text node, `<br>` becomes a line-break node,
//! and native text insertion edits the text node under the caret. Blank
//! lines between two breaks get an empty text node so the caret can sit
//! there. Used by
//! the headless runtime, the command line, and tests.

use crate::syntax::{escape_html, markup_pieces, MarkupPiece, LINE_BREAK};

use super::surface::{Caret, Surface, SurfaceNode};

#[derive(Debug, Clone, Default)]
pub struct FragmentSurface {
    markup: String,
    nodes: Vec<SurfaceNode>,
    caret: Option<Caret>,
    scroll_top: f32,
    /// Contents changed by insertion since the last `set_markup`
    edited: bool,
}

impl FragmentSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current vertical scroll position
    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    /// Put the caret at the end of the content, creating an empty text node
    /// if the content does not end in one
    pub fn focus_end(&mut self) {
        let node = self.trailing_text_node();
        let offset = self.nodes[node].text().map_or(0, |t| t.chars().count());
        self.caret = Some(Caret::new(node, offset));
    }

    fn trailing_text_node(&mut self) -> usize {
        if !matches!(self.nodes.last(), Some(SurfaceNode::Text(_))) {
            self.nodes.push(SurfaceNode::Text(String::new()));
        }
        self.nodes.len() - 1
    }

    fn serialize(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                SurfaceNode::Text(text) => out.push_str(&escape_html(text)),
                SurfaceNode::LineBreak => out.push_str(LINE_BREAK),
            }
        }
        out
    }
}

impl Surface for FragmentSurface {
    fn set_markup(&mut self, markup: &str) {
        self.markup = markup.to_string();
        self.nodes.clear();
        for piece in markup_pieces(markup) {
            match piece {
                MarkupPiece::Text(text) => self.nodes.push(SurfaceNode::Text(text)),
                MarkupPiece::LineBreak => {
                    // A blank line still needs a node to hold the caret
                    if matches!(self.nodes.last(), Some(SurfaceNode::LineBreak)) {
                        self.nodes.push(SurfaceNode::Text(String::new()));
                    }
                    self.nodes.push(SurfaceNode::LineBreak);
                }
            }
        }
        // Replacing the content detaches the old caret node
        self.caret = None;
        self.edited = false;
    }

    fn markup(&self) -> String {
        if self.edited {
            self.serialize()
        } else {
            self.markup.clone()
        }
    }

    fn nodes(&self) -> &[SurfaceNode] {
        &self.nodes
    }

    fn caret(&self) -> Option<Caret> {
        self.caret
    }

    fn set_caret(&mut self, caret: Caret) {
        let valid = self
            .nodes
            .get(caret.node)
            .and_then(SurfaceNode::text)
            .is_some_and(|text| caret.offset <= text.chars().count());
        if valid {
            self.caret = Some(caret);
        } else {
            tracing::trace!(?caret, "Ignoring caret outside content");
        }
    }

    fn insert_text_at_caret(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let caret = match self.caret {
            Some(caret) => caret,
            None => {
                self.focus_end();
                match self.caret {
                    Some(caret) => caret,
                    None => return,
                }
            }
        };

        let existing = match self.nodes.get(caret.node) {
            Some(SurfaceNode::Text(existing)) => existing.clone(),
            _ => return,
        };
        let split = existing
            .char_indices()
            .nth(caret.offset)
            .map(|(i, _)| i)
            .unwrap_or(existing.len());
        let (head, tail) = existing.split_at(split);

        let mut segments = text.split('\n');
        let first = segments.next().unwrap_or_default();
        let mut current = format!("{}{}", head, first);
        let mut replacement = Vec::new();
        for segment in segments {
            replacement.push(SurfaceNode::Text(std::mem::take(&mut current)));
            replacement.push(SurfaceNode::LineBreak);
            current = segment.to_string();
        }
        let caret_offset = current.chars().count();
        current.push_str(tail);
        replacement.push(SurfaceNode::Text(current));

        let caret_node = caret.node + replacement.len() - 1;
        self.nodes.splice(caret.node..=caret.node, replacement);
        self.caret = Some(Caret::new(caret_node, caret_offset));
        self.edited = true;
    }

    fn scroll_to(&mut self, top_px: f32) {
        self.scroll_top = top_px.max(0.0);
    }
}
