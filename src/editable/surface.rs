//! The rendering surface seam.
//!
//! A `Surface` is whatever directly-editable visual area the platform
//! provides (a contenteditable element in a browser, a widget elsewhere).
//! The controller only needs to inject a highlighted fragment, read back
//! plain text, and move the caret between text nodes.

/// A node of rendered content, as the surface exposes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceNode {
    /// A run of text (the contents of one span, or text between spans)
    Text(String),
    /// An explicit line break element
    LineBreak,
}

impl SurfaceNode {
    pub fn text(&self) -> Option<&str> {
        match self {
            SurfaceNode::Text(text) => Some(text),
            SurfaceNode::LineBreak => None,
        }
    }
}

/// Caret location: index of a text node and a character offset inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caret {
    pub node: usize,
    pub offset: usize,
}

impl Caret {
    pub const fn new(node: usize, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// A directly-editable rendering surface.
pub trait Surface {
    /// Replace the surface contents with a rendered fragment
    fn set_markup(&mut self, markup: &str);

    /// The fragment last injected (after any user edits, as the surface
    /// would serialize it)
    fn markup(&self) -> String;

    /// Current content nodes in document order
    fn nodes(&self) -> &[SurfaceNode];

    /// Current caret position, None when the surface has no focus
    fn caret(&self) -> Option<Caret>;

    /// Place the caret. Out-of-range positions are ignored.
    fn set_caret(&mut self, caret: Caret);

    /// Insert plain text at the caret the way the platform's native
    /// "insert text" command would, moving the caret after it
    fn insert_text_at_caret(&mut self, text: &str);

    /// Scroll the visible area so `top_px` is at the top
    fn scroll_to(&mut self, top_px: f32);

    /// Plain text of the surface: characters only, line breaks as `\n`
    fn plain_text(&self) -> String {
        let mut out = String::new();
        for node in self.nodes() {
            match node {
                SurfaceNode::Text(text) => out.push_str(text),
                SurfaceNode::LineBreak => out.push('\n'),
            }
        }
        out
    }

    /// Check if the surface shows no content at all
    fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }
}
