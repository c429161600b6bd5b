//! Caret anchors: carrying the caret across a full re-render.
//!
//! Re-rendering replaces every node on the surface, so the caret cannot be
//! kept by reference. Instead the text of the node the caret was in is
//! remembered, and after rendering the first text node containing that text
//! receives the caret again. This is a best-effort heuristic: repeated text
//! can match the wrong node, and edited text usually matches nothing, in
//! which case the caret falls back to the first content node.

use super::surface::{Caret, Surface, SurfaceNode};

/// A captured caret location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Contents of the text node the caret was in
    pub node_text: String,
    /// Character offset of the caret inside that node
    pub offset: usize,
}

/// How a restore attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// A node containing the anchor text was found
    Matched(Caret),
    /// No match; caret placed at the start or end of the first content node
    Fallback(Caret),
    /// The surface has no text node to hold a caret
    NoContent,
}

/// Capture the caret as an anchor. None if the surface has no caret or the
/// caret is not inside a text node.
pub fn capture_anchor<S: Surface + ?Sized>(surface: &S) -> Option<Anchor> {
    let caret = surface.caret()?;
    let text = surface.nodes().get(caret.node)?.text()?;
    Some(Anchor {
        node_text: text.to_string(),
        offset: caret.offset,
    })
}

/// Place the caret back after a re-render. Never fails: when nothing
/// matches, the caret degrades to a fallback position.
pub fn restore_anchor<S: Surface + ?Sized>(surface: &mut S, anchor: &Anchor) -> RestoreOutcome {
    let matched = if anchor.node_text.is_empty() {
        None
    } else {
        surface.nodes().iter().enumerate().find_map(|(i, node)| match node {
            SurfaceNode::Text(text) if text.contains(anchor.node_text.as_str()) => {
                Some(Caret::new(i, anchor.offset.min(text.chars().count())))
            }
            _ => None,
        })
    };

    if let Some(caret) = matched {
        surface.set_caret(caret);
        return RestoreOutcome::Matched(caret);
    }

    let first = surface
        .nodes()
        .iter()
        .enumerate()
        .find_map(|(i, node)| node.text().map(|text| (i, text.chars().count())));

    match first {
        Some((node, len)) => {
            let offset = if anchor.offset > 0 { len } else { 0 };
            let caret = Caret::new(node, offset);
            surface.set_caret(caret);
            RestoreOutcome::Fallback(caret)
        }
        None => RestoreOutcome::NoContent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::FragmentSurface;

    fn surface_with(markup: &str) -> FragmentSurface {
        let mut surface = FragmentSurface::new();
        surface.set_markup(markup);
        surface
    }

    #[test]
    fn test_capture_reads_caret_node() {
        let mut surface = surface_with("<span>let</span> value");
        surface.set_caret(Caret::new(1, 3));
        assert_eq!(
            capture_anchor(&surface),
            Some(Anchor {
                node_text: " value".to_string(),
                offset: 3
            })
        );
    }

    #[test]
    fn test_capture_without_caret() {
        let surface = surface_with("abc");
        assert_eq!(capture_anchor(&surface), None);
    }

    #[test]
    fn test_restore_finds_containing_node() {
        let mut surface = surface_with("a<br><span>hello world</span>");
        let anchor = Anchor {
            node_text: "world".to_string(),
            offset: 4,
        };
        let outcome = restore_anchor(&mut surface, &anchor);
        assert_eq!(outcome, RestoreOutcome::Matched(Caret::new(2, 4)));
        assert_eq!(surface.caret(), Some(Caret::new(2, 4)));
    }

    #[test]
    fn test_restore_clamps_offset_to_node_length() {
        let mut surface = surface_with("<span>abc</span>");
        let anchor = Anchor {
            node_text: "ab".to_string(),
            offset: 10,
        };
        assert_eq!(
            restore_anchor(&mut surface, &anchor),
            RestoreOutcome::Matched(Caret::new(0, 3))
        );
    }

    #[test]
    fn test_restore_falls_back_to_end_of_first_node() {
        let mut surface = surface_with("first<br>second");
        let anchor = Anchor {
            node_text: "missing".to_string(),
            offset: 2,
        };
        assert_eq!(
            restore_anchor(&mut surface, &anchor),
            RestoreOutcome::Fallback(Caret::new(0, 5))
        );
    }

    #[test]
    fn test_restore_falls_back_to_start_for_zero_offset() {
        let mut surface = surface_with("<br>second");
        let anchor = Anchor {
            node_text: "missing".to_string(),
            offset: 0,
        };
        assert_eq!(
            restore_anchor(&mut surface, &anchor),
            RestoreOutcome::Fallback(Caret::new(1, 0))
        );
    }

    #[test]
    fn test_restore_on_empty_surface() {
        let mut surface = surface_with("");
        let anchor = Anchor {
            node_text: "x".to_string(),
            offset: 1,
        };
        assert_eq!(restore_anchor(&mut surface, &anchor), RestoreOutcome::NoContent);
        assert_eq!(surface.caret(), None);
    }
}
