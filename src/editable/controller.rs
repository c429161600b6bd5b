//! SurfaceController - keeps a surface and a plain-text model in step.
//!
//! Two directions:
//! - user edits on the surface are read back as plain text and reported
//!   upward, without re-highlighting (that would reset the caret on every
//!   keystroke)
//! - authoritative text that differs from what the surface last produced
//!   (undo, redo, project load, forced refresh) is re-highlighted into the
//!   surface, carrying the caret across via an [`Anchor`]

use crate::syntax::{highlight, LanguageId};

use super::anchor::{capture_anchor, restore_anchor, RestoreOutcome};
use super::surface::Surface;

/// Result of reconciling authoritative text into the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The surface already shows this text
    Unchanged,
    /// The surface was re-rendered. `restore` is None when there was no
    /// caret to carry over.
    Rendered { restore: Option<RestoreOutcome> },
}

#[derive(Debug, Clone)]
pub struct SurfaceController {
    language: LanguageId,
    /// Plain text last rendered into, or read back from, the surface
    rendered_text: Option<String>,
    /// Multi-keystroke composition (IME) in progress
    composing: bool,
}

impl SurfaceController {
    pub fn new(language: LanguageId) -> Self {
        Self {
            language,
            rendered_text: None,
            composing: false,
        }
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    pub fn rendered_text(&self) -> Option<&str> {
        self.rendered_text.as_deref()
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Highlight `text` into the surface. Empty text clears the surface.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S, text: &str) {
        if text.is_empty() {
            surface.set_markup("");
        } else {
            surface.set_markup(&highlight(text, self.language));
        }
        self.rendered_text = Some(text.to_string());
    }

    /// Read a user edit back from the surface.
    ///
    /// Returns the new plain text to commit, or None while composing or
    /// when the surface text did not actually change.
    pub fn on_user_input<S: Surface + ?Sized>(&mut self, surface: &S) -> Option<String> {
        if self.composing {
            tracing::trace!("Deferring input until composition ends");
            return None;
        }
        let text = surface.plain_text();
        if self.rendered_text.as_deref() == Some(text.as_str()) {
            return None;
        }
        self.rendered_text = Some(text.clone());
        Some(text)
    }

    pub fn composition_start(&mut self) {
        self.composing = true;
    }

    /// Finish a composition and commit everything it produced as one edit
    pub fn composition_end<S: Surface + ?Sized>(&mut self, surface: &S) -> Option<String> {
        self.composing = false;
        self.on_user_input(surface)
    }

    /// Reconcile authoritative text into the surface.
    ///
    /// Text equal to what the surface last produced is left alone, so the
    /// caret stays where the user put it. Anything else re-renders.
    pub fn sync<S: Surface + ?Sized>(&mut self, surface: &mut S, text: &str) -> SyncOutcome {
        if self.rendered_text.as_deref() == Some(text) {
            return SyncOutcome::Unchanged;
        }

        let anchor = capture_anchor(surface);
        self.render(surface, text);

        let restore = anchor.map(|anchor| {
            let outcome = restore_anchor(surface, &anchor);
            if !matches!(outcome, RestoreOutcome::Matched(_)) {
                tracing::debug!(?outcome, "Caret anchor not found after re-render");
            }
            outcome
        });
        SyncOutcome::Rendered { restore }
    }

    /// Forget what the surface shows, so the next `sync` re-renders
    pub fn invalidate(&mut self) {
        self.rendered_text = None;
    }

    /// Insert clipboard text as plain text and read the edit back
    pub fn paste<S: Surface + ?Sized>(&mut self, surface: &mut S, clipboard: &str) -> Option<String> {
        let text = normalize_line_endings(clipboard);
        if text.is_empty() {
            return None;
        }
        surface.insert_text_at_caret(&text);
        self.on_user_input(surface)
    }

    /// Insert a `\n` at the caret instead of the platform's paragraph
    /// behaviour, and read the edit back
    pub fn insert_line_break<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<String> {
        surface.insert_text_at_caret("\n");
        self.on_user_input(surface)
    }

    /// Hand the surface to another document: drop any composition in
    /// flight and fully re-render
    pub fn rebind<S: Surface + ?Sized>(&mut self, surface: &mut S, language: LanguageId, text: &str) {
        if self.composing {
            tracing::debug!("Discarding composition on surface rebind");
        }
        self.composing = false;
        self.language = language;
        self.render(surface, text);
    }
}

/// `\r\n` and lone `\r` become `\n`
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::{Caret, FragmentSurface};

    fn rendered(text: &str, language: LanguageId) -> (SurfaceController, FragmentSurface) {
        let mut controller = SurfaceController::new(language);
        let mut surface = FragmentSurface::new();
        controller.render(&mut surface, text);
        (controller, surface)
    }

    #[test]
    fn test_render_highlights_and_tracks_text() {
        let (controller, surface) = rendered("let x", LanguageId::JavaScript);
        assert_eq!(controller.rendered_text(), Some("let x"));
        assert!(surface.markup().contains("hl-keyword"));
        assert_eq!(surface.plain_text(), "let x");
    }

    #[test]
    fn test_render_empty_clears_surface() {
        let (mut controller, mut surface) = rendered("abc", LanguageId::Html);
        controller.render(&mut surface, "");
        assert!(surface.is_empty());
        assert_eq!(surface.markup(), "");
    }

    #[test]
    fn test_user_input_reports_plain_text_without_rerender() {
        let (mut controller, mut surface) = rendered("let", LanguageId::JavaScript);
        surface.focus_end();
        surface.insert_text_at_caret(" y");
        let caret = surface.caret();

        assert_eq!(controller.on_user_input(&surface), Some("let y".to_string()));
        assert_eq!(controller.rendered_text(), Some("let y"));
        // The model echoing the text back is a no-op for the surface
        assert_eq!(controller.sync(&mut surface, "let y"), SyncOutcome::Unchanged);
        assert_eq!(surface.caret(), caret);
    }

    #[test]
    fn test_unchanged_input_is_not_reported() {
        let (mut controller, surface) = rendered("a", LanguageId::PlainText);
        assert_eq!(controller.on_user_input(&surface), None);
    }

    #[test]
    fn test_composition_is_buffered() {
        let (mut controller, mut surface) = rendered("", LanguageId::PlainText);
        controller.composition_start();
        surface.insert_text_at_caret("n");
        assert_eq!(controller.on_user_input(&surface), None);
        surface.insert_text_at_caret("i");
        assert_eq!(controller.on_user_input(&surface), None);

        assert_eq!(controller.composition_end(&surface), Some("ni".to_string()));
        assert!(!controller.is_composing());
    }

    #[test]
    fn test_external_change_rerenders_and_restores_caret() {
        let (mut controller, mut surface) = rendered("hello\nworld", LanguageId::PlainText);
        surface.set_caret(Caret::new(2, 3));

        let outcome = controller.sync(&mut surface, "hello\nworld!");
        assert_eq!(
            outcome,
            SyncOutcome::Rendered {
                restore: Some(RestoreOutcome::Matched(Caret::new(2, 3)))
            }
        );
        assert_eq!(surface.plain_text(), "hello\nworld!");
    }

    #[test]
    fn test_external_change_without_caret() {
        let (mut controller, mut surface) = rendered("a", LanguageId::PlainText);
        assert_eq!(
            controller.sync(&mut surface, "b"),
            SyncOutcome::Rendered { restore: None }
        );
        assert_eq!(controller.rendered_text(), Some("b"));
    }

    #[test]
    fn test_invalidate_forces_rerender() {
        let (mut controller, mut surface) = rendered("a", LanguageId::PlainText);
        controller.invalidate();
        assert_eq!(
            controller.sync(&mut surface, "a"),
            SyncOutcome::Rendered { restore: None }
        );
    }

    #[test]
    fn test_paste_inserts_normalized_plain_text() {
        let (mut controller, mut surface) = rendered("ab", LanguageId::PlainText);
        surface.set_caret(Caret::new(0, 1));
        let text = controller.paste(&mut surface, "x\r\ny\rz");
        assert_eq!(text, Some("ax\ny\nzb".to_string()));
    }

    #[test]
    fn test_paste_empty_is_dropped() {
        let (mut controller, mut surface) = rendered("ab", LanguageId::PlainText);
        assert_eq!(controller.paste(&mut surface, ""), None);
        assert_eq!(surface.plain_text(), "ab");
    }

    #[test]
    fn test_enter_inserts_line_break() {
        let (mut controller, mut surface) = rendered("ab", LanguageId::PlainText);
        surface.set_caret(Caret::new(0, 2));
        assert_eq!(
            controller.insert_line_break(&mut surface),
            Some("ab\n".to_string())
        );
    }

    #[test]
    fn test_rebind_discards_composition() {
        let (mut controller, mut surface) = rendered("<p>", LanguageId::Html);
        controller.composition_start();
        controller.rebind(&mut surface, LanguageId::Css, "a {}");
        assert!(!controller.is_composing());
        assert_eq!(controller.language(), LanguageId::Css);
        assert!(surface.markup().contains("hl-selector"));
    }
}
