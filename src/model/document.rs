//! Document model - the three text buffers and their histories

use std::ops::{Index, IndexMut};

use crate::editable::{BufferHistory, DEFAULT_HISTORY_DEPTH};
use crate::project::ProjectSnapshot;
use crate::syntax::LanguageId;

/// Which of the three documents a surface or command refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Markup,
    Style,
    Script,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Markup, Tab::Style, Tab::Script];

    pub fn language(&self) -> LanguageId {
        match self {
            Tab::Markup => LanguageId::Html,
            Tab::Style => LanguageId::Css,
            Tab::Script => LanguageId::JavaScript,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Markup => "HTML",
            Tab::Style => "CSS",
            Tab::Script => "JS",
        }
    }
}

/// One text buffer with its own undo/redo history
#[derive(Debug, Clone, Default)]
pub struct Document {
    text: String,
    history: BufferHistory,
}

impl Document {
    /// Create a new empty document with the given history depth
    pub fn new(history_depth: usize) -> Self {
        Self {
            text: String::new(),
            history: BufferHistory::with_max_depth(history_depth),
        }
    }

    /// Create a document with initial content and no history
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            history: BufferHistory::with_max_depth(DEFAULT_HISTORY_DEPTH),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn history(&self) -> &BufferHistory {
        &self.history
    }

    /// Accept an edit. Returns false (and changes nothing) if the text is
    /// unchanged.
    pub fn commit(&mut self, new_text: &str) -> bool {
        if new_text == self.text {
            return false;
        }
        self.history.record(&self.text);
        self.text = new_text.to_string();
        true
    }

    /// Restore the previous snapshot. Returns false if there is none.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.text) {
            Some(restored) => {
                self.text = restored;
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone snapshot. Returns false if there
    /// is none.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.text) {
            Some(restored) => {
                self.text = restored;
                true
            }
            None => false,
        }
    }

    /// Replace the text wholesale and forget all history (project load)
    pub fn reset(&mut self, text: &str) {
        self.text = text.to_string();
        self.history.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

/// The markup, style and script documents, addressed by [`Tab`]
#[derive(Debug, Clone, Default)]
pub struct DocumentSet {
    markup: Document,
    style: Document,
    script: Document,
}

impl DocumentSet {
    pub fn new(history_depth: usize) -> Self {
        Self {
            markup: Document::new(history_depth),
            style: Document::new(history_depth),
            script: Document::new(history_depth),
        }
    }

    pub fn get(&self, tab: Tab) -> &Document {
        match tab {
            Tab::Markup => &self.markup,
            Tab::Style => &self.style,
            Tab::Script => &self.script,
        }
    }

    pub fn get_mut(&mut self, tab: Tab) -> &mut Document {
        match tab {
            Tab::Markup => &mut self.markup,
            Tab::Style => &mut self.style,
            Tab::Script => &mut self.script,
        }
    }

    /// Replace all three texts and clear every history
    pub fn load(&mut self, snapshot: &ProjectSnapshot) {
        self.markup.reset(&snapshot.markup);
        self.style.reset(&snapshot.style);
        self.script.reset(&snapshot.script);
    }

    /// Current text of all three documents
    pub fn snapshot(&self) -> ProjectSnapshot {
        ProjectSnapshot {
            markup: self.markup.text.clone(),
            style: self.style.text.clone(),
            script: self.script.text.clone(),
        }
    }
}

impl Index<Tab> for DocumentSet {
    type Output = Document;

    fn index(&self, tab: Tab) -> &Document {
        self.get(tab)
    }
}

impl IndexMut<Tab> for DocumentSet {
    fn index_mut(&mut self, tab: Tab) -> &mut Document {
        self.get_mut(tab)
    }
}
