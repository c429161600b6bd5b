//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Side effects requested by `update`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Start (or restart) the preview debounce timer.
    /// After delay_ms, sends Msg::Preview(Ready { revision })
    DebouncedPreview { revision: u64, delay_ms: u64 },
    /// Drop any pending preview timer
    CancelPreview,
    /// Read plain text from the clipboard.
    /// Sends Msg::Surface(PasteText) on success
    ReadClipboard,
    /// Hand a composed preview document to the preview surface
    PublishPreview { document: String },
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            cmd => vec![cmd],
        }
    }
}
