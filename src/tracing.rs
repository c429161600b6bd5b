//! Tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=livepen::editable=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/livepen/logs/livepen.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::DocumentSet;
use crate::model::Tab;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/livepen/logs/livepen.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "livepen.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of history depth per document for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySnapshot {
    pub documents: Vec<HistoryInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryInfo {
    pub tab: Tab,
    pub chars: usize,
    pub undo: usize,
    pub redo: usize,
}

impl HistorySnapshot {
    pub fn from_documents(documents: &DocumentSet) -> Self {
        Self {
            documents: Tab::ALL
                .iter()
                .map(|&tab| {
                    let doc = &documents[tab];
                    HistoryInfo {
                        tab,
                        chars: doc.text().chars().count(),
                        undo: doc.history().undo_count(),
                        redo: doc.history().redo_count(),
                    }
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &HistorySnapshot) -> Option<String> {
        let changes: Vec<String> = self
            .documents
            .iter()
            .zip(&other.documents)
            .filter(|(before, after)| before != after)
            .map(|(before, after)| {
                format!(
                    "{}: {} chars, undo {} → {}, redo {} → {}",
                    after.tab.label(),
                    after.chars,
                    before.undo,
                    after.undo,
                    before.redo,
                    after.redo
                )
            })
            .collect();

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_reports_only_changed_documents() {
        let mut documents = DocumentSet::new(50);
        let before = HistorySnapshot::from_documents(&documents);
        assert_eq!(before.diff(&before), None);

        documents[Tab::Style].commit("a{}");
        let after = HistorySnapshot::from_documents(&documents);
        assert_eq!(
            before.diff(&after).as_deref(),
            Some("CSS: 3 chars, undo 0 → 1, redo 0 → 0")
        );
    }
}
