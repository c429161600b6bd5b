//! Synchronous command executor
//!
//! Everything runs on the caller's thread. The only deferred work is the
//! preview debounce, kept as a single deadline that the host checks with
//! [`Runtime::tick`].

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::commands::Cmd;
use crate::editable::{FragmentSurface, Surface};
use crate::messages::{AppMsg, Msg, PreviewMsg, SurfaceMsg};
use crate::model::AppModel;
use crate::update::update;

use super::clipboard::{ClipboardSource, SystemClipboard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingPreview {
    revision: u64,
    deadline: Instant,
}

/// Owns the model and performs the side effects `update` asks for
pub struct Runtime<S: Surface = FragmentSurface, C: ClipboardSource = SystemClipboard> {
    pub model: AppModel<S>,
    clipboard: C,
    pending_preview: Option<PendingPreview>,
    preview: Option<String>,
}

impl<S: Surface, C: ClipboardSource> Runtime<S, C> {
    pub fn new(model: AppModel<S>, clipboard: C) -> Self {
        Self {
            model,
            clipboard,
            pending_preview: None,
            preview: None,
        }
    }

    /// Run `msg` through `update`, then execute the resulting commands and
    /// any messages they produce, until the queue is empty
    pub fn dispatch(&mut self, msg: Msg, now: Instant) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            let Some(cmd) = update(&mut self.model, msg) else {
                continue;
            };
            for cmd in cmd.flatten() {
                if let Some(follow_up) = self.process_cmd(cmd, now) {
                    queue.push_back(follow_up);
                }
            }
        }
    }

    fn process_cmd(&mut self, cmd: Cmd, now: Instant) -> Option<Msg> {
        match cmd {
            Cmd::None | Cmd::Batch(_) => None,
            Cmd::DebouncedPreview { revision, delay_ms } => {
                // Restarts any timer already running
                self.pending_preview = Some(PendingPreview {
                    revision,
                    deadline: now + Duration::from_millis(delay_ms),
                });
                None
            }
            Cmd::CancelPreview => {
                if let Some(pending) = self.pending_preview.take() {
                    tracing::debug!("Cancelled pending preview for revision {}", pending.revision);
                }
                None
            }
            Cmd::ReadClipboard => match self.clipboard.read_text() {
                Ok(text) => Some(Msg::Surface(SurfaceMsg::PasteText(text))),
                Err(e) => {
                    tracing::warn!("Dropping paste: {:#}", e);
                    None
                }
            },
            Cmd::PublishPreview { document } => {
                tracing::debug!("Publishing preview ({} bytes)", document.len());
                self.preview = Some(document);
                None
            }
        }
    }

    /// Fire the preview timer if its deadline has passed
    pub fn tick(&mut self, now: Instant) {
        let Some(pending) = self.pending_preview else {
            return;
        };
        if now < pending.deadline {
            return;
        }
        self.pending_preview = None;
        self.dispatch(
            Msg::Preview(PreviewMsg::Ready {
                revision: pending.revision,
            }),
            now,
        );
    }

    /// When the host should next call [`tick`](Self::tick)
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_preview.map(|pending| pending.deadline)
    }

    pub fn is_preview_pending(&self) -> bool {
        self.pending_preview.is_some()
    }

    /// Most recently published preview document
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Tear down: cancels the pending preview so it never acts on stale state
    pub fn shutdown(&mut self, now: Instant) {
        self.dispatch(Msg::App(AppMsg::Shutdown), now);
    }
}
