// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use time::OffsetDateTime;

use crate::clock::ClockPort;
use crate::editor::{EditOp, TextDocument};
use crate::errors::{Result, RewindError};
use crate::history::History;
use crate::log::{CommandLog, OperationKind};
use crate::macros::{Macro, MacroRecorder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorInfo {
    pub total_commands: usize,
    pub can_undo: bool,
    pub can_redo: bool,
    pub recording: bool,
    pub recording_name: Option<String>,
    pub macros_available: usize,
}

/// One text document with its history, audit log and macro recorder.
///
/// [`EditorSession::apply`] is the only path that mutates the document through
/// a primitive operation; live calls and macro replays both go through it.
///
/// History entries hold the state after each step. The state before the
/// oldest entry is kept apart in `origin`, so every entry is one command and
/// the oldest one can still be undone.
pub struct EditorSession {
    document: TextDocument,
    history: History<TextDocument>,
    origin: Option<TextDocument>,
    at_origin: bool,
    log: CommandLog,
    recorder: MacroRecorder,
    clock: Arc<dyn ClockPort>,
}

impl EditorSession {
    #[must_use]
    pub fn new(history_capacity: usize, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            document: TextDocument::default(),
            history: History::new(history_capacity),
            origin: None,
            at_origin: false,
            log: CommandLog::new(),
            recorder: MacroRecorder::new(),
            clock,
        }
    }

    #[must_use]
    pub fn document(&self) -> &TextDocument {
        &self.document
    }

    #[must_use]
    pub fn history(&self) -> &History<TextDocument> {
        &self.history
    }

    #[must_use]
    pub fn log(&self) -> &CommandLog {
        &self.log
    }

    #[must_use]
    pub fn recorder(&self) -> &MacroRecorder {
        &self.recorder
    }

    /// Applies `op`, records the result in history and the log, and captures
    /// it into the open macro buffer. Returns the confirmation message.
    ///
    /// Macro replays go through here too, so replaying a macro while another
    /// one is being recorded copies its steps into the open buffer.
    pub fn apply(&mut self, op: EditOp) -> Result<String> {
        let mut next = self.document.clone();
        next.apply(&op)?;
        let now = self.clock.now();
        self.record_step(op.describe(), next, now);
        self.log.append(op.kind(), op.describe(), now);
        self.recorder.capture(&op);
        Ok(op.message())
    }

    pub fn insert(&mut self, pos: usize, text: impl Into<String>) -> Result<String> {
        self.apply(EditOp::Insert {
            pos,
            text: text.into(),
        })
    }

    pub fn delete(&mut self, from: usize, to: usize) -> Result<String> {
        self.apply(EditOp::Delete { from, to })
    }

    pub fn replace(&mut self, from: usize, len: usize, text: impl Into<String>) -> Result<String> {
        self.apply(EditOp::Replace {
            from,
            len,
            text: text.into(),
        })
    }

    pub fn undo(&mut self) -> Result<String> {
        let restored = if self.history.can_undo() {
            self.history.undo()?.clone()
        } else {
            let origin = self
                .origin
                .as_ref()
                .filter(|_| !self.at_origin && !self.history.is_empty())
                .ok_or(RewindError::NoHistory)?
                .clone();
            self.at_origin = true;
            origin
        };
        self.document = restored;
        let message = "Operación deshecha".to_string();
        self.log
            .append(OperationKind::Deshacer, &message, self.clock.now());
        Ok(message)
    }

    pub fn redo(&mut self) -> Result<String> {
        let restored = if self.at_origin {
            let first = self
                .history
                .current()
                .ok_or(RewindError::NoFuture)?
                .state()
                .clone();
            self.at_origin = false;
            first
        } else {
            self.history.redo()?.clone()
        };
        self.document = restored;
        let message = "Operación rehecha".to_string();
        self.log
            .append(OperationKind::Rehacer, &message, self.clock.now());
        Ok(message)
    }

    pub fn start_macro(&mut self, name: &str) -> Result<String> {
        self.recorder.start(name)?;
        Ok(format!(
            "Grabación del macro '{}' iniciada",
            self.recorder.recording_name().unwrap_or(name)
        ))
    }

    pub fn finish_macro(&mut self) -> Result<&Macro> {
        let now = self.clock.now();
        self.recorder.finish(now)
    }

    pub fn cancel_macro(&mut self) -> Result<String> {
        let name = self.recorder.cancel()?;
        Ok(format!("Grabación del macro '{name}' cancelada"))
    }

    /// Replays a saved macro one operation at a time, so a macro of K
    /// operations adds K history entries and K log entries.
    ///
    /// The whole sequence is checked against a scratch copy first; if any step
    /// would be rejected nothing is applied.
    pub fn execute_macro(&mut self, name: &str) -> Result<usize> {
        let ops = self.recorder.get(name)?.ops().to_vec();
        let mut scratch = self.document.clone();
        for (index, op) in ops.iter().enumerate() {
            scratch.apply(op).map_err(|err| {
                RewindError::Validation(format!(
                    "el paso {} del macro '{}' no es aplicable: {err}",
                    index + 1,
                    name.trim()
                ))
            })?;
        }
        let applied = ops.len();
        for op in ops {
            self.apply(op)?;
        }
        Ok(applied)
    }

    pub fn remove_macro(&mut self, name: &str) -> Result<Macro> {
        self.recorder.remove(name)
    }

    pub fn macros(&self) -> impl ExactSizeIterator<Item = &Macro> + '_ {
        self.recorder.list()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.origin = None;
        self.at_origin = false;
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Empties the document as an undoable step. Returns `false` when the
    /// document was already empty and nothing was recorded.
    pub fn clear_document(&mut self) -> bool {
        if self.document.is_empty() {
            return false;
        }
        let now = self.clock.now();
        let removed = self.document.len();
        self.record_step("limpiar documento".to_string(), TextDocument::default(), now);
        self.log.append(
            OperationKind::Limpiar,
            format!("documento limpiado ({removed} caracteres)"),
            now,
        );
        true
    }

    /// Back to a blank document with no history, log, macros or recording.
    pub fn reset(&mut self) {
        self.document = TextDocument::default();
        self.clear_history();
        self.log.clear();
        self.recorder = MacroRecorder::new();
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo() || (!self.at_origin && self.origin.is_some())
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.at_origin || self.history.can_redo()
    }

    #[must_use]
    pub fn info(&self) -> EditorInfo {
        EditorInfo {
            total_commands: self.history.len(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            recording: self.recorder.is_recording(),
            recording_name: self.recorder.recording_name().map(str::to_string),
            macros_available: self.recorder.len(),
        }
    }

    fn record_step(&mut self, label: String, next: TextDocument, now: OffsetDateTime) {
        if self.at_origin {
            self.history.clear();
            self.at_origin = false;
        }
        if self.history.is_empty() {
            self.origin = Some(self.document.clone());
        } else if self.history.len() == self.history.capacity() && !self.history.can_redo() {
            // The oldest entry is about to be evicted and becomes the new origin.
            self.origin = self.history.entries().next().map(|e| e.state().clone());
        }
        self.history.record(label, next.clone(), now);
        self.document = next;
    }
}
