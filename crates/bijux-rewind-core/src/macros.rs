// SPDX-License-Identifier: Apache-2.0

//! Named, replayable sequences of editor operations.

use std::collections::BTreeMap;

use time::OffsetDateTime;

use crate::editor::EditOp;
use crate::errors::{Result, RewindError};

pub const MACRO_NAME_MAX_LEN: usize = 64;

/// A sealed recording. Immutable once stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Macro {
    name: String,
    ops: Vec<EditOp>,
    created_at: OffsetDateTime,
}

impl Macro {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    #[must_use]
    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
enum RecorderState {
    #[default]
    Idle,
    Recording {
        name: String,
        buffer: Vec<EditOp>,
    },
}

/// Recorder state machine (`Idle` / `Recording`) plus the saved macros.
#[derive(Debug, Clone, Default)]
pub struct MacroRecorder {
    state: RecorderState,
    saved: BTreeMap<String, Macro>,
}

impl MacroRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, name: &str) -> Result<()> {
        if let RecorderState::Recording { name: current, .. } = &self.state {
            return Err(RewindError::AlreadyRecording(current.clone()));
        }
        let name = validate_name(name)?;
        if self.saved.contains_key(&name) {
            return Err(RewindError::DuplicateMacroName(name));
        }
        self.state = RecorderState::Recording {
            name,
            buffer: Vec::new(),
        };
        Ok(())
    }

    /// Appends `op` to the open buffer; ignored while idle.
    pub fn capture(&mut self, op: &EditOp) {
        if let RecorderState::Recording { buffer, .. } = &mut self.state {
            buffer.push(op.clone());
        }
    }

    pub fn finish(&mut self, at: OffsetDateTime) -> Result<&Macro> {
        match std::mem::take(&mut self.state) {
            RecorderState::Idle => Err(RewindError::NotRecording),
            RecorderState::Recording { name, buffer } => {
                let sealed = Macro {
                    name: name.clone(),
                    ops: buffer,
                    created_at: at,
                };
                Ok(&*self.saved.entry(name).or_insert(sealed))
            }
        }
    }

    /// Drops the open buffer and returns the name it was recorded under.
    pub fn cancel(&mut self) -> Result<String> {
        match std::mem::take(&mut self.state) {
            RecorderState::Idle => Err(RewindError::NotRecording),
            RecorderState::Recording { name, .. } => Ok(name),
        }
    }

    pub fn get(&self, name: &str) -> Result<&Macro> {
        self.saved
            .get(name.trim())
            .ok_or_else(|| RewindError::MacroNotFound(name.trim().to_string()))
    }

    pub fn remove(&mut self, name: &str) -> Result<Macro> {
        self.saved
            .remove(name.trim())
            .ok_or_else(|| RewindError::MacroNotFound(name.trim().to_string()))
    }

    /// Saved macros ordered by name.
    pub fn list(&self) -> impl ExactSizeIterator<Item = &Macro> + '_ {
        self.saved.values()
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        matches!(self.state, RecorderState::Recording { .. })
    }

    #[must_use]
    pub fn recording_name(&self) -> Option<&str> {
        match &self.state {
            RecorderState::Idle => None,
            RecorderState::Recording { name, .. } => Some(name),
        }
    }

    #[must_use]
    pub fn recorded_so_far(&self) -> usize {
        match &self.state {
            RecorderState::Idle => 0,
            RecorderState::Recording { buffer, .. } => buffer.len(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.saved.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}

fn validate_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(RewindError::validation(
            "el nombre del macro no puede estar vacío",
        ));
    }
    if name.chars().count() > MACRO_NAME_MAX_LEN {
        return Err(RewindError::Validation(format!(
            "el nombre del macro excede {MACRO_NAME_MAX_LEN} caracteres"
        )));
    }
    Ok(name.to_string())
}
