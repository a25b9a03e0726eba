// SPDX-License-Identifier: Apache-2.0

use std::fmt;

pub type Result<T> = std::result::Result<T, RewindError>;

/// Failures raised by the session state machines.
///
/// Every variant leaves the session exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RewindError {
    NoHistory,
    NoFuture,
    DuplicateMacroName(String),
    AlreadyRecording(String),
    NotRecording,
    MacroNotFound(String),
    Validation(String),
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },
    Conflict(String),
}

impl RewindError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Stable machine-readable identifier, independent of the message text.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NoHistory => "no_history",
            Self::NoFuture => "no_future",
            Self::DuplicateMacroName(_) => "duplicate_macro_name",
            Self::AlreadyRecording(_) => "already_recording",
            Self::NotRecording => "not_recording",
            Self::MacroNotFound(_) => "macro_not_found",
            Self::Validation(_) => "validation",
            Self::InvalidTransition { .. } => "invalid_transition",
            Self::Conflict(_) => "conflict",
        }
    }
}

impl fmt::Display for RewindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoHistory => write!(f, "No hay operaciones para deshacer"),
            Self::NoFuture => write!(f, "No hay operaciones para rehacer"),
            Self::DuplicateMacroName(name) => {
                write!(f, "Ya existe un macro con el nombre '{name}'")
            }
            Self::AlreadyRecording(name) => {
                write!(f, "Ya se está grabando el macro '{name}'")
            }
            Self::NotRecording => write!(f, "No hay ningún macro en grabación"),
            Self::MacroNotFound(name) => write!(f, "No existe el macro '{name}'"),
            Self::Validation(message) => write!(f, "{message}"),
            Self::InvalidTransition { from, action } => write!(
                f,
                "No se puede {action} una solicitud en estado '{from}'"
            ),
            Self::Conflict(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for RewindError {}
