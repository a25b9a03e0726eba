// SPDX-License-Identifier: Apache-2.0

use crate::errors::{Result, RewindError};
use crate::log::OperationKind;

/// Text buffer addressed by character position, not byte offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    text: String,
}

impl TextDocument {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Validates `op` against the current length and applies it.
    pub fn apply(&mut self, op: &EditOp) -> Result<()> {
        op.validate(self.len())?;
        match op {
            EditOp::Insert { pos, text } => {
                let at = self.byte_offset(*pos);
                self.text.insert_str(at, text);
            }
            EditOp::Delete { from, to } => {
                let range = self.byte_offset(*from)..self.byte_offset(*to);
                self.text.replace_range(range, "");
            }
            EditOp::Replace { from, len, text } => {
                let range = self.byte_offset(*from)..self.byte_offset(from + len);
                self.text.replace_range(range, text);
            }
        }
        Ok(())
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map_or(self.text.len(), |(offset, _)| offset)
    }
}

/// Primitive editor operation. Only these are captured by macros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Insert { pos: usize, text: String },
    /// Removes the half-open range `[from, to)`.
    Delete { from: usize, to: usize },
    Replace { from: usize, len: usize, text: String },
}

impl EditOp {
    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        match self {
            Self::Insert { .. } => OperationKind::Insertar,
            Self::Delete { .. } => OperationKind::Borrar,
            Self::Replace { .. } => OperationKind::Reemplazar,
        }
    }

    pub fn validate(&self, doc_len: usize) -> Result<()> {
        match self {
            Self::Insert { pos, text } => {
                if text.is_empty() {
                    return Err(RewindError::validation(
                        "el texto a insertar no puede estar vacío",
                    ));
                }
                if *pos > doc_len {
                    return Err(RewindError::Validation(format!(
                        "posición {pos} fuera del documento (longitud {doc_len})"
                    )));
                }
            }
            Self::Delete { from, to } => {
                if from >= to {
                    return Err(RewindError::Validation(format!(
                        "rango inválido: 'desde' ({from}) debe ser menor que 'hasta' ({to})"
                    )));
                }
                if *to > doc_len {
                    return Err(RewindError::Validation(format!(
                        "rango [{from}, {to}) fuera del documento (longitud {doc_len})"
                    )));
                }
            }
            Self::Replace { from, len, text } => {
                if *len == 0 && text.is_empty() {
                    return Err(RewindError::validation(
                        "el reemplazo no modifica el documento",
                    ));
                }
                let end = from.checked_add(*len).unwrap_or(usize::MAX);
                if end > doc_len {
                    return Err(RewindError::Validation(format!(
                        "rango [{from}, {end}) fuera del documento (longitud {doc_len})"
                    )));
                }
            }
        }
        Ok(())
    }

    /// User-facing confirmation message.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Insert { pos, .. } => format!("Texto insertado en la posición {pos}"),
            Self::Delete { from, to } => format!("Texto borrado del rango [{from}, {to})"),
            Self::Replace { from, len, .. } => {
                format!("Texto reemplazado desde la posición {from} ({len} caracteres)")
            }
        }
    }

    /// Detail line for the audit log and the history label.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Insert { pos, text } => format!("insertar {text:?} en {pos}"),
            Self::Delete { from, to } => format!("borrar [{from}, {to})"),
            Self::Replace { from, len, text } => {
                format!("reemplazar {len} caracteres en {from} por {text:?}")
            }
        }
    }
}
