// SPDX-License-Identifier: Apache-2.0

use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Insertar,
    Borrar,
    Reemplazar,
    Limpiar,
    Crear,
    Actualizar,
    Adjuntar,
    Generar,
    Firmar,
    Snapshot,
    Deshacer,
    Rehacer,
}

impl OperationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Insertar => "INSERTAR",
            Self::Borrar => "BORRAR",
            Self::Reemplazar => "REEMPLAZAR",
            Self::Limpiar => "LIMPIAR",
            Self::Crear => "CREAR",
            Self::Actualizar => "ACTUALIZAR",
            Self::Adjuntar => "ADJUNTAR",
            Self::Generar => "GENERAR",
            Self::Firmar => "FIRMAR",
            Self::Snapshot => "SNAPSHOT",
            Self::Deshacer => "DESHACER",
            Self::Rehacer => "REHACER",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub operation: OperationKind,
    pub timestamp: OffsetDateTime,
    pub details: String,
}

/// Append-only audit trail. Unlike `History` it is never rewound.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    entries: Vec<LogEntry>,
}

impl CommandLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(
        &mut self,
        operation: OperationKind,
        details: impl Into<String>,
        at: OffsetDateTime,
    ) {
        self.entries.push(LogEntry {
            operation,
            timestamp: at,
            details: details.into(),
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
