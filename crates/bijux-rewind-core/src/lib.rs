// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

//! Session state for the rewind service.
//!
//! Everything here is synchronous and free of I/O: the server crate owns the
//! locking and the wire format, this crate owns the state machines.

use sha2::{Digest, Sha256};

pub mod certificate;
pub mod clock;
pub mod editor;
pub mod errors;
pub mod history;
pub mod log;
pub mod macros;
pub mod session;

pub use certificate::{
    Adjunto, CambiosSolicitud, CertificateSession, DatosAlumno, EstadoCertificado,
    NuevaSolicitud, NuevoAdjunto, Solicitud, TIPOS_CERTIFICADO,
};
pub use clock::{format_rfc3339, ClockPort, FixedClock, SystemClock};
pub use editor::{EditOp, EditorInfo, EditorSession, TextDocument};
pub use errors::{Result, RewindError};
pub use history::{History, HistoryEntry, HistoryInfo, HistoryPosition};
pub use log::{CommandLog, LogEntry, OperationKind};
pub use macros::{Macro, MacroRecorder, MACRO_NAME_MAX_LEN};
pub use session::{SessionId, DEFAULT_SESSION_ID};

pub const CRATE_NAME: &str = "bijux-rewind-core";

pub const DEFAULT_EDITOR_HISTORY_CAPACITY: usize = 100;
pub const DEFAULT_CERTIFICATE_HISTORY_CAPACITY: usize = 50;

#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
