// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use crate::certificate::model::{
    Adjunto, CambiosSolicitud, DatosAlumno, EstadoCertificado, NuevaSolicitud, NuevoAdjunto,
    Solicitud,
};
use crate::clock::ClockPort;
use crate::errors::{Result, RewindError};
use crate::history::{History, HistoryEntry};
use crate::log::{CommandLog, OperationKind};
use crate::sha256_hex;

const BASELINE_LABEL: &str = "Estado inicial";

/// The certificate request being worked on, with its snapshot history.
///
/// Every business transition stores the full resulting request in history,
/// so each one can be undone and redone on its own.
pub struct CertificateSession {
    solicitud: Option<Solicitud>,
    history: History<Option<Solicitud>>,
    log: CommandLog,
    clock: Arc<dyn ClockPort>,
    request_seq: u64,
    folio_seq: u64,
}

impl CertificateSession {
    #[must_use]
    pub fn new(history_capacity: usize, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            solicitud: None,
            history: History::new(history_capacity),
            log: CommandLog::new(),
            clock,
            request_seq: 0,
            folio_seq: 0,
        }
    }

    #[must_use]
    pub fn solicitud(&self) -> Option<&Solicitud> {
        self.solicitud.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &History<Option<Solicitud>> {
        &self.history
    }

    #[must_use]
    pub fn log(&self) -> &CommandLog {
        &self.log
    }

    /// Opens a new request in `borrador`. Refused while an unsigned request
    /// is in progress; a signed one may be replaced.
    pub fn crear_solicitud(&mut self, nueva: NuevaSolicitud) -> Result<&Solicitud> {
        nueva.validate()?;
        if let Some(actual) = &self.solicitud {
            if actual.estado != EstadoCertificado::Firmado {
                return Err(RewindError::Conflict(format!(
                    "ya existe la solicitud {} en estado '{}'",
                    actual.id,
                    actual.estado.as_str()
                )));
            }
        }
        let now = self.clock.now();
        self.request_seq += 1;
        let solicitud = Solicitud {
            id: format!("SOL-{:06}", self.request_seq),
            datos_alumno: trim_alumno(nueva.datos_alumno),
            tipo_certificado: nueva.tipo_certificado.trim().to_string(),
            observaciones: non_blank(nueva.observaciones),
            adjuntos: Vec::new(),
            estado: EstadoCertificado::Borrador,
            folio: None,
            firma: None,
            fecha_creacion: now,
            fecha_modificacion: now,
        };
        let details = format!(
            "{} para {} {}",
            solicitud.tipo_certificado,
            solicitud.datos_alumno.nombre,
            solicitud.datos_alumno.apellido
        );
        Ok(self.commit(solicitud, OperationKind::Crear, "Solicitud creada".to_string(), details))
    }

    pub fn actualizar_solicitud(&mut self, cambios: CambiosSolicitud) -> Result<&Solicitud> {
        cambios.validate()?;
        let mut next = self.editable("actualizar")?.clone();
        let mut changed = Vec::new();
        if let Some(tipo) = cambios.tipo_certificado {
            next.tipo_certificado = tipo.trim().to_string();
            changed.push("tipoCertificado");
        }
        if cambios.observaciones.is_some() {
            next.observaciones = non_blank(cambios.observaciones);
            changed.push("observaciones");
        }
        next.fecha_modificacion = self.clock.now();
        let details = format!("campos: {}", changed.join(", "));
        Ok(self.commit(
            next,
            OperationKind::Actualizar,
            "Solicitud actualizada".to_string(),
            details,
        ))
    }

    pub fn agregar_adjunto(&mut self, nuevo: NuevoAdjunto) -> Result<&Solicitud> {
        nuevo.validate()?;
        let mut next = self.editable("adjuntar archivos a")?.clone();
        let now = self.clock.now();
        let nombre = nuevo.nombre.trim().to_string();
        next.adjuntos.push(Adjunto {
            nombre: nombre.clone(),
            tipo: nuevo.tipo.trim().to_string(),
            url: nuevo.url.trim().to_string(),
            tamanio: nuevo.tamanio,
            fecha_carga: now,
        });
        next.fecha_modificacion = now;
        let details = format!("{nombre} ({} bytes)", nuevo.tamanio);
        Ok(self.commit(
            next,
            OperationKind::Adjuntar,
            format!("Adjunto agregado: {nombre}"),
            details,
        ))
    }

    pub fn generar_certificado(&mut self) -> Result<&Solicitud> {
        let mut next = self.require_state(EstadoCertificado::Borrador, "generar")?.clone();
        let now = self.clock.now();
        self.folio_seq += 1;
        let folio = format!("CERT-{}-{:05}", now.year(), self.folio_seq);
        next.estado = EstadoCertificado::Generado;
        next.folio = Some(folio.clone());
        next.fecha_modificacion = now;
        Ok(self.commit(
            next,
            OperationKind::Generar,
            "Certificado generado".to_string(),
            format!("folio {folio}"),
        ))
    }

    pub fn firmar_certificado(&mut self) -> Result<&Solicitud> {
        let mut next = self.require_state(EstadoCertificado::Generado, "firmar")?.clone();
        let firma = sha256_hex(next.canonical_text().as_bytes());
        next.estado = EstadoCertificado::Firmado;
        next.fecha_modificacion = self.clock.now();
        let details = format!("firma {}", &firma[..16]);
        next.firma = Some(firma);
        Ok(self.commit(
            next,
            OperationKind::Firmar,
            "Certificado firmado".to_string(),
            details,
        ))
    }

    pub fn undo(&mut self) -> Result<Option<&Solicitud>> {
        let restored = self.history.undo()?.clone();
        self.restore(restored, OperationKind::Deshacer);
        Ok(self.solicitud.as_ref())
    }

    pub fn redo(&mut self) -> Result<Option<&Solicitud>> {
        let restored = self.history.redo()?.clone();
        self.restore(restored, OperationKind::Rehacer);
        Ok(self.solicitud.as_ref())
    }

    /// Stores the current request under a user-chosen label.
    pub fn crear_snapshot(&mut self, etiqueta: &str) -> Result<&HistoryEntry<Option<Solicitud>>> {
        let etiqueta = etiqueta.trim();
        if etiqueta.is_empty() {
            return Err(RewindError::validation("la etiqueta no puede estar vacía"));
        }
        if self.solicitud.is_none() {
            return Err(RewindError::validation(
                "no hay una solicitud activa para guardar",
            ));
        }
        let now = self.clock.now();
        self.log
            .append(OperationKind::Snapshot, etiqueta.to_string(), now);
        Ok(self
            .history
            .record(etiqueta.to_string(), self.solicitud.clone(), now))
    }

    /// Drops every snapshot. The current request is kept as is.
    pub fn limpiar_historial(&mut self) {
        self.history.clear();
    }

    fn editable(&self, action: &'static str) -> Result<&Solicitud> {
        self.require_state(EstadoCertificado::Borrador, action)
    }

    fn require_state(&self, expected: EstadoCertificado, action: &'static str) -> Result<&Solicitud> {
        let solicitud = self.solicitud.as_ref().ok_or_else(|| {
            RewindError::validation("no hay una solicitud activa")
        })?;
        if solicitud.estado != expected {
            return Err(RewindError::InvalidTransition {
                from: solicitud.estado.as_str(),
                action,
            });
        }
        Ok(solicitud)
    }

    fn commit(
        &mut self,
        next: Solicitud,
        operation: OperationKind,
        label: String,
        details: String,
    ) -> &Solicitud {
        let now = self.clock.now();
        if self.history.is_empty() {
            self.history
                .record(BASELINE_LABEL, self.solicitud.clone(), now);
        }
        self.history.record(label, Some(next.clone()), now);
        self.log
            .append(operation, format!("{}: {details}", next.id), now);
        self.solicitud.insert(next)
    }

    fn restore(&mut self, restored: Option<Solicitud>, operation: OperationKind) {
        let details = restored.as_ref().map_or_else(
            || "sin solicitud".to_string(),
            |s| format!("{} en estado '{}'", s.id, s.estado.as_str()),
        );
        self.solicitud = restored;
        self.log.append(operation, details, self.clock.now());
    }
}

fn trim_alumno(alumno: DatosAlumno) -> DatosAlumno {
    DatosAlumno {
        nombre: alumno.nombre.trim().to_string(),
        apellido: alumno.apellido.trim().to_string(),
        matricula: alumno.matricula.trim().to_string(),
        carrera: alumno.carrera.trim().to_string(),
        email: alumno.email.trim().to_string(),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
