// SPDX-License-Identifier: Apache-2.0

//! Core state to wire types, and request bodies to core inputs.

use bijux_rewind_core::{
    format_rfc3339, Adjunto, CambiosSolicitud, CertificateSession, CommandLog, DatosAlumno,
    EditorInfo, HistoryEntry, Macro, NuevaSolicitud, NuevoAdjunto, Solicitud, TextDocument,
    TIPOS_CERTIFICADO,
};

use crate::dto::{
    ActualizarSolicitudRequest, AdjuntoDto, AdjuntoRequest, CrearSolicitudRequest,
    DatosAlumnoDto, DocumentoDto, EditorInfoDto, EndpointDto, EndpointsResponse,
    EstadoCertificadoResponse, HistorialResponse, HistorialResumenDto, LogEntryDto, LogResponse,
    MacroDto, MutacionResponse, SnapshotDto, SolicitudDto, TiposResponse,
};
use crate::endpoints::ENDPOINTS;

#[must_use]
pub fn documento_dto(document: &TextDocument) -> DocumentoDto {
    DocumentoDto {
        texto: document.as_str().to_string(),
        longitud: document.len(),
    }
}

#[must_use]
pub fn mutacion_response(mensaje: String, document: &TextDocument) -> MutacionResponse {
    MutacionResponse {
        mensaje,
        texto: document.as_str().to_string(),
        longitud: document.len(),
    }
}

#[must_use]
pub fn editor_info_dto(info: &EditorInfo) -> EditorInfoDto {
    EditorInfoDto {
        total_comandos: info.total_commands,
        puede_deshacer: info.can_undo,
        puede_rehacer: info.can_redo,
        grabando_macro: info.recording,
        nombre_macro_actual: info.recording_name.clone(),
        macros_disponibles: info.macros_available,
    }
}

#[must_use]
pub fn log_response(log: &CommandLog) -> LogResponse {
    LogResponse {
        log: log
            .entries()
            .iter()
            .map(|entry| LogEntryDto {
                operacion: entry.operation.as_str().to_string(),
                timestamp: format_rfc3339(entry.timestamp),
                detalles: entry.details.clone(),
            })
            .collect(),
    }
}

#[must_use]
pub fn macro_dto(sealed: &Macro) -> MacroDto {
    MacroDto {
        nombre: sealed.name().to_string(),
        comandos: sealed.len(),
        fecha_creacion: format_rfc3339(sealed.created_at()),
    }
}

pub fn macro_dtos<'a>(macros: impl Iterator<Item = &'a Macro>) -> Vec<MacroDto> {
    macros.map(macro_dto).collect()
}

#[must_use]
pub fn solicitud_dto(solicitud: &Solicitud) -> SolicitudDto {
    SolicitudDto {
        id: solicitud.id.clone(),
        datos_alumno: alumno_dto(&solicitud.datos_alumno),
        tipo_certificado: solicitud.tipo_certificado.clone(),
        observaciones: solicitud.observaciones.clone(),
        adjuntos: solicitud.adjuntos.iter().map(adjunto_dto).collect(),
        estado: solicitud.estado.as_str().to_string(),
        folio: solicitud.folio.clone(),
        firma: solicitud.firma.clone(),
        fecha_creacion: format_rfc3339(solicitud.fecha_creacion),
        fecha_modificacion: format_rfc3339(solicitud.fecha_modificacion),
    }
}

fn alumno_dto(alumno: &DatosAlumno) -> DatosAlumnoDto {
    DatosAlumnoDto {
        nombre: alumno.nombre.clone(),
        apellido: alumno.apellido.clone(),
        matricula: alumno.matricula.clone(),
        carrera: alumno.carrera.clone(),
        email: alumno.email.clone(),
    }
}

fn adjunto_dto(adjunto: &Adjunto) -> AdjuntoDto {
    AdjuntoDto {
        nombre: adjunto.nombre.clone(),
        tipo: adjunto.tipo.clone(),
        url: adjunto.url.clone(),
        tamanio: adjunto.tamanio,
        fecha_carga: format_rfc3339(adjunto.fecha_carga),
    }
}

#[must_use]
pub fn estado_response(session: &CertificateSession) -> EstadoCertificadoResponse {
    let history = session.history();
    EstadoCertificadoResponse {
        solicitud: session.solicitud().map(solicitud_dto),
        puede_deshacer: history.can_undo(),
        puede_rehacer: history.can_redo(),
        historial: HistorialResumenDto {
            actual: history.cursor().map_or(0, |cursor| cursor + 1),
            total: history.len(),
            capacidad_maxima: history.capacity(),
        },
    }
}

#[must_use]
pub fn snapshot_dto(entry: &HistoryEntry<Option<Solicitud>>) -> SnapshotDto {
    SnapshotDto {
        id: entry.id(),
        etiqueta: entry.label().to_string(),
        timestamp: format_rfc3339(entry.created_at()),
        estado: entry
            .state()
            .as_ref()
            .map(|solicitud| solicitud.estado.as_str().to_string()),
    }
}

#[must_use]
pub fn historial_response(session: &CertificateSession) -> HistorialResponse {
    let history = session.history();
    HistorialResponse {
        snapshots: history.entries().map(snapshot_dto).collect(),
        posicion_actual: history
            .cursor()
            .and_then(|cursor| i64::try_from(cursor).ok())
            .unwrap_or(-1),
        total: history.len(),
        capacidad_maxima: history.capacity(),
    }
}

#[must_use]
pub fn tipos_response() -> TiposResponse {
    TiposResponse {
        tipos: TIPOS_CERTIFICADO.iter().map(|t| (*t).to_string()).collect(),
    }
}

#[must_use]
pub fn endpoints_response() -> EndpointsResponse {
    EndpointsResponse {
        endpoints: ENDPOINTS
            .iter()
            .map(|spec| EndpointDto {
                method: spec.method.to_string(),
                path: spec.path.to_string(),
            })
            .collect(),
    }
}

impl From<DatosAlumnoDto> for DatosAlumno {
    fn from(dto: DatosAlumnoDto) -> Self {
        Self {
            nombre: dto.nombre,
            apellido: dto.apellido,
            matricula: dto.matricula,
            carrera: dto.carrera,
            email: dto.email,
        }
    }
}

impl From<CrearSolicitudRequest> for NuevaSolicitud {
    fn from(req: CrearSolicitudRequest) -> Self {
        Self {
            datos_alumno: req.datos_alumno.into(),
            tipo_certificado: req.tipo_certificado,
            observaciones: req.observaciones,
        }
    }
}

impl From<ActualizarSolicitudRequest> for CambiosSolicitud {
    fn from(req: ActualizarSolicitudRequest) -> Self {
        Self {
            tipo_certificado: req.tipo_certificado,
            observaciones: req.observaciones,
        }
    }
}

impl From<AdjuntoRequest> for NuevoAdjunto {
    fn from(req: AdjuntoRequest) -> Self {
        Self {
            nombre: req.nombre,
            tipo: req.tipo,
            url: req.url,
            tamanio: req.tamanio,
        }
    }
}
