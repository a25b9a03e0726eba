// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

// Editor requests.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InsertarRequest {
    pub pos: usize,
    pub texto: String,
}

/// Half-open range `[desde, hasta)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BorrarRequest {
    pub desde: usize,
    pub hasta: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReemplazarRequest {
    pub desde: usize,
    pub len: usize,
    pub nuevo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MacroNombreRequest {
    pub nombre: String,
}

// Editor responses.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentoDto {
    pub texto: String,
    pub longitud: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutacionResponse {
    pub mensaje: String,
    pub texto: String,
    pub longitud: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorInfoDto {
    pub total_comandos: usize,
    pub puede_deshacer: bool,
    pub puede_rehacer: bool,
    pub grabando_macro: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_macro_actual: Option<String>,
    pub macros_disponibles: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntryDto {
    pub operacion: String,
    pub timestamp: String,
    pub detalles: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogResponse {
    pub log: Vec<LogEntryDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroDto {
    pub nombre: String,
    pub comandos: usize,
    pub fecha_creacion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacrosResponse {
    pub macros: Vec<MacroDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroInfoResponse {
    pub mensaje: String,
    pub info: EditorInfoDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroEliminadoResponse {
    pub mensaje: String,
    pub macros: Vec<MacroDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MensajeResponse {
    pub mensaje: String,
}

// Certificate requests.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatosAlumnoDto {
    pub nombre: String,
    pub apellido: String,
    pub matricula: String,
    pub carrera: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CrearSolicitudRequest {
    pub datos_alumno: DatosAlumnoDto,
    pub tipo_certificado: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ActualizarSolicitudRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_certificado: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdjuntoRequest {
    pub nombre: String,
    pub tipo: String,
    pub url: String,
    pub tamanio: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotRequest {
    pub etiqueta: String,
}

// Certificate responses.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjuntoDto {
    pub nombre: String,
    pub tipo: String,
    pub url: String,
    pub tamanio: u64,
    pub fecha_carga: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolicitudDto {
    pub id: String,
    pub datos_alumno: DatosAlumnoDto,
    pub tipo_certificado: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    pub adjuntos: Vec<AdjuntoDto>,
    pub estado: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firma: Option<String>,
    pub fecha_creacion: String,
    pub fecha_modificacion: String,
}

/// `actual` is 1-based and 0 when the history is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorialResumenDto {
    pub actual: usize,
    pub total: usize,
    pub capacidad_maxima: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstadoCertificadoResponse {
    pub solicitud: Option<SolicitudDto>,
    pub puede_deshacer: bool,
    pub puede_rehacer: bool,
    pub historial: HistorialResumenDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotDto {
    pub id: u64,
    pub etiqueta: String,
    pub timestamp: String,
    pub estado: Option<String>,
}

/// `posicion_actual` is 0-based and -1 when the history is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorialResponse {
    pub snapshots: Vec<SnapshotDto>,
    pub posicion_actual: i64,
    pub total: usize,
    pub capacidad_maxima: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub mensaje: String,
    pub snapshot: SnapshotDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TiposResponse {
    pub tipos: Vec<String>,
}

// Service index.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDto {
    pub method: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointsResponse {
    pub endpoints: Vec<EndpointDto>,
}
