#![forbid(unsafe_code)]

pub mod convert;
pub mod dto;
pub mod endpoints;
pub mod error_mapping;
pub mod errors;

pub use dto::{
    ActualizarSolicitudRequest, AdjuntoDto, AdjuntoRequest, BorrarRequest, CrearSolicitudRequest,
    DatosAlumnoDto, DocumentoDto, EditorInfoDto, EndpointDto, EndpointsResponse,
    EstadoCertificadoResponse, HistorialResponse, HistorialResumenDto, InsertarRequest,
    LogEntryDto, LogResponse, MacroDto, MacroEliminadoResponse, MacroInfoResponse,
    MacroNombreRequest, MacrosResponse, MensajeResponse, MutacionResponse, ReemplazarRequest,
    SnapshotDto, SnapshotRequest, SnapshotResponse, SolicitudDto, TiposResponse,
};
pub use endpoints::{EndpointSpec, ENDPOINTS};
pub use errors::{ApiError, ApiErrorCode};

pub const CRATE_NAME: &str = "bijux-rewind-api";
pub const API_BASE_PATH: &str = "/api";
pub const SESSION_HEADER: &str = "x-session-id";
pub const REQUEST_ID_HEADER: &str = "x-request-id";
