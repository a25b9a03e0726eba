// SPDX-License-Identifier: Apache-2.0

use axum::Json;
use bijux_rewind_api::convert::{
    estado_response, historial_response, log_response, snapshot_dto, tipos_response,
};
use bijux_rewind_api::{
    ActualizarSolicitudRequest, AdjuntoRequest, CrearSolicitudRequest,
    EstadoCertificadoResponse, HistorialResponse, LogResponse, MensajeResponse, SnapshotRequest,
    SnapshotResponse, TiposResponse,
};
use tracing::info;

use crate::http::extractors::{ApiJson, CertificateHandle};
use crate::http::response_contract::ApiFailure;

type EstadoResult = Result<Json<EstadoCertificadoResponse>, ApiFailure>;

pub(crate) async fn estado_handler(
    CertificateHandle(certs): CertificateHandle,
) -> Json<EstadoCertificadoResponse> {
    let certs = certs.lock().await;
    Json(estado_response(&certs))
}

pub(crate) async fn crear_solicitud_handler(
    CertificateHandle(certs): CertificateHandle,
    ApiJson(req): ApiJson<CrearSolicitudRequest>,
) -> EstadoResult {
    let mut certs = certs.lock().await;
    let id = certs.crear_solicitud(req.into())?.id.clone();
    info!(solicitud = %id, "certificate request created");
    Ok(Json(estado_response(&certs)))
}

pub(crate) async fn actualizar_solicitud_handler(
    CertificateHandle(certs): CertificateHandle,
    ApiJson(req): ApiJson<ActualizarSolicitudRequest>,
) -> EstadoResult {
    let mut certs = certs.lock().await;
    certs.actualizar_solicitud(req.into())?;
    Ok(Json(estado_response(&certs)))
}

pub(crate) async fn adjunto_handler(
    CertificateHandle(certs): CertificateHandle,
    ApiJson(req): ApiJson<AdjuntoRequest>,
) -> EstadoResult {
    let mut certs = certs.lock().await;
    certs.agregar_adjunto(req.into())?;
    Ok(Json(estado_response(&certs)))
}

pub(crate) async fn generar_handler(CertificateHandle(certs): CertificateHandle) -> EstadoResult {
    let mut certs = certs.lock().await;
    let folio = certs.generar_certificado()?.folio.clone().unwrap_or_default();
    info!(folio = %folio, "certificate generated");
    Ok(Json(estado_response(&certs)))
}

pub(crate) async fn firmar_handler(CertificateHandle(certs): CertificateHandle) -> EstadoResult {
    let mut certs = certs.lock().await;
    let id = certs.firmar_certificado()?.id.clone();
    info!(solicitud = %id, "certificate signed");
    Ok(Json(estado_response(&certs)))
}

pub(crate) async fn undo_handler(CertificateHandle(certs): CertificateHandle) -> EstadoResult {
    let mut certs = certs.lock().await;
    certs.undo()?;
    Ok(Json(estado_response(&certs)))
}

pub(crate) async fn redo_handler(CertificateHandle(certs): CertificateHandle) -> EstadoResult {
    let mut certs = certs.lock().await;
    certs.redo()?;
    Ok(Json(estado_response(&certs)))
}

pub(crate) async fn historial_handler(
    CertificateHandle(certs): CertificateHandle,
) -> Json<HistorialResponse> {
    let certs = certs.lock().await;
    Json(historial_response(&certs))
}

pub(crate) async fn historial_limpiar_handler(
    CertificateHandle(certs): CertificateHandle,
) -> Json<MensajeResponse> {
    certs.lock().await.limpiar_historial();
    Json(MensajeResponse {
        mensaje: "Historial limpiado".to_string(),
    })
}

pub(crate) async fn snapshot_handler(
    CertificateHandle(certs): CertificateHandle,
    ApiJson(req): ApiJson<SnapshotRequest>,
) -> Result<Json<SnapshotResponse>, ApiFailure> {
    let mut certs = certs.lock().await;
    let snapshot = snapshot_dto(certs.crear_snapshot(&req.etiqueta)?);
    Ok(Json(SnapshotResponse {
        mensaje: format!("Snapshot '{}' creado", snapshot.etiqueta),
        snapshot,
    }))
}

pub(crate) async fn log_handler(CertificateHandle(certs): CertificateHandle) -> Json<LogResponse> {
    let certs = certs.lock().await;
    Json(log_response(certs.log()))
}

pub(crate) async fn tipos_handler() -> Json<TiposResponse> {
    Json(tipos_response())
}
