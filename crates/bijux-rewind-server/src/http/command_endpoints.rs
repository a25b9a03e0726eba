// SPDX-License-Identifier: Apache-2.0

use axum::extract::Path;
use axum::Json;
use bijux_rewind_api::convert::{
    documento_dto, editor_info_dto, log_response, macro_dto, macro_dtos, mutacion_response,
};
use bijux_rewind_api::{
    BorrarRequest, DocumentoDto, EditorInfoDto, InsertarRequest, LogResponse,
    MacroEliminadoResponse, MacroInfoResponse, MacroNombreRequest, MacrosResponse,
    MensajeResponse, MutacionResponse, ReemplazarRequest,
};
use tracing::info;

use crate::http::extractors::{ApiJson, EditorHandle};
use crate::http::response_contract::ApiFailure;

type ApiResult<T> = Result<Json<T>, ApiFailure>;

pub(crate) async fn texto_handler(EditorHandle(editor): EditorHandle) -> Json<DocumentoDto> {
    let editor = editor.lock().await;
    Json(documento_dto(editor.document()))
}

pub(crate) async fn insertar_handler(
    EditorHandle(editor): EditorHandle,
    ApiJson(req): ApiJson<InsertarRequest>,
) -> ApiResult<MutacionResponse> {
    let mut editor = editor.lock().await;
    let mensaje = editor.insert(req.pos, req.texto)?;
    Ok(Json(mutacion_response(mensaje, editor.document())))
}

pub(crate) async fn borrar_handler(
    EditorHandle(editor): EditorHandle,
    ApiJson(req): ApiJson<BorrarRequest>,
) -> ApiResult<MutacionResponse> {
    let mut editor = editor.lock().await;
    let mensaje = editor.delete(req.desde, req.hasta)?;
    Ok(Json(mutacion_response(mensaje, editor.document())))
}

pub(crate) async fn reemplazar_handler(
    EditorHandle(editor): EditorHandle,
    ApiJson(req): ApiJson<ReemplazarRequest>,
) -> ApiResult<MutacionResponse> {
    let mut editor = editor.lock().await;
    let mensaje = editor.replace(req.desde, req.len, req.nuevo)?;
    Ok(Json(mutacion_response(mensaje, editor.document())))
}

pub(crate) async fn undo_handler(EditorHandle(editor): EditorHandle) -> ApiResult<MutacionResponse> {
    let mut editor = editor.lock().await;
    let mensaje = editor.undo()?;
    Ok(Json(mutacion_response(mensaje, editor.document())))
}

pub(crate) async fn redo_handler(EditorHandle(editor): EditorHandle) -> ApiResult<MutacionResponse> {
    let mut editor = editor.lock().await;
    let mensaje = editor.redo()?;
    Ok(Json(mutacion_response(mensaje, editor.document())))
}

pub(crate) async fn info_handler(EditorHandle(editor): EditorHandle) -> Json<EditorInfoDto> {
    let editor = editor.lock().await;
    Json(editor_info_dto(&editor.info()))
}

pub(crate) async fn log_handler(EditorHandle(editor): EditorHandle) -> Json<LogResponse> {
    let editor = editor.lock().await;
    Json(log_response(editor.log()))
}

pub(crate) async fn macro_grabar_handler(
    EditorHandle(editor): EditorHandle,
    ApiJson(req): ApiJson<MacroNombreRequest>,
) -> ApiResult<MacroInfoResponse> {
    let mut editor = editor.lock().await;
    let mensaje = editor.start_macro(&req.nombre)?;
    Ok(Json(MacroInfoResponse {
        mensaje,
        info: editor_info_dto(&editor.info()),
    }))
}

pub(crate) async fn macro_finalizar_handler(
    EditorHandle(editor): EditorHandle,
) -> ApiResult<MacroInfoResponse> {
    let mut editor = editor.lock().await;
    let sealed = macro_dto(editor.finish_macro()?);
    info!(macro_name = %sealed.nombre, steps = sealed.comandos, "macro recorded");
    Ok(Json(MacroInfoResponse {
        mensaje: format!(
            "Macro '{}' guardado con {} comandos",
            sealed.nombre, sealed.comandos
        ),
        info: editor_info_dto(&editor.info()),
    }))
}

pub(crate) async fn macro_cancelar_handler(
    EditorHandle(editor): EditorHandle,
) -> ApiResult<MacroInfoResponse> {
    let mut editor = editor.lock().await;
    let mensaje = editor.cancel_macro()?;
    Ok(Json(MacroInfoResponse {
        mensaje,
        info: editor_info_dto(&editor.info()),
    }))
}

pub(crate) async fn macro_ejecutar_handler(
    EditorHandle(editor): EditorHandle,
    ApiJson(req): ApiJson<MacroNombreRequest>,
) -> ApiResult<MutacionResponse> {
    let mut editor = editor.lock().await;
    let steps = editor.execute_macro(&req.nombre)?;
    info!(macro_name = %req.nombre.trim(), steps, "macro executed");
    let mensaje = format!(
        "Macro '{}' ejecutado ({steps} comandos)",
        req.nombre.trim()
    );
    Ok(Json(mutacion_response(mensaje, editor.document())))
}

pub(crate) async fn macro_listar_handler(EditorHandle(editor): EditorHandle) -> Json<MacrosResponse> {
    let editor = editor.lock().await;
    Json(MacrosResponse {
        macros: macro_dtos(editor.macros()),
    })
}

pub(crate) async fn macro_eliminar_handler(
    EditorHandle(editor): EditorHandle,
    Path(nombre): Path<String>,
) -> ApiResult<MacroEliminadoResponse> {
    let mut editor = editor.lock().await;
    let removed = editor.remove_macro(&nombre)?;
    Ok(Json(MacroEliminadoResponse {
        mensaje: format!("Macro '{}' eliminado", removed.name()),
        macros: macro_dtos(editor.macros()),
    }))
}

pub(crate) async fn historial_limpiar_handler(
    EditorHandle(editor): EditorHandle,
) -> Json<MacroInfoResponse> {
    let mut editor = editor.lock().await;
    editor.clear_history();
    Json(MacroInfoResponse {
        mensaje: "Historial limpiado".to_string(),
        info: editor_info_dto(&editor.info()),
    })
}

pub(crate) async fn log_limpiar_handler(EditorHandle(editor): EditorHandle) -> Json<MensajeResponse> {
    editor.lock().await.clear_log();
    Json(MensajeResponse {
        mensaje: "Log limpiado".to_string(),
    })
}

pub(crate) async fn documento_limpiar_handler(
    EditorHandle(editor): EditorHandle,
) -> Json<MutacionResponse> {
    let mut editor = editor.lock().await;
    let mensaje = if editor.clear_document() {
        "Documento limpiado"
    } else {
        "El documento ya estaba vacío"
    };
    Json(mutacion_response(mensaje.to_string(), editor.document()))
}

pub(crate) async fn reiniciar_handler(EditorHandle(editor): EditorHandle) -> Json<MensajeResponse> {
    editor.lock().await.reset();
    Json(MensajeResponse {
        mensaje: "Editor reiniciado".to_string(),
    })
}
