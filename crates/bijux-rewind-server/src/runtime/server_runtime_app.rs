use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::http::{command_endpoints, memento_endpoints, service_endpoints};
use crate::middleware::cors::cors_middleware;
use crate::middleware::request_tracing::request_tracing_middleware;
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(service_endpoints::healthz_handler))
        .route("/api", get(service_endpoints::index_handler))
        .route("/api/command/texto", get(command_endpoints::texto_handler))
        .route(
            "/api/command/insertar",
            post(command_endpoints::insertar_handler),
        )
        .route("/api/command/borrar", post(command_endpoints::borrar_handler))
        .route(
            "/api/command/reemplazar",
            post(command_endpoints::reemplazar_handler),
        )
        .route("/api/command/undo", post(command_endpoints::undo_handler))
        .route("/api/command/redo", post(command_endpoints::redo_handler))
        .route("/api/command/info", get(command_endpoints::info_handler))
        .route("/api/command/log", get(command_endpoints::log_handler))
        .route(
            "/api/command/macro/grabar",
            post(command_endpoints::macro_grabar_handler),
        )
        .route(
            "/api/command/macro/finalizar",
            post(command_endpoints::macro_finalizar_handler),
        )
        .route(
            "/api/command/macro/cancelar",
            post(command_endpoints::macro_cancelar_handler),
        )
        .route(
            "/api/command/macro/ejecutar",
            post(command_endpoints::macro_ejecutar_handler),
        )
        .route(
            "/api/command/macro",
            get(command_endpoints::macro_listar_handler),
        )
        .route(
            "/api/command/macro/:nombre",
            delete(command_endpoints::macro_eliminar_handler),
        )
        .route(
            "/api/command/historial/limpiar",
            post(command_endpoints::historial_limpiar_handler),
        )
        .route(
            "/api/command/log/limpiar",
            post(command_endpoints::log_limpiar_handler),
        )
        .route(
            "/api/command/documento/limpiar",
            post(command_endpoints::documento_limpiar_handler),
        )
        .route(
            "/api/command/reiniciar",
            post(command_endpoints::reiniciar_handler),
        )
        .route("/api/memento/estado", get(memento_endpoints::estado_handler))
        .route(
            "/api/memento/solicitud",
            post(memento_endpoints::crear_solicitud_handler),
        )
        .route(
            "/api/memento/solicitud",
            put(memento_endpoints::actualizar_solicitud_handler),
        )
        .route("/api/memento/adjunto", post(memento_endpoints::adjunto_handler))
        .route("/api/memento/generar", post(memento_endpoints::generar_handler))
        .route("/api/memento/firmar", post(memento_endpoints::firmar_handler))
        .route("/api/memento/undo", post(memento_endpoints::undo_handler))
        .route("/api/memento/redo", post(memento_endpoints::redo_handler))
        .route(
            "/api/memento/historial",
            get(memento_endpoints::historial_handler),
        )
        .route(
            "/api/memento/historial/limpiar",
            post(memento_endpoints::historial_limpiar_handler),
        )
        .route(
            "/api/memento/snapshot",
            post(memento_endpoints::snapshot_handler),
        )
        .route("/api/memento/log", get(memento_endpoints::log_handler))
        .route("/api/memento/tipos", get(memento_endpoints::tipos_handler))
        .fallback(service_endpoints::route_not_found_handler)
        .layer(from_fn_with_state(state.clone(), cors_middleware))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .layer(from_fn_with_state(state.clone(), request_tracing_middleware))
        .with_state(state)
}
