// SPDX-License-Identifier: Apache-2.0

use bijux_rewind_core::RewindError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ApiErrorCode {
    ValidationFailed,
    InvalidJson,
    PayloadTooLarge,
    NothingToUndo,
    NothingToRedo,
    DuplicateMacroName,
    AlreadyRecording,
    NotRecording,
    MacroNotFound,
    InvalidTransition,
    Conflict,
    InvalidSessionId,
    SessionLimitReached,
    RouteNotFound,
    MethodNotAllowed,
    Internal,
}

/// Body of every non-2xx response. Clients show `message` as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
    pub request_id: String,
}

impl ApiError {
    #[must_use]
    pub fn new(
        code: ApiErrorCode,
        message: impl Into<String>,
        details: Value,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            request_id: request_id.into(),
        }
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    #[must_use]
    pub fn invalid_json(reason: &str) -> Self {
        Self::new(
            ApiErrorCode::InvalidJson,
            "el cuerpo de la petición no es JSON válido",
            json!({"reason": reason}),
            "req-unknown",
        )
    }

    #[must_use]
    pub fn payload_too_large(max_bytes: usize) -> Self {
        Self::new(
            ApiErrorCode::PayloadTooLarge,
            "el cuerpo de la petición es demasiado grande",
            json!({"maxBytes": max_bytes}),
            "req-unknown",
        )
    }

    #[must_use]
    pub fn invalid_session_id(reason: &str) -> Self {
        Self::new(
            ApiErrorCode::InvalidSessionId,
            format!("identificador de sesión inválido: {reason}"),
            json!({}),
            "req-unknown",
        )
    }

    #[must_use]
    pub fn session_limit_reached(max_sessions: usize) -> Self {
        Self::new(
            ApiErrorCode::SessionLimitReached,
            "se alcanzó el número máximo de sesiones",
            json!({"maxSessions": max_sessions}),
            "req-unknown",
        )
    }

    #[must_use]
    pub fn route_not_found(method: &str, path: &str) -> Self {
        Self::new(
            ApiErrorCode::RouteNotFound,
            format!("ruta no encontrada: {method} {path}"),
            json!({"method": method, "path": path}),
            "req-unknown",
        )
    }

    #[must_use]
    pub fn method_not_allowed(method: &str, path: &str) -> Self {
        Self::new(
            ApiErrorCode::MethodNotAllowed,
            format!("método {method} no permitido en {path}"),
            json!({"method": method, "path": path}),
            "req-unknown",
        )
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Internal, message, json!({}), "req-unknown")
    }

    /// Translates a session failure into its wire form. The message is the
    /// domain error's own text.
    #[must_use]
    pub fn from_domain(err: &RewindError) -> Self {
        let (code, details) = match err {
            RewindError::NoHistory => (ApiErrorCode::NothingToUndo, json!({})),
            RewindError::NoFuture => (ApiErrorCode::NothingToRedo, json!({})),
            RewindError::DuplicateMacroName(name) => {
                (ApiErrorCode::DuplicateMacroName, json!({"nombre": name}))
            }
            RewindError::AlreadyRecording(name) => {
                (ApiErrorCode::AlreadyRecording, json!({"nombre": name}))
            }
            RewindError::NotRecording => (ApiErrorCode::NotRecording, json!({})),
            RewindError::MacroNotFound(name) => {
                (ApiErrorCode::MacroNotFound, json!({"nombre": name}))
            }
            RewindError::Validation(_) => (ApiErrorCode::ValidationFailed, json!({})),
            RewindError::InvalidTransition { from, action } => (
                ApiErrorCode::InvalidTransition,
                json!({"estado": from, "accion": action}),
            ),
            RewindError::Conflict(_) => (ApiErrorCode::Conflict, json!({})),
            _ => (ApiErrorCode::Internal, json!({})),
        };
        Self::new(code, err.to_string(), details, "req-unknown")
    }
}

impl From<RewindError> for ApiError {
    fn from(err: RewindError) -> Self {
        Self::from_domain(&err)
    }
}

const _: fn() = || {
    fn assert_traits<T: Serialize + for<'de> Deserialize<'de>>() {}
    assert_traits::<ApiErrorCode>();
    assert_traits::<ApiError>();
};
