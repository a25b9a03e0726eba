// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use bijux_rewind_api::{ApiError, SESSION_HEADER};
use bijux_rewind_core::{CertificateSession, EditorSession, SessionId};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::http::response_contract::ApiFailure;
use crate::AppState;

/// JSON body whose rejections are reported in the service's error format.
pub(crate) struct ApiJson<T>(pub T);

#[async_trait]
impl<T> FromRequest<AppState> for ApiJson<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = ApiFailure;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiFailure(json_rejection_error(
                &rejection,
                state.api.max_body_bytes,
            ))),
        }
    }
}

fn json_rejection_error(rejection: &JsonRejection, max_body_bytes: usize) -> ApiError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::payload_too_large(max_body_bytes)
    } else {
        ApiError::invalid_json(&rejection.body_text())
    }
}

/// Session id from the `x-session-id` header, `default` when absent.
pub(crate) fn session_id(headers: &HeaderMap) -> Result<SessionId, ApiFailure> {
    match headers.get(SESSION_HEADER) {
        None => Ok(SessionId::default()),
        Some(raw) => {
            let text = raw
                .to_str()
                .map_err(|_| ApiFailure(ApiError::invalid_session_id("no es ASCII")))?;
            SessionId::parse(text)
                .map_err(|err| ApiFailure(ApiError::invalid_session_id(&err.to_string())))
        }
    }
}

pub(crate) struct EditorHandle(pub Arc<Mutex<EditorSession>>);

#[async_trait]
impl FromRequestParts<AppState> for EditorHandle {
    type Rejection = ApiFailure;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let id = session_id(&parts.headers)?;
        Ok(Self(state.editors.get_or_create(&id).await?))
    }
}

pub(crate) struct CertificateHandle(pub Arc<Mutex<CertificateSession>>);

#[async_trait]
impl FromRequestParts<AppState> for CertificateHandle {
    type Rejection = ApiFailure;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let id = session_id(&parts.headers)?;
        Ok(Self(state.certificates.get_or_create(&id).await?))
    }
}
