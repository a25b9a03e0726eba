// SPDX-License-Identifier: Apache-2.0

use std::time::Instant;

use crate::http::request_tracing::extract_request_trace;
use crate::http::response_contract::api_error_response;
use crate::AppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use bijux_rewind_api::{ApiError, ApiErrorCode, REQUEST_ID_HEADER};
use serde_json::json;
use tracing::{info, warn, Instrument};

/// Opens the request span, stamps the request id on the response and on any
/// error body, and writes one audit line per request.
pub(crate) async fn request_tracing_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let started = Instant::now();
    let method = request.method().to_string();
    let route = request.uri().path().to_string();
    let trace = extract_request_trace(request.headers(), &state);

    let span = tracing::info_span!(
        "http.request",
        request_id = %trace.request_id,
        session = %trace.session,
        method = %method,
        route = %route,
    );

    let response = next.run(request).instrument(span).await;
    let mut response = stamp_error_body(
        response,
        &method,
        &route,
        &trace.request_id,
        state.api.max_body_bytes,
    );
    if let Ok(value) = HeaderValue::from_str(&trace.request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let status = response.status().as_u16();
    if state.api.enable_audit_log {
        info!(
            target: "rewind_audit",
            request_id = %trace.request_id,
            session = %trace.session,
            method = %method,
            path = %route,
            status,
            latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "request"
        );
    }
    response
}

// Rebuilds error bodies with the request id. Rejections produced by axum
// itself carry no `ApiError`, so the ones clients can hit are converted here.
fn stamp_error_body(
    response: Response,
    method: &str,
    route: &str,
    request_id: &str,
    max_body_bytes: usize,
) -> Response {
    let error = match response.extensions().get::<ApiError>() {
        Some(err) => err.clone(),
        None => match response.status() {
            StatusCode::METHOD_NOT_ALLOWED => ApiError::method_not_allowed(method, route),
            StatusCode::PAYLOAD_TOO_LARGE => ApiError::payload_too_large(max_body_bytes),
            status if status.is_client_error() => ApiError::new(
                ApiErrorCode::ValidationFailed,
                format!("petición rechazada ({})", status.as_u16()),
                json!({}),
                request_id,
            ),
            status if status.is_server_error() => {
                ApiError::internal(format!("error interno ({})", status.as_u16()))
            }
            _ => return response,
        },
    };
    let error = error.with_request_id(request_id);
    warn!(
        request_id = %request_id,
        code = ?error.code,
        message = %error.message,
        "request failed"
    );
    let mut rebuilt = api_error_response(&error);
    if response.extensions().get::<ApiError>().is_none() {
        *rebuilt.status_mut() = response.status();
    }
    // Headers set by inner layers (CORS, allow) survive; the body framing is new.
    for (name, value) in response.headers() {
        if name != CONTENT_TYPE && name != CONTENT_LENGTH {
            rebuilt.headers_mut().append(name.clone(), value.clone());
        }
    }
    rebuilt
}
