// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bijux_rewind_api::error_mapping::map_error;
use bijux_rewind_api::ApiError;
use bijux_rewind_core::RewindError;

use crate::sessions::SessionLimitError;

/// Handler failure. The response carries the [`ApiError`] as an extension
/// so the tracing middleware can stamp the request id into the body.
#[derive(Debug)]
pub(crate) struct ApiFailure(pub ApiError);

impl From<RewindError> for ApiFailure {
    fn from(err: RewindError) -> Self {
        Self(ApiError::from_domain(&err))
    }
}

impl From<SessionLimitError> for ApiFailure {
    fn from(err: SessionLimitError) -> Self {
        Self(ApiError::session_limit_reached(err.0))
    }
}

impl From<ApiError> for ApiFailure {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let mut resp = api_error_response(&self.0);
        resp.extensions_mut().insert(self.0);
        resp
    }
}

#[must_use]
pub(crate) fn api_error_status(err: &ApiError) -> StatusCode {
    StatusCode::from_u16(map_error(err).status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

#[must_use]
pub(crate) fn api_error_response(err: &ApiError) -> Response {
    (api_error_status(err), Json(err)).into_response()
}
