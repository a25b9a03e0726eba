// SPDX-License-Identifier: Apache-2.0

use axum::http::{Method, Uri};
use axum::Json;
use bijux_rewind_api::convert::endpoints_response;
use bijux_rewind_api::{ApiError, EndpointsResponse};

use crate::http::response_contract::ApiFailure;

pub(crate) async fn healthz_handler() -> &'static str {
    "ok"
}

pub(crate) async fn index_handler() -> Json<EndpointsResponse> {
    Json(endpoints_response())
}

pub(crate) async fn route_not_found_handler(method: Method, uri: Uri) -> ApiFailure {
    ApiFailure(ApiError::route_not_found(method.as_str(), uri.path()))
}
