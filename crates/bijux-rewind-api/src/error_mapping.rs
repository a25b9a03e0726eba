// SPDX-License-Identifier: Apache-2.0

use crate::{ApiError, ApiErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiErrorMapping {
    pub status_code: u16,
}

#[must_use]
pub fn map_error(error: &ApiError) -> ApiErrorMapping {
    let status_code = match error.code {
        ApiErrorCode::ValidationFailed
        | ApiErrorCode::InvalidJson
        | ApiErrorCode::InvalidSessionId => 400,
        ApiErrorCode::MacroNotFound | ApiErrorCode::RouteNotFound => 404,
        ApiErrorCode::NothingToUndo
        | ApiErrorCode::NothingToRedo
        | ApiErrorCode::DuplicateMacroName
        | ApiErrorCode::AlreadyRecording
        | ApiErrorCode::NotRecording
        | ApiErrorCode::InvalidTransition
        | ApiErrorCode::Conflict => 409,
        ApiErrorCode::MethodNotAllowed => 405,
        ApiErrorCode::PayloadTooLarge => 413,
        ApiErrorCode::SessionLimitReached => 503,
        _ => 500,
    };
    ApiErrorMapping { status_code }
}
