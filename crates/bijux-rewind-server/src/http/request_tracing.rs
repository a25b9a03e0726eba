// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::http::HeaderMap;
use bijux_rewind_api::{REQUEST_ID_HEADER, SESSION_HEADER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RequestTrace {
    pub request_id: String,
    pub session: String,
}

#[must_use]
pub(crate) fn normalized_header_value(
    headers: &HeaderMap,
    key: &str,
    max_len: usize,
) -> Option<String> {
    let raw = headers.get(key)?.to_str().ok()?.trim();
    if raw.is_empty() || raw.len() > max_len {
        return None;
    }
    Some(raw.to_string())
}

#[must_use]
pub(crate) fn extract_request_trace(headers: &HeaderMap, state: &AppState) -> RequestTrace {
    let request_id = normalized_header_value(headers, REQUEST_ID_HEADER, 128).unwrap_or_else(|| {
        let id = state
            .request_id_seed
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        format!("req-{id:016x}")
    });
    let session = normalized_header_value(headers, SESSION_HEADER, 128)
        .unwrap_or_else(|| bijux_rewind_core::DEFAULT_SESSION_ID.to_string());
    RequestTrace {
        request_id,
        session,
    }
}
