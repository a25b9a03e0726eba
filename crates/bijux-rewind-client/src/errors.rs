// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Display, Formatter};

use bijux_rewind_api::{ApiError, ApiErrorCode};

/// Failure of a single call.
///
/// `Transport` says nothing about whether the server applied the operation;
/// callers refresh state to learn it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClientError {
    Api {
        status: u16,
        code: Option<ApiErrorCode>,
        message: String,
        request_id: Option<String>,
    },
    Transport(String),
    Decode(String),
}

impl ClientError {
    pub(crate) fn from_error_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ApiError>(body) {
            Ok(err) => Self::Api {
                status,
                code: Some(err.code),
                message: err.message,
                request_id: Some(err.request_id),
            },
            Err(_) => Self::Api {
                status,
                code: None,
                message: if body.trim().is_empty() {
                    format!("HTTP {status}")
                } else {
                    body.trim().to_string()
                },
                request_id: None,
            },
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    #[must_use]
    pub fn code(&self) -> Option<ApiErrorCode> {
        match self {
            Self::Api { code, .. } => *code,
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api { message, .. } => f.write_str(message),
            Self::Transport(msg) => write!(f, "transport error: {msg}"),
            Self::Decode(msg) => write!(f, "invalid response body: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_message_is_displayed_verbatim() {
        let body = r#"{"code":"NothingToUndo","message":"No hay operaciones para deshacer","details":{},"requestId":"req-1"}"#;
        let err = ClientError::from_error_body(409, body);
        assert_eq!(err.to_string(), "No hay operaciones para deshacer");
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.code(), Some(ApiErrorCode::NothingToUndo));
    }

    #[test]
    fn unstructured_error_body_keeps_status_and_text() {
        let err = ClientError::from_error_body(502, "bad gateway");
        assert_eq!(err.code(), None);
        assert_eq!(err.to_string(), "bad gateway");
        assert_eq!(ClientError::from_error_body(500, "").to_string(), "HTTP 500");
    }
}
