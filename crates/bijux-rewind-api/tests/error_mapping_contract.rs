use bijux_rewind_api::error_mapping::map_error;
use bijux_rewind_api::{ApiError, ApiErrorCode};
use bijux_rewind_core::RewindError;
use serde_json::json;

#[test]
fn domain_errors_map_to_stable_codes_and_statuses() {
    let cases = [
        (RewindError::NoHistory, ApiErrorCode::NothingToUndo, 409),
        (RewindError::NoFuture, ApiErrorCode::NothingToRedo, 409),
        (
            RewindError::DuplicateMacroName("m1".to_string()),
            ApiErrorCode::DuplicateMacroName,
            409,
        ),
        (
            RewindError::AlreadyRecording("m1".to_string()),
            ApiErrorCode::AlreadyRecording,
            409,
        ),
        (RewindError::NotRecording, ApiErrorCode::NotRecording, 409),
        (
            RewindError::MacroNotFound("m9".to_string()),
            ApiErrorCode::MacroNotFound,
            404,
        ),
        (
            RewindError::validation("posición fuera del documento"),
            ApiErrorCode::ValidationFailed,
            400,
        ),
        (
            RewindError::InvalidTransition {
                from: "borrador",
                action: "firmar",
            },
            ApiErrorCode::InvalidTransition,
            409,
        ),
        (
            RewindError::Conflict("ya existe".to_string()),
            ApiErrorCode::Conflict,
            409,
        ),
    ];
    for (domain, code, status) in cases {
        let api = ApiError::from_domain(&domain);
        assert_eq!(api.code, code, "{domain:?}");
        assert_eq!(api.message, domain.to_string());
        assert_eq!(map_error(&api).status_code, status, "{domain:?}");
    }
}

#[test]
fn transport_level_errors_have_their_own_statuses() {
    assert_eq!(map_error(&ApiError::invalid_json("eof")).status_code, 400);
    assert_eq!(map_error(&ApiError::payload_too_large(16)).status_code, 413);
    assert_eq!(map_error(&ApiError::session_limit_reached(2)).status_code, 503);
    assert_eq!(
        map_error(&ApiError::route_not_found("GET", "/nope")).status_code,
        404
    );
    assert_eq!(
        map_error(&ApiError::method_not_allowed("PATCH", "/api/command/undo")).status_code,
        405
    );
    assert_eq!(map_error(&ApiError::internal("boom")).status_code, 500);
}

#[test]
fn error_body_uses_camel_case_and_rejects_unknown_fields() {
    let err = ApiError::from_domain(&RewindError::MacroNotFound("m9".to_string()))
        .with_request_id("req-0000000000000007");
    let body = serde_json::to_value(&err).expect("serialize");
    assert_eq!(
        body,
        json!({
            "code": "MacroNotFound",
            "message": err.message,
            "details": {"nombre": "m9"},
            "requestId": "req-0000000000000007"
        })
    );

    let extra = json!({
        "code": "Internal",
        "message": "x",
        "details": {},
        "requestId": "r",
        "stack": "nope"
    });
    assert!(serde_json::from_value::<ApiError>(extra).is_err());
}
