use serde::Serialize;
use std::time::Duration;

use bijux_rewind_core::{DEFAULT_CERTIFICATE_HISTORY_CAPACITY, DEFAULT_EDITOR_HISTORY_CAPACITY};

pub const CONFIG_SCHEMA_VERSION: &str = "1";

#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    pub max_body_bytes: usize,
    pub editor_history_capacity: usize,
    pub certificate_history_capacity: usize,
    pub max_sessions: usize,
    pub cors_allowed_origins: Vec<String>,
    pub enable_audit_log: bool,
    pub shutdown_drain: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 16 * 1024,
            editor_history_capacity: DEFAULT_EDITOR_HISTORY_CAPACITY,
            certificate_history_capacity: DEFAULT_CERTIFICATE_HISTORY_CAPACITY,
            max_sessions: 64,
            cors_allowed_origins: Vec::new(),
            enable_audit_log: true,
            shutdown_drain: Duration::from_millis(500),
        }
    }
}

pub fn validate_startup_config_contract(api: &ApiConfig) -> Result<(), String> {
    if api.max_body_bytes == 0 {
        return Err("max body bytes must be > 0".to_string());
    }
    if api.editor_history_capacity == 0 || api.certificate_history_capacity == 0 {
        return Err("history capacities must be > 0".to_string());
    }
    if api.max_sessions == 0 {
        return Err("max sessions must be > 0".to_string());
    }
    if let Some(origin) = api
        .cors_allowed_origins
        .iter()
        .find(|o| !(o.starts_with("http://") || o.starts_with("https://")))
    {
        return Err(format!("cors origin must be an http(s) origin: {origin}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes_startup_validation() {
        validate_startup_config_contract(&ApiConfig::default()).expect("default config");
    }

    #[test]
    fn startup_config_validation_rejects_zero_limits() {
        let api = ApiConfig {
            editor_history_capacity: 0,
            ..ApiConfig::default()
        };
        let err = validate_startup_config_contract(&api).expect_err("zero capacity");
        assert!(err.contains("capacities"));

        let api = ApiConfig {
            max_sessions: 0,
            ..ApiConfig::default()
        };
        assert!(validate_startup_config_contract(&api).is_err());
    }

    #[test]
    fn startup_config_validation_rejects_bare_cors_origins() {
        let api = ApiConfig {
            cors_allowed_origins: vec!["http://localhost:5173".to_string(), "example.com".to_string()],
            ..ApiConfig::default()
        };
        let err = validate_startup_config_contract(&api).expect_err("bare origin");
        assert!(err.contains("example.com"));
    }
}
