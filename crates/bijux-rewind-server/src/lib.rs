#![forbid(unsafe_code)]

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use bijux_rewind_core::{CertificateSession, ClockPort, EditorSession, SystemClock};

mod config;
mod http;
mod middleware;
mod runtime;
mod sessions;

pub use config::{validate_startup_config_contract, ApiConfig, CONFIG_SCHEMA_VERSION};
pub use runtime::server_runtime_app::build_router;
pub use sessions::{SessionLimitError, SessionRegistry};

pub const CRATE_NAME: &str = "bijux-rewind-server";

#[derive(Clone)]
pub struct AppState {
    pub api: ApiConfig,
    pub editors: Arc<SessionRegistry<EditorSession>>,
    pub certificates: Arc<SessionRegistry<CertificateSession>>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(api: ApiConfig) -> Self {
        Self::with_clock(api, Arc::new(SystemClock))
    }

    /// Every session created by this state reads time from `clock`.
    #[must_use]
    pub fn with_clock(api: ApiConfig, clock: Arc<dyn ClockPort>) -> Self {
        let editor_clock = Arc::clone(&clock);
        let editor_capacity = api.editor_history_capacity;
        let certificate_capacity = api.certificate_history_capacity;
        Self {
            editors: Arc::new(SessionRegistry::new(api.max_sessions, move || {
                EditorSession::new(editor_capacity, Arc::clone(&editor_clock))
            })),
            certificates: Arc::new(SessionRegistry::new(api.max_sessions, move || {
                CertificateSession::new(certificate_capacity, Arc::clone(&clock))
            })),
            request_id_seed: Arc::new(AtomicU64::new(1)),
            api,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
