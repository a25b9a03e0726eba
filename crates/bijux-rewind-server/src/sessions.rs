// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::sync::Arc;

use bijux_rewind_core::SessionId;
use tokio::sync::{Mutex, RwLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimitError(pub usize);

impl std::fmt::Display for SessionLimitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session limit reached ({} sessions)", self.0)
    }
}
impl std::error::Error for SessionLimitError {}

type Factory<S> = Box<dyn Fn() -> S + Send + Sync>;

/// Sessions keyed by id, created on first use.
///
/// Each session sits behind its own mutex, so requests against one session
/// are applied one at a time in arrival order while other sessions proceed.
pub struct SessionRegistry<S> {
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<S>>>>,
    factory: Factory<S>,
    max_sessions: usize,
}

impl<S: Send + 'static> SessionRegistry<S> {
    pub fn new(max_sessions: usize, factory: impl Fn() -> S + Send + Sync + 'static) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            factory: Box::new(factory),
            max_sessions: max_sessions.max(1),
        }
    }

    pub async fn get_or_create(&self, id: &SessionId) -> Result<Arc<Mutex<S>>, SessionLimitError> {
        if let Some(existing) = self.sessions.read().await.get(id) {
            return Ok(Arc::clone(existing));
        }
        let mut sessions = self.sessions.write().await;
        if let Some(existing) = sessions.get(id) {
            return Ok(Arc::clone(existing));
        }
        if sessions.len() >= self.max_sessions {
            return Err(SessionLimitError(self.max_sessions));
        }
        let created = Arc::new(Mutex::new((self.factory)()));
        sessions.insert(id.clone(), Arc::clone(&created));
        tracing::debug!(session = %id, total = sessions.len(), "session created");
        Ok(created)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    #[must_use]
    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }
}
