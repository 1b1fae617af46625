use std::collections::HashMap;

use async_trait::async_trait;
use newwork_application::SessionRepository;
use newwork_core::{AppResult, SessionToken};
use newwork_domain::UserIdentity;
use tokio::sync::RwLock;

/// Process-local session store. Sessions never expire.
#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<SessionToken, UserIdentity>>,
}

impl InMemorySessionRepository {
    /// Creates an empty session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, token: SessionToken, identity: UserIdentity) -> AppResult<()> {
        self.sessions.write().await.insert(token, identity);
        Ok(())
    }

    async fn find(&self, token: &SessionToken) -> AppResult<Option<UserIdentity>> {
        Ok(self.sessions.read().await.get(token).cloned())
    }

    async fn remove(&self, token: &SessionToken) -> AppResult<bool> {
        Ok(self.sessions.write().await.remove(token).is_some())
    }
}
