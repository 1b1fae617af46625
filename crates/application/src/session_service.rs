//! Session ports and the service that resolves bearer tokens to identities.

use std::sync::Arc;

use async_trait::async_trait;
use newwork_core::{AppError, AppResult, SessionToken};
use newwork_domain::UserIdentity;

/// Repository port for token-to-identity bindings.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores a binding, replacing any previous one for the token.
    async fn insert(&self, token: SessionToken, identity: UserIdentity) -> AppResult<()>;

    /// Resolves a token to its identity.
    async fn find(&self, token: &SessionToken) -> AppResult<Option<UserIdentity>>;

    /// Removes a binding. Returns whether it existed.
    async fn remove(&self, token: &SessionToken) -> AppResult<bool>;
}

/// Application service for session lifecycle.
#[derive(Clone)]
pub struct SessionService {
    repository: Arc<dyn SessionRepository>,
}

impl SessionService {
    /// Creates a session service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Issues a fresh token bound to `identity`.
    pub async fn create_session(&self, identity: UserIdentity) -> AppResult<SessionToken> {
        let token = SessionToken::generate()?;
        self.repository.insert(token.clone(), identity).await?;
        Ok(token)
    }

    /// Resolves a token to the identity it was issued for.
    pub async fn resolve_session(&self, token: &SessionToken) -> AppResult<Option<UserIdentity>> {
        self.repository.find(token).await
    }

    /// Removes a session. Returns whether it existed.
    pub async fn remove_session(&self, token: &SessionToken) -> AppResult<bool> {
        self.repository.remove(token).await
    }

    /// Authenticates a raw `Authorization` header value.
    pub async fn authenticate(
        &self,
        authorization: Option<&str>,
    ) -> AppResult<(SessionToken, UserIdentity)> {
        let token = authorization
            .and_then(SessionToken::from_bearer_header)
            .ok_or_else(|| AppError::Unauthorized("No session provided".to_owned()))?;

        let identity = self
            .resolve_session(&token)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid or expired session".to_owned()))?;

        Ok((token, identity))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use newwork_core::{AppError, SessionToken};
    use newwork_domain::{Role, UserIdentity};

    use super::SessionService;
    use crate::test_support::FakeSessionRepository;

    fn service() -> SessionService {
        SessionService::new(Arc::new(FakeSessionRepository::default()))
    }

    fn manager() -> UserIdentity {
        UserIdentity::new("4", "john.smith@newwork.com", "John", "Smith", Role::Manager)
    }

    #[tokio::test]
    async fn created_session_resolves_until_removed() {
        let service = service();
        let token = service
            .create_session(manager())
            .await
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(token.as_str().len(), 64);

        let resolved = service.resolve_session(&token).await.unwrap_or_default();
        assert_eq!(resolved.map(|identity| identity.id().to_owned()), Some("4".to_owned()));

        assert!(matches!(service.remove_session(&token).await, Ok(true)));
        assert!(matches!(service.remove_session(&token).await, Ok(false)));
        assert!(matches!(service.resolve_session(&token).await, Ok(None)));
    }

    #[tokio::test]
    async fn tokens_are_distinct_per_session() {
        let service = service();
        let first = service.create_session(manager()).await;
        let second = service.create_session(manager()).await;
        assert!(first.is_ok() && second.is_ok());
        assert_ne!(first.ok(), second.ok());
    }

    #[tokio::test]
    async fn authenticate_reports_missing_and_unknown_tokens() {
        let service = service();

        assert!(matches!(
            service.authenticate(None).await,
            Err(AppError::Unauthorized(message)) if message == "No session provided"
        ));
        assert!(matches!(
            service.authenticate(Some("Basic abc")).await,
            Err(AppError::Unauthorized(message)) if message == "No session provided"
        ));
        assert!(matches!(
            service.authenticate(Some("Bearer nope")).await,
            Err(AppError::Unauthorized(message)) if message == "Invalid or expired session"
        ));
    }

    #[tokio::test]
    async fn authenticate_returns_bound_identity() {
        let service = service();
        let token = service
            .create_session(manager())
            .await
            .unwrap_or_else(|_| SessionToken::from_raw("unused"));
        let header = format!("Bearer {}", token.as_str());

        let result = service.authenticate(Some(header.as_str())).await;
        assert!(matches!(result, Ok((resolved, identity)) if resolved == token && identity.role() == Role::Manager));
    }
}
