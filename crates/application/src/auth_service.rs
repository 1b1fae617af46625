//! Login and logout against the employee directory.
//!
//! Login is identity-by-assertion: the caller names an email and the role
//! stored for it. Any mismatch reports the same generic failure.

use std::str::FromStr;
use std::sync::Arc;

use newwork_core::{AppError, AppResult, SessionToken};
use newwork_domain::{Role, UserIdentity};

use crate::{ProfileRepository, SessionService};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Login request as received from the client.
#[derive(Debug, Clone, Default)]
pub struct LoginInput {
    /// Login email.
    pub email: Option<String>,
    /// Asserted role name.
    pub role: Option<String>,
}

/// Successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Identity bound to the new session.
    pub identity: UserIdentity,
    /// Bearer token for subsequent calls.
    pub token: SessionToken,
}

/// Application service for authentication.
#[derive(Clone)]
pub struct AuthService {
    profiles: Arc<dyn ProfileRepository>,
    sessions: SessionService,
}

impl AuthService {
    /// Creates an auth service.
    #[must_use]
    pub fn new(profiles: Arc<dyn ProfileRepository>, sessions: SessionService) -> Self {
        Self { profiles, sessions }
    }

    /// Resolves the asserted identity and opens a session for it.
    ///
    /// The permission set is captured here and never re-derived for the
    /// lifetime of the session.
    pub async fn login(&self, input: LoginInput) -> AppResult<LoginOutcome> {
        let (Some(email), Some(role)) = (
            input.email.filter(|value| !value.trim().is_empty()),
            input.role.filter(|value| !value.trim().is_empty()),
        ) else {
            return Err(AppError::Validation(
                "Email and role are required".to_owned(),
            ));
        };

        let role = Role::from_str(&role)
            .map_err(|_| AppError::Unauthorized(INVALID_CREDENTIALS.to_owned()))?;

        let profile = self
            .profiles
            .find_by_email(email.trim())
            .await?
            .filter(|profile| profile.role == role)
            .ok_or_else(|| {
                tracing::info!(email = email.trim(), role = role.as_str(), "login rejected");
                AppError::Unauthorized(INVALID_CREDENTIALS.to_owned())
            })?;

        let identity = UserIdentity::new(
            profile.id,
            profile.email,
            profile.first_name,
            profile.last_name,
            profile.role,
        );
        let token = self.sessions.create_session(identity.clone()).await?;

        tracing::info!(user_id = identity.id(), role = role.as_str(), "session opened");
        Ok(LoginOutcome { identity, token })
    }

    /// Ends the session bound to `token`.
    pub async fn logout(&self, token: &SessionToken) -> AppResult<()> {
        if self.sessions.remove_session(token).await? {
            tracing::info!("session closed");
        }

        Ok(())
    }
}
