use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::{AppError, AppResult};

const BEARER_PREFIX: &str = "Bearer ";

/// Opaque token that binds a client to an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generates a fresh token from 32 random bytes, hex encoded.
    pub fn generate() -> AppResult<Self> {
        let mut bytes = [0u8; 32];
        getrandom::fill(&mut bytes).map_err(|error| {
            AppError::Internal(format!("failed to generate session token: {error}"))
        })?;

        let encoded = bytes
            .iter()
            .fold(String::with_capacity(64), |mut acc, byte| {
                let _ = write!(acc, "{byte:02x}");
                acc
            });

        Ok(Self(encoded))
    }

    /// Wraps a token value received from a client.
    #[must_use]
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Extracts the token from an `Authorization` header value.
    ///
    /// Returns `None` when the header is not a bearer credential or the token is blank.
    #[must_use]
    pub fn from_bearer_header(value: &str) -> Option<Self> {
        value
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(Self::from_raw)
    }

    /// Returns the token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
