//! Shared primitives for all Rust crates in NewWork.

#![forbid(unsafe_code)]

/// Session token primitives shared across services.
pub mod auth;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::SessionToken;

/// Result type used across NewWork crates.
pub type AppResult<T> = Result<T, AppError>;

/// A validated non-empty UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(
                "value must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Creates a validated non-empty string, reporting `message` when blank.
    pub fn required(value: Option<String>, message: &str) -> AppResult<Self> {
        value
            .filter(|value| !value.trim().is_empty())
            .map(Self)
            .ok_or_else(|| AppError::Validation(message.to_owned()))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing input or a request the endpoint refuses to serve.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Caller has no session or the session cannot be resolved.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Caller is authenticated but blocked by authorization policy.
    #[error("forbidden: {message}")]
    Forbidden {
        /// Caller-facing denial message.
        message: String,
        /// Wire values of the permissions the operation required.
        required: Vec<String>,
    },

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Builds a forbidden error that echoes the required permissions.
    #[must_use]
    pub fn forbidden<I, S>(message: impl Into<String>, required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Forbidden {
            message: message.into(),
            required: required.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the caller-facing message without the category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message)
            | Self::NotFound(message)
            | Self::Unauthorized(message)
            | Self::Internal(message) => message.as_str(),
            Self::Forbidden { message, .. } => message.as_str(),
        }
    }
}
