//! Port for the best-effort feedback rewriting service.

use async_trait::async_trait;
use thiserror::Error;

/// Why an enhancement attempt fell back to the original text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnhancementFailure {
    /// No provider credentials were configured.
    #[error("enhancer is not configured")]
    NotConfigured,

    /// The request never produced a response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The provider did not answer in time.
    #[error("enhancer timed out")]
    Timeout,

    /// The provider answered with a non-success status.
    #[error("enhancer returned status {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("malformed enhancer payload: {0}")]
    MalformedPayload(String),

    /// The response decoded but carried no text.
    #[error("enhancer returned no content")]
    MissingContent,
}

/// Result of an enhancement attempt. Never an error: failures degrade to
/// the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnhancementOutcome {
    /// Rewritten text.
    Enhanced(String),
    /// Original text, returned because enhancement failed.
    Fallback {
        /// Text as supplied by the caller.
        original: String,
        /// Failure that triggered the fallback.
        reason: EnhancementFailure,
    },
}

impl EnhancementOutcome {
    /// Builds a fallback outcome for `original`.
    #[must_use]
    pub fn fallback(original: impl Into<String>, reason: EnhancementFailure) -> Self {
        Self::Fallback {
            original: original.into(),
            reason,
        }
    }

    /// Returns the text to show, enhanced or not.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Enhanced(text) => text.as_str(),
            Self::Fallback { original, .. } => original.as_str(),
        }
    }

    /// Returns whether a rewrite was produced.
    #[must_use]
    pub fn was_enhanced(&self) -> bool {
        matches!(self, Self::Enhanced(_))
    }
}

/// Port for services that rewrite feedback into constructive language.
#[async_trait]
pub trait FeedbackEnhancer: Send + Sync {
    /// Rewrites `text`, optionally addressed to `employee_name`.
    async fn enhance(&self, text: &str, employee_name: Option<&str>) -> EnhancementOutcome;
}

/// Builds the instruction prompt sent to text-generation providers.
#[must_use]
pub fn enhancement_prompt(text: &str, employee_name: Option<&str>) -> String {
    let recipient = employee_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| format!(" about {name}"))
        .unwrap_or_default();

    format!(
        "Rewrite the following workplace feedback{recipient} so it reads as \
         professional, constructive and actionable. Keep the original meaning, \
         answer in at most three sentences and return only the rewritten text.\n\
         \n\
         Drop profanity, insults and personal attacks. Describe observable \
         behaviour and its impact instead of personality, and turn complaints \
         into concrete suggestions. Use the person's name when one is given.\n\
         \n\
         Feedback: \"{text}\""
    )
}
