use async_trait::async_trait;
use newwork_application::{EnhancementFailure, EnhancementOutcome, FeedbackEnhancer};

/// Enhancer used when no provider is configured. Always returns the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFeedbackEnhancer;

#[async_trait]
impl FeedbackEnhancer for PassthroughFeedbackEnhancer {
    async fn enhance(&self, text: &str, _employee_name: Option<&str>) -> EnhancementOutcome {
        EnhancementOutcome::fallback(text, EnhancementFailure::NotConfigured)
    }
}
