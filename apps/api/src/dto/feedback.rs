use newwork_application::{CreateFeedbackInput, EnhancementOutcome, FeedbackView};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::common::timestamp;

/// API representation of a feedback item.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/feedback-response.ts"
)]
pub struct FeedbackResponse {
    pub id: String,
    pub from_user_id: String,
    pub from_user_name: String,
    pub to_user_id: String,
    pub content: String,
    pub enhanced_content: Option<String>,
    pub is_enhanced: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<FeedbackView> for FeedbackResponse {
    fn from(value: FeedbackView) -> Self {
        let feedback = value.feedback;
        Self {
            id: feedback.id,
            from_user_id: feedback.from_user_id,
            from_user_name: value.from_user_name,
            to_user_id: feedback.to_user_id,
            content: feedback.content,
            enhanced_content: feedback.enhanced_content,
            is_enhanced: feedback.is_enhanced,
            created_at: timestamp(feedback.created_at),
            updated_at: timestamp(feedback.updated_at),
        }
    }
}

/// Feedback listing.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/feedback-list-response.ts"
)]
pub struct FeedbackListResponse {
    pub feedback: Vec<FeedbackResponse>,
    pub total: usize,
}

impl From<Vec<FeedbackView>> for FeedbackListResponse {
    fn from(value: Vec<FeedbackView>) -> Self {
        let feedback: Vec<FeedbackResponse> =
            value.into_iter().map(FeedbackResponse::from).collect();
        Self {
            total: feedback.len(),
            feedback,
        }
    }
}

/// Single feedback item, optionally with a status message.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/feedback-item-response.ts"
)]
pub struct FeedbackItemResponse {
    pub feedback: FeedbackResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub message: Option<String>,
}

/// Incoming payload for new feedback.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-feedback-request.ts"
)]
pub struct CreateFeedbackRequest {
    pub content: Option<String>,
    /// Requests a best-effort rewrite before storing.
    #[ts(optional)]
    pub enhance: Option<bool>,
}

impl From<CreateFeedbackRequest> for CreateFeedbackInput {
    fn from(value: CreateFeedbackRequest) -> Self {
        Self {
            content: value.content,
            enhance: value.enhance.unwrap_or(false),
        }
    }
}

/// Incoming payload for a feedback edit.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-feedback-request.ts"
)]
pub struct UpdateFeedbackRequest {
    pub content: Option<String>,
}

/// Incoming payload for a standalone rewrite.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/enhance-text-request.ts"
)]
pub struct EnhanceTextRequest {
    pub text: Option<String>,
    #[ts(optional)]
    pub employee_name: Option<String>,
}

/// Standalone rewrite result. `enhanced` equals `original` on fallback.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/enhance-text-response.ts"
)]
pub struct EnhanceTextResponse {
    pub original: String,
    pub enhanced: String,
    pub was_enhanced: bool,
}

impl EnhanceTextResponse {
    pub fn new(original: String, outcome: EnhancementOutcome) -> Self {
        Self {
            was_enhanced: outcome.was_enhanced(),
            enhanced: outcome.text().to_owned(),
            original,
        }
    }
}
