//! Feedback reads and writes gated by the visibility rules.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use newwork_core::{AppError, AppResult, NonEmptyString};
use newwork_domain::{
    Feedback, FeedbackScope, Permission, UNKNOWN_AUTHOR, UserIdentity, can_delete_feedback_item,
    can_view_feedback_item, feedback_scope_for_profile, received_feedback_scope,
};

use crate::authorization::require_permission;
use crate::{EnhancementOutcome, FeedbackEnhancer, FeedbackRepository, ProfileRepository};

/// Feedback item enriched with its author's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackView {
    /// Stored feedback.
    pub feedback: Feedback,
    /// Author display name, or a placeholder for unknown authors.
    pub from_user_name: String,
}

/// Input for new feedback.
#[derive(Debug, Clone, Default)]
pub struct CreateFeedbackInput {
    /// Feedback body.
    pub content: Option<String>,
    /// Whether to attempt an enhanced rewrite.
    pub enhance: bool,
}

/// Application service for peer feedback.
#[derive(Clone)]
pub struct FeedbackService {
    feedback: Arc<dyn FeedbackRepository>,
    profiles: Arc<dyn ProfileRepository>,
    enhancer: Arc<dyn FeedbackEnhancer>,
}

impl FeedbackService {
    /// Creates a feedback service.
    #[must_use]
    pub fn new(
        feedback: Arc<dyn FeedbackRepository>,
        profiles: Arc<dyn ProfileRepository>,
        enhancer: Arc<dyn FeedbackEnhancer>,
    ) -> Self {
        Self {
            feedback,
            profiles,
            enhancer,
        }
    }

    /// Lists feedback addressed to the caller.
    pub async fn received(&self, identity: &UserIdentity) -> AppResult<Vec<FeedbackView>> {
        self.list_scope(&received_feedback_scope(identity)).await
    }

    /// Lists feedback about `profile_id` that the caller may read.
    pub async fn for_profile(
        &self,
        identity: &UserIdentity,
        profile_id: &str,
    ) -> AppResult<Vec<FeedbackView>> {
        let scope = feedback_scope_for_profile(identity, profile_id);
        tracing::debug!(user_id = identity.id(), profile_id, ?scope, "feedback scope resolved");
        self.list_scope(&scope).await
    }

    /// Records feedback about `profile_id`, optionally enhanced.
    pub async fn create(
        &self,
        identity: &UserIdentity,
        profile_id: &str,
        input: CreateFeedbackInput,
    ) -> AppResult<FeedbackView> {
        require_permission(identity, Permission::FeedbackCreate)?;

        let target = self
            .profiles
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_owned()))?;

        let id = self.feedback.next_id().await?;
        let mut feedback = Feedback::new(id, identity.id(), profile_id, input.content, Utc::now())?;

        if input.enhance {
            match self
                .enhancer
                .enhance(&feedback.content, Some(&target.full_name()))
                .await
            {
                EnhancementOutcome::Enhanced(text) => feedback.mark_enhanced(text),
                EnhancementOutcome::Fallback { reason, .. } => {
                    tracing::warn!(%reason, "feedback enhancement fell back to original text");
                }
            }
        }

        self.feedback.append(feedback.clone()).await?;
        tracing::info!(
            feedback_id = %feedback.id,
            from_user_id = identity.id(),
            to_user_id = profile_id,
            "feedback created"
        );

        Ok(FeedbackView {
            feedback,
            from_user_name: identity.display_name(),
        })
    }

    /// Rewrites free text without storing anything.
    pub async fn enhance_text(
        &self,
        identity: &UserIdentity,
        text: Option<String>,
        employee_name: Option<&str>,
    ) -> AppResult<EnhancementOutcome> {
        require_permission(identity, Permission::FeedbackCreate)?;
        let text = NonEmptyString::required(text, "Text is required")?;

        let outcome = self.enhancer.enhance(text.as_str(), employee_name).await;
        if let EnhancementOutcome::Fallback { reason, .. } = &outcome {
            tracing::warn!(%reason, "text enhancement fell back to original text");
        }

        Ok(outcome)
    }

    /// Returns one feedback item when the caller may read it.
    pub async fn get(&self, identity: &UserIdentity, feedback_id: &str) -> AppResult<FeedbackView> {
        let feedback = self.visible_item(identity, feedback_id).await?;
        self.enrich_one(feedback).await
    }

    /// Replaces the body of feedback the caller authored.
    pub async fn update(
        &self,
        identity: &UserIdentity,
        feedback_id: &str,
        content: Option<String>,
    ) -> AppResult<FeedbackView> {
        let mut feedback = self.visible_item(identity, feedback_id).await?;
        // Authorship is not a grantable permission, so nothing is echoed.
        if feedback.from_user_id != identity.id() {
            return Err(AppError::forbidden(
                "Only the author can edit feedback",
                Vec::<String>::new(),
            ));
        }

        feedback.revise(content, Utc::now())?;
        if !self.feedback.replace(feedback.clone()).await? {
            return Err(feedback_not_found());
        }

        self.enrich_one(feedback).await
    }

    /// Deletes feedback authored by the caller, or any feedback for reviewers.
    pub async fn delete(&self, identity: &UserIdentity, feedback_id: &str) -> AppResult<()> {
        let feedback = self.visible_item(identity, feedback_id).await?;
        if !can_delete_feedback_item(identity, &feedback) {
            return Err(AppError::forbidden(
                "Access denied",
                [Permission::FeedbackReadAll.as_str()],
            ));
        }

        if !self.feedback.remove(feedback_id).await? {
            return Err(feedback_not_found());
        }

        tracing::info!(feedback_id, user_id = identity.id(), "feedback deleted");
        Ok(())
    }

    async fn visible_item(&self, identity: &UserIdentity, feedback_id: &str) -> AppResult<Feedback> {
        self.feedback
            .find_by_id(feedback_id)
            .await?
            .filter(|feedback| can_view_feedback_item(identity, feedback))
            .ok_or_else(feedback_not_found)
    }

    async fn list_scope(&self, scope: &FeedbackScope) -> AppResult<Vec<FeedbackView>> {
        if matches!(scope, FeedbackScope::Nothing) {
            return Ok(Vec::new());
        }

        let names = self.author_names().await?;
        let views = self
            .feedback
            .list()
            .await?
            .into_iter()
            .filter(|item| scope.admits(item))
            .map(|feedback| FeedbackView {
                from_user_name: author_name(&names, &feedback.from_user_id),
                feedback,
            })
            .collect();

        Ok(views)
    }

    async fn enrich_one(&self, feedback: Feedback) -> AppResult<FeedbackView> {
        let from_user_name = self
            .profiles
            .find_by_id(&feedback.from_user_id)
            .await?
            .map(|profile| profile.full_name())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_owned());

        Ok(FeedbackView {
            feedback,
            from_user_name,
        })
    }

    async fn author_names(&self) -> AppResult<HashMap<String, String>> {
        Ok(self
            .profiles
            .list()
            .await?
            .into_iter()
            .map(|profile| (profile.id.clone(), profile.full_name()))
            .collect())
    }
}

fn author_name(names: &HashMap<String, String>, author_id: &str) -> String {
    names
        .get(author_id)
        .cloned()
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_owned())
}

fn feedback_not_found() -> AppError {
    AppError::NotFound("Feedback not found".to_owned())
}
