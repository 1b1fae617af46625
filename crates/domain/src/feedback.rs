//! Peer feedback records and who may read them.

use chrono::{DateTime, Utc};
use newwork_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::access::has_permission;
use crate::{Permission, UserIdentity};

/// Placeholder author name for feedback whose author profile is gone.
pub const UNKNOWN_AUTHOR: &str = "Unknown User";

/// Feedback left by one employee about another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Stable feedback id.
    pub id: String,
    /// Author employee id.
    pub from_user_id: String,
    /// Recipient employee id.
    pub to_user_id: String,
    /// Text as written by the author.
    pub content: String,
    /// Polished text when enhancement succeeded.
    pub enhanced_content: Option<String>,
    /// Whether `enhanced_content` holds an enhanced rewrite.
    pub is_enhanced: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last edit timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Feedback {
    /// Creates feedback with a required, non-blank body.
    pub fn new(
        id: impl Into<String>,
        from_user_id: impl Into<String>,
        to_user_id: impl Into<String>,
        content: Option<String>,
        now: DateTime<Utc>,
    ) -> AppResult<Self> {
        let content = NonEmptyString::required(content, "Feedback content is required")?;

        Ok(Self {
            id: id.into(),
            from_user_id: from_user_id.into(),
            to_user_id: to_user_id.into(),
            content: content.into(),
            enhanced_content: None,
            is_enhanced: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Records an enhanced rewrite of the content.
    pub fn mark_enhanced(&mut self, enhanced: String) {
        self.enhanced_content = Some(enhanced);
        self.is_enhanced = true;
    }

    /// Replaces the body, discarding any earlier enhancement.
    pub fn revise(&mut self, content: Option<String>, now: DateTime<Utc>) -> AppResult<()> {
        let content = NonEmptyString::required(content, "Feedback content is required")?;
        self.content = content.into();
        self.enhanced_content = None;
        self.is_enhanced = false;
        self.updated_at = now;
        Ok(())
    }
}

/// Subset of feedback a caller may read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackScope {
    /// Everything addressed to the given profile.
    ReceivedBy(String),
    /// Only what `author` wrote about `target`.
    AuthoredToward {
        /// Caller id.
        author: String,
        /// Profile id.
        target: String,
    },
    /// No feedback at all.
    Nothing,
}

impl FeedbackScope {
    /// Returns whether `feedback` falls inside the scope.
    #[must_use]
    pub fn admits(&self, feedback: &Feedback) -> bool {
        match self {
            Self::ReceivedBy(target) => feedback.to_user_id == *target,
            Self::AuthoredToward { author, target } => {
                feedback.from_user_id == *author && feedback.to_user_id == *target
            }
            Self::Nothing => false,
        }
    }
}

/// Resolves the feedback scope for a caller looking at `profile_id`.
#[must_use]
pub fn feedback_scope_for_profile(identity: &UserIdentity, profile_id: &str) -> FeedbackScope {
    if has_permission(identity, Permission::FeedbackReadAll) {
        return FeedbackScope::ReceivedBy(profile_id.to_owned());
    }

    if !has_permission(identity, Permission::FeedbackReadOwn) {
        return FeedbackScope::Nothing;
    }

    if identity.id() == profile_id {
        FeedbackScope::ReceivedBy(profile_id.to_owned())
    } else {
        FeedbackScope::AuthoredToward {
            author: identity.id().to_owned(),
            target: profile_id.to_owned(),
        }
    }
}

/// Resolves the scope of "feedback I received".
#[must_use]
pub fn received_feedback_scope(identity: &UserIdentity) -> FeedbackScope {
    if has_permission(identity, Permission::FeedbackReadOwn) {
        FeedbackScope::ReceivedBy(identity.id().to_owned())
    } else {
        FeedbackScope::Nothing
    }
}

/// Returns whether a single feedback item is readable by the caller.
#[must_use]
pub fn can_view_feedback_item(identity: &UserIdentity, feedback: &Feedback) -> bool {
    if has_permission(identity, Permission::FeedbackReadAll) {
        return true;
    }

    has_permission(identity, Permission::FeedbackReadOwn)
        && (feedback.from_user_id == identity.id() || feedback.to_user_id == identity.id())
}

/// Returns whether the caller may remove a feedback item.
#[must_use]
pub fn can_delete_feedback_item(identity: &UserIdentity, feedback: &Feedback) -> bool {
    feedback.from_user_id == identity.id()
        || has_permission(identity, Permission::FeedbackReadAll)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{
        Feedback, FeedbackScope, can_delete_feedback_item, can_view_feedback_item,
        feedback_scope_for_profile, received_feedback_scope,
    };
    use crate::{Permission, PermissionSet, Role, UserIdentity};

    fn feedback(id: &str, from: &str, to: &str) -> Feedback {
        Feedback::new(id, from, to, Some("Great work".to_owned()), Utc::now())
            .unwrap_or_else(|_| unreachable!())
    }

    fn identity(id: &str, role: Role) -> UserIdentity {
        UserIdentity::new(id, format!("{id}@newwork.com"), "Test", "User", role)
    }

    fn corpus() -> Vec<Feedback> {
        vec![
            feedback("f1", "3", "2"),
            feedback("f2", "4", "2"),
            feedback("f3", "2", "3"),
            feedback("f4", "5", "3"),
        ]
    }

    fn visible_ids(scope: &FeedbackScope) -> Vec<String> {
        corpus()
            .into_iter()
            .filter(|item| scope.admits(item))
            .map(|item| item.id)
            .collect()
    }

    #[test]
    fn read_all_sees_everything_addressed_to_profile() {
        let scope = feedback_scope_for_profile(&identity("1", Role::Manager), "2");
        assert_eq!(visible_ids(&scope), vec!["f1", "f2"]);
    }

    #[test]
    fn recipient_sees_everything_received() {
        let scope = feedback_scope_for_profile(&identity("2", Role::Employee), "2");
        assert_eq!(visible_ids(&scope), vec!["f1", "f2"]);
    }

    #[test]
    fn third_party_sees_only_own_authored_items() {
        let scope = feedback_scope_for_profile(&identity("3", Role::Coworker), "2");
        assert_eq!(visible_ids(&scope), vec!["f1"]);
    }

    #[test]
    fn without_read_grants_scope_is_empty() {
        let caller = UserIdentity::with_permissions(
            "3",
            "x@newwork.com",
            "X",
            "Y",
            Role::Coworker,
            [Permission::FeedbackCreate].into_iter().collect::<PermissionSet>(),
        );
        assert_eq!(feedback_scope_for_profile(&caller, "2"), FeedbackScope::Nothing);
        assert_eq!(received_feedback_scope(&caller), FeedbackScope::Nothing);
    }

    #[test]
    fn single_item_visibility_follows_participation() {
        let item = feedback("f1", "3", "2");
        assert!(can_view_feedback_item(&identity("3", Role::Coworker), &item));
        assert!(can_view_feedback_item(&identity("2", Role::Employee), &item));
        assert!(!can_view_feedback_item(&identity("5", Role::Employee), &item));
        assert!(can_view_feedback_item(&identity("4", Role::Manager), &item));
    }

    #[test]
    fn delete_is_for_author_or_reviewer() {
        let item = feedback("f1", "3", "2");
        assert!(can_delete_feedback_item(&identity("3", Role::Coworker), &item));
        assert!(!can_delete_feedback_item(&identity("2", Role::Employee), &item));
        assert!(can_delete_feedback_item(&identity("4", Role::Manager), &item));
    }

    #[test]
    fn blank_content_is_rejected_and_revision_clears_enhancement() {
        assert!(Feedback::new("f9", "1", "2", Some("   ".to_owned()), Utc::now()).is_err());
        assert!(Feedback::new("f9", "1", "2", None, Utc::now()).is_err());

        let mut item = feedback("f1", "3", "2");
        item.mark_enhanced("Polished".to_owned());
        assert!(item.is_enhanced);

        assert!(item.revise(Some("Rewritten".to_owned()), Utc::now()).is_ok());
        assert_eq!(item.content, "Rewritten");
        assert!(!item.is_enhanced);
        assert!(item.enhanced_content.is_none());
    }
}
