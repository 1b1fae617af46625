use async_trait::async_trait;
use chrono::{DateTime, Utc};
use newwork_core::AppResult;
use newwork_domain::{AbsenceRequest, AbsenceStatus, EmployeeProfile, Feedback, ProfileUpdate};

/// Repository port for employee profiles and the absences they own.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Finds a profile by id.
    async fn find_by_id(&self, profile_id: &str) -> AppResult<Option<EmployeeProfile>>;

    /// Finds a profile by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<EmployeeProfile>>;

    /// Lists every profile in directory order.
    async fn list(&self) -> AppResult<Vec<EmployeeProfile>>;

    /// Applies a partial update and returns the stored result.
    async fn update(
        &self,
        profile_id: &str,
        update: ProfileUpdate,
    ) -> AppResult<Option<EmployeeProfile>>;

    /// Allocates an id for a new absence request.
    async fn next_absence_id(&self) -> AppResult<String>;

    /// Appends an absence to a profile. Returns `false` when the profile is missing.
    async fn append_absence(&self, profile_id: &str, request: AbsenceRequest) -> AppResult<bool>;

    /// Moves an absence to `status`, wherever it lives.
    async fn update_absence_status(
        &self,
        absence_id: &str,
        status: AbsenceStatus,
        updated_at: DateTime<Utc>,
    ) -> AppResult<Option<AbsenceRequest>>;
}

/// Repository port for peer feedback.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Lists all feedback in insertion order.
    async fn list(&self) -> AppResult<Vec<Feedback>>;

    /// Finds a feedback item by id.
    async fn find_by_id(&self, feedback_id: &str) -> AppResult<Option<Feedback>>;

    /// Allocates an id for new feedback.
    async fn next_id(&self) -> AppResult<String>;

    /// Appends a feedback item.
    async fn append(&self, feedback: Feedback) -> AppResult<()>;

    /// Replaces a stored item with the same id. Returns `false` when missing.
    async fn replace(&self, feedback: Feedback) -> AppResult<bool>;

    /// Removes an item. Returns `false` when missing.
    async fn remove(&self, feedback_id: &str) -> AppResult<bool>;
}
