use std::sync::Arc;
use std::time::Instant;

use newwork_application::{
    AbsenceService, AuthService, FeedbackEnhancer, FeedbackService, ProfileService,
    SessionService,
};
use newwork_domain::{EmployeeProfile, Feedback};
use newwork_infrastructure::{
    InMemoryFeedbackRepository, InMemoryProfileRepository, InMemorySessionRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub session_service: SessionService,
    pub auth_service: AuthService,
    pub profile_service: ProfileService,
    pub feedback_service: FeedbackService,
    pub absence_service: AbsenceService,
    pub app_env: String,
    pub started_at: Instant,
}

impl AppState {
    /// Wires the services over fresh in-memory stores holding the given
    /// directory.
    pub fn in_memory(
        profiles: Vec<EmployeeProfile>,
        feedback: Vec<Feedback>,
        enhancer: Arc<dyn FeedbackEnhancer>,
        app_env: impl Into<String>,
    ) -> Self {
        let profile_repository = Arc::new(InMemoryProfileRepository::new(profiles));
        let feedback_repository = Arc::new(InMemoryFeedbackRepository::new(feedback));
        let session_service = SessionService::new(Arc::new(InMemorySessionRepository::new()));

        Self {
            auth_service: AuthService::new(profile_repository.clone(), session_service.clone()),
            profile_service: ProfileService::new(
                profile_repository.clone(),
                feedback_repository.clone(),
            ),
            feedback_service: FeedbackService::new(
                feedback_repository,
                profile_repository.clone(),
                enhancer,
            ),
            absence_service: AbsenceService::new(profile_repository),
            session_service,
            app_env: app_env.into(),
            started_at: Instant::now(),
        }
    }
}
