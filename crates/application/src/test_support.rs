use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use newwork_core::{AppResult, SessionToken};
use newwork_domain::{
    AbsenceRequest, AbsenceStatus, EmployeeProfile, Feedback, ProfileUpdate, Role, UserIdentity,
};
use tokio::sync::Mutex;

use crate::{
    EnhancementFailure, EnhancementOutcome, FeedbackEnhancer, FeedbackRepository,
    ProfileRepository, SessionRepository,
};

pub(crate) fn profile(
    id: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
    role: Role,
    department: &str,
) -> EmployeeProfile {
    EmployeeProfile {
        id: id.to_owned(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        role,
        position: format!("{department} Specialist"),
        department: department.to_owned(),
        profile_image: None,
        bio: String::new(),
        skills: Vec::new(),
        phone: "+1-555-0100".to_owned(),
        salary: 75_000,
        start_date: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap_or_default(),
        employee_number: format!("EMP00{id}"),
        address: "1 Main Street".to_owned(),
        emergency_contact: None,
        work_history: Vec::new(),
        absence_requests: Vec::new(),
        performance_rating: None,
        certifications: Vec::new(),
    }
}

pub(crate) fn identity_for(profile: &EmployeeProfile) -> UserIdentity {
    UserIdentity::new(
        profile.id.clone(),
        profile.email.clone(),
        profile.first_name.clone(),
        profile.last_name.clone(),
        profile.role,
    )
}

pub(crate) fn sarah() -> EmployeeProfile {
    profile("1", "Sarah", "Johnson", "manager@newwork.com", Role::Manager, "Human Resources")
}

pub(crate) fn michael() -> EmployeeProfile {
    profile("2", "Michael", "Chen", "employee@newwork.com", Role::Employee, "Engineering")
}

pub(crate) fn emily() -> EmployeeProfile {
    profile("3", "Emily", "Davis", "coworker@newwork.com", Role::Coworker, "Design")
}

pub(crate) fn john() -> EmployeeProfile {
    profile("4", "John", "Smith", "john.smith@newwork.com", Role::Manager, "Engineering")
}

pub(crate) fn feedback(id: &str, from: &str, to: &str, content: &str) -> Feedback {
    let created_at = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap_or_default();
    Feedback {
        id: id.to_owned(),
        from_user_id: from.to_owned(),
        to_user_id: to.to_owned(),
        content: content.to_owned(),
        enhanced_content: None,
        is_enhanced: false,
        created_at,
        updated_at: created_at,
    }
}

#[derive(Default)]
pub(crate) struct FakeProfileRepository {
    profiles: Mutex<Vec<EmployeeProfile>>,
    next_absence_id: AtomicU64,
}

impl FakeProfileRepository {
    pub(crate) fn seeded() -> Self {
        Self {
            profiles: Mutex::new(vec![sarah(), michael(), emily(), john()]),
            next_absence_id: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl ProfileRepository for FakeProfileRepository {
    async fn find_by_id(&self, profile_id: &str) -> AppResult<Option<EmployeeProfile>> {
        Ok(self
            .profiles
            .lock()
            .await
            .iter()
            .find(|profile| profile.id == profile_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<EmployeeProfile>> {
        Ok(self
            .profiles
            .lock()
            .await
            .iter()
            .find(|profile| profile.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn list(&self) -> AppResult<Vec<EmployeeProfile>> {
        Ok(self.profiles.lock().await.clone())
    }

    async fn update(
        &self,
        profile_id: &str,
        update: ProfileUpdate,
    ) -> AppResult<Option<EmployeeProfile>> {
        let mut profiles = self.profiles.lock().await;
        Ok(profiles
            .iter_mut()
            .find(|profile| profile.id == profile_id)
            .map(|profile| {
                update.apply_to(profile);
                profile.clone()
            }))
    }

    async fn next_absence_id(&self) -> AppResult<String> {
        let next = self.next_absence_id.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(format!("a{next}"))
    }

    async fn append_absence(&self, profile_id: &str, request: AbsenceRequest) -> AppResult<bool> {
        let mut profiles = self.profiles.lock().await;
        let Some(profile) = profiles.iter_mut().find(|profile| profile.id == profile_id) else {
            return Ok(false);
        };

        profile.absence_requests.push(request);
        Ok(true)
    }

    async fn update_absence_status(
        &self,
        absence_id: &str,
        status: AbsenceStatus,
        updated_at: DateTime<Utc>,
    ) -> AppResult<Option<AbsenceRequest>> {
        let mut profiles = self.profiles.lock().await;
        Ok(profiles
            .iter_mut()
            .flat_map(|profile| profile.absence_requests.iter_mut())
            .find(|request| request.id == absence_id)
            .map(|request| {
                request.status = status;
                request.updated_at = updated_at;
                request.clone()
            }))
    }
}

#[derive(Default)]
pub(crate) struct FakeFeedbackRepository {
    items: Mutex<Vec<Feedback>>,
    next_id: AtomicU64,
}

impl FakeFeedbackRepository {
    /// Authors 1-4 exist in the seeded profiles; author 9 does not.
    pub(crate) fn seeded() -> Self {
        Self {
            items: Mutex::new(vec![
                feedback("f1", "1", "2", "Strong delivery on the API work."),
                feedback("f2", "2", "1", "Thanks for the clear onboarding."),
                feedback("f3", "3", "2", "Great collaboration on the redesign."),
                feedback("f4", "4", "2", "Keep mentoring the juniors."),
                feedback("f5", "9", "3", "Lovely prototypes."),
            ]),
            next_id: AtomicU64::new(5),
        }
    }
}

#[async_trait]
impl FeedbackRepository for FakeFeedbackRepository {
    async fn list(&self) -> AppResult<Vec<Feedback>> {
        Ok(self.items.lock().await.clone())
    }

    async fn find_by_id(&self, feedback_id: &str) -> AppResult<Option<Feedback>> {
        Ok(self
            .items
            .lock()
            .await
            .iter()
            .find(|item| item.id == feedback_id)
            .cloned())
    }

    async fn next_id(&self) -> AppResult<String> {
        let next = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(format!("f{next}"))
    }

    async fn append(&self, feedback: Feedback) -> AppResult<()> {
        self.items.lock().await.push(feedback);
        Ok(())
    }

    async fn replace(&self, feedback: Feedback) -> AppResult<bool> {
        let mut items = self.items.lock().await;
        let Some(slot) = items.iter_mut().find(|item| item.id == feedback.id) else {
            return Ok(false);
        };

        *slot = feedback;
        Ok(true)
    }

    async fn remove(&self, feedback_id: &str) -> AppResult<bool> {
        let mut items = self.items.lock().await;
        let before = items.len();
        items.retain(|item| item.id != feedback_id);
        Ok(items.len() != before)
    }
}

#[derive(Default)]
pub(crate) struct FakeSessionRepository {
    sessions: Mutex<HashMap<SessionToken, UserIdentity>>,
}

#[async_trait]
impl SessionRepository for FakeSessionRepository {
    async fn insert(&self, token: SessionToken, identity: UserIdentity) -> AppResult<()> {
        self.sessions.lock().await.insert(token, identity);
        Ok(())
    }

    async fn find(&self, token: &SessionToken) -> AppResult<Option<UserIdentity>> {
        Ok(self.sessions.lock().await.get(token).cloned())
    }

    async fn remove(&self, token: &SessionToken) -> AppResult<bool> {
        Ok(self.sessions.lock().await.remove(token).is_some())
    }
}

/// Enhancer that either uppercases its input or always fails.
pub(crate) struct FakeEnhancer {
    pub(crate) succeed: bool,
    pub(crate) calls: Mutex<Vec<(String, Option<String>)>>,
}

impl FakeEnhancer {
    pub(crate) fn succeeding() -> Self {
        Self {
            succeed: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            succeed: false,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl FeedbackEnhancer for FakeEnhancer {
    async fn enhance(&self, text: &str, employee_name: Option<&str>) -> EnhancementOutcome {
        self.calls
            .lock()
            .await
            .push((text.to_owned(), employee_name.map(str::to_owned)));

        if self.succeed {
            EnhancementOutcome::Enhanced(text.to_uppercase())
        } else {
            EnhancementOutcome::fallback(text, EnhancementFailure::Status(503))
        }
    }
}
