use async_trait::async_trait;
use chrono::{DateTime, Utc};
use newwork_application::ProfileRepository;
use newwork_core::AppResult;
use newwork_domain::{AbsenceRequest, AbsenceStatus, EmployeeProfile, ProfileUpdate};
use tokio::sync::RwLock;

use crate::id_sequence::IdSequence;

/// In-memory employee directory.
///
/// Profiles keep their insertion order, which is the directory order.
#[derive(Debug)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<Vec<EmployeeProfile>>,
    absence_ids: IdSequence,
}

impl InMemoryProfileRepository {
    /// Creates a repository holding `profiles`.
    #[must_use]
    pub fn new(profiles: Vec<EmployeeProfile>) -> Self {
        let absence_ids = IdSequence::starting_after(
            "",
            profiles
                .iter()
                .flat_map(|profile| profile.absence_requests.iter())
                .map(|request| request.id.as_str()),
        );

        Self {
            profiles: RwLock::new(profiles),
            absence_ids,
        }
    }
}

impl Default for InMemoryProfileRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_id(&self, profile_id: &str) -> AppResult<Option<EmployeeProfile>> {
        Ok(self
            .profiles
            .read()
            .await
            .iter()
            .find(|profile| profile.id == profile_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<EmployeeProfile>> {
        Ok(self
            .profiles
            .read()
            .await
            .iter()
            .find(|profile| profile.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn list(&self) -> AppResult<Vec<EmployeeProfile>> {
        Ok(self.profiles.read().await.clone())
    }

    async fn update(
        &self,
        profile_id: &str,
        update: ProfileUpdate,
    ) -> AppResult<Option<EmployeeProfile>> {
        let mut profiles = self.profiles.write().await;
        let Some(profile) = profiles.iter_mut().find(|profile| profile.id == profile_id) else {
            return Ok(None);
        };

        update.apply_to(profile);
        Ok(Some(profile.clone()))
    }

    async fn next_absence_id(&self) -> AppResult<String> {
        Ok(self.absence_ids.next_id())
    }

    async fn append_absence(&self, profile_id: &str, request: AbsenceRequest) -> AppResult<bool> {
        let mut profiles = self.profiles.write().await;
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
        let mut profiles = self.profiles.write().await;
        let Some(request) = profiles
            .iter_mut()
            .flat_map(|profile| profile.absence_requests.iter_mut())
            .find(|request| request.id == absence_id)
        else {
            return Ok(None);
        };

        request.status = status;
        request.updated_at = updated_at;
        Ok(Some(request.clone()))
    }
}
