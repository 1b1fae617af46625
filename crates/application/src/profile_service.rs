//! Profile reads, edits and directory listings.

use std::collections::HashMap;
use std::sync::Arc;

use newwork_core::{AppError, AppResult};
use newwork_domain::{
    EmployeeProfile, Permission, ProfileEditDenial, ProfileFilter, ProfileUpdate, ProfileView,
    PublicProfile, UserIdentity, check_profile_edit, has_permission, project_profile,
};

use crate::authorization::require_permission;
use crate::{FeedbackRepository, ProfileRepository};

/// Profile projection returned for a single lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileLookup {
    /// Projection granted to the caller.
    pub view: ProfileView,
    /// Number of feedback items the profile has received.
    pub feedback_count: usize,
}

/// Row of the full directory listing.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryEntry {
    /// Complete profile.
    pub profile: EmployeeProfile,
    /// Number of feedback items received.
    pub feedback_count: usize,
}

/// Row of the public directory listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicDirectoryEntry {
    /// Discovery fields.
    pub profile: PublicProfile,
    /// Number of feedback items received.
    pub feedback_count: usize,
    /// Whether the row is the caller's own profile.
    pub is_current_user: bool,
}

/// Application service for employee profiles.
#[derive(Clone)]
pub struct ProfileService {
    profiles: Arc<dyn ProfileRepository>,
    feedback: Arc<dyn FeedbackRepository>,
}

impl ProfileService {
    /// Creates a profile service.
    #[must_use]
    pub fn new(profiles: Arc<dyn ProfileRepository>, feedback: Arc<dyn FeedbackRepository>) -> Self {
        Self { profiles, feedback }
    }

    /// Returns the projection of a profile visible to the caller.
    pub async fn get_profile(
        &self,
        identity: &UserIdentity,
        profile_id: &str,
    ) -> AppResult<ProfileLookup> {
        let profile = self
            .profiles
            .find_by_id(profile_id)
            .await?
            .ok_or_else(profile_not_found)?;

        let view = project_profile(identity, &profile).ok_or_else(|| {
            AppError::forbidden(
                "Access denied",
                [
                    Permission::ProfileReadAll.as_str(),
                    Permission::ProfileReadPublic.as_str(),
                ],
            )
        })?;

        let feedback_count = self
            .received_counts()
            .await?
            .get(profile_id)
            .copied()
            .unwrap_or_default();

        Ok(ProfileLookup {
            view,
            feedback_count,
        })
    }

    /// Applies a partial update after both edit gates pass.
    pub async fn update_profile(
        &self,
        identity: &UserIdentity,
        profile_id: &str,
        update: ProfileUpdate,
    ) -> AppResult<EmployeeProfile> {
        check_profile_edit(identity, profile_id, &update).map_err(|denial| {
            tracing::info!(
                user_id = identity.id(),
                profile_id,
                ?denial,
                "profile edit denied"
            );
            let message = match denial {
                ProfileEditDenial::NotEditable => "Access denied",
                ProfileEditDenial::SalaryNotPermitted => "Insufficient permissions to edit salary",
            };
            AppError::forbidden(message, [denial.required().as_str()])
        })?;
        update.validate()?;

        let updated = self
            .profiles
            .update(profile_id, update)
            .await?
            .ok_or_else(profile_not_found)?;

        tracing::info!(user_id = identity.id(), profile_id, "profile updated");
        Ok(updated)
    }

    /// Lists complete profiles for callers holding `read_all`.
    pub async fn list_all(
        &self,
        identity: &UserIdentity,
        filter: &ProfileFilter,
    ) -> AppResult<Vec<DirectoryEntry>> {
        require_permission(identity, Permission::ProfileReadAll)?;

        let counts = self.received_counts().await?;
        let entries = self
            .profiles
            .list()
            .await?
            .into_iter()
            .filter(|profile| filter.matches(profile))
            .map(|profile| DirectoryEntry {
                feedback_count: counts.get(&profile.id).copied().unwrap_or_default(),
                profile,
            })
            .collect();

        Ok(entries)
    }

    /// Lists public profiles for callers limited to `read_public`.
    pub async fn browse(
        &self,
        identity: &UserIdentity,
        filter: &ProfileFilter,
    ) -> AppResult<Vec<PublicDirectoryEntry>> {
        if has_permission(identity, Permission::ProfileReadAll) {
            return Err(AppError::Validation(
                "Use /list/all endpoint for full access".to_owned(),
            ));
        }
        require_permission(identity, Permission::ProfileReadPublic)?;

        let counts = self.received_counts().await?;
        let entries = self
            .profiles
            .list()
            .await?
            .iter()
            .filter(|profile| filter.matches(profile))
            .map(|profile| PublicDirectoryEntry {
                feedback_count: counts.get(&profile.id).copied().unwrap_or_default(),
                is_current_user: profile.id == identity.id(),
                profile: PublicProfile::from(profile),
            })
            .collect();

        Ok(entries)
    }

    /// Lists distinct departments in first-seen order.
    pub async fn departments(&self, identity: &UserIdentity) -> AppResult<Vec<String>> {
        require_permission(identity, Permission::ProfileReadAll)?;

        let mut departments: Vec<String> = Vec::new();
        for profile in self.profiles.list().await? {
            if !departments.contains(&profile.department) {
                departments.push(profile.department);
            }
        }

        Ok(departments)
    }

    async fn received_counts(&self) -> AppResult<HashMap<String, usize>> {
        let mut counts = HashMap::new();
        for item in self.feedback.list().await? {
            *counts.entry(item.to_user_id).or_insert(0) += 1;
        }

        Ok(counts)
    }
}

fn profile_not_found() -> AppError {
    AppError::NotFound("Profile not found".to_owned())
}

#[cfg(test)]
mod tests;
