//! Absence requests filed by employees and decided by managers.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use newwork_core::{AppError, AppResult};
use newwork_domain::{AbsenceRequest, AbsenceStatus, Permission, UserIdentity};

use crate::ProfileRepository;
use crate::authorization::{require_any_permission, require_permission};

/// Input for a new absence request.
#[derive(Debug, Clone, Default)]
pub struct AbsenceInput {
    /// First day of absence.
    pub start_date: Option<NaiveDate>,
    /// Last day of absence, inclusive.
    pub end_date: Option<NaiveDate>,
    /// Reason for the absence.
    pub reason: Option<String>,
}

/// Absence request with the employee it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamAbsence {
    /// Owning employee id.
    pub employee_id: String,
    /// Owning employee display name.
    pub employee_name: String,
    /// Owning employee department.
    pub department: String,
    /// The request.
    pub request: AbsenceRequest,
}

/// Application service for absence requests.
#[derive(Clone)]
pub struct AbsenceService {
    profiles: Arc<dyn ProfileRepository>,
}

impl AbsenceService {
    /// Creates an absence service.
    #[must_use]
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    /// Lists the caller's own requests.
    pub async fn my_requests(&self, identity: &UserIdentity) -> AppResult<Vec<AbsenceRequest>> {
        require_any_permission(
            identity,
            &[Permission::AbsenceRequest, Permission::AbsenceViewTeam],
        )?;

        let profile = self
            .profiles
            .find_by_id(identity.id())
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_owned()))?;

        Ok(profile.absence_requests)
    }

    /// Files a pending request on the caller's profile.
    pub async fn request(
        &self,
        identity: &UserIdentity,
        input: AbsenceInput,
    ) -> AppResult<AbsenceRequest> {
        require_permission(identity, Permission::AbsenceRequest)?;

        let (Some(start_date), Some(end_date)) = (input.start_date, input.end_date) else {
            return Err(AppError::Validation(
                "Start date and end date are required".to_owned(),
            ));
        };

        let id = self.profiles.next_absence_id().await?;
        let request = AbsenceRequest::new_pending(
            id,
            start_date,
            end_date,
            input.reason.unwrap_or_default(),
            Utc::now(),
        )?;

        if !self
            .profiles
            .append_absence(identity.id(), request.clone())
            .await?
        {
            return Err(AppError::NotFound("Profile not found".to_owned()));
        }

        tracing::info!(
            user_id = identity.id(),
            absence_id = %request.id,
            days = request.day_count(),
            "absence requested"
        );
        Ok(request)
    }

    /// Lists every request in the directory, optionally by status.
    pub async fn team_requests(
        &self,
        identity: &UserIdentity,
        status: Option<AbsenceStatus>,
    ) -> AppResult<Vec<TeamAbsence>> {
        require_permission(identity, Permission::AbsenceViewTeam)?;

        let mut rows = Vec::new();
        for profile in self.profiles.list().await? {
            let employee_name = profile.full_name();
            for request in profile.absence_requests {
                if status.is_some_and(|status| request.status != status) {
                    continue;
                }

                rows.push(TeamAbsence {
                    employee_id: profile.id.clone(),
                    employee_name: employee_name.clone(),
                    department: profile.department.clone(),
                    request,
                });
            }
        }

        Ok(rows)
    }

    /// Approves or rejects a request.
    pub async fn decide(
        &self,
        identity: &UserIdentity,
        absence_id: &str,
        status: AbsenceStatus,
    ) -> AppResult<AbsenceRequest> {
        require_permission(identity, Permission::AbsenceApprove)?;

        if !status.is_decision() {
            return Err(AppError::Validation(
                "Status must be APPROVED or REJECTED".to_owned(),
            ));
        }

        let request = self
            .profiles
            .update_absence_status(absence_id, status, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound("Absence request not found".to_owned()))?;

        tracing::info!(
            user_id = identity.id(),
            absence_id,
            status = status.as_str(),
            "absence decided"
        );
        Ok(request)
    }
}
