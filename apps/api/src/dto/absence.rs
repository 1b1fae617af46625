use std::str::FromStr;

use chrono::NaiveDate;
use newwork_application::{AbsenceInput, TeamAbsence};
use newwork_core::{AppError, AppResult};
use newwork_domain::{AbsenceRequest, AbsenceStatus};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::common::timestamp;

/// API representation of an absence request.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/absence-request-response.ts"
)]
pub struct AbsenceRequestResponse {
    pub id: String,
    /// `YYYY-MM-DD`.
    pub start_date: String,
    /// `YYYY-MM-DD`, inclusive.
    pub end_date: String,
    pub reason: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AbsenceRequest> for AbsenceRequestResponse {
    fn from(value: AbsenceRequest) -> Self {
        Self {
            id: value.id,
            start_date: value.start_date.to_string(),
            end_date: value.end_date.to_string(),
            reason: value.reason,
            status: value.status.as_str().to_owned(),
            created_at: timestamp(value.created_at),
            updated_at: timestamp(value.updated_at),
        }
    }
}

/// Single absence request, optionally with a status message.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/absence-item-response.ts"
)]
pub struct AbsenceItemResponse {
    pub request: AbsenceRequestResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub message: Option<String>,
}

/// The caller's own absence requests.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/absence-list-response.ts"
)]
pub struct AbsenceListResponse {
    pub requests: Vec<AbsenceRequestResponse>,
    pub total: usize,
}

impl From<Vec<AbsenceRequest>> for AbsenceListResponse {
    fn from(value: Vec<AbsenceRequest>) -> Self {
        let requests: Vec<AbsenceRequestResponse> = value
            .into_iter()
            .map(AbsenceRequestResponse::from)
            .collect();
        Self {
            total: requests.len(),
            requests,
        }
    }
}

/// Absence request annotated with its owner.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/team-absence-response.ts"
)]
pub struct TeamAbsenceResponse {
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub request: AbsenceRequestResponse,
}

impl From<TeamAbsence> for TeamAbsenceResponse {
    fn from(value: TeamAbsence) -> Self {
        Self {
            employee_id: value.employee_id,
            employee_name: value.employee_name,
            department: value.department,
            request: value.request.into(),
        }
    }
}

/// Every absence request visible to the reviewer.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/team-absence-list-response.ts"
)]
pub struct TeamAbsenceListResponse {
    pub requests: Vec<TeamAbsenceResponse>,
    pub total: usize,
}

impl From<Vec<TeamAbsence>> for TeamAbsenceListResponse {
    fn from(value: Vec<TeamAbsence>) -> Self {
        let requests: Vec<TeamAbsenceResponse> =
            value.into_iter().map(TeamAbsenceResponse::from).collect();
        Self {
            total: requests.len(),
            requests,
        }
    }
}

/// Incoming payload for a new absence request.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-absence-request.ts"
)]
pub struct CreateAbsenceRequest {
    /// `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`, inclusive.
    pub end_date: Option<String>,
    pub reason: Option<String>,
}

impl CreateAbsenceRequest {
    /// Parses the calendar dates. Absent or blank dates stay `None`.
    pub fn into_input(self) -> AppResult<AbsenceInput> {
        Ok(AbsenceInput {
            start_date: parse_date(self.start_date)?,
            end_date: parse_date(self.end_date)?,
            reason: self.reason,
        })
    }
}

fn parse_date(value: Option<String>) -> AppResult<Option<NaiveDate>> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(|value| {
            NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
                AppError::Validation(format!("invalid date '{value}', expected YYYY-MM-DD"))
            })
        })
        .transpose()
}

/// Incoming payload for an approval decision.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/decide-absence-request.ts"
)]
pub struct DecideAbsenceRequest {
    /// `APPROVED` or `REJECTED`.
    pub status: Option<String>,
}

impl DecideAbsenceRequest {
    pub fn status(&self) -> AppResult<AbsenceStatus> {
        self.status
            .as_deref()
            .and_then(|value| AbsenceStatus::from_str(value).ok())
            .ok_or_else(invalid_decision)
    }
}

/// Query string for the team listing.
#[derive(Debug, Default, Deserialize)]
pub struct TeamAbsenceQuery {
    pub status: Option<String>,
}

impl TeamAbsenceQuery {
    pub fn status(&self) -> AppResult<Option<AbsenceStatus>> {
        self.status
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .map(AbsenceStatus::from_str)
            .transpose()
    }
}

fn invalid_decision() -> AppError {
    AppError::Validation("Status must be APPROVED or REJECTED".to_owned())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use newwork_core::AppError;
    use newwork_domain::AbsenceStatus;

    use super::{CreateAbsenceRequest, DecideAbsenceRequest, TeamAbsenceQuery};

    #[test]
    fn blank_dates_are_treated_as_missing() {
        let input = CreateAbsenceRequest {
            start_date: Some("2024-05-01".to_owned()),
            end_date: Some("  ".to_owned()),
            reason: Some("Conference".to_owned()),
        }
        .into_input()
        .unwrap_or_else(|_| unreachable!());

        assert_eq!(input.start_date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(input.end_date, None);
    }

    #[test]
    fn malformed_dates_are_rejected() {
        let result = CreateAbsenceRequest {
            start_date: Some("05/01/2024".to_owned()),
            ..CreateAbsenceRequest::default()
        }
        .into_input();

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn decision_status_is_case_insensitive() {
        let request = DecideAbsenceRequest {
            status: Some("approved".to_owned()),
        };
        assert!(matches!(request.status(), Ok(AbsenceStatus::Approved)));

        let missing = DecideAbsenceRequest::default();
        assert!(matches!(
            missing.status(),
            Err(AppError::Validation(message)) if message == "Status must be APPROVED or REJECTED"
        ));
    }

    #[test]
    fn team_filter_accepts_blank_and_rejects_unknown() {
        let blank = TeamAbsenceQuery {
            status: Some(String::new()),
        };
        assert!(matches!(blank.status(), Ok(None)));

        let unknown = TeamAbsenceQuery {
            status: Some("LATE".to_owned()),
        };
        assert!(matches!(unknown.status(), Err(AppError::Validation(_))));
    }
}
