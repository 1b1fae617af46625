use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use newwork_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an absence request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AbsenceStatus {
    /// Awaiting a manager decision.
    Pending,
    /// Approved by a manager.
    Approved,
    /// Rejected by a manager.
    Rejected,
}

impl AbsenceStatus {
    /// Returns the stable wire value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Returns whether a manager decision may move a request into this state.
    #[must_use]
    pub fn is_decision(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl FromStr for AbsenceStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(AppError::Validation(format!(
                "unknown absence status '{value}'"
            ))),
        }
    }
}

/// Absence request owned by one employee profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsenceRequest {
    /// Stable request id.
    pub id: String,
    /// First day of absence.
    pub start_date: NaiveDate,
    /// Last day of absence, inclusive.
    pub end_date: NaiveDate,
    /// Free-form reason supplied by the employee.
    pub reason: String,
    /// Current status.
    pub status: AbsenceStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last status or content change.
    pub updated_at: DateTime<Utc>,
}

impl AbsenceRequest {
    /// Creates a pending request after checking the date range and reason.
    pub fn new_pending(
        id: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: impl Into<String>,
        now: DateTime<Utc>,
    ) -> AppResult<Self> {
        if end_date < start_date {
            return Err(AppError::Validation(
                "End date must not be before start date".to_owned(),
            ));
        }

        let reason = reason.into();
        if reason.trim().is_empty() {
            return Err(AppError::Validation("Reason is required".to_owned()));
        }

        Ok(Self {
            id: id.into(),
            start_date,
            end_date,
            reason,
            status: AbsenceStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Number of calendar days covered, inclusive.
    #[must_use]
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
