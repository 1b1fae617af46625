use newwork_application::{DirectoryEntry, PublicDirectoryEntry};
use newwork_domain::{
    EmergencyContact, EmployeeProfile, ProfileFilter, ProfileUpdate, ProfileView, PublicProfile,
    SalaryChange, WorkHistoryEntry,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;

use super::AbsenceRequestResponse;

/// Emergency contact as exchanged with clients.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/emergency-contact.ts"
)]
pub struct EmergencyContactPayload {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

impl From<EmergencyContact> for EmergencyContactPayload {
    fn from(value: EmergencyContact) -> Self {
        Self {
            name: value.name,
            phone: value.phone,
            relationship: value.relationship,
        }
    }
}

impl From<EmergencyContactPayload> for EmergencyContact {
    fn from(value: EmergencyContactPayload) -> Self {
        Self {
            name: value.name,
            phone: value.phone,
            relationship: value.relationship,
        }
    }
}

/// Previous employment entry as exchanged with clients.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/work-history-entry.ts"
)]
pub struct WorkHistoryPayload {
    pub company: String,
    pub position: String,
    pub duration: String,
}

impl From<WorkHistoryEntry> for WorkHistoryPayload {
    fn from(value: WorkHistoryEntry) -> Self {
        Self {
            company: value.company,
            position: value.position,
            duration: value.duration,
        }
    }
}

impl From<WorkHistoryPayload> for WorkHistoryEntry {
    fn from(value: WorkHistoryPayload) -> Self {
        Self {
            company: value.company,
            position: value.position,
            duration: value.duration,
        }
    }
}

/// Complete profile, including contact and compensation data.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/full-profile-response.ts"
)]
pub struct FullProfileResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub position: String,
    pub department: String,
    pub profile_image: Option<String>,
    pub bio: String,
    pub skills: Vec<String>,
    pub phone: String,
    pub salary: u64,
    pub start_date: String,
    pub employee_id: String,
    pub address: String,
    pub emergency_contact: Option<EmergencyContactPayload>,
    pub work_history: Vec<WorkHistoryPayload>,
    pub absence_requests: Vec<AbsenceRequestResponse>,
    pub performance_rating: Option<f32>,
    pub certifications: Vec<String>,
}

impl From<EmployeeProfile> for FullProfileResponse {
    fn from(value: EmployeeProfile) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            role: value.role.as_str().to_owned(),
            position: value.position,
            department: value.department,
            profile_image: value.profile_image,
            bio: value.bio,
            skills: value.skills,
            phone: value.phone,
            salary: value.salary,
            start_date: value.start_date.to_string(),
            employee_id: value.employee_number,
            address: value.address,
            emergency_contact: value.emergency_contact.map(EmergencyContactPayload::from),
            work_history: value
                .work_history
                .into_iter()
                .map(WorkHistoryPayload::from)
                .collect(),
            absence_requests: value
                .absence_requests
                .into_iter()
                .map(AbsenceRequestResponse::from)
                .collect(),
            performance_rating: value.performance_rating,
            certifications: value.certifications,
        }
    }
}

/// Public slice of a profile.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/public-profile-response.ts"
)]
pub struct PublicProfileResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    pub profile_image: Option<String>,
    pub bio: String,
    pub skills: Vec<String>,
    pub absence_requests: Vec<AbsenceRequestResponse>,
}

impl From<PublicProfile> for PublicProfileResponse {
    fn from(value: PublicProfile) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            position: value.position,
            department: value.department,
            profile_image: value.profile_image,
            bio: value.bio,
            skills: value.skills,
            absence_requests: value
                .absence_requests
                .into_iter()
                .map(AbsenceRequestResponse::from)
                .collect(),
        }
    }
}

/// Either projection of a profile; clients tell them apart by the presence
/// of `salary`.
#[derive(Debug, Serialize, TS)]
#[serde(untagged)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/profile-body.ts"
)]
pub enum ProfileBody {
    Full(FullProfileResponse),
    Public(PublicProfileResponse),
}

impl From<ProfileView> for ProfileBody {
    fn from(value: ProfileView) -> Self {
        match value {
            ProfileView::Full(profile) => Self::Full(profile.into()),
            ProfileView::Public(profile) => Self::Public(profile.into()),
        }
    }
}

/// Single profile lookup result.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/profile-response.ts"
)]
pub struct ProfileResponse {
    pub profile: ProfileBody,
    pub feedback_count: usize,
}

/// Result of a successful profile edit.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-profile-response.ts"
)]
pub struct UpdateProfileResponse {
    pub profile: ProfileBody,
    pub message: String,
}

/// Partial profile edit. Fields left out stay unchanged; `id` and `role`
/// are not editable and are ignored when sent.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-profile-request.ts"
)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub phone: Option<String>,
    /// Kept as raw JSON so a present key is gated even when null or malformed.
    #[serde(default, deserialize_with = "present_value")]
    #[ts(type = "number | null")]
    pub salary: Option<Value>,
    pub address: Option<String>,
    pub emergency_contact: Option<EmergencyContactPayload>,
    pub work_history: Option<Vec<WorkHistoryPayload>>,
    pub performance_rating: Option<f32>,
    pub certifications: Option<Vec<String>>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(value: UpdateProfileRequest) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            position: value.position,
            department: value.department,
            profile_image: value.profile_image,
            bio: value.bio,
            skills: value.skills,
            phone: value.phone,
            salary: value.salary.map(|raw| {
                raw.as_u64()
                    .map_or(SalaryChange::Malformed, SalaryChange::Amount)
            }),
            address: value.address,
            emergency_contact: value.emergency_contact.map(EmergencyContact::from),
            work_history: value
                .work_history
                .map(|entries| entries.into_iter().map(WorkHistoryEntry::from).collect()),
            performance_rating: value.performance_rating,
            certifications: value.certifications,
        }
    }
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Query string shared by both directory listings.
#[derive(Debug, Default, Deserialize)]
pub struct DirectoryQuery {
    pub search: Option<String>,
    pub department: Option<String>,
}

impl From<DirectoryQuery> for ProfileFilter {
    fn from(value: DirectoryQuery) -> Self {
        Self {
            search: value.search.filter(|search| !search.trim().is_empty()),
            department: value.department.filter(|department| !department.trim().is_empty()),
        }
    }
}

/// Directory row for reviewers.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/directory-row-response.ts"
)]
pub struct DirectoryRowResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub salary: u64,
    pub start_date: String,
    pub employee_id: String,
    pub performance_rating: Option<f32>,
    pub profile_image: Option<String>,
    pub feedback_count: usize,
}

impl From<DirectoryEntry> for DirectoryRowResponse {
    fn from(value: DirectoryEntry) -> Self {
        let profile = value.profile;
        Self {
            id: profile.id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            position: profile.position,
            department: profile.department,
            email: profile.email,
            phone: profile.phone,
            salary: profile.salary,
            start_date: profile.start_date.to_string(),
            employee_id: profile.employee_number,
            performance_rating: profile.performance_rating,
            profile_image: profile.profile_image,
            feedback_count: value.feedback_count,
        }
    }
}

/// Full directory listing.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/directory-response.ts"
)]
pub struct DirectoryResponse {
    pub profiles: Vec<DirectoryRowResponse>,
    pub total: usize,
}

/// Directory row restricted to public fields.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/public-directory-row-response.ts"
)]
pub struct PublicDirectoryRowResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    pub profile_image: Option<String>,
    pub bio: String,
    pub skills: Vec<String>,
    pub feedback_count: usize,
    pub is_current_user: bool,
}

impl From<PublicDirectoryEntry> for PublicDirectoryRowResponse {
    fn from(value: PublicDirectoryEntry) -> Self {
        let profile = value.profile;
        Self {
            id: profile.id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            position: profile.position,
            department: profile.department,
            profile_image: profile.profile_image,
            bio: profile.bio,
            skills: profile.skills,
            feedback_count: value.feedback_count,
            is_current_user: value.is_current_user,
        }
    }
}

/// Public directory listing.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/public-directory-response.ts"
)]
pub struct PublicDirectoryResponse {
    pub profiles: Vec<PublicDirectoryRowResponse>,
    pub total: usize,
}

/// Distinct department names.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/departments-response.ts"
)]
pub struct DepartmentsResponse {
    pub departments: Vec<String>,
}

#[cfg(test)]
mod tests {
    use newwork_domain::{ProfileUpdate, SalaryChange};
    use serde_json::json;

    use super::UpdateProfileRequest;

    fn salary_of(body: serde_json::Value) -> Option<SalaryChange> {
        let request: UpdateProfileRequest =
            serde_json::from_value(body).unwrap_or_else(|_| unreachable!());
        ProfileUpdate::from(request).salary
    }

    #[test]
    fn absent_salary_is_untouched() {
        assert_eq!(salary_of(json!({ "bio": "Hi" })), None);
    }

    #[test]
    fn whole_salary_is_an_amount() {
        assert_eq!(
            salary_of(json!({ "salary": 99_999 })),
            Some(SalaryChange::Amount(99_999))
        );
    }

    #[test]
    fn present_but_unusable_salary_is_malformed() {
        for raw in [json!(null), json!("99999"), json!(99_999.5), json!(-1)] {
            assert_eq!(
                salary_of(json!({ "salary": raw })),
                Some(SalaryChange::Malformed)
            );
        }
    }
}
