//! Employee profiles and the field-visibility rules applied to them.

use chrono::NaiveDate;
use newwork_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::access::{can_access_resource, has_permission};
use crate::{AbsenceRequest, Permission, Role, UserIdentity};

/// Emergency contact stored on a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    /// Contact name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Relationship to the employee.
    pub relationship: String,
}

/// Previous employment entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHistoryEntry {
    /// Employer name.
    pub company: String,
    /// Position held.
    pub position: String,
    /// Human-readable period, e.g. `2015-2018`.
    pub duration: String,
}

/// Complete employee record as held by the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Stable employee id, also the identity id at login.
    pub id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Login and contact email.
    pub email: String,
    /// Role the employee signs in with.
    pub role: Role,
    /// Job title.
    pub position: String,
    /// Department name.
    pub department: String,
    /// Avatar URL.
    pub profile_image: Option<String>,
    /// Short biography.
    pub bio: String,
    /// Skills used for discovery.
    pub skills: Vec<String>,
    /// Phone number.
    pub phone: String,
    /// Yearly salary.
    pub salary: u64,
    /// First working day.
    pub start_date: NaiveDate,
    /// HR employee number.
    pub employee_number: String,
    /// Home address.
    pub address: String,
    /// Emergency contact.
    pub emergency_contact: Option<EmergencyContact>,
    /// Previous employers.
    pub work_history: Vec<WorkHistoryEntry>,
    /// Absence requests filed by the employee.
    pub absence_requests: Vec<AbsenceRequest>,
    /// Latest performance rating.
    pub performance_rating: Option<f32>,
    /// Professional certifications.
    pub certifications: Vec<String>,
}

impl EmployeeProfile {
    /// Returns `"First Last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Discovery subset of a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicProfile {
    /// Stable employee id.
    pub id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Job title.
    pub position: String,
    /// Department name.
    pub department: String,
    /// Avatar URL.
    pub profile_image: Option<String>,
    /// Short biography.
    pub bio: String,
    /// Skills used for discovery.
    pub skills: Vec<String>,
    /// Absence requests filed by the employee.
    pub absence_requests: Vec<AbsenceRequest>,
}

impl From<&EmployeeProfile> for PublicProfile {
    fn from(profile: &EmployeeProfile) -> Self {
        Self {
            id: profile.id.clone(),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            position: profile.position.clone(),
            department: profile.department.clone(),
            profile_image: profile.profile_image.clone(),
            bio: profile.bio.clone(),
            skills: profile.skills.clone(),
            absence_requests: profile.absence_requests.clone(),
        }
    }
}

/// Projection of a profile granted to a caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileView {
    /// Every field including compensation and contact data.
    Full(EmployeeProfile),
    /// Discovery fields only.
    Public(PublicProfile),
}

/// Selects the projection of `profile` visible to `identity`.
///
/// Returns `None` when neither full nor public access applies.
#[must_use]
pub fn project_profile(identity: &UserIdentity, profile: &EmployeeProfile) -> Option<ProfileView> {
    if can_access_resource(identity, Permission::ProfileReadAll, Some(profile.id.as_str())) {
        return Some(ProfileView::Full(profile.clone()));
    }

    if has_permission(identity, Permission::ProfileReadPublic) {
        return Some(ProfileView::Public(PublicProfile::from(profile)));
    }

    None
}

/// Partial profile update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New job title.
    pub position: Option<String>,
    /// New department.
    pub department: Option<String>,
    /// New avatar URL.
    pub profile_image: Option<String>,
    /// New biography.
    pub bio: Option<String>,
    /// Replacement skills list.
    pub skills: Option<Vec<String>>,
    /// New phone number.
    pub phone: Option<String>,
    /// Submitted salary; gated by its own permission even when malformed.
    pub salary: Option<SalaryChange>,
    /// New address.
    pub address: Option<String>,
    /// Replacement emergency contact.
    pub emergency_contact: Option<EmergencyContact>,
    /// Replacement work history.
    pub work_history: Option<Vec<WorkHistoryEntry>>,
    /// New performance rating.
    pub performance_rating: Option<f32>,
    /// Replacement certifications.
    pub certifications: Option<Vec<String>>,
}

/// Salary field as submitted by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryChange {
    /// A non-negative whole yearly amount.
    Amount(u64),
    /// The field was present but held no usable amount.
    Malformed,
}

impl ProfileUpdate {
    /// Returns whether the update touches compensation.
    #[must_use]
    pub fn touches_salary(&self) -> bool {
        self.salary.is_some()
    }

    /// Rejects field values that cannot be stored.
    pub fn validate(&self) -> AppResult<()> {
        if self.salary == Some(SalaryChange::Malformed) {
            return Err(AppError::Validation(
                "Salary must be a non-negative whole number".to_owned(),
            ));
        }

        Ok(())
    }

    /// Applies every present field to `profile`.
    pub fn apply_to(self, profile: &mut EmployeeProfile) {
        fn set<T>(target: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *target = value;
            }
        }

        set(&mut profile.first_name, self.first_name);
        set(&mut profile.last_name, self.last_name);
        set(&mut profile.email, self.email);
        set(&mut profile.position, self.position);
        set(&mut profile.department, self.department);
        set(&mut profile.bio, self.bio);
        set(&mut profile.skills, self.skills);
        set(&mut profile.phone, self.phone);
        if let Some(SalaryChange::Amount(amount)) = self.salary {
            profile.salary = amount;
        }
        set(&mut profile.address, self.address);
        set(&mut profile.work_history, self.work_history);
        set(&mut profile.certifications, self.certifications);
        if self.profile_image.is_some() {
            profile.profile_image = self.profile_image;
        }
        if self.emergency_contact.is_some() {
            profile.emergency_contact = self.emergency_contact;
        }
        if self.performance_rating.is_some() {
            profile.performance_rating = self.performance_rating;
        }
    }
}

/// Reason a profile edit is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileEditDenial {
    /// Caller may not edit the target profile at all.
    NotEditable,
    /// Caller may edit the profile but not its salary.
    SalaryNotPermitted,
}

impl ProfileEditDenial {
    /// Returns the permission whose absence caused the denial.
    #[must_use]
    pub fn required(&self) -> Permission {
        match self {
            Self::NotEditable => Permission::ProfileEditAll,
            Self::SalaryNotPermitted => Permission::ProfileEditSalary,
        }
    }
}

/// Checks whether `identity` may apply `update` to the profile `target_id`.
///
/// General edit rights come from `edit_all` or, on the caller's own profile,
/// `edit_own`. A salary change additionally requires `edit_salary`.
pub fn check_profile_edit(
    identity: &UserIdentity,
    target_id: &str,
    update: &ProfileUpdate,
) -> Result<(), ProfileEditDenial> {
    if !can_access_resource(identity, Permission::ProfileEditAll, Some(target_id)) {
        return Err(ProfileEditDenial::NotEditable);
    }

    if update.touches_salary() && !has_permission(identity, Permission::ProfileEditSalary) {
        return Err(ProfileEditDenial::SalaryNotPermitted);
    }

    Ok(())
}

/// Directory listing filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFilter {
    /// Case-insensitive substring over names, position and department.
    pub search: Option<String>,
    /// Exact department match.
    pub department: Option<String>,
}

impl ProfileFilter {
    /// Returns whether `profile` passes both filters.
    #[must_use]
    pub fn matches(&self, profile: &EmployeeProfile) -> bool {
        let search_matches = self
            .search
            .as_deref()
            .filter(|search| !search.is_empty())
            .is_none_or(|search| {
                let needle = search.to_lowercase();
                [
                    profile.first_name.as_str(),
                    profile.last_name.as_str(),
                    profile.position.as_str(),
                    profile.department.as_str(),
                ]
                .iter()
                .any(|value| value.to_lowercase().contains(&needle))
            });

        let department_matches = self
            .department
            .as_deref()
            .filter(|department| !department.is_empty())
            .is_none_or(|department| profile.department == department);

        search_matches && department_matches
    }
}
