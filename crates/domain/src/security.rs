use std::collections::BTreeSet;
use std::str::FromStr;

use newwork_core::AppError;
use serde::{Deserialize, Serialize};

/// Resources guarded by the permission catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    /// Employee profile records.
    EmployeeProfile,
    /// Peer feedback items.
    Feedback,
    /// Absence requests.
    Absence,
}

impl Resource {
    /// Returns the stable prefix used in permission wire values.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmployeeProfile => "employee_profile",
            Self::Feedback => "feedback",
            Self::Absence => "absence",
        }
    }

    /// Returns every resource in catalog order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Resource] = &[Resource::EmployeeProfile, Resource::Feedback, Resource::Absence];

        ALL
    }

    /// Returns the catalog entries that belong to this resource.
    pub fn permissions(self) -> impl Iterator<Item = Permission> {
        Permission::all()
            .iter()
            .copied()
            .filter(move |permission| permission.resource() == self)
    }
}

/// Permissions enforced by access policy checks.
///
/// The set is closed: every grant a role can carry is one of these tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Permission {
    /// Read every field of any employee profile.
    #[serde(rename = "employee_profile:read_all")]
    ProfileReadAll,
    /// Read the public subset of any employee profile.
    #[serde(rename = "employee_profile:read_public")]
    ProfileReadPublic,
    /// Edit any employee profile.
    #[serde(rename = "employee_profile:edit_all")]
    ProfileEditAll,
    /// Edit the caller's own profile.
    #[serde(rename = "employee_profile:edit_own")]
    ProfileEditOwn,
    /// Change the salary field of a profile.
    #[serde(rename = "employee_profile:edit_salary")]
    ProfileEditSalary,
    /// Author feedback for a colleague.
    #[serde(rename = "feedback:create")]
    FeedbackCreate,
    /// Read all feedback targeting any profile.
    #[serde(rename = "feedback:read_all")]
    FeedbackReadAll,
    /// Read feedback received or authored by the caller.
    #[serde(rename = "feedback:read_own")]
    FeedbackReadOwn,
    /// Submit absence requests.
    #[serde(rename = "absence:request")]
    AbsenceRequest,
    /// Approve or reject absence requests.
    #[serde(rename = "absence:approve")]
    AbsenceApprove,
    /// View absence requests across the team.
    #[serde(rename = "absence:view_team")]
    AbsenceViewTeam,
}

impl Permission {
    /// Returns a stable wire value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProfileReadAll => "employee_profile:read_all",
            Self::ProfileReadPublic => "employee_profile:read_public",
            Self::ProfileEditAll => "employee_profile:edit_all",
            Self::ProfileEditOwn => "employee_profile:edit_own",
            Self::ProfileEditSalary => "employee_profile:edit_salary",
            Self::FeedbackCreate => "feedback:create",
            Self::FeedbackReadAll => "feedback:read_all",
            Self::FeedbackReadOwn => "feedback:read_own",
            Self::AbsenceRequest => "absence:request",
            Self::AbsenceApprove => "absence:approve",
            Self::AbsenceViewTeam => "absence:view_team",
        }
    }

    /// Returns all known permissions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::ProfileReadAll,
            Permission::ProfileReadPublic,
            Permission::ProfileEditAll,
            Permission::ProfileEditOwn,
            Permission::ProfileEditSalary,
            Permission::FeedbackCreate,
            Permission::FeedbackReadAll,
            Permission::FeedbackReadOwn,
            Permission::AbsenceRequest,
            Permission::AbsenceApprove,
            Permission::AbsenceViewTeam,
        ];

        ALL
    }

    /// Returns the resource this permission guards.
    #[must_use]
    pub fn resource(&self) -> Resource {
        match self {
            Self::ProfileReadAll
            | Self::ProfileReadPublic
            | Self::ProfileEditAll
            | Self::ProfileEditOwn
            | Self::ProfileEditSalary => Resource::EmployeeProfile,
            Self::FeedbackCreate | Self::FeedbackReadAll | Self::FeedbackReadOwn => {
                Resource::Feedback
            }
            Self::AbsenceRequest | Self::AbsenceApprove | Self::AbsenceViewTeam => {
                Resource::Absence
            }
        }
    }

    /// Returns the self-restricted counterpart of a global permission.
    ///
    /// Only pairs present in the catalog map; `employee_profile:read_all` has
    /// no own-scope variant and yields `None`.
    #[must_use]
    pub fn to_own_scope(&self) -> Option<Self> {
        match self {
            Self::ProfileEditAll => Some(Self::ProfileEditOwn),
            Self::FeedbackReadAll => Some(Self::FeedbackReadOwn),
            _ => None,
        }
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|permission| permission.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown permission value '{value}'")))
    }
}

/// Immutable set of permissions carried by an identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
    /// Returns an empty permission set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns whether the permission is part of the set.
    #[must_use]
    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    /// Returns the number of permissions in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the set grants nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates permissions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }

    /// Returns the wire values of every permission in the set.
    #[must_use]
    pub fn to_wire_values(&self) -> Vec<String> {
        self.iter().map(|permission| permission.as_str().to_owned()).collect()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Roles an employee can sign in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// People manager with directory-wide access.
    Manager,
    /// Regular employee.
    Employee,
    /// Colleague access; currently grants the same permissions as `Employee`.
    Coworker,
}

impl Role {
    /// Returns the stable wire value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "MANAGER",
            Self::Employee => "EMPLOYEE",
            Self::Coworker => "COWORKER",
        }
    }

    /// Returns the static permission set granted to this role.
    #[must_use]
    pub fn permissions(&self) -> PermissionSet {
        let grants: &[Permission] = match self {
            Self::Manager => &[
                Permission::ProfileReadAll,
                Permission::ProfileEditAll,
                Permission::ProfileEditSalary,
                Permission::FeedbackCreate,
                Permission::FeedbackReadOwn,
                Permission::FeedbackReadAll,
                Permission::AbsenceApprove,
                Permission::AbsenceViewTeam,
            ],
            // Kept as separate tags even though the grants match today.
            Self::Employee | Self::Coworker => &[
                Permission::ProfileReadPublic,
                Permission::ProfileEditOwn,
                Permission::FeedbackCreate,
                Permission::FeedbackReadOwn,
                Permission::AbsenceRequest,
            ],
        };

        grants.iter().copied().collect()
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "MANAGER" => Ok(Self::Manager),
            "EMPLOYEE" => Ok(Self::Employee),
            "COWORKER" => Ok(Self::Coworker),
            _ => Err(AppError::Validation(format!("unknown role '{value}'"))),
        }
    }
}

/// Resolves the permission set for a role name.
///
/// Unknown role names resolve to an empty set instead of an error.
#[must_use]
pub fn permissions_for_role(role: &str) -> PermissionSet {
    Role::from_str(role)
        .map(|role| role.permissions())
        .unwrap_or_default()
}
