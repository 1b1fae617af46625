//! Domain entities, the permission registry and access rules.

#![forbid(unsafe_code)]

mod absence;
mod access;
mod feedback;
mod identity;
mod profile;
mod security;

pub use absence::{AbsenceRequest, AbsenceStatus};
pub use access::{can_access_resource, has_all_permissions, has_any_permission, has_permission};
pub use feedback::{
    Feedback, FeedbackScope, UNKNOWN_AUTHOR, can_delete_feedback_item, can_view_feedback_item,
    feedback_scope_for_profile, received_feedback_scope,
};
pub use identity::UserIdentity;
pub use profile::{
    EmergencyContact, EmployeeProfile, ProfileEditDenial, ProfileFilter, ProfileUpdate,
    ProfileView, PublicProfile, SalaryChange, WorkHistoryEntry, check_profile_edit, project_profile,
};
pub use security::{Permission, PermissionSet, Resource, Role, permissions_for_role};
