//! Guard functions that turn predicate denials into `AppError::Forbidden`.
//!
//! Denials echo the wire values of the permissions the operation needed.

use newwork_core::{AppError, AppResult};
use newwork_domain::{Permission, UserIdentity, has_any_permission, has_permission};

const INSUFFICIENT_PERMISSIONS: &str = "Insufficient permissions";

fn wire_values(permissions: &[Permission]) -> Vec<String> {
    permissions
        .iter()
        .map(|permission| permission.as_str().to_owned())
        .collect()
}

/// Ensures the identity holds `permission`.
pub(crate) fn require_permission(
    identity: &UserIdentity,
    permission: Permission,
) -> AppResult<()> {
    if has_permission(identity, permission) {
        return Ok(());
    }

    tracing::debug!(
        user_id = identity.id(),
        permission = permission.as_str(),
        "permission check denied"
    );
    Err(AppError::forbidden(
        INSUFFICIENT_PERMISSIONS,
        [permission.as_str()],
    ))
}

/// Ensures the identity holds at least one of `permissions`.
pub(crate) fn require_any_permission(
    identity: &UserIdentity,
    permissions: &[Permission],
) -> AppResult<()> {
    if has_any_permission(identity, permissions) {
        return Ok(());
    }

    Err(AppError::forbidden(
        INSUFFICIENT_PERMISSIONS,
        wire_values(permissions),
    ))
}
