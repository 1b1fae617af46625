//! Grant/deny predicates over an identity's permission snapshot.
//!
//! Every predicate is pure and total: an absent grant is a `false`, never an error.

use crate::{Permission, UserIdentity};

/// Returns whether the identity holds `permission`.
#[must_use]
pub fn has_permission(identity: &UserIdentity, permission: Permission) -> bool {
    identity.permissions().contains(permission)
}

/// Returns whether the identity holds at least one of `permissions`.
#[must_use]
pub fn has_any_permission(identity: &UserIdentity, permissions: &[Permission]) -> bool {
    permissions
        .iter()
        .any(|permission| has_permission(identity, *permission))
}

/// Returns whether the identity holds every one of `permissions`.
#[must_use]
pub fn has_all_permissions(identity: &UserIdentity, permissions: &[Permission]) -> bool {
    permissions
        .iter()
        .all(|permission| has_permission(identity, *permission))
}

/// Decides access to a resource, falling back to ownership.
///
/// Grants when `permission` is held. Otherwise, when the caller is the
/// resource owner, grants iff the own-scope counterpart of `permission` is
/// held. Without an owner id only the first check applies.
#[must_use]
pub fn can_access_resource(
    identity: &UserIdentity,
    permission: Permission,
    resource_owner_id: Option<&str>,
) -> bool {
    if has_permission(identity, permission) {
        return true;
    }

    match resource_owner_id {
        Some(owner_id) if owner_id == identity.id() => permission
            .to_own_scope()
            .is_some_and(|own| has_permission(identity, own)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{can_access_resource, has_all_permissions, has_any_permission, has_permission};
    use crate::{Permission, PermissionSet, Role, UserIdentity};

    fn identity_with(id: &str, permissions: &[Permission]) -> UserIdentity {
        UserIdentity::with_permissions(
            id,
            format!("{id}@newwork.com"),
            "Test",
            "User",
            Role::Employee,
            permissions.iter().copied().collect(),
        )
    }

    fn permission_strategy() -> impl Strategy<Value = Permission> {
        proptest::sample::select(Permission::all().to_vec())
    }

    fn permission_set_strategy() -> impl Strategy<Value = Vec<Permission>> {
        proptest::collection::vec(permission_strategy(), 0..Permission::all().len())
    }

    #[test]
    fn has_permission_reflects_membership() {
        let identity = identity_with("1", &[Permission::ProfileReadAll]);
        assert!(has_permission(&identity, Permission::ProfileReadAll));
        assert!(!has_permission(&identity, Permission::ProfileReadPublic));
    }

    #[test]
    fn any_and_all_over_empty_lists() {
        let identity = identity_with("1", &[]);
        assert!(!has_any_permission(&identity, &[]));
        assert!(has_all_permissions(&identity, &[]));
    }

    #[test]
    fn any_and_all_over_mixed_lists() {
        let identity = identity_with("1", &[Permission::FeedbackCreate]);
        let requested = [Permission::FeedbackCreate, Permission::FeedbackReadAll];
        assert!(has_any_permission(&identity, &requested));
        assert!(!has_all_permissions(&identity, &requested));
    }

    #[test]
    fn owner_with_own_scope_is_granted() {
        let identity = identity_with("2", &[Permission::ProfileEditOwn]);
        assert!(can_access_resource(
            &identity,
            Permission::ProfileEditAll,
            Some("2")
        ));
    }

    #[test]
    fn non_owner_with_only_own_scope_is_denied() {
        let identity = identity_with("2", &[Permission::ProfileEditOwn]);
        assert!(!can_access_resource(
            &identity,
            Permission::ProfileEditAll,
            Some("3")
        ));
    }

    #[test]
    fn missing_owner_id_skips_ownership_fallback() {
        let identity = identity_with("2", &[Permission::FeedbackReadOwn]);
        assert!(!can_access_resource(
            &identity,
            Permission::FeedbackReadAll,
            None
        ));
    }

    #[test]
    fn read_all_profile_has_no_own_fallback() {
        let identity = UserIdentity::new("2", "employee@newwork.com", "Michael", "Chen", Role::Employee);
        assert!(!can_access_resource(
            &identity,
            Permission::ProfileReadAll,
            Some("2")
        ));
    }

    #[test]
    fn empty_set_denies_everything() {
        let identity = UserIdentity::with_permissions(
            "9",
            "nobody@newwork.com",
            "No",
            "Body",
            Role::Coworker,
            PermissionSet::empty(),
        );
        for permission in Permission::all() {
            assert!(!can_access_resource(&identity, *permission, Some("9")));
        }
    }

    proptest! {
        #[test]
        fn held_permission_always_grants(
            held in permission_set_strategy(),
            requested in permission_strategy(),
            owner in proptest::option::of("[0-9]{1,2}"),
        ) {
            let identity = identity_with("1", &held);
            if has_permission(&identity, requested) {
                prop_assert!(can_access_resource(&identity, requested, owner.as_deref()));
            }
        }

        #[test]
        fn own_scope_grants_only_the_owner(
            requested in permission_strategy(),
            other in "[a-z]{1,4}",
        ) {
            if let Some(own) = requested.to_own_scope() {
                let identity = identity_with("42", &[own]);
                prop_assert!(can_access_resource(&identity, requested, Some("42")));
                prop_assert!(!can_access_resource(&identity, requested, Some(other.as_str())));
            }
        }
    }
}
