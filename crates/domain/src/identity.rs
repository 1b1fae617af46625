use serde::{Deserialize, Serialize};

use crate::{PermissionSet, Role};

/// Authenticated caller bound to a session.
///
/// The permission set is captured when the identity is built at login and
/// travels with the session unchanged; later edits to the role table do not
/// reach live sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    id: String,
    email: String,
    first_name: String,
    last_name: String,
    role: Role,
    permissions: PermissionSet,
}

impl UserIdentity {
    /// Creates an identity whose permissions are resolved from `role`.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self::with_permissions(id, email, first_name, last_name, role, role.permissions())
    }

    /// Creates an identity carrying an explicit permission snapshot.
    #[must_use]
    pub fn with_permissions(
        id: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: Role,
        permissions: PermissionSet,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            role,
            permissions,
        }
    }

    /// Returns the employee id of the caller.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the login email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Returns the role the caller signed in with.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the permission snapshot taken at login.
    #[must_use]
    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    /// Returns `"First Last"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
