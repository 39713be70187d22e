use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{AppId, Permission, RoleDefinition, User};

/// Effective grants resolved for one user: role base plus user supplements.
///
/// Derived, never stored. The union is recomputed on every read so that role
/// or supplement edits are reflected immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveGrant {
    /// Permissions the user effectively holds.
    pub permissions: BTreeSet<Permission>,
    /// Applications the user is effectively authorized to use.
    pub apps: BTreeSet<AppId>,
}

impl EffectiveGrant {
    /// Resolves the effective grants for `user` against its role definition.
    ///
    /// Supplements are strictly additive; the shared role definition is
    /// never modified by resolution.
    #[must_use]
    pub fn resolve(role: &RoleDefinition, user: &User) -> Self {
        let permissions = role
            .base_permissions()
            .union(user.extra_permissions())
            .copied()
            .collect();
        let apps = role
            .base_app_ids()
            .union(user.extra_app_ids())
            .cloned()
            .collect();

        Self { permissions, apps }
    }

    /// Returns whether the grant includes the permission.
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Returns whether the grant authorizes the application.
    #[must_use]
    pub fn authorizes_app(&self, app_id: &AppId) -> bool {
        self.apps.contains(app_id)
    }
}
