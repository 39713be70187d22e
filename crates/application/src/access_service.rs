use std::collections::BTreeSet;
use std::sync::Arc;

use aesthub_core::{AppError, AppResult};
use aesthub_domain::{AppId, EffectiveGrant, Permission, RoleDefinition, User};

use crate::RoleCatalog;

/// Application service resolving what a given user may see and do.
///
/// Pure resolution over the role catalog: the service never mutates the
/// catalog or the user. Effective grants are recomputed on every call so
/// that supplement edits are reflected immediately.
#[derive(Clone)]
pub struct AccessService {
    role_catalog: Arc<dyn RoleCatalog>,
}

impl AccessService {
    /// Creates an access service from a role catalog implementation.
    #[must_use]
    pub fn new(role_catalog: Arc<dyn RoleCatalog>) -> Self {
        Self { role_catalog }
    }

    /// Resolves the role definition referenced by a user.
    ///
    /// A user whose role id matches no catalog entry is an error condition;
    /// callers must surface an explicit undefined-role state and never fall
    /// back to any default role.
    pub async fn resolve_role(&self, user: &User) -> AppResult<RoleDefinition> {
        self.role_catalog
            .find_role(user.role_id())
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "user '{}' references undefined role '{}'",
                    user.id(),
                    user.role_id()
                ))
            })
    }

    /// Resolves the effective grants for a user: role base plus supplements.
    pub async fn effective_grant(&self, user: &User) -> AppResult<EffectiveGrant> {
        let role = self.resolve_role(user).await?;
        Ok(EffectiveGrant::resolve(&role, user))
    }

    /// Resolves the effective permission set for a user.
    pub async fn effective_permissions(&self, user: &User) -> AppResult<BTreeSet<Permission>> {
        Ok(self.effective_grant(user).await?.permissions)
    }

    /// Resolves the effective authorized application set for a user.
    pub async fn effective_apps(&self, user: &User) -> AppResult<BTreeSet<AppId>> {
        Ok(self.effective_grant(user).await?.apps)
    }

    /// Returns whether the user effectively holds the permission.
    pub async fn has_permission(&self, user: &User, permission: Permission) -> AppResult<bool> {
        Ok(self.effective_grant(user).await?.has_permission(permission))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap};
    use std::sync::Arc;

    use async_trait::async_trait;
    use aesthub_core::{AppError, AppResult};
    use aesthub_domain::{
        AppId, DataScope, Permission, RoleDefinition, RoleId, RoleType, User, UserId,
    };

    use aesthub_domain::ViewId;

    use crate::{RoleCatalog, is_visible, visible_views};

    use super::AccessService;

    struct FakeRoleCatalog {
        roles: HashMap<String, RoleDefinition>,
    }

    #[async_trait]
    impl RoleCatalog for FakeRoleCatalog {
        async fn find_role(&self, role_id: &RoleId) -> AppResult<Option<RoleDefinition>> {
            Ok(self.roles.get(role_id.as_str()).cloned())
        }

        async fn list_roles(&self) -> AppResult<Vec<RoleDefinition>> {
            Ok(self.roles.values().cloned().collect())
        }
    }

    fn staff_role() -> RoleDefinition {
        let id = RoleId::new("role-doctor").unwrap_or_else(|_| unreachable!());
        let mut base_permissions = BTreeSet::new();
        base_permissions.insert(Permission::ViewData);
        let mut base_app_ids = BTreeSet::new();
        base_app_ids.insert(AppId::new("app-1").unwrap_or_else(|_| unreachable!()));
        RoleDefinition::new(
            id,
            "Consultant",
            "Aesthetic design and consultation.",
            RoleType::Staff,
            base_permissions,
            base_app_ids,
        )
        .unwrap_or_else(|_| unreachable!())
    }

    fn staff_user() -> User {
        let id = UserId::new("u2").unwrap_or_else(|_| unreachable!());
        let role_id = RoleId::new("role-doctor").unwrap_or_else(|_| unreachable!());
        User::new(id, "Li Wen", None, role_id, DataScope::Assigned)
            .unwrap_or_else(|_| unreachable!())
    }

    fn service_with(roles: Vec<RoleDefinition>) -> AccessService {
        let roles = roles
            .into_iter()
            .map(|role| (role.id().as_str().to_owned(), role))
            .collect();
        AccessService::new(Arc::new(FakeRoleCatalog { roles }))
    }

    #[tokio::test]
    async fn effective_grant_unions_base_and_supplements() {
        let service = service_with(vec![staff_role()]);
        let mut user = staff_user();
        user.grant_extra_permission(Permission::ManageData);
        user.grant_extra_app(AppId::new("app-4").unwrap_or_else(|_| unreachable!()));

        let grant = service.effective_grant(&user).await;
        assert!(grant.is_ok());
        let grant = grant.unwrap_or_else(|_| unreachable!());

        assert!(grant.has_permission(Permission::ViewData));
        assert!(grant.has_permission(Permission::ManageData));
        assert!(grant.authorizes_app(&AppId::new("app-1").unwrap_or_else(|_| unreachable!())));
        assert!(grant.authorizes_app(&AppId::new("app-4").unwrap_or_else(|_| unreachable!())));
    }

    #[tokio::test]
    async fn supplements_do_not_leak_into_the_catalog() {
        let service = service_with(vec![staff_role()]);
        let mut user = staff_user();
        user.grant_extra_permission(Permission::ManageAccount);

        let grant = service.effective_grant(&user).await;
        assert!(grant.is_ok());

        let role = service.resolve_role(&staff_user()).await;
        assert!(role.is_ok());
        let role = role.unwrap_or_else(|_| unreachable!());
        assert!(!role.base_permissions().contains(&Permission::ManageAccount));
    }

    #[tokio::test]
    async fn undefined_role_is_a_not_found_error() {
        let service = service_with(Vec::new());
        let user = staff_user();

        let resolved = service.resolve_role(&user).await;
        assert!(matches!(resolved, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn permission_supplement_does_not_open_gated_views_for_staff() {
        let service = service_with(vec![staff_role()]);
        let mut user = staff_user();
        user.grant_extra_permission(Permission::ManageAccount);

        let holds_permission = service
            .has_permission(&user, Permission::ManageAccount)
            .await;
        assert!(holds_permission.is_ok());
        assert!(holds_permission.unwrap_or(false));

        let role = service.resolve_role(&user).await;
        assert!(role.is_ok());
        let role_type = role.unwrap_or_else(|_| unreachable!()).role_type();

        assert!(!is_visible(role_type, ViewId::AccountManagement));
        assert!(!is_visible(role_type, ViewId::Finance));
        assert!(!is_visible(role_type, ViewId::InstitutionProfile));
        assert_eq!(
            visible_views(role_type),
            vec![ViewId::Workbench, ViewId::AppMarket, ViewId::DataCenter]
        );
    }
}
