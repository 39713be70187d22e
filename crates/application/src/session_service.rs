use std::sync::Arc;

use aesthub_core::{AppError, AppResult};
use aesthub_domain::{RoleType, UserId, ViewId};
use serde::Serialize;

use crate::{AccessService, UserDirectory, authorize, default_view};

/// Active session principal and the view currently routed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    /// The signed-in user.
    pub user_id: UserId,
    /// Role type resolved at session open.
    pub role_type: RoleType,
    /// View the session currently displays.
    pub view: ViewId,
}

impl Session {
    /// Routes the session to a target view, redirecting to the role type's
    /// default view when the target is gated.
    #[must_use]
    pub fn navigate(&self, target: ViewId) -> Self {
        Self {
            user_id: self.user_id.clone(),
            role_type: self.role_type,
            view: authorize(self.role_type, target),
        }
    }
}

/// Application service opening sessions and routing them to views.
///
/// Switching the demo role is opening a session for the other user.
#[derive(Clone)]
pub struct SessionService {
    user_directory: Arc<dyn UserDirectory>,
    access: AccessService,
}

impl SessionService {
    /// Creates a session service.
    #[must_use]
    pub fn new(user_directory: Arc<dyn UserDirectory>, access: AccessService) -> Self {
        Self {
            user_directory,
            access,
        }
    }

    /// Opens a session for a user, landing on their role type's default view.
    ///
    /// Fails when the user is unknown or references an undefined role; no
    /// session is established in either case.
    pub async fn open(&self, user_id: &UserId) -> AppResult<Session> {
        let user = self
            .user_directory
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{user_id}' does not exist")))?;

        let role = self.access.resolve_role(&user).await?;
        let role_type = role.role_type();

        Ok(Session {
            user_id: user.id().clone(),
            role_type,
            view: default_view(role_type),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use async_trait::async_trait;
    use aesthub_core::{AppError, AppResult};
    use aesthub_domain::{
        DataScope, PhoneNumber, RoleDefinition, RoleId, RoleType, User, UserId, ViewId,
    };

    use crate::{AccessService, RoleCatalog, UserDirectory};

    use super::SessionService;

    struct FakeRoleCatalog {
        roles: Vec<RoleDefinition>,
    }

    #[async_trait]
    impl RoleCatalog for FakeRoleCatalog {
        async fn find_role(&self, role_id: &RoleId) -> AppResult<Option<RoleDefinition>> {
            Ok(self
                .roles
                .iter()
                .find(|role| role.id() == role_id)
                .cloned())
        }

        async fn list_roles(&self) -> AppResult<Vec<RoleDefinition>> {
            Ok(self.roles.clone())
        }
    }

    struct FakeUserDirectory {
        users: Vec<User>,
    }

    #[async_trait]
    impl UserDirectory for FakeUserDirectory {
        async fn find_by_id(&self, user_id: &UserId) -> AppResult<Option<User>> {
            Ok(self.users.iter().find(|user| user.id() == user_id).cloned())
        }

        async fn find_by_phone(&self, phone: &PhoneNumber) -> AppResult<Vec<User>> {
            Ok(self
                .users
                .iter()
                .filter(|user| user.phone() == Some(phone))
                .cloned()
                .collect())
        }

        async fn list(&self) -> AppResult<Vec<User>> {
            Ok(self.users.clone())
        }

        async fn insert(&self, _user: User) -> AppResult<()> {
            Err(AppError::Internal("read-only fixture".to_owned()))
        }

        async fn update(&self, _user: User) -> AppResult<()> {
            Err(AppError::Internal("read-only fixture".to_owned()))
        }
    }

    fn role(id: &str, role_type: RoleType) -> RoleDefinition {
        let role_id = RoleId::new(id).unwrap_or_else(|_| unreachable!());
        RoleDefinition::new(
            role_id,
            "Role",
            "",
            role_type,
            BTreeSet::new(),
            BTreeSet::new(),
        )
        .unwrap_or_else(|_| unreachable!())
    }

    fn user(id: &str, role_id: &str) -> User {
        let user_id = UserId::new(id).unwrap_or_else(|_| unreachable!());
        let role_id = RoleId::new(role_id).unwrap_or_else(|_| unreachable!());
        User::new(user_id, "User", None, role_id, DataScope::Assigned)
            .unwrap_or_else(|_| unreachable!())
    }

    fn service(roles: Vec<RoleDefinition>, users: Vec<User>) -> SessionService {
        let access = AccessService::new(Arc::new(FakeRoleCatalog { roles }));
        SessionService::new(Arc::new(FakeUserDirectory { users }), access)
    }

    #[tokio::test]
    async fn provider_session_lands_on_revenue_dashboard() {
        let service = service(
            vec![role("role-provider", RoleType::ServiceProvider)],
            vec![user("u5", "role-provider")],
        );

        let session = service
            .open(&UserId::new("u5").unwrap_or_else(|_| unreachable!()))
            .await;
        assert!(session.is_ok());
        let session = session.unwrap_or_else(|_| unreachable!());
        assert_eq!(session.view, ViewId::ProviderRevenue);
    }

    #[tokio::test]
    async fn gated_navigation_redirects_to_default() {
        let service = service(
            vec![role("role-provider", RoleType::ServiceProvider)],
            vec![user("u5", "role-provider")],
        );

        let session = service
            .open(&UserId::new("u5").unwrap_or_else(|_| unreachable!()))
            .await;
        assert!(session.is_ok());
        let session = session.unwrap_or_else(|_| unreachable!());

        let redirected = session.navigate(ViewId::Workbench);
        assert_eq!(redirected.view, ViewId::ProviderRevenue);

        let allowed = session.navigate(ViewId::ProviderApps);
        assert_eq!(allowed.view, ViewId::ProviderApps);
    }

    #[tokio::test]
    async fn session_open_fails_on_undefined_role() {
        let service = service(Vec::new(), vec![user("u9", "role-missing")]);

        let session = service
            .open(&UserId::new("u9").unwrap_or_else(|_| unreachable!()))
            .await;
        assert!(matches!(session, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn session_open_fails_on_unknown_user() {
        let service = service(vec![role("role-admin", RoleType::Admin)], Vec::new());

        let session = service
            .open(&UserId::new("ghost").unwrap_or_else(|_| unreachable!()))
            .await;
        assert!(matches!(session, Err(AppError::NotFound(_))));
    }
}
