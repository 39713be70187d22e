use std::sync::Arc;

use aesthub_core::{AppError, AppResult};
use aesthub_domain::{DataScope, PhoneNumber, RoleId, User, UserId, ViewId};

use crate::{RoleCatalog, UserDirectory, default_view};

/// Parameters for registering a new principal.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    /// Display name for the new account.
    pub name: String,
    /// Phone number, checked for uniqueness within the target role type.
    pub phone: String,
    /// Identifier of the role fixed at creation.
    pub role_id: String,
}

/// Result of a successful registration.
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    /// The newly created user, already appended to the directory.
    pub user: User,
    /// Landing view for the new principal's role type.
    pub landing_view: ViewId,
}

/// Application service admitting new principals to the directory.
#[derive(Clone)]
pub struct RegistrationService {
    user_directory: Arc<dyn UserDirectory>,
    role_catalog: Arc<dyn RoleCatalog>,
}

impl RegistrationService {
    /// Creates a registration service.
    #[must_use]
    pub fn new(user_directory: Arc<dyn UserDirectory>, role_catalog: Arc<dyn RoleCatalog>) -> Self {
        Self {
            user_directory,
            role_catalog,
        }
    }

    /// Registers a new user.
    ///
    /// Uniqueness is scoped by `(phone, role type)`: a phone number may
    /// register once per role *type*, so an existing institution admin does
    /// not block the same phone registering a personal account. A collision
    /// within the same role type is a conflict and the registration is not
    /// applied.
    pub async fn register(&self, input: RegisterInput) -> AppResult<RegistrationOutcome> {
        if input.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".to_owned()));
        }
        if input.phone.trim().is_empty() {
            return Err(AppError::Validation("phone number is required".to_owned()));
        }
        if input.role_id.trim().is_empty() {
            return Err(AppError::Validation("role selection is required".to_owned()));
        }

        let phone = PhoneNumber::new(input.phone)?;
        let role_id = RoleId::new(input.role_id)?;

        let role = self
            .role_catalog
            .find_role(&role_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("registration role '{role_id}' does not exist"))
            })?;

        for existing in self.user_directory.find_by_phone(&phone).await? {
            let existing_role = self
                .role_catalog
                .find_role(existing.role_id())
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!(
                        "user '{}' references undefined role '{}'",
                        existing.id(),
                        existing.role_id()
                    ))
                })?;

            if existing_role.role_type() == role.role_type() {
                return Err(AppError::Conflict(format!(
                    "phone number '{phone}' is already registered for a {} account",
                    role.role_type().as_str()
                )));
            }
        }

        let user = User::new(
            UserId::generate(),
            input.name,
            Some(phone),
            role_id,
            DataScope::Assigned,
        )?;
        self.user_directory.insert(user.clone()).await?;

        Ok(RegistrationOutcome {
            user,
            landing_view: default_view(role.role_type()),
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
    use tokio::sync::Mutex;

    use crate::{RoleCatalog, UserDirectory};

    use super::{RegisterInput, RegistrationService};

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

    #[derive(Default)]
    struct FakeUserDirectory {
        users: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl UserDirectory for FakeUserDirectory {
        async fn find_by_id(&self, user_id: &UserId) -> AppResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .await
                .iter()
                .find(|user| user.id() == user_id)
                .cloned())
        }

        async fn find_by_phone(&self, phone: &PhoneNumber) -> AppResult<Vec<User>> {
            Ok(self
                .users
                .lock()
                .await
                .iter()
                .filter(|user| user.phone() == Some(phone))
                .cloned()
                .collect())
        }

        async fn list(&self) -> AppResult<Vec<User>> {
            Ok(self.users.lock().await.clone())
        }

        async fn insert(&self, user: User) -> AppResult<()> {
            self.users.lock().await.push(user);
            Ok(())
        }

        async fn update(&self, _user: User) -> AppResult<()> {
            Err(AppError::Internal("not used in these tests".to_owned()))
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

    fn catalog() -> Arc<FakeRoleCatalog> {
        Arc::new(FakeRoleCatalog {
            roles: vec![
                role("role-admin", RoleType::Admin),
                role("role-individual", RoleType::Individual),
                role("role-provider", RoleType::ServiceProvider),
            ],
        })
    }

    fn seeded_admin() -> User {
        let id = UserId::new("u1").unwrap_or_else(|_| unreachable!());
        let role_id = RoleId::new("role-admin").unwrap_or_else(|_| unreachable!());
        let phone = PhoneNumber::new("13800000001").unwrap_or_else(|_| unreachable!());
        User::new(id, "Grace Zhang", Some(phone), role_id, DataScope::All)
            .unwrap_or_else(|_| unreachable!())
    }

    fn input(role_id: &str) -> RegisterInput {
        RegisterInput {
            name: "Dr. Chen".to_owned(),
            phone: "13800000001".to_owned(),
            role_id: role_id.to_owned(),
        }
    }

    #[tokio::test]
    async fn same_phone_with_different_role_type_is_accepted() {
        let directory = Arc::new(FakeUserDirectory::default());
        directory.users.lock().await.push(seeded_admin());
        let service = RegistrationService::new(directory.clone(), catalog());

        let outcome = service.register(input("role-individual")).await;
        assert!(outcome.is_ok());
        let outcome = outcome.unwrap_or_else(|_| unreachable!());
        assert_eq!(outcome.landing_view, ViewId::Workbench);
        assert_eq!(directory.users.lock().await.len(), 2);
    }

    #[tokio::test]
    async fn same_phone_and_role_type_is_a_conflict() {
        let directory = Arc::new(FakeUserDirectory::default());
        directory.users.lock().await.push(seeded_admin());
        let service = RegistrationService::new(directory.clone(), catalog());

        let first = service.register(input("role-individual")).await;
        assert!(first.is_ok());

        let second = service.register(input("role-individual")).await;
        assert!(matches!(second, Err(AppError::Conflict(_))));
        assert_eq!(directory.users.lock().await.len(), 2);
    }

    #[tokio::test]
    async fn provider_registration_lands_on_revenue_dashboard() {
        let directory = Arc::new(FakeUserDirectory::default());
        let service = RegistrationService::new(directory, catalog());

        let outcome = service.register(input("role-provider")).await;
        assert!(outcome.is_ok());
        assert_eq!(
            outcome.unwrap_or_else(|_| unreachable!()).landing_view,
            ViewId::ProviderRevenue
        );
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let directory = Arc::new(FakeUserDirectory::default());
        let service = RegistrationService::new(directory.clone(), catalog());

        let result = service
            .register(RegisterInput {
                name: "   ".to_owned(),
                phone: "13800000009".to_owned(),
                role_id: "role-individual".to_owned(),
            })
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(directory.users.lock().await.is_empty());
    }

    #[tokio::test]
    async fn malformed_phone_is_rejected() {
        let service = RegistrationService::new(Arc::new(FakeUserDirectory::default()), catalog());

        let result = service
            .register(RegisterInput {
                name: "Dr. Chen".to_owned(),
                phone: "138-0000".to_owned(),
                role_id: "role-individual".to_owned(),
            })
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn unknown_role_is_not_defaulted() {
        let service = RegistrationService::new(Arc::new(FakeUserDirectory::default()), catalog());

        let result = service.register(input("role-ghost")).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
