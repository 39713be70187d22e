use std::collections::HashMap;

use async_trait::async_trait;
use aesthub_application::RoleCatalog;
use aesthub_core::{AppError, AppResult};
use aesthub_domain::{RoleDefinition, RoleId};

/// In-memory role catalog implementation.
///
/// The catalog is fixed at construction; no interior mutability is needed
/// because the port is read-only.
#[derive(Debug)]
pub struct InMemoryRoleCatalog {
    roles: HashMap<RoleId, RoleDefinition>,
}

impl InMemoryRoleCatalog {
    /// Builds a catalog from role definitions, rejecting duplicate ids.
    pub fn new(roles: Vec<RoleDefinition>) -> AppResult<Self> {
        let mut indexed = HashMap::with_capacity(roles.len());
        for role in roles {
            if indexed.contains_key(role.id()) {
                return Err(AppError::Conflict(format!(
                    "role '{}' is defined more than once",
                    role.id()
                )));
            }
            indexed.insert(role.id().clone(), role);
        }

        Ok(Self { roles: indexed })
    }
}

#[async_trait]
impl RoleCatalog for InMemoryRoleCatalog {
    async fn find_role(&self, role_id: &RoleId) -> AppResult<Option<RoleDefinition>> {
        Ok(self.roles.get(role_id).cloned())
    }

    async fn list_roles(&self) -> AppResult<Vec<RoleDefinition>> {
        let mut listed: Vec<RoleDefinition> = self.roles.values().cloned().collect();
        listed.sort_by(|left, right| left.id().as_str().cmp(right.id().as_str()));
        Ok(listed)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use aesthub_application::RoleCatalog;
    use aesthub_domain::{RoleDefinition, RoleId, RoleType};

    use super::InMemoryRoleCatalog;

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

    #[tokio::test]
    async fn find_returns_cataloged_role() {
        let catalog = InMemoryRoleCatalog::new(vec![
            role("role-admin", RoleType::Admin),
            role("role-doctor", RoleType::Staff),
        ]);
        assert!(catalog.is_ok());
        let catalog = catalog.unwrap_or_else(|_| unreachable!());

        let role_id = RoleId::new("role-doctor").unwrap_or_else(|_| unreachable!());
        let found = catalog.find_role(&role_id).await;
        assert!(found.is_ok());
        let found = found.unwrap_or_default();
        assert!(found.is_some_and(|role| role.role_type() == RoleType::Staff));
    }

    #[tokio::test]
    async fn unknown_role_resolves_to_none() {
        let catalog = InMemoryRoleCatalog::new(Vec::new());
        assert!(catalog.is_ok());
        let catalog = catalog.unwrap_or_else(|_| unreachable!());

        let role_id = RoleId::new("role-ghost").unwrap_or_else(|_| unreachable!());
        let found = catalog.find_role(&role_id).await;
        assert!(found.is_ok());
        assert!(found.unwrap_or_default().is_none());
    }

    #[test]
    fn duplicate_role_id_is_a_conflict() {
        let catalog = InMemoryRoleCatalog::new(vec![
            role("role-admin", RoleType::Admin),
            role("role-admin", RoleType::Staff),
        ]);
        assert!(catalog.is_err());
    }

    #[tokio::test]
    async fn listing_is_ordered_by_id() {
        let catalog = InMemoryRoleCatalog::new(vec![
            role("role-platform", RoleType::PlatformAdmin),
            role("role-admin", RoleType::Admin),
        ]);
        assert!(catalog.is_ok());
        let catalog = catalog.unwrap_or_else(|_| unreachable!());

        let listed = catalog.list_roles().await;
        assert!(listed.is_ok());
        let ids: Vec<String> = listed
            .unwrap_or_default()
            .iter()
            .map(|role| role.id().as_str().to_owned())
            .collect();
        assert_eq!(ids, vec!["role-admin".to_owned(), "role-platform".to_owned()]);
    }
}
