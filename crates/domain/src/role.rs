use std::collections::BTreeSet;
use std::str::FromStr;

use aesthub_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::AppId;

/// Closed classification of principals driving navigation and view routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleType {
    /// Institution administrator with full consumer-side access.
    Admin,
    /// Institution staff member (consultants, doctors).
    Staff,
    /// Independent practitioner on a personal account.
    Individual,
    /// Third-party application developer or vendor.
    ServiceProvider,
    /// Platform operator reviewing apps, providers and institutions.
    PlatformAdmin,
}

impl RoleType {
    /// Returns a stable storage value for this role type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
            Self::Individual => "individual",
            Self::ServiceProvider => "service_provider",
            Self::PlatformAdmin => "platform_admin",
        }
    }

    /// Returns all known role types.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[RoleType] = &[
            RoleType::Admin,
            RoleType::Staff,
            RoleType::Individual,
            RoleType::ServiceProvider,
            RoleType::PlatformAdmin,
        ];

        ALL
    }
}

impl FromStr for RoleType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "staff" => Ok(Self::Staff),
            "individual" => Ok(Self::Individual),
            "service_provider" => Ok(Self::ServiceProvider),
            "platform_admin" => Ok(Self::PlatformAdmin),
            _ => Err(AppError::Validation(format!(
                "unknown role type value '{value}'"
            ))),
        }
    }
}

/// Coarse functional capability tokens enforced by application policy checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Allows managing users and role assignments.
    ManageAccount,
    /// Allows viewing billing and recharge records.
    ViewFinance,
    /// Allows editing the product and knowledge data assets.
    ManageData,
    /// Allows read-only access to data assets.
    ViewData,
}

impl Permission {
    /// Returns a stable storage value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManageAccount => "account.manage",
            Self::ViewFinance => "finance.view",
            Self::ManageData => "data.manage",
            Self::ViewData => "data.view",
        }
    }

    /// Returns all known permissions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::ManageAccount,
            Permission::ViewFinance,
            Permission::ManageData,
            Permission::ViewData,
        ];

        ALL
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "account.manage" => Ok(Self::ManageAccount),
            "finance.view" => Ok(Self::ViewFinance),
            "data.manage" => Ok(Self::ManageData),
            "data.view" => Ok(Self::ViewData),
            _ => Err(AppError::Validation(format!(
                "unknown permission value '{value}'"
            ))),
        }
    }
}

/// Unique identifier for a role definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoleId(NonEmptyString);

impl RoleId {
    /// Creates a validated role identifier.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        Ok(Self(NonEmptyString::new(value)?))
    }

    /// Returns the underlying identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A named role archetype from the fixed role catalog.
///
/// The catalog is immutable at runtime: definitions are constructed once and
/// only read afterwards. Per-user grants layer on top of the base sets and
/// never modify them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinition {
    id: RoleId,
    name: NonEmptyString,
    description: String,
    role_type: RoleType,
    base_permissions: BTreeSet<Permission>,
    base_app_ids: BTreeSet<AppId>,
}

impl RoleDefinition {
    /// Creates a role definition with its base grants.
    pub fn new(
        id: RoleId,
        name: impl Into<String>,
        description: impl Into<String>,
        role_type: RoleType,
        base_permissions: BTreeSet<Permission>,
        base_app_ids: BTreeSet<AppId>,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            name: NonEmptyString::new(name)?,
            description: description.into(),
            role_type,
            base_permissions,
            base_app_ids,
        })
    }

    /// Returns the stable role identifier.
    #[must_use]
    pub fn id(&self) -> &RoleId {
        &self.id
    }

    /// Returns the display name of the role.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the role description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the internal role classification.
    #[must_use]
    pub fn role_type(&self) -> RoleType {
        self.role_type
    }

    /// Returns the permissions granted by the role itself.
    #[must_use]
    pub fn base_permissions(&self) -> &BTreeSet<Permission> {
        &self.base_permissions
    }

    /// Returns the applications authorized by the role itself.
    #[must_use]
    pub fn base_app_ids(&self) -> &BTreeSet<AppId> {
        &self.base_app_ids
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{Permission, RoleType};

    #[test]
    fn role_type_roundtrip_storage_value() {
        for role_type in RoleType::all() {
            let restored = RoleType::from_str(role_type.as_str());
            assert!(restored.is_ok());
            assert_eq!(restored.unwrap_or(RoleType::Staff), *role_type);
        }
    }

    #[test]
    fn permission_roundtrip_storage_value() {
        let permission = Permission::ManageAccount;
        let restored = Permission::from_str(permission.as_str());
        assert!(restored.is_ok());
        assert_eq!(restored.unwrap_or(Permission::ViewData), permission);
    }

    #[test]
    fn unknown_permission_is_rejected() {
        let parsed = Permission::from_str("finance.manage");
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_role_type_is_rejected() {
        assert!(RoleType::from_str("superuser").is_err());
    }
}
