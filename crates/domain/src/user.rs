//! User domain types and validation rules.

use std::collections::BTreeSet;

use aesthub_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AppId, Permission, RoleId};

/// Unique identifier for a user record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a validated user identifier from an existing value.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        Ok(Self(NonEmptyString::new(value)?.into()))
    }

    /// Generates a fresh random user identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the underlying identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Validated phone number.
///
/// Accepts an optional leading `+` followed by 6 to 20 digits. Separators
/// and extensions are not accepted; callers normalize before constructing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Creates a validated phone number.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "phone number must not be empty".to_owned(),
            ));
        }

        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);

        if digits.is_empty() || !digits.chars().all(|character| character.is_ascii_digit()) {
            return Err(AppError::Validation(format!(
                "phone number '{trimmed}' must contain only digits after an optional '+'"
            )));
        }

        if digits.len() < 6 || digits.len() > 20 {
            return Err(AppError::Validation(
                "phone number must contain between 6 and 20 digits".to_owned(),
            ));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the validated phone string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Data visibility scope attached to a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataScope {
    /// Sees every record in the institution.
    All,
    /// Sees only records assigned to them.
    Assigned,
}

impl DataScope {
    /// Returns a stable storage value for this scope.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Assigned => "assigned",
        }
    }
}

/// One principal in the system.
///
/// Every user references exactly one role from the catalog. The
/// `extra_app_ids` and `extra_permissions` sets are per-user supplements
/// layered additively over the role's base grants; there is no mechanism to
/// revoke a base grant per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: NonEmptyString,
    phone: Option<PhoneNumber>,
    role_id: RoleId,
    data_scope: DataScope,
    extra_app_ids: BTreeSet<AppId>,
    extra_permissions: BTreeSet<Permission>,
}

impl User {
    /// Creates a user record with no supplements.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        phone: Option<PhoneNumber>,
        role_id: RoleId,
        data_scope: DataScope,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            name: NonEmptyString::new(name)?,
            phone,
            role_id,
            data_scope,
            extra_app_ids: BTreeSet::new(),
            extra_permissions: BTreeSet::new(),
        })
    }

    /// Returns the stable user identifier.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the registered phone number, if any.
    #[must_use]
    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    /// Returns the referenced role identifier.
    #[must_use]
    pub fn role_id(&self) -> &RoleId {
        &self.role_id
    }

    /// Returns the data visibility scope.
    #[must_use]
    pub fn data_scope(&self) -> DataScope {
        self.data_scope
    }

    /// Returns the per-user supplemental application grants.
    #[must_use]
    pub fn extra_app_ids(&self) -> &BTreeSet<AppId> {
        &self.extra_app_ids
    }

    /// Returns the per-user supplemental permissions.
    #[must_use]
    pub fn extra_permissions(&self) -> &BTreeSet<Permission> {
        &self.extra_permissions
    }

    /// Grants a supplemental permission. Returns `false` when the user
    /// already held the supplement.
    pub fn grant_extra_permission(&mut self, permission: Permission) -> bool {
        self.extra_permissions.insert(permission)
    }

    /// Grants a supplemental application. Returns `false` when the user
    /// already held the supplement.
    pub fn grant_extra_app(&mut self, app_id: AppId) -> bool {
        self.extra_app_ids.insert(app_id)
    }
}
