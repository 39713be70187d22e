use async_trait::async_trait;

use aesthub_core::AppResult;
use aesthub_domain::{AppId, MarketApp, PhoneNumber, RoleDefinition, RoleId, User, UserId};

/// Read-only port over the fixed role catalog.
///
/// The catalog is immutable at runtime; implementations expose lookups only.
#[async_trait]
pub trait RoleCatalog: Send + Sync {
    /// Finds a role definition by identifier.
    async fn find_role(&self, role_id: &RoleId) -> AppResult<Option<RoleDefinition>>;

    /// Lists every cataloged role definition.
    async fn list_roles(&self) -> AppResult<Vec<RoleDefinition>>;
}

/// Repository port for the user directory.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Finds a user by their unique identifier.
    async fn find_by_id(&self, user_id: &UserId) -> AppResult<Option<User>>;

    /// Lists all users registered with the given phone number.
    async fn find_by_phone(&self, phone: &PhoneNumber) -> AppResult<Vec<User>>;

    /// Lists the whole directory in insertion order.
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Appends a new user. Fails on a duplicate identifier.
    async fn insert(&self, user: User) -> AppResult<()>;

    /// Replaces an existing user record. Fails when the user is unknown.
    async fn update(&self, user: User) -> AppResult<()>;
}

/// Port over the marketplace application catalog.
///
/// Display metadata supplier from the access evaluator's point of view; the
/// platform review queue also persists audit decisions through it.
#[async_trait]
pub trait ApplicationCatalog: Send + Sync {
    /// Finds an application by identifier.
    async fn find_app(&self, app_id: &AppId) -> AppResult<Option<MarketApp>>;

    /// Lists every cataloged application.
    async fn list_apps(&self) -> AppResult<Vec<MarketApp>>;

    /// Persists an application entry, replacing any previous state.
    async fn save_app(&self, app: MarketApp) -> AppResult<()>;
}
