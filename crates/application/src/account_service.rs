use std::sync::Arc;

use aesthub_core::{AppError, AppResult};
use aesthub_domain::{AppId, Permission, RoleType, User, UserId};

use crate::{
    AccessService, AccountManagementScope, UserDirectory, account_management_scope,
};

/// Content served by the account-management view, keyed on the actor's
/// role type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountManagementView {
    /// Full directory listing for institution administrators.
    Full(Vec<User>),
    /// Degraded read-only variant shown to individual accounts, carrying
    /// only the actor themselves alongside upsell content.
    Upsell(User),
    /// Directory restricted to fellow platform operators.
    PlatformPeers(Vec<User>),
}

/// Application service for user and supplement administration.
#[derive(Clone)]
pub struct AccountService {
    user_directory: Arc<dyn UserDirectory>,
    access: AccessService,
}

impl AccountService {
    /// Creates an account service.
    #[must_use]
    pub fn new(user_directory: Arc<dyn UserDirectory>, access: AccessService) -> Self {
        Self {
            user_directory,
            access,
        }
    }

    /// Returns the account-management content for the acting user.
    ///
    /// Staff and providers have no account surface at all and are rejected.
    /// The platform variant filters the directory by role-type equality;
    /// there is no tenant identifier in the model to scope by.
    pub async fn directory_listing(&self, actor: &User) -> AppResult<AccountManagementView> {
        let actor_role = self.access.resolve_role(actor).await?;

        match self.require_account_scope(actor, actor_role.role_type())? {
            AccountManagementScope::FullDirectory => {
                Ok(AccountManagementView::Full(self.user_directory.list().await?))
            }
            AccountManagementScope::PersonalUpsell => {
                Ok(AccountManagementView::Upsell(actor.clone()))
            }
            AccountManagementScope::PlatformPeers => {
                let mut peers = Vec::new();
                for user in self.user_directory.list().await? {
                    let role = self.access.resolve_role(&user).await?;
                    if role.role_type() == RoleType::PlatformAdmin {
                        peers.push(user);
                    }
                }
                Ok(AccountManagementView::PlatformPeers(peers))
            }
        }
    }

    /// Grants a supplemental permission to a user. Idempotent for an
    /// already-held supplement.
    pub async fn grant_extra_permission(
        &self,
        actor: &User,
        user_id: &UserId,
        permission: Permission,
    ) -> AppResult<User> {
        self.require_grant_authority(actor).await?;

        let mut user = self.find_target(user_id).await?;
        user.grant_extra_permission(permission);
        self.user_directory.update(user.clone()).await?;
        Ok(user)
    }

    /// Grants a supplemental application to a user. Idempotent for an
    /// already-held supplement.
    pub async fn grant_extra_app(
        &self,
        actor: &User,
        user_id: &UserId,
        app_id: AppId,
    ) -> AppResult<User> {
        self.require_grant_authority(actor).await?;

        let mut user = self.find_target(user_id).await?;
        user.grant_extra_app(app_id);
        self.user_directory.update(user.clone()).await?;
        Ok(user)
    }

    async fn find_target(&self, user_id: &UserId) -> AppResult<User> {
        self.user_directory
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{user_id}' does not exist")))
    }

    /// Supplement grants require both an account-scoped role type and the
    /// effective account-management permission.
    async fn require_grant_authority(&self, actor: &User) -> AppResult<()> {
        let actor_role = self.access.resolve_role(actor).await?;
        self.require_account_scope(actor, actor_role.role_type())?;

        if !self
            .access
            .has_permission(actor, Permission::ManageAccount)
            .await?
        {
            return Err(AppError::Forbidden(format!(
                "user '{}' lacks the '{}' permission",
                actor.id(),
                Permission::ManageAccount.as_str()
            )));
        }

        Ok(())
    }

    fn require_account_scope(
        &self,
        actor: &User,
        role_type: RoleType,
    ) -> AppResult<AccountManagementScope> {
        account_management_scope(role_type).ok_or_else(|| {
            AppError::Forbidden(format!(
                "role type '{}' has no account management surface (user '{}')",
                role_type.as_str(),
                actor.id()
            ))
        })
    }
}
