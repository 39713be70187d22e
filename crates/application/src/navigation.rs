//! Role-type keyed view routing and navigation gating.
//!
//! The visibility table here is the single authoritative policy for which
//! navigation entries a role type sees. It is deliberately independent of
//! the permission-union mechanism in [`crate::AccessService`]: granting a
//! staff member the account-management permission as a supplement never
//! makes the account views visible to them.

use aesthub_domain::{RoleType, ViewId};

/// Returns whether the role type carries an account-management surface.
///
/// True for institution admins, individuals (degraded variant) and the
/// platform operator (peer-scoped variant).
#[must_use]
pub fn can_manage_account(role_type: RoleType) -> bool {
    matches!(
        role_type,
        RoleType::Admin | RoleType::Individual | RoleType::PlatformAdmin
    )
}

/// Returns whether the role type sees the finance views.
#[must_use]
pub fn can_view_finance(role_type: RoleType) -> bool {
    matches!(role_type, RoleType::Admin | RoleType::Individual)
}

/// Returns the landing view for a role type.
#[must_use]
pub fn default_view(role_type: RoleType) -> ViewId {
    match role_type {
        RoleType::Admin | RoleType::Staff | RoleType::Individual => ViewId::Workbench,
        RoleType::ServiceProvider => ViewId::ProviderRevenue,
        RoleType::PlatformAdmin => ViewId::PlatformAppReview,
    }
}

/// Returns the ordered navigation entries visible to a role type.
#[must_use]
pub fn visible_views(role_type: RoleType) -> Vec<ViewId> {
    match role_type {
        RoleType::Admin => vec![
            ViewId::Workbench,
            ViewId::AppMarket,
            ViewId::AccountManagement,
            ViewId::Finance,
            ViewId::InstitutionProfile,
            ViewId::DataCenter,
        ],
        RoleType::Staff => vec![ViewId::Workbench, ViewId::AppMarket, ViewId::DataCenter],
        RoleType::Individual => vec![
            ViewId::Workbench,
            ViewId::AppMarket,
            ViewId::AccountManagement,
            ViewId::Finance,
            ViewId::DataCenter,
        ],
        RoleType::ServiceProvider => vec![
            ViewId::ProviderRevenue,
            ViewId::ProviderApps,
            ViewId::ProviderProfile,
        ],
        RoleType::PlatformAdmin => vec![
            ViewId::AccountManagement,
            ViewId::PlatformAppReview,
            ViewId::PlatformProviderReview,
            ViewId::PlatformInstitutions,
        ],
    }
}

/// Returns whether a view is visible to a role type.
#[must_use]
pub fn is_visible(role_type: RoleType, view: ViewId) -> bool {
    visible_views(role_type).contains(&view)
}

/// Authorizes a navigation request, redirecting to the role type's default
/// view when the requested view is not visible.
#[must_use]
pub fn authorize(role_type: RoleType, requested: ViewId) -> ViewId {
    if is_visible(role_type, requested) {
        requested
    } else {
        default_view(role_type)
    }
}

/// Content variant of the account-management view per role type.
///
/// This is content routing keyed on role type, not a permission check: the
/// individual variant is a read-only upsell, and the platform variant lists
/// only fellow platform operators (scoped by role-type equality, since the
/// model carries no tenant identifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountManagementScope {
    /// Full staff and role directory editor.
    FullDirectory,
    /// Read-only personal view with an upgrade prompt.
    PersonalUpsell,
    /// Directory restricted to other platform operators.
    PlatformPeers,
}

/// Returns the account-management content variant for a role type, or
/// `None` when the role type has no account surface at all.
#[must_use]
pub fn account_management_scope(role_type: RoleType) -> Option<AccountManagementScope> {
    match role_type {
        RoleType::Admin => Some(AccountManagementScope::FullDirectory),
        RoleType::Individual => Some(AccountManagementScope::PersonalUpsell),
        RoleType::PlatformAdmin => Some(AccountManagementScope::PlatformPeers),
        RoleType::Staff | RoleType::ServiceProvider => None,
    }
}
