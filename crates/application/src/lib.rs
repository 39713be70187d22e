//! Application services and ports.

#![forbid(unsafe_code)]

mod access_service;
mod account_service;
mod directory_ports;
mod navigation;
mod registration_service;
mod review_ports;
mod review_service;
mod session_service;

pub use access_service::AccessService;
pub use account_service::{AccountManagementView, AccountService};
pub use directory_ports::{ApplicationCatalog, RoleCatalog, UserDirectory};
pub use navigation::{
    AccountManagementScope, account_management_scope, authorize, can_manage_account,
    can_view_finance, default_view, is_visible, visible_views,
};
pub use registration_service::{RegisterInput, RegistrationOutcome, RegistrationService};
pub use review_ports::{InstitutionRegistry, ProviderRegistry, SubscriptionQueue};
pub use review_service::{InstitutionProfileInput, ReviewService};
pub use session_service::{Session, SessionService};
