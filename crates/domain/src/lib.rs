//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod catalog;
mod grant;
mod partner;
mod review;
mod role;
mod user;
mod view;

pub use catalog::{AppId, AppKind, IntegrationMode, ListingStatus, MarketApp};
pub use grant::EffectiveGrant;
pub use partner::{
    EmailAddress, Institution, InstitutionId, InstitutionProfile, InstitutionStatus, ProviderId,
    ServiceProvider,
};
pub use review::{RequestId, ReviewStatus, SubscriptionRequest};
pub use role::{Permission, RoleDefinition, RoleId, RoleType};
pub use user::{DataScope, PhoneNumber, User, UserId};
pub use view::ViewId;
