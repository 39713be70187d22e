use std::str::FromStr;

use aesthub_core::AppError;
use serde::{Deserialize, Serialize};

/// Closed enumeration of the navigable console views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    /// Consumer landing page with tasks and authorized apps.
    Workbench,
    /// Application marketplace browsing and subscription.
    AppMarket,
    /// User and role administration.
    AccountManagement,
    /// Billing, recharge and settlement records.
    Finance,
    /// Institution onboarding profile, submitted for platform review.
    InstitutionProfile,
    /// Product and knowledge data assets.
    DataCenter,
    /// Provider revenue overview.
    ProviderRevenue,
    /// Provider's published application management.
    ProviderApps,
    /// Provider onboarding profile.
    ProviderProfile,
    /// Platform queue reviewing application listings.
    PlatformAppReview,
    /// Platform queue reviewing provider onboarding.
    PlatformProviderReview,
    /// Platform management of onboarded institutions.
    PlatformInstitutions,
}

impl ViewId {
    /// Returns a stable storage value for this view.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Workbench => "workbench",
            Self::AppMarket => "app_market",
            Self::AccountManagement => "account_management",
            Self::Finance => "finance",
            Self::InstitutionProfile => "institution_profile",
            Self::DataCenter => "data_center",
            Self::ProviderRevenue => "provider_revenue",
            Self::ProviderApps => "provider_apps",
            Self::ProviderProfile => "provider_profile",
            Self::PlatformAppReview => "platform_app_review",
            Self::PlatformProviderReview => "platform_provider_review",
            Self::PlatformInstitutions => "platform_institutions",
        }
    }
}

impl FromStr for ViewId {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "workbench" => Ok(Self::Workbench),
            "app_market" => Ok(Self::AppMarket),
            "account_management" => Ok(Self::AccountManagement),
            "finance" => Ok(Self::Finance),
            "institution_profile" => Ok(Self::InstitutionProfile),
            "data_center" => Ok(Self::DataCenter),
            "provider_revenue" => Ok(Self::ProviderRevenue),
            "provider_apps" => Ok(Self::ProviderApps),
            "provider_profile" => Ok(Self::ProviderProfile),
            "platform_app_review" => Ok(Self::PlatformAppReview),
            "platform_provider_review" => Ok(Self::PlatformProviderReview),
            "platform_institutions" => Ok(Self::PlatformInstitutions),
            _ => Err(AppError::Validation(format!("unknown view value '{value}'"))),
        }
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}
