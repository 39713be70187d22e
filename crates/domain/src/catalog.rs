//! Application catalog entries.
//!
//! The catalog is an external collaborator from the access evaluator's
//! point of view: it supplies application identifiers and display metadata,
//! and the evaluator neither validates nor mutates it. Listing decisions
//! made by the platform review queue do mutate audit and listing status.

use aesthub_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::ReviewStatus;

/// Unique identifier for a catalog application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AppId(NonEmptyString);

impl AppId {
    /// Creates a validated application identifier.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        Ok(Self(NonEmptyString::new(value)?))
    }

    /// Returns the underlying identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Origin of a catalog application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppKind {
    /// Built and operated by the platform itself.
    Official,
    /// Published by an onboarded service provider.
    ThirdParty,
}

/// How an application integrates with the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationMode {
    /// Rendered inside the hub through the platform API.
    ApiEmbedded,
    /// Opens in the vendor's own surface via an external link.
    ExternalLink,
    /// Headless API access only.
    PureApi,
}

/// Marketplace visibility of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    /// Visible in the marketplace.
    Listed,
    /// Hidden from the marketplace.
    Unlisted,
}

/// One application in the marketplace catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketApp {
    id: AppId,
    name: NonEmptyString,
    description: String,
    kind: AppKind,
    category: NonEmptyString,
    provider_name: NonEmptyString,
    integration: IntegrationMode,
    audit_status: ReviewStatus,
    listing_status: ListingStatus,
}

impl MarketApp {
    /// Creates a catalog entry awaiting platform audit.
    pub fn new(
        id: AppId,
        name: impl Into<String>,
        description: impl Into<String>,
        kind: AppKind,
        category: impl Into<String>,
        provider_name: impl Into<String>,
        integration: IntegrationMode,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            name: NonEmptyString::new(name)?,
            description: description.into(),
            kind,
            category: NonEmptyString::new(category)?,
            provider_name: NonEmptyString::new(provider_name)?,
            integration,
            audit_status: ReviewStatus::Pending,
            listing_status: ListingStatus::Unlisted,
        })
    }

    /// Returns the application identifier.
    #[must_use]
    pub fn id(&self) -> &AppId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the short description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the application origin.
    #[must_use]
    pub fn kind(&self) -> AppKind {
        self.kind
    }

    /// Returns the marketplace category.
    #[must_use]
    pub fn category(&self) -> &str {
        self.category.as_str()
    }

    /// Returns the publishing provider's display name.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider_name.as_str()
    }

    /// Returns the integration mode.
    #[must_use]
    pub fn integration(&self) -> IntegrationMode {
        self.integration
    }

    /// Returns the platform audit status.
    #[must_use]
    pub fn audit_status(&self) -> ReviewStatus {
        self.audit_status
    }

    /// Returns the marketplace visibility.
    #[must_use]
    pub fn listing_status(&self) -> ListingStatus {
        self.listing_status
    }

    /// Approves the pending audit and lists the application. The reviewer
    /// may adjust the integration mode as part of the decision.
    pub fn approve(&mut self, integration: IntegrationMode) -> AppResult<()> {
        self.require_pending_audit()?;
        self.audit_status = ReviewStatus::Approved;
        self.listing_status = ListingStatus::Listed;
        self.integration = integration;
        Ok(())
    }

    /// Rejects the pending audit, keeping the application unlisted.
    pub fn reject(&mut self) -> AppResult<()> {
        self.require_pending_audit()?;
        self.audit_status = ReviewStatus::Rejected;
        self.listing_status = ListingStatus::Unlisted;
        Ok(())
    }

    fn require_pending_audit(&self) -> AppResult<()> {
        if self.audit_status != ReviewStatus::Pending {
            return Err(AppError::Conflict(format!(
                "application '{}' is not awaiting audit (status '{}')",
                self.id,
                self.audit_status.as_str()
            )));
        }

        Ok(())
    }
}
