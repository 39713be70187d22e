//! Onboarded partners: institutions and service providers.

use aesthub_core::{AppError, AppResult, NonEmptyString};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{PhoneNumber, ReviewStatus};

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// Structural validation only: exactly one `@`, non-empty local part,
    /// domain containing at least one `.`, at most 254 characters.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim().to_lowercase();

        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(AppError::Validation(
                "email address must contain '@'".to_owned(),
            ));
        };

        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(AppError::Validation(
                "email address must have the form local@domain".to_owned(),
            ));
        }

        if !domain.contains('.') {
            return Err(AppError::Validation(
                "email domain must contain at least one '.'".to_owned(),
            ));
        }

        if trimmed.len() > 254 {
            return Err(AppError::Validation(
                "email address must not exceed 254 characters".to_owned(),
            ));
        }

        Ok(Self(trimmed))
    }

    /// Returns the validated email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Unique identifier for an institution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstitutionId(NonEmptyString);

impl InstitutionId {
    /// Creates a validated institution identifier.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        Ok(Self(NonEmptyString::new(value)?))
    }

    /// Returns the underlying identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for InstitutionId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Onboarding state of an institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstitutionStatus {
    /// Profile submitted, awaiting platform review.
    Pending,
    /// Onboarded and operating on the platform.
    Active,
    /// Rejected or taken off the platform.
    Suspended,
}

impl InstitutionStatus {
    /// Returns a stable storage value for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Suspended => "suspended",
        }
    }
}

/// Editable onboarding profile fields of an institution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionProfile {
    /// Registered institution name.
    pub name: NonEmptyString,
    /// Primary contact person.
    pub contact_person: NonEmptyString,
    /// Contact phone number.
    pub phone: PhoneNumber,
    /// City of operation.
    pub city: NonEmptyString,
}

impl InstitutionProfile {
    /// Creates a validated institution profile.
    pub fn new(
        name: impl Into<String>,
        contact_person: impl Into<String>,
        phone: PhoneNumber,
        city: impl Into<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            name: NonEmptyString::new(name)?,
            contact_person: NonEmptyString::new(contact_person)?,
            phone,
            city: NonEmptyString::new(city)?,
        })
    }
}

/// A medical-aesthetics institution onboarded to the hub.
///
/// Profile changes go through a submit-for-review workflow: submitting
/// replaces the editable fields and returns the institution to `Pending`
/// until the platform decides again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Institution {
    id: InstitutionId,
    profile: InstitutionProfile,
    status: InstitutionStatus,
    joined_on: NaiveDate,
}

impl Institution {
    /// Creates an institution record.
    #[must_use]
    pub fn new(
        id: InstitutionId,
        profile: InstitutionProfile,
        status: InstitutionStatus,
        joined_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            profile,
            status,
            joined_on,
        }
    }

    /// Returns the institution identifier.
    #[must_use]
    pub fn id(&self) -> &InstitutionId {
        &self.id
    }

    /// Returns the onboarding profile.
    #[must_use]
    pub fn profile(&self) -> &InstitutionProfile {
        &self.profile
    }

    /// Returns the onboarding state.
    #[must_use]
    pub fn status(&self) -> InstitutionStatus {
        self.status
    }

    /// Returns the onboarding date.
    #[must_use]
    pub fn joined_on(&self) -> NaiveDate {
        self.joined_on
    }

    /// Replaces the profile and returns the institution to review.
    pub fn submit_profile(&mut self, profile: InstitutionProfile) {
        self.profile = profile;
        self.status = InstitutionStatus::Pending;
    }

    /// Activates a pending institution.
    pub fn approve(&mut self) -> AppResult<()> {
        self.require_pending()?;
        self.status = InstitutionStatus::Active;
        Ok(())
    }

    /// Suspends a pending institution.
    pub fn reject(&mut self) -> AppResult<()> {
        self.require_pending()?;
        self.status = InstitutionStatus::Suspended;
        Ok(())
    }

    fn require_pending(&self) -> AppResult<()> {
        if self.status != InstitutionStatus::Pending {
            return Err(AppError::Conflict(format!(
                "institution '{}' is not awaiting review (status '{}')",
                self.id,
                self.status.as_str()
            )));
        }

        Ok(())
    }
}

/// Unique identifier for a service provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProviderId(NonEmptyString);

impl ProviderId {
    /// Creates a validated provider identifier.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        Ok(Self(NonEmptyString::new(value)?))
    }

    /// Returns the underlying identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A third-party application vendor applying to publish on the hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceProvider {
    id: ProviderId,
    name: NonEmptyString,
    contact_person: NonEmptyString,
    phone: PhoneNumber,
    email: EmailAddress,
    description: String,
    status: ReviewStatus,
    joined_on: NaiveDate,
}

impl ServiceProvider {
    /// Creates a provider onboarding record.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ProviderId,
        name: impl Into<String>,
        contact_person: impl Into<String>,
        phone: PhoneNumber,
        email: EmailAddress,
        description: impl Into<String>,
        status: ReviewStatus,
        joined_on: NaiveDate,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            name: NonEmptyString::new(name)?,
            contact_person: NonEmptyString::new(contact_person)?,
            phone,
            email,
            description: description.into(),
            status,
            joined_on,
        })
    }

    /// Returns the provider identifier.
    #[must_use]
    pub fn id(&self) -> &ProviderId {
        &self.id
    }

    /// Returns the company name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the primary contact person.
    #[must_use]
    pub fn contact_person(&self) -> &str {
        self.contact_person.as_str()
    }

    /// Returns the contact phone number.
    #[must_use]
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    /// Returns the contact email address.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the company description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the onboarding decision state.
    #[must_use]
    pub fn status(&self) -> ReviewStatus {
        self.status
    }

    /// Returns the application date.
    #[must_use]
    pub fn joined_on(&self) -> NaiveDate {
        self.joined_on
    }

    /// Approves the pending onboarding application.
    pub fn approve(&mut self) -> AppResult<()> {
        self.require_pending()?;
        self.status = ReviewStatus::Approved;
        Ok(())
    }

    /// Rejects the pending onboarding application.
    pub fn reject(&mut self) -> AppResult<()> {
        self.require_pending()?;
        self.status = ReviewStatus::Rejected;
        Ok(())
    }

    fn require_pending(&self) -> AppResult<()> {
        if self.status != ReviewStatus::Pending {
            return Err(AppError::Conflict(format!(
                "provider '{}' is not awaiting review (status '{}')",
                self.id,
                self.status.as_str()
            )));
        }

        Ok(())
    }
}
