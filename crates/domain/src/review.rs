use std::str::FromStr;

use aesthub_core::{AppError, AppResult, NonEmptyString};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AppId, UserId};

/// Review decision state shared by every platform queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Awaiting a decision.
    Pending,
    /// Decision taken in favor.
    Approved,
    /// Decision taken against.
    Rejected,
}

impl ReviewStatus {
    /// Returns a stable storage value for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl FromStr for ReviewStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(AppError::Validation(format!(
                "unknown review status value '{value}'"
            ))),
        }
    }
}

/// Unique identifier for a subscription request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Creates a validated request identifier from an existing value.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        Ok(Self(NonEmptyString::new(value)?.into()))
    }

    /// Generates a fresh random request identifier.
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

impl std::fmt::Display for RequestId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A staff member's request to subscribe to a catalog application,
/// decided by an institution administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    id: RequestId,
    user_id: UserId,
    app_id: AppId,
    requested_at: DateTime<Utc>,
    status: ReviewStatus,
}

impl SubscriptionRequest {
    /// Creates a pending subscription request.
    #[must_use]
    pub fn new(id: RequestId, user_id: UserId, app_id: AppId, requested_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            app_id,
            requested_at,
            status: ReviewStatus::Pending,
        }
    }

    /// Returns the request identifier.
    #[must_use]
    pub fn id(&self) -> &RequestId {
        &self.id
    }

    /// Returns the requesting user.
    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the requested application.
    #[must_use]
    pub fn app_id(&self) -> &AppId {
        &self.app_id
    }

    /// Returns the request timestamp.
    #[must_use]
    pub fn requested_at(&self) -> DateTime<Utc> {
        self.requested_at
    }

    /// Returns the decision state.
    #[must_use]
    pub fn status(&self) -> ReviewStatus {
        self.status
    }

    /// Approves the pending request.
    pub fn approve(&mut self) -> AppResult<()> {
        self.require_pending()?;
        self.status = ReviewStatus::Approved;
        Ok(())
    }

    /// Rejects the pending request.
    pub fn reject(&mut self) -> AppResult<()> {
        self.require_pending()?;
        self.status = ReviewStatus::Rejected;
        Ok(())
    }

    fn require_pending(&self) -> AppResult<()> {
        if self.status != ReviewStatus::Pending {
            return Err(AppError::Conflict(format!(
                "subscription request '{}' has already been decided (status '{}')",
                self.id,
                self.status.as_str()
            )));
        }

        Ok(())
    }
}
