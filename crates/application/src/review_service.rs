use std::sync::Arc;

use aesthub_core::{AppError, AppResult};
use aesthub_domain::{
    AppId, Institution, InstitutionId, InstitutionProfile, InstitutionStatus, IntegrationMode,
    MarketApp, PhoneNumber, ProviderId, RequestId, ReviewStatus, RoleType, ServiceProvider,
    SubscriptionRequest, User, ViewId,
};
use chrono::Utc;

use crate::{
    AccessService, ApplicationCatalog, InstitutionRegistry, ProviderRegistry, SubscriptionQueue,
    UserDirectory, is_visible,
};

/// Editable institution profile fields submitted for platform review.
#[derive(Debug, Clone)]
pub struct InstitutionProfileInput {
    /// Institution being updated.
    pub institution_id: String,
    /// Registered institution name.
    pub name: String,
    /// Primary contact person.
    pub contact_person: String,
    /// Contact phone number.
    pub phone: String,
    /// City of operation.
    pub city: String,
}

/// Application service for the review queues.
///
/// Platform operators decide application listings, provider onboarding and
/// institution onboarding; institution administrators decide staff
/// subscription requests and submit their institution profile. Every
/// decision applies only to a pending entry and mutates in-memory state
/// atomically.
#[derive(Clone)]
pub struct ReviewService {
    app_catalog: Arc<dyn ApplicationCatalog>,
    institutions: Arc<dyn InstitutionRegistry>,
    providers: Arc<dyn ProviderRegistry>,
    subscriptions: Arc<dyn SubscriptionQueue>,
    user_directory: Arc<dyn UserDirectory>,
    access: AccessService,
}

impl ReviewService {
    /// Creates a review service.
    #[must_use]
    pub fn new(
        app_catalog: Arc<dyn ApplicationCatalog>,
        institutions: Arc<dyn InstitutionRegistry>,
        providers: Arc<dyn ProviderRegistry>,
        subscriptions: Arc<dyn SubscriptionQueue>,
        user_directory: Arc<dyn UserDirectory>,
        access: AccessService,
    ) -> Self {
        Self {
            app_catalog,
            institutions,
            providers,
            subscriptions,
            user_directory,
            access,
        }
    }

    /// Submits a subscription request for a marketplace application.
    ///
    /// Open to any role type that sees the app market.
    pub async fn request_subscription(
        &self,
        actor: &User,
        app_id: &AppId,
    ) -> AppResult<SubscriptionRequest> {
        let role = self.access.resolve_role(actor).await?;
        if !is_visible(role.role_type(), ViewId::AppMarket) {
            return Err(AppError::Forbidden(format!(
                "role type '{}' cannot browse the app market",
                role.role_type().as_str()
            )));
        }

        self.app_catalog
            .find_app(app_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("application '{app_id}' does not exist")))?;

        let request = SubscriptionRequest::new(
            RequestId::generate(),
            actor.id().clone(),
            app_id.clone(),
            Utc::now(),
        );
        self.subscriptions.save(request.clone()).await?;
        Ok(request)
    }

    /// Lists pending subscription requests for an institution admin.
    pub async fn pending_subscription_requests(
        &self,
        actor: &User,
    ) -> AppResult<Vec<SubscriptionRequest>> {
        self.require_role(actor, RoleType::Admin).await?;
        Ok(self
            .subscriptions
            .list()
            .await?
            .into_iter()
            .filter(|request| request.status() == ReviewStatus::Pending)
            .collect())
    }

    /// Approves a pending subscription request and grants the application
    /// to the requesting user as a per-user supplement.
    pub async fn approve_subscription(
        &self,
        actor: &User,
        request_id: &RequestId,
    ) -> AppResult<SubscriptionRequest> {
        self.require_role(actor, RoleType::Admin).await?;

        let mut request = self.find_request(request_id).await?;
        request.approve()?;

        let mut requester = self
            .user_directory
            .find_by_id(request.user_id())
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "requesting user '{}' does not exist",
                    request.user_id()
                ))
            })?;
        requester.grant_extra_app(request.app_id().clone());
        self.user_directory.update(requester).await?;

        self.subscriptions.save(request.clone()).await?;
        Ok(request)
    }

    /// Rejects a pending subscription request.
    pub async fn reject_subscription(
        &self,
        actor: &User,
        request_id: &RequestId,
    ) -> AppResult<SubscriptionRequest> {
        self.require_role(actor, RoleType::Admin).await?;

        let mut request = self.find_request(request_id).await?;
        request.reject()?;
        self.subscriptions.save(request.clone()).await?;
        Ok(request)
    }

    /// Lists applications awaiting platform audit.
    pub async fn pending_apps(&self, actor: &User) -> AppResult<Vec<MarketApp>> {
        self.require_role(actor, RoleType::PlatformAdmin).await?;
        Ok(self
            .app_catalog
            .list_apps()
            .await?
            .into_iter()
            .filter(|app| app.audit_status() == ReviewStatus::Pending)
            .collect())
    }

    /// Approves a pending application audit and lists the application.
    pub async fn approve_app(
        &self,
        actor: &User,
        app_id: &AppId,
        integration: IntegrationMode,
    ) -> AppResult<MarketApp> {
        self.require_role(actor, RoleType::PlatformAdmin).await?;

        let mut app = self.find_app(app_id).await?;
        app.approve(integration)?;
        self.app_catalog.save_app(app.clone()).await?;
        Ok(app)
    }

    /// Rejects a pending application audit.
    pub async fn reject_app(&self, actor: &User, app_id: &AppId) -> AppResult<MarketApp> {
        self.require_role(actor, RoleType::PlatformAdmin).await?;

        let mut app = self.find_app(app_id).await?;
        app.reject()?;
        self.app_catalog.save_app(app.clone()).await?;
        Ok(app)
    }

    /// Lists provider onboarding applications awaiting review.
    pub async fn pending_providers(&self, actor: &User) -> AppResult<Vec<ServiceProvider>> {
        self.require_role(actor, RoleType::PlatformAdmin).await?;
        Ok(self
            .providers
            .list()
            .await?
            .into_iter()
            .filter(|provider| provider.status() == ReviewStatus::Pending)
            .collect())
    }

    /// Approves a pending provider onboarding application.
    pub async fn approve_provider(
        &self,
        actor: &User,
        provider_id: &ProviderId,
    ) -> AppResult<ServiceProvider> {
        self.require_role(actor, RoleType::PlatformAdmin).await?;

        let mut provider = self.find_provider(provider_id).await?;
        provider.approve()?;
        self.providers.save(provider.clone()).await?;
        Ok(provider)
    }

    /// Rejects a pending provider onboarding application.
    pub async fn reject_provider(
        &self,
        actor: &User,
        provider_id: &ProviderId,
    ) -> AppResult<ServiceProvider> {
        self.require_role(actor, RoleType::PlatformAdmin).await?;

        let mut provider = self.find_provider(provider_id).await?;
        provider.reject()?;
        self.providers.save(provider.clone()).await?;
        Ok(provider)
    }

    /// Lists institutions awaiting onboarding review.
    pub async fn pending_institutions(&self, actor: &User) -> AppResult<Vec<Institution>> {
        self.require_role(actor, RoleType::PlatformAdmin).await?;
        Ok(self
            .institutions
            .list()
            .await?
            .into_iter()
            .filter(|institution| institution.status() == InstitutionStatus::Pending)
            .collect())
    }

    /// Activates a pending institution.
    pub async fn approve_institution(
        &self,
        actor: &User,
        institution_id: &InstitutionId,
    ) -> AppResult<Institution> {
        self.require_role(actor, RoleType::PlatformAdmin).await?;

        let mut institution = self.find_institution(institution_id).await?;
        institution.approve()?;
        self.institutions.save(institution.clone()).await?;
        Ok(institution)
    }

    /// Suspends a pending institution.
    pub async fn reject_institution(
        &self,
        actor: &User,
        institution_id: &InstitutionId,
    ) -> AppResult<Institution> {
        self.require_role(actor, RoleType::PlatformAdmin).await?;

        let mut institution = self.find_institution(institution_id).await?;
        institution.reject()?;
        self.institutions.save(institution.clone()).await?;
        Ok(institution)
    }

    /// Replaces an institution's onboarding profile and returns it to the
    /// platform review queue.
    pub async fn submit_institution_profile(
        &self,
        actor: &User,
        input: InstitutionProfileInput,
    ) -> AppResult<Institution> {
        self.require_role(actor, RoleType::Admin).await?;

        let institution_id = InstitutionId::new(input.institution_id)?;
        let profile = InstitutionProfile::new(
            input.name,
            input.contact_person,
            PhoneNumber::new(input.phone)?,
            input.city,
        )?;

        let mut institution = self.find_institution(&institution_id).await?;
        institution.submit_profile(profile);
        self.institutions.save(institution.clone()).await?;
        Ok(institution)
    }

    async fn require_role(&self, actor: &User, expected: RoleType) -> AppResult<()> {
        let role = self.access.resolve_role(actor).await?;
        if role.role_type() != expected {
            return Err(AppError::Forbidden(format!(
                "user '{}' must hold a {} role for this operation",
                actor.id(),
                expected.as_str()
            )));
        }

        Ok(())
    }

    async fn find_request(&self, request_id: &RequestId) -> AppResult<SubscriptionRequest> {
        self.subscriptions.find(request_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("subscription request '{request_id}' does not exist"))
        })
    }

    async fn find_app(&self, app_id: &AppId) -> AppResult<MarketApp> {
        self.app_catalog
            .find_app(app_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("application '{app_id}' does not exist")))
    }

    async fn find_provider(&self, provider_id: &ProviderId) -> AppResult<ServiceProvider> {
        self.providers
            .find(provider_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("provider '{provider_id}' does not exist")))
    }

    async fn find_institution(&self, institution_id: &InstitutionId) -> AppResult<Institution> {
        self.institutions.find(institution_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("institution '{institution_id}' does not exist"))
        })
    }
}
