use async_trait::async_trait;

use aesthub_core::AppResult;
use aesthub_domain::{
    Institution, InstitutionId, ProviderId, RequestId, ServiceProvider, SubscriptionRequest,
};

/// Repository port for onboarded institutions.
#[async_trait]
pub trait InstitutionRegistry: Send + Sync {
    /// Finds an institution by identifier.
    async fn find(&self, institution_id: &InstitutionId) -> AppResult<Option<Institution>>;

    /// Lists every institution.
    async fn list(&self) -> AppResult<Vec<Institution>>;

    /// Persists an institution record, replacing any previous state.
    async fn save(&self, institution: Institution) -> AppResult<()>;
}

/// Repository port for service-provider onboarding applications.
#[async_trait]
pub trait ProviderRegistry: Send + Sync {
    /// Finds a provider by identifier.
    async fn find(&self, provider_id: &ProviderId) -> AppResult<Option<ServiceProvider>>;

    /// Lists every provider application.
    async fn list(&self) -> AppResult<Vec<ServiceProvider>>;

    /// Persists a provider record, replacing any previous state.
    async fn save(&self, provider: ServiceProvider) -> AppResult<()>;
}

/// Repository port for staff subscription requests.
#[async_trait]
pub trait SubscriptionQueue: Send + Sync {
    /// Finds a request by identifier.
    async fn find(&self, request_id: &RequestId) -> AppResult<Option<SubscriptionRequest>>;

    /// Lists every request in submission order.
    async fn list(&self) -> AppResult<Vec<SubscriptionRequest>>;

    /// Persists a request, replacing any previous state.
    async fn save(&self, request: SubscriptionRequest) -> AppResult<()>;
}
