use std::collections::HashMap;

use async_trait::async_trait;
use aesthub_application::ProviderRegistry;
use aesthub_core::AppResult;
use aesthub_domain::{ProviderId, ServiceProvider};
use tokio::sync::RwLock;

/// In-memory provider registry implementation.
#[derive(Debug, Default)]
pub struct InMemoryProviderRegistry {
    providers: RwLock<HashMap<ProviderId, ServiceProvider>>,
}

impl InMemoryProviderRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            providers: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ProviderRegistry for InMemoryProviderRegistry {
    async fn find(&self, provider_id: &ProviderId) -> AppResult<Option<ServiceProvider>> {
        Ok(self.providers.read().await.get(provider_id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<ServiceProvider>> {
        let providers = self.providers.read().await;
        let mut listed: Vec<ServiceProvider> = providers.values().cloned().collect();
        listed.sort_by(|left, right| left.id().as_str().cmp(right.id().as_str()));
        Ok(listed)
    }

    async fn save(&self, provider: ServiceProvider) -> AppResult<()> {
        self.providers
            .write()
            .await
            .insert(provider.id().clone(), provider);
        Ok(())
    }
}
