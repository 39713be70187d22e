use std::collections::HashMap;

use async_trait::async_trait;
use aesthub_application::ApplicationCatalog;
use aesthub_core::AppResult;
use aesthub_domain::{AppId, MarketApp};
use tokio::sync::RwLock;

/// In-memory marketplace catalog implementation.
#[derive(Debug, Default)]
pub struct InMemoryApplicationCatalog {
    apps: RwLock<HashMap<AppId, MarketApp>>,
}

impl InMemoryApplicationCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            apps: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ApplicationCatalog for InMemoryApplicationCatalog {
    async fn find_app(&self, app_id: &AppId) -> AppResult<Option<MarketApp>> {
        Ok(self.apps.read().await.get(app_id).cloned())
    }

    async fn list_apps(&self) -> AppResult<Vec<MarketApp>> {
        let apps = self.apps.read().await;
        let mut listed: Vec<MarketApp> = apps.values().cloned().collect();
        listed.sort_by(|left, right| left.id().as_str().cmp(right.id().as_str()));
        Ok(listed)
    }

    async fn save_app(&self, app: MarketApp) -> AppResult<()> {
        self.apps.write().await.insert(app.id().clone(), app);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use aesthub_application::ApplicationCatalog;
    use aesthub_domain::{AppId, AppKind, IntegrationMode, MarketApp, ReviewStatus};

    use super::InMemoryApplicationCatalog;

    fn app(id: &str) -> MarketApp {
        let app_id = AppId::new(id).unwrap_or_else(|_| unreachable!());
        MarketApp::new(
            app_id,
            "AI Facial Diagnostics",
            "Deep-learning facial feature analysis.",
            AppKind::Official,
            "Consultation",
            "Hub Technology Lab",
            IntegrationMode::ApiEmbedded,
        )
        .unwrap_or_else(|_| unreachable!())
    }

    #[tokio::test]
    async fn save_and_find_roundtrip() {
        let catalog = InMemoryApplicationCatalog::new();
        assert!(catalog.save_app(app("app-1")).await.is_ok());

        let app_id = AppId::new("app-1").unwrap_or_else(|_| unreachable!());
        let found = catalog.find_app(&app_id).await;
        assert!(found.is_ok());
        assert!(found.unwrap_or_default().is_some());
    }

    #[tokio::test]
    async fn save_replaces_previous_state() {
        let catalog = InMemoryApplicationCatalog::new();
        assert!(catalog.save_app(app("app-1")).await.is_ok());

        let mut decided = app("app-1");
        assert!(decided.approve(IntegrationMode::ApiEmbedded).is_ok());
        assert!(catalog.save_app(decided).await.is_ok());

        let app_id = AppId::new("app-1").unwrap_or_else(|_| unreachable!());
        let found = catalog.find_app(&app_id).await;
        assert!(found.is_ok());
        let found = found.unwrap_or_default();
        assert!(found.is_some_and(|stored| stored.audit_status() == ReviewStatus::Approved));
    }

    #[tokio::test]
    async fn listing_is_ordered_by_id() {
        let catalog = InMemoryApplicationCatalog::new();
        for id in ["app-xhs", "app-1", "app-video"] {
            assert!(catalog.save_app(app(id)).await.is_ok());
        }

        let listed = catalog.list_apps().await;
        assert!(listed.is_ok());
        let ids: Vec<&str> = listed
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|app| app.id().as_str())
            .collect();
        assert_eq!(ids, vec!["app-1", "app-video", "app-xhs"]);
    }
}
