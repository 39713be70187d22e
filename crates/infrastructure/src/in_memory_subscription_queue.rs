use async_trait::async_trait;
use aesthub_application::SubscriptionQueue;
use aesthub_core::AppResult;
use aesthub_domain::{RequestId, SubscriptionRequest};
use tokio::sync::RwLock;

/// In-memory subscription queue implementation.
///
/// Backed by a vector so listings preserve submission order.
#[derive(Debug, Default)]
pub struct InMemorySubscriptionQueue {
    requests: RwLock<Vec<SubscriptionRequest>>,
}

impl InMemorySubscriptionQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            requests: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SubscriptionQueue for InMemorySubscriptionQueue {
    async fn find(&self, request_id: &RequestId) -> AppResult<Option<SubscriptionRequest>> {
        Ok(self
            .requests
            .read()
            .await
            .iter()
            .find(|request| request.id() == request_id)
            .cloned())
    }

    async fn list(&self) -> AppResult<Vec<SubscriptionRequest>> {
        Ok(self.requests.read().await.clone())
    }

    async fn save(&self, request: SubscriptionRequest) -> AppResult<()> {
        let mut requests = self.requests.write().await;

        if let Some(slot) = requests
            .iter_mut()
            .find(|stored| stored.id() == request.id())
        {
            *slot = request;
        } else {
            requests.push(request);
        }

        Ok(())
    }
}
