use async_trait::async_trait;
use aesthub_application::UserDirectory;
use aesthub_core::{AppError, AppResult};
use aesthub_domain::{PhoneNumber, User, UserId};
use tokio::sync::RwLock;

/// In-memory user directory implementation.
///
/// Backed by a vector so listings preserve insertion order, matching the
/// append-only registration flow.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_id(&self, user_id: &UserId) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|user| user.id() == user_id)
            .cloned())
    }

    async fn find_by_phone(&self, phone: &PhoneNumber) -> AppResult<Vec<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .filter(|user| user.phone() == Some(phone))
            .cloned()
            .collect())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn insert(&self, user: User) -> AppResult<()> {
        let mut users = self.users.write().await;

        if users.iter().any(|stored| stored.id() == user.id()) {
            return Err(AppError::Conflict(format!(
                "user '{}' already exists",
                user.id()
            )));
        }

        users.push(user);
        Ok(())
    }

    async fn update(&self, user: User) -> AppResult<()> {
        let mut users = self.users.write().await;

        let Some(slot) = users.iter_mut().find(|stored| stored.id() == user.id()) else {
            return Err(AppError::NotFound(format!(
                "user '{}' does not exist",
                user.id()
            )));
        };

        *slot = user;
        Ok(())
    }
}
