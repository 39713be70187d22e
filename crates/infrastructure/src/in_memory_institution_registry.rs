use std::collections::HashMap;

use async_trait::async_trait;
use aesthub_application::InstitutionRegistry;
use aesthub_core::AppResult;
use aesthub_domain::{Institution, InstitutionId};
use tokio::sync::RwLock;

/// In-memory institution registry implementation.
#[derive(Debug, Default)]
pub struct InMemoryInstitutionRegistry {
    institutions: RwLock<HashMap<InstitutionId, Institution>>,
}

impl InMemoryInstitutionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            institutions: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl InstitutionRegistry for InMemoryInstitutionRegistry {
    async fn find(&self, institution_id: &InstitutionId) -> AppResult<Option<Institution>> {
        Ok(self.institutions.read().await.get(institution_id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Institution>> {
        let institutions = self.institutions.read().await;
        let mut listed: Vec<Institution> = institutions.values().cloned().collect();
        listed.sort_by(|left, right| left.id().as_str().cmp(right.id().as_str()));
        Ok(listed)
    }

    async fn save(&self, institution: Institution) -> AppResult<()> {
        self.institutions
            .write()
            .await
            .insert(institution.id().clone(), institution);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use aesthub_application::InstitutionRegistry;
    use aesthub_domain::{
        Institution, InstitutionId, InstitutionProfile, InstitutionStatus, PhoneNumber,
    };
    use chrono::NaiveDate;

    use super::InMemoryInstitutionRegistry;

    fn institution(id: &str, status: InstitutionStatus) -> Institution {
        let institution_id = InstitutionId::new(id).unwrap_or_else(|_| unreachable!());
        let profile = InstitutionProfile::new(
            "Chengdu Huamei Clinic",
            "Director Wang",
            PhoneNumber::new("13800138000").unwrap_or_else(|_| unreachable!()),
            "Chengdu",
        )
        .unwrap_or_else(|_| unreachable!());
        Institution::new(
            institution_id,
            profile,
            status,
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap_or_default(),
        )
    }

    #[tokio::test]
    async fn save_and_find_roundtrip() {
        let registry = InMemoryInstitutionRegistry::new();
        assert!(
            registry
                .save(institution("inst-1", InstitutionStatus::Active))
                .await
                .is_ok()
        );

        let institution_id = InstitutionId::new("inst-1").unwrap_or_else(|_| unreachable!());
        let found = registry.find(&institution_id).await;
        assert!(found.is_ok());
        let found = found.unwrap_or_default();
        assert!(found.is_some_and(|stored| stored.status() == InstitutionStatus::Active));
    }

    #[tokio::test]
    async fn save_replaces_previous_state() {
        let registry = InMemoryInstitutionRegistry::new();
        assert!(
            registry
                .save(institution("inst-3", InstitutionStatus::Pending))
                .await
                .is_ok()
        );

        let mut decided = institution("inst-3", InstitutionStatus::Pending);
        assert!(decided.approve().is_ok());
        assert!(registry.save(decided).await.is_ok());

        let institution_id = InstitutionId::new("inst-3").unwrap_or_else(|_| unreachable!());
        let found = registry.find(&institution_id).await;
        assert!(found.is_ok());
        let found = found.unwrap_or_default();
        assert!(found.is_some_and(|stored| stored.status() == InstitutionStatus::Active));
    }
}
