//! Development seed data for the in-memory stores.
//!
//! Mirrors the demo data set of the hub console: five roles, one user per
//! role, a marketplace catalog in mixed audit states, and partner records
//! for every review queue.

use std::collections::BTreeSet;
use std::sync::Arc;

use aesthub_application::{
    ApplicationCatalog, InstitutionRegistry, ProviderRegistry, SubscriptionQueue, UserDirectory,
};
use aesthub_core::{AppError, AppResult};
use aesthub_domain::{
    AppId, AppKind, DataScope, EmailAddress, Institution, InstitutionId, InstitutionProfile,
    InstitutionStatus, IntegrationMode, MarketApp, Permission, PhoneNumber, ProviderId,
    RequestId, ReviewStatus, RoleDefinition, RoleId, RoleType, ServiceProvider,
    SubscriptionRequest, User, UserId,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tracing::info;

use crate::{
    InMemoryApplicationCatalog, InMemoryInstitutionRegistry, InMemoryProviderRegistry,
    InMemoryRoleCatalog, InMemorySubscriptionQueue, InMemoryUserDirectory,
};

/// Seed user id for the institution administrator.
pub const SEED_ADMIN_USER_ID: &str = "u1";

/// Fully seeded in-memory stores, ready to back the application services.
pub struct SeedStores {
    /// Fixed role catalog.
    pub role_catalog: Arc<InMemoryRoleCatalog>,
    /// Mutable user directory.
    pub user_directory: Arc<InMemoryUserDirectory>,
    /// Marketplace application catalog.
    pub app_catalog: Arc<InMemoryApplicationCatalog>,
    /// Institution registry.
    pub institutions: Arc<InMemoryInstitutionRegistry>,
    /// Provider registry.
    pub providers: Arc<InMemoryProviderRegistry>,
    /// Staff subscription queue.
    pub subscriptions: Arc<InMemorySubscriptionQueue>,
}

/// Builds and populates every in-memory store with the demo data set.
pub async fn seed_stores() -> AppResult<SeedStores> {
    let role_catalog = Arc::new(InMemoryRoleCatalog::new(seed_roles()?)?);

    let user_directory = Arc::new(InMemoryUserDirectory::new());
    let users = seed_users()?;
    let user_count = users.len();
    for user in users {
        user_directory.insert(user).await?;
    }

    let app_catalog = Arc::new(InMemoryApplicationCatalog::new());
    let apps = seed_apps()?;
    let app_count = apps.len();
    for app in apps {
        app_catalog.save_app(app).await?;
    }

    let institutions = Arc::new(InMemoryInstitutionRegistry::new());
    for institution in seed_institutions()? {
        institutions.save(institution).await?;
    }

    let providers = Arc::new(InMemoryProviderRegistry::new());
    for provider in seed_providers()? {
        providers.save(provider).await?;
    }

    let subscriptions = Arc::new(InMemorySubscriptionQueue::new());
    for request in seed_subscription_requests()? {
        subscriptions.save(request).await?;
    }

    info!(
        users = user_count,
        apps = app_count,
        "development seed completed"
    );

    Ok(SeedStores {
        role_catalog,
        user_directory,
        app_catalog,
        institutions,
        providers,
        subscriptions,
    })
}

fn seed_roles() -> AppResult<Vec<RoleDefinition>> {
    Ok(vec![
        role(
            "role-admin",
            "Institution Admin",
            "Full institution access including staff and finance management.",
            RoleType::Admin,
            &[
                Permission::ManageAccount,
                Permission::ViewFinance,
                Permission::ManageData,
                Permission::ViewData,
            ],
            &["app-1", "app-2", "app-3", "app-4"],
        )?,
        role(
            "role-doctor",
            "Consultant",
            "Aesthetic design, consultation and treatment planning.",
            RoleType::Staff,
            &[Permission::ViewData],
            &["app-1", "app-2", "app-3"],
        )?,
        role(
            "role-individual",
            "Personal Account",
            "Independent practitioner or standalone user.",
            RoleType::Individual,
            &[Permission::ViewData, Permission::ViewFinance],
            &["app-1"],
        )?,
        role(
            "role-provider",
            "Service Provider",
            "Application developer managing listings and revenue.",
            RoleType::ServiceProvider,
            &[Permission::ViewFinance],
            &[],
        )?,
        role(
            "role-platform",
            "Platform Operator",
            "Platform-side administrator reviewing apps and institutions.",
            RoleType::PlatformAdmin,
            &[
                Permission::ManageAccount,
                Permission::ViewFinance,
                Permission::ManageData,
            ],
            &[],
        )?,
    ])
}

fn seed_users() -> AppResult<Vec<User>> {
    let mut consultant = user(
        "u2",
        "Li Wen",
        "13800000002",
        "role-doctor",
        DataScope::Assigned,
    )?;
    consultant.grant_extra_app(AppId::new("app-4")?);
    consultant.grant_extra_permission(Permission::ManageData);

    Ok(vec![
        user(
            SEED_ADMIN_USER_ID,
            "Grace Zhang",
            "13800000001",
            "role-admin",
            DataScope::All,
        )?,
        consultant,
        user(
            "u4",
            "Dr. Chen",
            "13800000004",
            "role-individual",
            DataScope::Assigned,
        )?,
        user(
            "u5",
            "VideoAI Tech",
            "13800000005",
            "role-provider",
            DataScope::Assigned,
        )?,
        user(
            "u6",
            "Platform Operations",
            "13800000006",
            "role-platform",
            DataScope::All,
        )?,
    ])
}

fn seed_apps() -> AppResult<Vec<MarketApp>> {
    Ok(vec![
        listed_app(
            "app-1",
            "AI Facial Diagnostics",
            "Deep-learning facial analysis generating treatment proposals.",
            AppKind::Official,
            "Consultation",
            "Hub Technology Lab",
            IntegrationMode::ApiEmbedded,
        )?,
        listed_app(
            "app-2",
            "SCRM Assistant",
            "Customer segmentation and automated follow-up scripting.",
            AppKind::Official,
            "Operations",
            "Hub Data Center",
            IntegrationMode::ApiEmbedded,
        )?,
        listed_app(
            "app-3",
            "3D Body Simulator",
            "Body contouring previews for liposuction and augmentation.",
            AppKind::ThirdParty,
            "Consultation",
            "Crisalix",
            IntegrationMode::ExternalLink,
        )?,
        listed_app(
            "app-4",
            "Post-op AI Companion",
            "Around-the-clock aftercare answers with risk escalation.",
            AppKind::ThirdParty,
            "Aftercare",
            "CareAI Tech",
            IntegrationMode::ApiEmbedded,
        )?,
        listed_app(
            "app-xhs",
            "Social Seeding Copywriter",
            "Generates compliant social-media posts from case photos.",
            AppKind::Official,
            "Lead Generation",
            "Hub Marketing Lab",
            IntegrationMode::ApiEmbedded,
        )?,
        MarketApp::new(
            AppId::new("app-video")?,
            "Short Video Script Engine",
            "Spoken-word scripts tuned for completion rate.",
            AppKind::ThirdParty,
            "Lead Generation",
            "VideoAI Tech",
            IntegrationMode::ApiEmbedded,
        )?,
        MarketApp::new(
            AppId::new("app-schedule")?,
            "Smart Scheduling Assistant",
            "Doctor and surgery-room rosters from booking forecasts.",
            AppKind::ThirdParty,
            "Operations",
            "EffiSchedule",
            IntegrationMode::PureApi,
        )?,
        rejected_app(
            "app-record",
            "Treatment Record AI Scribe",
            "Voice-to-text surgical records in standardized terminology.",
            AppKind::Official,
            "Treatment",
            "Hub Technology Lab",
        )?,
    ])
}

fn seed_institutions() -> AppResult<Vec<Institution>> {
    Ok(vec![
        institution(
            "inst-1",
            "Chengdu Huamei Medical Aesthetics Hospital",
            "Director Wang",
            "13800138000",
            "Chengdu",
            InstitutionStatus::Active,
            date(2023, 1, 15)?,
        )?,
        institution(
            "inst-2",
            "Shanghai Ninth People's Hospital (Plastic Surgery)",
            "Director Li",
            "13911112222",
            "Shanghai",
            InstitutionStatus::Active,
            date(2023, 3, 22)?,
        )?,
        institution(
            "inst-3",
            "Beijing Lidu Medical Aesthetics Hospital",
            "Manager Zhang",
            "13788889999",
            "Beijing",
            InstitutionStatus::Pending,
            date(2023, 10, 25)?,
        )?,
        institution(
            "inst-4",
            "Shenzhen Meilai Medical Aesthetics",
            "Manager Chen",
            "13666667777",
            "Shenzhen",
            InstitutionStatus::Active,
            date(2023, 5, 10)?,
        )?,
    ])
}

fn seed_providers() -> AppResult<Vec<ServiceProvider>> {
    Ok(vec![
        provider(
            "sp-1",
            "VideoAI Tech",
            "Zhou Jie",
            "18600001111",
            "contact@videoai.com",
            "Short-video content generation serving over 500 agencies.",
            ReviewStatus::Approved,
            date(2023, 9, 1)?,
        )?,
        provider(
            "sp-2",
            "Crisalix",
            "David Lee",
            "13500002222",
            "support@crisalix.cn",
            "Leading 3D aesthetic simulation imaging technology.",
            ReviewStatus::Approved,
            date(2023, 8, 15)?,
        )?,
        provider(
            "sp-3",
            "EffiSchedule",
            "Liu Min",
            "13900003333",
            "hi@effischedule.io",
            "Intelligent medical scheduling and resource optimization.",
            ReviewStatus::Pending,
            date(2023, 10, 20)?,
        )?,
        provider(
            "sp-4",
            "CareAI Tech",
            "Zhang Wei",
            "13700004444",
            "bd@careai.com",
            "Large-model aftercare and complication early warning.",
            ReviewStatus::Approved,
            date(2023, 9, 10)?,
        )?,
    ])
}

fn seed_subscription_requests() -> AppResult<Vec<SubscriptionRequest>> {
    let pending = SubscriptionRequest::new(
        RequestId::new("req-1")?,
        UserId::new("u2")?,
        AppId::new("app-xhs")?,
        datetime(2023, 10, 26, 9, 30)?,
    );

    let mut approved = SubscriptionRequest::new(
        RequestId::new("req-2")?,
        UserId::new("u2")?,
        AppId::new("app-video")?,
        datetime(2023, 10, 25, 14, 20)?,
    );
    approved.approve()?;

    Ok(vec![pending, approved])
}

fn role(
    id: &str,
    name: &str,
    description: &str,
    role_type: RoleType,
    permissions: &[Permission],
    app_ids: &[&str],
) -> AppResult<RoleDefinition> {
    let base_app_ids = app_ids
        .iter()
        .map(|app_id| AppId::new(*app_id))
        .collect::<AppResult<BTreeSet<AppId>>>()?;

    RoleDefinition::new(
        RoleId::new(id)?,
        name,
        description,
        role_type,
        permissions.iter().copied().collect(),
        base_app_ids,
    )
}

fn user(
    id: &str,
    name: &str,
    phone: &str,
    role_id: &str,
    data_scope: DataScope,
) -> AppResult<User> {
    User::new(
        UserId::new(id)?,
        name,
        Some(PhoneNumber::new(phone)?),
        RoleId::new(role_id)?,
        data_scope,
    )
}

fn listed_app(
    id: &str,
    name: &str,
    description: &str,
    kind: AppKind,
    category: &str,
    provider_name: &str,
    integration: IntegrationMode,
) -> AppResult<MarketApp> {
    let mut app = MarketApp::new(
        AppId::new(id)?,
        name,
        description,
        kind,
        category,
        provider_name,
        integration,
    )?;
    app.approve(integration)?;
    Ok(app)
}

fn rejected_app(
    id: &str,
    name: &str,
    description: &str,
    kind: AppKind,
    category: &str,
    provider_name: &str,
) -> AppResult<MarketApp> {
    let mut app = MarketApp::new(
        AppId::new(id)?,
        name,
        description,
        kind,
        category,
        provider_name,
        IntegrationMode::ApiEmbedded,
    )?;
    app.reject()?;
    Ok(app)
}

fn institution(
    id: &str,
    name: &str,
    contact_person: &str,
    phone: &str,
    city: &str,
    status: InstitutionStatus,
    joined_on: NaiveDate,
) -> AppResult<Institution> {
    Ok(Institution::new(
        InstitutionId::new(id)?,
        InstitutionProfile::new(name, contact_person, PhoneNumber::new(phone)?, city)?,
        status,
        joined_on,
    ))
}

#[allow(clippy::too_many_arguments)]
fn provider(
    id: &str,
    name: &str,
    contact_person: &str,
    phone: &str,
    email: &str,
    description: &str,
    status: ReviewStatus,
    joined_on: NaiveDate,
) -> AppResult<ServiceProvider> {
    ServiceProvider::new(
        ProviderId::new(id)?,
        name,
        contact_person,
        PhoneNumber::new(phone)?,
        EmailAddress::new(email)?,
        description,
        status,
        joined_on,
    )
}

fn date(year: i32, month: u32, day: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        AppError::Internal(format!("invalid seed date {year:04}-{month:02}-{day:02}"))
    })
}

fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> AppResult<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .ok_or_else(|| {
            AppError::Internal(format!(
                "invalid seed timestamp {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}"
            ))
        })
}

#[cfg(test)]
mod tests {
    use aesthub_application::{
        AccessService, ApplicationCatalog, InstitutionRegistry, ProviderRegistry, UserDirectory,
    };
    use aesthub_domain::{InstitutionStatus, Permission, ReviewStatus, RoleType};

    use super::seed_stores;

    #[tokio::test]
    async fn every_seeded_user_resolves_a_role() {
        let stores = seed_stores().await;
        assert!(stores.is_ok());
        let stores = stores.unwrap_or_else(|_| unreachable!());

        let access = AccessService::new(stores.role_catalog.clone());
        let users = stores.user_directory.list().await;
        assert!(users.is_ok());
        let users = users.unwrap_or_default();
        assert_eq!(users.len(), 5);

        for user in &users {
            let role = access.resolve_role(user).await;
            assert!(role.is_ok());
        }
    }

    #[tokio::test]
    async fn consultant_supplements_survive_seeding() {
        let stores = seed_stores().await;
        assert!(stores.is_ok());
        let stores = stores.unwrap_or_else(|_| unreachable!());

        let access = AccessService::new(stores.role_catalog.clone());
        let users = stores.user_directory.list().await;
        assert!(users.is_ok());
        let users = users.unwrap_or_default();
        let consultant = users.iter().find(|user| user.id().as_str() == "u2");
        assert!(consultant.is_some());
        let Some(consultant) = consultant else {
            unreachable!();
        };

        let role = access.resolve_role(consultant).await;
        assert!(role.is_ok());
        assert_eq!(
            role.unwrap_or_else(|_| unreachable!()).role_type(),
            RoleType::Staff
        );

        let holds = access
            .has_permission(consultant, Permission::ManageData)
            .await;
        assert!(holds.is_ok());
        assert!(holds.unwrap_or(false));
    }

    #[tokio::test]
    async fn review_queues_carry_the_expected_pending_entries() {
        let stores = seed_stores().await;
        assert!(stores.is_ok());
        let stores = stores.unwrap_or_else(|_| unreachable!());

        let apps = stores.app_catalog.list_apps().await;
        assert!(apps.is_ok());
        let pending_apps = apps
            .unwrap_or_default()
            .into_iter()
            .filter(|app| app.audit_status() == ReviewStatus::Pending)
            .count();
        assert_eq!(pending_apps, 2);

        let providers = stores.providers.list().await;
        assert!(providers.is_ok());
        let pending_providers = providers
            .unwrap_or_default()
            .into_iter()
            .filter(|provider| provider.status() == ReviewStatus::Pending)
            .count();
        assert_eq!(pending_providers, 1);

        let institutions = stores.institutions.list().await;
        assert!(institutions.is_ok());
        let pending_institutions = institutions
            .unwrap_or_default()
            .into_iter()
            .filter(|institution| institution.status() == InstitutionStatus::Pending)
            .count();
        assert_eq!(pending_institutions, 1);
    }
}
